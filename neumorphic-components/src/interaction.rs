//! Press, click and drag tracking shared by interactive components.
//!
//! ## Usage
//!
//! Keep an [`InteractionState`] in a [`State`] owned by the caller and feed it
//! the component's input with [`handle_click`] or [`handle_horizontal_drag`].

use neumorphic_ui::{CursorEventContent, InputHandlerInput, Px, PxPosition, State};
use tracing::debug;

/// Pointer state of one interactive component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    is_pressed: bool,
    is_dragged: bool,
    last_position: Option<PxPosition>,
}

impl InteractionState {
    /// Creates a new interaction state with all flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a press that started inside is still held.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Returns whether a horizontal drag is in progress.
    pub fn is_dragged(&self) -> bool {
        self.is_dragged
    }

    /// Marks the component as no longer pressed or dragged.
    pub fn release(&mut self) {
        self.is_pressed = false;
        self.is_dragged = false;
        self.last_position = None;
    }
}

/// Tracks presses and calls `on_click` once for every release inside the
/// component that follows a press inside it.
///
/// Returns the number of clicks. Events are blocked from reaching components
/// underneath as soon as this component reacts to any of them.
pub fn handle_click(
    input: &mut InputHandlerInput<'_>,
    state: &State<InteractionState>,
    mut on_click: impl FnMut(),
) -> usize {
    let mut clicks = 0;
    let mut handled = false;
    for event in input.cursor_events.iter() {
        let inside = input.contains(event.position);
        match event.content {
            CursorEventContent::Pressed if inside => {
                state.with_mut(|state| state.is_pressed = true);
                handled = true;
            }
            CursorEventContent::Released => {
                let was_pressed = state.with(InteractionState::is_pressed);
                if was_pressed {
                    state.with_mut(InteractionState::release);
                    handled = true;
                    if inside {
                        clicks += 1;
                    }
                }
            }
            _ => {}
        }
    }
    if handled {
        input.block_cursor();
    }
    for _ in 0..clicks {
        on_click();
    }
    if clicks > 0 {
        debug!(clicks, "click handled");
    }
    clicks
}

/// Tracks a horizontal drag that starts with a press inside the component and
/// calls `on_delta` with the horizontal movement of every subsequent move.
///
/// The drag keeps tracking outside the bounds until the pointer is released.
pub fn handle_horizontal_drag(
    input: &mut InputHandlerInput<'_>,
    state: &State<InteractionState>,
    mut on_delta: impl FnMut(Px),
) {
    let mut handled = false;
    for event in input.cursor_events.iter() {
        match event.content {
            CursorEventContent::Pressed if input.contains(event.position) => {
                state.with_mut(|state| {
                    state.is_pressed = true;
                    state.is_dragged = true;
                    state.last_position = Some(event.position);
                });
                handled = true;
            }
            CursorEventContent::Moved => {
                let delta = state.with_mut(|state| {
                    let last = state.last_position.filter(|_| state.is_dragged)?;
                    state.last_position = Some(event.position);
                    Some(event.position.x - last.x)
                });
                if let Some(delta) = delta {
                    handled = true;
                    if delta != Px::ZERO {
                        on_delta(delta);
                    }
                }
            }
            CursorEventContent::Released => {
                if state.with(InteractionState::is_dragged) {
                    state.with_mut(InteractionState::release);
                    handled = true;
                }
            }
            CursorEventContent::Pressed => {}
        }
    }
    if handled {
        input.block_cursor();
    }
}

#[cfg(test)]
mod tests {
    use neumorphic_ui::{ComputedData, CursorEvent, Density, LayoutDirection, PxSize, TextEdit};

    use super::*;

    fn at(x: i32, y: i32) -> PxPosition {
        PxPosition::new(Px(x), Px(y))
    }

    fn with_input<R>(
        events: &mut Vec<CursorEvent>,
        f: impl FnOnce(&mut InputHandlerInput<'_>) -> R,
    ) -> R {
        let mut edits: Vec<TextEdit> = Vec::new();
        let mut input = InputHandlerInput::new(
            ComputedData::new(PxSize::new(Px(100), Px(40))),
            Density::ONE,
            LayoutDirection::Ltr,
            events,
            &mut edits,
        );
        f(&mut input)
    }

    #[test]
    fn press_then_release_inside_clicks_once() {
        let state = State::new(InteractionState::new());
        let mut events = vec![
            CursorEvent::pressed(at(10, 10)),
            CursorEvent::released(at(12, 10)),
        ];
        let mut count = 0;
        let clicks = with_input(&mut events, |input| {
            handle_click(input, &state, || count += 1)
        });
        assert_eq!((clicks, count), (1, 1));
        assert!(events.is_empty());
        assert!(!state.with(InteractionState::is_pressed));
    }

    #[test]
    fn release_outside_cancels() {
        let state = State::new(InteractionState::new());
        let mut events = vec![
            CursorEvent::pressed(at(10, 10)),
            CursorEvent::released(at(150, 10)),
        ];
        let clicks = with_input(&mut events, |input| handle_click(input, &state, || {}));
        assert_eq!(clicks, 0);
        assert!(!state.with(InteractionState::is_pressed));
    }

    #[test]
    fn press_can_span_dispatches() {
        let state = State::new(InteractionState::new());
        let mut press = vec![CursorEvent::pressed(at(5, 5))];
        with_input(&mut press, |input| handle_click(input, &state, || {}));
        assert!(state.with(InteractionState::is_pressed));

        let mut release = vec![CursorEvent::released(at(5, 5))];
        let clicks = with_input(&mut release, |input| handle_click(input, &state, || {}));
        assert_eq!(clicks, 1);
    }

    #[test]
    fn events_outside_pass_through() {
        let state = State::new(InteractionState::new());
        let mut events = vec![
            CursorEvent::pressed(at(-5, 5)),
            CursorEvent::released(at(-5, 5)),
        ];
        with_input(&mut events, |input| handle_click(input, &state, || {}));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn drag_reports_horizontal_deltas() {
        let state = State::new(InteractionState::new());
        let mut events = vec![
            CursorEvent::pressed(at(10, 20)),
            CursorEvent::moved(at(30, 25)),
            CursorEvent::moved(at(160, 90)),
            CursorEvent::released(at(160, 90)),
            CursorEvent::moved(at(0, 0)),
        ];
        let mut deltas = Vec::new();
        with_input(&mut events, |input| {
            handle_horizontal_drag(input, &state, |delta| deltas.push(delta))
        });
        assert_eq!(deltas, vec![Px(20), Px(130)]);
        assert!(!state.with(InteractionState::is_dragged));
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let state = State::new(InteractionState::new());
        let mut events = vec![
            CursorEvent::moved(at(10, 10)),
            CursorEvent::moved(at(20, 10)),
        ];
        let mut called = false;
        with_input(&mut events, |input| {
            handle_horizontal_drag(input, &state, |_| called = true)
        });
        assert!(!called);
        assert_eq!(events.len(), 2);
    }
}
