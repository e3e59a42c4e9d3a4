//! Pointer and text input delivered to components.
//!
//! Input is dispatched top-down through the tree. Each component sees event
//! positions relative to its own top-left corner; containers forward events to
//! their children with [`InputHandlerInput::child`], which translates the
//! positions in place. A component that reacts to an event stops it from
//! reaching components below it by calling
//! [`InputHandlerInput::block_cursor`].

use crate::{ComputedData, Density, Px, PxPosition, PxRect, layout::LayoutDirection};

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorEvent {
    /// Pointer position, relative to the receiving component.
    pub position: PxPosition,
    /// What happened.
    pub content: CursorEventContent,
}

impl CursorEvent {
    /// A press at `position`.
    pub fn pressed(position: PxPosition) -> Self {
        Self {
            position,
            content: CursorEventContent::Pressed,
        }
    }

    /// A move to `position`.
    pub fn moved(position: PxPosition) -> Self {
        Self {
            position,
            content: CursorEventContent::Moved,
        }
    }

    /// A release at `position`.
    pub fn released(position: PxPosition) -> Self {
        Self {
            position,
            content: CursorEventContent::Released,
        }
    }
}

/// Kinds of pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorEventContent {
    /// A button or touch point went down.
    Pressed,
    /// The pointer moved.
    Moved,
    /// A button or touch point went up.
    Released,
}

/// A committed text edit, as produced by a keyboard or an input method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    /// Inserts text at the caret.
    Insert(String),
    /// Deletes the grapheme before the caret.
    Backspace,
    /// Deletes the grapheme after the caret.
    Delete,
    /// Moves the caret one grapheme to the left.
    MoveLeft,
    /// Moves the caret one grapheme to the right.
    MoveRight,
}

/// Input visible to a component during [`crate::Component::handle_input`].
pub struct InputHandlerInput<'a> {
    /// The component's measured size.
    pub computed_data: ComputedData,
    /// Surface density.
    pub density: Density,
    /// Reading direction.
    pub layout_direction: LayoutDirection,
    /// Pending pointer events, relative to this component.
    pub cursor_events: &'a mut Vec<CursorEvent>,
    /// Pending text edits. Only a focused editor should consume them.
    pub text_edits: &'a mut Vec<TextEdit>,
}

impl<'a> InputHandlerInput<'a> {
    /// Creates the input for a root component.
    pub fn new(
        computed_data: ComputedData,
        density: Density,
        layout_direction: LayoutDirection,
        cursor_events: &'a mut Vec<CursorEvent>,
        text_edits: &'a mut Vec<TextEdit>,
    ) -> Self {
        Self {
            computed_data,
            density,
            layout_direction,
            cursor_events,
            text_edits,
        }
    }

    /// Returns whether `position` lies inside this component.
    pub fn contains(&self, position: PxPosition) -> bool {
        PxRect::from_position_size(PxPosition::ZERO, self.computed_data.size()).contains(position)
    }

    /// Stops all pending pointer events from propagating further.
    pub fn block_cursor(&mut self) {
        self.cursor_events.clear();
    }

    /// Stops all pending text edits from propagating further.
    pub fn block_text_edits(&mut self) {
        self.text_edits.clear();
    }

    /// Runs `f` with input scoped to a child placed at `rect`.
    ///
    /// Pointer positions are translated into the child's space for the
    /// duration of the call. Events the child blocks stay blocked for the
    /// parent as well.
    pub fn child<R>(&mut self, rect: PxRect, f: impl FnOnce(&mut InputHandlerInput<'_>) -> R) -> R {
        let offset = rect.position();
        shift(self.cursor_events, -offset.x, -offset.y);
        let result = {
            let mut child = InputHandlerInput {
                computed_data: ComputedData::new(rect.size()),
                density: self.density,
                layout_direction: self.layout_direction,
                cursor_events: &mut *self.cursor_events,
                text_edits: &mut *self.text_edits,
            };
            f(&mut child)
        };
        shift(self.cursor_events, offset.x, offset.y);
        result
    }
}

fn shift(events: &mut [CursorEvent], dx: Px, dy: Px) {
    for event in events {
        event.position = event.position.offset(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_sees_translated_positions() {
        let mut events = vec![CursorEvent::pressed(PxPosition::new(Px(30), Px(40)))];
        let mut edits = Vec::new();
        let mut input = InputHandlerInput::new(
            ComputedData::new(crate::PxSize::new(Px(100), Px(100))),
            Density::ONE,
            LayoutDirection::Ltr,
            &mut events,
            &mut edits,
        );

        let seen = input.child(PxRect::new(Px(20), Px(20), Px(20), Px(30)), |child| {
            let position = child.cursor_events[0].position;
            (position, child.contains(position))
        });
        assert_eq!(seen, (PxPosition::new(Px(10), Px(20)), true));
        assert_eq!(
            input.cursor_events[0].position,
            PxPosition::new(Px(30), Px(40))
        );
    }

    #[test]
    fn blocking_in_child_clears_parent_events() {
        let mut events = vec![CursorEvent::released(PxPosition::ZERO)];
        let mut edits = vec![TextEdit::Backspace];
        let mut input = InputHandlerInput::new(
            ComputedData::ZERO,
            Density::ONE,
            LayoutDirection::Ltr,
            &mut events,
            &mut edits,
        );
        input.child(PxRect::ZERO, |child| {
            child.block_cursor();
            child.block_text_edits();
        });
        assert!(input.cursor_events.is_empty());
        assert!(input.text_edits.is_empty());
    }
}
