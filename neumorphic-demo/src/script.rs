//! Scripted taps and drags replayed against the showcase before rendering.

use neumorphic_ui::{
    CursorEvent, Density, Frame, LayoutDirection, Px, PxPosition, PxRect, PxSize, State, TextEdit,
};
use tracing::{debug, info};

use crate::{
    DemoError, anchor::LayoutCanvas, app_state::AppState, screen::Screen, showcase::showcase_screen,
};

/// Text typed into the first text field.
pub const TYPED_TEXT: &str = "Hello, neumorphism";
/// How far the first slider is dragged, as a fraction of its width.
pub const SLIDER_DRAG: f32 = 0.25;
const DRAG_STEPS: i32 = 5;

/// State of the scripted controls once the script has run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptReport {
    pub switch_checked: bool,
    pub slider_value: f32,
    pub text: String,
}

struct Stage {
    frame: Frame,
    screen: Screen,
}

/// Rebuilds the tree from `state` on a frame tall enough to hold all of it,
/// then records it once so every anchor is placed.
fn stage(state: &AppState, width: Px, density: Density, direction: LayoutDirection) -> Stage {
    let screen = showcase_screen(state, Px::ZERO);
    let height = screen.content_size(width, density, direction).height;
    let frame =
        Frame::new(PxSize::new(width, height), density).with_layout_direction(direction);
    frame.render(&screen, &mut LayoutCanvas::new());
    Stage { frame, screen }
}

fn locate(anchor: &State<Option<PxRect>>, name: &'static str) -> Result<PxRect, DemoError> {
    anchor.get().ok_or(DemoError::MissingControl(name))
}

fn center(rect: PxRect) -> PxPosition {
    PxPosition::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn tap(position: PxPosition) -> Vec<CursorEvent> {
    vec![CursorEvent::pressed(position), CursorEvent::released(position)]
}

fn deliver(stage: &Stage, events: Vec<CursorEvent>, edits: Vec<TextEdit>) {
    let (events, edits) = stage.frame.dispatch(&stage.screen, events, edits);
    if !events.is_empty() || !edits.is_empty() {
        debug!(
            cursor_events = events.len(),
            text_edits = edits.len(),
            "scripted input left unconsumed"
        );
    }
}

/// Toggles the first switch, drags the first slider and types into the first
/// text field.
pub fn play(
    state: &AppState,
    width: Px,
    density: Density,
    direction: LayoutDirection,
) -> Result<ScriptReport, DemoError> {
    let switch = stage(state, width, density, direction);
    let rect = locate(&state.anchors.switch, "switch")?;
    deliver(&switch, tap(center(rect)), Vec::new());
    info!(checked = state.switch.value.get(), "toggled the first switch");

    let slider = stage(state, width, density, direction);
    let rect = locate(&state.anchors.slider, "slider")?;
    let start = center(rect);
    let sign = match direction {
        LayoutDirection::Ltr => 1,
        LayoutDirection::Rtl => -1,
    };
    let distance = rect.width.mul_f32(SLIDER_DRAG) * sign;
    let mut events = vec![CursorEvent::pressed(start)];
    events.extend((1..=DRAG_STEPS).map(|step| {
        CursorEvent::moved(start.offset(distance * step / DRAG_STEPS, Px::ZERO))
    }));
    events.push(CursorEvent::released(start.offset(distance, Px::ZERO)));
    deliver(&slider, events, Vec::new());
    info!(value = state.slider.value.get(), "dragged the first slider");

    let text_field = stage(state, width, density, direction);
    let rect = locate(&state.anchors.text_field, "text field")?;
    deliver(
        &text_field,
        tap(center(rect)),
        vec![TextEdit::Insert(TYPED_TEXT.to_owned())],
    );
    info!(text = %state.text_field.value.get(), "typed into the first text field");

    Ok(ScriptReport {
        switch_checked: state.switch.value.get(),
        slider_value: state.slider.value.get(),
        text: state.text_field.value.get(),
    })
}
