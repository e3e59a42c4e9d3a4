use neumorphic_components::{interaction::InteractionState, text_edit_core::TextEditorState};
use neumorphic_ui::{PxRect, State};

/// Value and input tracking of one interactive control.
pub struct ControlState<T> {
    pub value: State<T>,
    pub interaction: State<InteractionState>,
}

impl<T> ControlState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: State::new(value),
            interaction: State::default(),
        }
    }
}

/// A text field's value, focus and caret.
pub struct TextFieldState {
    pub value: State<String>,
    pub editor: State<TextEditorState>,
    pub interaction: State<InteractionState>,
}

impl TextFieldState {
    pub fn new() -> Self {
        Self {
            value: State::new(String::new()),
            editor: State::default(),
            interaction: State::default(),
        }
    }
}

/// Where the scripted controls landed during the last recorded frame.
#[derive(Default)]
pub struct Anchors {
    pub switch: State<Option<PxRect>>,
    pub slider: State<Option<PxRect>>,
    pub text_field: State<Option<PxRect>>,
}

/// Everything the showcase keeps across rebuilt component trees.
pub struct AppState {
    pub switch: ControlState<bool>,
    pub circle_switch: ControlState<bool>,
    pub slider: ControlState<f32>,
    pub circle_slider: ControlState<f32>,
    pub text_field: TextFieldState,
    pub circle_text_field: TextFieldState,
    pub button_clicks: State<usize>,
    pub popup_dismissals: State<usize>,
    pub anchors: Anchors,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            switch: ControlState::new(false),
            circle_switch: ControlState::new(true),
            slider: ControlState::new(0.5),
            circle_slider: ControlState::new(0.2),
            text_field: TextFieldState::new(),
            circle_text_field: TextFieldState::new(),
            button_clicks: State::new(0),
            popup_dismissals: State::new(0),
            anchors: Anchors::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
