//! A single-line text field on an inset surface.
//!
//! ## Usage
//!
//! Collect short text input. Clicking the field focuses it; while focused it
//! consumes committed [`TextEdit`]s and reports the edited text through
//! `on_value_change`. Pressing anywhere outside drops focus.

use derive_setters::Setters;
use neumorphic_ui::{
    CallbackWith, Color, Component, ComputedData, Constraint, CursorEventContent, Density, Dp,
    DrawScope, InputHandlerInput, LayoutDirection, Length, MeasureInput, Px, PxSize, State,
    TextEdit,
    outline::{Outline, Rect},
    paint::Paint,
};
use tracing::debug;

use crate::{
    alignment::Alignment,
    interaction::{InteractionState, handle_click},
    neumorphic::{NeumorphicDefaults, NeumorphicStyle, Orientation, neumorphic_surface},
    shape_def::Shape,
    text::{Text, TextArgs, TextDefaults, TextMetrics},
    text_edit_core::{TextEditorState, apply_edit},
    theme::NeumorphicColors,
};

/// Defaults for [`TextFieldArgs`].
pub struct TextFieldDefaults;

impl TextFieldDefaults {
    /// Field height.
    pub const HEIGHT: Dp = Dp(48.0);
    /// Field shape.
    pub const SHAPE: Shape = Shape::rounded(Dp(12.0));
    /// Content padding, also the shadow blur and offset.
    pub const CONTENT_PADDING: Dp = Dp(20.0);
    /// Horizontal padding around the text.
    pub const TEXT_PADDING: Dp = Dp(16.0);
    /// Caret thickness.
    pub const CARET_WIDTH: Dp = Dp(2.0);
}

/// Arguments for [`TextField`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct TextFieldArgs {
    /// Current text.
    #[setters(into)]
    pub value: String,
    /// Shown while the text is empty.
    #[setters(into)]
    pub placeholder: String,
    /// Preferred width.
    #[setters(into)]
    pub width: Length,
    /// Field height.
    pub height: Dp,
    /// Field shape.
    pub shape: Shape,
    /// Content padding, also the shadow blur and offset.
    pub content_padding: Dp,
    /// Horizontal padding around the text.
    pub text_padding: Dp,
    /// Font size.
    pub text_size: Dp,
    /// Text and caret color.
    pub text_color: Color,
    /// Placeholder color.
    pub placeholder_color: Color,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Called with the full edited text after each batch of edits.
    #[setters(skip)]
    pub on_value_change: Option<CallbackWith<String>>,
    /// Focus and caret. Supply one to keep focus across rebuilt trees.
    #[setters(strip_option)]
    pub editor_state: Option<State<TextEditorState>>,
    /// Press tracking.
    #[setters(strip_option)]
    pub interaction_state: Option<State<InteractionState>>,
}

impl Default for TextFieldArgs {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            width: Length::Fill,
            height: TextFieldDefaults::HEIGHT,
            shape: TextFieldDefaults::SHAPE,
            content_padding: TextFieldDefaults::CONTENT_PADDING,
            text_padding: TextFieldDefaults::TEXT_PADDING,
            text_size: TextDefaults::SIZE,
            text_color: NeumorphicColors::DEFAULT.content,
            placeholder_color: NeumorphicColors::DEFAULT.secondary_content,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            on_value_change: None,
            editor_state: None,
            interaction_state: None,
        }
    }
}

impl TextFieldArgs {
    /// Sets the change handler.
    pub fn on_value_change<F>(mut self, on_value_change: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(on_value_change));
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_value_change_shared(
        mut self,
        on_value_change: impl Into<CallbackWith<String>>,
    ) -> Self {
        self.on_value_change = Some(on_value_change.into());
        self
    }
}

/// An inset single-line text field.
pub struct TextField {
    args: TextFieldArgs,
    style: NeumorphicStyle,
    editor_state: State<TextEditorState>,
    interaction_state: State<InteractionState>,
}

impl TextField {
    /// Creates a text field.
    pub fn new(mut args: TextFieldArgs) -> Self {
        let style = NeumorphicStyle::default()
            .shape(args.shape.clone())
            .light_color(args.light_color)
            .shadow_color(args.shadow_color)
            .content_padding(args.content_padding)
            .orientation(Orientation::Inset);
        let editor_state = args.editor_state.take().unwrap_or_default();
        let interaction_state = args.interaction_state.take().unwrap_or_default();
        Self {
            args,
            style,
            editor_state,
            interaction_state,
        }
    }

    /// Returns whether the field currently accepts edits.
    pub fn is_focused(&self) -> bool {
        self.editor_state.with(TextEditorState::is_focused)
    }

    fn label(&self) -> Text {
        let (text, color) = if self.args.value.is_empty() {
            (&self.args.placeholder, self.args.placeholder_color)
        } else {
            (&self.args.value, self.args.text_color)
        };
        Text::new(
            TextArgs::default()
                .text(text.as_str())
                .size(self.args.text_size)
                .color(color),
        )
    }

    /// Size of the text plus its horizontal padding, on a single line.
    fn content_size(&self, density: Density, direction: LayoutDirection) -> PxSize {
        let label = self
            .label()
            .measure(&MeasureInput::new(Constraint::NONE, density, direction));
        let padding = self.args.text_padding.max(Dp::ZERO).to_px(density) * 2;
        PxSize::new(label.width + padding, label.height)
    }

    fn apply_edits(&self, edits: &[TextEdit]) -> Option<String> {
        let mut text = self.args.value.clone();
        let mut caret = self.editor_state.with(|state| state.caret(&text));
        for edit in edits {
            (text, caret) = apply_edit(&text, caret, edit);
        }
        self.editor_state.with_mut(|state| state.set_caret(caret));
        (text != self.args.value).then_some(text)
    }
}

impl Component for TextField {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let constraint = Constraint::from_lengths(
            self.args.width,
            Length::Fixed(self.args.height),
            input.density,
        )
        .merge(&input.constraint);
        let content = self.content_size(input.density, input.layout_direction);
        let padding = self.args.content_padding.max(Dp::ZERO).to_px(input.density) * 2;
        ComputedData::new(PxSize::new(
            constraint.width.resolve(content.width + padding),
            constraint.height.resolve(Px::ZERO),
        ))
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        let density = scope.density();
        let direction = scope.layout_direction();
        let content = self.content_size(density, direction);
        let rect = neumorphic_surface(scope, &self.style, Alignment::CenterStart, content);

        let text_padding = self.args.text_padding.max(Dp::ZERO).to_px(density);
        let label = self.label();
        let label_size = PxSize::new(
            (content.width - text_padding * 2).max(Px::ZERO),
            content.height,
        );
        let label_rect = rect.inset_sides(text_padding, Px::ZERO, text_padding, Px::ZERO);
        scope.child(label_rect, |scope| label.record(scope));

        if !self.is_focused() {
            return;
        }
        let metrics = TextMetrics::new(self.args.text_size, false, density);
        let caret = self.editor_state.with(|state| state.caret(&self.args.value));
        let caret_x = metrics.width_of(caret).min(label_size.width).to_f32();
        let caret_width = TextFieldDefaults::CARET_WIDTH.to_px_f32(density);
        let x = match direction {
            LayoutDirection::Ltr => label_rect.x.to_f32() + caret_x,
            LayoutDirection::Rtl => label_rect.right().to_f32() - caret_x - caret_width,
        };
        let caret_rect = Rect::new(
            x,
            label_rect.y.to_f32(),
            caret_width,
            label_rect.height.to_f32(),
        );
        scope.draw_outline(
            &Outline::Rectangle(caret_rect),
            &Paint::fill(self.args.text_color),
        );
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        let pressed_outside = input.cursor_events.iter().any(|event| {
            event.content == CursorEventContent::Pressed && !input.contains(event.position)
        });
        if pressed_outside && self.is_focused() {
            debug!("text field lost focus");
            self.editor_state.with_mut(TextEditorState::blur);
        }

        let editor_state = &self.editor_state;
        handle_click(input, &self.interaction_state, || {
            if !editor_state.with(TextEditorState::is_focused) {
                debug!("text field focused");
                editor_state.with_mut(TextEditorState::focus);
            }
        });

        if !self.is_focused() || input.text_edits.is_empty() {
            return;
        }
        let edits = std::mem::take(input.text_edits);
        if let Some(text) = self.apply_edits(&edits)
            && let Some(on_value_change) = &self.args.on_value_change
        {
            on_value_change.call(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use neumorphic_ui::{CursorEvent, Frame, PxPosition};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, TextFieldArgs) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let args = TextFieldArgs::default().on_value_change(move |text| {
            if let Ok(mut values) = sink.lock() {
                values.push(text);
            }
        });
        (received, args)
    }

    fn tap(x: i32, y: i32) -> Vec<CursorEvent> {
        let position = PxPosition::new(Px(x), Px(y));
        vec![CursorEvent::pressed(position), CursorEvent::released(position)]
    }

    #[test]
    fn edits_are_ignored_until_focused() {
        let frame = Frame::new(PxSize::new(Px(300), Px(48)), Density::ONE);
        let (received, args) = recorder();
        let field = TextField::new(args.value("ab"));

        let edits = vec![TextEdit::Insert("c".into())];
        let (_, rest) = frame.dispatch(&field, Vec::new(), edits.clone());
        assert_eq!(rest, edits);

        frame.dispatch(&field, tap(20, 20), edits);
        assert!(field.is_focused());
        assert_eq!(
            *received.lock().unwrap_or_else(|e| e.into_inner()),
            vec!["abc".to_owned()]
        );
    }

    #[test]
    fn focus_survives_rebuilds_and_drops_on_outside_press() {
        let frame = Frame::new(PxSize::new(Px(300), Px(200)), Density::ONE);
        let editor = State::new(TextEditorState::new());
        let build = || {
            TextField::new(
                TextFieldArgs::default()
                    .value("hello")
                    .editor_state(editor.clone()),
            )
        };
        frame.dispatch(&build(), tap(10, 10), Vec::new());
        assert!(build().is_focused());

        let (rest, _) = frame.dispatch(&build(), tap(10, 120), Vec::new());
        assert_eq!(rest.len(), 2);
        assert!(!build().is_focused());
    }

    #[test]
    fn backspace_after_moving_the_caret() {
        let frame = Frame::new(PxSize::new(Px(300), Px(48)), Density::ONE);
        let (received, args) = recorder();
        let field = TextField::new(args.value("abc"));
        frame.dispatch(
            &field,
            tap(10, 10),
            vec![TextEdit::MoveLeft, TextEdit::Backspace],
        );
        assert_eq!(
            *received.lock().unwrap_or_else(|e| e.into_inner()),
            vec!["ac".to_owned()]
        );
    }

    #[test]
    fn measures_to_a_fixed_height() {
        let frame = Frame::new(PxSize::new(Px(320), Px(400)), Density::ONE);
        let field = TextField::new(TextFieldArgs::default());
        assert_eq!(frame.measure(&field).size(), PxSize::new(Px(320), Px(48)));
    }
}
