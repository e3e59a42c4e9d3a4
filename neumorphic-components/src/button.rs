//! A raised, clickable neumorphic button.
//!
//! ## Usage
//!
//! Trigger an action. Put a [`crate::text::Text`] or an
//! [`crate::icon::Icon`] inside as the label.

use derive_setters::Setters;
use neumorphic_ui::{
    Callback, Color, Component, ComputedData, Dp, DrawScope, InputHandlerInput, Length,
    MeasureInput, State,
};

use crate::{
    alignment::Alignment,
    interaction::{InteractionState, handle_click},
    neumorphic::{NeumorphicBox, NeumorphicBoxArgs, NeumorphicDefaults, neumorphic_up},
    shape_def::Shape,
};

/// Defaults for [`ButtonArgs`].
pub struct ButtonDefaults;

impl ButtonDefaults {
    /// Button shape.
    pub const SHAPE: Shape = Shape::rounded(Dp(12.0));
    /// Content padding, also the shadow blur and offset.
    pub const CONTENT_PADDING: Dp = Dp(20.0);
}

/// Arguments for [`Button`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct ButtonArgs {
    /// Preferred width.
    #[setters(into)]
    pub width: Length,
    /// Preferred height.
    #[setters(into)]
    pub height: Length,
    /// Button shape.
    pub shape: Shape,
    /// Content padding, also the shadow blur and offset.
    pub content_padding: Dp,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Fill drawn under the shadows.
    pub background: Color,
    /// Alignment of the label.
    pub content_alignment: Alignment,
    /// Called on every click. A button without a handler ignores input.
    #[setters(skip)]
    pub on_click: Option<Callback>,
    /// Press tracking. Supply one to keep a press alive across rebuilt trees.
    #[setters(strip_option)]
    pub interaction_state: Option<State<InteractionState>>,
}

impl Default for ButtonArgs {
    fn default() -> Self {
        Self {
            width: Length::Wrap,
            height: Length::Wrap,
            shape: ButtonDefaults::SHAPE,
            content_padding: ButtonDefaults::CONTENT_PADDING,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            background: NeumorphicDefaults::BACKGROUND,
            content_alignment: Alignment::Center,
            on_click: None,
            interaction_state: None,
        }
    }
}

impl ButtonArgs {
    /// Sets the click handler.
    pub fn on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Callback::new(on_click));
        self
    }

    /// Sets the click handler using a shared callback.
    pub fn on_click_shared(mut self, on_click: impl Into<Callback>) -> Self {
        self.on_click = Some(on_click.into());
        self
    }

    fn surface(&self) -> NeumorphicBoxArgs {
        NeumorphicBoxArgs::default()
            .width(self.width)
            .height(self.height)
            .shape(self.shape.clone())
            .content_padding(self.content_padding)
            .light_color(self.light_color)
            .shadow_color(self.shadow_color)
            .background(self.background)
            .content_alignment(self.content_alignment)
    }
}

/// A raised button that reports clicks.
///
/// # Example
///
/// ```
/// use std::sync::{
///     Arc,
///     atomic::{AtomicUsize, Ordering},
/// };
///
/// use neumorphic_components::button::{Button, ButtonArgs};
/// use neumorphic_ui::{CursorEvent, Density, Dp, Frame, Px, PxPosition, PxSize};
///
/// let clicks = Arc::new(AtomicUsize::new(0));
/// let counter = clicks.clone();
/// let button = Button::new(
///     ButtonArgs::default()
///         .width(Dp(120.0))
///         .height(Dp(48.0))
///         .on_click(move || {
///             counter.fetch_add(1, Ordering::SeqCst);
///         }),
/// );
///
/// let frame = Frame::new(PxSize::new(Px(200), Px(100)), Density::ONE);
/// let tap = PxPosition::new(Px(60), Px(24));
/// let (rest, _) = frame.dispatch(
///     &button,
///     vec![CursorEvent::pressed(tap), CursorEvent::released(tap)],
///     Vec::new(),
/// );
/// assert!(rest.is_empty());
/// assert_eq!(clicks.load(Ordering::SeqCst), 1);
/// ```
pub struct Button {
    surface: NeumorphicBox,
    on_click: Option<Callback>,
    interaction_state: State<InteractionState>,
}

impl Button {
    /// Creates a button.
    pub fn new(args: ButtonArgs) -> Self {
        Self {
            surface: neumorphic_up(args.surface()),
            interaction_state: args.interaction_state.unwrap_or_default(),
            on_click: args.on_click,
        }
    }

    /// Sets the label.
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.surface = self.surface.child(child);
        self
    }
}

impl Component for Button {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        self.surface.measure(input)
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        self.surface.record(scope);
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        self.surface.handle_input(input);
        if let Some(on_click) = &self.on_click {
            handle_click(input, &self.interaction_state, || on_click.call());
        }
    }
}
