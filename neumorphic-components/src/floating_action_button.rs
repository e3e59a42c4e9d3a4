//! A circular raised action button.
//!
//! ## Usage
//!
//! Promote the primary action of a screen, usually with an
//! [`crate::icon::Icon`] inside.

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

/// Defaults for [`FloatingActionButtonArgs`].
pub struct FloatingActionButtonDefaults;

impl FloatingActionButtonDefaults {
    /// Diameter.
    pub const SIZE: Dp = Dp(56.0);
    /// Shape.
    pub const SHAPE: Shape = Shape::Circle;
    /// Content padding, also the shadow blur and offset.
    pub const CONTENT_PADDING: Dp = Dp(12.0);
}

/// Arguments for [`FloatingActionButton`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct FloatingActionButtonArgs {
    /// Edge length of the button.
    pub size: Dp,
    /// Shape.
    pub shape: Shape,
    /// Content padding, also the shadow blur and offset.
    pub content_padding: Dp,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Fill drawn under the shadows.
    pub background: Color,
    /// Called on every click.
    #[setters(skip)]
    pub on_click: Option<Callback>,
    /// Press tracking. Supply one to keep a press alive across rebuilt trees.
    #[setters(strip_option)]
    pub interaction_state: Option<State<InteractionState>>,
}

impl Default for FloatingActionButtonArgs {
    fn default() -> Self {
        Self {
            size: FloatingActionButtonDefaults::SIZE,
            shape: FloatingActionButtonDefaults::SHAPE,
            content_padding: FloatingActionButtonDefaults::CONTENT_PADDING,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            background: NeumorphicDefaults::BACKGROUND,
            on_click: None,
            interaction_state: None,
        }
    }
}

impl FloatingActionButtonArgs {
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
}

/// A fixed-size circular button with centered content.
pub struct FloatingActionButton {
    surface: NeumorphicBox,
    on_click: Option<Callback>,
    interaction_state: State<InteractionState>,
}

impl FloatingActionButton {
    /// Creates a floating action button.
    pub fn new(args: FloatingActionButtonArgs) -> Self {
        let surface = neumorphic_up(
            NeumorphicBoxArgs::default()
                .width(Length::Fixed(args.size))
                .height(Length::Fixed(args.size))
                .shape(args.shape)
                .content_padding(args.content_padding)
                .light_color(args.light_color)
                .shadow_color(args.shadow_color)
                .background(args.background)
                .content_alignment(Alignment::Center),
        );
        Self {
            surface,
            on_click: args.on_click,
            interaction_state: args.interaction_state.unwrap_or_default(),
        }
    }

    /// Sets the content.
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.surface = self.surface.child(child);
        self
    }
}

impl Component for FloatingActionButton {
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

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    use neumorphic_ui::{CursorEvent, Density, Frame, Px, PxPosition, PxSize};

    use super::*;
    use crate::icon::{Icon, IconArgs};

    #[test]
    fn fixed_size_regardless_of_space() {
        let frame = Frame::new(PxSize::new(Px(300), Px(300)), Density(2.0));
        let fab = FloatingActionButton::new(FloatingActionButtonArgs::default())
            .child(Icon::new(IconArgs::default()));
        assert_eq!(frame.measure(&fab).size(), PxSize::new(Px(112), Px(112)));
    }

    #[test]
    fn clicks_reach_the_handler() {
        let clicked = Arc::new(AtomicBool::new(false));
        let flag = clicked.clone();
        let fab = FloatingActionButton::new(
            FloatingActionButtonArgs::default()
                .on_click(move || flag.store(true, Ordering::SeqCst)),
        );
        let frame = Frame::new(PxSize::new(Px(100), Px(100)), Density::ONE);
        let tap = PxPosition::new(Px(28), Px(28));
        frame.dispatch(
            &fab,
            vec![CursorEvent::pressed(tap), CursorEvent::released(tap)],
            Vec::new(),
        );
        assert!(clicked.load(Ordering::SeqCst));
    }
}
