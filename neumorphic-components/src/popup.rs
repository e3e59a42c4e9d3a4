//! A raised card over a dismiss scrim.
//!
//! ## Usage
//!
//! Show transient content above the rest of a screen. Any click on the popup,
//! the card or the scrim around it, reports `on_dismiss`.

use derive_setters::Setters;
use neumorphic_ui::{
    Callback, Color, Component, ComputedData, Constraint, Dp, DrawScope, InputHandlerInput,
    Length, MeasureInput, PxPosition, PxRect, PxSize, State,
    outline::Outline,
    paint::Paint,
};
use tracing::debug;

use crate::{
    alignment::Alignment,
    interaction::{InteractionState, handle_click},
    layout_utils::shrink_constraint,
    neumorphic::{NeumorphicBox, NeumorphicBoxArgs, NeumorphicDefaults, Orientation},
    shape_def::Shape,
};

/// Defaults for [`PopupArgs`].
pub struct PopupDefaults;

impl PopupDefaults {
    /// Popup height, outer padding included.
    pub const HEIGHT: Dp = Dp(150.0);
    /// Card shape.
    pub const SHAPE: Shape = Shape::rounded(Dp(16.0));
    /// Card content padding, also the shadow blur and offset.
    pub const CONTENT_PADDING: Dp = Dp(16.0);
    /// Space between the popup edge and the card.
    pub const OUTER_PADDING: Dp = Dp(16.0);
}

/// Arguments for [`Popup`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct PopupArgs {
    /// Preferred width of the whole popup.
    #[setters(into)]
    pub width: Length,
    /// Height of the whole popup. The card fills what the outer padding
    /// leaves.
    pub height: Dp,
    /// Card shape.
    pub shape: Shape,
    /// Card content padding.
    pub content_padding: Dp,
    /// Space between the popup edge and the card.
    pub outer_padding: Dp,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Fill of the popup area behind the card.
    pub scrim_color: Color,
    /// Called on every click inside the popup.
    #[setters(skip)]
    pub on_dismiss: Option<Callback>,
    /// Press tracking.
    #[setters(strip_option)]
    pub interaction_state: Option<State<InteractionState>>,
}

impl Default for PopupArgs {
    fn default() -> Self {
        Self {
            width: Length::Fill,
            height: PopupDefaults::HEIGHT,
            shape: PopupDefaults::SHAPE,
            content_padding: PopupDefaults::CONTENT_PADDING,
            outer_padding: PopupDefaults::OUTER_PADDING,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            scrim_color: Color::TRANSPARENT,
            on_dismiss: None,
            interaction_state: None,
        }
    }
}

impl PopupArgs {
    /// Sets the dismiss handler.
    pub fn on_dismiss<F>(mut self, on_dismiss: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_dismiss = Some(Callback::new(on_dismiss));
        self
    }

    /// Sets the dismiss handler using a shared callback.
    pub fn on_dismiss_shared(mut self, on_dismiss: impl Into<Callback>) -> Self {
        self.on_dismiss = Some(on_dismiss.into());
        self
    }

    fn card(&self) -> NeumorphicBox {
        let args = NeumorphicBoxArgs::default()
            .width(Length::Fill)
            .height(Length::Fill)
            .shape(self.shape.clone())
            .content_padding(self.content_padding)
            .light_color(self.light_color)
            .shadow_color(self.shadow_color)
            .content_alignment(Alignment::TopStart);
        NeumorphicBox::new(args, Orientation::Raised)
    }
}

/// A popup card.
pub struct Popup {
    card: NeumorphicBox,
    outer_padding: Dp,
    width: Length,
    height: Dp,
    scrim_color: Color,
    on_dismiss: Option<Callback>,
    interaction_state: State<InteractionState>,
}

impl Popup {
    /// Creates a popup.
    pub fn new(mut args: PopupArgs) -> Self {
        let interaction_state = args.interaction_state.take().unwrap_or_default();
        Self {
            card: args.card(),
            outer_padding: args.outer_padding,
            width: args.width,
            height: args.height,
            scrim_color: args.scrim_color,
            on_dismiss: args.on_dismiss,
            interaction_state,
        }
    }

    /// Sets the card content.
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.card = self.card.child(child);
        self
    }

    fn card_rect(&self, size: PxSize, input: &MeasureInput) -> PxRect {
        let outer = self.outer_padding.max(Dp::ZERO).to_px(input.density);
        let constraint = shrink_constraint(Constraint::fixed(size), outer * 2, outer * 2);
        let card = self.card.measure(&input.with_constraint(constraint));
        PxRect::from_position_size(PxPosition::new(outer, outer), card.size())
    }
}

impl Component for Popup {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let height = Length::Fixed(self.height);
        let constraint = Constraint::from_lengths(self.width, height, input.density)
            .merge(&input.constraint);
        let outer = self.outer_padding.max(Dp::ZERO).to_px(input.density) * 2;
        let card = self
            .card
            .measure(&input.with_constraint(shrink_constraint(constraint, outer, outer)));
        ComputedData::new(PxSize::new(
            constraint.width.resolve(card.width + outer),
            constraint.height.resolve(card.height + outer),
        ))
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        if self.scrim_color.a > 0.0 {
            let bounds = scope.bounds();
            scope.draw_outline(&Outline::Rectangle(bounds), &Paint::fill(self.scrim_color));
        }
        let input = MeasureInput::new(Constraint::NONE, scope.density(), scope.layout_direction());
        let rect = self.card_rect(scope.size(), &input);
        scope.child(rect, |scope| self.card.record(scope));
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        let measure = MeasureInput::new(Constraint::NONE, input.density, input.layout_direction);
        let rect = self.card_rect(input.computed_data.size(), &measure);
        input.child(rect, |input| self.card.handle_input(input));

        let Some(on_dismiss) = &self.on_dismiss else {
            return;
        };
        handle_click(input, &self.interaction_state, || {
            debug!("popup dismissed");
            on_dismiss.call();
        });
    }
}
