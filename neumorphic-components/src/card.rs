//! A raised neumorphic card.
//!
//! ## Usage
//!
//! Group related content on one raised surface.

use derive_setters::Setters;
use neumorphic_ui::{
    Color, Component, ComputedData, Dp, DrawScope, InputHandlerInput, Length, MeasureInput,
};

use crate::{
    alignment::Alignment,
    neumorphic::{NeumorphicBox, NeumorphicBoxArgs, NeumorphicDefaults, neumorphic_up},
    shape_def::Shape,
};

/// Defaults for [`CardArgs`].
pub struct CardDefaults;

impl CardDefaults {
    /// Card shape.
    pub const SHAPE: Shape = Shape::rounded(Dp(16.0));
    /// Content padding, also the shadow blur and offset.
    pub const CONTENT_PADDING: Dp = Dp(16.0);
}

/// Arguments for [`Card`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct CardArgs {
    /// Preferred width.
    #[setters(into)]
    pub width: Length,
    /// Preferred height.
    #[setters(into)]
    pub height: Length,
    /// Card shape.
    pub shape: Shape,
    /// Content padding, also the shadow blur and offset.
    pub content_padding: Dp,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Fill drawn under the shadows.
    pub background: Color,
    /// Alignment of the content.
    pub content_alignment: Alignment,
}

impl Default for CardArgs {
    fn default() -> Self {
        Self {
            width: Length::Wrap,
            height: Length::Wrap,
            shape: CardDefaults::SHAPE,
            content_padding: CardDefaults::CONTENT_PADDING,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            background: NeumorphicDefaults::BACKGROUND,
            content_alignment: Alignment::TopStart,
        }
    }
}

impl From<CardArgs> for NeumorphicBoxArgs {
    fn from(args: CardArgs) -> Self {
        NeumorphicBoxArgs::default()
            .width(args.width)
            .height(args.height)
            .shape(args.shape)
            .content_padding(args.content_padding)
            .light_color(args.light_color)
            .shadow_color(args.shadow_color)
            .background(args.background)
            .content_alignment(args.content_alignment)
    }
}

/// A raised card. Purely decorative: input goes to its content.
pub struct Card {
    surface: NeumorphicBox,
}

impl Card {
    /// Creates a card.
    pub fn new(args: CardArgs) -> Self {
        Self {
            surface: neumorphic_up(args.into()),
        }
    }

    /// Sets the content.
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.surface = self.surface.child(child);
        self
    }
}

impl Component for Card {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        self.surface.measure(input)
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        self.surface.record(scope);
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        self.surface.handle_input(input);
    }
}
