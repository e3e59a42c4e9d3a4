//! An invisible component for creating empty space in a layout.
//!
//! ## Usage
//!
//! Use to add gaps between components or to create flexible, expanding regions.

use derive_setters::Setters;
use neumorphic_ui::{
    Component, ComputedData, Constraint, Dp, DrawScope, Length, MeasureInput, Px, PxSize,
};

/// Props for [`Spacer`].
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct SpacerArgs {
    /// Preferred width.
    #[setters(into)]
    pub width: Length,
    /// Preferred height.
    #[setters(into)]
    pub height: Length,
}

impl Default for SpacerArgs {
    fn default() -> Self {
        Self {
            width: Length::Fixed(Dp::ZERO),
            height: Length::Fixed(Dp::ZERO),
        }
    }
}

/// Empty space. Draws nothing and ignores input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    args: SpacerArgs,
}

impl Spacer {
    /// Creates a spacer.
    pub fn new(args: SpacerArgs) -> Self {
        Self { args }
    }
}

impl Component for Spacer {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let constraint = Constraint::from_lengths(self.args.width, self.args.height, input.density)
            .merge(&input.constraint);
        ComputedData::new(PxSize::new(
            constraint.width.resolve(Px::ZERO),
            constraint.height.resolve(Px::ZERO),
        ))
    }

    fn record(&self, _scope: &mut DrawScope<'_>) {}
}
