//! Vector icons drawn from simple outlines.
//!
//! ## Usage
//!
//! Show a small glyph inside buttons, such as the plus of a floating action
//! button.

use derive_setters::Setters;
use neumorphic_ui::{
    Color, Component, ComputedData, Constraint, Dp, DrawScope, Length, MeasureInput, Px, PxSize,
    outline::{CornerRadii, Outline, Rect, RoundRect},
    paint::Paint,
};

use crate::theme::NeumorphicColors;

/// Available glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconGlyph {
    /// A plus sign.
    #[default]
    Add,
    /// A horizontal bar.
    Remove,
}

/// Defaults for [`IconArgs`].
pub struct IconDefaults;

impl IconDefaults {
    /// Icon box size.
    pub const SIZE: Dp = Dp(24.0);
    /// Glyph color.
    pub const COLOR: Color = NeumorphicColors::DEFAULT.content;
}

/// Arguments for [`Icon`].
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct IconArgs {
    /// The glyph.
    pub glyph: IconGlyph,
    /// Edge length of the square icon box.
    pub size: Dp,
    /// Glyph color.
    pub color: Color,
}

impl Default for IconArgs {
    fn default() -> Self {
        Self {
            glyph: IconGlyph::default(),
            size: IconDefaults::SIZE,
            color: IconDefaults::COLOR,
        }
    }
}

/// A square icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    args: IconArgs,
}

impl Icon {
    /// Creates an icon.
    pub fn new(args: IconArgs) -> Self {
        Self { args }
    }
}

impl Component for Icon {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let length = Length::Fixed(self.args.size);
        let constraint =
            Constraint::from_lengths(length, length, input.density).merge(&input.constraint);
        ComputedData::new(PxSize::new(
            constraint.width.resolve(Px::ZERO),
            constraint.height.resolve(Px::ZERO),
        ))
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        let size = scope.size();
        let side = size.width.min(size.height).to_f32();
        if side <= 0.0 {
            return;
        }
        // Material proportions: a 14/24 stroke length, 2/24 thick.
        let length = side * 14.0 / 24.0;
        let thickness = side * 2.0 / 24.0;
        let center_x = size.width.to_f32() / 2.0;
        let center_y = size.height.to_f32() / 2.0;
        let bar = |width: f32, height: f32| {
            Outline::Rounded(RoundRect::new(
                Rect::new(center_x - width / 2.0, center_y - height / 2.0, width, height),
                CornerRadii::uniform(thickness / 4.0),
            ))
        };
        let paint = Paint::fill(self.args.color);
        scope.draw_outline(&bar(length, thickness), &paint);
        if self.args.glyph == IconGlyph::Add {
            scope.draw_outline(&bar(thickness, length), &paint);
        }
    }
}
