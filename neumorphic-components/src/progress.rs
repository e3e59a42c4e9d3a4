//! A determinate progress bar: a raised fill inside an inset track.
//!
//! ## Usage
//!
//! Show how much of a task has completed.

use derive_setters::Setters;
use neumorphic_ui::{
    Color, Component, ComputedData, Constraint, Dp, DrawScope, LayoutDirection, Length,
    MeasureInput, Px, PxRect, PxSize,
};

use crate::{
    alignment::Alignment,
    layout_utils::clamp_unit,
    neumorphic::{NeumorphicDefaults, NeumorphicStyle, Orientation, neumorphic_surface},
    shape_def::Shape,
};

/// Defaults for [`ProgressBarArgs`].
pub struct ProgressBarDefaults;

impl ProgressBarDefaults {
    /// Track height.
    pub const HEIGHT: Dp = Dp(16.0);
    /// Shape of the track and the fill.
    pub const SHAPE: Shape = Shape::rounded_percent(50.0);
    /// Content padding, also the shadow blur and offset.
    pub const CONTENT_PADDING: Dp = Dp(4.0);
}

/// Arguments for [`ProgressBar`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct ProgressBarArgs {
    /// Completed fraction. Clamped to `[0, 1]` before use.
    pub progress: f32,
    /// Preferred width.
    #[setters(into)]
    pub width: Length,
    /// Track height.
    pub height: Dp,
    /// Shape of the track and the fill.
    pub shape: Shape,
    /// Content padding, also the shadow blur and offset.
    pub content_padding: Dp,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
}

impl Default for ProgressBarArgs {
    fn default() -> Self {
        Self {
            progress: 0.0,
            width: Length::Fill,
            height: ProgressBarDefaults::HEIGHT,
            shape: ProgressBarDefaults::SHAPE,
            content_padding: ProgressBarDefaults::CONTENT_PADDING,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
        }
    }
}

/// A progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    args: ProgressBarArgs,
}

impl ProgressBar {
    /// Creates a progress bar.
    pub fn new(args: ProgressBarArgs) -> Self {
        Self { args }
    }

    /// The clamped progress.
    pub fn progress(&self) -> f32 {
        clamp_unit(self.args.progress)
    }

    /// The filled part of a track of `size`, anchored at the start edge.
    ///
    /// ```
    /// use neumorphic_components::progress::{ProgressBar, ProgressBarArgs};
    /// use neumorphic_ui::{LayoutDirection, Px, PxRect, PxSize};
    ///
    /// let bar = ProgressBar::new(ProgressBarArgs::default().progress(0.25));
    /// let track = PxSize::new(Px(200), Px(16));
    /// assert_eq!(
    ///     bar.fill_rect(track, LayoutDirection::Ltr),
    ///     PxRect::new(Px(0), Px(0), Px(50), Px(16))
    /// );
    /// assert_eq!(
    ///     bar.fill_rect(track, LayoutDirection::Rtl),
    ///     PxRect::new(Px(150), Px(0), Px(50), Px(16))
    /// );
    /// ```
    pub fn fill_rect(&self, size: PxSize, direction: LayoutDirection) -> PxRect {
        let width = size.width.max(Px::ZERO).mul_f32(self.progress());
        let x = match direction {
            LayoutDirection::Ltr => Px::ZERO,
            LayoutDirection::Rtl => size.width - width,
        };
        PxRect::new(x, Px::ZERO, width, size.height)
    }

    fn style(&self, orientation: Orientation) -> NeumorphicStyle {
        NeumorphicStyle::default()
            .shape(self.args.shape.clone())
            .light_color(self.args.light_color)
            .shadow_color(self.args.shadow_color)
            .content_padding(self.args.content_padding)
            .orientation(orientation)
    }
}

impl Component for ProgressBar {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let constraint = Constraint::from_lengths(
            self.args.width,
            Length::Fixed(self.args.height),
            input.density,
        )
        .merge(&input.constraint);
        ComputedData::new(PxSize::new(
            constraint.width.resolve(Px::ZERO),
            constraint.height.resolve(Px::ZERO),
        ))
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        neumorphic_surface(
            scope,
            &self.style(Orientation::Inset),
            Alignment::TopStart,
            PxSize::ZERO,
        );
        let fill = self.fill_rect(scope.size(), scope.layout_direction());
        if fill.size().is_empty() {
            return;
        }
        let style = self.style(Orientation::Raised);
        scope.child(fill, |scope| {
            neumorphic_surface(scope, &style, Alignment::TopStart, PxSize::ZERO);
        });
    }
}

#[cfg(test)]
mod tests {
    use neumorphic_ui::{Canvas, Density, Frame, renderer::SoftwareCanvas};

    use super::*;

    #[test]
    fn progress_clamps_before_computing_the_fill() {
        let track = PxSize::new(Px(200), Px(16));
        let width = |progress| {
            ProgressBar::new(ProgressBarArgs::default().progress(progress))
                .fill_rect(track, LayoutDirection::Ltr)
                .width
        };
        assert_eq!(width(-0.3), Px(0));
        assert_eq!(width(1.7), Px(200));
        assert_eq!(width(f32::NAN), Px(0));
    }

    #[test]
    fn fills_the_width_at_a_fixed_height() {
        let frame = Frame::new(PxSize::new(Px(300), Px(100)), Density::ONE);
        let bar = ProgressBar::new(ProgressBarArgs::default().progress(0.5));
        assert_eq!(frame.measure(&bar).size(), PxSize::new(Px(300), Px(16)));
    }

    #[test]
    fn empty_progress_draws_only_the_track() {
        let frame = Frame::new(PxSize::new(Px(100), Px(16)), Density::ONE);
        let render = |progress| {
            let mut canvas =
                SoftwareCanvas::with_background(100, 16, Color::from_rgb_u8(0xEE, 0xEE, 0xEE));
            frame.render(
                &ProgressBar::new(ProgressBarArgs::default().progress(progress)),
                &mut canvas,
            );
            assert_eq!(canvas.save_count(), 1);
            canvas.into_pixmap()
        };
        assert_eq!(render(0.0), render(-1.0));
        assert_ne!(render(0.0), render(0.5));
    }
}
