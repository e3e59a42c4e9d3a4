//! Paint configuration for canvas draw calls.

use crate::Color;

/// How a source coverage combines with what is already in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Porter-Duff source-over: the source is painted on top.
    #[default]
    SrcOver,
    /// Porter-Duff destination-out: the destination is erased wherever the
    /// source has coverage, proportionally to the source alpha. The source
    /// color itself never shows.
    DstOut,
}

/// A normal (Gaussian) blur applied to the coverage mask of a draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurMaskFilter {
    /// Blur radius in device pixels.
    pub radius: f32,
}

impl BlurMaskFilter {
    /// Creates a blur mask. Returns `None` for radii that would not blur.
    pub fn new(radius: f32) -> Option<Self> {
        (radius > 0.0).then_some(Self { radius })
    }

    /// Standard deviation of the Gaussian for this radius.
    ///
    /// Uses the conventional radius-to-sigma mapping of 2D canvas
    /// libraries: `sigma = radius / sqrt(3) + 0.5`.
    pub fn sigma(&self) -> f32 {
        if self.radius > 0.0 {
            self.radius * 0.57735 + 0.5
        } else {
            0.0
        }
    }
}

/// Describes how an outline is filled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    /// Fill color.
    pub color: Color,
    /// Compositing rule.
    pub blend_mode: BlendMode,
    /// Optional blur of the coverage mask.
    pub mask_filter: Option<BlurMaskFilter>,
}

impl Paint {
    /// A source-over fill with the given color.
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// An opaque destination-out eraser, optionally blurred by `blur_radius`
    /// device pixels.
    pub fn eraser(blur_radius: f32) -> Self {
        Self {
            color: Color::BLACK,
            blend_mode: BlendMode::DstOut,
            mask_filter: BlurMaskFilter::new(blur_radius),
        }
    }
}

/// How an offscreen layer is composited back when it is restored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPaint {
    /// Opacity multiplier applied to the whole layer.
    pub alpha: f32,
}

impl LayerPaint {
    /// A layer restored with the alpha of `color`.
    pub fn from_color(color: Color) -> Self {
        Self { alpha: color.a }
    }
}

impl Default for LayerPaint {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_blur_has_no_mask_filter() {
        assert_eq!(Paint::eraser(0.0).mask_filter, None);
        assert_eq!(Paint::eraser(-3.0).mask_filter, None);
        assert!(Paint::eraser(4.0).mask_filter.is_some());
    }

    #[test]
    fn sigma_grows_with_radius() {
        let small = BlurMaskFilter { radius: 2.0 }.sigma();
        let large = BlurMaskFilter { radius: 8.0 }.sigma();
        assert!(large > small);
        assert!((BlurMaskFilter { radius: 0.0 }.sigma()).abs() < f32::EPSILON);
    }
}
