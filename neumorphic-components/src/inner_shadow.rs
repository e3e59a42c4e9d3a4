//! Directional inner shadows.
//!
//! ## Usage
//!
//! Draw a soft shadow inside a shape's boundary, cast from one direction.
//! Two of these with opposite offsets produce the neumorphic look.

use derive_setters::Setters;
use neumorphic_ui::{
    Color, DrawScope, Dp, Px,
    paint::{LayerPaint, Paint},
};
use tracing::trace;

use crate::shape_def::Shape;

/// Defaults for [`InnerShadowArgs`].
pub struct InnerShadowDefaults;

impl InnerShadowDefaults {
    /// Shadow color.
    pub const COLOR: Color = Color::BLACK;
    /// Blur radius.
    pub const BLUR: Dp = Dp(4.0);
    /// Horizontal offset.
    pub const OFFSET_X: Dp = Dp(2.0);
    /// Vertical offset.
    pub const OFFSET_Y: Dp = Dp(2.0);
    /// Spread.
    pub const SPREAD: Dp = Dp(0.0);
}

/// Arguments for [`inner_shadow`].
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct InnerShadowArgs {
    /// Shadow color. Its alpha also scales the whole shadow layer.
    pub color: Color,
    /// Blur radius. Zero or negative draws a hard edge.
    pub blur: Dp,
    /// Horizontal offset of the light source. Positive values leave the
    /// shadow along the start (left) edge.
    pub offset_x: Dp,
    /// Vertical offset. Positive values leave the shadow along the top edge.
    pub offset_y: Dp,
    /// Grows (or, when negative, shrinks) the shadow outline by twice this
    /// amount. The outline stays anchored at the top-left corner of the
    /// surface. Never affects layout.
    pub spread: Dp,
}

impl Default for InnerShadowArgs {
    fn default() -> Self {
        Self {
            color: InnerShadowDefaults::COLOR,
            blur: InnerShadowDefaults::BLUR,
            offset_x: InnerShadowDefaults::OFFSET_X,
            offset_y: InnerShadowDefaults::OFFSET_Y,
            spread: InnerShadowDefaults::SPREAD,
        }
    }
}

/// Composites an inner shadow of `shape` over whatever `scope` already holds.
///
/// The shape, grown by the spread, is filled with the shadow color in an
/// offscreen layer clipped to the scope. A copy translated by the offset and
/// optionally blurred is then erased from that layer with a destination-out
/// paint, leaving a crescent along the edges facing away from the offset.
///
/// A zero-sized scope draws nothing and opens no layer.
///
/// # Example
///
/// ```
/// use neumorphic_components::{
///     inner_shadow::{InnerShadowArgs, inner_shadow},
///     shape_def::Shape,
/// };
/// use neumorphic_ui::{
///     Color, Density, Dp, DrawScope, LayoutDirection, Px, PxSize, renderer::SoftwareCanvas,
/// };
///
/// let mut canvas = SoftwareCanvas::new(40, 40);
/// let mut scope = DrawScope::new(
///     &mut canvas,
///     PxSize::new(Px(40), Px(40)),
///     Density::ONE,
///     LayoutDirection::Ltr,
/// );
/// inner_shadow(
///     &mut scope,
///     &Shape::Rectangle,
///     &InnerShadowArgs::default().color(Color::GRAY).blur(Dp(0.0)),
/// );
/// drop(scope);
///
/// // The 2dp band along the top and left edges keeps the shadow...
/// assert_eq!(canvas.pixmap().alpha_at(0, 20), 1.0);
/// // ...everything the offset copy covers is erased.
/// assert_eq!(canvas.pixmap().alpha_at(20, 20), 0.0);
/// ```
pub fn inner_shadow(scope: &mut DrawScope<'_>, shape: &Shape, args: &InnerShadowArgs) {
    let size = scope.size();
    if size.width <= Px::ZERO || size.height <= Px::ZERO {
        trace!(?size, "skipping inner shadow on an empty surface");
        return;
    }

    let density = scope.density();
    let spread = args.spread.to_px_f32(density);
    let outline = shape.create_outline(
        size.width.to_f32() + spread * 2.0,
        size.height.to_f32() + spread * 2.0,
        scope.layout_direction(),
        density,
    );

    let bounds = scope.bounds();
    let mut layer = scope.layer(bounds, LayerPaint::from_color(args.color));
    layer.draw_outline(&outline, &Paint::fill(args.color));
    layer.translate(
        args.offset_x.to_px_f32(density),
        args.offset_y.to_px_f32(density),
    );
    layer.draw_outline(&outline, &Paint::eraser(args.blur.to_px_f32(density)));
}
