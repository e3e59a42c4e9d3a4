//! Defines the [`Shape`] enum, used for describing the geometric form of
//! neumorphic surfaces.
//!
//! A shape is resolution independent. It only becomes an [`Outline`] once it
//! is given a size, a layout direction and a density, which happens every
//! time it is drawn.

use std::{fmt, sync::Arc};

use lyon_path::Path;
use neumorphic_ui::{
    Density, Dp, LayoutDirection,
    outline::{CornerRadii, Outline, PathOutline, Rect, RoundRect},
};

/// The size of a single corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerSize {
    /// A radius in density-independent pixels.
    Dp(Dp),
    /// A radius in device pixels.
    Px(f32),
    /// A percentage (0-100) of the shorter side of the shape.
    Percent(f32),
}

impl CornerSize {
    /// A square corner.
    pub const ZERO: Self = CornerSize::Dp(Dp::ZERO);

    /// Resolves to a pixel radius for a shape whose bounds are `width` x
    /// `height`.
    pub fn to_px(self, width: f32, height: f32, density: Density) -> f32 {
        match self {
            CornerSize::Dp(dp) => dp.to_px_f32(density),
            CornerSize::Px(px) => px,
            CornerSize::Percent(percent) => width.min(height).max(0.0) * percent / 100.0,
        }
    }
}

impl From<Dp> for CornerSize {
    fn from(dp: Dp) -> Self {
        CornerSize::Dp(dp)
    }
}

/// Builds a path for a [`Shape::Generic`] from the resolved bounds.
type PathBuilderFn = dyn Fn(Rect, LayoutDirection, Density) -> Path + Send + Sync;

/// A caller-supplied shape described by a path builder.
///
/// Compares by identity.
#[derive(Clone)]
pub struct GenericShape {
    builder: Arc<PathBuilderFn>,
}

impl GenericShape {
    /// Wraps a path builder. The builder receives the shape bounds with the
    /// origin at the top-left corner.
    pub fn new<F>(builder: F) -> Self
    where
        F: Fn(Rect, LayoutDirection, Density) -> Path + Send + Sync + 'static,
    {
        Self {
            builder: Arc::new(builder),
        }
    }

    fn build(&self, bounds: Rect, direction: LayoutDirection, density: Density) -> Path {
        (self.builder)(bounds, direction, density)
    }
}

impl PartialEq for GenericShape {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.builder, &other.builder)
    }
}

impl fmt::Debug for GenericShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GenericShape")
    }
}

/// Shape definitions for neumorphic surfaces.
///
/// # Variants
/// * [`Shape::Rectangle`] - square corners
/// * [`Shape::RoundedCorner`] - per-corner radii named by layout direction
///   (start/end), so they mirror in right-to-left layouts
/// * [`Shape::Circle`] - 50% corners; a capsule when the bounds are not square
/// * [`Shape::Ellipse`] - an ellipse filling the bounds
/// * [`Shape::Generic`] - an arbitrary path
///
/// # Example
///
/// ```
/// use neumorphic_components::shape_def::{CornerSize, Shape};
/// use neumorphic_ui::Dp;
///
/// // Uniform rounded rectangle
/// let rounded = Shape::rounded(Dp(12.0));
///
/// // Asymmetric: only the top-start and bottom-end corners are rounded
/// let leaf = Shape::RoundedCorner {
///     top_start: CornerSize::Dp(Dp(24.0)),
///     top_end: CornerSize::ZERO,
///     bottom_end: CornerSize::Dp(Dp(24.0)),
///     bottom_start: CornerSize::ZERO,
/// };
/// assert_ne!(rounded, leaf);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Shape {
    /// Square corners.
    #[default]
    Rectangle,
    /// Rounded rectangle with per-corner sizes.
    RoundedCorner {
        /// Top corner on the start side.
        top_start: CornerSize,
        /// Top corner on the end side.
        top_end: CornerSize,
        /// Bottom corner on the end side.
        bottom_end: CornerSize,
        /// Bottom corner on the start side.
        bottom_start: CornerSize,
    },
    /// Fully rounded corners.
    Circle,
    /// Ellipse fitting the bounds.
    Ellipse,
    /// Caller-supplied path.
    Generic(GenericShape),
}

impl Shape {
    /// A rounded rectangle with the same radius on every corner.
    pub const fn rounded(radius: Dp) -> Self {
        Self::uniform(CornerSize::Dp(radius))
    }

    /// A rounded rectangle whose corners are `percent` of the shorter side.
    pub const fn rounded_percent(percent: f32) -> Self {
        Self::uniform(CornerSize::Percent(percent))
    }

    const fn uniform(corner: CornerSize) -> Self {
        Shape::RoundedCorner {
            top_start: corner,
            top_end: corner,
            bottom_end: corner,
            bottom_start: corner,
        }
    }

    /// A shape defined by a path builder.
    pub fn generic<F>(builder: F) -> Self
    where
        F: Fn(Rect, LayoutDirection, Density) -> Path + Send + Sync + 'static,
    {
        Shape::Generic(GenericShape::new(builder))
    }

    /// Resolves the shape for bounds of `width` x `height` pixels anchored at
    /// the origin.
    ///
    /// Sizes are not clamped: a negative dimension yields an outline that
    /// contains no points.
    ///
    /// ```
    /// use neumorphic_components::shape_def::Shape;
    /// use neumorphic_ui::{
    ///     Density, LayoutDirection,
    ///     outline::{CornerRadii, Outline},
    /// };
    ///
    /// let outline = Shape::Circle.create_outline(100.0, 40.0, LayoutDirection::Ltr, Density::ONE);
    /// let Outline::Rounded(capsule) = outline else {
    ///     panic!("circles resolve to rounded rectangles");
    /// };
    /// assert_eq!(capsule.radii(), CornerRadii::uniform(20.0));
    /// ```
    pub fn create_outline(
        &self,
        width: f32,
        height: f32,
        direction: LayoutDirection,
        density: Density,
    ) -> Outline {
        let bounds = Rect::from_size(width, height);
        match self {
            Shape::Rectangle => Outline::Rectangle(bounds),
            Shape::RoundedCorner {
                top_start,
                top_end,
                bottom_end,
                bottom_start,
            } => {
                let resolve = |corner: &CornerSize| corner.to_px(width, height, density);
                let (top_left, top_right, bottom_right, bottom_left) = match direction {
                    LayoutDirection::Ltr => (top_start, top_end, bottom_end, bottom_start),
                    LayoutDirection::Rtl => (top_end, top_start, bottom_start, bottom_end),
                };
                let radii = CornerRadii {
                    top_left: resolve(top_left),
                    top_right: resolve(top_right),
                    bottom_right: resolve(bottom_right),
                    bottom_left: resolve(bottom_left),
                };
                if radii == CornerRadii::default() {
                    Outline::Rectangle(bounds)
                } else {
                    Outline::Rounded(RoundRect::new(bounds, radii))
                }
            }
            Shape::Circle => Shape::rounded_percent(50.0).create_outline(
                width, height, direction, density,
            ),
            Shape::Ellipse => Outline::Ellipse(bounds),
            Shape::Generic(generic) => {
                Outline::Generic(PathOutline::new(&generic.build(bounds, direction, density)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lyon_path::math::point;

    use super::*;

    #[test]
    fn rtl_mirrors_corners() {
        let shape = Shape::RoundedCorner {
            top_start: CornerSize::Px(10.0),
            top_end: CornerSize::ZERO,
            bottom_end: CornerSize::Px(4.0),
            bottom_start: CornerSize::ZERO,
        };
        let Outline::Rounded(ltr) =
            shape.create_outline(50.0, 50.0, LayoutDirection::Ltr, Density::ONE)
        else {
            panic!("expected a rounded outline");
        };
        let Outline::Rounded(rtl) =
            shape.create_outline(50.0, 50.0, LayoutDirection::Rtl, Density::ONE)
        else {
            panic!("expected a rounded outline");
        };
        assert_eq!(ltr.radii().top_left, 10.0);
        assert_eq!(ltr.radii().bottom_right, 4.0);
        assert_eq!(rtl.radii().top_right, 10.0);
        assert_eq!(rtl.radii().bottom_left, 4.0);
    }

    #[test]
    fn dp_corners_scale_with_density() {
        let Outline::Rounded(outline) = Shape::rounded(Dp(20.0)).create_outline(
            200.0,
            200.0,
            LayoutDirection::Ltr,
            Density(2.0),
        ) else {
            panic!("expected a rounded outline");
        };
        assert_eq!(outline.radii(), CornerRadii::uniform(40.0));
    }

    #[test]
    fn zero_corners_resolve_to_a_rectangle() {
        let outline = Shape::rounded(Dp::ZERO).create_outline(
            10.0,
            10.0,
            LayoutDirection::Ltr,
            Density::ONE,
        );
        assert_eq!(outline, Outline::Rectangle(Rect::from_size(10.0, 10.0)));
    }

    #[test]
    fn negative_size_contains_nothing() {
        for shape in [Shape::Rectangle, Shape::Circle, Shape::Ellipse] {
            let outline = shape.create_outline(-4.0, 10.0, LayoutDirection::Ltr, Density::ONE);
            assert!(!outline.contains(-2.0, 5.0), "{shape:?}");
            assert!(!outline.contains(0.0, 5.0), "{shape:?}");
        }
    }

    #[test]
    fn generic_shapes_receive_their_bounds() {
        let triangle = Shape::generic(|bounds, _, _| {
            let mut builder = Path::builder();
            builder.begin(point(bounds.x, bounds.y));
            builder.line_to(point(bounds.right(), bounds.y));
            builder.line_to(point(bounds.x, bounds.bottom()));
            builder.end(true);
            builder.build()
        });
        let outline = triangle.create_outline(20.0, 20.0, LayoutDirection::Ltr, Density::ONE);
        assert!(outline.contains(2.0, 2.0));
        assert!(!outline.contains(18.0, 18.0));
        assert_eq!(triangle, triangle.clone());
    }
}
