//! Resolved geometric boundaries of shapes.
//!
//! An [`Outline`] is what a shape turns into once it knows its size: a
//! rectangle, a rounded rectangle with per-corner radii, an ellipse or an
//! arbitrary path. Outlines live in local `f32` pixel space with the origin at
//! the top-left of the surface being drawn.

use std::sync::Arc;

use lyon_path::{Path, PathEvent, iterator::PathIterator};

/// Flattening tolerance for curved path segments, in pixels.
const PATH_TOLERANCE: f32 = 0.1;

/// A rectangle in `f32` pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle anchored at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns `true` when the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Returns whether the point lies inside (left/top inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns the rectangle moved by the given deltas.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Grows the rectangle by `amount` on every side.
    pub fn outset(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }
}

/// Pixel radii of the four corners of a rounded rectangle, in physical
/// order (not layout-direction aware).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    /// Top-left radius.
    pub top_left: f32,
    /// Top-right radius.
    pub top_right: f32,
    /// Bottom-right radius.
    pub bottom_right: f32,
    /// Bottom-left radius.
    pub bottom_left: f32,
}

impl CornerRadii {
    /// All corners share the same radius.
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    fn scaled(self, scale: f32) -> Self {
        Self {
            top_left: self.top_left * scale,
            top_right: self.top_right * scale,
            bottom_right: self.bottom_right * scale,
            bottom_left: self.bottom_left * scale,
        }
    }
}

/// A rectangle with circular corners.
///
/// Radii that would overlap along an edge are scaled down together so every
/// corner keeps its proportion, the same rule CSS border-radius uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRect {
    rect: Rect,
    radii: CornerRadii,
}

impl RoundRect {
    /// Creates a rounded rectangle, normalising negative and overlapping
    /// radii.
    ///
    /// ```
    /// use neumorphic_ui::outline::{CornerRadii, Rect, RoundRect};
    ///
    /// let pill = RoundRect::new(Rect::from_size(100.0, 20.0), CornerRadii::uniform(50.0));
    /// assert_eq!(pill.radii(), CornerRadii::uniform(10.0));
    /// ```
    pub fn new(rect: Rect, radii: CornerRadii) -> Self {
        let radii = CornerRadii {
            top_left: radii.top_left.max(0.0),
            top_right: radii.top_right.max(0.0),
            bottom_right: radii.bottom_right.max(0.0),
            bottom_left: radii.bottom_left.max(0.0),
        };
        let width = rect.width.max(0.0);
        let height = rect.height.max(0.0);
        let mut scale = 1.0f32;
        for (sum, side) in [
            (radii.top_left + radii.top_right, width),
            (radii.bottom_left + radii.bottom_right, width),
            (radii.top_left + radii.bottom_left, height),
            (radii.top_right + radii.bottom_right, height),
        ] {
            if sum > side && sum > 0.0 {
                scale = scale.min(side / sum);
            }
        }
        Self {
            rect,
            radii: radii.scaled(scale),
        }
    }

    /// The bounding rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The normalised corner radii.
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    /// Returns whether the point lies inside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let rect = self.rect;
        if !rect.contains(x, y) {
            return false;
        }
        let corners = [
            (self.radii.top_left, rect.x, rect.y, 1.0, 1.0),
            (self.radii.top_right, rect.right(), rect.y, -1.0, 1.0),
            (self.radii.bottom_right, rect.right(), rect.bottom(), -1.0, -1.0),
            (self.radii.bottom_left, rect.x, rect.bottom(), 1.0, -1.0),
        ];
        for (radius, corner_x, corner_y, sx, sy) in corners {
            if radius <= 0.0 {
                continue;
            }
            let cx = corner_x + sx * radius;
            let cy = corner_y + sy * radius;
            let in_corner_x = if sx > 0.0 { x < cx } else { x > cx };
            let in_corner_y = if sy > 0.0 { y < cy } else { y > cy };
            if in_corner_x && in_corner_y {
                let dx = x - cx;
                let dy = y - cy;
                return dx * dx + dy * dy <= radius * radius;
            }
        }
        true
    }
}

/// A closed polygon set flattened from a path, filled with the non-zero
/// winding rule.
#[derive(Debug, Clone, PartialEq)]
pub struct PathOutline {
    edges: Arc<[[f32; 4]]>,
    bounds: Rect,
}

impl PathOutline {
    /// Flattens a lyon path. Every sub-path is treated as closed.
    pub fn new(path: &Path) -> Self {
        let mut edges = Vec::new();
        for event in path.iter().flattened(PATH_TOLERANCE) {
            match event {
                PathEvent::Line { from, to } => edges.push([from.x, from.y, to.x, to.y]),
                PathEvent::End { last, first, .. } if last != first => {
                    edges.push([last.x, last.y, first.x, first.y]);
                }
                _ => {}
            }
        }

        let bounds = if edges.is_empty() {
            Rect::default()
        } else {
            let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
            let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
            for [x0, y0, x1, y1] in edges.iter().copied() {
                min_x = min_x.min(x0).min(x1);
                min_y = min_y.min(y0).min(y1);
                max_x = max_x.max(x0).max(x1);
                max_y = max_y.max(y0).max(y1);
            }
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        };

        Self {
            edges: edges.into(),
            bounds,
        }
    }

    /// Bounding box of all edges.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the outline moved by the given deltas.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            edges: self
                .edges
                .iter()
                .map(|[x0, y0, x1, y1]| [x0 + dx, y0 + dy, x1 + dx, y1 + dy])
                .collect(),
            bounds: self.bounds.translate(dx, dy),
        }
    }

    /// Returns whether the point lies inside under the non-zero rule.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let mut winding = 0i32;
        for [x0, y0, x1, y1] in self.edges.iter().copied() {
            let side = (x1 - x0) * (y - y0) - (x - x0) * (y1 - y0);
            if y0 <= y {
                if y1 > y && side > 0.0 {
                    winding += 1;
                }
            } else if y1 <= y && side < 0.0 {
                winding -= 1;
            }
        }
        winding != 0
    }
}

/// The resolved boundary of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// An axis-aligned rectangle.
    Rectangle(Rect),
    /// A rectangle with per-corner radii.
    Rounded(RoundRect),
    /// An ellipse inscribed in the rectangle.
    Ellipse(Rect),
    /// An arbitrary closed path.
    Generic(PathOutline),
}

impl Outline {
    /// Bounding box of the outline.
    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Rectangle(rect) | Outline::Ellipse(rect) => *rect,
            Outline::Rounded(round) => round.rect(),
            Outline::Generic(path) => path.bounds(),
        }
    }

    /// Returns the outline moved by the given deltas.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        match self {
            Outline::Rectangle(rect) => Outline::Rectangle(rect.translate(dx, dy)),
            Outline::Rounded(round) => Outline::Rounded(RoundRect {
                rect: round.rect.translate(dx, dy),
                radii: round.radii,
            }),
            Outline::Ellipse(rect) => Outline::Ellipse(rect.translate(dx, dy)),
            Outline::Generic(path) => Outline::Generic(path.translate(dx, dy)),
        }
    }

    /// Whether the outline is convex, which lets the rasterizer classify whole
    /// pixels from their corners.
    pub fn is_convex(&self) -> bool {
        !matches!(self, Outline::Generic(_))
    }

    /// Returns whether the point lies inside the outline.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        match self {
            Outline::Rectangle(rect) => rect.contains(x, y),
            Outline::Rounded(round) => round.contains(x, y),
            Outline::Ellipse(rect) => {
                let rx = rect.width / 2.0;
                let ry = rect.height / 2.0;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let dx = (x - (rect.x + rx)) / rx;
                let dy = (y - (rect.y + ry)) / ry;
                dx * dx + dy * dy <= 1.0
            }
            Outline::Generic(path) => path.contains(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use lyon_path::math::point;

    use super::*;

    #[test]
    fn rounded_corners_exclude_the_corner_pixel() {
        let outline = Outline::Rounded(RoundRect::new(
            Rect::from_size(20.0, 20.0),
            CornerRadii::uniform(8.0),
        ));
        assert!(!outline.contains(0.5, 0.5));
        assert!(!outline.contains(19.5, 19.5));
        assert!(outline.contains(10.0, 0.5));
        assert!(outline.contains(0.5, 10.0));
    }

    #[test]
    fn overlapping_radii_scale_proportionally() {
        let round = RoundRect::new(
            Rect::from_size(40.0, 10.0),
            CornerRadii {
                top_left: 30.0,
                top_right: 10.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
        );
        let radii = round.radii();
        // The left edge (30 + 0 over 10) is the tightest constraint.
        assert!((radii.top_left - 10.0).abs() < 1e-4);
        assert!((radii.top_right - 10.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn negative_radii_are_treated_as_square() {
        let round = RoundRect::new(Rect::from_size(10.0, 10.0), CornerRadii::uniform(-4.0));
        assert_eq!(round.radii(), CornerRadii::uniform(0.0));
        assert!(round.contains(0.1, 0.1));
    }

    #[test]
    fn ellipse_containment() {
        let outline = Outline::Ellipse(Rect::from_size(20.0, 10.0));
        assert!(outline.contains(10.0, 5.0));
        assert!(outline.contains(1.0, 5.0));
        assert!(!outline.contains(1.0, 1.0));
        assert!(!Outline::Ellipse(Rect::from_size(0.0, 10.0)).contains(0.0, 5.0));
    }

    #[test]
    fn path_outline_uses_nonzero_winding() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(10.0, 0.0));
        builder.line_to(point(0.0, 10.0));
        builder.end(true);
        let outline = Outline::Generic(PathOutline::new(&builder.build()));

        assert!(outline.contains(2.0, 2.0));
        assert!(!outline.contains(8.0, 8.0));
        assert_eq!(outline.bounds(), Rect::from_size(10.0, 10.0));
        assert!(!outline.is_convex());
    }

    #[test]
    fn translation_moves_containment() {
        let outline = Outline::Rounded(RoundRect::new(
            Rect::from_size(10.0, 10.0),
            CornerRadii::uniform(2.0),
        ))
        .translate(-3.0, 5.0);
        assert_eq!(outline.bounds(), Rect::new(-3.0, 5.0, 10.0, 10.0));
        assert!(outline.contains(2.0, 10.0));
        assert!(!outline.contains(2.0, 2.0));
    }
}
