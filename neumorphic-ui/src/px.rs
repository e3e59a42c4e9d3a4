//! Integer device-pixel coordinates used by layout and hit testing.
//!
//! - [`Px`] - a single coordinate value, negative values are allowed
//! - [`PxPosition`] - a point (x, y)
//! - [`PxSize`] - a width and height
//! - [`PxRect`] - a positioned rectangle
//!
//! The origin is the top-left corner, x grows to the right and y grows
//! downward.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A device pixel coordinate value.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);
    /// The largest representable value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the value as `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Converts from `f32`, truncating toward zero and saturating at the
    /// `i32` bounds.
    pub fn saturating_from_f32(value: f32) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        Px(value.clamp(i32::MIN as f32, i32::MAX as f32) as i32)
    }

    /// Returns the value if positive, otherwise zero.
    pub fn positive(self) -> u32 {
        self.0.max(0) as u32
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Multiplies by a float factor, truncating the result.
    pub fn mul_f32(self, rhs: f32) -> Self {
        Px::saturating_from_f32(self.0 as f32 * rhs)
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Mul<i32> for Px {
    type Output = Px;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<i32> for Px {
    type Output = Px;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

/// A 2D position in device pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns the position moved by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for PxPosition {
    type Output = PxPosition;

    fn add(self, rhs: Self) -> Self::Output {
        PxPosition::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PxPosition {
    type Output = PxPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        PxPosition::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size in device pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Width.
    pub width: Px,
    /// Height.
    pub height: Px,
}

impl PxSize {
    /// A zero size.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width.0 <= 0 || self.height.0 <= 0
    }
}

/// A rectangle in device pixels, positioned by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// Left edge.
    pub x: Px,
    /// Top edge.
    pub y: Px,
    /// Width.
    pub width: Px,
    /// Height.
    pub height: Px,
}

impl PxRect {
    /// A zero rectangle at the origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a position and a size.
    pub fn from_position_size(position: PxPosition, size: PxSize) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Top-left corner.
    pub fn position(&self) -> PxPosition {
        PxPosition::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> Px {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> Px {
        self.y + self.height
    }

    /// Returns the overlapping region, or `None` when the rectangles do not
    /// overlap.
    ///
    /// ```
    /// use neumorphic_ui::{Px, PxRect};
    ///
    /// let a = PxRect::new(Px(0), Px(0), Px(100), Px(100));
    /// let b = PxRect::new(Px(50), Px(50), Px(100), Px(100));
    /// assert_eq!(
    ///     a.intersection(&b),
    ///     Some(PxRect::new(Px(50), Px(50), Px(50), Px(50)))
    /// );
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x1 = self.x.0.max(other.x.0);
        let y1 = self.y.0.max(other.y.0);
        let x2 = self.right().0.min(other.right().0);
        let y2 = self.bottom().0.min(other.bottom().0);

        if x1 < x2 && y1 < y2 {
            Some(Self::new(Px(x1), Px(y1), Px(x2 - x1), Px(y2 - y1)))
        } else {
            None
        }
    }

    /// Returns whether the point lies inside the rectangle.
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x.0 >= self.x.0
            && point.x.0 < self.right().0
            && point.y.0 >= self.y.0
            && point.y.0 < self.bottom().0
    }

    /// Shrinks the rectangle by `inset` on every side. The size never goes
    /// below zero; the rectangle collapses toward its centre instead.
    pub fn inset(&self, inset: Px) -> Self {
        self.inset_sides(inset, inset, inset, inset)
    }

    /// Shrinks the rectangle by individual amounts per side.
    pub fn inset_sides(&self, left: Px, top: Px, right: Px, bottom: Px) -> Self {
        let width = self.width.0 - left.0 - right.0;
        let height = self.height.0 - top.0 - bottom.0;
        let (x, width) = if width < 0 {
            (self.x.0 + self.width.0 / 2, 0)
        } else {
            (self.x.0 + left.0, width)
        };
        let (y, height) = if height < 0 {
            (self.y.0 + self.height.0 / 2, 0)
        } else {
            (self.y.0 + top.0, height)
        };
        Self::new(Px(x), Px(y), Px(width), Px(height))
    }

    /// Returns the rectangle moved by the given deltas.
    pub fn translate(&self, dx: Px, dy: Px) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}
