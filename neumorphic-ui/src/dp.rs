//! # Density-Independent Pixels (Dp)
//!
//! [`Dp`] is the unit every component argument is expressed in. A `Dp` value
//! only becomes a device length once it meets a [`Density`], which is carried
//! by the drawing surface for the current frame.
//!
//! ```
//! use neumorphic_ui::{Density, Dp};
//!
//! let padding = Dp(16.0);
//! assert_eq!(padding.to_px_f32(Density(2.0)), 32.0);
//! assert_eq!(Dp::from_px_f32(48.0, Density(3.0)), Dp(16.0));
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Px;

/// Density-independent pixels.
///
/// The wrapped value is converted to device pixels by multiplying with the
/// surface [`Density`]; "4 dp" on a density-2 surface is 8 device pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero length.
    pub const ZERO: Self = Dp(0.0);

    /// Creates a new `Dp` value. Usable in constants.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to device pixels as `f32`.
    pub fn to_px_f32(self, density: Density) -> f32 {
        (self.0 * density.0 as f64) as f32
    }

    /// Converts to integer device pixels, rounding to the nearest pixel.
    pub fn to_px(self, density: Density) -> Px {
        Px::saturating_from_f32(self.to_px_f32(density).round())
    }

    /// Creates a `Dp` value from device pixels.
    pub fn from_px_f32(value: f32, density: Density) -> Self {
        if density.0 == 0.0 {
            return Dp::ZERO;
        }
        Dp(value as f64 / density.0 as f64)
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Self) -> Self::Output {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Self) -> Self::Output {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Self::Output {
        Dp(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Dp;

    fn div(self, rhs: f64) -> Self::Output {
        Dp(self.0 / rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Self::Output {
        Dp(-self.0)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

/// Device pixels per [`Dp`] for a drawing surface.
///
/// A density of `1.0` maps one dp to one pixel, `2.0` is a typical high-DPI
/// phone screen.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(pub f32);

impl Density {
    /// One device pixel per dp.
    pub const ONE: Self = Density(1.0);
}

impl Default for Density {
    fn default() -> Self {
        Self::ONE
    }
}
