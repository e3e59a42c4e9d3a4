//! # Layout
//!
//! Components size themselves in a single measure pass driven by
//! [`Constraint`]s handed down from their parent:
//!
//! - [`DimensionValue::Fixed`] - an exact size that the parent cannot override
//! - [`DimensionValue::Wrap`] - as small as the content, within optional bounds
//! - [`DimensionValue::Fill`] - as large as the parent allows, within optional
//!   bounds
//!
//! A component combines its own preferred constraint with the one it received
//! using [`Constraint::merge`], then resolves each axis to a concrete [`Px`]
//! length with [`DimensionValue::resolve`].
//!
//! ```
//! use neumorphic_ui::{Constraint, DimensionValue, Px};
//!
//! let parent = Constraint::new(DimensionValue::Fixed(Px(200)), DimensionValue::WRAP);
//! let child = Constraint::new(DimensionValue::FILLED, DimensionValue::Fixed(Px(32)));
//!
//! let merged = child.merge(&parent);
//! assert_eq!(merged.width.resolve(Px(0)), Px(200));
//! assert_eq!(merged.height.resolve(Px(0)), Px(32));
//! ```

use crate::{
    Density, Dp, Px, PxSize,
    cursor::InputHandlerInput,
    renderer::DrawScope,
};

/// Horizontal reading direction used to resolve start/end anchors and
/// start/end corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Defines how a dimension (width or height) should be calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionValue {
    /// An exact size in pixels. Fixed dimensions are never overridden by the
    /// parent.
    Fixed(Px),
    /// Size to the content, optionally bounded.
    Wrap {
        /// Lower bound.
        min: Option<Px>,
        /// Upper bound.
        max: Option<Px>,
    },
    /// Take all the space the parent offers, optionally bounded.
    Fill {
        /// Lower bound.
        min: Option<Px>,
        /// Upper bound.
        max: Option<Px>,
    },
}

impl DimensionValue {
    /// Zero-sized dimension, equivalent to `Fixed(Px(0))`.
    pub const ZERO: Self = DimensionValue::Fixed(Px(0));

    /// Fill with no bounds.
    pub const FILLED: Self = DimensionValue::Fill {
        min: None,
        max: None,
    };

    /// Wrap with no bounds.
    pub const WRAP: Self = DimensionValue::Wrap {
        min: None,
        max: None,
    };

    /// Returns the upper bound, or `default` when unbounded.
    pub fn to_max_px(&self, default: Px) -> Px {
        self.get_max().unwrap_or(default)
    }

    /// Upper bound, if any. `Fixed` reports its own value.
    pub fn get_max(&self) -> Option<Px> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { max, .. } | DimensionValue::Fill { max, .. } => *max,
        }
    }

    /// Lower bound, if any. `Fixed` reports its own value.
    pub fn get_min(&self) -> Option<Px> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { min, .. } | DimensionValue::Fill { min, .. } => *min,
        }
    }

    /// Resolves the dimension to a length given the size the content asks
    /// for.
    ///
    /// `Fill` without an upper bound behaves like `Wrap`, since there is no
    /// space to expand into.
    pub fn resolve(&self, content: Px) -> Px {
        let clamp = |value: Px, min: Option<Px>, max: Option<Px>| {
            let value = max.map_or(value, |max| value.min(max));
            min.map_or(value, |min| value.max(min))
        };
        match *self {
            DimensionValue::Fixed(value) => value,
            DimensionValue::Wrap { min, max } => clamp(content, min, max),
            DimensionValue::Fill { min, max } => clamp(max.unwrap_or(content), min, max),
        }
    }
}

impl Default for DimensionValue {
    fn default() -> Self {
        Self::WRAP
    }
}

/// A preferred component dimension in density-independent units, as written
/// in component arguments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// An exact length.
    Fixed(Dp),
    /// Size to the content.
    #[default]
    Wrap,
    /// Take all the space the parent offers.
    Fill,
}

impl Length {
    /// Converts to a pixel [`DimensionValue`].
    pub fn to_dimension(self, density: Density) -> DimensionValue {
        match self {
            Length::Fixed(dp) => DimensionValue::Fixed(dp.max(Dp::ZERO).to_px(density)),
            Length::Wrap => DimensionValue::WRAP,
            Length::Fill => DimensionValue::FILLED,
        }
    }
}

impl From<Dp> for Length {
    fn from(dp: Dp) -> Self {
        Length::Fixed(dp)
    }
}

/// Width and height requirements of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraint {
    /// Horizontal requirement.
    pub width: DimensionValue,
    /// Vertical requirement.
    pub height: DimensionValue,
}

impl Constraint {
    /// Unbounded wrap on both axes.
    pub const NONE: Self = Self {
        width: DimensionValue::WRAP,
        height: DimensionValue::WRAP,
    };

    /// Creates a new constraint.
    pub fn new(width: DimensionValue, height: DimensionValue) -> Self {
        Self { width, height }
    }

    /// The constraint a component with the given preferred lengths asks for.
    pub fn from_lengths(width: Length, height: Length, density: Density) -> Self {
        Self::new(width.to_dimension(density), height.to_dimension(density))
    }

    /// A constraint that fixes both axes to `size`.
    pub fn fixed(size: PxSize) -> Self {
        Self::new(
            DimensionValue::Fixed(size.width),
            DimensionValue::Fixed(size.height),
        )
    }

    /// Merges this (child) constraint with the parent's.
    ///
    /// - `Fixed` children keep their size.
    /// - `Wrap` children keep their own minimum; the maximum becomes the
    ///   tighter of their own and whatever the parent can offer.
    /// - `Fill` children take the parent's space as their maximum.
    pub fn merge(&self, parent_constraint: &Constraint) -> Self {
        Constraint::new(
            Self::merge_dimension(self.width, parent_constraint.width),
            Self::merge_dimension(self.height, parent_constraint.height),
        )
    }

    fn merge_dimension(child: DimensionValue, parent: DimensionValue) -> DimensionValue {
        let tighter = |a: Option<Px>, b: Option<Px>| match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        match child {
            DimensionValue::Fixed(value) => DimensionValue::Fixed(value),
            DimensionValue::Wrap { min, max } => DimensionValue::Wrap {
                min,
                max: tighter(max, parent.get_max()),
            },
            DimensionValue::Fill { min, max } => match parent {
                DimensionValue::Fixed(value) => DimensionValue::Fill {
                    min,
                    max: tighter(max, Some(value)),
                },
                DimensionValue::Wrap {
                    min: parent_min,
                    max: parent_max,
                } => DimensionValue::Fill {
                    min: min.or(parent_min),
                    max: tighter(max, parent_max),
                },
                DimensionValue::Fill {
                    min: parent_min,
                    max: parent_max,
                } => {
                    let min = match (min, parent_min) {
                        (Some(a), Some(b)) => Some(a.max(b)),
                        (a, b) => a.or(b),
                    };
                    let max = tighter(max, parent_max);
                    match (min, max) {
                        (Some(min), Some(max)) if min > max => DimensionValue::Fill {
                            min: Some(max),
                            max: Some(max),
                        },
                        _ => DimensionValue::Fill { min, max },
                    }
                }
            },
        }
    }
}

/// The size a component settled on during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComputedData {
    /// Width in pixels.
    pub width: Px,
    /// Height in pixels.
    pub height: Px,
}

impl ComputedData {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates computed data from a size.
    pub fn new(size: PxSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }

    /// The measured size.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }
}

/// Everything a component needs to measure itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureInput {
    /// Constraint offered by the parent.
    pub constraint: Constraint,
    /// Surface density.
    pub density: Density,
    /// Reading direction.
    pub layout_direction: LayoutDirection,
}

impl MeasureInput {
    /// Creates a measure input.
    pub fn new(
        constraint: Constraint,
        density: Density,
        layout_direction: LayoutDirection,
    ) -> Self {
        Self {
            constraint,
            density,
            layout_direction,
        }
    }

    /// The same environment with a different constraint, used to measure
    /// children.
    pub fn with_constraint(&self, constraint: Constraint) -> Self {
        Self { constraint, ..*self }
    }
}

/// A node of the UI tree.
///
/// Containers are responsible for measuring, positioning and forwarding
/// drawing and input to their children. Positions are not cached between
/// phases: a container repeats the measurement of its children when it
/// records or handles input, which keeps every phase a pure function of the
/// component arguments and the caller-owned state.
pub trait Component {
    /// Computes the component size under `input.constraint`.
    fn measure(&self, input: &MeasureInput) -> ComputedData;

    /// Draws the component into `scope`, whose size is the measured size.
    fn record(&self, scope: &mut DrawScope<'_>);

    /// Reacts to pointer and text input. Event positions are relative to the
    /// component's top-left corner.
    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        let _ = input;
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        (**self).measure(input)
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        (**self).record(scope)
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        (**self).handle_input(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(min: Option<i32>, max: Option<i32>) -> DimensionValue {
        DimensionValue::Wrap {
            min: min.map(Px),
            max: max.map(Px),
        }
    }

    fn fill(min: Option<i32>, max: Option<i32>) -> DimensionValue {
        DimensionValue::Fill {
            min: min.map(Px),
            max: max.map(Px),
        }
    }

    #[test]
    fn test_fixed_parent_wrap_child_wrap_grandchild() {
        let parent = Constraint::new(
            DimensionValue::Fixed(Px(100)),
            DimensionValue::Fixed(Px(100)),
        );
        let child = Constraint::new(wrap(Some(20), Some(80)), wrap(Some(20), Some(80)));
        let grandchild = Constraint::new(wrap(Some(10), Some(50)), wrap(Some(10), Some(50)));

        let merged_child = child.merge(&parent);
        assert_eq!(merged_child.width, wrap(Some(20), Some(80)));

        let merged_grandchild = grandchild.merge(&merged_child);
        assert_eq!(merged_grandchild.width, wrap(Some(10), Some(50)));
        assert_eq!(merged_grandchild.height, wrap(Some(10), Some(50)));
    }

    #[test]
    fn test_fixed_parent_wrap_child() {
        let parent = Constraint::new(
            DimensionValue::Fixed(Px(100)),
            DimensionValue::Fixed(Px(100)),
        );
        let child = Constraint::new(wrap(Some(30), Some(120)), wrap(Some(30), None));

        let result = child.merge(&parent);
        assert_eq!(result.width, wrap(Some(30), Some(100)));
        assert_eq!(result.height, wrap(Some(30), Some(100)));
    }

    #[test]
    fn test_fill_parent_wrap_child() {
        let parent = Constraint::new(fill(Some(50), Some(200)), fill(Some(50), None));
        let child = Constraint::new(wrap(Some(30), Some(150)), wrap(None, None));

        let result = child.merge(&parent);
        assert_eq!(result.width, wrap(Some(30), Some(150)));
        assert_eq!(result.height, wrap(None, None));
    }

    #[test]
    fn test_fixed_parent_fill_child() {
        let parent = Constraint::new(
            DimensionValue::Fixed(Px(100)),
            DimensionValue::Fixed(Px(100)),
        );
        let child = Constraint::new(fill(Some(30), Some(120)), fill(Some(30), None));

        let result = child.merge(&parent);
        assert_eq!(result.width, fill(Some(30), Some(100)));
        assert_eq!(result.height, fill(Some(30), Some(100)));
    }

    #[test]
    fn test_wrap_parent_fill_child_inherits_min() {
        let parent = Constraint::new(wrap(Some(40), Some(300)), wrap(None, None));
        let child = Constraint::new(fill(None, None), fill(Some(10), Some(20)));

        let result = child.merge(&parent);
        assert_eq!(result.width, fill(Some(40), Some(300)));
        assert_eq!(result.height, fill(Some(10), Some(20)));
    }

    #[test]
    fn test_fill_parent_fill_child_keeps_min_below_max() {
        let parent = Constraint::new(fill(Some(10), Some(50)), fill(None, None));
        let child = Constraint::new(fill(Some(80), None), fill(None, None));

        let result = child.merge(&parent);
        assert_eq!(result.width, fill(Some(50), Some(50)));
    }

    #[test]
    fn test_fixed_child_ignores_parent() {
        let parent = Constraint::new(DimensionValue::Fixed(Px(10)), fill(None, Some(5)));
        let child = Constraint::new(DimensionValue::Fixed(Px(64)), DimensionValue::Fixed(Px(32)));
        assert_eq!(child.merge(&parent), child);
    }

    #[test]
    fn test_lengths_convert_with_density() {
        let constraint =
            Constraint::from_lengths(Length::Fixed(Dp(64.0)), Length::Fill, Density(2.0));
        assert_eq!(constraint.width, DimensionValue::Fixed(Px(128)));
        assert_eq!(constraint.height, DimensionValue::FILLED);
        assert_eq!(Length::Fixed(Dp(-4.0)).to_dimension(Density::ONE), DimensionValue::ZERO);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(DimensionValue::Fixed(Px(7)).resolve(Px(100)), Px(7));
        assert_eq!(wrap(Some(10), Some(50)).resolve(Px(5)), Px(10));
        assert_eq!(wrap(Some(10), Some(50)).resolve(Px(80)), Px(50));
        assert_eq!(fill(None, Some(300)).resolve(Px(5)), Px(300));
        assert_eq!(fill(Some(20), None).resolve(Px(5)), Px(20));
    }
}
