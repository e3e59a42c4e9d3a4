//! Constraint arithmetic shared by padded containers.

use neumorphic_ui::{Constraint, DimensionValue, Px};

/// Shrinks every bound of `dimension` by `amount`, never below zero.
pub(crate) fn shrink_dimension(dimension: DimensionValue, amount: Px) -> DimensionValue {
    let shrink = |value: Px| (value - amount).max(Px::ZERO);
    match dimension {
        DimensionValue::Fixed(value) => DimensionValue::Fixed(shrink(value)),
        DimensionValue::Wrap { min, max } => DimensionValue::Wrap {
            min: min.map(shrink),
            max: max.map(shrink),
        },
        DimensionValue::Fill { min, max } => DimensionValue::Fill {
            min: min.map(shrink),
            max: max.map(shrink),
        },
    }
}

/// The constraint left for content once `horizontal` and `vertical` pixels of
/// padding (both sides combined) are taken out.
pub(crate) fn shrink_constraint(
    constraint: Constraint,
    horizontal: Px,
    vertical: Px,
) -> Constraint {
    Constraint::new(
        shrink_dimension(constraint.width, horizontal),
        shrink_dimension(constraint.height, vertical),
    )
}

/// Clamps a normalized value to `[0, 1]`. NaN maps to zero.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinking_saturates_at_zero() {
        assert_eq!(
            shrink_dimension(DimensionValue::Fixed(Px(10)), Px(40)),
            DimensionValue::Fixed(Px(0))
        );
        assert_eq!(
            shrink_dimension(
                DimensionValue::Fill {
                    min: None,
                    max: Some(Px(100))
                },
                Px(40)
            ),
            DimensionValue::Fill {
                min: None,
                max: Some(Px(60))
            }
        );
        assert_eq!(shrink_dimension(DimensionValue::WRAP, Px(40)), DimensionValue::WRAP);
    }

    #[test]
    fn unit_values_clamp() {
        assert_eq!(clamp_unit(-0.3), 0.0);
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
    }
}
