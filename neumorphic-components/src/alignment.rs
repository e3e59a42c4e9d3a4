//! Defines alignment options for layout components.

use neumorphic_ui::{LayoutDirection, Px, PxPosition, PxSize};

/// Specifies how children are aligned along the cross axis of a
/// [`crate::column::Column`].
///
/// `Start` and `End` follow the layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAxisAlignment {
    /// Align children to the start edge.
    #[default]
    Start,
    /// Center children along the cross axis.
    Center,
    /// Align children to the end edge.
    End,
    /// Stretch children to fill the entire cross axis.
    Stretch,
}

impl CrossAxisAlignment {
    /// Offset of a child of length `child` inside `available`.
    ///
    /// A child longer than `available` overflows; centered children overflow
    /// evenly on both sides.
    pub fn offset(self, available: Px, child: Px, direction: LayoutDirection) -> Px {
        let free = available - child;
        let start = match direction {
            LayoutDirection::Ltr => Px::ZERO,
            LayoutDirection::Rtl => free,
        };
        match self {
            CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => start,
            CrossAxisAlignment::Center => free / 2,
            CrossAxisAlignment::End => free - start,
        }
    }
}

/// Specifies the alignment of a child within its parent container, both
/// vertically and horizontally.
///
/// # Variants
/// - `TopStart`: Top edge, start side.
/// - `TopCenter`: Top edge, centered horizontally.
/// - `TopEnd`: Top edge, end side.
/// - `CenterStart`: Center vertically, start side.
/// - `Center`: Center both vertically and horizontally.
/// - `CenterEnd`: Center vertically, end side.
/// - `BottomStart`: Bottom edge, start side.
/// - `BottomCenter`: Bottom edge, centered horizontally.
/// - `BottomEnd`: Bottom edge, end side.
///
/// The start side is the left in [`LayoutDirection::Ltr`] and the right in
/// [`LayoutDirection::Rtl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Top edge, start side.
    TopStart,
    /// Top edge, centered horizontally.
    TopCenter,
    /// Top edge, end side.
    TopEnd,
    /// Center vertically, start side.
    CenterStart,
    /// Center both vertically and horizontally.
    Center,
    /// Center vertically, end side.
    CenterEnd,
    /// Bottom edge, start side.
    BottomStart,
    /// Bottom edge, centered horizontally.
    BottomCenter,
    /// Bottom edge, end side.
    BottomEnd,
}

impl Default for Alignment {
    /// Returns [`Alignment::TopStart`] as the default value.
    ///
    /// # Example
    ///
    /// ```
    /// use neumorphic_components::alignment::Alignment;
    /// assert_eq!(Alignment::default(), Alignment::TopStart);
    /// ```
    fn default() -> Self {
        Self::TopStart
    }
}

impl Alignment {
    /// Position of a `child` box inside a `container` box.
    ///
    /// A child larger than the container overflows it; centered children
    /// overflow evenly on both sides.
    ///
    /// ```
    /// use neumorphic_components::alignment::Alignment;
    /// use neumorphic_ui::{LayoutDirection, Px, PxPosition, PxSize};
    ///
    /// let container = PxSize::new(Px(100), Px(40));
    /// let child = PxSize::new(Px(20), Px(20));
    /// assert_eq!(
    ///     Alignment::CenterEnd.align(container, child, LayoutDirection::Ltr),
    ///     PxPosition::new(Px(80), Px(10))
    /// );
    /// assert_eq!(
    ///     Alignment::CenterEnd.align(container, child, LayoutDirection::Rtl),
    ///     PxPosition::new(Px(0), Px(10))
    /// );
    /// ```
    pub fn align(self, container: PxSize, child: PxSize, direction: LayoutDirection) -> PxPosition {
        let horizontal = match self {
            Alignment::TopStart | Alignment::CenterStart | Alignment::BottomStart => {
                CrossAxisAlignment::Start
            }
            Alignment::TopCenter | Alignment::Center | Alignment::BottomCenter => {
                CrossAxisAlignment::Center
            }
            Alignment::TopEnd | Alignment::CenterEnd | Alignment::BottomEnd => {
                CrossAxisAlignment::End
            }
        };
        let free_y = container.height - child.height;
        let y = match self {
            Alignment::TopStart | Alignment::TopCenter | Alignment::TopEnd => Px::ZERO,
            Alignment::CenterStart | Alignment::Center | Alignment::CenterEnd => free_y / 2,
            Alignment::BottomStart | Alignment::BottomCenter | Alignment::BottomEnd => free_y,
        };
        PxPosition::new(
            horizontal.offset(container.width, child.width, direction),
            y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: PxSize = PxSize::new(Px(100), Px(50));
    const CHILD: PxSize = PxSize::new(Px(10), Px(10));

    #[test]
    fn all_anchors_ltr() {
        let cases = [
            (Alignment::TopStart, (0, 0)),
            (Alignment::TopCenter, (45, 0)),
            (Alignment::TopEnd, (90, 0)),
            (Alignment::CenterStart, (0, 20)),
            (Alignment::Center, (45, 20)),
            (Alignment::CenterEnd, (90, 20)),
            (Alignment::BottomStart, (0, 40)),
            (Alignment::BottomCenter, (45, 40)),
            (Alignment::BottomEnd, (90, 40)),
        ];
        for (alignment, (x, y)) in cases {
            assert_eq!(
                alignment.align(CONTAINER, CHILD, LayoutDirection::Ltr),
                PxPosition::new(Px(x), Px(y)),
                "{alignment:?}"
            );
        }
    }

    #[test]
    fn start_and_end_swap_in_rtl() {
        assert_eq!(
            Alignment::TopStart.align(CONTAINER, CHILD, LayoutDirection::Rtl),
            PxPosition::new(Px(90), Px(0))
        );
        assert_eq!(
            Alignment::BottomEnd.align(CONTAINER, CHILD, LayoutDirection::Rtl),
            PxPosition::new(Px(0), Px(40))
        );
        assert_eq!(
            Alignment::Center.align(CONTAINER, CHILD, LayoutDirection::Rtl),
            PxPosition::new(Px(45), Px(20))
        );
    }

    #[test]
    fn oversized_child_overflows_evenly_when_centered() {
        let big = PxSize::new(Px(200), Px(80));
        assert_eq!(
            Alignment::Center.align(CONTAINER, big, LayoutDirection::Ltr),
            PxPosition::new(Px(-50), Px(-15))
        );
        assert_eq!(
            Alignment::TopStart.align(CONTAINER, big, LayoutDirection::Ltr),
            PxPosition::ZERO
        );
    }
}
