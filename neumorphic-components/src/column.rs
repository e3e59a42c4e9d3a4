//! A vertical stack of children.
//!
//! ## Usage
//!
//! Stack components top to bottom with uniform spacing, optionally padded and
//! painted with a background.

use derive_setters::Setters;
use neumorphic_ui::{
    Color, Component, ComputedData, Constraint, Density, DimensionValue, Dp, DrawScope,
    InputHandlerInput, LayoutDirection, Length, MeasureInput, Px, PxRect, PxSize,
    outline::Outline,
    paint::Paint,
};
use smallvec::SmallVec;

use crate::{alignment::CrossAxisAlignment, layout_utils::shrink_constraint};

/// Arguments for [`Column`].
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct ColumnArgs {
    /// Preferred width.
    #[setters(into)]
    pub width: Length,
    /// Preferred height.
    #[setters(into)]
    pub height: Length,
    /// Space between consecutive children.
    pub spacing: Dp,
    /// Padding on every side.
    pub padding: Dp,
    /// Horizontal placement of children narrower than the column.
    pub cross_axis_alignment: CrossAxisAlignment,
    /// Background painted behind the children.
    pub background: Color,
}

impl Default for ColumnArgs {
    fn default() -> Self {
        Self {
            width: Length::Wrap,
            height: Length::Wrap,
            spacing: Dp::ZERO,
            padding: Dp::ZERO,
            cross_axis_alignment: CrossAxisAlignment::Start,
            background: Color::TRANSPARENT,
        }
    }
}

type Placements = SmallVec<[PxRect; 8]>;

/// Lays children out top to bottom.
///
/// Children get the column's width (minus padding) as their maximum. With
/// [`CrossAxisAlignment::Stretch`] they are placed across exactly that width.
/// Heights are only bounded by what the column itself is offered.
///
/// ```
/// use neumorphic_components::{
///     column::{Column, ColumnArgs},
///     spacer::{Spacer, SpacerArgs},
/// };
/// use neumorphic_ui::{Density, Dp, Frame, Px, PxSize};
///
/// let gap = || Spacer::new(SpacerArgs::default().width(Dp(10.0)).height(Dp(10.0)));
/// let column = Column::new(ColumnArgs::default().spacing(Dp(5.0)))
///     .child(gap())
///     .child(gap());
/// let frame = Frame::new(PxSize::new(Px(100), Px(100)), Density::ONE);
/// assert_eq!(frame.measure(&column).size(), PxSize::new(Px(10), Px(25)));
/// ```
pub struct Column {
    args: ColumnArgs,
    children: Vec<Box<dyn Component>>,
}

impl Column {
    /// Creates an empty column.
    pub fn new(args: ColumnArgs) -> Self {
        Self {
            args,
            children: Vec::new(),
        }
    }

    /// Appends a child.
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Appends an already boxed child.
    pub fn push(&mut self, child: Box<dyn Component>) {
        self.children.push(child);
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` when the column has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Measures the column under `constraint` and places every child.
    fn layout(
        &self,
        constraint: Constraint,
        density: Density,
        direction: LayoutDirection,
    ) -> (ComputedData, Placements) {
        let constraint = Constraint::from_lengths(self.args.width, self.args.height, density)
            .merge(&constraint);
        let padding = self.args.padding.max(Dp::ZERO).to_px(density);
        let spacing = self.args.spacing.max(Dp::ZERO).to_px(density);
        let inner = shrink_constraint(constraint, padding * 2, padding * 2);
        let child_constraint = Constraint::new(
            inner.width,
            DimensionValue::Wrap {
                min: None,
                max: inner.height.get_max(),
            },
        );
        let child_input = MeasureInput::new(child_constraint, density, direction);

        let sizes: SmallVec<[PxSize; 8]> = self
            .children
            .iter()
            .map(|child| child.measure(&child_input).size())
            .collect();
        let content_width = sizes
            .iter()
            .map(|size| size.width)
            .max()
            .unwrap_or(Px::ZERO);
        let gaps = spacing * (sizes.len().saturating_sub(1) as i32);
        let content_height = sizes.iter().fold(gaps, |total, size| total + size.height);

        let width = constraint.width.resolve(content_width + padding * 2);
        let height = constraint.height.resolve(content_height + padding * 2);
        let available = (width - padding * 2).max(Px::ZERO);

        let mut y = padding;
        let placements = sizes
            .iter()
            .map(|size| {
                let alignment = self.args.cross_axis_alignment;
                let width = match alignment {
                    CrossAxisAlignment::Stretch => available,
                    _ => size.width,
                };
                let x = padding + alignment.offset(available, width, direction);
                let rect = PxRect::new(x, y, width, size.height);
                y += size.height + spacing;
                rect
            })
            .collect();
        (ComputedData::new(PxSize::new(width, height)), placements)
    }
}

impl Component for Column {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        self.layout(input.constraint, input.density, input.layout_direction)
            .0
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        if self.args.background.a > 0.0 {
            let bounds = scope.bounds();
            scope.draw_outline(&Outline::Rectangle(bounds), &Paint::fill(self.args.background));
        }
        let (_, placements) = self.layout(
            Constraint::fixed(scope.size()),
            scope.density(),
            scope.layout_direction(),
        );
        for (child, rect) in self.children.iter().zip(placements) {
            scope.child(rect, |scope| child.record(scope));
        }
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        let (_, placements) = self.layout(
            Constraint::fixed(input.computed_data.size()),
            input.density,
            input.layout_direction,
        );
        // Later children draw on top, so they see input first.
        for (child, rect) in self.children.iter().zip(placements).rev() {
            input.child(rect, |input| child.handle_input(input));
        }
    }
}
