//! Raised and inset neumorphic surfaces.
//!
//! ## Usage
//!
//! Wrap content in a soft-extruded ([`neumorphic_up`]) or soft-pressed
//! ([`neumorphic_down`]) surface. Every other component in this crate is built
//! from [`neumorphic_surface`].
//!
//! A surface is two [`inner_shadow`] passes over the same shape. The first is
//! offset towards the bottom-end and leaves its color along the top and start
//! edges; the second is offset the other way. Raised surfaces put the light
//! color first, inset surfaces put the shadow color first.

use derive_setters::Setters;
use neumorphic_ui::{
    Color, Component, ComputedData, Constraint, Density, Dp, DrawScope, InputHandlerInput,
    LayoutDirection, Length, MeasureInput, Px, PxPosition, PxRect, PxSize, paint::Paint,
};
use tracing::trace;

use crate::{
    alignment::Alignment,
    inner_shadow::{InnerShadowArgs, inner_shadow},
    layout_utils::shrink_constraint,
    shape_def::Shape,
    theme::NeumorphicColors,
};

/// Whether a surface appears extruded or pressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Extruded: lit along the top and start edges.
    #[default]
    Raised,
    /// Pressed in: shaded along the top and start edges.
    Inset,
}

impl Orientation {
    /// Colors of the first (bottom-end offset) and second (top-start offset)
    /// shadow passes.
    pub fn pass_colors(self, light: Color, shadow: Color) -> (Color, Color) {
        match self {
            Orientation::Raised => (light, shadow),
            Orientation::Inset => (shadow, light),
        }
    }
}

/// Defaults shared by [`NeumorphicStyle`] and [`NeumorphicBoxArgs`].
pub struct NeumorphicDefaults;

impl NeumorphicDefaults {
    /// Surface shape.
    pub const SHAPE: Shape = Shape::rounded(Dp(20.0));
    /// Content padding. Also the blur radius and offset of both shadows.
    pub const CONTENT_PADDING: Dp = Dp(20.0);
    /// Highlight color.
    pub const LIGHT_COLOR: Color = NeumorphicColors::DEFAULT.light;
    /// Shadow color.
    pub const SHADOW_COLOR: Color = NeumorphicColors::DEFAULT.shadow;
    /// Fill drawn under the shadows.
    pub const BACKGROUND: Color = Color::TRANSPARENT;
}

/// Everything needed to paint one neumorphic surface.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct NeumorphicStyle {
    /// Surface shape.
    pub shape: Shape,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Inset of the content area. Unless overridden, also the blur radius and
    /// the offset magnitude of both shadow passes.
    pub content_padding: Dp,
    /// Raised or inset.
    pub orientation: Orientation,
    /// Fill drawn under the shadows.
    pub background: Color,
    /// Overrides the blur radius of both passes.
    #[setters(strip_option)]
    pub blur: Option<Dp>,
    /// Overrides the offset magnitude of both passes.
    #[setters(strip_option)]
    pub offset: Option<Dp>,
}

impl Default for NeumorphicStyle {
    fn default() -> Self {
        Self {
            shape: NeumorphicDefaults::SHAPE,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            content_padding: NeumorphicDefaults::CONTENT_PADDING,
            orientation: Orientation::Raised,
            background: NeumorphicDefaults::BACKGROUND,
            blur: None,
            offset: None,
        }
    }
}

impl NeumorphicStyle {
    /// Default raised style.
    pub fn raised() -> Self {
        Self::default()
    }

    /// Default inset style.
    pub fn inset() -> Self {
        Self::default().orientation(Orientation::Inset)
    }

    /// The two shadow passes, in drawing order.
    ///
    /// ```
    /// use neumorphic_components::neumorphic::NeumorphicStyle;
    /// use neumorphic_ui::{Color, Dp};
    ///
    /// let [first, second] = NeumorphicStyle::inset().shadow_passes();
    /// assert_eq!(first.color, Color::LIGHT_GRAY);
    /// assert_eq!((first.offset_x, first.offset_y), (Dp(20.0), Dp(20.0)));
    /// assert_eq!(second.color, Color::WHITE);
    /// assert_eq!((second.offset_x, second.offset_y), (Dp(-20.0), Dp(-20.0)));
    /// ```
    pub fn shadow_passes(&self) -> [InnerShadowArgs; 2] {
        let blur = self.blur.unwrap_or(self.content_padding);
        let magnitude = self.offset.unwrap_or(self.content_padding);
        let (first, second) = self
            .orientation
            .pass_colors(self.light_color, self.shadow_color);
        [
            InnerShadowArgs {
                color: first,
                blur,
                offset_x: magnitude,
                offset_y: magnitude,
                spread: Dp::ZERO,
            },
            InnerShadowArgs {
                color: second,
                blur,
                offset_x: -magnitude,
                offset_y: -magnitude,
                spread: Dp::ZERO,
            },
        ]
    }

    fn padding_px(&self, density: Density) -> Px {
        self.content_padding.max(Dp::ZERO).to_px(density)
    }
}

/// Where content of `content_size` lands on a surface of `size`: the surface
/// rect inset by the style's content padding, with the content aligned inside
/// it.
pub fn content_bounds(
    style: &NeumorphicStyle,
    alignment: Alignment,
    size: PxSize,
    content_size: PxSize,
    density: Density,
    direction: LayoutDirection,
) -> PxRect {
    let interior =
        PxRect::from_position_size(PxPosition::ZERO, size).inset(style.padding_px(density));
    let position = alignment.align(interior.size(), content_size, direction);
    PxRect::from_position_size(interior.position() + position, content_size)
}

/// Paints a neumorphic surface covering `scope` and returns where content of
/// `content_size` belongs.
///
/// The background fill comes first, then the two shadow passes of
/// [`NeumorphicStyle::shadow_passes`].
///
/// # Example
///
/// ```
/// use neumorphic_components::{
///     alignment::Alignment,
///     neumorphic::{NeumorphicStyle, neumorphic_surface},
/// };
/// use neumorphic_ui::{
///     Color, Density, DrawScope, LayoutDirection, Px, PxRect, PxSize, renderer::SoftwareCanvas,
/// };
///
/// let background = Color::from_rgb_u8(0xEE, 0xEE, 0xEE);
/// let mut canvas = SoftwareCanvas::with_background(120, 120, background);
/// let mut scope = DrawScope::new(
///     &mut canvas,
///     PxSize::new(Px(120), Px(120)),
///     Density::ONE,
///     LayoutDirection::Ltr,
/// );
/// let content = neumorphic_surface(
///     &mut scope,
///     &NeumorphicStyle::raised(),
///     Alignment::Center,
///     PxSize::new(Px(40), Px(20)),
/// );
/// assert_eq!(content, PxRect::new(Px(40), Px(50), Px(40), Px(20)));
/// ```
pub fn neumorphic_surface(
    scope: &mut DrawScope<'_>,
    style: &NeumorphicStyle,
    alignment: Alignment,
    content_size: PxSize,
) -> PxRect {
    let size = scope.size();
    let density = scope.density();
    let direction = scope.layout_direction();
    trace!(?size, orientation = ?style.orientation, "drawing neumorphic surface");

    if style.background.a > 0.0 && !size.is_empty() {
        let outline = style.shape.create_outline(
            size.width.to_f32(),
            size.height.to_f32(),
            direction,
            density,
        );
        scope.draw_outline(&outline, &Paint::fill(style.background));
    }
    for pass in style.shadow_passes() {
        inner_shadow(scope, &style.shape, &pass);
    }

    content_bounds(style, alignment, size, content_size, density, direction)
}

/// Arguments for [`neumorphic_up`] and [`neumorphic_down`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct NeumorphicBoxArgs {
    /// Preferred width.
    #[setters(into)]
    pub width: Length,
    /// Preferred height.
    #[setters(into)]
    pub height: Length,
    /// Surface shape.
    pub shape: Shape,
    /// Content padding, blur radius and offset magnitude.
    pub content_padding: Dp,
    /// Highlight color.
    pub light_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Fill drawn under the shadows.
    pub background: Color,
    /// Alignment of the child inside the padded interior.
    pub content_alignment: Alignment,
    /// Overrides the blur radius.
    #[setters(strip_option)]
    pub blur: Option<Dp>,
    /// Overrides the offset magnitude.
    #[setters(strip_option)]
    pub offset: Option<Dp>,
}

impl Default for NeumorphicBoxArgs {
    fn default() -> Self {
        Self {
            width: Length::Wrap,
            height: Length::Wrap,
            shape: NeumorphicDefaults::SHAPE,
            content_padding: NeumorphicDefaults::CONTENT_PADDING,
            light_color: NeumorphicDefaults::LIGHT_COLOR,
            shadow_color: NeumorphicDefaults::SHADOW_COLOR,
            background: NeumorphicDefaults::BACKGROUND,
            content_alignment: Alignment::TopStart,
            blur: None,
            offset: None,
        }
    }
}

impl NeumorphicBoxArgs {
    /// The surface style these arguments describe.
    pub fn style(&self, orientation: Orientation) -> NeumorphicStyle {
        NeumorphicStyle {
            shape: self.shape.clone(),
            light_color: self.light_color,
            shadow_color: self.shadow_color,
            content_padding: self.content_padding,
            orientation,
            background: self.background,
            blur: self.blur,
            offset: self.offset,
        }
    }
}

/// A neumorphic surface with an optional child.
///
/// Wraps to the child plus the content padding on both sides unless the
/// preferred width or height says otherwise.
pub struct NeumorphicBox {
    style: NeumorphicStyle,
    width: Length,
    height: Length,
    alignment: Alignment,
    child: Option<Box<dyn Component>>,
}

impl NeumorphicBox {
    /// A box painted with `style`, wrapping its content, child at top-start.
    pub fn with_style(style: NeumorphicStyle) -> Self {
        Self {
            style,
            width: Length::Wrap,
            height: Length::Wrap,
            alignment: Alignment::TopStart,
            child: None,
        }
    }

    /// Builds a box from arguments and an orientation.
    pub fn new(args: NeumorphicBoxArgs, orientation: Orientation) -> Self {
        Self::with_style(args.style(orientation))
            .width(args.width)
            .height(args.height)
            .alignment(args.content_alignment)
    }

    /// Sets the preferred width.
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the preferred height.
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the alignment of the child inside the padded interior.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the child.
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// The surface style.
    pub fn style(&self) -> &NeumorphicStyle {
        &self.style
    }

    fn content_constraint(&self, constraint: Constraint, density: Density) -> Constraint {
        let padding = self.style.padding_px(density) * 2;
        shrink_constraint(constraint, padding, padding)
    }

    /// Measures the child for a box of `size`.
    fn measure_child(
        &self,
        size: PxSize,
        density: Density,
        direction: LayoutDirection,
    ) -> Option<ComputedData> {
        self.child.as_ref().map(|child| {
            let constraint = self.content_constraint(Constraint::fixed(size), density);
            child.measure(&MeasureInput::new(constraint, density, direction))
        })
    }
}

impl Component for NeumorphicBox {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        let constraint = Constraint::from_lengths(self.width, self.height, input.density)
            .merge(&input.constraint);
        let content = self
            .child
            .as_ref()
            .map(|child| {
                let content_constraint = self.content_constraint(constraint, input.density);
                child.measure(&input.with_constraint(content_constraint))
            })
            .unwrap_or(ComputedData::ZERO);
        let padding = self.style.padding_px(input.density) * 2;
        ComputedData::new(PxSize::new(
            constraint.width.resolve(content.width + padding),
            constraint.height.resolve(content.height + padding),
        ))
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        let content = self
            .measure_child(scope.size(), scope.density(), scope.layout_direction())
            .map_or(PxSize::ZERO, |computed| computed.size());
        let rect = neumorphic_surface(scope, &self.style, self.alignment, content);
        if let Some(child) = &self.child {
            scope.child(rect, |scope| child.record(scope));
        }
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        let Some(child) = &self.child else {
            return;
        };
        let size = input.computed_data.size();
        let Some(content) = self.measure_child(size, input.density, input.layout_direction) else {
            return;
        };
        let rect = content_bounds(
            &self.style,
            self.alignment,
            size,
            content.size(),
            input.density,
            input.layout_direction,
        );
        input.child(rect, |input| child.handle_input(input));
    }
}

/// A raised (extruded) neumorphic box.
///
/// ```
/// use neumorphic_components::neumorphic::{NeumorphicBoxArgs, Orientation, neumorphic_up};
/// use neumorphic_ui::Dp;
///
/// let card = neumorphic_up(NeumorphicBoxArgs::default().width(Dp(100.0)).height(Dp(100.0)));
/// assert_eq!(card.style().orientation, Orientation::Raised);
/// ```
pub fn neumorphic_up(args: NeumorphicBoxArgs) -> NeumorphicBox {
    NeumorphicBox::new(args, Orientation::Raised)
}

/// An inset (pressed in) neumorphic box.
pub fn neumorphic_down(args: NeumorphicBoxArgs) -> NeumorphicBox {
    NeumorphicBox::new(args, Orientation::Inset)
}

#[cfg(test)]
mod tests {
    use neumorphic_ui::{Frame, renderer::SoftwareCanvas};

    use super::*;
    use crate::spacer::{Spacer, SpacerArgs};

    fn paint(style: &NeumorphicStyle, size: i32) -> SoftwareCanvas {
        let mut canvas = SoftwareCanvas::with_background(
            size as u32,
            size as u32,
            NeumorphicColors::DEFAULT.surface,
        );
        {
            let mut scope = DrawScope::new(
                &mut canvas,
                PxSize::new(Px(size), Px(size)),
                Density::ONE,
                LayoutDirection::Ltr,
            );
            neumorphic_surface(&mut scope, style, Alignment::TopStart, PxSize::ZERO);
        }
        canvas
    }

    #[test]
    fn raised_is_lit_from_the_top_start() {
        let style = NeumorphicStyle::raised().shape(Shape::Rectangle);
        let canvas = paint(&style, 100);
        let red = |x, y| canvas.pixmap().color_at(x, y).map_or(0.0, |color| color.r);
        assert!(red(1, 50) > red(98, 50), "{} vs {}", red(1, 50), red(98, 50));
        assert!(red(50, 1) > red(50, 98));
    }

    #[test]
    fn inset_is_shaded_from_the_top_start() {
        let style = NeumorphicStyle::inset().shape(Shape::Rectangle);
        let canvas = paint(&style, 100);
        let red = |x, y| canvas.pixmap().color_at(x, y).map_or(0.0, |color| color.r);
        assert!(red(1, 50) < red(98, 50));
    }

    #[test]
    fn identical_calls_paint_identical_pixels() {
        let style = NeumorphicStyle::inset().shape(Shape::rounded(Dp(12.0)));
        assert_eq!(paint(&style, 64).pixmap(), paint(&style, 64).pixmap());
    }

    #[test]
    fn raised_and_swapped_inset_match() {
        let a = Color::from_rgb_u8(0xFA, 0xFA, 0xFA);
        let b = Color::from_rgb_u8(0xB0, 0xB4, 0xC0);
        let raised = NeumorphicStyle::raised().light_color(a).shadow_color(b);
        let inset = NeumorphicStyle::inset().light_color(b).shadow_color(a);
        assert_eq!(paint(&raised, 48).pixmap(), paint(&inset, 48).pixmap());
    }

    #[test]
    fn overrides_replace_padding_derived_values() {
        let style = NeumorphicStyle::raised()
            .content_padding(Dp(12.0))
            .blur(Dp(3.0))
            .offset(Dp(5.0));
        let [first, second] = style.shadow_passes();
        assert_eq!(first.blur, Dp(3.0));
        assert_eq!(first.offset_x, Dp(5.0));
        assert_eq!(second.offset_y, Dp(-5.0));
        assert_eq!(first.spread, Dp::ZERO);
    }

    #[test]
    fn content_bounds_follow_alignment_and_direction() {
        let style = NeumorphicStyle::raised();
        let size = PxSize::new(Px(100), Px(100));
        let content = PxSize::new(Px(20), Px(20));
        let at = |alignment, direction| {
            content_bounds(&style, alignment, size, content, Density::ONE, direction).position()
        };
        assert_eq!(
            at(Alignment::TopStart, LayoutDirection::Ltr),
            PxPosition::new(Px(20), Px(20))
        );
        assert_eq!(
            at(Alignment::Center, LayoutDirection::Ltr),
            PxPosition::new(Px(40), Px(40))
        );
        assert_eq!(
            at(Alignment::TopStart, LayoutDirection::Rtl),
            PxPosition::new(Px(60), Px(20))
        );
    }

    #[test]
    fn background_fills_the_shape() {
        let style = NeumorphicStyle::raised()
            .background(Color::WHITE)
            .light_color(Color::WHITE)
            .shadow_color(Color::WHITE);
        let canvas = paint(&style, 40);
        let center = canvas.pixmap().color_at(20, 20).unwrap_or(Color::TRANSPARENT);
        assert!(center.r > 0.999 && center.a > 0.999, "{center:?}");
    }

    #[test]
    fn box_wraps_child_plus_padding() {
        let frame = Frame::new(PxSize::new(Px(200), Px(200)), Density::ONE);
        let boxed = neumorphic_up(NeumorphicBoxArgs::default())
            .child(Spacer::new(SpacerArgs::default().width(Dp(10.0)).height(Dp(6.0))));
        assert_eq!(
            frame.measure(&boxed),
            ComputedData::new(PxSize::new(Px(50), Px(46)))
        );

        let fixed = neumorphic_down(
            NeumorphicBoxArgs::default()
                .width(Dp(100.0))
                .height(Length::Fill),
        );
        assert_eq!(
            frame.measure(&fixed),
            ComputedData::new(PxSize::new(Px(100), Px(200)))
        );
    }
}
