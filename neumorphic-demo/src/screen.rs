//! A vertically scrolled viewport over content taller than the screen.

use neumorphic_ui::{
    Color, Component, ComputedData, Constraint, Density, DimensionValue, DrawScope,
    InputHandlerInput, LayoutDirection, MeasureInput, Px, PxRect, PxSize,
    outline::Outline,
    paint::Paint,
};
use tracing::debug;

/// Fills the frame with a background and shows `content` shifted up by the
/// scroll offset.
///
/// The content is measured at the frame width with an unbounded height.
pub struct Screen {
    content: Box<dyn Component>,
    scroll: Px,
    background: Color,
}

impl Screen {
    pub fn new(content: impl Component + 'static) -> Self {
        Self {
            content: Box::new(content),
            scroll: Px::ZERO,
            background: Color::TRANSPARENT,
        }
    }

    pub fn scroll(mut self, scroll: Px) -> Self {
        self.scroll = scroll.max(Px::ZERO);
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Full size of the content laid out at `width`.
    pub fn content_size(&self, width: Px, density: Density, direction: LayoutDirection) -> PxSize {
        let constraint = Constraint::new(DimensionValue::Fixed(width), DimensionValue::WRAP);
        self.content
            .measure(&MeasureInput::new(constraint, density, direction))
            .size()
    }

    /// Largest useful scroll offset for a viewport of `viewport_height`.
    pub fn max_scroll(
        &self,
        width: Px,
        viewport_height: Px,
        density: Density,
        direction: LayoutDirection,
    ) -> Px {
        let content = self.content_size(width, density, direction);
        (content.height - viewport_height).max(Px::ZERO)
    }

    fn content_rect(&self, size: PxSize, density: Density, direction: LayoutDirection) -> PxRect {
        let content = self.content_size(size.width, density, direction);
        let scroll = self.scroll.min((content.height - size.height).max(Px::ZERO));
        PxRect::new(Px::ZERO, -scroll, content.width, content.height)
    }
}

impl Component for Screen {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        ComputedData::new(PxSize::new(
            input.constraint.width.resolve(Px::ZERO),
            input.constraint.height.resolve(Px::ZERO),
        ))
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        if self.background.a > 0.0 {
            let bounds = scope.bounds();
            scope.draw_outline(&Outline::Rectangle(bounds), &Paint::fill(self.background));
        }
        let rect = self.content_rect(scope.size(), scope.density(), scope.layout_direction());
        debug!(scroll = -rect.y.0, content_height = rect.height.0, "recording screen");
        scope.child(rect, |scope| self.content.record(scope));
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        let rect = self.content_rect(
            input.computed_data.size(),
            input.density,
            input.layout_direction,
        );
        input.child(rect, |input| self.content.handle_input(input));
    }
}

#[cfg(test)]
mod tests {
    use neumorphic_components::spacer::{Spacer, SpacerArgs};
    use neumorphic_ui::{Dp, Frame, PxPosition};

    use super::*;
    use crate::anchor::{Anchor, LayoutCanvas};

    fn tall() -> Spacer {
        Spacer::new(SpacerArgs::default().width(Dp(40.0)).height(Dp(300.0)))
    }

    #[test]
    fn scroll_is_bounded_by_the_content() {
        let screen = Screen::new(tall());
        assert_eq!(
            screen.max_scroll(Px(40), Px(100), Density::ONE, LayoutDirection::Ltr),
            Px(200)
        );
        assert_eq!(
            screen.max_scroll(Px(40), Px(400), Density::ONE, LayoutDirection::Ltr),
            Px::ZERO
        );
    }

    #[test]
    fn content_is_shifted_by_the_clamped_scroll() {
        let rect = neumorphic_ui::State::new(None);
        let screen = Screen::new(Anchor::new(rect.clone(), tall())).scroll(Px(500));
        let frame = Frame::new(PxSize::new(Px(40), Px(100)), Density::ONE);
        frame.render(&screen, &mut LayoutCanvas::new());
        assert_eq!(
            rect.get().map(|rect| rect.position()),
            Some(PxPosition::new(Px::ZERO, Px(-200)))
        );
    }
}
