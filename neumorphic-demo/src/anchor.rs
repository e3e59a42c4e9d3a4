//! Locating components on screen without drawing them.

use neumorphic_ui::{
    Canvas, Component, ComputedData, DrawScope, InputHandlerInput, MeasureInput, PxRect, State,
    outline::{Outline, Rect},
    paint::{LayerPaint, Paint},
};
use tracing::warn;

/// Wraps a component and remembers where it was last recorded, in canvas
/// coordinates.
pub struct Anchor {
    child: Box<dyn Component>,
    rect: State<Option<PxRect>>,
}

impl Anchor {
    pub fn new(rect: State<Option<PxRect>>, child: impl Component + 'static) -> Self {
        Self {
            child: Box::new(child),
            rect,
        }
    }
}

impl Component for Anchor {
    fn measure(&self, input: &MeasureInput) -> ComputedData {
        self.child.measure(input)
    }

    fn record(&self, scope: &mut DrawScope<'_>) {
        let rect = PxRect::from_position_size(scope.origin(), scope.size());
        self.rect.set(Some(rect));
        self.child.record(scope);
    }

    fn handle_input(&self, input: &mut InputHandlerInput<'_>) {
        self.child.handle_input(input);
    }
}

/// A canvas that only tracks translations. Recording a tree onto it places
/// every [`Anchor`] without rasterizing anything.
#[derive(Debug, Default)]
pub struct LayoutCanvas {
    stack: Vec<(f32, f32)>,
    translation: (f32, f32),
}

impl LayoutCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self) -> usize {
        let count = self.save_count();
        self.stack.push(self.translation);
        count
    }
}

impl Canvas for LayoutCanvas {
    fn draw_outline(&mut self, _outline: &Outline, _paint: &Paint) {}

    fn save(&mut self) -> usize {
        self.push()
    }

    fn save_layer(&mut self, _bounds: Rect, _paint: &LayerPaint) -> usize {
        self.push()
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(translation) => self.translation = translation,
            None => warn!("restore called without a matching save"),
        }
    }

    fn save_count(&self) -> usize {
        self.stack.len() + 1
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.translation.0 += dx;
        self.translation.1 += dy;
    }

    fn translation(&self) -> (f32, f32) {
        self.translation
    }
}

#[cfg(test)]
mod tests {
    use neumorphic_components::spacer::{Spacer, SpacerArgs};
    use neumorphic_ui::{Density, Dp, Frame, Px, PxSize};

    use super::*;

    #[test]
    fn anchor_reports_its_canvas_rect() {
        let rect = State::new(None);
        let frame = Frame::new(PxSize::new(Px(50), Px(50)), Density::ONE);
        let anchored = Anchor::new(
            rect.clone(),
            Spacer::new(SpacerArgs::default().width(Dp(10.0)).height(Dp(20.0))),
        );
        let mut canvas = LayoutCanvas::new();
        canvas.translate(5.0, 7.0);
        frame.render(&anchored, &mut canvas);
        assert_eq!(
            rect.get(),
            Some(PxRect::new(Px(5), Px(7), Px(10), Px(20)))
        );
    }

    #[test]
    fn restore_pops_translations() {
        let mut canvas = LayoutCanvas::new();
        let count = canvas.save();
        canvas.translate(3.0, 4.0);
        canvas.save_layer(Rect::from_size(1.0, 1.0), &LayerPaint::default());
        canvas.translate(1.0, 1.0);
        assert_eq!(canvas.translation(), (4.0, 5.0));
        canvas.restore_to_count(count);
        assert_eq!(canvas.translation(), (0.0, 0.0));
        assert_eq!(canvas.save_count(), 1);
        canvas.restore();
        assert_eq!(canvas.save_count(), 1);
    }
}
