//! Drawing scopes handed to components while recording.

use std::ops::{Deref, DerefMut};

use crate::{
    Density, Px, PxPosition, PxRect, PxSize,
    layout::LayoutDirection,
    outline::{Outline, Rect},
    paint::{LayerPaint, Paint},
};

use super::canvas::Canvas;

/// The rectangular region a component draws into.
///
/// A scope knows its pixel size, the surface density and the layout direction.
/// Its origin is the top-left corner of the component.
pub struct DrawScope<'a> {
    canvas: &'a mut dyn Canvas,
    size: PxSize,
    density: Density,
    layout_direction: LayoutDirection,
}

impl<'a> DrawScope<'a> {
    /// Creates a root scope over `canvas`.
    pub fn new(
        canvas: &'a mut dyn Canvas,
        size: PxSize,
        density: Density,
        layout_direction: LayoutDirection,
    ) -> Self {
        Self {
            canvas,
            size,
            density,
            layout_direction,
        }
    }

    /// Size of the scope in pixels.
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Surface density.
    pub fn density(&self) -> Density {
        self.density
    }

    /// Reading direction.
    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Where the scope's top-left corner sits on the canvas.
    pub fn origin(&self) -> PxPosition {
        let (x, y) = self.canvas.translation();
        PxPosition::new(Px::saturating_from_f32(x), Px::saturating_from_f32(y))
    }

    /// The scope rectangle in local `f32` coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size.width.to_f32(), self.size.height.to_f32())
    }

    /// Direct access to the canvas.
    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }

    /// Fills `outline` with `paint`.
    pub fn draw_outline(&mut self, outline: &Outline, paint: &Paint) {
        self.canvas.draw_outline(outline, paint);
    }

    /// Translates subsequent drawing. The translation lasts until the
    /// enclosing save is restored.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.canvas.translate(dx, dy);
    }

    /// Opens an offscreen layer clipped to `bounds`.
    ///
    /// The layer is flattened onto its parent when the returned guard is
    /// dropped, on every exit path.
    pub fn layer(&mut self, bounds: Rect, paint: LayerPaint) -> LayerGuard<'_> {
        let count = self.canvas.save_layer(bounds, &paint);
        LayerGuard {
            scope: DrawScope {
                canvas: &mut *self.canvas,
                size: self.size,
                density: self.density,
                layout_direction: self.layout_direction,
            },
            count,
        }
    }

    /// Runs `f` in a scope covering `rect`, relative to this scope.
    pub fn child<R>(&mut self, rect: PxRect, f: impl FnOnce(&mut DrawScope<'_>) -> R) -> R {
        let count = self.canvas.save();
        self.canvas.translate(rect.x.to_f32(), rect.y.to_f32());
        let result = {
            let mut child = DrawScope {
                canvas: &mut *self.canvas,
                size: rect.size(),
                density: self.density,
                layout_direction: self.layout_direction,
            };
            f(&mut child)
        };
        self.canvas.restore_to_count(count);
        result
    }
}

/// An open compositing layer. Derefs to the [`DrawScope`] that draws into it.
pub struct LayerGuard<'a> {
    scope: DrawScope<'a>,
    count: usize,
}

impl<'a> Deref for LayerGuard<'a> {
    type Target = DrawScope<'a>;

    fn deref(&self) -> &Self::Target {
        &self.scope
    }
}

impl DerefMut for LayerGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.scope
    }
}

impl Drop for LayerGuard<'_> {
    fn drop(&mut self) {
        self.scope.canvas.restore_to_count(self.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Px, renderer::SoftwareCanvas};

    fn scope_size() -> PxSize {
        PxSize::new(Px(8), Px(8))
    }

    #[test]
    fn child_scope_is_translated_and_restored() {
        let mut canvas = SoftwareCanvas::new(8, 8);
        {
            let mut scope =
                DrawScope::new(&mut canvas, scope_size(), Density::ONE, LayoutDirection::Ltr);
            scope.child(PxRect::new(Px(4), Px(4), Px(2), Px(2)), |child| {
                assert_eq!(child.size(), PxSize::new(Px(2), Px(2)));
                assert_eq!(child.origin(), PxPosition::new(Px(4), Px(4)));
                let bounds = child.bounds();
                child.draw_outline(&Outline::Rectangle(bounds), &Paint::fill(Color::WHITE));
            });
            scope.draw_outline(
                &Outline::Rectangle(Rect::from_size(1.0, 1.0)),
                &Paint::fill(Color::WHITE),
            );
        }
        assert_eq!(canvas.save_count(), 1);
        assert_eq!(canvas.pixmap().alpha_at(4, 4), 1.0);
        assert_eq!(canvas.pixmap().alpha_at(0, 0), 1.0);
        assert_eq!(canvas.pixmap().alpha_at(6, 6), 0.0);
    }

    #[test]
    fn layer_guard_restores_on_early_return() {
        fn draw_then_bail(scope: &mut DrawScope<'_>) -> Option<()> {
            let mut layer = scope.layer(scope.bounds(), LayerPaint::default());
            layer.draw_outline(
                &Outline::Rectangle(Rect::from_size(8.0, 8.0)),
                &Paint::fill(Color::BLACK),
            );
            if layer.size().width > Px(0) {
                return None;
            }
            Some(())
        }

        let mut canvas = SoftwareCanvas::new(8, 8);
        {
            let mut scope =
                DrawScope::new(&mut canvas, scope_size(), Density::ONE, LayoutDirection::Ltr);
            assert!(draw_then_bail(&mut scope).is_none());
        }
        assert_eq!(canvas.save_count(), 1);
        assert_eq!(canvas.open_layers(), 0);
        assert_eq!(canvas.pixmap().alpha_at(3, 3), 1.0);
    }
}
