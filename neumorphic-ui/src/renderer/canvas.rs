//! The drawing surface abstraction.

use crate::{
    outline::{Outline, Rect},
    paint::{LayerPaint, Paint},
};

/// A drawing surface that outlines are painted onto.
///
/// The model follows the usual immediate-mode 2D canvas: a current
/// translation, a stack of saved states, and offscreen layers opened with
/// [`Canvas::save_layer`] that are flattened back onto their parent when the
/// matching [`Canvas::restore`] runs.
///
/// Save counts start at `1` for a fresh canvas. `save` and `save_layer`
/// return the count *before* the call, so passing that value to
/// [`Canvas::restore_to_count`] undoes the call and everything nested in it.
pub trait Canvas {
    /// Fills `outline`, in current local coordinates, with `paint`.
    fn draw_outline(&mut self, outline: &Outline, paint: &Paint);

    /// Pushes the current translation and clip.
    fn save(&mut self) -> usize;

    /// Pushes the current state and redirects drawing into an offscreen
    /// layer clipped to `bounds` (local coordinates).
    fn save_layer(&mut self, bounds: Rect, paint: &LayerPaint) -> usize;

    /// Pops the most recent save, compositing its layer if it opened one.
    fn restore(&mut self);

    /// Number of saved states plus one.
    fn save_count(&self) -> usize;

    /// Translates the local coordinate origin.
    fn translate(&mut self, dx: f32, dy: f32);

    /// The current translation, in device pixels.
    fn translation(&self) -> (f32, f32);

    /// Restores until the save count equals `count`.
    fn restore_to_count(&mut self, count: usize) {
        while self.save_count() > count.max(1) {
            self.restore();
        }
    }
}
