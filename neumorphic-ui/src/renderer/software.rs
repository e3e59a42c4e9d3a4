//! CPU implementation of [`Canvas`].

use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::{
    Color, Px, PxPosition, PxRect,
    outline::{Outline, Rect},
    paint::{LayerPaint, Paint},
};

use super::{
    canvas::Canvas,
    pixmap::Pixmap,
    raster::{blur_extent, blur_mask, composite_layer, composite_mask, device_bounds, rasterize},
};

struct Layer {
    pixmap: Pixmap,
    origin: PxPosition,
    paint: LayerPaint,
}

#[derive(Clone, Copy)]
struct SaveRecord {
    translation: (f32, f32),
    clip: PxRect,
    opened_layer: bool,
}

/// A canvas that rasterizes into an in-memory [`Pixmap`].
///
/// Coverage is computed with 4x4 supersampling, blur masks use a separable
/// Gaussian, and layers are allocated only for their clipped bounds.
///
/// ```
/// use neumorphic_ui::{
///     Color,
///     outline::{Outline, Rect},
///     paint::Paint,
///     renderer::{Canvas, SoftwareCanvas},
/// };
///
/// let mut canvas = SoftwareCanvas::new(8, 8);
/// canvas.draw_outline(
///     &Outline::Rectangle(Rect::from_size(4.0, 4.0)),
///     &Paint::fill(Color::BLACK),
/// );
/// assert_eq!(canvas.pixmap().alpha_at(1, 1), 1.0);
/// assert_eq!(canvas.pixmap().alpha_at(6, 6), 0.0);
/// ```
pub struct SoftwareCanvas {
    base: Pixmap,
    layers: Vec<Layer>,
    stack: SmallVec<[SaveRecord; 8]>,
    translation: (f32, f32),
    clip: PxRect,
}

impl SoftwareCanvas {
    /// Creates a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_pixmap(Pixmap::new(width, height))
    }

    /// Creates a canvas pre-filled with `color`.
    pub fn with_background(width: u32, height: u32, color: Color) -> Self {
        Self::from_pixmap(Pixmap::filled(width, height, color))
    }

    /// Wraps an existing pixmap.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        let clip = PxRect::new(
            Px::ZERO,
            Px::ZERO,
            Px(pixmap.width() as i32),
            Px(pixmap.height() as i32),
        );
        Self {
            base: pixmap,
            layers: Vec::new(),
            stack: SmallVec::new(),
            translation: (0.0, 0.0),
            clip,
        }
    }

    /// The base pixmap. Open layers are not flattened into it until they are
    /// restored.
    pub fn pixmap(&self) -> &Pixmap {
        &self.base
    }

    /// Restores every open save and returns the base pixmap.
    pub fn into_pixmap(mut self) -> Pixmap {
        self.restore_to_count(1);
        self.base
    }

    /// Number of offscreen layers currently open.
    pub fn open_layers(&self) -> usize {
        self.layers.len()
    }

    fn target(&mut self) -> (&mut Pixmap, (i32, i32)) {
        match self.layers.last_mut() {
            Some(layer) => (&mut layer.pixmap, (layer.origin.x.0, layer.origin.y.0)),
            None => (&mut self.base, (0, 0)),
        }
    }
}

impl Canvas for SoftwareCanvas {
    fn draw_outline(&mut self, outline: &Outline, paint: &Paint) {
        let (dx, dy) = self.translation;
        let sigma = paint.mask_filter.map(|filter| filter.sigma()).unwrap_or(0.0);
        let extent = blur_extent(sigma);
        let clip = self.clip;

        let bounds = device_bounds(outline, dx, dy, extent);
        let sampled_clip = PxRect::new(
            clip.x - Px(extent),
            clip.y - Px(extent),
            clip.width + Px(extent * 2),
            clip.height + Px(extent * 2),
        );
        if clip.width.0 <= 0 || clip.height.0 <= 0 {
            return;
        }
        let Some(region) = bounds.intersection(&sampled_clip) else {
            return;
        };

        let mut mask = rasterize(outline, dx, dy, region);
        if extent > 0 {
            blur_mask(&mut mask, sigma);
        }
        let (target, origin) = self.target();
        composite_mask(target, origin, clip, &mask, paint);
    }

    fn save(&mut self) -> usize {
        let count = self.save_count();
        self.stack.push(SaveRecord {
            translation: self.translation,
            clip: self.clip,
            opened_layer: false,
        });
        count
    }

    fn save_layer(&mut self, bounds: Rect, paint: &LayerPaint) -> usize {
        let count = self.save_count();
        self.stack.push(SaveRecord {
            translation: self.translation,
            clip: self.clip,
            opened_layer: true,
        });

        let (dx, dy) = self.translation;
        let device = bounds.translate(dx, dy);
        let x0 = device.x.floor() as i32;
        let y0 = device.y.floor() as i32;
        let x1 = device.right().ceil() as i32;
        let y1 = device.bottom().ceil() as i32;
        let requested = PxRect::new(
            Px(x0),
            Px(y0),
            Px((x1 - x0).max(0)),
            Px((y1 - y0).max(0)),
        );
        let layer_rect = requested
            .intersection(&self.clip)
            .unwrap_or(PxRect::new(requested.x, requested.y, Px::ZERO, Px::ZERO));

        trace!(?layer_rect, alpha = paint.alpha, "layer opened");
        self.layers.push(Layer {
            pixmap: Pixmap::new(layer_rect.width.positive(), layer_rect.height.positive()),
            origin: layer_rect.position(),
            paint: *paint,
        });
        self.clip = layer_rect;
        count
    }

    fn restore(&mut self) {
        let Some(record) = self.stack.pop() else {
            warn!("restore called without a matching save");
            return;
        };
        if record.opened_layer
            && let Some(layer) = self.layers.pop()
        {
            let (target, origin) = self.target();
            composite_layer(
                target,
                origin,
                &layer.pixmap,
                (layer.origin.x.0, layer.origin.y.0),
                layer.paint.alpha,
            );
            trace!(origin = ?layer.origin, "layer flattened");
        }
        self.translation = record.translation;
        self.clip = record.clip;
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
