//! Coverage rasterization, mask blur and Porter-Duff compositing.

use crate::{
    Px, PxRect,
    outline::Outline,
    paint::{BlendMode, Paint},
};

use super::pixmap::Pixmap;

/// Samples per pixel along each axis.
const SUPERSAMPLE: usize = 4;

/// Distance from a pixel's top-left corner to the other corners probed when
/// classifying a pixel as fully inside a convex outline.
const CORNER_REACH: f32 = 1.0 - 1.0 / 1024.0;

/// A coverage mask over a device-space region.
pub(crate) struct Mask {
    region: PxRect,
    data: Vec<f32>,
}

impl Mask {
    fn width(&self) -> usize {
        self.region.width.positive() as usize
    }

    fn height(&self) -> usize {
        self.region.height.positive() as usize
    }

    #[cfg(test)]
    pub(crate) fn coverage(&self, x: i32, y: i32) -> f32 {
        let local_x = x - self.region.x.0;
        let local_y = y - self.region.y.0;
        if local_x < 0
            || local_y < 0
            || local_x as usize >= self.width()
            || local_y as usize >= self.height()
        {
            return 0.0;
        }
        self.data[local_y as usize * self.width() + local_x as usize]
    }
}

/// Kernel half-width for a Gaussian of the given sigma.
pub(crate) fn blur_extent(sigma: f32) -> i32 {
    if sigma > 0.0 {
        (sigma * 3.0).ceil() as i32
    } else {
        0
    }
}

/// Device-space integer bounds of an outline drawn at `(dx, dy)`.
pub(crate) fn device_bounds(outline: &Outline, dx: f32, dy: f32, extent: i32) -> PxRect {
    let bounds = outline.bounds().translate(dx, dy);
    let x0 = bounds.x.floor() as i32 - extent;
    let y0 = bounds.y.floor() as i32 - extent;
    let x1 = bounds.right().ceil() as i32 + extent;
    let y1 = bounds.bottom().ceil() as i32 + extent;
    PxRect::new(Px(x0), Px(y0), Px((x1 - x0).max(0)), Px((y1 - y0).max(0)))
}

/// Computes per-pixel coverage of `outline`, translated by `(dx, dy)`, over
/// `region`.
pub(crate) fn rasterize(outline: &Outline, dx: f32, dy: f32, region: PxRect) -> Mask {
    let width = region.width.positive() as usize;
    let height = region.height.positive() as usize;
    let mut data = vec![0.0f32; width * height];
    let bounds = outline.bounds().translate(dx, dy);
    let convex = outline.is_convex();
    let step = 1.0 / SUPERSAMPLE as f32;
    let full = (SUPERSAMPLE * SUPERSAMPLE) as f32;

    for row in 0..height {
        let py = (region.y.0 + row as i32) as f32;
        if py + 1.0 <= bounds.y || py >= bounds.bottom() {
            continue;
        }
        for column in 0..width {
            let px = (region.x.0 + column as i32) as f32;
            if px + 1.0 <= bounds.x || px >= bounds.right() {
                continue;
            }
            let local_x = px - dx;
            let local_y = py - dy;

            let far_x = local_x + CORNER_REACH;
            let far_y = local_y + CORNER_REACH;
            let interior = convex
                && outline.contains(local_x, local_y)
                && outline.contains(far_x, local_y)
                && outline.contains(local_x, far_y)
                && outline.contains(far_x, far_y);
            let coverage = if interior {
                1.0
            } else {
                let mut hits = 0usize;
                for sy in 0..SUPERSAMPLE {
                    let sample_y = local_y + (sy as f32 + 0.5) * step;
                    for sx in 0..SUPERSAMPLE {
                        let sample_x = local_x + (sx as f32 + 0.5) * step;
                        if outline.contains(sample_x, sample_y) {
                            hits += 1;
                        }
                    }
                }
                hits as f32 / full
            };
            data[row * width + column] = coverage;
        }
    }

    Mask { region, data }
}

/// Normalised 1D Gaussian weights for offsets `-extent..=extent`.
fn gaussian_kernel(sigma: f32, extent: i32) -> Vec<f32> {
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut weights: Vec<f32> = (-extent..=extent)
        .map(|offset| (-((offset * offset) as f32) / two_sigma_sq).exp())
        .collect();
    let sum: f32 = weights.iter().sum();
    for weight in &mut weights {
        *weight /= sum;
    }
    weights
}

/// Separable Gaussian blur of a mask, horizontal pass then vertical pass.
/// Samples outside the mask region count as zero coverage.
pub(crate) fn blur_mask(mask: &mut Mask, sigma: f32) {
    let extent = blur_extent(sigma);
    if extent == 0 {
        return;
    }
    let kernel = gaussian_kernel(sigma, extent);
    let width = mask.width();
    let height = mask.height();
    let mut scratch = vec![0.0f32; mask.data.len()];

    for (direction_x, direction_y) in [(1usize, 0usize), (0, 1)] {
        for y in 0..height {
            for x in 0..width {
                let mut sum = 0.0f32;
                for (tap, weight) in kernel.iter().enumerate() {
                    let offset = tap as i32 - extent;
                    let sample_x = x as i32 + offset * direction_x as i32;
                    let sample_y = y as i32 + offset * direction_y as i32;
                    if sample_x < 0
                        || sample_y < 0
                        || sample_x as usize >= width
                        || sample_y as usize >= height
                    {
                        continue;
                    }
                    sum += mask.data[sample_y as usize * width + sample_x as usize] * weight;
                }
                scratch[y * width + x] = sum.min(1.0);
            }
        }
        std::mem::swap(&mut mask.data, &mut scratch);
    }
}

/// Composites a coverage mask onto `target` with `paint`.
///
/// `origin` is the device position of the target's top-left pixel and `clip`
/// limits the affected device pixels.
pub(crate) fn composite_mask(
    target: &mut Pixmap,
    origin: (i32, i32),
    clip: PxRect,
    mask: &Mask,
    paint: &Paint,
) {
    let Some(area) = mask.region.intersection(&clip) else {
        return;
    };
    let source = paint.color.premultiplied();
    let width = mask.width();

    for y in area.y.0..area.bottom().0 {
        for x in area.x.0..area.right().0 {
            let mask_index =
                (y - mask.region.y.0) as usize * width + (x - mask.region.x.0) as usize;
            let coverage = mask.data[mask_index];
            if coverage <= 0.0 {
                continue;
            }
            let Some(pixel) = target.pixel_mut(x - origin.0, y - origin.1) else {
                continue;
            };
            match paint.blend_mode {
                BlendMode::SrcOver => {
                    let inverse = 1.0 - source[3] * coverage;
                    for (destination, source) in pixel.iter_mut().zip(source) {
                        *destination = source * coverage + *destination * inverse;
                    }
                }
                BlendMode::DstOut => {
                    let keep = 1.0 - source[3] * coverage;
                    for channel in pixel.iter_mut() {
                        *channel *= keep;
                    }
                }
            }
        }
    }
}

/// Source-over composites a whole layer onto `target`, scaled by `alpha`.
pub(crate) fn composite_layer(
    target: &mut Pixmap,
    target_origin: (i32, i32),
    layer: &Pixmap,
    layer_origin: (i32, i32),
    alpha: f32,
) {
    if alpha <= 0.0 {
        return;
    }
    for y in 0..layer.height() {
        for x in 0..layer.width() {
            let Some(source) = layer.pixel(x, y) else {
                continue;
            };
            if source[3] <= 0.0 {
                continue;
            }
            let device_x = layer_origin.0 + x as i32;
            let device_y = layer_origin.1 + y as i32;
            let target_x = device_x - target_origin.0;
            let target_y = device_y - target_origin.1;
            let Some(pixel) = target.pixel_mut(target_x, target_y) else {
                continue;
            };
            let inverse = 1.0 - source[3] * alpha;
            for (destination, source) in pixel.iter_mut().zip(source) {
                *destination = source * alpha + *destination * inverse;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::Rect;

    #[test]
    fn pixel_aligned_rect_has_hard_coverage() {
        let outline = Outline::Rectangle(Rect::from_size(4.0, 4.0));
        let region = device_bounds(&outline, 2.0, 2.0, 1);
        let mask = rasterize(&outline, 2.0, 2.0, region);

        assert_eq!(mask.coverage(2, 2), 1.0);
        assert_eq!(mask.coverage(5, 5), 1.0);
        assert_eq!(mask.coverage(1, 3), 0.0);
        assert_eq!(mask.coverage(6, 3), 0.0);
    }

    #[test]
    fn half_pixel_edge_has_half_coverage() {
        let outline = Outline::Rectangle(Rect::from_size(2.5, 1.0));
        let region = device_bounds(&outline, 0.0, 0.0, 0);
        let mask = rasterize(&outline, 0.0, 0.0, region);

        assert_eq!(mask.coverage(1, 0), 1.0);
        assert!((mask.coverage(2, 0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn kernel_is_normalised() {
        let kernel = gaussian_kernel(2.0, blur_extent(2.0));
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert_eq!(kernel.len(), 13);
    }

    #[test]
    fn blur_spreads_coverage_outward() {
        // Wide enough that the tails never reach the center.
        let outline = Outline::Rectangle(Rect::from_size(20.0, 20.0));
        let extent = blur_extent(1.5);
        let region = device_bounds(&outline, 0.0, 0.0, extent);
        let mut mask = rasterize(&outline, 0.0, 0.0, region);
        blur_mask(&mut mask, 1.5);

        assert!(mask.coverage(-1, 10) > 0.0);
        assert!(mask.coverage(0, 10) < 1.0);
        assert!((mask.coverage(10, 10) - 1.0).abs() < 1e-3);
        assert!(mask.coverage(-2, 10) < mask.coverage(-1, 10));
    }
}
