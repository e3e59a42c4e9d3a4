//! Premultiplied RGBA pixel buffers.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::Color;

/// Errors raised while writing a pixmap to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The pixmap has no pixels.
    #[error("cannot export an empty {width}x{height} pixmap")]
    EmptyPixmap {
        /// Width of the pixmap.
        width: u32,
        /// Height of the pixmap.
        height: u32,
    },
    /// Image encoding failed.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    /// The output location could not be prepared.
    #[error("failed to prepare output path: {0}")]
    Io(#[from] std::io::Error),
}

/// A buffer of premultiplied RGBA `f32` pixels in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<[f32; 4]>,
}

impl Pixmap {
    /// Creates a transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![[0.0; 4]; width as usize * height as usize],
        }
    }

    /// Creates a pixmap filled with `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            data: vec![color.premultiplied(); width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index(x, y).map(|index| self.data[index])
    }

    /// Straight-alpha color at `(x, y)`, or `None` when out of bounds.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.pixel(x, y).map(unpremultiply)
    }

    /// Alpha at `(x, y)`, zero when out of bounds.
    pub fn alpha_at(&self, x: u32, y: u32) -> f32 {
        self.pixel(x, y).map(|pixel| pixel[3]).unwrap_or(0.0)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.data
    }

    pub(crate) fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [f32; 4]> {
        if x < 0 || y < 0 {
            return None;
        }
        self.index(x as u32, y as u32)
            .map(move |index| &mut self.data[index])
    }

    /// Fills every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color.premultiplied());
    }

    /// Converts to straight-alpha 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for pixel in &self.data {
            let color = unpremultiply(*pixel);
            for channel in color.to_array() {
                bytes.push((channel.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        bytes
    }

    /// Encodes the pixmap as an image file; the format follows the file
    /// extension.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        if self.width == 0 || self.height == 0 {
            return Err(ExportError::EmptyPixmap {
                width: self.width,
                height: self.height,
            });
        }
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        image::save_buffer(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        debug!(path = %path.display(), width = self.width, height = self.height, "pixmap exported");
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}

fn unpremultiply([r, g, b, a]: [f32; 4]) -> Color {
    if a <= 0.0 {
        return Color::TRANSPARENT;
    }
    Color::new(r / a, g / a, b / a, a)
}
