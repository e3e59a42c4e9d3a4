//! # Renderer
//!
//! Components record their drawing through a [`DrawScope`], which forwards to
//! a [`Canvas`]. The only canvas shipped here is [`SoftwareCanvas`], a CPU
//! rasterizer over premultiplied [`Pixmap`]s:
//!
//! - **[`canvas`]**: the drawing surface abstraction
//! - **[`software`]**: supersampled coverage, Gaussian mask blur, layers
//! - **[`pixmap`]**: pixel buffers and PNG export
//! - **[`scope`]**: per-component drawing scopes and layer guards

pub mod canvas;
pub mod pixmap;
mod raster;
pub mod scope;
pub mod software;

pub use canvas::Canvas;
pub use pixmap::{ExportError, Pixmap};
pub use scope::{DrawScope, LayerGuard};
pub use software::SoftwareCanvas;
