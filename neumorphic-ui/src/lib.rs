//! neumorphic-ui is the host surface for neumorphic components: units,
//! colors, resolved outlines, a canvas abstraction with a software rasterizer,
//! a constraint-based measure pass, pointer and text input, and caller-owned
//! state.
//!
//! # Components
//!
//! A component implements [`Component`]: it measures itself against a
//! [`Constraint`], records drawing into a [`DrawScope`] and optionally reacts
//! to input.
//!
//! ```
//! use neumorphic_ui::{
//!     Color, Component, ComputedData, Density, DrawScope, Frame, MeasureInput, Px, PxSize,
//!     outline::Outline,
//!     paint::Paint,
//!     renderer::SoftwareCanvas,
//! };
//!
//! struct Swatch(Color);
//!
//! impl Component for Swatch {
//!     fn measure(&self, input: &MeasureInput) -> ComputedData {
//!         ComputedData::new(PxSize::new(
//!             input.constraint.width.resolve(Px(16)),
//!             input.constraint.height.resolve(Px(16)),
//!         ))
//!     }
//!
//!     fn record(&self, scope: &mut DrawScope<'_>) {
//!         let bounds = scope.bounds();
//!         scope.draw_outline(&Outline::Rectangle(bounds), &Paint::fill(self.0));
//!     }
//! }
//!
//! let frame = Frame::new(PxSize::new(Px(32), Px(32)), Density::ONE);
//! let mut canvas = SoftwareCanvas::new(32, 32);
//! frame.render(&Swatch(Color::WHITE), &mut canvas);
//! assert_eq!(canvas.pixmap().color_at(31, 31), Some(Color::WHITE));
//! ```
//!
//! # State
//!
//! Interactive values live in [`State`] holders owned by the caller.
//! Components read them while the tree is built and report changes through
//! [`Callback`] / [`CallbackWith`] handles.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod cursor;
pub mod dp;
pub mod frame;
pub mod layout;
pub mod outline;
pub mod paint;
pub mod prop;
pub mod px;
pub mod renderer;
pub mod state;

pub use crate::{
    color::Color,
    cursor::{CursorEvent, CursorEventContent, InputHandlerInput, TextEdit},
    dp::{Density, Dp},
    frame::Frame,
    layout::{
        Component, ComputedData, Constraint, DimensionValue, LayoutDirection, Length, MeasureInput,
    },
    prop::{Callback, CallbackWith},
    px::{Px, PxPosition, PxRect, PxSize},
    renderer::{Canvas, DrawScope, LayerGuard},
    state::State,
};
