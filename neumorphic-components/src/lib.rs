//! Neumorphic surfaces and the components built on them.
//!
//! # Usage
//!
//! Every surface is a shape painted with two inner shadows of opposite
//! offsets: a light one and a dark one. [`neumorphic::neumorphic_up`] places
//! the light shadow at the top-start edge so the surface looks extruded;
//! [`neumorphic::neumorphic_down`] swaps the colors so it looks pressed in.
//! Buttons, cards, switches, sliders, progress bars, text fields, floating
//! action buttons and popups wrap that primitive with a default shape and an
//! interaction.
//!
//! # Example
//!
//! ```
//! use neumorphic_components::{
//!     button::{Button, ButtonArgs},
//!     column::{Column, ColumnArgs},
//!     switch::{Switch, SwitchArgs},
//!     text::Text,
//!     theme::NeumorphicColors,
//! };
//! use neumorphic_ui::{Density, Dp, Frame, Px, PxSize, renderer::SoftwareCanvas};
//!
//! let screen = Column::new(ColumnArgs::default().spacing(Dp(16.0)).padding(Dp(20.0)))
//!     .child(Button::new(ButtonArgs::default().on_click(|| {})).child(Text::new("Press me")))
//!     .child(Switch::new(SwitchArgs::default().checked(true)));
//!
//! let frame = Frame::new(PxSize::new(Px(320), Px(240)), Density::ONE);
//! let mut canvas = SoftwareCanvas::with_background(320, 240, NeumorphicColors::DEFAULT.surface);
//! frame.render(&screen, &mut canvas);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod layout_utils;

pub mod alignment;
pub mod button;
pub mod card;
pub mod column;
pub mod floating_action_button;
pub mod icon;
pub mod inner_shadow;
pub mod interaction;
pub mod neumorphic;
pub mod popup;
pub mod progress;
pub mod shape_def;
pub mod slider;
pub mod spacer;
pub mod switch;
pub mod text;
pub mod text_edit_core;
pub mod text_field;
pub mod theme;
