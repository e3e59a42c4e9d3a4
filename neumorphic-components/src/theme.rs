//! Neumorphic color palette.
//!
//! ## Usage
//!
//! Pick the light and shadow tones shared by every surface on a screen.

use neumorphic_ui::Color;

/// Colors shared by neumorphic surfaces.
///
/// The effect only reads well when `surface` sits between `light` and
/// `shadow` and the screen background uses `surface` as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeumorphicColors {
    /// Highlight tone, cast by the edges facing the light.
    pub light: Color,
    /// Shadow tone, cast by the edges facing away from the light.
    pub shadow: Color,
    /// Screen and surface background.
    pub surface: Color,
    /// Primary content (titles, labels).
    pub content: Color,
    /// Secondary content (descriptions, placeholders).
    pub secondary_content: Color,
}

impl NeumorphicColors {
    /// The default light palette.
    pub const DEFAULT: Self = Self {
        light: Color::WHITE,
        shadow: Color::LIGHT_GRAY,
        surface: Color::from_rgb_u8(0xEE, 0xEE, 0xEE),
        content: Color::DARK_GRAY,
        secondary_content: Color::GRAY,
    };
}

impl Default for NeumorphicColors {
    fn default() -> Self {
        Self::DEFAULT
    }
}
