//! The neumorphic component showcase.
//!
//! Builds one section per component family, optionally replays a short
//! script of taps and drags against it, and renders a window of the scrolled
//! screen to a PNG.

pub mod anchor;
pub mod app_state;
pub mod screen;
pub mod script;
pub mod showcase;

use std::path::PathBuf;

use neumorphic_ui::{
    Density, Frame, LayoutDirection, Px, PxSize,
    renderer::{ExportError, Pixmap, SoftwareCanvas},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    app_state::AppState,
    script::ScriptReport,
    showcase::{ShowcaseDefaults, showcase_screen},
};

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing the image failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// The viewport has no pixels.
    #[error("invalid viewport {width}x{height}: both sides must be positive")]
    InvalidViewport { width: u32, height: u32 },
    /// The density cannot scale anything.
    #[error("density must be positive and finite, got {0}")]
    InvalidDensity(f32),
    /// A control the script drives was never laid out.
    #[error("the scripted {0} was not laid out")]
    MissingControl(&'static str),
}

/// What to render and where.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub output: PathBuf,
    pub width: u32,
    pub viewport_height: u32,
    pub scroll: u32,
    pub density: f32,
    pub layout_direction: LayoutDirection,
    pub interact: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("neumorphic-demo.png"),
            width: 400,
            viewport_height: 800,
            scroll: 0,
            density: 1.0,
            layout_direction: LayoutDirection::Ltr,
            interact: false,
        }
    }
}

impl DemoConfig {
    fn validate(&self) -> Result<(), DemoError> {
        if self.width == 0 || self.viewport_height == 0 {
            return Err(DemoError::InvalidViewport {
                width: self.width,
                height: self.viewport_height,
            });
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(DemoError::InvalidDensity(self.density));
        }
        Ok(())
    }

    fn frame(&self) -> Frame {
        let size = PxSize::new(
            Px(i32::try_from(self.width).unwrap_or(i32::MAX)),
            Px(i32::try_from(self.viewport_height).unwrap_or(i32::MAX)),
        );
        Frame::new(size, Density(self.density)).with_layout_direction(self.layout_direction)
    }
}

/// What a render produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutput {
    pub viewport: PxSize,
    pub content_height: Px,
    pub scroll: Px,
    pub report: Option<ScriptReport>,
}

/// Renders the visible window of the showcase built from `state`.
///
/// The requested scroll offset is clamped so the viewport never runs past the
/// end of the content.
pub fn render_showcase(
    config: &DemoConfig,
    state: &AppState,
) -> Result<(Pixmap, DemoOutput), DemoError> {
    config.validate()?;
    let frame = config.frame();
    let requested = Px(i32::try_from(config.scroll).unwrap_or(i32::MAX));
    let screen = showcase_screen(state, Px::ZERO);
    let content_height = screen
        .content_size(frame.size.width, frame.density, frame.layout_direction)
        .height;
    let max_scroll = screen.max_scroll(
        frame.size.width,
        frame.size.height,
        frame.density,
        frame.layout_direction,
    );
    if requested > max_scroll {
        warn!(
            requested = requested.0,
            max = max_scroll.0,
            "scroll offset past the end of the content"
        );
    }
    let scroll = requested.min(max_scroll);

    let mut canvas = SoftwareCanvas::with_background(
        config.width,
        config.viewport_height,
        ShowcaseDefaults::BACKGROUND,
    );
    frame.render(&showcase_screen(state, scroll), &mut canvas);
    Ok((
        canvas.into_pixmap(),
        DemoOutput {
            viewport: frame.size,
            content_height,
            scroll,
            report: None,
        },
    ))
}

/// Runs the demo: optional scripted interaction, render, PNG export.
pub fn run(config: &DemoConfig) -> Result<DemoOutput, DemoError> {
    config.validate()?;
    let state = AppState::new();
    let report = if config.interact {
        let frame = config.frame();
        Some(script::play(
            &state,
            frame.size.width,
            frame.density,
            frame.layout_direction,
        )?)
    } else {
        None
    };

    let (pixmap, mut output) = render_showcase(config, &state)?;
    pixmap.save_png(&config.output)?;
    info!(
        path = %config.output.display(),
        width = output.viewport.width.0,
        height = output.viewport.height.0,
        scroll = output.scroll.0,
        content_height = output.content_height.0,
        "showcase written"
    );
    output.report = report;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_viewport_is_rejected() {
        let config = DemoConfig {
            viewport_height: 0,
            ..DemoConfig::default()
        };
        assert!(matches!(
            render_showcase(&config, &AppState::new()),
            Err(DemoError::InvalidViewport {
                width: 400,
                height: 0
            })
        ));
        let config = DemoConfig {
            density: f32::NAN,
            ..DemoConfig::default()
        };
        assert!(matches!(
            render_showcase(&config, &AppState::new()),
            Err(DemoError::InvalidDensity(_))
        ));
    }

    #[test]
    fn scroll_is_clamped_to_the_content() {
        let config = DemoConfig {
            width: 200,
            viewport_height: 120,
            scroll: 1_000_000,
            ..DemoConfig::default()
        };
        let (pixmap, output) = render_showcase(&config, &AppState::new())
            .unwrap_or_else(|err| panic!("render failed: {err}"));
        assert_eq!((pixmap.width(), pixmap.height()), (200, 120));
        assert_eq!(output.scroll, output.content_height - Px(120));
        assert!(output.content_height > Px(2000));
    }

    #[test]
    fn viewport_starts_with_the_background_and_first_title() {
        let config = DemoConfig {
            width: 200,
            viewport_height: 80,
            ..DemoConfig::default()
        };
        let (pixmap, output) = render_showcase(&config, &AppState::new())
            .unwrap_or_else(|err| panic!("render failed: {err}"));
        assert_eq!(output.scroll, Px::ZERO);
        assert_eq!(pixmap.color_at(2, 2), Some(ShowcaseDefaults::BACKGROUND));
        // The bold title bar starts at the screen padding.
        let title = pixmap.color_at(24, 31).unwrap_or(ShowcaseDefaults::BACKGROUND);
        assert!(title.r < ShowcaseDefaults::BACKGROUND.r - 0.2, "{title:?}");
    }
}
