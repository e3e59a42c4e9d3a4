use std::path::PathBuf;

use clap::Parser;
use neumorphic_demo::{DemoConfig, DemoError, run};
use neumorphic_ui::LayoutDirection;
use tracing::info;

#[derive(Parser)]
#[command(name = "neumorphic-demo")]
#[command(version, about = "Render the neumorphic component showcase to a PNG", long_about = None)]
struct Cli {
    /// Where to write the image
    #[arg(short, long, default_value = "neumorphic-demo.png")]
    output: PathBuf,
    /// Viewport width in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,
    /// Viewport height in pixels
    #[arg(long, default_value_t = 800)]
    viewport_height: u32,
    /// Scroll offset in pixels, clamped to the content
    #[arg(long, default_value_t = 0)]
    scroll: u32,
    /// Pixels per density-independent pixel
    #[arg(long, default_value_t = 1.0)]
    density: f32,
    /// Lay the showcase out right to left
    #[arg(long)]
    rtl: bool,
    /// Toggle a switch, drag a slider and type into a text field before
    /// rendering
    #[arg(long)]
    interact: bool,
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output: cli.output,
            width: cli.width,
            viewport_height: cli.viewport_height,
            scroll: cli.scroll,
            density: cli.density,
            layout_direction: if cli.rtl {
                LayoutDirection::Rtl
            } else {
                LayoutDirection::Ltr
            },
            interact: cli.interact,
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> Result<(), DemoError> {
    init_tracing();
    let config = DemoConfig::from(Cli::parse());
    let output = run(&config)?;
    if let Some(report) = output.report {
        info!(
            switch_checked = report.switch_checked,
            slider_value = report.slider_value,
            text = %report.text,
            "scripted interaction finished"
        );
    }
    Ok(())
}
