//! flipbadge CLI - check and simulate badge manifests.

#![allow(
    clippy::uninlined_format_args,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

use clap::{Parser, Subcommand, ValueEnum};
use flipbadge_core::{BitmapStore, Size};
use flipbadge_test::{Frame, Harness};
use flipbadge_widgets::{BadgeManifest, ConfigError, ToggleBadge};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Frames allowed per flip before the simulation gives up.
const MAX_FRAMES_PER_FLIP: usize = 10_000;

#[derive(Parser)]
#[command(name = "flipbadge")]
#[command(about = "Animated toggle badge manifests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a badge manifest and print the resolved badge
    Check {
        /// Path to manifest file (.yaml, .yml or .toml)
        manifest: PathBuf,
    },

    /// Tap the badge and print every animation frame
    Simulate {
        /// Path to manifest file (.yaml, .yml or .toml)
        manifest: PathBuf,

        /// Frames per second
        #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..=1000))]
        fps: u32,

        /// Number of taps, each run to completion
        #[arg(long, default_value = "1")]
        taps: u32,

        /// Laid-out width
        #[arg(long, default_value = "48")]
        width: f32,

        /// Laid-out height
        #[arg(long, default_value = "48")]
        height: f32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One simulated frame as printed.
#[derive(Debug, Serialize)]
struct FrameReport<'a> {
    tap: u32,
    elapsed_ms: f64,
    rotation: f32,
    opacity: f32,
    badge_color: String,
    image: Option<&'a str>,
    checked: bool,
    draw_commands: usize,
}

impl<'a> FrameReport<'a> {
    fn new(tap: u32, frame: &Frame, badge: &ToggleBadge, store: &'a BitmapStore) -> Self {
        Self {
            tap,
            elapsed_ms: frame.elapsed.as_secs_f64() * 1000.0,
            rotation: frame.visual.rotation,
            opacity: frame.visual.opacity,
            badge_color: badge.badge_color().to_argb_hex(),
            image: frame.bitmap().and_then(|b| store.name_of(b)),
            checked: badge.is_checked(),
            draw_commands: frame.commands.len(),
        }
    }

    fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Text => println!(
                "tap {} {:>8.2}ms  rot {:>6.1}  alpha {:.2}  color {}  image {}  checked {}",
                self.tap,
                self.elapsed_ms,
                self.rotation,
                self.opacity,
                self.badge_color,
                self.image.unwrap_or("-"),
                self.checked
            ),
            OutputFormat::Json => match serde_json::to_string(self) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!(error = %e, "failed to encode frame"),
            },
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { manifest } => check_manifest(&manifest),
        Commands::Simulate {
            manifest,
            fps,
            taps,
            width,
            height,
            format,
        } => simulate(&manifest, fps, taps, Size::new(width, height), format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn check_manifest(path: &Path) -> Result<(), ConfigError> {
    println!("Checking manifest: {}", path.display());
    let manifest = BadgeManifest::load(path)?;
    let (badge, _) = manifest.build();
    let config = &manifest.badge;

    println!("Manifest valid!");
    println!("  Images: {}", manifest.images.len());
    println!(
        "  Checked:   image {:<16} color {}",
        config.checked_image.as_deref().unwrap_or("-"),
        config.checked_color.to_argb_hex()
    );
    println!(
        "  Unchecked: image {:<16} color {}",
        config.unchecked_image.as_deref().unwrap_or("-"),
        config.unchecked_color.to_argb_hex()
    );
    println!("  Initially checked: {}", badge.is_checked());
    println!("  Duration: {}ms", badge.get_duration().as_millis());
    for name in manifest.missing_images() {
        println!("  Warning: image '{}' is not declared and will not be drawn", name);
    }
    Ok(())
}

fn simulate(
    path: &Path,
    fps: u32,
    taps: u32,
    size: Size,
    format: OutputFormat,
) -> Result<(), ConfigError> {
    let manifest = BadgeManifest::load(path)?;
    let (badge, store) = manifest.build();
    let interval = Duration::from_secs_f64(1.0 / f64::from(fps));
    let mut harness = Harness::new(badge, size).frame_interval(interval);
    tracing::info!(fps, taps, ?interval, "simulating");

    for tap in 1..=taps {
        harness.tap();
        for _ in 0..MAX_FRAMES_PER_FLIP {
            let frame = harness.render();
            FrameReport::new(tap, &frame, harness.widget(), &store).print(format);
            if harness.timeline().is_idle() {
                break;
            }
            harness.step();
        }
    }
    Ok(())
}
