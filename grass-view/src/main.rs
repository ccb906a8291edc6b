//! Application entry point for the grass viewer.
//!
//! This binary parses command-line options, builds the [`Scene`] and
//! hands it to [`Viewer`], which drives frames and clicks through
//! eframe/egui.

mod viewer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grass_core::{config::SceneConfig, scene::Scene};
use viewer::Viewer;

/// Space around the canvas taken by the side panel and the top/bottom bars.
const CHROME_WIDTH: f32 = 240.0;
const CHROME_HEIGHT: f32 = 80.0;

#[derive(Parser, Debug)]
#[command(about = "Click to plant grass; every click sends a gust through the field")]
struct Args {
    /// JSON scene config; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// canvas width in pixels
    #[arg(long)]
    width: Option<f32>,

    /// canvas height in pixels
    #[arg(long)]
    height: Option<f32>,

    /// height of the soil band below the ground line
    #[arg(long)]
    margin: Option<f32>,

    /// show control points and sampled control segments
    #[arg(long)]
    debug: bool,

    /// seed for blade randomization (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

/// Merges the optional config file with command-line overrides.
fn build_config(args: &Args) -> Result<SceneConfig> {
    let mut cfg = match &args.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SceneConfig::default(),
    };

    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }
    if let Some(m) = args.margin {
        cfg.bottom_margin = m;
    }
    if args.debug {
        cfg.debug_overlay = true;
    }

    cfg.validate().context("invalid command-line options")?;
    Ok(cfg)
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the window is closed normally.
/// - `Err` if the configuration is invalid or eframe fails to create
///   the native window or event loop.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = build_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let scene = Scene::new(cfg, seed)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cfg.width + CHROME_WIDTH, cfg.height + CHROME_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Grass",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(scene)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}
