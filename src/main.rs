#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use hscstudy_core::logging::setup_logging;
use hscstudy_core::AppConfig;

/// Global configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn get_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// HSC Study - English revision desktop app
#[derive(Parser, Debug)]
#[command(name = "hscstudy-desktop")]
#[command(about = "HSC Study - summaries, quizzes and flashcards for HSC English")]
struct Args {
    /// Data directory for the preference database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON dataset with the study content
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = AppConfig::new(args.data_dir, args.dataset);
    tracing::info!(
        "Starting with data dir: {:?}, dataset: {:?}",
        config.data_dir,
        config.dataset_path
    );
    let _ = APP_CONFIG.set(config);

    let window_width = 1100.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("HSC Study")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
