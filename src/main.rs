// RetinaLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration loading and API URL resolution
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use retinalens::app;

pub use retinalens::core;
pub use retinalens::net;
pub use retinalens::platform;
pub use retinalens::ui;
pub use retinalens::util;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// RetinaLens - Diabetic retinopathy detection client.
///
/// Select a retinal photograph to have it graded by the configured
/// prediction service.
#[derive(Parser, Debug)]
#[command(name = "RetinaLens", version, about)]
struct Cli {
    /// Image file to analyze on launch.
    image: Option<PathBuf>,

    /// Base URL of the prediction service.
    #[arg(short = 'u', long = "api-url")]
    api_url: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can take effect.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "RetinaLens starting"
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    // Resolve the service URL: CLI > environment > config > default.
    let api_base_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var(util::constants::API_URL_ENV_VAR).ok())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| config.api_base_url.clone());

    tracing::info!(api_base_url = %api_base_url, "Prediction service resolved");

    let mut state = app::state::AppState::new(
        api_base_url,
        Duration::from_secs(config.request_timeout_secs),
        cli.debug,
    );

    // If an image was provided on the CLI, analyze it on the first frame.
    if let Some(ref image) = cli.image {
        state.pending_upload = Some(image.clone());
    }

    let dark_mode = config.dark_mode;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([760.0, 820.0])
            .with_min_inner_size([520.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::RetinaLensApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch RetinaLens GUI: {e}");
        std::process::exit(1);
    }
}
