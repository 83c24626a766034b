use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use raster::{AssetStore, SCREEN_HEIGHT, SCREEN_WIDTH};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ui::app::App;

const LOG_FILE: &str = "flapscan.log";

fn main() -> ExitCode {
    // Keep the guard alive: dropping it stops the file writer.
    let _log_guard = init_logging();

    tracing::info!("flapscan v{}", env!("CARGO_PKG_VERSION"));

    let assets = match env::args_os().nth(1).map(PathBuf::from) {
        Some(dir) => {
            tracing::info!("loading assets from {}", dir.display());
            match AssetStore::load_dir(&dir) {
                Ok(assets) => assets,
                Err(e) => {
                    tracing::error!("can't load assets: {e}");
                    return ExitCode::from(2);
                }
            }
        }
        None => {
            tracing::info!("no asset directory given, using placeholders");
            AssetStore::placeholders()
        }
    };

    #[allow(clippy::cast_precision_loss)]
    let window_size = [
        SCREEN_WIDTH as f32 * 0.75 + 220.0,
        SCREEN_HEIGHT as f32 * 0.75,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title(format!("flapscan v{}", env!("CARGO_PKG_VERSION"))),
        ..Default::default()
    };

    let app = App::new(assets);
    if let Err(e) = eframe::run_native("flapscan", options, Box::new(|_cc| Ok(Box::new(app)))) {
        tracing::error!("viewer failed: {e}");
        return ExitCode::from(3);
    }

    ExitCode::SUCCESS
}

/// Console plus a log file in the temp directory, filtered by `RUST_LOG`
/// (default `info`).
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(env::temp_dir(), LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}
