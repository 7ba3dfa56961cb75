//! Tracing setup.  The terminal is the game screen, so log lines go to a
//! file in the temp directory instead of stdout.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("platformer.log")
}

/// Install the global subscriber.  Failure to open the log file or to
/// install the subscriber is not fatal: the game just runs without logs.
pub fn init_logging(level: tracing::Level) {
    let path = log_path();
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("could not create log file {}: {}", path.display(), err);
            return;
        }
    };

    let filter_layer = tracing_subscriber::filter::LevelFilter::from(level);
    let format_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file));
    let subscriber = tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer);

    match subscriber.try_init() {
        Ok(_) => tracing::info!("logging to {}", path.display()),
        Err(err) => eprintln!("could not initialize tracing subscriber: {}", err),
    }
}
