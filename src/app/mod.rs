//! Application glue module
//!
//! Configuration, logging, and application-level utilities.

mod config;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use config::{Config, ConfigError};

/// Install the tracing subscriber
///
/// The terminal is busy showing the editor, so logs only go to a file. With
/// no file, no subscriber is installed and log events are discarded. The
/// filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging(log_file: Option<&Path>) -> std::io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
