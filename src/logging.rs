//! Opt-in diagnostics
//!
//! The terminal belongs to the UI, so tracing output goes to a file in the
//! working directory. Nothing is installed unless `RUST_LOG` holds a valid
//! filter, e.g. `RUST_LOG=sortviz=debug`.

use crate::errors::AppError;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// File the subscriber appends to
pub const LOG_FILE: &str = "sortviz.log";

/// Install the global subscriber when `RUST_LOG` is set.
///
/// Returns whether logging was enabled.
pub fn init() -> Result<bool, AppError> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(false);
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(".")
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(true)
}
