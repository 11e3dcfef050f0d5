//! Error types for the visualizer
//!
//! Sorting itself has no failure modes; errors only come from the terminal,
//! from the tracing setup, or from a configuration that cannot be drawn.

use std::io;
use thiserror::Error;

/// A configuration that cannot produce a drawable chart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("element count must be at least 1")]
    EmptyArray,

    #[error("value range is inverted: min {min} > max {max}")]
    InvertedRange { min: i32, max: i32 },

    #[error(
        "surface {width}x{height} leaves no plot area \
         with side padding {side_pad} and top padding {top_pad}"
    )]
    SurfaceTooSmall {
        width: u32,
        height: u32,
        side_pad: u32,
        top_pad: u32,
    },

    #[error("tick rate must be greater than zero")]
    ZeroTickRate,
}

/// Errors that end the application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
