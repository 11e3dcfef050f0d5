// Configuration and defaults for the visualizer

use crate::errors::ConfigError;
use std::time::Duration;

/// Logical width of the drawing surface
pub const DEFAULT_WIDTH: u32 = 800;

/// Logical height of the drawing surface
pub const DEFAULT_HEIGHT: u32 = 600;

/// Number of bars generated on every reset
pub const DEFAULT_ELEMENT_COUNT: usize = 50;

/// Inclusive value range for generated bars
pub const DEFAULT_MIN_VALUE: i32 = 0;
pub const DEFAULT_MAX_VALUE: i32 = 100;

/// Total horizontal padding, split evenly between left and right
pub const SIDE_PAD: u32 = 100;

/// Vertical space reserved above the plot for the title and help lines
pub const TOP_PAD: u32 = 150;

/// Frames per second of the event loop
pub const DEFAULT_TICK_RATE_HZ: u32 = 40;

/// Everything the controller needs to build and drive a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub element_count: usize,
    pub min_value: i32,
    pub max_value: i32,
    pub side_pad: u32,
    pub top_pad: u32,
    pub tick_rate_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            element_count: DEFAULT_ELEMENT_COUNT,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            side_pad: SIDE_PAD,
            top_pad: TOP_PAD,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
        }
    }
}

impl Config {
    /// Reject configurations the model and renderer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_count == 0 {
            return Err(ConfigError::EmptyArray);
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvertedRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.width <= self.side_pad || self.height <= self.top_pad {
            return Err(ConfigError::SurfaceTooSmall {
                width: self.width,
                height: self.height,
                side_pad: self.side_pad,
                top_pad: self.top_pad,
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Time budget for one frame
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}
