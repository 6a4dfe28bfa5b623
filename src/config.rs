use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default board width in cells.
pub const DEFAULT_COLS: u16 = 20;

/// Default board height in cells.
pub const DEFAULT_ROWS: u16 = 20;

/// Default steps-per-second hint for hosts.
pub const DEFAULT_SPEED: f64 = 8.0;

/// Lowest accepted steps-per-second hint.
pub const MIN_SPEED: f64 = 1.0;

/// Segment count of a freshly reset snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Logical grid dimensions passed through the engine as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Builds a grid, raising zero dimensions to one cell.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

/// Construction-time settings for an [`Engine`](crate::engine::Engine).
///
/// Every field has a default, so a partial JSON document such as
/// `{"wrap": true}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub cols: u16,
    pub rows: u16,
    pub wrap: bool,
    /// Steps per second. Only hosts read it; the step rules ignore it.
    pub speed: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            wrap: false,
            speed: DEFAULT_SPEED,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with a custom board size and default options.
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    /// Returns a copy with wrap mode set.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Returns a copy with the speed hint set (sanitised like `set_speed`).
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = sanitize_speed(speed);
        self
    }

    /// Board dimensions with zero sizes raised to one cell.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize::new(self.cols, self.rows)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&raw).map_err(|error| match error {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    /// Parses a configuration from JSON text. Missing fields take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.speed = sanitize_speed(config.speed);
        Ok(config)
    }
}

/// Normalises a steps-per-second hint.
///
/// NaN and zero fall back to [`DEFAULT_SPEED`]; everything else, infinities
/// included, is raised to at least [`MIN_SPEED`].
#[must_use]
pub fn sanitize_speed(speed: f64) -> f64 {
    if speed.is_nan() || speed == 0.0 {
        return DEFAULT_SPEED;
    }
    speed.max(MIN_SPEED)
}

/// Parses a textual speed hint; unparseable text yields [`DEFAULT_SPEED`].
#[must_use]
pub fn parse_speed(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_SPEED;
    }
    trimmed
        .parse::<f64>()
        .map_or(DEFAULT_SPEED, sanitize_speed)
}

/// Wall-clock delay between steps for a given speed hint.
#[must_use]
pub fn step_interval_for_speed(speed: f64) -> Duration {
    Duration::from_secs_f64(1.0 / sanitize_speed(speed))
}
