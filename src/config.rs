//! Editor settings read from the environment.

use planner::consts::{CANVAS_HEIGHT_FT, CANVAS_WIDTH_FT, SNAP_THRESHOLD};
use planner::engine::EngineConfig;
use planner::geometry::CanvasExtent;

use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: expected a number, got '{value}'")]
    NotANumber { key: &'static str, value: String },

    #[error("{key}: must be greater than zero, got {value}")]
    NotPositive { key: &'static str, value: f64 },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotANumber { .. } => "E_CONFIG_NOT_A_NUMBER",
            Self::NotPositive { .. } => "E_CONFIG_NOT_POSITIVE",
        }
    }
}

/// Canvas and snapping settings.
///
/// - `FLOORPLAN_CANVAS_WIDTH_FT`: default 50
/// - `FLOORPLAN_CANVAS_HEIGHT_FT`: default 50
/// - `FLOORPLAN_SNAP_THRESHOLD`: percent units, default 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub extent: CanvasExtent,
    pub snap_threshold: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { extent: CanvasExtent::new(CANVAS_WIDTH_FT, CANVAS_HEIGHT_FT), snap_threshold: SNAP_THRESHOLD }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is not a positive number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let width_ft = positive(&lookup, "FLOORPLAN_CANVAS_WIDTH_FT", CANVAS_WIDTH_FT)?;
        let height_ft = positive(&lookup, "FLOORPLAN_CANVAS_HEIGHT_FT", CANVAS_HEIGHT_FT)?;
        let snap_threshold = positive(&lookup, "FLOORPLAN_SNAP_THRESHOLD", SNAP_THRESHOLD)?;
        Ok(Self { extent: CanvasExtent::new(width_ft, height_ft), snap_threshold })
    }

    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig { extent: self.extent, snap_threshold: self.snap_threshold }
    }
}

fn positive<F>(lookup: &F, key: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber { key, value: raw.clone() })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive { key, value });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
