//! Simulation settings
//!
//! Loaded from JSON; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FRAME_MS, MAX_DT_SCALE};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for a session
    pub seed: u64,
    /// Background stars
    pub star_count: usize,
    /// Live particle cap (extra emissions are dropped)
    pub max_particles: usize,
    /// Nominal frame duration in milliseconds
    pub frame_ms: f64,
    /// Ticks a single frame may run after a stall
    pub max_ticks_per_frame: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            star_count: 100,
            max_particles: 2000,
            frame_ms: FRAME_MS,
            max_ticks_per_frame: MAX_DT_SCALE as u32,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_ms.is_nan() || self.frame_ms <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "frame_ms",
                reason: "must be positive",
            });
        }
        if self.max_ticks_per_frame == 0 {
            return Err(SettingsError::Invalid {
                field: "max_ticks_per_frame",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
