//! Circuit grid settings
//!
//! Persisted as JSON next to the game. Dimensions are read once per level;
//! changing them takes effect on the next `GridController::setup_level`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{CIRCUIT_DEPTH, DEFAULT_QUBITS, MAX_QUBITS, ROTATION_STEP};
use crate::error::SettingsError;
use crate::grid::{GridController, GridModel};

/// Grid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Qubits in the player's circuit (one wire each)
    pub qubit_count: usize,
    /// Columns in the circuit grid
    pub circuit_depth: usize,
    /// Angle added per rotate key press (radians)
    pub rotation_step: f64,
    /// Seed for the attract-mode action stream
    pub attract_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            qubit_count: DEFAULT_QUBITS,
            circuit_depth: CIRCUIT_DEPTH,
            rotation_step: ROTATION_STEP,
            attract_seed: 12345,
        }
    }
}

impl Settings {
    /// Check that the values describe a usable grid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=MAX_QUBITS).contains(&self.qubit_count) {
            return Err(SettingsError::Invalid {
                field: "qubit_count",
                reason: format!("{} not in 1..={}", self.qubit_count, MAX_QUBITS),
            });
        }
        if self.circuit_depth == 0 {
            return Err(SettingsError::Invalid {
                field: "circuit_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.rotation_step.is_finite() || self.rotation_step <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "rotation_step",
                reason: format!("{} is not a positive angle", self.rotation_step),
            });
        }
        Ok(())
    }

    /// Fresh empty grid with these dimensions
    pub fn build_model(&self) -> GridModel {
        GridModel::new(self.qubit_count, self.circuit_depth)
    }

    pub fn build_controller(&self) -> GridController {
        GridController::new(self.build_model())
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file, reporting any failure
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
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

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
