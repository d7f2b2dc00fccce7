//! QPong - Quantum Pong circuit grid
//!
//! The right-hand paddle is driven by a quantum circuit the player edits on
//! a grid of wires and columns. This crate holds the editing engine.
//!
//! Core modules:
//! - `grid`: Circuit grid model, edit controller, engine-facing circuit
//! - `input`: Decoded input actions and the attract-mode action source
//! - `settings`: Per-level grid configuration
//! - `error`: Errors at the settings/validation boundary

pub mod error;
pub mod grid;
pub mod input;
pub mod settings;

pub use error::{GridError, SettingsError};
pub use grid::{Circuit, CircuitOp, Cursor, GridController, GridModel, GridNode, NodeType};
pub use input::{Action, AttractMode, Direction, GateKind};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of columns in the circuit grid
    pub const CIRCUIT_DEPTH: usize = 18;
    /// Qubits (wires) on the first level
    pub const DEFAULT_QUBITS: usize = 3;
    /// Largest circuit the state engine accepts
    pub const MAX_QUBITS: usize = 10;
    /// Rotation applied per rotate key press (radians)
    pub const ROTATION_STEP: f64 = std::f64::consts::PI / 8.0;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_radians(angle: f64) -> f64 {
    use std::f64::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
