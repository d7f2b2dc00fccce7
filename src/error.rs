//! Error types
//!
//! Grid edits never fail (rejected edits leave the grid untouched). Errors
//! only surface when loading settings or validating a grid snapshot.

use thiserror::Error;

/// Failure to load, parse or accept a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A structural invariant of the circuit grid does not hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("gate at wire {wire}, column {column} references out-of-bounds control wire {control}")]
    ControlOutOfBounds {
        wire: usize,
        column: usize,
        control: usize,
    },

    #[error("gate at wire {wire}, column {column} is its own control")]
    ControlOnOwnWire { wire: usize, column: usize },

    #[error("control wire {control} in column {column} holds a {found} node")]
    ControlCellOccupied {
        control: usize,
        column: usize,
        found: &'static str,
    },

    #[error("control wire {control} in column {column} is shared by several gates")]
    SharedControl { control: usize, column: usize },

    #[error("wire {wire} in column {column} should bridge a control link but holds a {found} node")]
    MissingTrace {
        wire: usize,
        column: usize,
        found: &'static str,
    },

    #[error("trace at wire {wire}, column {column} is not part of any control link")]
    OrphanTrace { wire: usize, column: usize },
}
