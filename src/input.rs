//! Decoded input actions
//!
//! The device layer (keyboard, gamepad) turns raw events into `Action`s;
//! the grid controller consumes nothing else.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::ROTATION_STEP;
use crate::grid::NodeType;

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Gates the player can place directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateKind {
    X,
    Y,
    Z,
    H,
}

impl From<GateKind> for NodeType {
    fn from(kind: GateKind) -> Self {
        match kind {
            GateKind::X => NodeType::X,
            GateKind::Y => NodeType::Y,
            GateKind::Z => NodeType::Z,
            GateKind::H => NodeType::H,
        }
    }
}

/// One decoded edit/navigation command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Move the cursor one cell
    Move(Direction),
    /// Place a gate on an empty cell, or remove the same gate
    PlaceOrRemove(GateKind),
    /// Attach a control to the gate under the cursor, or detach it
    ToggleControl,
    /// Move the gate's control one wire up or down
    MoveControl(Direction),
    /// Rotate X/Y/Z by an angle (radians)
    Rotate(f64),
    /// Delete whatever is under the cursor
    Delete,
}

impl Action {
    /// Decode a key name from the keyboard bindings
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "up" => Some(Action::Move(Direction::Up)),
            "s" | "down" => Some(Action::Move(Direction::Down)),
            "a" | "left" => Some(Action::Move(Direction::Left)),
            "d" | "right" => Some(Action::Move(Direction::Right)),
            "x" => Some(Action::PlaceOrRemove(GateKind::X)),
            "y" => Some(Action::PlaceOrRemove(GateKind::Y)),
            "z" => Some(Action::PlaceOrRemove(GateKind::Z)),
            "h" => Some(Action::PlaceOrRemove(GateKind::H)),
            "c" | "ctrl" => Some(Action::ToggleControl),
            "r" | "ctrl-up" => Some(Action::MoveControl(Direction::Up)),
            "f" | "ctrl-down" => Some(Action::MoveControl(Direction::Down)),
            "q" => Some(Action::Rotate(-ROTATION_STEP)),
            "e" => Some(Action::Rotate(ROTATION_STEP)),
            "backspace" | "delete" | "del" => Some(Action::Delete),
            _ => None,
        }
    }
}

/// Deterministic pseudo-random action stream for the attract/demo mode
#[derive(Debug, Clone)]
pub struct AttractMode {
    rng: Pcg32,
    rotation_step: f64,
}

impl AttractMode {
    pub fn new(seed: u64) -> Self {
        Self::with_rotation_step(seed, ROTATION_STEP)
    }

    pub fn with_rotation_step(seed: u64, rotation_step: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            rotation_step,
        }
    }

    /// Next action; navigation is weighted so the cursor wanders
    pub fn next_action(&mut self) -> Action {
        const DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        const GATES: [GateKind; 4] = [GateKind::X, GateKind::Y, GateKind::Z, GateKind::H];

        match self.rng.random_range(0..10u32) {
            0..=3 => Action::Move(DIRECTIONS[self.rng.random_range(0..4)]),
            4 | 5 => Action::PlaceOrRemove(GATES[self.rng.random_range(0..4)]),
            6 => Action::ToggleControl,
            7 => {
                let dir = if self.rng.random_bool(0.5) {
                    Direction::Up
                } else {
                    Direction::Down
                };
                Action::MoveControl(dir)
            }
            8 => {
                let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
                Action::Rotate(sign * self.rotation_step)
            }
            _ => Action::Delete,
        }
    }
}

impl Iterator for AttractMode {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        Some(self.next_action())
    }
}
