//! Circuit grid editing engine
//!
//! `GridModel` stores the wire x column grid of gate nodes. It is shared
//! read-only with the renderer and the quantum-state engine. All mutation
//! goes through `GridController`, which keeps the grid structurally valid
//! after every action.

pub mod circuit;
pub mod controller;
pub mod model;
pub mod node;

pub use circuit::{Circuit, CircuitColumn, CircuitOp};
pub use controller::{Cursor, GridController};
pub use model::GridModel;
pub use node::{GridNode, NodeType};
