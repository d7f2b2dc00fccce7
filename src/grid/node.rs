//! Grid node types
//!
//! One `GridNode` per (wire, column) cell of the circuit grid.

use serde::{Deserialize, Serialize};

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeType {
    #[default]
    Empty,
    Identity,
    X,
    Y,
    Z,
    S,
    SDagger,
    T,
    TDagger,
    H,
    /// Reserved: accepted by the model, never built by the controller
    Swap,
    /// Control part of a multi-qubit gate
    Control,
    /// On the path between a gate and its control
    Trace,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Empty => "Empty",
            NodeType::Identity => "Identity",
            NodeType::X => "X",
            NodeType::Y => "Y",
            NodeType::Z => "Z",
            NodeType::S => "S",
            NodeType::SDagger => "Sdg",
            NodeType::T => "T",
            NodeType::TDagger => "Tdg",
            NodeType::H => "H",
            NodeType::Swap => "Swap",
            NodeType::Control => "Control",
            NodeType::Trace => "Trace",
        }
    }

    /// Gates the player places and links controls to
    pub fn is_editable_gate(&self) -> bool {
        matches!(self, NodeType::X | NodeType::Y | NodeType::Z | NodeType::H)
    }

    /// Gates that turn into Rx/Ry/Rz when rotated
    pub fn is_rotatable(&self) -> bool {
        matches!(self, NodeType::X | NodeType::Y | NodeType::Z)
    }

    /// Whether the node is a gate the state engine applies
    pub fn is_gate(&self) -> bool {
        !matches!(
            self,
            NodeType::Empty | NodeType::Control | NodeType::Trace | NodeType::Swap
        )
    }
}

/// A single cell of the circuit grid
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridNode {
    pub node_type: NodeType,
    /// First control wire
    pub ctrl_a: Option<usize>,
    /// Second control wire (storage only, no edit operation sets it)
    pub ctrl_b: Option<usize>,
    /// Rotation angle in [0, 2π); only meaningful for X/Y/Z
    pub radians: f64,
}

impl GridNode {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn trace() -> Self {
        Self::new(NodeType::Trace)
    }

    /// Whether this node references `wire` as one of its controls
    pub fn is_controlled_by(&self, wire: usize) -> bool {
        self.ctrl_a == Some(wire) || self.ctrl_b == Some(wire)
    }

    /// Rx/Ry/Rz rather than the plain Pauli gate
    pub fn is_rotated(&self) -> bool {
        self.node_type.is_rotatable() && self.radians != 0.0
    }

    /// Two-character cell label for text renderings
    pub fn symbol(&self) -> &'static str {
        match self.node_type {
            NodeType::Empty => "--",
            NodeType::Identity => "I-",
            NodeType::X if self.is_rotated() => "Rx",
            NodeType::Y if self.is_rotated() => "Ry",
            NodeType::Z if self.is_rotated() => "Rz",
            NodeType::X => "X-",
            NodeType::Y => "Y-",
            NodeType::Z => "Z-",
            NodeType::S => "S-",
            NodeType::SDagger => "Sd",
            NodeType::T => "T-",
            NodeType::TDagger => "Td",
            NodeType::H => "H-",
            NodeType::Swap => "Sw",
            NodeType::Control => "@-",
            NodeType::Trace => "|-",
        }
    }
}
