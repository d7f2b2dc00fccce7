//! Engine-facing circuit description
//!
//! `GridModel::construct_circuit` flattens the grid into ordered columns of
//! gate applications. The quantum-state engine builds its own circuit from
//! this, either directly or through the OpenQASM 2.0 text.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::node::NodeType;

/// One gate application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitOp {
    pub gate: NodeType,
    /// Target wire
    pub wire: usize,
    pub control: Option<usize>,
    /// Second control, only for multi-control gates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_b: Option<usize>,
    /// Rotation angle, 0 for the plain gate
    pub radians: f64,
}

impl CircuitOp {
    fn is_rotated(&self) -> bool {
        self.gate.is_rotatable() && self.radians != 0.0
    }
}

/// All gate applications of one grid column, ordered by wire
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CircuitColumn {
    pub index: usize,
    pub ops: Vec<CircuitOp>,
}

/// Structural description of the edited circuit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Circuit {
    pub num_qubits: usize,
    pub columns: Vec<CircuitColumn>,
}

impl Circuit {
    /// Total number of gate applications
    pub fn op_count(&self) -> usize {
        self.columns.iter().map(|c| c.ops.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.op_count() == 0
    }

    /// Iterate over all ops in application order
    pub fn ops(&self) -> impl Iterator<Item = &CircuitOp> {
        self.columns.iter().flat_map(|c| c.ops.iter())
    }

    /// Render as an OpenQASM 2.0 program over a single register `q`
    pub fn to_qasm(&self) -> String {
        let mut output = String::new();

        output.push_str("OPENQASM 2.0;\n");
        output.push_str("include \"qelib1.inc\";\n\n");
        let _ = writeln!(output, "qreg q[{}];", self.num_qubits);

        for op in self.ops() {
            output.push_str(&qasm_operation(op));
        }

        output
    }
}

fn qasm_operation(op: &CircuitOp) -> String {
    let w = op.wire;
    let theta = op.radians;

    let base = match op.gate {
        NodeType::Identity => "id",
        NodeType::X => "x",
        NodeType::Y => "y",
        NodeType::Z => "z",
        NodeType::S => "s",
        NodeType::SDagger => "sdg",
        NodeType::T => "t",
        NodeType::TDagger => "tdg",
        NodeType::H => "h",
        NodeType::Empty | NodeType::Swap | NodeType::Control | NodeType::Trace => {
            return String::new();
        }
    };

    match (op.control, op.control_b) {
        (Some(a), Some(b)) if op.gate == NodeType::X && !op.is_rotated() => {
            format!("ccx q[{}],q[{}],q[{}];\n", a, b, w)
        }
        (Some(c), _) | (None, Some(c)) if controllable(op.gate) => {
            if op.control.is_some() && op.control_b.is_some() {
                log::warn!("{} on wire {} has two controls, using only q[{}]", base, w, c);
            }
            if op.is_rotated() {
                format!("cr{}({}) q[{}],q[{}];\n", base, theta, c, w)
            } else {
                format!("c{} q[{}],q[{}];\n", base, c, w)
            }
        }
        (None, None) if op.is_rotated() => format!("r{}({}) q[{}];\n", base, theta, w),
        (None, None) => format!("{} q[{}];\n", base, w),
        _ => {
            log::warn!("{} has no controlled form in qelib1, dropping controls", base);
            format!("{} q[{}];\n", base, w)
        }
    }
}

/// Gates with a controlled form in qelib1
fn controllable(gate: NodeType) -> bool {
    matches!(gate, NodeType::X | NodeType::Y | NodeType::Z | NodeType::H)
}
