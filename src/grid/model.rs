//! Circuit grid storage
//!
//! A fixed `max_wires` x `max_columns` array of nodes. The model does no
//! cross-cell validation on writes; multi-cell edits are the controller's
//! job. Renderers and the state engine read it through `&GridModel`.

use std::fmt;

use serde::Serialize;

use super::circuit::{Circuit, CircuitColumn, CircuitOp};
use super::node::{GridNode, NodeType};
use crate::error::GridError;

/// The circuit grid (wires are rows, columns are time steps)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridModel {
    max_wires: usize,
    max_columns: usize,
    /// Row-major: index = wire * max_columns + column
    nodes: Vec<GridNode>,
}

impl GridModel {
    /// Create an empty grid
    pub fn new(max_wires: usize, max_columns: usize) -> Self {
        assert!(max_wires > 0 && max_columns > 0, "grid must not be empty");
        Self {
            max_wires,
            max_columns,
            nodes: vec![GridNode::empty(); max_wires * max_columns],
        }
    }

    pub fn max_wires(&self) -> usize {
        self.max_wires
    }

    pub fn max_columns(&self) -> usize {
        self.max_columns
    }

    #[inline]
    fn index(&self, wire: usize, column: usize) -> usize {
        assert!(
            wire < self.max_wires && column < self.max_columns,
            "grid cell ({}, {}) out of bounds ({} x {})",
            wire,
            column,
            self.max_wires,
            self.max_columns
        );
        wire * self.max_columns + column
    }

    /// Node stored at a cell
    ///
    /// Panics if the cell is out of bounds.
    pub fn get_node(&self, wire: usize, column: usize) -> GridNode {
        self.nodes[self.index(wire, column)]
    }

    /// Replace a cell outright
    pub fn set_node(&mut self, wire: usize, column: usize, node: GridNode) {
        let idx = self.index(wire, column);
        self.nodes[idx] = node;
    }

    /// What a cell shows: its stored type, or `Control` when the cell is
    /// empty and a gate in the same column uses this wire as a control.
    pub fn get_node_gate_part(&self, wire: usize, column: usize) -> NodeType {
        let node = self.get_node(wire, column);
        if node.node_type != NodeType::Empty {
            return node.node_type;
        }
        if self.get_gate_wire_for_control_node(wire, column).is_some() {
            NodeType::Control
        } else {
            NodeType::Empty
        }
    }

    /// Wire of the gate that the control at (`control_wire`, `column`)
    /// belongs to, if any
    pub fn get_gate_wire_for_control_node(&self, control_wire: usize, column: usize) -> Option<usize> {
        (0..self.max_wires)
            .filter(|&wire| wire != control_wire)
            .find(|&wire| self.get_node(wire, column).is_controlled_by(control_wire))
    }

    /// Flatten the grid into the description the state engine consumes
    pub fn construct_circuit(&self) -> Circuit {
        let columns = (0..self.max_columns)
            .map(|column| CircuitColumn {
                index: column,
                ops: (0..self.max_wires)
                    .filter_map(|wire| {
                        let node = self.get_node(wire, column);
                        if node.node_type == NodeType::Swap {
                            log::debug!("skipping reserved swap node at ({}, {})", wire, column);
                        }
                        node.node_type.is_gate().then(|| CircuitOp {
                            gate: node.node_type,
                            wire,
                            control: node.ctrl_a,
                            control_b: node.ctrl_b,
                            radians: if node.node_type.is_rotatable() {
                                node.radians
                            } else {
                                0.0
                            },
                        })
                    })
                    .collect(),
            })
            .collect();

        Circuit {
            num_qubits: self.max_wires,
            columns,
        }
    }

    /// Check the structural invariants every edit must preserve
    pub fn validate(&self) -> Result<(), GridError> {
        for column in 0..self.max_columns {
            // Wires that some control link passes through or ends on
            let mut bridged = vec![false; self.max_wires];
            let mut control_owner: Vec<Option<usize>> = vec![None; self.max_wires];

            for wire in 0..self.max_wires {
                let node = self.get_node(wire, column);
                for control in [node.ctrl_a, node.ctrl_b].into_iter().flatten() {
                    if control >= self.max_wires {
                        return Err(GridError::ControlOutOfBounds {
                            wire,
                            column,
                            control,
                        });
                    }
                    if control == wire {
                        return Err(GridError::ControlOnOwnWire { wire, column });
                    }
                    if control_owner[control].replace(wire).is_some() {
                        return Err(GridError::SharedControl { control, column });
                    }
                    let found = self.get_node(control, column).node_type;
                    if found != NodeType::Empty && found != NodeType::Control {
                        return Err(GridError::ControlCellOccupied {
                            control,
                            column,
                            found: found.as_str(),
                        });
                    }

                    let (lo, hi) = (wire.min(control), wire.max(control));
                    for between in lo + 1..hi {
                        let found = self.get_node(between, column).node_type;
                        if found != NodeType::Trace {
                            return Err(GridError::MissingTrace {
                                wire: between,
                                column,
                                found: found.as_str(),
                            });
                        }
                        bridged[between] = true;
                    }
                }
            }

            for (wire, &is_bridged) in bridged.iter().enumerate() {
                if !is_bridged && self.get_node(wire, column).node_type == NodeType::Trace {
                    return Err(GridError::OrphanTrace { wire, column });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for wire in 0..self.max_wires {
            write!(f, "q{:<2}", wire)?;
            for column in 0..self.max_columns {
                let node = self.get_node(wire, column);
                let symbol = if self.get_node_gate_part(wire, column) == NodeType::Control {
                    NodeType::Control
                } else {
                    node.node_type
                };
                let shown = GridNode { node_type: symbol, ..node };
                write!(f, "-{}", shown.symbol())?;
            }
            writeln!(f, "-")?;
        }
        Ok(())
    }
}
