//! Circuit grid editing controller
//!
//! Owns the cursor and the `GridModel`, and applies one decoded `Action`
//! at a time. Each handler finishes all multi-cell cleanup (traces,
//! cascades) before returning, so the grid is valid between calls.
//! Rejected edits leave the grid untouched and report nothing.

use serde::Serialize;

use super::model::GridModel;
use super::node::{GridNode, NodeType};
use crate::input::{Action, Direction, GateKind};
use crate::normalize_radians;

/// Selected cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Cursor {
    pub wire: usize,
    pub column: usize,
}

/// Interprets input actions as grid edits
#[derive(Debug, Clone)]
pub struct GridController {
    model: GridModel,
    cursor: Cursor,
}

impl GridController {
    pub fn new(model: GridModel) -> Self {
        Self {
            model,
            cursor: Cursor::default(),
        }
    }

    /// Replace the grid for a new level and home the cursor
    pub fn setup_level(&mut self, max_wires: usize, max_columns: usize) {
        log::info!("Circuit grid set up: {} wires x {} columns", max_wires, max_columns);
        self.model = GridModel::new(max_wires, max_columns);
        self.reset_cursor();
    }

    /// Read-only grid for renderers and the state engine
    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn selected_wire(&self) -> usize {
        self.cursor.wire
    }

    pub fn selected_column(&self) -> usize {
        self.cursor.column
    }

    /// Gate part of the node under the cursor
    pub fn selected_node_gate_part(&self) -> NodeType {
        self.model.get_node_gate_part(self.cursor.wire, self.cursor.column)
    }

    /// Apply one decoded action
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Move(direction) => self.move_cursor(direction),
            Action::PlaceOrRemove(kind) => self.place_or_remove(kind),
            Action::ToggleControl => self.toggle_control(),
            Action::MoveControl(direction) => self.move_control(direction),
            Action::Rotate(radians) => self.rotate(radians),
            Action::Delete => self.delete(),
        }
    }

    // === Navigation ===

    /// Move the cursor one cell, staying put at the grid edge
    pub fn move_cursor(&mut self, direction: Direction) {
        let Cursor { wire, column } = self.cursor;
        match direction {
            Direction::Left if column > 0 => self.cursor.column -= 1,
            Direction::Right if column + 1 < self.model.max_columns() => self.cursor.column += 1,
            Direction::Up if wire > 0 => self.cursor.wire -= 1,
            Direction::Down if wire + 1 < self.model.max_wires() => self.cursor.wire += 1,
            _ => {}
        }
        self.highlight_selected_node();
    }

    /// Jump to a cell; out-of-bounds targets are ignored
    pub fn select(&mut self, wire: usize, column: usize) {
        if wire < self.model.max_wires() && column < self.model.max_columns() {
            self.cursor = Cursor { wire, column };
            self.highlight_selected_node();
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = Cursor::default();
        self.highlight_selected_node();
    }

    fn highlight_selected_node(&self) {
        log::trace!(
            "cursor at wire {}, column {} ({:?})",
            self.cursor.wire,
            self.cursor.column,
            self.selected_node_gate_part()
        );
    }

    // === Gate edits ===

    /// Place `kind` on an empty cell, or delete it if the cell already
    /// holds the same gate. Any other occupant is left alone.
    pub fn place_or_remove(&mut self, kind: GateKind) {
        let node_type = NodeType::from(kind);
        let current = self.selected_node_gate_part();
        if current == NodeType::Empty {
            self.model.set_node(
                self.cursor.wire,
                self.cursor.column,
                GridNode::new(node_type),
            );
        } else if current == node_type {
            self.delete();
        } else {
            log::debug!("cell occupied by {:?}, not placing {:?}", current, node_type);
        }
    }

    /// Turn X/Y/Z into Rx/Ry/Rz by adding `radians` (mod 2π)
    pub fn rotate(&mut self, radians: f64) {
        let Cursor { wire, column } = self.cursor;
        if !radians.is_finite() {
            log::debug!("ignoring non-finite rotation {}", radians);
            return;
        }
        if self.selected_node_gate_part().is_rotatable() {
            let mut node = self.model.get_node(wire, column);
            node.radians = normalize_radians(node.radians + radians);
            self.model.set_node(wire, column, node);
        }
    }

    /// Delete the node under the cursor, cascading to its control link
    pub fn delete(&mut self) {
        let Cursor { wire, column } = self.cursor;
        match self.selected_node_gate_part() {
            NodeType::X | NodeType::Y | NodeType::Z | NodeType::H => {
                self.delete_controls_for_gate(wire, column);
                self.model.set_node(wire, column, GridNode::empty());
            }
            NodeType::Control => {
                match self.model.get_gate_wire_for_control_node(wire, column) {
                    Some(gate_wire) => self.delete_controls_for_gate(gate_wire, column),
                    None => log::debug!("control at ({}, {}) has no gate", wire, column),
                }
            }
            part @ (NodeType::Swap | NodeType::Trace) => {
                log::debug!("{:?} is only cleared with its gate", part);
            }
            _ => {}
        }
    }

    // === Control wires ===

    /// Attach a control to the gate under the cursor (nearest free wire,
    /// above first), or detach the one it already has
    pub fn toggle_control(&mut self) {
        let Cursor { wire, column } = self.cursor;
        if !self.selected_node_gate_part().is_editable_gate() {
            return;
        }

        let mut node = self.model.get_node(wire, column);
        if let Some(ctrl) = node.ctrl_a {
            node.ctrl_a = None;
            self.model.set_node(wire, column, node);
            for between in wire.min(ctrl) + 1..wire.max(ctrl) {
                if self.model.get_node_gate_part(between, column) == NodeType::Trace {
                    self.model.set_node(between, column, GridNode::empty());
                }
            }
            return;
        }

        let placed = wire
            .checked_sub(1)
            .is_some_and(|above| self.place_control(wire, above))
            || self.place_control(wire, wire + 1);
        if !placed {
            log::info!("Can't place control qubit for gate on wire {}", wire);
        }
    }

    /// Move the gate's control one wire up or down, hopping over the gate
    /// itself and extending the trace bridge as the span grows
    pub fn move_control(&mut self, direction: Direction) {
        let Cursor { wire, column } = self.cursor;
        if !self.selected_node_gate_part().is_editable_gate() {
            return;
        }
        let Some(ctrl) = self.model.get_node(wire, column).ctrl_a else {
            return;
        };

        let candidate = match direction {
            Direction::Up => ctrl
                .checked_sub(1)
                .and_then(|c| if c == wire { c.checked_sub(1) } else { Some(c) }),
            Direction::Down => {
                let c = ctrl + 1;
                Some(if c == wire { c + 1 } else { c })
            }
            Direction::Left | Direction::Right => return,
        };
        let Some(candidate) = candidate.filter(|&c| c < self.model.max_wires()) else {
            log::debug!("control can't move {:?} past the grid edge", direction);
            return;
        };

        if !self.place_control(wire, candidate) {
            log::info!("Control qubit could not be placed on wire {}", candidate);
            return;
        }
        log::info!("Control qubit successfully placed on wire {}", candidate);

        // The wire just vacated now lies between gate and control
        let vacated = match direction {
            Direction::Up if candidate < wire => Some(candidate + 1),
            Direction::Down if candidate > wire => Some(candidate - 1),
            _ => None,
        };
        if let Some(bridge) = vacated {
            if self.model.get_node_gate_part(bridge, column) == NodeType::Empty {
                self.model.set_node(bridge, column, GridNode::trace());
            }
        }
    }

    /// Link the gate on `gate_wire` to a control on `candidate` in the
    /// cursor column. The candidate must be in bounds and Empty or Trace.
    fn place_control(&mut self, gate_wire: usize, candidate: usize) -> bool {
        let column = self.cursor.column;
        if candidate >= self.model.max_wires() || candidate == gate_wire {
            return false;
        }

        match self.model.get_node_gate_part(candidate, column) {
            NodeType::Empty | NodeType::Trace => {
                let mut node = self.model.get_node(gate_wire, column);
                node.ctrl_a = Some(candidate);
                self.model.set_node(gate_wire, column, node);
                self.model.set_node(candidate, column, GridNode::empty());
                true
            }
            part => {
                log::debug!("Can't place control qubit on wire {} ({:?})", candidate, part);
                false
            }
        }
    }

    /// Clear the gate, its control and every cell between them. The
    /// farther of the two control slots wins; on a tie nothing happens.
    fn delete_controls_for_gate(&mut self, gate_wire: usize, column: usize) {
        let node = self.model.get_node(gate_wire, column);
        let distance = |ctrl: Option<usize>| ctrl.map_or(0, |c| c.abs_diff(gate_wire));
        let (dist_a, dist_b) = (distance(node.ctrl_a), distance(node.ctrl_b));

        let control = if dist_a > dist_b {
            node.ctrl_a
        } else if dist_a < dist_b {
            node.ctrl_b
        } else {
            None
        };

        if let Some(control) = control {
            for wire in gate_wire.min(control)..=gate_wire.max(control) {
                log::debug!("Clearing wire {} in column {}", wire, column);
                self.model.set_node(wire, column, GridNode::empty());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn controller(wires: usize, columns: usize) -> GridController {
        GridController::new(GridModel::new(wires, columns))
    }

    fn part(ctrl: &GridController, wire: usize, column: usize) -> NodeType {
        ctrl.model().get_node_gate_part(wire, column)
    }

    #[test]
    fn test_cursor_clamps_at_origin() {
        let mut ctrl = controller(3, 18);
        ctrl.handle(Action::Move(Direction::Left));
        ctrl.handle(Action::Move(Direction::Up));
        assert_eq!(ctrl.cursor(), Cursor { wire: 0, column: 0 });
    }

    #[test]
    fn test_cursor_clamps_at_far_edge() {
        let mut ctrl = controller(2, 3);
        for _ in 0..5 {
            ctrl.handle(Action::Move(Direction::Down));
            ctrl.handle(Action::Move(Direction::Right));
        }
        assert_eq!(ctrl.cursor(), Cursor { wire: 1, column: 2 });

        ctrl.reset_cursor();
        assert_eq!(ctrl.cursor(), Cursor::default());
    }

    #[test]
    fn test_select_ignores_out_of_bounds() {
        let mut ctrl = controller(3, 4);
        ctrl.select(2, 3);
        assert_eq!(ctrl.cursor(), Cursor { wire: 2, column: 3 });
        ctrl.select(3, 0);
        assert_eq!(ctrl.cursor(), Cursor { wire: 2, column: 3 });
    }

    #[test]
    fn test_place_then_remove_same_gate() {
        let mut ctrl = controller(3, 4);
        ctrl.handle(Action::PlaceOrRemove(GateKind::H));
        assert_eq!(part(&ctrl, 0, 0), NodeType::H);
        ctrl.handle(Action::PlaceOrRemove(GateKind::H));
        assert_eq!(part(&ctrl, 0, 0), NodeType::Empty);
    }

    #[test]
    fn test_different_gate_does_not_overwrite() {
        let mut ctrl = controller(3, 4);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::Rotate(PI / 4.0));
        for kind in [GateKind::Y, GateKind::Z, GateKind::H] {
            ctrl.handle(Action::PlaceOrRemove(kind));
        }
        let node = ctrl.model().get_node(0, 0);
        assert_eq!(node.node_type, NodeType::X);
        assert_eq!(node.radians, PI / 4.0);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut ctrl = controller(1, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::Z));
        let step = PI / 8.0;
        let n = (TAU / step).ceil() as usize;
        for _ in 0..n {
            ctrl.handle(Action::Rotate(step));
            let radians = ctrl.model().get_node(0, 0).radians;
            assert!((0.0..TAU).contains(&radians));
        }
        let radians = ctrl.model().get_node(0, 0).radians;
        assert!(radians < 1e-9 || TAU - radians < 1e-9, "got {}", radians);

        ctrl.handle(Action::Rotate(-step));
        let radians = ctrl.model().get_node(0, 0).radians;
        assert!((radians - (TAU - step)).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_ignores_non_finite_angles() {
        let mut ctrl = controller(1, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::Rotate(PI / 8.0));
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            ctrl.handle(Action::Rotate(bad));
            assert_eq!(ctrl.model().get_node(0, 0).radians, PI / 8.0);
        }
        let qasm = ctrl.model().construct_circuit().to_qasm();
        assert!(!qasm.contains("NaN") && !qasm.contains("inf"));
    }

    #[test]
    fn test_setup_level_rejects_empty_grid() {
        let result = std::panic::catch_unwind(|| {
            let mut ctrl = controller(3, 18);
            ctrl.setup_level(0, 18);
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_rotation_ignores_h_and_keeps_control() {
        let mut ctrl = controller(2, 1);
        ctrl.select(1, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::H));
        ctrl.handle(Action::Rotate(1.0));
        assert_eq!(ctrl.model().get_node(1, 0).radians, 0.0);

        ctrl.handle(Action::PlaceOrRemove(GateKind::H));
        ctrl.handle(Action::PlaceOrRemove(GateKind::Y));
        ctrl.handle(Action::ToggleControl);
        ctrl.handle(Action::Rotate(1.0));
        let node = ctrl.model().get_node(1, 0);
        assert_eq!(node.radians, 1.0);
        assert_eq!(node.ctrl_a, Some(0));
    }

    #[test]
    fn test_control_lands_above_first() {
        let mut ctrl = controller(3, 2);
        ctrl.select(1, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);

        assert_eq!(ctrl.model().get_node(1, 0).ctrl_a, Some(0));
        assert_eq!(part(&ctrl, 0, 0), NodeType::Control);
        assert_eq!(part(&ctrl, 2, 0), NodeType::Empty);
        assert_eq!(ctrl.model().validate(), Ok(()));
    }

    #[test]
    fn test_control_falls_back_below() {
        let mut ctrl = controller(3, 2);
        ctrl.handle(Action::PlaceOrRemove(GateKind::Z));
        ctrl.handle(Action::ToggleControl);
        assert_eq!(ctrl.model().get_node(0, 0).ctrl_a, Some(1));

        // Both neighbours occupied: rejected
        ctrl.select(2, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::Y));
        ctrl.select(1, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.select(0, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::H));
        ctrl.select(1, 1);
        ctrl.handle(Action::ToggleControl);
        assert_eq!(ctrl.model().get_node(1, 1).ctrl_a, None);
        assert_eq!(ctrl.model().get_node(0, 1).node_type, NodeType::H);
        assert_eq!(ctrl.model().get_node(2, 1).node_type, NodeType::Y);
    }

    #[test]
    fn test_control_rejected_on_single_wire() {
        let mut ctrl = controller(1, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);
        assert_eq!(ctrl.model().get_node(0, 0).ctrl_a, None);
    }

    #[test]
    fn test_toggle_control_detaches_and_clears_traces() {
        let mut ctrl = controller(4, 1);
        ctrl.select(3, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);
        ctrl.handle(Action::MoveControl(Direction::Up));
        ctrl.handle(Action::MoveControl(Direction::Up));
        assert_eq!(ctrl.model().get_node(3, 0).ctrl_a, Some(0));
        assert_eq!(part(&ctrl, 1, 0), NodeType::Trace);
        assert_eq!(part(&ctrl, 2, 0), NodeType::Trace);

        ctrl.handle(Action::ToggleControl);
        assert_eq!(ctrl.model().get_node(3, 0).ctrl_a, None);
        for wire in 0..3 {
            assert_eq!(part(&ctrl, wire, 0), NodeType::Empty);
        }
        assert_eq!(part(&ctrl, 3, 0), NodeType::X);
        assert_eq!(ctrl.model().validate(), Ok(()));
    }

    #[test]
    fn test_delete_cascade_clears_bridge() {
        let mut ctrl = controller(3, 18);
        ctrl.select(2, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);
        ctrl.handle(Action::MoveControl(Direction::Up));
        assert_eq!(ctrl.model().get_node(2, 0).ctrl_a, Some(0));
        assert_eq!(part(&ctrl, 1, 0), NodeType::Trace);

        ctrl.handle(Action::Delete);
        for wire in 0..3 {
            assert_eq!(part(&ctrl, wire, 0), NodeType::Empty);
        }
    }

    #[test]
    fn test_delete_from_control_end() {
        let mut ctrl = controller(3, 2);
        ctrl.select(0, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::H));
        ctrl.handle(Action::ToggleControl);
        ctrl.handle(Action::MoveControl(Direction::Down));
        assert_eq!(ctrl.model().get_node(0, 1).ctrl_a, Some(2));

        ctrl.select(2, 1);
        assert_eq!(ctrl.selected_node_gate_part(), NodeType::Control);
        ctrl.handle(Action::Delete);
        for wire in 0..3 {
            assert_eq!(part(&ctrl, wire, 1), NodeType::Empty);
        }
    }

    #[test]
    fn test_delete_leaves_trace_and_swap() {
        let mut ctrl = controller(3, 1);
        ctrl.select(2, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);
        ctrl.handle(Action::MoveControl(Direction::Up));

        ctrl.select(1, 0);
        ctrl.handle(Action::Delete);
        assert_eq!(part(&ctrl, 1, 0), NodeType::Trace);
        assert_eq!(ctrl.model().get_node(2, 0).ctrl_a, Some(0));

        let mut model = GridModel::new(1, 1);
        model.set_node(0, 0, GridNode::new(NodeType::Swap));
        let mut swap = GridController::new(model);
        swap.handle(Action::Delete);
        assert_eq!(part(&swap, 0, 0), NodeType::Swap);
    }

    #[test]
    fn test_delete_other_types_is_noop() {
        let mut model = GridModel::new(2, 1);
        model.set_node(0, 0, GridNode::new(NodeType::T));
        model.set_node(1, 0, GridNode::new(NodeType::Control));
        let mut ctrl = GridController::new(model);

        ctrl.handle(Action::Delete);
        assert_eq!(part(&ctrl, 0, 0), NodeType::T);
        // Stored control without an owning gate
        ctrl.select(1, 0);
        ctrl.handle(Action::Delete);
        assert_eq!(part(&ctrl, 1, 0), NodeType::Control);
    }

    #[test]
    fn test_cascade_tie_does_nothing() {
        let mut model = GridModel::new(3, 1);
        model.set_node(
            1,
            0,
            GridNode {
                ctrl_a: Some(0),
                ctrl_b: Some(2),
                ..GridNode::new(NodeType::X)
            },
        );
        let mut ctrl = GridController::new(model);
        ctrl.delete_controls_for_gate(1, 0);
        assert_eq!(ctrl.model().get_node(1, 0).ctrl_a, Some(0));
        assert_eq!(ctrl.model().get_node(1, 0).ctrl_b, Some(2));

        // Direct delete still clears the gate cell itself
        ctrl.select(1, 0);
        ctrl.handle(Action::Delete);
        assert_eq!(ctrl.model().get_node(1, 0), GridNode::empty());
    }

    #[test]
    fn test_cascade_prefers_farther_control() {
        let mut model = GridModel::new(4, 1);
        model.set_node(2, 0, GridNode::trace());
        model.set_node(1, 0, GridNode::trace());
        model.set_node(
            3,
            0,
            GridNode {
                ctrl_a: Some(2),
                ctrl_b: Some(0),
                ..GridNode::new(NodeType::Z)
            },
        );
        let mut ctrl = GridController::new(model);
        ctrl.delete_controls_for_gate(3, 0);
        for wire in 0..4 {
            assert_eq!(ctrl.model().get_node(wire, 0), GridNode::empty());
        }
    }

    #[test]
    fn test_move_control_hops_over_gate() {
        let mut ctrl = controller(3, 1);
        ctrl.select(1, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);
        assert_eq!(ctrl.model().get_node(1, 0).ctrl_a, Some(0));

        ctrl.handle(Action::MoveControl(Direction::Down));
        assert_eq!(ctrl.model().get_node(1, 0).ctrl_a, Some(2));
        assert_eq!(part(&ctrl, 0, 0), NodeType::Empty);

        ctrl.handle(Action::MoveControl(Direction::Up));
        assert_eq!(ctrl.model().get_node(1, 0).ctrl_a, Some(0));
        assert_eq!(ctrl.model().validate(), Ok(()));
    }

    #[test]
    fn test_move_control_rejected_at_edge() {
        let mut ctrl = controller(2, 1);
        ctrl.select(1, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::Y));
        ctrl.handle(Action::ToggleControl);
        let before = ctrl.model().clone();

        ctrl.handle(Action::MoveControl(Direction::Up));
        ctrl.handle(Action::MoveControl(Direction::Down));
        assert_eq!(ctrl.model(), &before);
    }

    #[test]
    fn test_move_control_blocked_by_gate() {
        let mut ctrl = controller(4, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::H));
        ctrl.select(3, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);
        ctrl.handle(Action::MoveControl(Direction::Up));
        assert_eq!(ctrl.model().get_node(3, 0).ctrl_a, Some(1));
        let before = ctrl.model().clone();

        ctrl.handle(Action::MoveControl(Direction::Up));
        assert_eq!(ctrl.model(), &before);
    }

    #[test]
    fn test_move_control_back_shrinks_bridge() {
        let mut ctrl = controller(4, 1);
        ctrl.handle(Action::Move(Direction::Down));
        ctrl.handle(Action::Move(Direction::Down));
        ctrl.handle(Action::Move(Direction::Down));
        ctrl.handle(Action::PlaceOrRemove(GateKind::Z));
        ctrl.handle(Action::ToggleControl);
        ctrl.handle(Action::MoveControl(Direction::Up));
        ctrl.handle(Action::MoveControl(Direction::Up));
        assert_eq!(ctrl.model().validate(), Ok(()));

        ctrl.handle(Action::MoveControl(Direction::Down));
        assert_eq!(ctrl.model().get_node(3, 0).ctrl_a, Some(1));
        assert_eq!(part(&ctrl, 0, 0), NodeType::Empty);
        assert_eq!(part(&ctrl, 1, 0), NodeType::Control);
        assert_eq!(part(&ctrl, 2, 0), NodeType::Trace);
        assert_eq!(ctrl.model().validate(), Ok(()));
    }

    #[test]
    fn test_gate_cannot_land_on_control_or_trace() {
        let mut ctrl = controller(3, 1);
        ctrl.select(2, 0);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);
        ctrl.handle(Action::MoveControl(Direction::Up));

        for wire in [0, 1] {
            ctrl.select(wire, 0);
            ctrl.handle(Action::PlaceOrRemove(GateKind::H));
        }
        assert_eq!(part(&ctrl, 0, 0), NodeType::Control);
        assert_eq!(part(&ctrl, 1, 0), NodeType::Trace);
    }

    #[test]
    fn test_setup_level_replaces_grid() {
        let mut ctrl = controller(3, 18);
        ctrl.select(2, 5);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.setup_level(5, 18);

        assert_eq!(ctrl.cursor(), Cursor::default());
        assert_eq!(ctrl.model().max_wires(), 5);
        assert!(ctrl.model().construct_circuit().is_empty());
    }

    #[test]
    fn test_edits_reach_the_circuit() {
        let mut ctrl = controller(3, 3);
        ctrl.select(2, 1);
        ctrl.handle(Action::PlaceOrRemove(GateKind::X));
        ctrl.handle(Action::ToggleControl);

        let circuit = ctrl.model().construct_circuit();
        let ops: Vec<_> = circuit.ops().collect();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].gate, NodeType::X);
        assert_eq!(ops[0].wire, 2);
        assert_eq!(ops[0].control, Some(1));
        assert!(circuit.to_qasm().contains("cx q[1],q[2];"));
    }
}
