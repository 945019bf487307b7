//! Node interaction handling (selection and dragging)

use crate::nodes::{NodeGraph, NodeId};
use egui::{Pos2, Vec2};
use std::collections::{HashMap, HashSet};

/// Manages node selections and drag state
#[derive(Debug, Clone, Default)]
pub struct InteractionManager {
    pub selected_nodes: HashSet<NodeId>,
    drag_offsets: HashMap<NodeId, Vec2>,
}

impl InteractionManager {
    /// Creates a new interaction manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a single node, optionally keeping existing selection
    pub fn select_node(&mut self, node_id: NodeId, multi_select: bool) {
        if multi_select {
            if !self.selected_nodes.insert(node_id) {
                self.selected_nodes.remove(&node_id);
            }
        } else {
            self.selected_nodes.clear();
            self.selected_nodes.insert(node_id);
        }
    }

    /// Clear all selections
    pub fn clear_selection(&mut self) {
        self.selected_nodes.clear();
    }

    pub fn is_selected(&self, node_id: NodeId) -> bool {
        self.selected_nodes.contains(&node_id)
    }

    /// The single selected node, if exactly one is selected.
    pub fn single_selection(&self) -> Option<NodeId> {
        if self.selected_nodes.len() == 1 {
            self.selected_nodes.iter().next().copied()
        } else {
            None
        }
    }

    /// Start dragging selected nodes
    pub fn start_drag(&mut self, drag_start: Pos2, graph: &NodeGraph) {
        self.drag_offsets.clear();
        for &node_id in &self.selected_nodes {
            if let Some(node) = graph.nodes.get(&node_id) {
                self.drag_offsets.insert(node_id, node.position - drag_start);
            }
        }
    }

    /// Update node positions during drag
    pub fn update_drag(&mut self, current_pos: Pos2, graph: &mut NodeGraph) {
        for (&node_id, &offset) in &self.drag_offsets {
            if let Some(node) = graph.nodes.get_mut(&node_id) {
                node.position = current_pos + offset;
                node.update_socket_positions();
            }
        }
    }

    /// End dragging
    pub fn end_drag(&mut self) {
        self.drag_offsets.clear();
    }

    pub fn is_dragging(&self) -> bool {
        !self.drag_offsets.is_empty()
    }

    /// Delete selected nodes, returning the removed ids
    pub fn delete_selected(&mut self, graph: &mut NodeGraph) -> Vec<NodeId> {
        let removed: Vec<NodeId> = self.selected_nodes.drain().collect();
        for node_id in &removed {
            graph.remove_node(*node_id);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{NodeFactory, NodeKind};
    use crate::nodes::data::InputNode;

    #[test]
    fn test_drag_moves_selected_node_and_sockets() {
        let mut graph = NodeGraph::new();
        let id = graph.add_node(InputNode::create(Pos2::new(10.0, 10.0)));

        let mut interaction = InteractionManager::new();
        interaction.select_node(id, false);
        interaction.start_drag(Pos2::new(15.0, 15.0), &graph);
        interaction.update_drag(Pos2::new(45.0, 35.0), &mut graph);
        interaction.end_drag();

        let node = &graph.nodes[&id];
        assert_eq!(node.position, Pos2::new(40.0, 30.0));
        // Output socket follows the body (it sits on the bottom edge).
        assert!(matches!(node.kind, NodeKind::Input { .. }));
        assert_eq!(node.outputs[0].position.y, node.position.y + node.size.y);
    }

    #[test]
    fn test_multi_select_toggles() {
        let mut interaction = InteractionManager::new();
        interaction.select_node(1, false);
        interaction.select_node(2, true);
        assert_eq!(interaction.selected_nodes.len(), 2);
        assert!(interaction.single_selection().is_none());

        interaction.select_node(2, true);
        assert_eq!(interaction.single_selection(), Some(1));
    }
}
