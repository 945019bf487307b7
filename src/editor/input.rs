//! Input handling and event management

use crate::nodes::{Connection, NodeGraph, NodeId, SocketId, SocketKind};
use egui::{Modifiers, Pos2, PointerButton, Vec2};

/// Per-frame input snapshot for the node editor canvas
#[derive(Debug, Clone)]
pub struct InputState {
    // Mouse state
    pub mouse_pos: Option<Pos2>,
    pub mouse_world_pos: Option<Pos2>,
    pub click_pos: Option<Pos2>,

    // Interaction state
    pub modifiers: Modifiers,
    pub clicked_this_frame: bool,
    pub right_clicked_this_frame: bool,
    pub drag_started_this_frame: bool,
    pub drag_stopped_this_frame: bool,
    pub is_panning: bool,

    // Scroll/zoom
    pub scroll_delta: f32,

    // Connection gesture: the socket a wire is being dragged from
    connecting_from: Option<(NodeId, SocketId, SocketKind)>,

    // Context menu state
    pub context_menu_pos: Option<Pos2>,
    pub right_click_world_pos: Option<Pos2>,
}

impl InputState {
    /// Creates a new input state
    pub fn new() -> Self {
        Self {
            mouse_pos: None,
            mouse_world_pos: None,
            click_pos: None,
            modifiers: Modifiers::default(),
            clicked_this_frame: false,
            right_clicked_this_frame: false,
            drag_started_this_frame: false,
            drag_stopped_this_frame: false,
            is_panning: false,
            scroll_delta: 0.0,
            connecting_from: None,
            context_menu_pos: None,
            right_click_world_pos: None,
        }
    }

    /// Update input state from the canvas response and world-space transform
    pub fn update(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        inverse_transform: impl Fn(Pos2) -> Pos2,
    ) {
        self.mouse_pos = response.hover_pos();
        self.mouse_world_pos = self.mouse_pos.map(&inverse_transform);

        self.modifiers = ui.input(|i| i.modifiers);

        self.clicked_this_frame = response.clicked();
        self.right_clicked_this_frame = response.secondary_clicked();
        self.drag_started_this_frame = response.drag_started_by(PointerButton::Primary);
        self.drag_stopped_this_frame = response.drag_stopped();

        if self.clicked_this_frame || self.right_clicked_this_frame {
            self.click_pos = response.interact_pointer_pos().map(&inverse_transform);
        }

        if self.right_clicked_this_frame {
            self.right_click_world_pos = self.mouse_world_pos;
            self.context_menu_pos = self.mouse_pos;
        }

        if response.dragged_by(PointerButton::Middle) {
            self.is_panning = true;
        } else if !ui.input(|i| i.pointer.middle_down()) {
            self.is_panning = false;
        }

        self.scroll_delta = ui.input(|i| i.raw_scroll_delta.y);

        // Close context menu on plain click
        if self.clicked_this_frame {
            self.context_menu_pos = None;
        }
    }

    /// Get pan delta for viewport panning
    pub fn get_pan_delta(&self, response: &egui::Response) -> Option<Vec2> {
        if self.is_panning && response.dragged() {
            Some(response.drag_delta())
        } else {
            None
        }
    }

    /// Zoom delta based on scroll input
    pub fn get_zoom_delta(&self) -> f32 {
        self.scroll_delta * crate::constants::canvas::ZOOM_SPEED
    }

    // === CONNECTION GESTURE ===

    /// Start dragging a wire from a socket
    pub fn start_connection(&mut self, node_id: NodeId, socket_id: SocketId, kind: SocketKind) {
        self.connecting_from = Some((node_id, socket_id, kind));
    }

    /// Complete the drag on a target socket, normalizing to output -> input.
    /// Returns `None` when the target has the same direction as the origin.
    pub fn complete_connection(
        &mut self,
        to_node: NodeId,
        to_socket: SocketId,
        to_kind: SocketKind,
    ) -> Option<Connection> {
        let (from_node, from_socket, from_kind) = self.connecting_from?;
        if to_kind != from_kind.opposite() {
            self.cancel_connection();
            return None;
        }
        let connection = match from_kind {
            SocketKind::Output => Connection::new(from_node, from_socket, to_node, to_socket),
            SocketKind::Input => Connection::new(to_node, to_socket, from_node, from_socket),
        };
        self.cancel_connection();
        Some(connection)
    }

    /// Abort the gesture without creating an edge
    pub fn cancel_connection(&mut self) {
        self.connecting_from = None;
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting_from.is_some()
    }

    pub fn connecting_from(&self) -> Option<(NodeId, SocketId, SocketKind)> {
        self.connecting_from
    }

    // === HIT TESTING ===

    /// Find the socket under the mouse, if any
    pub fn find_socket_at(
        &self,
        graph: &NodeGraph,
        radius: f32,
    ) -> Option<(NodeId, SocketId, SocketKind)> {
        let pos = self.mouse_world_pos?;
        for (node_id, node) in &graph.nodes {
            for socket in &node.outputs {
                if (socket.position - pos).length() < radius {
                    return Some((*node_id, socket.id, SocketKind::Output));
                }
            }
            for socket in &node.inputs {
                if (socket.position - pos).length() < radius {
                    return Some((*node_id, socket.id, SocketKind::Input));
                }
            }
        }
        None
    }

    /// Find the node whose body contains the mouse position
    pub fn find_node_under_mouse(&self, graph: &NodeGraph) -> Option<NodeId> {
        let pos = self.mouse_world_pos?;
        graph
            .nodes
            .iter()
            .find(|(_, node)| node.get_rect().contains(pos))
            .map(|(id, _)| *id)
    }

    // === CONTEXT MENU ===

    pub fn should_show_context_menu(&self) -> bool {
        self.context_menu_pos.is_some()
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu_pos = None;
        self.right_click_world_pos = None;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_connection_normalizes_direction() {
        let mut input = InputState::new();

        // Dragging from an input socket: the target output becomes the source.
        input.start_connection(5, 1, SocketKind::Input);
        let conn = input.complete_connection(2, 0, SocketKind::Output).unwrap();
        assert_eq!(conn.from_node, 2);
        assert_eq!(conn.from_socket, 0);
        assert_eq!(conn.to_node, 5);
        assert_eq!(conn.to_socket, 1);
        assert!(!input.is_connecting());
    }

    #[test]
    fn test_same_direction_release_aborts() {
        let mut input = InputState::new();
        input.start_connection(1, 0, SocketKind::Output);
        assert!(input.complete_connection(2, 0, SocketKind::Output).is_none());
        assert!(!input.is_connecting());
    }
}
