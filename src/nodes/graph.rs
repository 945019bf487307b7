//! Node graph data structures and operations

use super::node::{Node, NodeId};
use super::socket::{SocketId, SocketKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A connection between one output socket and one input socket,
/// always stored output-to-input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_socket: SocketId,
    pub to_node: NodeId,
    pub to_socket: SocketId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(
        from_node: NodeId,
        from_socket: SocketId,
        to_node: NodeId,
        to_socket: SocketId,
    ) -> Self {
        Self {
            from_node,
            from_socket,
            to_node,
            to_socket,
        }
    }
}

/// A graph containing nodes and their connections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeGraph {
    pub nodes: HashMap<NodeId, Node>,
    pub connections: Vec<Connection>,
    next_node_id: NodeId,
}

impl NodeGraph {
    /// Creates a new empty node graph
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            connections: Vec::new(),
            next_node_id: 0,
        }
    }

    /// Adds a node to the graph and returns its ID
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = self.next_node_id;
        node.id = id;
        node.update_socket_positions();
        self.nodes.insert(id, node);
        self.next_node_id += 1;
        id
    }

    /// Removes a node and all its connections
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.connections
            .retain(|conn| conn.from_node != node_id && conn.to_node != node_id);
        self.nodes.remove(&node_id)
    }

    /// Adds a connection between an output and an input socket.
    /// Both sockets must currently be free: one connection per socket,
    /// no fan-in and no fan-out.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), &'static str> {
        if connection.from_node == connection.to_node {
            return Err("Cannot connect a node to itself");
        }

        let from = self
            .nodes
            .get(&connection.from_node)
            .ok_or("Source node does not exist")?;
        let to = self
            .nodes
            .get(&connection.to_node)
            .ok_or("Target node does not exist")?;

        if connection.from_socket >= from.outputs.len() {
            return Err("Source socket does not exist");
        }
        if connection.to_socket >= to.inputs.len() {
            return Err("Target socket does not exist");
        }

        if self
            .socket_connection(connection.from_node, connection.from_socket, SocketKind::Output)
            .is_some()
        {
            return Err("Source socket is already connected");
        }
        if self
            .socket_connection(connection.to_node, connection.to_socket, SocketKind::Input)
            .is_some()
        {
            return Err("Target socket is already connected");
        }

        self.connections.push(connection);
        Ok(())
    }

    /// Removes a connection by index
    pub fn remove_connection(&mut self, index: usize) -> Option<Connection> {
        if index < self.connections.len() {
            Some(self.connections.remove(index))
        } else {
            None
        }
    }

    /// Index of the connection touching the given socket, if any.
    pub fn socket_connection(
        &self,
        node_id: NodeId,
        socket_id: SocketId,
        kind: SocketKind,
    ) -> Option<usize> {
        self.connections.iter().position(|conn| match kind {
            SocketKind::Output => conn.from_node == node_id && conn.from_socket == socket_id,
            SocketKind::Input => conn.to_node == node_id && conn.to_socket == socket_id,
        })
    }

    /// Whether a socket has no connection.
    pub fn is_socket_free(&self, node_id: NodeId, socket_id: SocketId, kind: SocketKind) -> bool {
        self.socket_connection(node_id, socket_id, kind).is_none()
    }

    /// Removes the connection touching the given socket, clearing both sides.
    pub fn disconnect_socket(
        &mut self,
        node_id: NodeId,
        socket_id: SocketId,
        kind: SocketKind,
    ) -> Option<Connection> {
        let index = self.socket_connection(node_id, socket_id, kind)?;
        Some(self.connections.remove(index))
    }

    /// The upstream source feeding an input socket, if connected.
    pub fn input_source(&self, node_id: NodeId, socket_id: SocketId) -> Option<(NodeId, SocketId)> {
        self.connections
            .iter()
            .find(|conn| conn.to_node == node_id && conn.to_socket == socket_id)
            .map(|conn| (conn.from_node, conn.from_socket))
    }

    /// Nodes directly downstream of the given node.
    pub fn downstream_of(&self, node_id: NodeId) -> Vec<NodeId> {
        self.connections
            .iter()
            .filter(|conn| conn.from_node == node_id)
            .map(|conn| conn.to_node)
            .collect()
    }

    /// Updates socket positions for all nodes
    pub fn update_all_socket_positions(&mut self) {
        for node in self.nodes.values_mut() {
            node.update_socket_positions();
        }
    }
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::value::BinaryOp;
    use crate::nodes::NodeKind;
    use egui::Pos2;

    fn input_node() -> Node {
        let mut node = Node::new(
            0,
            "Input",
            Pos2::ZERO,
            NodeKind::Input {
                literal: "1".into(),
                literal_type: crate::nodes::LiteralType::Int,
            },
        );
        node.add_output("Value");
        node
    }

    fn add_node() -> Node {
        let mut node = Node::new(0, "Add", Pos2::ZERO, NodeKind::Operation { op: BinaryOp::Add });
        node.add_input("A").add_input("B").add_output("Result");
        node
    }

    #[test]
    fn test_connect_and_query() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(input_node());
        let op = graph.add_node(add_node());

        graph
            .add_connection(Connection::new(a, 0, op, 0))
            .expect("valid connection");

        assert_eq!(graph.input_source(op, 0), Some((a, 0)));
        assert!(!graph.is_socket_free(a, 0, SocketKind::Output));
        assert!(!graph.is_socket_free(op, 0, SocketKind::Input));
        assert!(graph.is_socket_free(op, 1, SocketKind::Input));
        assert_eq!(graph.downstream_of(a), vec![op]);
    }

    #[test]
    fn test_rejects_self_connection() {
        let mut graph = NodeGraph::new();
        let op = graph.add_node(add_node());
        assert!(graph.add_connection(Connection::new(op, 0, op, 0)).is_err());
    }

    #[test]
    fn test_rejects_occupied_sockets() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(input_node());
        let b = graph.add_node(input_node());
        let op = graph.add_node(add_node());

        graph.add_connection(Connection::new(a, 0, op, 0)).unwrap();
        // Input socket already taken.
        assert!(graph.add_connection(Connection::new(b, 0, op, 0)).is_err());
        // Output socket already taken (no fan-out).
        assert!(graph.add_connection(Connection::new(a, 0, op, 1)).is_err());
        // A different free pair still works.
        assert!(graph.add_connection(Connection::new(b, 0, op, 1)).is_ok());
    }

    #[test]
    fn test_rejects_missing_endpoints() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(input_node());
        let op = graph.add_node(add_node());
        assert!(graph.add_connection(Connection::new(99, 0, op, 0)).is_err());
        assert!(graph.add_connection(Connection::new(a, 5, op, 0)).is_err());
        assert!(graph.add_connection(Connection::new(a, 0, op, 9)).is_err());
    }

    #[test]
    fn test_disconnect_clears_both_sides() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(input_node());
        let op = graph.add_node(add_node());
        graph.add_connection(Connection::new(a, 0, op, 0)).unwrap();

        let removed = graph.disconnect_socket(op, 0, SocketKind::Input);
        assert!(removed.is_some());
        assert!(graph.is_socket_free(a, 0, SocketKind::Output));
        assert!(graph.is_socket_free(op, 0, SocketKind::Input));
        assert!(graph.connections.is_empty());
    }

    #[test]
    fn test_remove_node_drops_connections() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(input_node());
        let op = graph.add_node(add_node());
        graph.add_connection(Connection::new(a, 0, op, 0)).unwrap();

        graph.remove_node(a);
        assert!(graph.connections.is_empty());
        assert!(graph.nodes.get(&a).is_none());
    }
}
