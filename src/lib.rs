//! flowgrid - an interactive dataflow node canvas
//!
//! Typed nodes (inputs, arithmetic operations, print sinks, list containers)
//! are placed on a 2D surface and wired socket-to-socket; values propagate
//! along connections through a dirty-tracking evaluation engine.

pub mod constants;
pub mod editor;
pub mod nodes;
pub mod theme;

// Re-export commonly used types
pub use nodes::{
    BinaryOp, Connection, GraphEngine, LiteralType, Node, NodeFactory, NodeGraph, NodeId,
    NodeKind, NodeRegistry, Socket, SocketId, SocketKind, Value,
};
