//! Node system - core data structures and node implementations

// Core node system modules
pub mod engine;
pub mod factory;
pub mod graph;
pub mod math_utils;
pub mod node;
pub mod socket;
pub mod value;

// Node implementations
pub mod data;
pub mod math;
pub mod output;

// Re-export core types
pub use engine::{GraphEngine, NodeState};
pub use factory::{NodeCategory, NodeFactory, NodeRegistry};
pub use graph::{Connection, NodeGraph};
pub use node::{Node, NodeId, NodeKind};
pub use socket::{Socket, SocketId, SocketKind};
pub use value::{BinaryOp, Complex, LiteralType, Value};
