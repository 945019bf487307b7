//! Socket types and functionality for node connections

use egui::Pos2;
use serde::{Deserialize, Serialize};

/// Index of a socket within its node's input or output list.
pub type SocketId = usize;

/// Direction of a socket (input or output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocketKind {
    Input,
    Output,
}

impl SocketKind {
    pub fn opposite(&self) -> SocketKind {
        match self {
            SocketKind::Input => SocketKind::Output,
            SocketKind::Output => SocketKind::Input,
        }
    }
}

/// A connection point on a node. A socket accepts at most one connection;
/// connectivity itself is stored in the graph's connection list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Socket {
    pub id: SocketId,
    pub name: String,
    pub kind: SocketKind,
    #[serde(with = "pos2_serde")]
    pub position: Pos2,
}

impl Socket {
    /// Creates a new socket
    pub fn new(id: SocketId, name: impl Into<String>, kind: SocketKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            position: Pos2::ZERO,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self.kind, SocketKind::Input)
    }

    pub fn is_output(&self) -> bool {
        matches!(self.kind, SocketKind::Output)
    }
}

// Serde helper module for Pos2
mod pos2_serde {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(pos: &Pos2, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [pos.x, pos.y].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pos2, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[f32; 2]>::deserialize(deserializer)?;
        Ok(Pos2::new(x, y))
    }
}
