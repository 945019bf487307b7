//! Node types and core node functionality

use super::socket::{Socket, SocketKind};
use super::value::{BinaryOp, LiteralType, Value};
use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Unique identifier for a node
pub type NodeId = usize;

/// Per-subtype state of a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeKind {
    /// Holds a literal; no inputs.
    Input {
        literal: String,
        literal_type: LiteralType,
    },
    /// Binary arithmetic over two inputs.
    Operation { op: BinaryOp },
    /// Sink; mirrors the upstream value.
    Print,
    /// Ordered sequence of opaque string items; no inputs.
    List { items: Vec<String> },
}

/// A node in the dataflow graph: identity, typed sockets, and a computed result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    #[serde(with = "pos2_serde")]
    pub position: Pos2,
    #[serde(with = "vec2_serde")]
    pub size: Vec2,
    pub inputs: Vec<Socket>,
    pub outputs: Vec<Socket>,
    #[serde(with = "color32_serde")]
    pub color: Color32,
    pub kind: NodeKind,
    pub result: Value,
}

impl Node {
    /// Creates a new node with the specified properties
    pub fn new(id: NodeId, title: impl Into<String>, position: Pos2, kind: NodeKind) -> Self {
        Self {
            id,
            title: title.into(),
            position,
            size: Vec2::new(150.0, 60.0),
            inputs: vec![],
            outputs: vec![],
            color: Color32::from_rgb(60, 60, 60),
            kind,
            result: Value::None,
        }
    }

    /// Adds an input socket to the node
    pub fn add_input(&mut self, name: impl Into<String>) -> &mut Self {
        let socket_id = self.inputs.len();
        self.inputs.push(Socket::new(socket_id, name, SocketKind::Input));
        self
    }

    /// Adds an output socket to the node
    pub fn add_output(&mut self, name: impl Into<String>) -> &mut Self {
        let socket_id = self.outputs.len();
        self.outputs.push(Socket::new(socket_id, name, SocketKind::Output));
        self
    }

    /// Updates the positions of all sockets based on the node's position and size.
    /// Inputs sit on top of the node, outputs on the bottom (vertical flow).
    pub fn update_socket_positions(&mut self) {
        let spacing = 30.0;

        let input_start_x = if self.inputs.len() > 1 {
            (self.size.x - (self.inputs.len() - 1) as f32 * spacing) / 2.0
        } else {
            self.size.x / 2.0
        };
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.position = self.position + Vec2::new(input_start_x + i as f32 * spacing, 0.0);
        }

        let output_start_x = if self.outputs.len() > 1 {
            (self.size.x - (self.outputs.len() - 1) as f32 * spacing) / 2.0
        } else {
            self.size.x / 2.0
        };
        for (i, output) in self.outputs.iter_mut().enumerate() {
            output.position =
                self.position + Vec2::new(output_start_x + i as f32 * spacing, self.size.y);
        }
    }

    /// Returns the bounding rectangle of the node
    pub fn get_rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    /// Sets the color of the node
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Sets the size of the node
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Recomputes `self.result` from the current upstream values, one entry per
    /// input socket (`None` where unconnected). Idempotent; no other side effects.
    pub fn compute(&mut self, inputs: &[Option<Value>]) {
        self.result = match &self.kind {
            NodeKind::Input {
                literal,
                literal_type,
            } => Value::parse_literal(literal, *literal_type),
            NodeKind::Operation { op } => {
                let values: Vec<&Value> = inputs
                    .iter()
                    .flatten()
                    .filter(|v| !v.is_none())
                    .collect();
                if values.len() == 2 {
                    Value::apply(*op, values[0], values[1])
                } else {
                    Value::None
                }
            }
            NodeKind::Print => inputs
                .iter()
                .flatten()
                .next()
                .cloned()
                .unwrap_or(Value::None),
            NodeKind::List { items } => Value::List(items.clone()),
        };
    }

    /// Short second-line text shown on the node body.
    pub fn subtitle(&self) -> String {
        match &self.kind {
            NodeKind::Input {
                literal,
                literal_type,
            } => format!("{} {}", literal_type.label(), literal),
            NodeKind::Operation { op } => op.label().to_string(),
            NodeKind::Print => format!("Print: {}", self.result),
            NodeKind::List { items } => format!("{} items", items.len()),
        }
    }
}

// Serde helper modules for egui types
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

mod vec2_serde {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(vec: &Vec2, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [vec.x, vec.y].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec2, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[f32; 2]>::deserialize(deserializer)?;
        Ok(Vec2::new(x, y))
    }
}

mod color32_serde {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [color.r(), color.g(), color.b(), color.a()].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [r, g, b, a] = <[u8; 4]>::deserialize(deserializer)?;
        Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation_node(op: BinaryOp) -> Node {
        let mut node = Node::new(0, "Op", Pos2::ZERO, NodeKind::Operation { op });
        node.add_input("A").add_input("B").add_output("Result");
        node
    }

    #[test]
    fn test_operation_requires_two_inputs() {
        let mut node = operation_node(BinaryOp::Add);
        node.compute(&[Some(Value::Integer(1)), None]);
        assert_eq!(node.result, Value::None);

        node.compute(&[Some(Value::Integer(1)), Some(Value::None)]);
        assert_eq!(node.result, Value::None);

        node.compute(&[Some(Value::Integer(1)), Some(Value::Integer(2))]);
        assert_eq!(node.result, Value::Integer(3));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut node = operation_node(BinaryOp::Mul);
        let inputs = [Some(Value::Integer(4)), Some(Value::Integer(5))];
        node.compute(&inputs);
        let first = node.result.clone();
        node.compute(&inputs);
        assert_eq!(node.result, first);
    }

    #[test]
    fn test_input_node_parses_literal() {
        let mut node = Node::new(
            0,
            "Input",
            Pos2::ZERO,
            NodeKind::Input {
                literal: "12".into(),
                literal_type: LiteralType::Int,
            },
        );
        node.add_output("Value");
        node.compute(&[]);
        assert_eq!(node.result, Value::Integer(12));
    }

    #[test]
    fn test_print_mirrors_upstream() {
        let mut node = Node::new(0, "Print", Pos2::ZERO, NodeKind::Print);
        node.add_input("Value");
        node.compute(&[Some(Value::Str("hi".into()))]);
        assert_eq!(node.result, Value::Str("hi".into()));

        node.compute(&[None]);
        assert_eq!(node.result, Value::None);
    }

    #[test]
    fn test_list_node_wraps_items() {
        let mut node = Node::new(
            0,
            "List",
            Pos2::ZERO,
            NodeKind::List {
                items: vec!["a".into(), "b".into()],
            },
        );
        node.add_output("Items");
        node.compute(&[]);
        assert_eq!(node.result, Value::List(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_socket_positions_follow_node() {
        let mut node = operation_node(BinaryOp::Add);
        node.position = Pos2::new(100.0, 50.0);
        node.update_socket_positions();
        // Inputs on top edge, output on bottom edge.
        for input in &node.inputs {
            assert_eq!(input.position.y, 50.0);
        }
        assert_eq!(node.outputs[0].position.y, 50.0 + node.size.y);
    }
}
