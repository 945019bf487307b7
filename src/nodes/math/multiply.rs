//! Multiplication node implementation

use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::BinaryOp;
use crate::nodes::{NodeCategory, NodeFactory};
use egui::{Color32, Pos2};

/// Multiplication node that takes two inputs and produces their product
pub struct MultiplyNode;

impl NodeFactory for MultiplyNode {
    fn node_type() -> &'static str {
        "Multiply"
    }

    fn category() -> NodeCategory {
        NodeCategory::Math
    }

    fn color() -> Color32 {
        Color32::from_rgb(45, 55, 65)
    }

    fn create(position: Pos2) -> Node {
        let mut node = Node::new(
            0,
            Self::node_type(),
            position,
            NodeKind::Operation { op: BinaryOp::Mul },
        )
        .with_color(Self::color());

        node.add_input("A").add_input("B").add_output("Result");

        node
    }
}
