//! Subtraction node implementation

use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::BinaryOp;
use crate::nodes::{NodeCategory, NodeFactory};
use egui::{Color32, Pos2};

/// Subtraction node that takes two inputs and produces their difference
pub struct SubtractNode;

impl NodeFactory for SubtractNode {
    fn node_type() -> &'static str {
        "Subtract"
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
            NodeKind::Operation { op: BinaryOp::Sub },
        )
        .with_color(Self::color());

        node.add_input("A").add_input("B").add_output("Result");

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_subtract_node_creation() {
        let node = SubtractNode::create(Pos2::new(100.0, 100.0));
        assert_eq!(node.title, "Subtract");
        assert_eq!(node.inputs.len(), 2);
        assert_eq!(node.outputs.len(), 1);
    }
}
