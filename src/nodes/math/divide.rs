//! Division node implementation

use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::BinaryOp;
use crate::nodes::{NodeCategory, NodeFactory};
use egui::{Color32, Pos2};

/// Division node. Division by zero produces an error sentinel, not a failure.
pub struct DivideNode;

impl NodeFactory for DivideNode {
    fn node_type() -> &'static str {
        "Divide"
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
            NodeKind::Operation { op: BinaryOp::Div },
        )
        .with_color(Self::color());

        node.add_input("A").add_input("B").add_output("Result");

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::value::{Value, DIV_BY_ZERO};
    use egui::Pos2;

    #[test]
    fn test_divide_node_creation() {
        let node = DivideNode::create(Pos2::new(100.0, 100.0));
        assert_eq!(node.title, "Divide");
        assert_eq!(node.inputs.len(), 2);
        assert_eq!(node.outputs.len(), 1);
    }

    #[test]
    fn test_divide_by_zero_yields_sentinel() {
        let mut node = DivideNode::create(Pos2::ZERO);
        node.compute(&[Some(Value::Integer(6)), Some(Value::Integer(0))]);
        assert_eq!(node.result, Value::Error(DIV_BY_ZERO.to_string()));
    }
}
