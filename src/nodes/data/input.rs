//! Input (literal constant) node implementation

use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::LiteralType;
use crate::nodes::{NodeCategory, NodeFactory};
use egui::{Color32, Pos2};

/// Input node that holds an editable literal and emits its parsed value
pub struct InputNode;

impl NodeFactory for InputNode {
    fn node_type() -> &'static str {
        "Input"
    }

    fn category() -> NodeCategory {
        NodeCategory::Data
    }

    fn color() -> Color32 {
        Color32::from_rgb(55, 45, 65) // Dark purple-grey for data nodes
    }

    fn create(position: Pos2) -> Node {
        let mut node = Node::new(
            0,
            Self::node_type(),
            position,
            NodeKind::Input {
                literal: "0".to_string(),
                literal_type: LiteralType::Int,
            },
        )
        .with_color(Self::color());

        node.add_output("Value");

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::value::Value;
    use egui::Pos2;

    #[test]
    fn test_input_node_creation() {
        let node = InputNode::create(Pos2::new(100.0, 100.0));
        assert_eq!(node.title, "Input");
        assert_eq!(node.inputs.len(), 0);
        assert_eq!(node.outputs.len(), 1);
        assert_eq!(node.outputs[0].name, "Value");
    }

    #[test]
    fn test_input_node_default_literal() {
        let mut node = InputNode::create(Pos2::ZERO);
        node.compute(&[]);
        assert_eq!(node.result, Value::Integer(0));
    }
}
