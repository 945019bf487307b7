//! Print node implementation

use crate::nodes::node::{Node, NodeKind};
use crate::nodes::{NodeCategory, NodeFactory};
use egui::{Color32, Pos2};

/// Print node: a sink that mirrors the upstream value and shows it on canvas
pub struct PrintNode;

impl NodeFactory for PrintNode {
    fn node_type() -> &'static str {
        "Print"
    }

    fn category() -> NodeCategory {
        NodeCategory::Output
    }

    fn color() -> Color32 {
        Color32::from_rgb(65, 45, 45) // Dark red-grey for output nodes
    }

    fn create(position: Pos2) -> Node {
        let mut node = Node::new(0, Self::node_type(), position, NodeKind::Print)
            .with_color(Self::color());

        node.add_input("Value");

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::value::Value;
    use egui::Pos2;

    #[test]
    fn test_print_node_creation() {
        let node = PrintNode::create(Pos2::new(100.0, 100.0));
        assert_eq!(node.title, "Print");
        assert_eq!(node.inputs.len(), 1);
        assert_eq!(node.outputs.len(), 0);
        assert_eq!(node.inputs[0].name, "Value");
    }

    #[test]
    fn test_print_without_upstream_is_none() {
        let mut node = PrintNode::create(Pos2::ZERO);
        node.compute(&[None]);
        assert_eq!(node.result, Value::None);
        assert_eq!(node.result.to_string(), "None");
    }
}
