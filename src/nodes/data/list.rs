//! List container node implementation

use crate::nodes::node::{Node, NodeKind};
use crate::nodes::{NodeCategory, NodeFactory};
use egui::{Color32, Pos2};

/// List node that holds an ordered sequence of string items
pub struct ListNode;

impl NodeFactory for ListNode {
    fn node_type() -> &'static str {
        "List"
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
            NodeKind::List { items: Vec::new() },
        )
        .with_color(Self::color());

        node.add_output("Items");

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::value::Value;
    use egui::Pos2;

    #[test]
    fn test_list_node_creation() {
        let node = ListNode::create(Pos2::new(100.0, 100.0));
        assert_eq!(node.title, "List");
        assert_eq!(node.inputs.len(), 0);
        assert_eq!(node.outputs.len(), 1);
        assert_eq!(node.outputs[0].name, "Items");
    }

    #[test]
    fn test_list_node_emits_items() {
        let mut node = ListNode::create(Pos2::ZERO);
        if let NodeKind::List { items } = &mut node.kind {
            items.push("first".to_string());
            items.push("second".to_string());
        }
        node.compute(&[]);
        assert_eq!(
            node.result,
            Value::List(vec!["first".to_string(), "second".to_string()])
        );
    }
}
