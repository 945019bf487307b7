//! Node factory trait and registry

use super::data::{InputNode, ListNode};
use super::math::{AddNode, DivideNode, MultiplyNode, SubtractNode};
use super::node::Node;
use super::output::PrintNode;
use egui::{Color32, Pos2};

/// Trait for creating standardized nodes
pub trait NodeFactory {
    /// Get the node type name
    fn node_type() -> &'static str
    where
        Self: Sized;

    /// Get the category for menu organization
    fn category() -> NodeCategory
    where
        Self: Sized;

    /// Get the node color
    fn color() -> Color32
    where
        Self: Sized;

    /// Create a new instance of this node at the given position
    fn create(position: Pos2) -> Node
    where
        Self: Sized;
}

/// Categories for organizing nodes in the creation menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Data,
    Math,
    Output,
}

impl NodeCategory {
    pub fn name(&self) -> &'static str {
        match self {
            NodeCategory::Data => "Data",
            NodeCategory::Math => "Math",
            NodeCategory::Output => "Output",
        }
    }
}

/// Registry of all available node types
pub struct NodeRegistry;

impl NodeRegistry {
    /// All creatable node types with their menu categories,
    /// taken straight from the factories.
    pub fn types() -> [(&'static str, NodeCategory); 7] {
        [
            (InputNode::node_type(), InputNode::category()),
            (ListNode::node_type(), ListNode::category()),
            (AddNode::node_type(), AddNode::category()),
            (SubtractNode::node_type(), SubtractNode::category()),
            (MultiplyNode::node_type(), MultiplyNode::category()),
            (DivideNode::node_type(), DivideNode::category()),
            (PrintNode::node_type(), PrintNode::category()),
        ]
    }

    /// Create a node by type name
    pub fn create_node(node_type: &str, position: Pos2) -> Option<Node> {
        if node_type == InputNode::node_type() {
            Some(InputNode::create(position))
        } else if node_type == ListNode::node_type() {
            Some(ListNode::create(position))
        } else if node_type == AddNode::node_type() {
            Some(AddNode::create(position))
        } else if node_type == SubtractNode::node_type() {
            Some(SubtractNode::create(position))
        } else if node_type == MultiplyNode::node_type() {
            Some(MultiplyNode::create(position))
        } else if node_type == DivideNode::node_type() {
            Some(DivideNode::create(position))
        } else if node_type == PrintNode::node_type() {
            Some(PrintNode::create(position))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creates_every_listed_type() {
        for (node_type, _) in NodeRegistry::types() {
            let node = NodeRegistry::create_node(node_type, Pos2::new(10.0, 20.0));
            assert!(node.is_some(), "registry missing type {}", node_type);
        }
    }

    #[test]
    fn test_registry_listing_matches_factories() {
        let types = NodeRegistry::types();
        assert!(types.contains(&(AddNode::node_type(), NodeCategory::Math)));
        assert!(types.contains(&(PrintNode::node_type(), NodeCategory::Output)));
        let created = NodeRegistry::create_node(InputNode::node_type(), Pos2::ZERO)
            .expect("input registered");
        assert_eq!(created.title, InputNode::node_type());
        assert_eq!(created.color, InputNode::color());
    }

    #[test]
    fn test_registry_rejects_unknown_type() {
        assert!(NodeRegistry::create_node("Teapot", Pos2::ZERO).is_none());
    }
}
