//! Dataflow propagation engine
//!
//! Tracks per-node dirty state, propagates dirtiness downstream, and
//! re-evaluates dirty nodes in topological order. Cycles are reported as an
//! error instead of recursing forever.

use super::graph::NodeGraph;
use super::node::{NodeId, NodeKind};
use super::value::Value;
use log::{debug, info};
use std::collections::{HashMap, HashSet, VecDeque};

/// Represents the evaluation state of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Clean,
    Dirty,
    Error,
}

/// Evaluation engine for node graphs
pub struct GraphEngine {
    node_states: HashMap<NodeId, NodeState>,
    dirty_nodes: HashSet<NodeId>,
    /// Evaluation order cache, invalidated when the graph changes.
    execution_order_cache: Option<Vec<NodeId>>,
}

impl GraphEngine {
    /// Create a new evaluation engine
    pub fn new() -> Self {
        Self {
            node_states: HashMap::new(),
            dirty_nodes: HashSet::new(),
            execution_order_cache: None,
        }
    }

    /// Current state of a node.
    pub fn node_state(&self, node_id: NodeId) -> NodeState {
        self.node_states
            .get(&node_id)
            .copied()
            .unwrap_or(NodeState::Dirty)
    }

    /// Invalidate the cached evaluation order after a topology change.
    pub fn invalidate_order(&mut self) {
        self.execution_order_cache = None;
    }

    /// Mark a node as dirty and propagate downstream. The already-dirty check
    /// doubles as the visited set, so cyclic graphs terminate.
    pub fn mark_dirty(&mut self, node_id: NodeId, graph: &NodeGraph) {
        if self.node_states.get(&node_id) == Some(&NodeState::Dirty) {
            return;
        }
        debug!("marking node {} dirty", node_id);
        self.node_states.insert(node_id, NodeState::Dirty);
        self.dirty_nodes.insert(node_id);
        self.execution_order_cache = None;

        for downstream_id in graph.downstream_of(node_id) {
            self.mark_dirty(downstream_id, graph);
        }
    }

    /// Compute the evaluation order via Kahn's topological sort.
    pub fn execution_order(&mut self, graph: &NodeGraph) -> Result<Vec<NodeId>, String> {
        if let Some(ref order) = self.execution_order_cache {
            return Ok(order.clone());
        }

        let mut in_degree: HashMap<NodeId, usize> = HashMap::new();
        let mut adj_list: HashMap<NodeId, Vec<NodeId>> = HashMap::new();

        for node_id in graph.nodes.keys() {
            in_degree.insert(*node_id, 0);
            adj_list.insert(*node_id, Vec::new());
        }

        for connection in &graph.connections {
            if let Some(neighbors) = adj_list.get_mut(&connection.from_node) {
                neighbors.push(connection.to_node);
            }
            if let Some(degree) = in_degree.get_mut(&connection.to_node) {
                *degree += 1;
            }
        }

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let mut result = Vec::new();

        for (&node_id, &degree) in &in_degree {
            if degree == 0 {
                queue.push_back(node_id);
            }
        }

        while let Some(node_id) = queue.pop_front() {
            result.push(node_id);
            if let Some(neighbors) = adj_list.get(&node_id) {
                for &neighbor in neighbors {
                    if let Some(degree) = in_degree.get_mut(&neighbor) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
        }

        if result.len() != graph.nodes.len() {
            return Err("Cycle detected in node graph".to_string());
        }

        self.execution_order_cache = Some(result.clone());
        Ok(result)
    }

    /// Re-evaluate all dirty nodes in dependency order. Nodes the engine has
    /// never seen are picked up and marked dirty first.
    pub fn evaluate_dirty(&mut self, graph: &mut NodeGraph) -> Result<(), String> {
        let unseen: Vec<NodeId> = graph
            .nodes
            .keys()
            .filter(|id| !self.node_states.contains_key(id))
            .copied()
            .collect();
        for node_id in unseen {
            self.mark_dirty(node_id, graph);
        }

        if self.dirty_nodes.is_empty() {
            return Ok(());
        }

        let order = self.execution_order(graph)?;
        for node_id in order {
            if !self.dirty_nodes.contains(&node_id) {
                continue;
            }
            self.evaluate_single(node_id, graph);
        }

        self.dirty_nodes.clear();
        Ok(())
    }

    fn evaluate_single(&mut self, node_id: NodeId, graph: &mut NodeGraph) {
        let input_count = match graph.nodes.get(&node_id) {
            Some(node) => node.inputs.len(),
            None => return,
        };

        // Upstream results are current: topological order visits sources first.
        let mut inputs: Vec<Option<Value>> = Vec::with_capacity(input_count);
        for socket_id in 0..input_count {
            let value = graph
                .input_source(node_id, socket_id)
                .and_then(|(src_node, _)| graph.nodes.get(&src_node))
                .map(|src| src.result.clone());
            inputs.push(value);
        }

        if let Some(node) = graph.nodes.get_mut(&node_id) {
            node.compute(&inputs);
            let state = if matches!(node.result, Value::Error(_)) {
                NodeState::Error
            } else {
                NodeState::Clean
            };
            if matches!(node.kind, NodeKind::Print) {
                info!("{}: {}", node.title, node.result);
            }
            self.node_states.insert(node_id, state);
        }
    }
}

impl Default for GraphEngine {
    fn default() -> Self {
        Self::new()
    }
}
