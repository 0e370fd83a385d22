// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph data structures for hand-drawn undirected graphs

use crate::error::{Error, Result};
use crate::step::AlgorithmStep;
use crate::types::{Edge, EdgeColor, EdgeId, Node, NodeColor, NodeId, Position};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// An undirected, weighted graph built node by node
///
/// Nodes and canonical edges iterate in insertion order. Each connection is
/// stored once in `edges` and twice in `adjacency` (forward on the start
/// node, reversed on the end node).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Next id handed out by `add_node`
    next_id: usize,
    /// All nodes, indexed by id
    nodes: Vec<Node>,
    /// One canonical edge per connection
    edges: Vec<Edge>,
    /// Outgoing edges per node, including synthesized reverse edges
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at `position` and return its id
    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(Node { id, position });
        self.adjacency.insert(id, Vec::new());
        tracing::trace!("Added node {} at ({}, {})", id, position.x, position.y);
        id
    }

    /// Connect two nodes
    ///
    /// Returns `Ok(None)` when the nodes are already connected in either
    /// direction; the graph is left untouched in that case. Fails with
    /// [`Error::WeightTooLarge`] past [`MAX_WEIGHT`](crate::types::MAX_WEIGHT).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<Option<EdgeId>> {
        if a == b {
            return Err(Error::SelfLoop(a));
        }
        let start = self.node(a).ok_or(Error::UnknownNode(a))?;
        let end = self.node(b).ok_or(Error::UnknownNode(b))?;

        // Check if edge already exists
        if self.adjacent_edges(a).iter().any(|e| e.touches(b)) {
            return Ok(None); // Idempotent
        }

        let id = EdgeId(self.edges.len());
        let edge = Edge::between(id, start, end)?;
        let reverse = edge.reversed();
        tracing::trace!("Added edge {} {} with weight {}", id, edge, edge.weight);

        self.edges.push(edge.clone());
        self.adjacency.entry(a).or_default().push(edge);
        self.adjacency.entry(b).or_default().push(reverse);

        Ok(Some(id))
    }

    /// Move a node without touching the weights of its existing edges
    pub fn move_node(&mut self, id: NodeId, position: Position) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(Error::UnknownNode(id))?;
        node.position = position;
        Ok(())
    }

    /// Remove everything and restart ids at 0
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.next_id = 0;
    }

    /// Edges usable to leave `node`, in insertion order
    #[must_use]
    pub fn adjacent_edges(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get a node by id
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a canonical edge by id
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Whether `id` names a node of this graph
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// First node whose center lies within `radius` of `position`
    #[must_use]
    pub fn node_at(&self, position: Position, radius: f64) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.position.distance_to(&position) <= radius)
            .map(|n| n.id)
    }

    /// Get all nodes
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get all canonical edges
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Petgraph copy of this graph, node weights are our ids
    #[must_use]
    pub fn to_petgraph(&self) -> UnGraph<NodeId, u64> {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        for node in &self.nodes {
            graph.add_node(node.id);
        }
        for edge in &self.edges {
            graph.add_edge(
                NodeIndex::new(edge.start.index()),
                NodeIndex::new(edge.end.index()),
                edge.weight,
            );
        }
        graph
    }

    /// Number of connected components (isolated nodes count as one each)
    #[must_use]
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.to_petgraph())
    }

    /// Whether every node can reach every other node
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }

    /// Export to DOT format for Graphviz, optionally colored by a step
    #[must_use]
    pub fn to_dot(&self, step: Option<&AlgorithmStep>) -> String {
        let mut dot = String::from("graph trace {\n");
        dot.push_str("  layout=neato;\n");
        dot.push_str("  node [shape=circle, style=filled];\n\n");

        for node in &self.nodes {
            let color = step
                .and_then(|s| s.node_color(node.id))
                .map_or("white", node_fill);
            let label = match step.and_then(|s| s.distance(node.id)) {
                Some(d) => format!("{}\\n{}", node.id, d),
                None => node.id.to_string(),
            };
            let _ = writeln!(
                dot,
                "  n{} [label=\"{}\", pos=\"{},{}!\", fillcolor={}];",
                node.id,
                label,
                node.position.x,
                -node.position.y,
                color
            );
        }

        dot.push('\n');

        for edge in &self.edges {
            let color = step
                .and_then(|s| s.edge_color(edge.id))
                .map_or("black", edge_stroke);
            let _ = writeln!(
                dot,
                "  n{} -- n{} [label=\"{}\", color={}];",
                edge.start, edge.end, edge.weight, color
            );
        }

        dot.push_str("}\n");
        dot
    }
}

fn node_fill(color: NodeColor) -> &'static str {
    match color {
        NodeColor::Unvisited => "white",
        NodeColor::Visited => "lightgreen",
        NodeColor::Processing => "orange",
    }
}

fn edge_stroke(color: EdgeColor) -> &'static str {
    match color {
        EdgeColor::Processing => "orange",
        EdgeColor::Mst => "green",
        EdgeColor::Discarded => "gray",
    }
}
