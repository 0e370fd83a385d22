// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Final outcome of a recorded run

use crate::algorithms::bellman_ford;
use crate::graph::Graph;
use crate::step::AlgorithmStep;
use crate::types::{Distance, EdgeColor, NodeId};
use serde::Serialize;
use std::collections::BTreeMap;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The algorithm ran to completion
    Finished,
    /// Bellman-Ford short-circuited on a negative cycle
    NegativeCycle,
}

/// What a step sequence amounts to once replayed to the end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of recorded steps
    pub steps: usize,
    /// How the run ended
    pub outcome: Outcome,
    /// Last log line
    pub final_message: String,
    /// Final distances, for shortest-path runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<BTreeMap<NodeId, Distance>>,
    /// Total weight of edges colored `mst` in the last step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_weight: Option<u64>,
}

impl RunSummary {
    /// Summarize `steps` recorded over `graph`; `None` for an empty sequence
    #[must_use]
    pub fn from_steps(graph: &Graph, steps: &[AlgorithmStep]) -> Option<Self> {
        let last = steps.last()?;

        let outcome = if last.log_message() == bellman_ford::NEGATIVE_CYCLE {
            Outcome::NegativeCycle
        } else {
            Outcome::Finished
        };

        let mut tree_edges = last.edges_colored(EdgeColor::Mst).peekable();
        let mst_weight = tree_edges.peek().is_some().then(|| {
            tree_edges
                .filter_map(|id| graph.edge(id))
                .map(|e| e.weight)
                .sum()
        });

        Some(Self {
            steps: steps.len(),
            outcome,
            final_message: last.log_message().to_string(),
            distances: last.node_distances().cloned(),
            mst_weight,
        })
    }

    /// Finite final distance of `node`
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<u64> {
        self.distances.as_ref()?.get(&node)?.finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{dijkstra, kruskal};
    use crate::types::Position;

    fn make_triangle() -> Graph {
        let mut graph = Graph::new();
        let a = graph.add_node(Position::new(0.0, 0.0));
        let b = graph.add_node(Position::new(3.0, 0.0));
        let c = graph.add_node(Position::new(0.0, 4.0));
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph.add_edge(a, c).unwrap();
        graph
    }

    #[test]
    fn test_mst_summary() {
        let graph = make_triangle();
        let steps = kruskal::run(&graph);

        let summary = RunSummary::from_steps(&graph, &steps).unwrap();

        assert_eq!(summary.outcome, Outcome::Finished);
        assert_eq!(summary.mst_weight, Some(7));
        assert_eq!(summary.steps, steps.len());
        assert!(summary.distances.is_none());
    }

    #[test]
    fn test_shortest_path_summary() {
        let graph = make_triangle();
        let steps = dijkstra::run(&graph, NodeId(1)).unwrap();

        let summary = RunSummary::from_steps(&graph, &steps).unwrap();

        assert_eq!(summary.distance(NodeId(0)), Some(3));
        assert_eq!(summary.distance(NodeId(2)), Some(5));
        assert_eq!(summary.mst_weight, None);
        assert_eq!(summary.final_message, "Dijkstra's algorithm finished.");
    }

    #[test]
    fn test_negative_cycle_outcome() {
        let graph = make_triangle();
        let finished = bellman_ford::run(&graph, NodeId(0)).unwrap();
        let mut distances = BTreeMap::new();
        distances.insert(NodeId(0), Distance::Finite(0));
        let aborted = [AlgorithmStep::new(
            &BTreeMap::new(),
            &BTreeMap::new(),
            Some(&distances),
            bellman_ford::NEGATIVE_CYCLE,
        )];

        let finished = RunSummary::from_steps(&graph, &finished).unwrap();
        let aborted = RunSummary::from_steps(&graph, &aborted).unwrap();

        assert_eq!(finished.outcome, Outcome::Finished);
        assert_eq!(aborted.outcome, Outcome::NegativeCycle);
        assert_eq!(aborted.final_message, bellman_ford::NEGATIVE_CYCLE);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(RunSummary::from_steps(&Graph::new(), &[]).is_none());
    }
}
