// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Algorithm engines
//!
//! Every engine borrows a [`Graph`], runs to completion and returns the full
//! list of recorded steps. Engines have no notion of time; pacing belongs to
//! whoever replays the steps.

pub mod bellman_ford;
pub mod dijkstra;
pub mod dsu;
pub mod kruskal;
pub mod prim;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::step::AlgorithmStep;
use crate::types::NodeId;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Single-source shortest path algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortestPath {
    /// Greedy, min-heap driven
    Dijkstra,
    /// Repeated relaxation of every edge
    BellmanFord,
}

/// Minimum spanning tree algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanningTree {
    /// Grows one tree from a start node
    Prim,
    /// Merges forests over sorted edges
    Kruskal,
}

/// An algorithm the engine can record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "family", content = "algorithm", rename_all = "kebab-case")]
pub enum Algorithm {
    /// Distances from a start node
    ShortestPath(ShortestPath),
    /// Minimum spanning tree or forest
    Mst(SpanningTree),
}

impl Algorithm {
    /// Every supported algorithm, in menu order
    pub const ALL: [Self; 4] = [
        Self::ShortestPath(ShortestPath::Dijkstra),
        Self::ShortestPath(ShortestPath::BellmanFord),
        Self::Mst(SpanningTree::Prim),
        Self::Mst(SpanningTree::Kruskal),
    ];

    /// Display name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShortestPath(ShortestPath::Dijkstra) => "Dijkstra",
            Self::ShortestPath(ShortestPath::BellmanFord) => "Bellman-Ford",
            Self::Mst(SpanningTree::Prim) => "Prim",
            Self::Mst(SpanningTree::Kruskal) => "Kruskal",
        }
    }

    /// Name accepted on the command line
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ShortestPath(ShortestPath::Dijkstra) => "dijkstra",
            Self::ShortestPath(ShortestPath::BellmanFord) => "bellman-ford",
            Self::Mst(SpanningTree::Prim) => "prim",
            Self::Mst(SpanningTree::Kruskal) => "kruskal",
        }
    }

    /// Whether `run` needs a start node
    #[must_use]
    pub fn requires_start_node(&self) -> bool {
        !matches!(self, Self::Mst(SpanningTree::Kruskal))
    }

    /// Whether recorded steps carry node distances
    #[must_use]
    pub fn tracks_distances(&self) -> bool {
        matches!(self, Self::ShortestPath(_))
    }

    /// Run the algorithm and return every recorded step
    ///
    /// Kruskal ignores `start`; the others fail with
    /// [`Error::MissingStartNode`] without one.
    pub fn run(&self, graph: &Graph, start: Option<NodeId>) -> Result<Vec<AlgorithmStep>> {
        tracing::info!(
            "Running {} over {} nodes and {} edges",
            self.name(),
            graph.node_count(),
            graph.edge_count()
        );

        let start = || start.ok_or(Error::MissingStartNode(*self));
        match self {
            Self::ShortestPath(ShortestPath::Dijkstra) => dijkstra::run(graph, start()?),
            Self::ShortestPath(ShortestPath::BellmanFord) => bellman_ford::run(graph, start()?),
            Self::Mst(SpanningTree::Prim) => prim::run(graph, start()?),
            Self::Mst(SpanningTree::Kruskal) => Ok(kruskal::run(graph)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dijkstra" => Ok(Self::ShortestPath(ShortestPath::Dijkstra)),
            "bellman-ford" | "bellman_ford" | "bellmanford" => {
                Ok(Self::ShortestPath(ShortestPath::BellmanFord))
            }
            "prim" | "prim's" => Ok(Self::Mst(SpanningTree::Prim)),
            "kruskal" | "kruskal's" => Ok(Self::Mst(SpanningTree::Kruskal)),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Fail fast on a start node that is not part of `graph`
fn check_start(graph: &Graph, start: NodeId) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(Error::UnknownNode(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn make_pair() -> (Graph, NodeId) {
        let mut graph = Graph::new();
        let a = graph.add_node(Position::new(0.0, 0.0));
        let b = graph.add_node(Position::new(6.0, 8.0));
        graph.add_edge(a, b).unwrap();
        (graph, a)
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "Bellman-Ford".parse::<Algorithm>().unwrap(),
            Algorithm::ShortestPath(ShortestPath::BellmanFord)
        );
        assert_eq!(
            "Kruskal's".parse::<Algorithm>().unwrap(),
            Algorithm::Mst(SpanningTree::Kruskal)
        );
        assert!(matches!(
            "bfs".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_slug_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.slug().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_start_node_requirements() {
        let (graph, _) = make_pair();

        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&graph, None);
            if algorithm.requires_start_node() {
                assert_eq!(result, Err(Error::MissingStartNode(algorithm)));
            } else {
                assert!(result.is_ok());
            }
        }
    }

    #[test]
    fn test_unknown_start_node() {
        let (graph, _) = make_pair();

        for algorithm in Algorithm::ALL.into_iter().filter(Algorithm::requires_start_node) {
            assert_eq!(
                algorithm.run(&graph, Some(NodeId(42))),
                Err(Error::UnknownNode(NodeId(42)))
            );
        }
    }

    #[test]
    fn test_distance_tracking_matches_family() {
        let (graph, start) = make_pair();

        for algorithm in Algorithm::ALL {
            let steps = algorithm.run(&graph, Some(start)).unwrap();
            assert_eq!(
                steps[0].node_distances().is_some(),
                algorithm.tracks_distances(),
                "{algorithm}"
            );
        }
    }
}
