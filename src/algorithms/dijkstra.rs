// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dijkstra's single-source shortest paths

use super::check_start;
use crate::error::Result;
use crate::graph::Graph;
use crate::step::{AlgorithmStep, StepRecorder};
use crate::types::{Distance, NodeColor, NodeId};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// Record Dijkstra from `start`
///
/// Only the start node and relaxed neighbors enter the heap, so nodes that
/// cannot be reached are never dequeued: they end the run `unvisited` at
/// infinity. `visited` means finalized. Nodes with a tentative distance are
/// colored `processing`.
pub fn run(graph: &Graph, start: NodeId) -> Result<Vec<AlgorithmStep>> {
    check_start(graph, start)?;

    let mut recorder = StepRecorder::with_distances(graph.nodes().iter().map(|n| n.id));
    let mut predecessors: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    // Ties on distance resolve to the lower node id
    let mut heap = BinaryHeap::new();

    recorder.set_distance(start, Distance::Finite(0));
    heap.push(Reverse((Distance::Finite(0), start)));
    recorder.record("Initialization: Distances set to infinity, 0 for start node.");

    while let Some(Reverse((distance, current))) = heap.pop() {
        // Stale entry, the node was finalized through a shorter path
        if recorder.node_color(current) == Some(NodeColor::Visited) {
            continue;
        }

        recorder.set_node(current, NodeColor::Visited);
        match predecessors.get(&current) {
            Some(via) => recorder.record(format!("Visiting node {current} via node {via}.")),
            None => recorder.record(format!("Visiting node {current}.")),
        }

        for edge in graph.adjacent_edges(current) {
            let neighbor = edge.end;
            if recorder.node_color(neighbor) == Some(NodeColor::Visited) {
                continue;
            }

            let candidate = distance + edge.weight;
            if candidate < recorder.distance(neighbor) {
                recorder.set_distance(neighbor, candidate);
                recorder.set_node(neighbor, NodeColor::Processing);
                predecessors.insert(neighbor, current);
                heap.push(Reverse((candidate, neighbor)));
                recorder.record(format!(
                    "Relaxing edge ({current}, {neighbor}). New distance for {neighbor} is {candidate}."
                ));
            }
        }
    }

    recorder.record("Dijkstra's algorithm finished.");
    Ok(recorder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Position;

    fn make_path(len: usize) -> Graph {
        let mut graph = Graph::new();
        let ids: Vec<_> = (0..len)
            .map(|i| graph.add_node(Position::new(i as f64 * 10.0, 0.0)))
            .collect();
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1]).unwrap();
        }
        graph
    }

    /// Nodes in the order they turned `visited`
    fn visit_order(steps: &[AlgorithmStep]) -> Vec<NodeId> {
        let mut order = Vec::new();
        for pair in steps.windows(2) {
            for (node, color) in pair[1].node_colors() {
                if *color == NodeColor::Visited && pair[0].node_color(*node) != Some(NodeColor::Visited) {
                    order.push(*node);
                }
            }
        }
        order
    }

    #[test]
    fn test_path_visit_order() {
        let graph = make_path(4);

        let steps = run(&graph, NodeId(0)).unwrap();

        assert_eq!(
            visit_order(&steps),
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]
        );
        let last = steps.last().unwrap();
        let distances: Vec<_> = last.node_distances().unwrap().values().copied().collect();
        assert_eq!(
            distances,
            vec![
                Distance::Finite(0),
                Distance::Finite(10),
                Distance::Finite(20),
                Distance::Finite(30)
            ]
        );
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(last.log_message(), "Dijkstra's algorithm finished.");
    }

    #[test]
    fn test_relaxation_messages() {
        let graph = make_path(2);

        let steps = run(&graph, NodeId(0)).unwrap();
        let messages: Vec<_> = steps.iter().map(AlgorithmStep::log_message).collect();

        assert_eq!(
            messages,
            vec![
                "Initialization: Distances set to infinity, 0 for start node.",
                "Visiting node 0.",
                "Relaxing edge (0, 1). New distance for 1 is 10.",
                "Visiting node 1 via node 0.",
                "Dijkstra's algorithm finished.",
            ]
        );
        assert_eq!(steps[2].node_color(NodeId(1)), Some(NodeColor::Processing));
    }

    #[test]
    fn test_shorter_path_replaces_direct_edge() {
        // Rounding makes 0 -> 1 -> 2 (4 + 4) shorter than 0 -> 2 (9)
        let mut graph = Graph::new();
        let a = graph.add_node(Position::new(0.0, 0.0));
        let b = graph.add_node(Position::new(4.4, 0.0));
        let c = graph.add_node(Position::new(8.8, 0.0));
        graph.add_edge(a, c).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();

        let steps = run(&graph, a).unwrap();
        let last = steps.last().unwrap();

        assert_eq!(last.distance(c), Some(Distance::Finite(8)));
        assert_eq!(last.distance(b), Some(Distance::Finite(4)));
        assert!(steps
            .iter()
            .any(|s| s.log_message() == "Relaxing edge (1, 2). New distance for 2 is 8."));
        assert_eq!(
            steps.iter().filter(|s| s.log_message().starts_with("Visiting node 2")).count(),
            1
        );
    }

    #[test]
    fn test_unreachable_node_never_visited() {
        let mut graph = make_path(2);
        let island = graph.add_node(Position::new(500.0, 500.0));

        let steps = run(&graph, NodeId(0)).unwrap();
        let last = steps.last().unwrap();

        assert_eq!(last.distance(island), Some(Distance::Infinite));
        assert_eq!(last.node_color(island), Some(NodeColor::Unvisited));
        assert!(steps.iter().all(|s| s.node_color(island) == Some(NodeColor::Unvisited)));
    }

    #[test]
    fn test_single_node() {
        let graph = make_path(1);

        let steps = run(&graph, NodeId(0)).unwrap();

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].distance(NodeId(0)), Some(Distance::Finite(0)));
        assert_eq!(steps[2].log_message(), "Dijkstra's algorithm finished.");
    }

    #[test]
    fn test_earlier_steps_unchanged() {
        let graph = make_path(3);

        let steps = run(&graph, NodeId(0)).unwrap();

        assert_eq!(steps[0].distance(NodeId(2)), Some(Distance::Infinite));
        assert!(steps[0]
            .node_colors()
            .values()
            .all(|c| *c == NodeColor::Unvisited));
    }

    #[test]
    fn test_rejects_foreign_start() {
        let graph = make_path(2);

        assert_eq!(run(&graph, NodeId(5)), Err(Error::UnknownNode(NodeId(5))));
    }
}
