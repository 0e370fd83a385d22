// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Kruskal's minimum spanning forest

use super::dsu::DisjointSet;
use crate::graph::Graph;
use crate::step::{AlgorithmStep, StepRecorder};
use crate::types::EdgeColor;

/// Record Kruskal over every canonical edge
///
/// Edges of equal weight keep their insertion order. Needs no start node and
/// cannot fail; a disconnected graph yields a spanning forest.
#[must_use]
pub fn run(graph: &Graph) -> Vec<AlgorithmStep> {
    let mut recorder = StepRecorder::new(graph.nodes().iter().map(|n| n.id));

    let mut sorted: Vec<_> = graph.edges().iter().collect();
    sorted.sort_by_key(|e| e.weight);
    recorder.record("Sort all edges by weight.");

    let mut forest = DisjointSet::new(graph.node_count());
    let mut total_weight = 0;

    for edge in sorted {
        recorder.set_edge(edge.id, EdgeColor::Processing);
        recorder.record(format!(
            "Considering edge {edge} with weight {}.",
            edge.weight
        ));

        if forest.union(edge.start, edge.end) {
            recorder.set_edge(edge.id, EdgeColor::Mst);
            total_weight += edge.weight;
            recorder.record(format!(
                "Edge does not form a cycle. Add to MST. Total weight: {total_weight}"
            ));
        } else {
            recorder.set_edge(edge.id, EdgeColor::Discarded);
            recorder.record("Edge forms a cycle. Discard.");
        }
    }

    recorder.record(format!(
        "Kruskal's algorithm finished. Final MST weight: {total_weight}"
    ));
    recorder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeId, NodeColor, NodeId, Position};

    fn make_triangle() -> Graph {
        let mut graph = Graph::new();
        let a = graph.add_node(Position::new(0.0, 0.0));
        let b = graph.add_node(Position::new(3.0, 0.0));
        let c = graph.add_node(Position::new(0.0, 4.0));
        graph.add_edge(b, c).unwrap();
        graph.add_edge(a, c).unwrap();
        graph.add_edge(a, b).unwrap();
        graph
    }

    #[test]
    fn test_triangle_discards_hypotenuse() {
        let graph = make_triangle();

        let steps = run(&graph);
        let messages: Vec<_> = steps.iter().map(AlgorithmStep::log_message).collect();

        assert_eq!(
            messages,
            vec![
                "Sort all edges by weight.",
                "Considering edge (0,1) with weight 3.",
                "Edge does not form a cycle. Add to MST. Total weight: 3",
                "Considering edge (0,2) with weight 4.",
                "Edge does not form a cycle. Add to MST. Total weight: 7",
                "Considering edge (1,2) with weight 5.",
                "Edge forms a cycle. Discard.",
                "Kruskal's algorithm finished. Final MST weight: 7",
            ]
        );

        let last = steps.last().unwrap();
        assert_eq!(last.edge_color(EdgeId(0)), Some(EdgeColor::Discarded));
        assert_eq!(last.edge_color(EdgeId(1)), Some(EdgeColor::Mst));
        assert_eq!(last.edge_color(EdgeId(2)), Some(EdgeColor::Mst));
    }

    #[test]
    fn test_processing_precedes_verdict() {
        let graph = make_triangle();

        let steps = run(&graph);

        assert!(steps[0].edge_colors().is_empty());
        assert_eq!(steps[1].edge_color(EdgeId(2)), Some(EdgeColor::Processing));
        assert_eq!(steps[2].edge_color(EdgeId(2)), Some(EdgeColor::Mst));
        assert_eq!(steps[5].edge_color(EdgeId(0)), Some(EdgeColor::Processing));
        assert!(steps.iter().all(|s| s.node_distances().is_none()));
        assert!(steps
            .iter()
            .all(|s| s.node_colors().values().all(|c| *c == NodeColor::Unvisited)));
    }

    #[test]
    fn test_equal_weights_keep_insertion_order() {
        let mut graph = Graph::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
            graph.add_node(Position::new(x, y));
        }
        for (a, b) in [(2, 3), (0, 1), (3, 0), (1, 2)] {
            graph.add_edge(NodeId(a), NodeId(b)).unwrap();
        }

        let steps = run(&graph);
        let considered: Vec<_> = steps
            .iter()
            .map(AlgorithmStep::log_message)
            .filter(|m| m.starts_with("Considering"))
            .collect();

        assert_eq!(
            considered,
            vec![
                "Considering edge (2,3) with weight 10.",
                "Considering edge (0,1) with weight 10.",
                "Considering edge (3,0) with weight 10.",
                "Considering edge (1,2) with weight 10.",
            ]
        );
        assert_eq!(
            steps.last().unwrap().edge_color(EdgeId(3)),
            Some(EdgeColor::Discarded)
        );
    }

    #[test]
    fn test_empty_graph() {
        let steps = run(&Graph::new());

        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps[1].log_message(),
            "Kruskal's algorithm finished. Final MST weight: 0"
        );
    }
}
