// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Prim's minimum spanning tree

use super::check_start;
use crate::error::Result;
use crate::graph::Graph;
use crate::step::{AlgorithmStep, StepRecorder};
use crate::types::{Edge, EdgeColor, NodeColor, NodeId};
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

/// Min-heap of edges keyed by weight, ties popped in push order
#[derive(Default)]
struct EdgeQueue<'g> {
    heap: BinaryHeap<Reverse<(u64, usize)>>,
    pushed: Vec<&'g Edge>,
}

impl<'g> EdgeQueue<'g> {
    fn push(&mut self, edge: &'g Edge) {
        self.heap.push(Reverse((edge.weight, self.pushed.len())));
        self.pushed.push(edge);
    }

    fn pop(&mut self) -> Option<&'g Edge> {
        self.heap.pop().map(|Reverse((_, seq))| self.pushed[seq])
    }
}

/// Record Prim from `start`
///
/// On a disconnected graph the run ends once the heap drains, leaving the
/// tree of the start node's component; this is not an error.
pub fn run(graph: &Graph, start: NodeId) -> Result<Vec<AlgorithmStep>> {
    check_start(graph, start)?;

    let mut recorder = StepRecorder::new(graph.nodes().iter().map(|n| n.id));
    let mut in_tree = BTreeSet::new();
    let mut queue = EdgeQueue::default();

    in_tree.insert(start);
    recorder.set_node(start, NodeColor::Visited);
    for edge in graph.adjacent_edges(start) {
        queue.push(edge);
    }
    recorder.record(format!(
        "Start with node {start}. Add its edges to the priority queue."
    ));

    let mut total_weight = 0;
    while in_tree.len() < graph.node_count() {
        let Some(edge) = queue.pop() else { break };
        let next = if in_tree.contains(&edge.start) { edge.end } else { edge.start };

        if in_tree.contains(&next) {
            recorder.record(format!("Edge {edge} leads to an already visited node. Skip."));
            continue;
        }

        in_tree.insert(next);
        recorder.set_node(next, NodeColor::Visited);
        recorder.set_edge(edge.id, EdgeColor::Mst);
        total_weight += edge.weight;
        recorder.record(format!("Add edge {edge} to MST. Total weight: {total_weight}"));

        for candidate in graph.adjacent_edges(next) {
            if !in_tree.contains(&candidate.end) {
                queue.push(candidate);
            }
        }
    }

    if in_tree.len() < graph.node_count() {
        tracing::debug!(
            "{} nodes unreachable from node {}",
            graph.node_count() - in_tree.len(),
            start
        );
    }

    recorder.record(format!(
        "Prim's algorithm finished. Final MST weight: {total_weight}"
    ));
    Ok(recorder.finish())
}
