// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Bellman-Ford shortest paths over undirected edges

use super::check_start;
use crate::error::Result;
use crate::graph::Graph;
use crate::step::{AlgorithmStep, StepRecorder};
use crate::types::{Distance, NodeId};

/// Final message of a run that found a negative cycle
pub const NEGATIVE_CYCLE: &str = "Negative weight cycle detected!";

/// Record Bellman-Ford from `start`
///
/// Every canonical edge is relaxed in both directions. One step is emitted
/// per pass; the run stops after the first pass that changes nothing.
pub fn run(graph: &Graph, start: NodeId) -> Result<Vec<AlgorithmStep>> {
    check_start(graph, start)?;

    let mut recorder = StepRecorder::with_distances(graph.nodes().iter().map(|n| n.id));
    recorder.set_distance(start, Distance::Finite(0));
    recorder.record("Initialization complete.");

    for pass in 1..graph.node_count() {
        let mut relaxed = false;
        for edge in graph.edges() {
            relaxed |= relax(&mut recorder, edge.start, edge.end, edge.weight);
            relaxed |= relax(&mut recorder, edge.end, edge.start, edge.weight);
        }
        recorder.record(format!("After relaxation pass {pass}."));
        if !relaxed {
            tracing::debug!("No relaxation in pass {}, stopping early", pass);
            break;
        }
    }

    let still_relaxable = graph.edges().iter().any(|edge| {
        improvement(&recorder, edge.start, edge.end, edge.weight).is_some()
            || improvement(&recorder, edge.end, edge.start, edge.weight).is_some()
    });
    if still_relaxable {
        recorder.record(NEGATIVE_CYCLE);
        return Ok(recorder.finish());
    }

    recorder.record("Bellman-Ford finished.");
    Ok(recorder.finish())
}

/// Shorter distance for `to` through `from`, if there is one
fn improvement(recorder: &StepRecorder, from: NodeId, to: NodeId, weight: u64) -> Option<Distance> {
    let candidate = recorder.distance(from) + weight;
    (candidate < recorder.distance(to)).then_some(candidate)
}

fn relax(recorder: &mut StepRecorder, from: NodeId, to: NodeId, weight: u64) -> bool {
    match improvement(recorder, from, to, weight) {
        Some(candidate) => {
            recorder.set_distance(to, candidate);
            true
        }
        None => false,
    }
}
