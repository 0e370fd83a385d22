// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Recorded visualization states
//!
//! Engines mutate one set of working maps through a [`StepRecorder`] and call
//! [`StepRecorder::record`] after every meaningful transition. Each call
//! copies the working maps into a fresh [`AlgorithmStep`], so a step never
//! changes after it has been emitted.

use crate::types::{Distance, EdgeColor, EdgeId, NodeColor, NodeId};
use serde::Serialize;
use std::collections::BTreeMap;

/// One frame of an algorithm run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmStep {
    node_colors: BTreeMap<NodeId, NodeColor>,
    edge_colors: BTreeMap<EdgeId, EdgeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_distances: Option<BTreeMap<NodeId, Distance>>,
    log_message: String,
}

impl AlgorithmStep {
    /// Snapshot the given maps
    ///
    /// `node_distances` is `None` for algorithms that do not track distances,
    /// which renderers must treat differently from "every distance unknown".
    #[must_use]
    pub fn new(
        node_colors: &BTreeMap<NodeId, NodeColor>,
        edge_colors: &BTreeMap<EdgeId, EdgeColor>,
        node_distances: Option<&BTreeMap<NodeId, Distance>>,
        log_message: impl Into<String>,
    ) -> Self {
        Self {
            node_colors: node_colors.clone(),
            edge_colors: edge_colors.clone(),
            node_distances: node_distances.cloned(),
            log_message: log_message.into(),
        }
    }

    /// Color of every node at this point of the run
    #[must_use]
    pub fn node_colors(&self) -> &BTreeMap<NodeId, NodeColor> {
        &self.node_colors
    }

    /// Colors of the edges touched so far
    #[must_use]
    pub fn edge_colors(&self) -> &BTreeMap<EdgeId, EdgeColor> {
        &self.edge_colors
    }

    /// Best-known distances, `None` when the algorithm does not track them
    #[must_use]
    pub fn node_distances(&self) -> Option<&BTreeMap<NodeId, Distance>> {
        self.node_distances.as_ref()
    }

    /// What just happened
    #[must_use]
    pub fn log_message(&self) -> &str {
        &self.log_message
    }

    /// Color of a single node
    #[must_use]
    pub fn node_color(&self, node: NodeId) -> Option<NodeColor> {
        self.node_colors.get(&node).copied()
    }

    /// Color of a single edge
    #[must_use]
    pub fn edge_color(&self, edge: EdgeId) -> Option<EdgeColor> {
        self.edge_colors.get(&edge).copied()
    }

    /// Distance of a single node
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.node_distances.as_ref()?.get(&node).copied()
    }

    /// Edges carrying `color`, in id order
    pub fn edges_colored(&self, color: EdgeColor) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_colors
            .iter()
            .filter(move |(_, c)| **c == color)
            .map(|(id, _)| *id)
    }
}

/// Working state of one engine run plus the steps emitted so far
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    node_colors: BTreeMap<NodeId, NodeColor>,
    edge_colors: BTreeMap<EdgeId, EdgeColor>,
    distances: Option<BTreeMap<NodeId, Distance>>,
    steps: Vec<AlgorithmStep>,
}

impl StepRecorder {
    /// Recorder for an algorithm that does not track distances
    pub fn new(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            node_colors: nodes.into_iter().map(|n| (n, NodeColor::Unvisited)).collect(),
            ..Self::default()
        }
    }

    /// Recorder that also tracks distances, all starting at infinity
    pub fn with_distances(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut recorder = Self::new(nodes);
        recorder.distances = Some(
            recorder
                .node_colors
                .keys()
                .map(|n| (*n, Distance::Infinite))
                .collect(),
        );
        recorder
    }

    /// Recolor a node
    pub fn set_node(&mut self, node: NodeId, color: NodeColor) {
        self.node_colors.insert(node, color);
    }

    /// Recolor an edge
    pub fn set_edge(&mut self, edge: EdgeId, color: EdgeColor) {
        self.edge_colors.insert(edge, color);
    }

    /// Update a node's best-known distance
    ///
    /// Ignored when the recorder was built without distances.
    pub fn set_distance(&mut self, node: NodeId, distance: Distance) {
        if let Some(distances) = self.distances.as_mut() {
            distances.insert(node, distance);
        }
    }

    /// Current distance of `node`, infinity when unknown
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Distance {
        self.distances
            .as_ref()
            .and_then(|d| d.get(&node).copied())
            .unwrap_or(Distance::Infinite)
    }

    /// Current color of `node`
    #[must_use]
    pub fn node_color(&self, node: NodeId) -> Option<NodeColor> {
        self.node_colors.get(&node).copied()
    }

    /// Snapshot the working state as a new step
    pub fn record(&mut self, message: impl Into<String>) {
        let step = AlgorithmStep::new(
            &self.node_colors,
            &self.edge_colors,
            self.distances.as_ref(),
            message,
        );
        tracing::debug!(step = self.steps.len(), "{}", step.log_message());
        self.steps.push(step);
    }

    /// Hand the recorded steps to the caller
    #[must_use]
    pub fn finish(self) -> Vec<AlgorithmStep> {
        self.steps
    }
}
