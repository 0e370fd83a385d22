// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod algorithms;
pub mod completions;
pub mod dot;
pub mod run;

use crate::error::Error;
use crate::graph::Graph;
use crate::types::{NodeId, Position};
use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

/// Output switches shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Emit JSON instead of text
    pub json: bool,
    /// Colorize text output
    pub color: bool,
}

/// A connection requested on the command line as `a-b`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    /// First endpoint
    pub a: NodeId,
    /// Second endpoint
    pub b: NodeId,
}

impl FromStr for EdgeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidEdgeSpec(s.to_string()))?;
        Ok(Self {
            a: a.parse().map_err(|_| Error::InvalidEdgeSpec(s.to_string()))?,
            b: b.parse().map_err(|_| Error::InvalidEdgeSpec(s.to_string()))?,
        })
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Graph described by command line arguments
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GraphArgs {
    /// Node position as X,Y; ids are assigned from 0 in the order given
    #[arg(short = 'n', long = "node", value_name = "X,Y", allow_hyphen_values = true)]
    pub nodes: Vec<Position>,

    /// Connect two node ids, written A-B
    #[arg(short = 'e', long = "edge", value_name = "A-B")]
    pub edges: Vec<EdgeSpec>,
}

impl GraphArgs {
    /// Build the graph, ignoring repeated connections
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for position in &self.nodes {
            graph.add_node(*position);
        }
        for spec in &self.edges {
            let added = graph
                .add_edge(spec.a, spec.b)
                .with_context(|| format!("Failed to add edge {spec}"))?;
            if added.is_none() {
                tracing::warn!("Edge {} already exists, ignored", spec);
            }
        }
        tracing::debug!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
