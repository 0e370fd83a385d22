// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph construction and algorithm runs

use crate::algorithms::Algorithm;
use crate::types::NodeId;
use thiserror::Error;

/// Errors raised by the graph model and the algorithm engines
///
/// Disconnected or empty graphs are not errors; engines only fail when their
/// input contract is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node id that does not belong to the graph
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),

    /// An edge from a node to itself
    #[error("cannot connect node {0} to itself")]
    SelfLoop(NodeId),

    /// The selected algorithm needs a start node and none was given
    #[error("{0} requires a start node")]
    MissingStartNode(Algorithm),

    /// Endpoints so far apart that the weight would not fit
    #[error("edge between nodes {0} and {1} is longer than the maximum weight")]
    WeightTooLarge(NodeId, NodeId),

    /// Algorithm name that matches nothing
    #[error("unknown algorithm: {0}. Valid: dijkstra, bellman-ford, prim, kruskal")]
    UnknownAlgorithm(String),

    /// Position text that is not `x,y`
    #[error("invalid position '{0}', expected x,y")]
    InvalidPosition(String),

    /// Node id text that is not a non-negative integer
    #[error("invalid node id '{0}'")]
    InvalidNodeId(String),

    /// Edge text that is not `a-b`
    #[error("invalid edge '{0}', expected a-b")]
    InvalidEdgeSpec(String),
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;
