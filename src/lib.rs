// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphtrace library - step recordings of classic graph algorithms
//!
//! This crate builds small, human-drawn undirected graphs and runs Dijkstra,
//! Bellman-Ford, Prim and Kruskal over them. Instead of only returning a
//! result, every engine returns the ordered list of visualization states it
//! went through so an external player can replay the run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod step;
pub mod summary;

/// Core data types shared by the graph model, the recorder and the engines
pub mod types {
    use serde::{Serialize, Serializer};
    use std::fmt;
    use std::ops::Add;
    use std::str::FromStr;

    use crate::error::Error;

    // =========================================================================
    // Identity
    // =========================================================================

    /// Identity of a node, assigned sequentially from 0 by its graph
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
    #[serde(transparent)]
    pub struct NodeId(pub usize);

    impl NodeId {
        /// Position of this node in its graph's node list
        #[must_use]
        pub fn index(self) -> usize {
            self.0
        }
    }

    impl fmt::Display for NodeId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl FromStr for NodeId {
        type Err = Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            s.trim()
                .parse::<usize>()
                .map(Self)
                .map_err(|_| Error::InvalidNodeId(s.to_string()))
        }
    }

    /// Identity of an undirected connection (shared by its forward and reverse edge)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
    #[serde(transparent)]
    pub struct EdgeId(pub usize);

    impl fmt::Display for EdgeId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "e{}", self.0)
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Position in 2D space
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct Position {
        /// X coordinate
        pub x: f64,
        /// Y coordinate
        pub y: f64,
    }

    impl Position {
        /// Create a position
        #[must_use]
        pub fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }

        /// Euclidean distance to another position
        #[must_use]
        pub fn distance_to(&self, other: &Self) -> f64 {
            (self.x - other.x).hypot(self.y - other.y)
        }
    }

    /// Parses `x,y`
    impl FromStr for Position {
        type Err = Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let (x, y) = s
                .split_once(',')
                .ok_or_else(|| Error::InvalidPosition(s.to_string()))?;
            let x = x.trim().parse::<f64>().map_err(|_| Error::InvalidPosition(s.to_string()))?;
            let y = y.trim().parse::<f64>().map_err(|_| Error::InvalidPosition(s.to_string()))?;
            if !x.is_finite() || !y.is_finite() {
                return Err(Error::InvalidPosition(s.to_string()));
            }
            Ok(Self { x, y })
        }
    }

    // =========================================================================
    // Node / Edge
    // =========================================================================

    /// A graph vertex
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Node {
        /// Unique identifier within its graph
        pub id: NodeId,
        /// Where the node was drawn
        pub position: Position,
    }

    /// A directed view of an undirected connection
    ///
    /// The graph keeps one canonical edge per connection and a separate
    /// reverse edge in the adjacency list of the end node. Both carry the
    /// same `id` and `weight`.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct Edge {
        /// Connection identifier
        pub id: EdgeId,
        /// Node the edge leaves from
        pub start: NodeId,
        /// Node the edge arrives at
        pub end: NodeId,
        /// Rounded euclidean length at creation time
        pub weight: u64,
    }

    impl Edge {
        /// Build an edge between two positioned nodes, snapshotting the weight
        ///
        /// Fails when the rounded length exceeds [`MAX_WEIGHT`].
        pub fn between(id: EdgeId, start: &Node, end: &Node) -> Result<Self, Error> {
            Ok(Self {
                id,
                start: start.id,
                end: end.id,
                weight: rounded_weight(start, end)?,
            })
        }

        /// The same connection walked the other way
        #[must_use]
        pub fn reversed(&self) -> Self {
            Self {
                id: self.id,
                start: self.end,
                end: self.start,
                weight: self.weight,
            }
        }

        /// Whether `node` is one of the endpoints
        #[must_use]
        pub fn touches(&self, node: NodeId) -> bool {
            self.start == node || self.end == node
        }
    }

    impl fmt::Display for Edge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({},{})", self.start, self.end)
        }
    }

    /// Largest edge weight a graph accepts
    ///
    /// Any sum of fewer than 2^32 such weights fits in a `u64`, so path
    /// distances and tree totals never overflow.
    pub const MAX_WEIGHT: u64 = u32::MAX as u64;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rounded_weight(start: &Node, end: &Node) -> Result<u64, Error> {
        let length = start.position.distance_to(&end.position).round();
        if length <= f64::from(u32::MAX) {
            Ok(length as u64)
        } else {
            Err(Error::WeightTooLarge(start.id, end.id))
        }
    }

    // =========================================================================
    // Visualization tags
    // =========================================================================

    /// Color tag of a node in a recorded step
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum NodeColor {
        /// Not reached yet
        Unvisited,
        /// Finalized (dequeued or joined the tree)
        Visited,
        /// On the frontier
        Processing,
    }

    /// Color tag of an edge in a recorded step
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum EdgeColor {
        /// Under consideration
        Processing,
        /// Part of the spanning tree
        Mst,
        /// Rejected because it would close a cycle
        Discarded,
    }

    // =========================================================================
    // Distances
    // =========================================================================

    /// Best-known distance of a node; every finite value orders below `Infinite`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Distance {
        /// Reached with this total weight
        Finite(u64),
        /// Not reached
        Infinite,
    }

    impl Distance {
        /// The finite value, if any
        #[must_use]
        pub fn finite(self) -> Option<u64> {
            match self {
                Self::Finite(d) => Some(d),
                Self::Infinite => None,
            }
        }

        /// Whether the node has been reached
        #[must_use]
        pub fn is_finite(self) -> bool {
            matches!(self, Self::Finite(_))
        }
    }

    /// Extending an unreached distance stays unreached
    impl Add<u64> for Distance {
        type Output = Self;

        fn add(self, weight: u64) -> Self {
            match self {
                Self::Finite(d) => d.checked_add(weight).map_or(Self::Infinite, Self::Finite),
                Self::Infinite => Self::Infinite,
            }
        }
    }

    impl fmt::Display for Distance {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Finite(d) => write!(f, "{d}"),
                Self::Infinite => f.write_str("\u{221e}"),
            }
        }
    }

    impl Serialize for Distance {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Finite(d) => serializer.serialize_u64(*d),
                Self::Infinite => serializer.serialize_str("inf"),
            }
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::algorithms::{Algorithm, ShortestPath, SpanningTree};
    pub use crate::error::{Error, Result};
    pub use crate::graph::Graph;
    pub use crate::step::AlgorithmStep;
    pub use crate::summary::RunSummary;
    pub use crate::types::*;
}
