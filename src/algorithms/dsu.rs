// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Disjoint-set union over dense node ids

use crate::types::NodeId;

/// Partition of `0..len` into disjoint sets
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    /// Every element in its own set
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Representative of the set holding `node`
    ///
    /// Walks up to the root, then points every node on the walked path
    /// straight at it.
    pub fn find(&mut self, node: NodeId) -> NodeId {
        let mut root = node.index();
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node.index();
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        NodeId(root)
    }

    /// Merge the sets of `a` and `b`; `false` if they already were one set
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a.index()] = root_b.index();
        true
    }

    /// Whether `a` and `b` share a set
    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }
}
