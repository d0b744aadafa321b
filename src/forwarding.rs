//! Precomputed shortest-path forwarding.
//!
//! One shortest-path tree is built per source node. A waypoint list is
//! decomposed into concrete edges by walking the tree of each segment's
//! first node back from the segment's last node.
//!
//! Ties between equal-cost predecessors are broken towards the lowest edge
//! id, so two builds over the same topology yield the same decomposition.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;
use rayon::prelude::*;

use crate::error::{Result, SrteError};
use crate::topology::{EdgeId, NodeId, Topology};

const NO_EDGE: EdgeId = EdgeId::MAX;
const UNREACHABLE: u64 = u64::MAX;

/// All-pairs shortest-path trees over a topology
#[derive(Debug, Clone)]
pub struct ForwardingGraphs {
    node_count: usize,
    /// Row-major `[src * node_count + dest]` distances
    dist: Vec<u64>,
    /// Row-major predecessor edge of `dest` in the tree rooted at `src`
    pred: Vec<EdgeId>,
    /// Source node of every edge, for walking trees backwards
    edge_src: Vec<NodeId>,
}

impl ForwardingGraphs {
    /// Run one Dijkstra per source node (in parallel) and keep the trees.
    pub fn new(topology: &Topology) -> Self {
        let n = topology.node_count();

        let trees: Vec<(Vec<u64>, Vec<EdgeId>)> = (0..n)
            .into_par_iter()
            .map(|src| shortest_path_tree(topology, src))
            .collect();

        let mut dist = Vec::with_capacity(n * n);
        let mut pred = Vec::with_capacity(n * n);
        for (tree_dist, tree_pred) in trees {
            dist.extend(tree_dist);
            pred.extend(tree_pred);
        }

        let unreachable_pairs = dist.iter().filter(|&&d| d == UNREACHABLE).count();
        debug!(
            "Built forwarding graphs for {} nodes ({} unreachable ordered pairs)",
            n, unreachable_pairs
        );

        Self {
            node_count: n,
            dist,
            pred,
            edge_src: topology.edges().iter().map(|e| e.src).collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Shortest-path cost from `u` to `v`, `None` when unreachable
    pub fn distance(&self, u: NodeId, v: NodeId) -> Result<Option<u64>> {
        self.check_node(u)?;
        self.check_node(v)?;
        let d = self.dist[u * self.node_count + v];
        Ok((d != UNREACHABLE).then_some(d))
    }

    /// Whether `v` can be reached from `u`; out-of-range nodes are unreachable
    pub fn is_reachable(&self, u: NodeId, v: NodeId) -> bool {
        u < self.node_count
            && v < self.node_count
            && self.dist[u * self.node_count + v] != UNREACHABLE
    }

    /// Edges of the shortest `u -> v` path in forwarding order
    pub fn segment_edges(&self, u: NodeId, v: NodeId) -> Result<Vec<EdgeId>> {
        self.check_node(u)?;
        self.check_node(v)?;
        if !self.is_reachable(u, v) {
            return Err(SrteError::NoPath { src: u, dest: v });
        }
        let mut edges: Vec<EdgeId> = self.walk(u, v).collect();
        edges.reverse();
        Ok(edges)
    }

    /// Expand a waypoint list into the concatenation of its segments
    pub fn decompose(&self, path: &[NodeId]) -> Result<Vec<EdgeId>> {
        let mut edges = Vec::new();
        for pair in path.windows(2) {
            edges.extend(self.segment_edges(pair[0], pair[1])?);
        }
        Ok(edges)
    }

    /// Edges of the `u -> v` shortest path, last edge first.
    ///
    /// Callers must have checked reachability; the walk stops early on a
    /// missing predecessor instead of looping.
    pub(crate) fn walk(&self, u: NodeId, v: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let row = u * self.node_count;
        let mut current = v;
        std::iter::from_fn(move || {
            if current == u {
                return None;
            }
            let edge = self.pred[row + current];
            if edge == NO_EDGE {
                return None;
            }
            current = self.edge_src[edge];
            Some(edge)
        })
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(SrteError::UnknownNode(node))
        }
    }
}

/// Dijkstra from `src`, returning distances and predecessor edges
fn shortest_path_tree(topology: &Topology, src: NodeId) -> (Vec<u64>, Vec<EdgeId>) {
    let n = topology.node_count();
    let mut dist = vec![UNREACHABLE; n];
    let mut pred = vec![NO_EDGE; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[src] = 0;
    heap.push(Reverse((0u64, src)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;

        for &e in topology.raw_out_edges(u) {
            let edge = topology.raw_edge(e);
            let v = edge.dest;
            if settled[v] {
                continue;
            }
            let candidate = d + u64::from(edge.cost);
            if candidate < dist[v] {
                dist[v] = candidate;
                pred[v] = e;
                heap.push(Reverse((candidate, v)));
            } else if candidate == dist[v] && e < pred[v] {
                pred[v] = e;
            }
        }
    }

    (dist, pred)
}
