//! Immutable directed topology.
//!
//! Built once from a node count and an edge list. All structural
//! validation happens here so that hot paths never re-check node ranges.

use log::debug;

use super::types::{Edge, EdgeId, NodeId};
use crate::error::{Result, SrteError};

/// Directed weighted graph with adjacency indices
#[derive(Debug, Clone)]
pub struct Topology {
    node_count: usize,
    edges: Vec<Edge>,
    /// Outgoing edge ids per node, ascending
    out_edges: Vec<Vec<EdgeId>>,
    /// Incoming edge ids per node, ascending
    in_edges: Vec<Vec<EdgeId>>,
}

impl Topology {
    /// Build a topology, rejecting malformed edges.
    ///
    /// # Arguments
    /// * `node_count` - Number of nodes; ids are `0..node_count`
    /// * `edges` - Edge list; the position of an edge is its id
    ///
    /// # Returns
    /// * `Err(SrteError::NodeOutOfRange)` if an edge references a node `>= node_count`
    /// * `Err(SrteError::SelfLoop)`, `InvalidCapacity` or `InvalidCost` for degenerate edges
    /// * `Err(SrteError::EmptyTopology)` if there are no nodes or no edges
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Result<Self> {
        if node_count == 0 || edges.is_empty() {
            return Err(SrteError::EmptyTopology);
        }

        let mut out_edges = vec![Vec::new(); node_count];
        let mut in_edges = vec![Vec::new(); node_count];

        for (id, edge) in edges.iter().enumerate() {
            for node in [edge.src, edge.dest] {
                if node >= node_count {
                    return Err(SrteError::NodeOutOfRange { edge: id, node, node_count });
                }
            }
            if edge.src == edge.dest {
                return Err(SrteError::SelfLoop { edge: id, node: edge.src });
            }
            if edge.capacity <= 0 {
                return Err(SrteError::InvalidCapacity { edge: id, capacity: edge.capacity });
            }
            if edge.cost == 0 {
                return Err(SrteError::InvalidCost { edge: id });
            }

            out_edges[edge.src].push(id);
            in_edges[edge.dest].push(id);
        }

        debug!("Built topology with {} nodes and {} edges", node_count, edges.len());

        Ok(Self {
            node_count,
            edges,
            out_edges,
            in_edges,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up an edge by id
    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges.get(id).ok_or(SrteError::UnknownEdge(id))
    }

    /// Outgoing edges of `node`, ordered by edge id
    pub fn out_edges(&self, node: NodeId) -> Result<&[EdgeId]> {
        self.out_edges
            .get(node)
            .map(Vec::as_slice)
            .ok_or(SrteError::UnknownNode(node))
    }

    /// Incoming edges of `node`, ordered by edge id
    pub fn in_edges(&self, node: NodeId) -> Result<&[EdgeId]> {
        self.in_edges
            .get(node)
            .map(Vec::as_slice)
            .ok_or(SrteError::UnknownNode(node))
    }

    /// Successor nodes of `node` in edge id order (parallel edges repeat)
    pub fn neighbors(&self, node: NodeId) -> Result<impl Iterator<Item = NodeId> + '_> {
        Ok(self.out_edges(node)?.iter().map(move |&e| self.edges[e].dest))
    }

    /// Lowest-id edge from `src` to `dest`, if any
    pub fn find_edge(&self, src: NodeId, dest: NodeId) -> Option<EdgeId> {
        self.out_edges
            .get(src)?
            .iter()
            .copied()
            .find(|&e| self.edges[e].dest == dest)
    }

    /// Edge slice for crate-internal hot loops that already hold a valid id
    pub(crate) fn raw_edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub(crate) fn raw_out_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.out_edges[node]
    }
}
