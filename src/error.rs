//! Error types for the SRTE engine.
//!
//! Construction errors are fatal to instance creation and are reported
//! before any state exists. Caller misuse (unknown ids, draws outside
//! `[0, 1)`) is rejected with a defined error instead of panicking.
//! Illegal moves and exhausted searches are not errors at all: they are
//! reported as `Ok(false)` / `Ok(None)` by the operations themselves.

use crate::config::ValidationError;
use crate::topology::{DemandId, EdgeId, NodeId};

/// Errors raised by the SRTE engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SrteError {
    #[error("Topology must contain at least one node and one edge")]
    EmptyTopology,

    #[error("Edge {edge} references node {node} but the topology has {node_count} nodes")]
    NodeOutOfRange { edge: EdgeId, node: NodeId, node_count: usize },

    #[error("Edge {edge} is a self-loop on node {node}")]
    SelfLoop { edge: EdgeId, node: NodeId },

    #[error("Edge {edge} has non-positive capacity {capacity}")]
    InvalidCapacity { edge: EdgeId, capacity: i64 },

    #[error("Edge {edge} has zero cost")]
    InvalidCost { edge: EdgeId },

    #[error("Invalid demand {demand}: {reason}")]
    InvalidDemand { demand: DemandId, reason: String },

    #[error("No path from node {src} to node {dest} (required by demand {demand})")]
    Unreachable { src: NodeId, dest: NodeId, demand: DemandId },

    #[error("No path from node {src} to node {dest}")]
    NoPath { src: NodeId, dest: NodeId },

    #[error("Forwarding graphs cover {forwarding} nodes but the topology has {topology}")]
    ForwardingMismatch { forwarding: usize, topology: usize },

    #[error("Value {value} overflows the fixed-point load range")]
    ScaleOverflow { value: i64 },

    #[error("Unknown edge id: {0}")]
    UnknownEdge(EdgeId),

    #[error("Unknown demand id: {0}")]
    UnknownDemand(DemandId),

    #[error("Unknown node id: {0}")]
    UnknownNode(NodeId),

    #[error("Random draw {0} is outside [0, 1)")]
    InvalidDraw(f64),

    #[error("Invalid move record: {0}")]
    InvalidMoveRecord(String),

    #[error(transparent)]
    Config(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, SrteError>;
