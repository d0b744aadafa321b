//! Topology type definitions.
//!
//! Nodes, edges and demands are addressed by dense indices. Capacities and
//! bandwidths are fixed-point integers (caller units multiplied by
//! [`crate::instance::SCALE`]).

use serde::{Deserialize, Serialize};

pub type NodeId = usize;
pub type EdgeId = usize;
pub type DemandId = usize;

/// A directed link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub src: NodeId,
    pub dest: NodeId,
    /// Routing weight used by the shortest-path computation
    pub cost: u32,
    /// Capacity in fixed-point bandwidth units
    pub capacity: i64,
}

impl Edge {
    pub fn new(src: NodeId, dest: NodeId, cost: u32, capacity: i64) -> Self {
        Self {
            src,
            dest,
            cost,
            capacity,
        }
    }
}

/// Traffic that must be carried from `src` to `dest`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    pub src: NodeId,
    pub dest: NodeId,
    /// Bandwidth in fixed-point units
    pub bandwidth: i64,
}

impl Demand {
    pub fn new(src: NodeId, dest: NodeId, bandwidth: i64) -> Self {
        Self {
            src,
            dest,
            bandwidth,
        }
    }
}
