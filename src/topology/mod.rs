//! Network topology module.
//!
//! This module contains the immutable directed graph the engine routes
//! over, along with the node, edge and demand types shared by the rest of
//! the crate.

pub mod types;
pub mod graph;

// Re-export key types for easier access
pub use types::{Demand, DemandId, Edge, EdgeId, NodeId};
pub use graph::Topology;
