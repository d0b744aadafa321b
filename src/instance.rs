//! Problem instances in caller units.
//!
//! An [`Instance`] collects edges and demands as the caller describes them
//! (integer capacities and traffic) and converts them into the fixed-point
//! engine types on [`Instance::build_solver`].

use std::fmt;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::{Result, SrteError};
use crate::forwarding::ForwardingGraphs;
use crate::solver::LinkGuidedSolver;
use crate::srte::SrteState;
use crate::topology::{Demand, Edge, NodeId, Topology};

/// Fixed-point factor applied to capacities and traffic
pub const SCALE: i64 = 1000;

/// A directed edge in caller units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub src: NodeId,
    pub dest: NodeId,
    pub cost: u32,
    pub capacity: i64,
}

/// A demand in caller units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSpec {
    pub src: NodeId,
    pub dest: NodeId,
    pub traffic: i64,
}

/// Edge and demand lists describing one routing problem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Explicit node count; inferred from the edges when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub demands: Vec<DemandSpec>,
}

/// Headline figures of an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstanceSummary {
    pub nodes: usize,
    pub edges: usize,
    pub demands: usize,
    pub total_traffic: i64,
    pub total_capacity: i64,
}

impl fmt::Display for InstanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} edges, {} demands (traffic {}, capacity {})",
            self.nodes, self.edges, self.demands, self.total_traffic, self.total_capacity
        )
    }
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the node count instead of inferring it from the edges
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = Some(node_count);
        self
    }

    pub fn add_edge(&mut self, src: NodeId, dest: NodeId, cost: u32, capacity: i64) {
        self.edges.push(EdgeSpec { src, dest, cost, capacity });
    }

    pub fn add_demand(&mut self, src: NodeId, dest: NodeId, traffic: i64) {
        self.demands.push(DemandSpec { src, dest, traffic });
    }

    /// Explicit node count, or one past the largest edge endpoint
    pub fn node_count(&self) -> usize {
        self.node_count.unwrap_or_else(|| {
            self.edges
                .iter()
                .map(|e| e.src.max(e.dest) + 1)
                .max()
                .unwrap_or(0)
        })
    }

    pub fn summary(&self) -> InstanceSummary {
        InstanceSummary {
            nodes: self.node_count(),
            edges: self.edges.len(),
            demands: self.demands.len(),
            total_traffic: self.demands.iter().map(|d| d.traffic).fold(0, i64::saturating_add),
            total_capacity: self.edges.iter().map(|e| e.capacity).fold(0, i64::saturating_add),
        }
    }

    /// Validate the edges and convert capacities to fixed point
    pub fn build_topology(&self) -> Result<Topology> {
        let edges = self
            .edges
            .iter()
            .map(|e| Ok(Edge::new(e.src, e.dest, e.cost, scale(e.capacity)?)))
            .collect::<Result<Vec<_>>>()?;
        Topology::new(self.node_count(), edges)
    }

    /// Demands with traffic converted to fixed point
    pub fn scaled_demands(&self) -> Result<Vec<Demand>> {
        self.demands
            .iter()
            .map(|d| Ok(Demand::new(d.src, d.dest, scale(d.traffic)?)))
            .collect()
    }

    /// Build the topology, forwarding graphs and initial state, and wrap
    /// them in a solver.
    pub fn build_solver(&self, config: &SolverConfig) -> Result<LinkGuidedSolver> {
        config.validate()?;
        let topology = self.build_topology()?;
        let forwarding = ForwardingGraphs::new(&topology);
        let state = SrteState::new(
            Arc::new(topology),
            Arc::new(forwarding),
            self.scaled_demands()?,
            config.max_segments,
        )?;

        info!("Built solver for instance with {}", self.summary());
        LinkGuidedSolver::new(state, config.clone())
    }
}

fn scale(value: i64) -> Result<i64> {
    value.checked_mul(SCALE).ok_or(SrteError::ScaleOverflow { value })
}
