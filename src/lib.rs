//! # srte-ls - Link-guided local search for segment-routing traffic engineering
//!
//! This library routes a set of bandwidth demands over a directed,
//! capacitated network using segment routing: each demand follows a short
//! list of waypoints, and each segment between consecutive waypoints is
//! forwarded along the shortest path. A local search edits waypoint lists to
//! lower the utilization of the most congested links.
//!
//! ## Architecture
//!
//! - `topology`: Immutable directed graph with validated edges
//! - `forwarding`: Per-source shortest-path trees and segment decomposition
//! - `srte`: Mutable routing state, path edit moves and incremental load updates
//! - `solver`: Link-guided edge/demand selection and neighborhood search
//! - `instance`: Problem description in caller units and solver construction
//! - `driver`: Seeded select/search/apply loop
//! - `synth`: Seeded synthetic instance generator
//! - `config` / `config_loader`: YAML configuration and CLI overrides
//! - `error`: Engine error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use srte_ls::{Instance, SolverConfig};
//!
//! let mut instance = Instance::new();
//! instance.add_edge(0, 1, 1, 10);
//! instance.add_edge(1, 2, 1, 10);
//! instance.add_edge(0, 2, 1, 10);
//! instance.add_demand(0, 2, 12);
//!
//! let mut solver = instance.build_solver(&SolverConfig::default())?;
//! let edge = solver.most_utilized_edge();
//! if let Some(demand) = solver.select_demand(edge, 0.5)? {
//!     if let Some(mv) = solver.search(edge, demand, solver.max_utilization())? {
//!         solver.apply_move(&mv)?;
//!     }
//! }
//! # Ok::<(), srte_ls::SrteError>(())
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return [`SrteError`] for malformed input and caller
//! misuse. Illegal moves and exhausted searches are ordinary outcomes
//! (`Ok(false)` / `Ok(None)`). The binary and the config loader report
//! through `color_eyre`.

pub mod config;
pub mod config_loader;
pub mod driver;
pub mod error;
pub mod forwarding;
pub mod instance;
pub mod solver;
pub mod srte;
pub mod synth;
pub mod topology;

pub use config::{Config, RunConfig, SolverConfig, SynthParams, ValidationError};
pub use driver::{run_local_search, RunReport};
pub use error::{Result, SrteError};
pub use forwarding::ForwardingGraphs;
pub use instance::{DemandSpec, EdgeSpec, Instance, InstanceSummary, SCALE};
pub use solver::LinkGuidedSolver;
pub use srte::{Move, MoveKind, MoveRecord, SrteState};
pub use topology::{Demand, DemandId, Edge, EdgeId, NodeId, Topology};
