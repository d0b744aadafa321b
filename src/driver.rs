//! Seeded local-search loop.
//!
//! Feeds draws from a seeded [`StdRng`] into the solver's select, search
//! and apply operations. The engine itself stays free of randomness.

use log::{debug, info};
use rand::prelude::*;
use serde::Serialize;

use crate::config::RunConfig;
use crate::error::Result;
use crate::solver::LinkGuidedSolver;
use crate::topology::EdgeId;

/// Outcome of one [`run_local_search`] call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub initial_max_utilization: f64,
    pub final_max_utilization: f64,
    pub iterations: usize,
    pub moves_applied: usize,
    /// Iterations where the selected edge carried no demand
    pub skipped_no_demand: usize,
    /// Iterations where the search found no qualifying move
    pub skipped_no_move: usize,
    pub most_utilized_edge: EdgeId,
}

/// Run `config.iterations` select/search/apply steps on `solver`.
///
/// The first `config.warmup_iterations` steps target the most utilized
/// edge; later steps draw the target edge by utilization weight.
pub fn run_local_search(solver: &mut LinkGuidedSolver, config: &RunConfig) -> Result<RunReport> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let initial_max_utilization = solver.max_utilization();
    info!(
        "Starting local search: {} iterations ({} warm-up), max utilization {:.4}",
        config.iterations, config.warmup_iterations, initial_max_utilization
    );

    let mut moves_applied = 0;
    let mut skipped_no_demand = 0;
    let mut skipped_no_move = 0;

    for iteration in 0..config.iterations {
        let edge = if iteration < config.warmup_iterations {
            solver.most_utilized_edge()
        } else {
            solver.select_edge(rng.gen::<f64>())?
        };

        let Some(demand) = solver.select_demand(edge, rng.gen::<f64>())? else {
            skipped_no_demand += 1;
            continue;
        };

        let Some(mv) = solver.search(edge, demand, solver.max_utilization())? else {
            skipped_no_move += 1;
            continue;
        };

        if solver.apply_move(&mv)? {
            moves_applied += 1;
            debug!(
                "Iteration {}: applied {:?}, max utilization {:.4}",
                iteration,
                mv,
                solver.max_utilization()
            );
        }
    }

    let report = RunReport {
        initial_max_utilization,
        final_max_utilization: solver.max_utilization(),
        iterations: config.iterations,
        moves_applied,
        skipped_no_demand,
        skipped_no_move,
        most_utilized_edge: solver.most_utilized_edge(),
    };

    info!(
        "Local search finished: max utilization {:.4} -> {:.4} after {} moves",
        report.initial_max_utilization, report.final_max_utilization, report.moves_applied
    );

    Ok(report)
}
