//! Link-guided local search.
//!
//! Each step targets one congested edge and one demand routed over it, then
//! scans a fixed neighborhood of path edits for that demand. The solver
//! holds no randomness: edge and demand selection consume draws supplied by
//! the caller, so identical draw sequences replay identical trajectories.

use log::trace;

use super::selection::{check_draw, weighted_index};
use crate::config::{SolverConfig, ValidationError};
use crate::error::{Result, SrteError};
use crate::srte::{Move, SrteState};
use crate::topology::{DemandId, EdgeId, NodeId};

/// Search driver over an exclusively owned [`SrteState`]
#[derive(Debug, Clone)]
pub struct LinkGuidedSolver {
    state: SrteState,
    config: SolverConfig,
}

impl LinkGuidedSolver {
    /// Wrap `state`; the configured segment bound must match the state's.
    pub fn new(state: SrteState, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        if config.max_path_nodes() != state.max_path_nodes() {
            return Err(SrteError::Config(ValidationError::InvalidSolver(format!(
                "max_segments {} does not match the state's bound of {} waypoints",
                config.max_segments,
                state.max_path_nodes() - 2
            ))));
        }
        Ok(Self { state, config })
    }

    pub fn state(&self) -> &SrteState {
        &self.state
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn into_state(self) -> SrteState {
        self.state
    }

    pub fn load(&self, edge: EdgeId) -> Result<i64> {
        self.state.load(edge)
    }

    pub fn utilization(&self, edge: EdgeId) -> Result<f64> {
        self.state.utilization(edge)
    }

    /// Highest utilization over all edges
    pub fn max_utilization(&self) -> f64 {
        (0..self.state.edge_count())
            .map(|e| self.state.raw_utilization(e))
            .fold(0.0, f64::max)
    }

    /// Edge with the highest utilization; the lowest id wins ties
    pub fn most_utilized_edge(&self) -> EdgeId {
        let mut best = 0;
        let mut best_util = f64::NEG_INFINITY;
        for e in 0..self.state.edge_count() {
            let util = self.state.raw_utilization(e);
            if util > best_util {
                best = e;
                best_util = util;
            }
        }
        best
    }

    /// Pick an edge with weight `utilization^alpha` using draw `r`
    pub fn select_edge(&self, r: f64) -> Result<EdgeId> {
        check_draw(r)?;
        let alpha = self.config.alpha;
        let weights =
            (0..self.state.edge_count()).map(|e| self.state.raw_utilization(e).powf(alpha));
        weighted_index(weights, r).ok_or(SrteError::EmptyTopology)
    }

    /// Pick a demand routed over `edge` with weight `bandwidth^beta`.
    ///
    /// Candidates are taken in ascending demand id. Returns `Ok(None)` when
    /// no demand currently traverses `edge`.
    pub fn select_demand(&self, edge: EdgeId, r: f64) -> Result<Option<DemandId>> {
        check_draw(r)?;
        let routed = self.state.demands_on(edge)?;
        let beta = self.config.beta;
        let weights = routed.iter().map(|&(d, _)| (self.state.raw_bandwidth(d) as f64).powf(beta));
        Ok(weighted_index(weights, r).map(|i| routed[i].0))
    }

    /// Look for a path edit of `demand` that relieves `edge`.
    ///
    /// A candidate qualifies when the load of `edge` strictly decreases, its
    /// projected utilization is below `max_util`, and no edge whose load
    /// increases ends above the current network maximum. Candidates are
    /// scanned in a fixed order:
    ///
    /// 1. `Clear`, when the path holds at least two waypoints
    /// 2. `Remove`, by position
    /// 3. `Swap`, by position then node id
    /// 4. `Insert`, by position then node id, while the path has room
    ///
    /// The qualifying candidate with the lowest peak utilization over the
    /// edges it loads wins, then the lowest projected utilization of `edge`;
    /// remaining ties go to the earliest candidate in scan order. The state
    /// is never modified. `Ok(None)` means no qualifying move exists.
    pub fn search(&self, edge: EdgeId, demand: DemandId, max_util: f64) -> Result<Option<Move>> {
        let routed = self.state.demands_on(edge)?;
        let path = self.state.path(demand)?;
        if routed.binary_search_by_key(&demand, |&(d, _)| d).is_err() {
            return Ok(None);
        }

        let bandwidth = self.state.raw_bandwidth(demand);
        let network_max = self.max_utilization();
        let mut delta = Vec::new();
        let mut best: Option<(Move, f64, f64)> = None;

        for mv in self.neighborhood(demand, path) {
            let Some(splice) = self.state.plan_move(&mv)? else {
                continue;
            };
            if !self.state.splice_delta(demand, &splice, &mut delta) {
                continue;
            }
            let Some((peak, target_util)) =
                self.evaluate(edge, bandwidth, &delta, max_util, network_max)
            else {
                continue;
            };

            trace!("Candidate {:?}: peak {:.4}, target {:.4}", mv, peak, target_util);
            let improves = match best {
                None => true,
                Some((_, best_peak, best_target)) => {
                    peak < best_peak || (peak == best_peak && target_util < best_target)
                }
            };
            if improves {
                best = Some((mv, peak, target_util));
            }
        }

        Ok(best.map(|(mv, _, _)| mv))
    }

    /// Validate and apply `mv`; `Ok(false)` leaves the state untouched
    pub fn apply_move(&mut self, mv: &Move) -> Result<bool> {
        self.state.apply_move(mv)
    }

    /// Candidate moves for `demand` in scan order
    fn neighborhood(&self, demand: DemandId, path: &[NodeId]) -> Vec<Move> {
        let len = path.len();
        let node_count = self.state.topology().node_count();
        let fresh: Vec<NodeId> = (0..node_count).filter(|n| !path.contains(n)).collect();
        let interior = 1..len - 1;

        let mut moves = Vec::new();
        if len >= 4 {
            moves.push(Move::Clear { demand });
        }
        moves.extend(interior.clone().map(|position| Move::Remove { demand, position }));
        for position in interior {
            moves.extend(fresh.iter().map(|&node| Move::Swap { demand, position, node }));
        }
        if len < self.state.max_path_nodes() {
            for position in 1..len {
                moves.extend(fresh.iter().map(|&node| Move::Insert { demand, position, node }));
            }
        }
        moves
    }

    /// Score a candidate delta, or `None` if it does not qualify
    fn evaluate(
        &self,
        edge: EdgeId,
        bandwidth: i64,
        delta: &[(EdgeId, i64)],
        max_util: f64,
        network_max: f64,
    ) -> Option<(f64, f64)> {
        let index = delta.binary_search_by_key(&edge, |&(e, _)| e).ok()?;
        let target_count = delta[index].1;
        if target_count >= 0 {
            return None;
        }

        let target_util = self.state.projected_utilization(edge, target_count * bandwidth);
        if !(target_util < max_util) {
            return None;
        }

        let mut peak = 0.0f64;
        for &(e, count) in delta.iter().filter(|&&(_, count)| count > 0) {
            let util = self.state.projected_utilization(e, count * bandwidth);
            if util > network_max {
                return None;
            }
            peak = peak.max(util);
        }
        Some((peak, target_util))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::forwarding::ForwardingGraphs;
    use crate::topology::{Demand, Edge, Topology};

    /// Direct edge 0 -> 2 plus the 0 -> 1 -> 2 detour, all of capacity 10000
    fn triangle_solver(direct_cost: u32, demands: Vec<Demand>) -> LinkGuidedSolver {
        let topology = Topology::new(
            3,
            vec![
                Edge::new(0, 1, 1, 10_000),
                Edge::new(1, 2, 1, 10_000),
                Edge::new(0, 2, direct_cost, 10_000),
            ],
        )
        .unwrap();
        let forwarding = ForwardingGraphs::new(&topology);
        let state = SrteState::new(Arc::new(topology), Arc::new(forwarding), demands, 2).unwrap();
        LinkGuidedSolver::new(state, SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_search_splits_onto_detour() {
        let mut solver = triangle_solver(1, vec![Demand::new(0, 2, 12_000)]);
        assert_eq!(solver.utilization(2).unwrap(), 1.2);
        assert_eq!(solver.max_utilization(), 1.2);
        assert_eq!(solver.most_utilized_edge(), 2);

        let mv = solver.search(2, 0, 1.0).unwrap();
        assert_eq!(mv, Some(Move::Insert { demand: 0, position: 1, node: 1 }));
        assert!(solver.apply_move(&mv.unwrap()).unwrap());

        assert_eq!(solver.utilization(0).unwrap(), 1.2);
        assert_eq!(solver.utilization(1).unwrap(), 1.2);
        assert_eq!(solver.utilization(2).unwrap(), 0.0);
        assert!(solver.state().check_consistency());
    }

    #[test]
    fn test_search_can_undo_waypoint() {
        let mut solver = triangle_solver(1, vec![Demand::new(0, 2, 12_000)]);
        solver.apply_move(&Move::Insert { demand: 0, position: 1, node: 1 }).unwrap();

        // Moving back onto the direct edge only restores the old maximum
        let mv = solver.search(0, 0, 1.0).unwrap();
        assert_eq!(mv, Some(Move::Remove { demand: 0, position: 1 }));
    }

    #[test]
    fn test_search_respects_max_util() {
        let solver = triangle_solver(1, vec![Demand::new(0, 2, 12_000)]);
        // The target ends at 0.0, which is not below a cap of 0.0
        assert_eq!(solver.search(2, 0, 0.0).unwrap(), None);
    }

    #[test]
    fn test_search_rejects_raising_network_max() {
        // The detour already carries a heavier demand
        let solver = triangle_solver(1, vec![Demand::new(0, 2, 6_000), Demand::new(1, 2, 9_000)]);
        assert_eq!(solver.max_utilization(), 0.9);
        // Insert of node 1 would push 1 -> 2 to 1.5
        assert_eq!(solver.search(2, 0, 1.0).unwrap(), None);
    }

    /// Demand 0 -> 1 of 5000 with a direct edge and two detours:
    /// e0 0->1, e1 0->2, e2 2->1, e3 0->3, e4 3->1 (all cost 1)
    fn detour_solver(capacities: [i64; 5], path: &[NodeId]) -> LinkGuidedSolver {
        let endpoints = [(0, 1), (0, 2), (2, 1), (0, 3), (3, 1)];
        let edges = endpoints
            .iter()
            .zip(capacities)
            .map(|(&(src, dest), capacity)| Edge::new(src, dest, 1, capacity))
            .collect();
        let topology = Topology::new(4, edges).unwrap();
        let forwarding = ForwardingGraphs::new(&topology);
        let mut state = SrteState::new(
            Arc::new(topology),
            Arc::new(forwarding),
            vec![Demand::new(0, 1, 5_000)],
            2,
        )
        .unwrap();
        assert!(state.set_path(0, path).unwrap());
        LinkGuidedSolver::new(state, SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_search_prefers_lower_peak_insert() {
        // Equal detours: both inserts peak at 0.5, the earlier node wins
        let solver = detour_solver([5_000, 10_000, 10_000, 10_000, 10_000], &[0, 1]);
        assert_eq!(
            solver.search(0, 0, 1.0).unwrap(),
            Some(Move::Insert { demand: 0, position: 1, node: 2 })
        );

        // The detour via 2 would peak at 0.83, the one via 3 at 0.5
        let solver = detour_solver([5_000, 6_000, 10_000, 10_000, 10_000], &[0, 1]);
        assert_eq!(
            solver.search(0, 0, 1.0).unwrap(),
            Some(Move::Insert { demand: 0, position: 1, node: 3 })
        );
    }

    #[test]
    fn test_search_ranks_remove_against_swap() {
        // Remove loads e0, Swap to node 3 loads e3 and e4; both peak at 0.5
        let solver = detour_solver([10_000, 5_000, 10_000, 10_000, 10_000], &[0, 2, 1]);
        assert_eq!(solver.max_utilization(), 1.0);
        assert_eq!(
            solver.search(1, 0, 1.0).unwrap(),
            Some(Move::Remove { demand: 0, position: 1 })
        );

        // A tighter direct edge lets the later Swap win
        let solver = detour_solver([6_000, 5_000, 10_000, 10_000, 10_000], &[0, 2, 1]);
        assert_eq!(
            solver.search(1, 0, 1.0).unwrap(),
            Some(Move::Swap { demand: 0, position: 1, node: 3 })
        );
    }

    #[test]
    fn test_search_demand_not_on_edge() {
        let solver = triangle_solver(1, vec![Demand::new(0, 2, 12_000)]);
        assert_eq!(solver.search(0, 0, 1.0).unwrap(), None);
        assert_eq!(solver.search(7, 0, 1.0).unwrap_err(), SrteError::UnknownEdge(7));
        assert_eq!(solver.search(2, 4, 1.0).unwrap_err(), SrteError::UnknownDemand(4));
    }

    #[test]
    fn test_select_edge_and_demand() {
        let solver = triangle_solver(1, vec![Demand::new(0, 2, 12_000), Demand::new(0, 2, 3_000)]);
        // Only the direct edge carries load
        for r in [0.0, 0.4, 0.999] {
            assert_eq!(solver.select_edge(r).unwrap(), 2);
        }
        assert_eq!(solver.select_demand(0, 0.5).unwrap(), None);

        // Weights 12000^4 and 3000^4: demand 1 holds 1/257 of the mass
        assert_eq!(solver.select_demand(2, 0.0).unwrap(), Some(0));
        assert_eq!(solver.select_demand(2, 0.99).unwrap(), Some(0));
        assert_eq!(solver.select_demand(2, 0.999).unwrap(), Some(1));
        assert!(solver.select_demand(2, 1.0).is_err());
    }

    #[test]
    fn test_lowest_id_wins_ties() {
        let solver = triangle_solver(1, vec![Demand::new(0, 1, 5_000), Demand::new(1, 2, 5_000)]);
        assert_eq!(solver.most_utilized_edge(), 0);
    }

    #[test]
    fn test_config_must_match_state() {
        let solver = triangle_solver(1, vec![Demand::new(0, 2, 1_000)]);
        let state = solver.into_state();
        let config = SolverConfig { max_segments: 3, ..SolverConfig::default() };
        assert!(matches!(
            LinkGuidedSolver::new(state, config),
            Err(SrteError::Config(ValidationError::InvalidSolver(_)))
        ));
    }
}
