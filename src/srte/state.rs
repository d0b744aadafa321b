//! Mutable routing state.
//!
//! Holds the authoritative waypoint list of every demand and the load of
//! every edge. Every mutation is expressed as a splice of a demand's path:
//! only the segments touching the spliced range are decomposed, so an edit
//! costs time proportional to the affected path length rather than to the
//! size of the network or of the demand set.

use std::slice;
use std::sync::Arc;

use log::{debug, trace};

use super::moves::Move;
use crate::config::ValidationError;
use crate::error::{Result, SrteError};
use crate::forwarding::ForwardingGraphs;
use crate::topology::{Demand, DemandId, EdgeId, NodeId, Topology};

/// Replacement of the interior nodes `path[lo..hi]` of one demand's path.
///
/// `1 <= lo <= hi <= path.len() - 1`, so both endpoints always survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Splice<'a> {
    pub lo: usize,
    pub hi: usize,
    pub inserted: &'a [NodeId],
}

/// Routing state of one solver instance
#[derive(Debug, Clone)]
pub struct SrteState {
    topology: Arc<Topology>,
    forwarding: Arc<ForwardingGraphs>,
    demands: Vec<Demand>,
    paths: Vec<Vec<NodeId>>,
    loads: Vec<i64>,
    /// Demands routed over each edge, ascending by demand id, with the
    /// number of times the demand's decomposition traverses the edge
    edge_demands: Vec<Vec<(DemandId, u32)>>,
    max_path_nodes: usize,
}

impl SrteState {
    /// Route every demand on its direct `[src, dest]` path.
    ///
    /// # Arguments
    /// * `topology` - Topology the forwarding graphs were built from
    /// * `forwarding` - Shortest-path trees of `topology`
    /// * `demands` - Demands with fixed-point bandwidth
    /// * `max_segments` - Maximum number of intermediate waypoints per path
    ///
    /// # Returns
    /// * `Err(SrteError::Unreachable)` if a demand's destination cannot be reached
    /// * `Err(SrteError::InvalidDemand)` for out-of-range, degenerate or empty demands
    pub fn new(
        topology: Arc<Topology>,
        forwarding: Arc<ForwardingGraphs>,
        demands: Vec<Demand>,
        max_segments: usize,
    ) -> Result<Self> {
        if forwarding.node_count() != topology.node_count() {
            return Err(SrteError::ForwardingMismatch {
                forwarding: forwarding.node_count(),
                topology: topology.node_count(),
            });
        }

        let node_count = topology.node_count();
        for (id, demand) in demands.iter().enumerate() {
            if demand.src >= node_count || demand.dest >= node_count {
                return Err(SrteError::InvalidDemand {
                    demand: id,
                    reason: format!(
                        "endpoints {} -> {} exceed the {} topology nodes",
                        demand.src, demand.dest, node_count
                    ),
                });
            }
            if demand.src == demand.dest {
                return Err(SrteError::InvalidDemand {
                    demand: id,
                    reason: format!("source and destination are both node {}", demand.src),
                });
            }
            if demand.bandwidth <= 0 {
                return Err(SrteError::InvalidDemand {
                    demand: id,
                    reason: format!("bandwidth must be positive, got {}", demand.bandwidth),
                });
            }
            if !forwarding.is_reachable(demand.src, demand.dest) {
                return Err(SrteError::Unreachable {
                    src: demand.src,
                    dest: demand.dest,
                    demand: id,
                });
            }
        }

        let max_path_nodes = max_segments.checked_add(2).ok_or_else(|| {
            SrteError::Config(ValidationError::InvalidSolver(format!(
                "max_segments {} overflows the path length bound",
                max_segments
            )))
        })?;
        check_load_bound(&demands, max_path_nodes.min(node_count))?;

        let edge_count = topology.edge_count();
        let mut state = Self {
            paths: demands.iter().map(|d| vec![d.src, d.dest]).collect(),
            loads: vec![0; edge_count],
            edge_demands: vec![Vec::new(); edge_count],
            topology,
            forwarding,
            demands,
            max_path_nodes,
        };

        for id in 0..state.demands.len() {
            let Demand { src, dest, bandwidth } = state.demands[id];
            let edges: Vec<EdgeId> = state.forwarding.walk(src, dest).collect();
            for e in edges {
                state.loads[e] += bandwidth;
                adjust_edge_demand(&mut state.edge_demands[e], id, 1);
            }
        }

        debug!(
            "Initialized SRTE state: {} demands over {} edges (max {} nodes per path)",
            state.demands.len(),
            edge_count,
            state.max_path_nodes
        );

        Ok(state)
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn forwarding(&self) -> &ForwardingGraphs {
        &self.forwarding
    }

    pub fn edge_count(&self) -> usize {
        self.loads.len()
    }

    pub fn demand_count(&self) -> usize {
        self.demands.len()
    }

    /// Maximum number of nodes on a path, endpoints included
    pub fn max_path_nodes(&self) -> usize {
        self.max_path_nodes
    }

    pub fn demand(&self, demand: DemandId) -> Result<&Demand> {
        self.demands.get(demand).ok_or(SrteError::UnknownDemand(demand))
    }

    /// Current waypoint list of `demand`, endpoints included
    pub fn path(&self, demand: DemandId) -> Result<&[NodeId]> {
        self.paths
            .get(demand)
            .map(Vec::as_slice)
            .ok_or(SrteError::UnknownDemand(demand))
    }

    pub fn paths(&self) -> &[Vec<NodeId>] {
        &self.paths
    }

    /// Current load of `edge` in fixed-point units
    pub fn load(&self, edge: EdgeId) -> Result<i64> {
        self.loads.get(edge).copied().ok_or(SrteError::UnknownEdge(edge))
    }

    pub fn loads(&self) -> &[i64] {
        &self.loads
    }

    pub fn capacity(&self, edge: EdgeId) -> Result<i64> {
        Ok(self.topology.edge(edge)?.capacity)
    }

    /// `load / capacity` of `edge`
    pub fn utilization(&self, edge: EdgeId) -> Result<f64> {
        let load = self.load(edge)?;
        Ok(load as f64 / self.capacity(edge)? as f64)
    }

    /// Demands whose decomposition traverses `edge`, ascending by id, with
    /// the traversal count
    pub fn demands_on(&self, edge: EdgeId) -> Result<&[(DemandId, u32)]> {
        self.edge_demands
            .get(edge)
            .map(Vec::as_slice)
            .ok_or(SrteError::UnknownEdge(edge))
    }

    /// Replace the whole path of `demand`.
    ///
    /// Returns `Ok(false)` and leaves the state untouched when the path has
    /// the wrong endpoints, exceeds the length bound, repeats a node or
    /// contains an unreachable segment.
    pub fn set_path(&mut self, demand: DemandId, new_path: &[NodeId]) -> Result<bool> {
        let current = self.demand(demand)?;
        if let Some(&node) = new_path.iter().find(|&&n| n >= self.topology.node_count()) {
            return Err(SrteError::UnknownNode(node));
        }

        let (src, dest) = (current.src, current.dest);
        if new_path.len() < 2
            || new_path.len() > self.max_path_nodes
            || new_path[0] != src
            || new_path[new_path.len() - 1] != dest
            || has_duplicates(new_path)
        {
            return Ok(false);
        }

        let old_len = self.paths[demand].len();
        let splice = Splice {
            lo: 1,
            hi: old_len - 1,
            inserted: &new_path[1..new_path.len() - 1],
        };
        Ok(self.try_splice(demand, splice))
    }

    /// Validate `mv` and apply it if legal.
    ///
    /// Returns `Ok(false)` with the state untouched for illegal moves and
    /// for [`Move::Unknown`]. Unknown demand or node ids are errors.
    pub fn apply_move(&mut self, mv: &Move) -> Result<bool> {
        let Some(splice) = self.plan_move(mv)? else {
            return Ok(false);
        };
        let Some(demand) = mv.demand() else {
            return Ok(false);
        };

        let applied = self.try_splice(demand, splice);
        if applied {
            debug!("Applied {:?}; path is now {:?}", mv, self.paths[demand]);
        } else {
            trace!("Rejected {:?}: unreachable segment", mv);
        }
        Ok(applied)
    }

    /// Check the structural legality of `mv` and translate it into a splice.
    ///
    /// Reachability of the new segments is checked later by
    /// [`SrteState::splice_delta`].
    pub(crate) fn plan_move<'m>(&self, mv: &'m Move) -> Result<Option<Splice<'m>>> {
        let Some(demand) = mv.demand() else {
            return Ok(None);
        };
        let path = self.path(demand)?;
        let len = path.len();

        let splice = match mv {
            Move::Insert { position, node, .. } => {
                let p = *position;
                if p < 1 || p >= len || len >= self.max_path_nodes || !self.is_fresh(path, *node)? {
                    return Ok(None);
                }
                Splice {
                    lo: p,
                    hi: p,
                    inserted: slice::from_ref(node),
                }
            }
            Move::Remove { position, .. } => {
                let p = *position;
                if p < 1 || p + 1 >= len {
                    return Ok(None);
                }
                Splice {
                    lo: p,
                    hi: p + 1,
                    inserted: &[],
                }
            }
            Move::Swap { position, node, .. } => {
                let p = *position;
                if p < 1 || p + 1 >= len || !self.is_fresh(path, *node)? {
                    return Ok(None);
                }
                Splice {
                    lo: p,
                    hi: p + 1,
                    inserted: slice::from_ref(node),
                }
            }
            Move::Clear { .. } => {
                if len <= 2 {
                    return Ok(None);
                }
                Splice {
                    lo: 1,
                    hi: len - 1,
                    inserted: &[],
                }
            }
            Move::Unknown => return Ok(None),
        };

        Ok(Some(splice))
    }

    /// Net per-edge traversal-count change of applying `splice` to `demand`.
    ///
    /// Fills `out` with `(edge, count_delta)` pairs sorted by edge id, zero
    /// deltas removed. Returns `false` if a new segment is unreachable.
    pub(crate) fn splice_delta(
        &self,
        demand: DemandId,
        splice: &Splice<'_>,
        out: &mut Vec<(EdgeId, i64)>,
    ) -> bool {
        out.clear();
        let path = &self.paths[demand];

        for pair in path[splice.lo - 1..=splice.hi].windows(2) {
            out.extend(self.forwarding.walk(pair[0], pair[1]).map(|e| (e, -1)));
        }

        let mut previous = path[splice.lo - 1];
        for &node in splice.inserted.iter().chain(slice::from_ref(&path[splice.hi])) {
            if !self.forwarding.is_reachable(previous, node) {
                return false;
            }
            out.extend(self.forwarding.walk(previous, node).map(|e| (e, 1)));
            previous = node;
        }

        out.sort_unstable_by_key(|&(e, _)| e);
        let mut write = 0;
        for read in 0..out.len() {
            let (edge, delta) = out[read];
            if write > 0 && out[write - 1].0 == edge {
                out[write - 1].1 += delta;
            } else {
                out[write] = (edge, delta);
                write += 1;
            }
        }
        out.truncate(write);
        out.retain(|&(_, delta)| delta != 0);
        true
    }

    /// Rebuild every edge load from the current paths
    pub fn recompute_loads(&self) -> Vec<i64> {
        let mut loads = vec![0; self.loads.len()];
        for (demand, path) in self.demands.iter().zip(&self.paths) {
            for pair in path.windows(2) {
                for e in self.forwarding.walk(pair[0], pair[1]) {
                    loads[e] += demand.bandwidth;
                }
            }
        }
        loads
    }

    /// Whether the maintained loads and demand index match a full rebuild
    pub fn check_consistency(&self) -> bool {
        if self.recompute_loads() != self.loads {
            return false;
        }

        let mut index: Vec<Vec<(DemandId, u32)>> = vec![Vec::new(); self.loads.len()];
        for (id, path) in self.paths.iter().enumerate() {
            for pair in path.windows(2) {
                for e in self.forwarding.walk(pair[0], pair[1]) {
                    adjust_edge_demand(&mut index[e], id, 1);
                }
            }
        }
        index == self.edge_demands
    }

    pub(crate) fn raw_bandwidth(&self, demand: DemandId) -> i64 {
        self.demands[demand].bandwidth
    }

    pub(crate) fn raw_utilization(&self, edge: EdgeId) -> f64 {
        self.loads[edge] as f64 / self.topology.raw_edge(edge).capacity as f64
    }

    /// Utilization of `edge` once its load changes by `load_delta`
    pub(crate) fn projected_utilization(&self, edge: EdgeId, load_delta: i64) -> f64 {
        (self.loads[edge] + load_delta) as f64 / self.topology.raw_edge(edge).capacity as f64
    }

    fn is_fresh(&self, path: &[NodeId], node: NodeId) -> Result<bool> {
        if node >= self.topology.node_count() {
            return Err(SrteError::UnknownNode(node));
        }
        Ok(!path.contains(&node))
    }

    /// Apply `splice` if all of its segments are reachable
    fn try_splice(&mut self, demand: DemandId, splice: Splice<'_>) -> bool {
        let mut delta = Vec::new();
        if !self.splice_delta(demand, &splice, &mut delta) {
            return false;
        }

        let bandwidth = self.demands[demand].bandwidth;
        for &(edge, count) in &delta {
            self.loads[edge] += count * bandwidth;
            adjust_edge_demand(&mut self.edge_demands[edge], demand, count);
        }
        self.paths[demand].splice(splice.lo..splice.hi, splice.inserted.iter().copied());
        true
    }
}

/// Reject demand sets whose worst-case edge load does not fit in an `i64`.
///
/// A path of at most `path_nodes` distinct nodes has `path_nodes - 1`
/// segments, and each segment crosses an edge at most once, so no edge load
/// can exceed the total bandwidth times that segment count. Checking the
/// bound once keeps every later load update free of overflow.
fn check_load_bound(demands: &[Demand], path_nodes: usize) -> Result<()> {
    let segments = i64::try_from(path_nodes.saturating_sub(1)).unwrap_or(i64::MAX);
    let mut total: i64 = 0;
    for demand in demands {
        total = total
            .checked_add(demand.bandwidth)
            .and_then(|t| t.checked_mul(segments).map(|_| t))
            .ok_or(SrteError::ScaleOverflow { value: demand.bandwidth })?;
    }
    Ok(())
}

/// Add `delta` traversals of `demand` to one edge's sorted demand list
fn adjust_edge_demand(list: &mut Vec<(DemandId, u32)>, demand: DemandId, delta: i64) {
    match list.binary_search_by_key(&demand, |&(d, _)| d) {
        Ok(i) => {
            let count = i64::from(list[i].1) + delta;
            if count <= 0 {
                list.remove(i);
            } else {
                list[i].1 = count as u32;
            }
        }
        Err(i) => {
            if delta > 0 {
                list.insert(i, (demand, delta as u32));
            }
        }
    }
}

fn has_duplicates(path: &[NodeId]) -> bool {
    path.iter().enumerate().any(|(i, node)| path[i + 1..].contains(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Edge;

    /// 0 -> 1 -> 2 (cost 1 each) and a costly 0 -> 2 shortcut, plus 2 -> 0
    fn triangle_state(bandwidth: i64) -> SrteState {
        let topology = Topology::new(
            3,
            vec![
                Edge::new(0, 1, 1, 10_000),
                Edge::new(1, 2, 1, 10_000),
                Edge::new(0, 2, 1, 10_000),
                Edge::new(2, 0, 1, 10_000),
            ],
        )
        .unwrap();
        let forwarding = ForwardingGraphs::new(&topology);
        SrteState::new(
            Arc::new(topology),
            Arc::new(forwarding),
            vec![Demand::new(0, 2, bandwidth), Demand::new(2, 1, 500)],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_loads() {
        let state = triangle_state(12_000);

        assert_eq!(state.path(0).unwrap(), &[0, 2]);
        assert_eq!(state.loads(), &[500, 0, 12_000, 500]);
        assert_eq!(state.utilization(2).unwrap(), 1.2);
        assert_eq!(state.demands_on(0).unwrap(), &[(1, 1)]);
        assert_eq!(state.demands_on(2).unwrap(), &[(0, 1)]);
        assert!(state.check_consistency());
    }

    #[test]
    fn test_insert_moves_load() {
        let mut state = triangle_state(12_000);

        let applied = state.apply_move(&Move::Insert { demand: 0, position: 1, node: 1 }).unwrap();
        assert!(applied);
        assert_eq!(state.path(0).unwrap(), &[0, 1, 2]);
        assert_eq!(state.loads(), &[12_500, 12_000, 0, 500]);
        assert_eq!(state.demands_on(0).unwrap(), &[(0, 1), (1, 1)]);
        assert!(state.demands_on(2).unwrap().is_empty());
        assert!(state.check_consistency());
    }

    #[test]
    fn test_illegal_moves_leave_state_untouched() {
        let mut state = triangle_state(1_000);
        let before = state.clone();

        let illegal = [
            Move::Insert { demand: 0, position: 0, node: 1 },
            Move::Insert { demand: 0, position: 2, node: 1 },
            Move::Insert { demand: 0, position: 1, node: 2 },
            Move::Remove { demand: 0, position: 1 },
            Move::Swap { demand: 0, position: 1, node: 1 },
            Move::Clear { demand: 0 },
            Move::Unknown,
        ];
        for mv in &illegal {
            assert!(!state.apply_move(mv).unwrap(), "{:?} should be rejected", mv);
            assert_eq!(state.paths(), before.paths());
            assert_eq!(state.loads(), before.loads());
        }
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let mut state = triangle_state(1_000);

        assert_eq!(state.load(9).unwrap_err(), SrteError::UnknownEdge(9));
        assert_eq!(state.path(5).unwrap_err(), SrteError::UnknownDemand(5));
        assert_eq!(
            state.apply_move(&Move::Remove { demand: 5, position: 1 }).unwrap_err(),
            SrteError::UnknownDemand(5)
        );
        assert_eq!(
            state.apply_move(&Move::Insert { demand: 0, position: 1, node: 3 }).unwrap_err(),
            SrteError::UnknownNode(3)
        );
    }

    #[test]
    fn test_length_bound() {
        let topology = Topology::new(
            4,
            vec![
                Edge::new(0, 1, 1, 100),
                Edge::new(1, 2, 1, 100),
                Edge::new(2, 3, 1, 100),
                Edge::new(3, 0, 1, 100),
            ],
        )
        .unwrap();
        let forwarding = ForwardingGraphs::new(&topology);
        let demands = vec![Demand::new(0, 3, 10)];
        let mut state =
            SrteState::new(Arc::new(topology), Arc::new(forwarding), demands, 1).unwrap();

        assert!(state.apply_move(&Move::Insert { demand: 0, position: 1, node: 1 }).unwrap());
        assert!(!state.apply_move(&Move::Insert { demand: 0, position: 1, node: 2 }).unwrap());
        assert_eq!(state.path(0).unwrap(), &[0, 1, 3]);
    }

    #[test]
    fn test_set_path() {
        let mut state = triangle_state(1_000);

        assert!(state.set_path(0, &[0, 1, 2]).unwrap());
        assert_eq!(state.loads(), &[1_500, 1_000, 0, 500]);

        assert!(!state.set_path(0, &[1, 2]).unwrap());
        assert!(!state.set_path(0, &[0, 1, 0, 2]).unwrap());
        assert!(!state.set_path(0, &[0, 1, 2, 0, 2]).unwrap());
        assert_eq!(state.set_path(0, &[0, 7, 2]).unwrap_err(), SrteError::UnknownNode(7));

        assert!(state.set_path(0, &[0, 2]).unwrap());
        assert_eq!(state.loads(), &[500, 0, 1_000, 500]);
        assert!(state.check_consistency());
    }

    #[test]
    fn test_repeated_edge_counts_twice() {
        // Edge 1 -> 2 is the only bridge: both 0 -> 3 and 3 -> 4 cross it
        let topology = Topology::new(
            5,
            vec![
                Edge::new(0, 1, 1, 100),
                Edge::new(1, 2, 1, 100),
                Edge::new(2, 3, 1, 100),
                Edge::new(3, 1, 1, 100),
                Edge::new(2, 4, 1, 100),
            ],
        )
        .unwrap();
        let forwarding = ForwardingGraphs::new(&topology);
        let demands = vec![Demand::new(0, 4, 30)];
        let mut state =
            SrteState::new(Arc::new(topology), Arc::new(forwarding), demands, 2).unwrap();
        assert_eq!(state.loads(), &[30, 30, 0, 0, 30]);

        assert!(state.apply_move(&Move::Insert { demand: 0, position: 1, node: 3 }).unwrap());
        assert_eq!(state.loads(), &[30, 60, 30, 30, 30]);
        assert_eq!(state.demands_on(1).unwrap(), &[(0, 2)]);
        assert!(state.check_consistency());

        assert!(state.apply_move(&Move::Remove { demand: 0, position: 1 }).unwrap());
        assert_eq!(state.loads(), &[30, 30, 0, 0, 30]);
        assert_eq!(state.demands_on(1).unwrap(), &[(0, 1)]);
    }

    #[test]
    fn test_unreachable_demand_fails_construction() {
        let edges = vec![Edge::new(0, 1, 1, 10), Edge::new(1, 2, 1, 10)];
        let topology = Topology::new(3, edges).unwrap();
        let forwarding = ForwardingGraphs::new(&topology);

        let err = SrteState::new(
            Arc::new(topology),
            Arc::new(forwarding),
            vec![Demand::new(0, 2, 5), Demand::new(2, 0, 5)],
            2,
        )
        .unwrap_err();
        assert_eq!(err, SrteError::Unreachable { src: 2, dest: 0, demand: 1 });
    }

    fn triangle_with(demands: Vec<Demand>, max_segments: usize) -> Result<SrteState> {
        let topology = Topology::new(
            3,
            vec![
                Edge::new(0, 1, 1, 10_000),
                Edge::new(1, 2, 1, 10_000),
                Edge::new(0, 2, 1, 10_000),
                Edge::new(2, 0, 1, 10_000),
            ],
        )?;
        let forwarding = ForwardingGraphs::new(&topology);
        SrteState::new(Arc::new(topology), Arc::new(forwarding), demands, max_segments)
    }

    #[test]
    fn test_oversized_max_segments_is_an_error() {
        let err = triangle_with(vec![Demand::new(0, 2, 10)], usize::MAX).unwrap_err();
        assert!(matches!(err, SrteError::Config(ValidationError::InvalidSolver(_))));

        let state = triangle_with(vec![Demand::new(0, 2, 10)], usize::MAX - 2).unwrap();
        assert_eq!(state.max_path_nodes(), usize::MAX);
    }

    #[test]
    fn test_load_bound_counts_every_segment() {
        // Three distinct nodes allow two segments, which may both cross one edge
        let half = i64::MAX / 2;
        assert!(triangle_with(vec![Demand::new(0, 2, half)], 2).is_ok());
        assert_eq!(
            triangle_with(vec![Demand::new(0, 2, half + 1)], 2).unwrap_err(),
            SrteError::ScaleOverflow { value: half + 1 }
        );

        // A single segment only needs the bandwidth sum to fit
        assert!(triangle_with(vec![Demand::new(0, 2, half + 1)], 0).is_ok());
        let demands = vec![Demand::new(0, 2, half + 1), Demand::new(2, 1, half + 1)];
        assert_eq!(
            triangle_with(demands, 0).unwrap_err(),
            SrteError::ScaleOverflow { value: half + 1 }
        );
    }

    #[test]
    fn test_invalid_demands() {
        let topology = Arc::new(Topology::new(2, vec![Edge::new(0, 1, 1, 10)]).unwrap());
        let forwarding = Arc::new(ForwardingGraphs::new(&topology));

        for demand in [Demand::new(0, 0, 5), Demand::new(0, 1, 0), Demand::new(0, 4, 5)] {
            let err = SrteState::new(topology.clone(), forwarding.clone(), vec![demand], 2)
                .unwrap_err();
            assert!(matches!(err, SrteError::InvalidDemand { demand: 0, .. }));
        }
    }

    #[test]
    fn test_splice_delta_merges_edges() {
        let state = triangle_state(1_000);
        let mv = Move::Insert { demand: 0, position: 1, node: 1 };
        let splice = state.plan_move(&mv).unwrap().unwrap();

        let mut delta = Vec::new();
        assert!(state.splice_delta(0, &splice, &mut delta));
        assert_eq!(delta, vec![(0, 1), (1, 1), (2, -1)]);
    }

    #[test]
    fn test_adjust_edge_demand() {
        let mut list = vec![(1, 1), (4, 2)];
        adjust_edge_demand(&mut list, 3, 1);
        adjust_edge_demand(&mut list, 4, -1);
        adjust_edge_demand(&mut list, 1, -1);
        assert_eq!(list, vec![(3, 1), (4, 1)]);
    }
}
