//! Seeded synthetic instances.
//!
//! A bidirectional ring over all nodes keeps every node pair reachable, so
//! every generated demand can be routed. Random chords add alternative
//! routes for the search to exploit.

use log::debug;
use rand::prelude::*;

use crate::config::SynthParams;
use crate::instance::Instance;

/// Generate an instance from `params`; the same seed yields the same instance.
///
/// `params` should have passed [`SynthParams::validate`].
pub fn generate(params: &SynthParams, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = params.nodes;
    let mut instance = Instance::new().with_node_count(n);

    for node in 0..n {
        let next = (node + 1) % n;
        if next == node {
            continue;
        }
        let capacity = rng.gen_range(params.min_capacity..=params.max_capacity);
        let cost = rng.gen_range(1..=params.max_cost);
        instance.add_edge(node, next, cost, capacity);
        if n > 2 {
            instance.add_edge(next, node, cost, capacity);
        }
    }

    if n >= 2 {
        for _ in 0..params.chords {
            let (src, dest) = distinct_pair(&mut rng, n);
            let capacity = rng.gen_range(params.min_capacity..=params.max_capacity);
            let cost = rng.gen_range(1..=params.max_cost);
            instance.add_edge(src, dest, cost, capacity);
        }

        for _ in 0..params.demands {
            let (src, dest) = distinct_pair(&mut rng, n);
            let traffic = rng.gen_range(1..=params.max_traffic);
            instance.add_demand(src, dest, traffic);
        }
    }

    debug!("Generated synthetic instance with seed {}: {}", seed, instance.summary());
    instance
}

fn distinct_pair(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let src = rng.gen_range(0..n);
    let offset = rng.gen_range(1..n);
    (src, (src + offset) % n)
}
