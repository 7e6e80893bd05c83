//! Graph generators for the forest property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{ForestFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;

/// Generates fixtures across every weight distribution.
pub(super) fn forest_fixture_strategy() -> impl Strategy<Value = ForestFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicit distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> ForestFixture {
    match distribution {
        WeightDistribution::Unique => {
            probabilistic_graph(rng, distribution, |r| r.gen_range(0.1..100.0))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            probabilistic_graph(rng, distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse_graph(rng),
        WeightDistribution::Disconnected => disconnected_graph(rng),
    }
}

fn probabilistic_graph(
    rng: &mut SmallRng,
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> ForestFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability: f64 = rng.gen_range(0.1..=0.6);
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                // Alternate orientation so the first endpoint is not always
                // the smaller label.
                let pair = if rng.gen_bool(0.5) {
                    (left, right)
                } else {
                    (right, left)
                };
                edges.push((pair.0, pair.1, weight(rng)));
            }
        }
    }
    ForestFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn sparse_graph(rng: &mut SmallRng) -> ForestFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    for slot in (1..order.len()).rev() {
        order.swap(slot, rng.gen_range(0..=slot));
    }
    let mut edges: Vec<(usize, usize, f64)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0.1..100.0)))
        .collect();
    // Extra edges may repeat a pair or form a self-loop.
    for _ in 0..rng.gen_range(0..=vertex_count) {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        edges.push((left, right, rng.gen_range(0.1..100.0)));
    }
    ForestFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn disconnected_graph(rng: &mut SmallRng) -> ForestFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        for left in offset..offset + size {
            for right in (left + 1)..offset + size {
                if rng.gen_bool(0.5) {
                    edges.push((left, right, rng.gen_range(0.1..100.0)));
                }
            }
        }
        offset += size;
    }
    ForestFixture {
        vertex_count: offset,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Disconnected),
        ]
    }
}
