//! Sequential reference sweep for the forest property tests.
//!
//! Uses a bare parent array with no balancing. Kruskal acceptance depends
//! only on connectivity, so the accepted edges and deaths must match the
//! builder exactly.

use crate::DeathPolicy;

use super::types::ForestFixture;

/// Output of the reference sweep.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleForest {
    /// Input positions of the accepted edges, in acceptance order.
    pub accepted: Vec<usize>,
    /// Death per vertex, `f64::INFINITY` when the vertex never died.
    pub deaths: Vec<f64>,
    /// Components left after the sweep.
    pub component_count: usize,
}

/// Runs Kruskal over the fixture under `policy`.
pub(super) fn sequential_barcodes(fixture: &ForestFixture, policy: DeathPolicy) -> OracleForest {
    let mut order: Vec<usize> = (0..fixture.edges.len()).collect();
    order.sort_by(|&a, &b| fixture.edges[a].2.total_cmp(&fixture.edges[b].2));

    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut deaths = vec![f64::INFINITY; fixture.vertex_count];
    let mut accepted = Vec::new();
    let mut component_count = fixture.vertex_count;

    for position in order {
        let (left, right, weight) = fixture.edges[position];
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root == right_root {
            continue;
        }
        parent[right_root] = left_root;
        component_count -= 1;
        accepted.push(position);
        let assigns = match policy {
            DeathPolicy::Overwrite => true,
            DeathPolicy::FirstAssignment => deaths[left].is_infinite(),
        };
        if assigns {
            deaths[left] = weight.recip();
        }
    }

    OracleForest {
        accepted,
        deaths,
        component_count,
    }
}

/// Path-halving find over a parent array.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}
