//! Structural invariants of a built forest.
//!
//! - Accepted edges never close a cycle.
//! - The forest holds `V - C` edges for `C` components.
//! - Accepted weights never decrease.
//! - Every finite death is the reciprocal weight of an accepted edge whose
//!   first endpoint is that vertex.
//! - At least `C` intervals stay unbounded.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DeathPolicy, ForestBuilder, SpanningForest};

use super::oracle::find_root;
use super::types::ForestFixture;

/// Builds the fixture under `policy` and checks every structural invariant.
pub(super) fn run_structural_invariants_property(
    fixture: &ForestFixture,
    policy: DeathPolicy,
) -> TestCaseResult {
    let forest = ForestBuilder::new()
        .with_death_policy(policy)
        .build(&fixture.graph())
        .map_err(|err| {
            TestCaseError::fail(format!(
                "build failed: {err} (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.vertex_count,
                fixture.edges.len(),
            ))
        })?;

    validate_acyclic(fixture.vertex_count, &forest)?;
    validate_edge_count(fixture.vertex_count, &forest)?;
    validate_ascending(&forest)?;
    validate_deaths(&forest)?;
    validate_unbounded(&forest)?;
    Ok(())
}

fn validate_acyclic(vertex_count: usize, forest: &SpanningForest<usize>) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (position, edge) in forest.edges().iter().enumerate() {
        let left = find_root(&mut parent, *edge.left());
        let right = find_root(&mut parent, *edge.right());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "forest edge {position} ({}, {}) closes a cycle",
                edge.left(),
                edge.right(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_edge_count(vertex_count: usize, forest: &SpanningForest<usize>) -> TestCaseResult {
    let expected = vertex_count - forest.component_count();
    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "expected {expected} forest edges for {vertex_count} vertices and {} components, got {}",
            forest.component_count(),
            forest.edges().len(),
        )));
    }
    Ok(())
}

fn validate_ascending(forest: &SpanningForest<usize>) -> TestCaseResult {
    for pair in forest.edges().windows(2) {
        if pair[0].weight() > pair[1].weight() {
            return Err(TestCaseError::fail(format!(
                "accepted weights decrease: {} then {}",
                pair[0].weight(),
                pair[1].weight(),
            )));
        }
    }
    Ok(())
}

fn validate_deaths(forest: &SpanningForest<usize>) -> TestCaseResult {
    for (vertex, interval) in forest.barcodes().finite() {
        let matches = forest
            .edges()
            .iter()
            .any(|edge| edge.left() == vertex && edge.weight().recip() == interval.death());
        if !matches {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex} dies at {} without a matching accepted edge",
                interval.death(),
            )));
        }
        if interval.birth() != 0.0 || interval.death() <= 0.0 {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex} has malformed interval {interval:?}",
            )));
        }
    }
    Ok(())
}

fn validate_unbounded(forest: &SpanningForest<usize>) -> TestCaseResult {
    let unbounded = forest.barcodes().unbounded_count();
    if unbounded < forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "{unbounded} unbounded intervals for {} components",
            forest.component_count(),
        )));
    }
    Ok(())
}
