use std::sync::Arc;

use barcode_core::{BarcodeError, BarcodeErrorCode, SortStrategy};
use rstest::rstest;

#[rstest]
#[case(
    BarcodeError::UnregisteredVertex { vertex: Arc::from("\"z\"") },
    BarcodeErrorCode::UnregisteredVertex,
    "BARCODE_UNREGISTERED_VERTEX",
)]
#[case(
    BarcodeError::NonPositiveWeight {
        left: Arc::from("1"),
        right: Arc::from("2"),
        weight: 0.0,
    },
    BarcodeErrorCode::NonPositiveWeight,
    "BARCODE_NON_POSITIVE_WEIGHT",
)]
#[case(
    BarcodeError::NonFiniteWeight { left: Arc::from("1"), right: Arc::from("2") },
    BarcodeErrorCode::NonFiniteWeight,
    "BARCODE_NON_FINITE_WEIGHT",
)]
#[case(
    BarcodeError::DeathOverflow {
        left: Arc::from("1"),
        right: Arc::from("2"),
        weight: 1e-310,
    },
    BarcodeErrorCode::DeathOverflow,
    "BARCODE_DEATH_OVERFLOW",
)]
#[case(
    BarcodeError::StrategyUnavailable { requested: SortStrategy::Parallel },
    BarcodeErrorCode::StrategyUnavailable,
    "BARCODE_STRATEGY_UNAVAILABLE",
)]
#[case(
    BarcodeError::LockPoisoned { resource: "shared disjoint set" },
    BarcodeErrorCode::LockPoisoned,
    "BARCODE_LOCK_POISONED",
)]
fn returns_expected_code(
    #[case] error: BarcodeError,
    #[case] expected: BarcodeErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(expected.to_string(), text);
}

#[rstest]
#[case(
    BarcodeError::UnregisteredVertex { vertex: Arc::from("\"z\"") },
    "vertex \"z\" is not registered",
)]
#[case(
    BarcodeError::NonPositiveWeight {
        left: Arc::from("\"a\""),
        right: Arc::from("\"b\""),
        weight: -2.5,
    },
    "edge (\"a\", \"b\") has non-positive weight -2.5",
)]
#[case(
    BarcodeError::LockPoisoned { resource: "shared disjoint set" },
    "lock for shared disjoint set is poisoned",
)]
fn messages_name_the_offending_input(#[case] error: BarcodeError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}
