use std::io::Write;

use barcode_core::{WeightedGraph, kruskal_with_barcodes};
use rstest::rstest;

use super::{EdgeListColumns, EdgeListError, EdgeListErrorCode, EdgeListProvider};

fn load(csv: &str) -> Result<EdgeListProvider, EdgeListError> {
    EdgeListProvider::try_from_reader("test", csv.as_bytes(), &EdgeListColumns::default())
}

#[rstest]
fn rows_become_edges_in_file_order() {
    let provider = load("Source,Target,weight\nA,B,1.0\nB,C,2.0\nA,C,0.5\n").expect("valid csv");
    let edges: Vec<(&str, &str, f64)> = provider
        .edges()
        .iter()
        .map(|edge| (edge.left().as_str(), edge.right().as_str(), edge.weight()))
        .collect();
    assert_eq!(
        edges,
        vec![("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 0.5)]
    );
    assert_eq!(provider.vertices(), ["A", "B", "C"]);
}

#[rstest]
fn extra_columns_and_whitespace_are_ignored() {
    let provider = load("Id, Source ,Target,weight,Label\n7, A , B ,3,x\n").expect("valid csv");
    let edge = &provider.edges()[0];
    assert_eq!(edge.endpoints(), (&"A".to_owned(), &"B".to_owned()));
    assert_eq!(edge.weight(), 3.0);
}

#[rstest]
fn custom_columns_are_honoured() {
    let columns = EdgeListColumns::default()
        .with_source("from")
        .with_target("to")
        .with_weight("similarity");
    let provider = EdgeListProvider::try_from_reader(
        "custom",
        "from,to,similarity\nx,y,0.25\n".as_bytes(),
        &columns,
    )
    .expect("valid csv");
    assert_eq!(provider.graph().edge_count(), 1);
    assert_eq!(provider.name(), "custom");
}

#[rstest]
fn header_only_input_yields_empty_graph() {
    let provider = load("Source,Target,weight\n").expect("valid csv");
    assert!(provider.graph().is_empty());
}

#[rstest]
#[case::empty("", EdgeListErrorCode::EmptyInput)]
#[case::missing_column("Source,Target\nA,B\n", EdgeListErrorCode::ColumnNotFound)]
#[case::blank_cell("Source,Target,weight\nA,,1\n", EdgeListErrorCode::MissingField)]
#[case::bad_weight("Source,Target,weight\nA,B,heavy\n", EdgeListErrorCode::InvalidWeight)]
#[case::ragged_row("Source,Target,weight\nA,B\n", EdgeListErrorCode::Csv)]
fn malformed_input_is_rejected(#[case] csv: &str, #[case] expected: EdgeListErrorCode) {
    let err = load(csv).expect_err("input must be rejected");
    assert_eq!(err.code(), expected);
}

#[rstest]
fn invalid_weight_reports_line_and_value() {
    let err = load("Source,Target,weight\nA,B,1\nB,C,x1\n").expect_err("bad weight");
    assert!(matches!(
        err,
        EdgeListError::InvalidWeight { line: 3, ref value } if value == "x1"
    ));
    assert_eq!(err.to_string(), "line 3 has invalid weight `x1`");
}

#[rstest]
fn missing_column_is_named() {
    let err = load("Source,Target,w\nA,B,1\n").expect_err("missing column");
    assert_eq!(err.to_string(), "column `weight` not found in header");
}

#[rstest]
fn reads_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "Source,Target,weight").expect("write header");
    writeln!(file, "A,B,2").expect("write row");
    let provider =
        EdgeListProvider::try_from_csv_path("file", file.path(), &EdgeListColumns::default())
            .expect("valid file");
    assert_eq!(provider.into_graph().edge_count(), 1);
}

#[rstest]
fn missing_path_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.csv");
    let err = EdgeListProvider::try_from_csv_path("missing", &missing, &EdgeListColumns::default())
        .expect_err("file does not exist");
    match &err {
        EdgeListError::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to open `"));
    assert_eq!(err.code(), EdgeListErrorCode::Io);
    assert_eq!(err.code().to_string(), "EDGE_LIST_IO");
}

#[rstest]
fn provider_feeds_the_forest_builder() {
    let provider = load("Source,Target,weight\nA,B,1.0\nB,C,2.0\nA,C,0.5\n").expect("valid csv");
    let forest = kruskal_with_barcodes(&provider).expect("valid graph");
    let death = forest
        .barcodes()
        .get(&"A".to_owned())
        .map(|interval| interval.death());
    assert_eq!(death, Some(1.0));
    assert_eq!(forest.edges().len(), 2);
}
