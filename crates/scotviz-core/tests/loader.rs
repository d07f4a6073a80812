use std::path::PathBuf;

use scotviz_core::columns;
use scotviz_core::error::PipelineError;
use scotviz_core::loader::load_indicator_table;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn loads_indicator_table_with_required_columns() {
    let df = load_indicator_table(&fixture_path("deprivation_sample.csv"))
        .expect("fixture load failed");

    for column in columns::REQUIRED {
        assert!(df.column(column).is_ok(), "expected column {column}");
    }
    assert_eq!(df.height(), 34);
}

#[test]
fn unreadable_path_is_a_file_error() {
    let err = load_indicator_table(&fixture_path("does_not_exist.csv"))
        .expect_err("expected load failure");
    assert!(matches!(err, PipelineError::Io(_)), "got {err:?}");
}

#[test]
fn missing_required_column_is_a_schema_error() {
    let err = load_indicator_table(&fixture_path("missing_value_column.csv"))
        .expect_err("expected schema failure");
    match err {
        PipelineError::MissingColumns { columns } => {
            assert_eq!(columns, vec![scotviz_core::columns::VALUE.to_string()]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}
