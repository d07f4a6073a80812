use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::columns;
use crate::error::{PipelineError, Result};

/// Reads the raw indicator table from a delimited file. One-shot startup
/// read: an unreadable path or a missing required column is fatal.
pub fn load_indicator_table(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)?;

    // Sniff the header row first so a schema failure can name every absent
    // column instead of surfacing as a generic parse error.
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let missing: Vec<String> = columns::REQUIRED
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(PipelineError::MissingColumns { columns: missing });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .with_ignore_errors(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    Ok(df)
}
