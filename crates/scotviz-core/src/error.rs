// crates/scotviz-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV header error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("input table is missing required columns: {columns:?}")]
    MissingColumns { columns: Vec<String> },

    #[error("metric '{metric}' matched no rows for indicator '{indicator}'")]
    MetricNotFound { metric: String, indicator: String },

    #[error("schema role references unknown column '{column}'")]
    UnknownColumn { column: String },

    #[error("TOML config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
