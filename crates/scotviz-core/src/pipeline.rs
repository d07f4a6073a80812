use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use crate::config::PipelineConfig;
use crate::enrich::{build_region_meta, enrich};
use crate::error::Result;
use crate::filter::filter_domain;
use crate::loader::load_indicator_table;
use crate::pivot::pivot_metric;
use crate::schema::{declare_schema, PlotSchema};
use crate::unify::unify;

/// Runs the whole transformation once: load, filter/group, pivot each
/// metric, unify, enrich. Pure function of (path, config); the rendering
/// surface consumes the returned table, this side never mutates it again.
pub fn build_pipeline(path: &Path, config: &PipelineConfig) -> Result<DataFrame> {
    let raw = load_indicator_table(path)?;
    info!(rows = raw.height(), path = %path.display(), "loaded indicator table");

    let filtered = filter_domain(&raw, &config.domain, &config.allow_list)?;
    info!(
        rows = filtered.height(),
        domain = %config.domain,
        "filtered to domain and allow-listed regions"
    );

    let meta = build_region_meta(&filtered)?;

    let mut matrices = Vec::with_capacity(config.metrics.len());
    for spec in &config.metrics {
        let matrix = pivot_metric(&filtered, spec)?;
        info!(metric = %spec.name, cells = matrix.len(), "pivoted metric");
        matrices.push(matrix);
    }

    let unified = unify(&matrices)?;
    let tidy = enrich(&unified, &meta)?;
    info!(rows = tidy.height(), regions = meta.len(), "built tidy table");

    Ok(tidy)
}

/// `build_pipeline` plus the declared plot schema for the rendering surface.
pub fn build_dashboard(path: &Path, config: &PipelineConfig) -> Result<(DataFrame, PlotSchema)> {
    let tidy = build_pipeline(path, config)?;
    let schema = declare_schema(&tidy, &config.roles, &config.dimensions)?;
    Ok((tidy, schema))
}
