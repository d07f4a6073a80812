use std::collections::BTreeMap;

use polars::prelude::*;
use tracing::debug;

use crate::columns;
use crate::error::Result;

/// Display metadata for one geography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRecord {
    pub group: String,
    pub geography_name: String,
}

/// geography_id -> display metadata, deduplicated (first occurrence wins).
pub type RegionMeta = BTreeMap<String, RegionRecord>;

/// Extracts the region metadata from the filtered frame. Rows with a null id
/// or name never make it into the map.
pub fn build_region_meta(filtered: &DataFrame) -> Result<RegionMeta> {
    let geo_ids = filtered.column(columns::GEOGRAPHY_ID)?.str()?;
    let groups = filtered.column(columns::GROUP)?.str()?;
    let names = filtered.column(columns::GEOGRAPHY_NAME)?.str()?;

    let mut meta = RegionMeta::new();
    for idx in 0..filtered.height() {
        let (Some(geo), Some(group), Some(name)) =
            (geo_ids.get(idx), groups.get(idx), names.get(idx))
        else {
            continue;
        };
        meta.entry(geo.to_string()).or_insert_with(|| RegionRecord {
            group: group.to_string(),
            geography_name: name.to_string(),
        });
    }

    Ok(meta)
}

/// Joins region metadata onto the unified frame and drops incomplete rows:
/// any row whose geography has no metadata entry, or with a null in any
/// metric column, is removed. Dropping is intentional, not an error. The
/// result is fully typed and fully populated.
pub fn enrich(unified: &DataFrame, meta: &RegionMeta) -> Result<DataFrame> {
    let geo_ids = unified.column(columns::GEOGRAPHY_ID)?.str()?;
    let periods = unified.column(columns::PERIOD)?.f64()?;

    let metric_names: Vec<String> = unified
        .get_column_names()
        .iter()
        .filter(|name| name.as_str() != columns::GEOGRAPHY_ID && name.as_str() != columns::PERIOD)
        .map(|name| name.to_string())
        .collect();

    let mut metric_cols = Vec::with_capacity(metric_names.len());
    for name in &metric_names {
        metric_cols.push(unified.column(name)?.f64()?);
    }

    let height = unified.height();
    let mut geo_out: Vec<String> = Vec::with_capacity(height);
    let mut name_out: Vec<String> = Vec::with_capacity(height);
    let mut group_out: Vec<String> = Vec::with_capacity(height);
    let mut period_out: Vec<f64> = Vec::with_capacity(height);
    let mut metric_out: Vec<Vec<f64>> = vec![Vec::with_capacity(height); metric_cols.len()];

    let mut dropped_meta = 0usize;
    let mut dropped_missing = 0usize;

    for idx in 0..height {
        let (Some(geo), Some(period)) = (geo_ids.get(idx), periods.get(idx)) else {
            dropped_missing += 1;
            continue;
        };
        let Some(record) = meta.get(geo) else {
            dropped_meta += 1;
            continue;
        };

        let mut metrics_row = Vec::with_capacity(metric_cols.len());
        for column in &metric_cols {
            if let Some(value) = column.get(idx) {
                metrics_row.push(value);
            }
        }
        if metrics_row.len() != metric_cols.len() {
            dropped_missing += 1;
            continue;
        }

        geo_out.push(geo.to_string());
        name_out.push(record.geography_name.clone());
        group_out.push(record.group.clone());
        period_out.push(period);
        for (target, value) in metric_out.iter_mut().zip(metrics_row) {
            target.push(value);
        }
    }

    debug!(
        kept = geo_out.len(),
        dropped_meta, dropped_missing, "enriched tidy table"
    );

    let mut out_columns: Vec<Column> = Vec::with_capacity(metric_cols.len() + 4);
    for (name, values) in metric_names.iter().zip(metric_out) {
        out_columns.push(Series::new(name.as_str().into(), values).into());
    }
    out_columns.push(Series::new(columns::PERIOD.into(), period_out).into());
    out_columns.push(Series::new(columns::GEOGRAPHY_ID.into(), geo_out).into());
    out_columns.push(Series::new(columns::GEOGRAPHY_NAME.into(), name_out).into());
    out_columns.push(Series::new(columns::GROUP.into(), group_out).into());

    Ok(DataFrame::new(out_columns)?)
}
