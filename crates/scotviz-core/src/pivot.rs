use std::collections::BTreeMap;

use polars::prelude::*;
use serde::Deserialize;
use tracing::warn;

use crate::columns;
use crate::error::{PipelineError, Result};

fn default_scale() -> f64 {
    1.0
}

/// One metric to extract from the indicator table. `indicator` is matched
/// byte-for-byte against `INDICATOR_DESCRIPTION`; the source data carries
/// mangled whitespace in one description, so no normalisation happens here.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricSpec {
    pub name: String,
    pub indicator: String,
    /// Linear unit adjustment applied before storage.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl MetricSpec {
    pub fn new(name: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indicator: indicator.into(),
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// One indicator pivoted into a (geography × period) matrix.
#[derive(Debug, Clone)]
pub struct MetricMatrix {
    pub name: String,
    cells: BTreeMap<String, BTreeMap<i64, f64>>,
}

impl MetricMatrix {
    pub fn value(&self, geography_id: &str, period: i64) -> Option<f64> {
        self.cells
            .get(geography_id)
            .and_then(|row| row.get(&period))
            .copied()
    }

    /// Every populated (geography_id, period) key, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.cells
            .iter()
            .flat_map(|(geo, row)| row.keys().map(move |period| (geo.as_str(), *period)))
    }

    pub fn len(&self) -> usize {
        self.cells.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Builds the metric matrix for one indicator, scaling values on the way in.
///
/// Duplicate (geography, period) keys resolve last-write-wins in input row
/// order; each collision is logged. An indicator that selects zero rows is an
/// error, so a silently mismatched description string cannot produce an empty
/// chart.
pub fn pivot_metric(filtered: &DataFrame, spec: &MetricSpec) -> Result<MetricMatrix> {
    let indicators = filtered.column(columns::INDICATOR)?.str()?;
    let geo_ids = filtered.column(columns::GEOGRAPHY_ID)?.str()?;
    let periods = filtered.column(columns::PERIOD)?.i64()?;
    let values = filtered.column(columns::VALUE)?.f64()?;

    let mut cells: BTreeMap<String, BTreeMap<i64, f64>> = BTreeMap::new();
    let mut matched = false;

    for idx in 0..filtered.height() {
        if indicators.get(idx) != Some(spec.indicator.as_str()) {
            continue;
        }
        matched = true;

        let (Some(geo), Some(period), Some(value)) =
            (geo_ids.get(idx), periods.get(idx), values.get(idx))
        else {
            continue;
        };

        let row = cells.entry(geo.to_string()).or_default();
        if let Some(previous) = row.insert(period, value * spec.scale) {
            warn!(
                metric = %spec.name,
                geography_id = %geo,
                period,
                previous,
                "duplicate (geography, period) key; keeping last value"
            );
        }
    }

    if !matched {
        return Err(PipelineError::MetricNotFound {
            metric: spec.name.clone(),
            indicator: spec.indicator.clone(),
        });
    }

    Ok(MetricMatrix {
        name: spec.name.clone(),
        cells,
    })
}
