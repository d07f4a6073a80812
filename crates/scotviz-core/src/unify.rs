use std::collections::BTreeSet;

use polars::prelude::*;

use crate::columns;
use crate::error::Result;
use crate::pivot::MetricMatrix;

/// Stacks the per-metric matrices back into one long frame: the full outer
/// union of (geography_id, period) keys, one f64 column per metric, null
/// where a matrix has no value for the key. Key order is sorted, so the
/// output is deterministic for a given input.
pub fn unify(matrices: &[MetricMatrix]) -> Result<DataFrame> {
    let mut keys: BTreeSet<(String, i64)> = BTreeSet::new();
    for matrix in matrices {
        for (geo, period) in matrix.keys() {
            keys.insert((geo.to_string(), period));
        }
    }

    let geographies: Vec<String> = keys.iter().map(|(geo, _)| geo.clone()).collect();
    let periods: Vec<f64> = keys.iter().map(|(_, period)| *period as f64).collect();

    let mut out_columns: Vec<Column> = Vec::with_capacity(matrices.len() + 2);
    out_columns.push(Series::new(columns::GEOGRAPHY_ID.into(), geographies).into());
    out_columns.push(Series::new(columns::PERIOD.into(), periods).into());

    for matrix in matrices {
        let values: Vec<Option<f64>> = keys
            .iter()
            .map(|(geo, period)| matrix.value(geo, *period))
            .collect();
        out_columns.push(Series::new(matrix.name.as_str().into(), values).into());
    }

    Ok(DataFrame::new(out_columns)?)
}
