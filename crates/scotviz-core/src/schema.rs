use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Which tidy-table columns act as the chart's axes, bubble size, colour and
/// time index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub x: String,
    pub y: String,
    pub size: String,
    pub color: String,
    pub time: String,
}

/// Display metadata for one column: a label plus either a fixed numeric
/// range or a categorical marker. No data transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub column: String,
    pub label: String,
    #[serde(default)]
    pub range: Option<(f64, f64)>,
    #[serde(default)]
    pub categorical: bool,
}

/// The declared schema handed to the rendering surface alongside the tidy
/// table. `time_bounds` are the slider bounds for the external player.
#[derive(Debug, Clone, Serialize)]
pub struct PlotSchema {
    pub roles: RoleAssignment,
    pub dimensions: Vec<DimensionSpec>,
    pub time_bounds: (f64, f64),
}

impl PlotSchema {
    pub fn slider_bounds(&self) -> (f64, f64) {
        self.time_bounds
    }
}

/// Attaches roles and display metadata to the tidy table. Every role column
/// must exist; the time column must have at least one value to bound the
/// slider.
pub fn declare_schema(
    tidy: &DataFrame,
    roles: &RoleAssignment,
    dimensions: &[DimensionSpec],
) -> Result<PlotSchema> {
    for column in [&roles.x, &roles.y, &roles.size, &roles.color, &roles.time] {
        if tidy.column(column).is_err() {
            return Err(PipelineError::UnknownColumn {
                column: column.clone(),
            });
        }
    }

    let time = tidy.column(&roles.time)?.f64()?;
    let (Some(min), Some(max)) = (time.min(), time.max()) else {
        return Err(PipelineError::Processing(format!(
            "tidy table has no '{}' values to bound the slider",
            roles.time
        )));
    };

    Ok(PlotSchema {
        roles: roles.clone(),
        dimensions: dimensions.to_vec(),
        time_bounds: (min, max),
    })
}
