use std::path::Path;

use serde::Deserialize;

use crate::error::{PipelineError, Result};
use crate::pivot::MetricSpec;
use crate::schema::{DimensionSpec, RoleAssignment};

/// Everything needed to turn one raw extract into one dashboard's tidy
/// table: the topical domain, the region allow-list, the metrics to pivot,
/// and the chart roles/dimensions for the schema declarator.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub domain: String,
    pub allow_list: Vec<String>,
    pub metrics: Vec<MetricSpec>,
    pub roles: RoleAssignment,
    #[serde(default)]
    pub dimensions: Vec<DimensionSpec>,
}

impl PipelineConfig {
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(PipelineError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineConfig;

    #[test]
    fn parses_toml_config_with_default_scale() {
        let raw = r#"
            name = "custom"
            domain = "Outcomes"
            allow_list = ["Fife", "Glasgow City"]

            [[metrics]]
            name = "SII"
            indicator = "Slope Index of Inequality for patients with emergency hospitalisations"

            [[metrics]]
            name = "RII"
            indicator = "Relative Index of Inequality for patients with emergency hospitalisations"
            scale = 10000000.0

            [roles]
            x = "SII"
            y = "RII"
            size = "RII"
            color = "GROUP"
            time = "PMD_PERIOD"

            [[dimensions]]
            column = "SII"
            label = "SII (Slope Inequality Index)"
            range = [3000.0, 10000.0]

            [[dimensions]]
            column = "GROUP"
            label = "Region group"
            categorical = true
        "#;

        let config: PipelineConfig = toml::from_str(raw).expect("config parse failed");
        assert_eq!(config.name, "custom");
        assert_eq!(config.metrics.len(), 2);
        assert_eq!(config.metrics[0].scale, 1.0);
        assert_eq!(config.metrics[1].scale, 10_000_000.0);
        assert_eq!(config.roles.time, "PMD_PERIOD");
        assert_eq!(config.dimensions[0].range, Some((3000.0, 10000.0)));
        assert!(config.dimensions[1].categorical);
        assert_eq!(config.dimensions[1].range, None);
    }
}
