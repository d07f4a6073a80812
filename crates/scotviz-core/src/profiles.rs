//! The two built-in dashboards over the deprivation extract: emergency
//! hospitalisation inequality ("outcomes") and life expectancy by SIMD
//! quintile ("health").

use once_cell::sync::Lazy;

use crate::columns;
use crate::config::PipelineConfig;
use crate::pivot::MetricSpec;
use crate::schema::{DimensionSpec, RoleAssignment};

/// The urban areas both dashboards restrict themselves to.
pub const URBAN_AREAS: [&str; 7] = [
    "Aberdeen City",
    "East Lothian",
    "Edinburgh, City of",
    "Lothian",
    "West Lothian",
    "Fife",
    "Glasgow City",
];

fn urban_allow_list() -> Vec<String> {
    URBAN_AREAS.iter().map(|area| area.to_string()).collect()
}

pub static OUTCOMES: Lazy<PipelineConfig> = Lazy::new(|| PipelineConfig {
    name: "outcomes".to_string(),
    domain: "Outcomes".to_string(),
    allow_list: urban_allow_list(),
    metrics: vec![
        MetricSpec::new(
            "RII",
            "Relative Index of Inequality for patients with emergency hospitalisations",
        )
        .with_scale(10_000_000.0),
        MetricSpec::new(
            "SII",
            "Slope Index of Inequality for patients with emergency hospitalisations",
        ),
        MetricSpec::new(
            "Population",
            "Patients with emergency hospitalisations by SIMD quintile",
        ),
    ],
    roles: RoleAssignment {
        x: "Population".to_string(),
        y: "SII".to_string(),
        size: "RII".to_string(),
        color: columns::GROUP.to_string(),
        time: columns::PERIOD.to_string(),
    },
    dimensions: vec![
        DimensionSpec {
            column: "SII".to_string(),
            label: "SII (Slope Inequality Index)".to_string(),
            range: Some((3000.0, 10000.0)),
            categorical: false,
        },
        DimensionSpec {
            column: "Population".to_string(),
            label: "Number of emergencies <65 (Population)".to_string(),
            range: Some((4000.0, 12500.0)),
            categorical: false,
        },
        DimensionSpec {
            column: "RII".to_string(),
            label: "RII".to_string(),
            range: None,
            categorical: false,
        },
        DimensionSpec {
            column: columns::GROUP.to_string(),
            label: "Region group".to_string(),
            range: None,
            categorical: true,
        },
    ],
});

// The female indicator below embeds the extract's mangled whitespace bytes
// verbatim; selection is an exact byte match, so they must stay.
pub static HEALTH: Lazy<PipelineConfig> = Lazy::new(|| PipelineConfig {
    name: "health".to_string(),
    domain: "Health inequalities and physical activity".to_string(),
    allow_list: urban_allow_list(),
    metrics: vec![
        MetricSpec::new(
            "Female_Health",
            "Female life expectancy\u{c2}\u{a0}by SIMD quintile\u{c2}\u{a0}",
        ),
        MetricSpec::new("Male_Health", "Male life expectancy by SIMD quintile"),
        MetricSpec::new(
            "Population",
            "All-cause mortality among the 15-44 year olds by SIMD quintile",
        )
        .with_scale(100_000.0),
    ],
    roles: RoleAssignment {
        x: "Female_Health".to_string(),
        y: "Male_Health".to_string(),
        size: "Population".to_string(),
        color: columns::GROUP.to_string(),
        time: columns::PERIOD.to_string(),
    },
    dimensions: vec![
        DimensionSpec {
            column: "Male_Health".to_string(),
            label: "Male_Health (Life Expectancy)".to_string(),
            range: Some((40.0, 100.0)),
            categorical: false,
        },
        DimensionSpec {
            column: "Female_Health".to_string(),
            label: "Female_Health (Life Expectancy)".to_string(),
            range: Some((40.0, 100.0)),
            categorical: false,
        },
        DimensionSpec {
            column: "Population".to_string(),
            label: "Population".to_string(),
            range: None,
            categorical: false,
        },
        DimensionSpec {
            column: columns::GROUP.to_string(),
            label: "Region group".to_string(),
            range: None,
            categorical: true,
        },
    ],
});

pub fn by_name(name: &str) -> Option<&'static PipelineConfig> {
    match name {
        "outcomes" => Some(&OUTCOMES),
        "health" => Some(&HEALTH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{by_name, HEALTH, OUTCOMES};

    #[test]
    fn outcomes_profile_scales_rii() {
        let rii = OUTCOMES
            .metrics
            .iter()
            .find(|metric| metric.name == "RII")
            .expect("missing RII metric");
        assert_eq!(rii.scale, 10_000_000.0);
        assert_eq!(OUTCOMES.roles.y, "SII");
        assert_eq!(OUTCOMES.roles.time, "PMD_PERIOD");
    }

    #[test]
    fn health_profile_keeps_mangled_indicator_bytes() {
        let female = HEALTH
            .metrics
            .iter()
            .find(|metric| metric.name == "Female_Health")
            .expect("missing Female_Health metric");
        assert!(female.indicator.contains('\u{a0}'));
        assert!(female.indicator.ends_with('\u{a0}'));
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("outcomes").map(|p| p.name.as_str()), Some("outcomes"));
        assert_eq!(by_name("health").map(|p| p.name.as_str()), Some("health"));
        assert!(by_name("nope").is_none());
    }
}
