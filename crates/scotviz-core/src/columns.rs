//! Canonical column names of the deprivation indicator extract. Exact names,
//! no header negotiation.

pub const DOMAIN: &str = "DOMAIN";
pub const GEOGRAPHY_ID: &str = "GEOGRAPHYID";
pub const GEOGRAPHY_NAME: &str = "GEOGRAPHY_NAME";
pub const INDICATOR: &str = "INDICATOR_DESCRIPTION";
pub const PERIOD: &str = "PMD_PERIOD";
pub const VALUE: &str = "INDICATOR_VALUE";

/// Region-group column derived by the filter stage.
pub const GROUP: &str = "GROUP";

pub const REQUIRED: [&str; 6] = [
    DOMAIN,
    GEOGRAPHY_ID,
    GEOGRAPHY_NAME,
    INDICATOR,
    PERIOD,
    VALUE,
];
