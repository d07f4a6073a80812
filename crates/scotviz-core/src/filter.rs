use polars::prelude::*;

use crate::columns;
use crate::error::Result;

/// Coarse grouping label: everything before the first `" - "` separator.
/// Names with several separators keep only the leftmost segment; names with
/// none are their own group.
pub fn region_group(name: &str) -> &str {
    match name.split_once(" - ") {
        Some((head, _)) => head,
        None => name,
    }
}

/// Selects one topical domain, derives the `GROUP` column, and restricts the
/// rows to the allow-listed region groups. Rows whose geography id is null
/// are dropped here; they could never join back to region metadata.
pub fn filter_domain(df: &DataFrame, domain: &str, allow_list: &[String]) -> Result<DataFrame> {
    let selected = df
        .clone()
        .lazy()
        .filter(col(columns::DOMAIN).eq(lit(domain)))
        .with_columns([
            col(columns::GEOGRAPHY_ID).cast(DataType::String),
            col(columns::PERIOD).cast(DataType::Int64),
            col(columns::VALUE).cast(DataType::Float64),
        ])
        .collect()?;

    let names = selected.column(columns::GEOGRAPHY_NAME)?.str()?;
    let geo_ids = selected.column(columns::GEOGRAPHY_ID)?.str()?;

    let mut groups: Vec<Option<String>> = Vec::with_capacity(selected.height());
    let mut keep: Vec<bool> = Vec::with_capacity(selected.height());

    for idx in 0..selected.height() {
        let group = names.get(idx).map(|name| region_group(name).to_string());
        let keep_row = geo_ids.get(idx).is_some()
            && group
                .as_deref()
                .is_some_and(|g| allow_list.iter().any(|allowed| allowed == g));
        keep.push(keep_row);
        groups.push(group);
    }

    let mut out = selected;
    out.with_column(Series::new(columns::GROUP.into(), groups))?;
    let mask = BooleanChunked::new("keep".into(), keep);
    Ok(out.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use super::region_group;

    #[test]
    fn group_is_prefix_before_first_separator() {
        assert_eq!(region_group("Edinburgh, City of - Central"), "Edinburgh, City of");
        assert_eq!(region_group("Glasgow City - North"), "Glasgow City");
    }

    #[test]
    fn group_splits_on_leftmost_separator_only() {
        assert_eq!(region_group("West Lothian - Bathgate - West"), "West Lothian");
    }

    #[test]
    fn name_without_separator_is_its_own_group() {
        assert_eq!(region_group("Fife"), "Fife");
    }
}
