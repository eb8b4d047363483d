//! Display formatting for profile and scan fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::net::types::Scan;

const PLACEHOLDER: &str = "—";

/// Render an ISO 8601 timestamp as `March 5, 2024`. Unparseable input is
/// shown as-is; missing input as a dash.
#[must_use]
pub fn member_since(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return PLACEHOLDER.to_owned();
    };
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// Capitalize a machine label (`"pro"` -> `"Pro"`, `"past_due"` -> `"Past due"`).
#[must_use]
pub fn label(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return PLACEHOLDER.to_owned();
    };
    let spaced = raw.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => PLACEHOLDER.to_owned(),
    }
}

/// Selector label for a scan: title (or URL), then location if known.
#[must_use]
pub fn scan_label(scan: &Scan) -> String {
    let name = scan
        .listing_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(&scan.listing_url);
    match scan.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        Some(location) => format!("{name} — {location}"),
        None => name.to_owned(),
    }
}
