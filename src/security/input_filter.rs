//! Denylist-based input filtering.
//!
//! # Responsibilities
//! - Scan query parameter values for substrings associated with SQL
//!   injection and reject on any hit
//!
//! # Design Decisions
//! - Substring scan over lower-cased values; keys are not scanned
//! - Deliberately a heuristic, not a parser: it neither decodes nor
//!   understands quoting, and legitimate values containing words like
//!   "update" are rejected. The upstream services are opaque, so the
//!   filter is preserved as-is rather than replaced with something
//!   cleverer that changes the accept set.

/// Substrings that reject a request when found in any query value.
const DENYLIST: [&str; 12] = [
    "'", "\"", ";", "--", "/*", "*/", "union", "select", "drop", "insert", "update", "delete",
];

/// Returns true if every value is free of denylisted substrings.
pub fn validate<'a>(values: impl IntoIterator<Item = &'a str>) -> bool {
    for value in values {
        let lowered = value.to_lowercase();
        if DENYLIST.iter().any(|needle| lowered.contains(needle)) {
            tracing::warn!(value = %value, "Query value rejected by input filter");
            return false;
        }
    }
    true
}
