//! Field extraction: logical field names to concrete record values.
//!
//! Field-name comparison is case-insensitive. Unknown names yield empty
//! results, never errors — a rule referencing a field this record type
//! does not carry simply never matches.

use sift_core::{Subject, WatchlistCandidate};

/// ISO format used when a date field is extracted as text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn canonical(field: &str) -> String {
    field.trim().to_lowercase()
}

/// Whether a field holds a name (name normalization applies).
pub fn is_name_field(field: &str) -> bool {
    matches!(canonical(field).as_str(), "name" | "aliases")
}

/// Whether a field holds a date.
pub fn is_date_field(field: &str) -> bool {
    canonical(field) == "dateofbirth"
}

/// Extract a single value from the subject. Blank values yield `None`.
pub fn subject_field(subject: &Subject, field: &str) -> Option<String> {
    let value = match canonical(field).as_str() {
        "name" => Some(subject.name.clone()),
        "nationality" => subject.nationality.clone(),
        "dateofbirth" => subject
            .date_of_birth
            .map(|d| d.format(DATE_FORMAT).to_string()),
        "customerid" => subject.customer_id.clone(),
        _ => None,
    };
    value.filter(|v| !v.trim().is_empty())
}

/// Extract zero or more values from a watchlist candidate.
///
/// `aliases` yields the full alias list; scalar fields yield zero or one
/// value. Blank entries are skipped.
pub fn candidate_field_values(candidate: &WatchlistCandidate, field: &str) -> Vec<String> {
    let values = match canonical(field).as_str() {
        "name" => vec![candidate.name.clone()],
        "aliases" => candidate.aliases.clone(),
        "nationality" => candidate.nationality.clone().into_iter().collect(),
        "dateofbirth" => candidate
            .date_of_birth
            .map(|d| d.format(DATE_FORMAT).to_string())
            .into_iter()
            .collect(),
        "sourcelist" => vec![candidate.source_list.clone()],
        _ => Vec::new(),
    };
    values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect()
}
