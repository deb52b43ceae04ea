//! Client-side free-text and facet filtering.
//!
//! # Responsibility
//! - Narrow an in-memory record set to rows matching a search term against
//!   the screen's configured text fields, plus an optional exact-match
//!   facet (the media-library type chips).
//!
//! # Invariants
//! - Matching is case-insensitive (Unicode lowercase).
//! - An empty or whitespace-only term matches everything.
//! - Non-string field values never match.

use crate::model::record::Record;

/// Returns whether `record` matches the free-text `term` on any of the
/// given fields.
///
/// A screen with no searchable fields matches nothing for a non-empty
/// term; its embedding UI simply never sends one.
pub fn matches_term(record: &Record, fields: &[String], term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|field| {
        record
            .text_field(field)
            .is_some_and(|value| value.to_lowercase().contains(&needle))
    })
}

/// Returns whether `record` matches an exact facet value on `field`.
///
/// `facet = None` means "all" and matches everything.
pub fn matches_facet(record: &Record, field: &str, facet: Option<&str>) -> bool {
    let Some(facet) = facet else {
        return true;
    };
    record
        .text_field(field)
        .is_some_and(|value| value.to_lowercase() == facet.to_lowercase())
}

/// Applies term and facet filtering in one pass, preserving input order.
pub fn filter_records(
    records: &[Record],
    search_fields: &[String],
    term: &str,
    facet_field: Option<&str>,
    facet: Option<&str>,
) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches_term(record, search_fields, term))
        .filter(|record| match facet_field {
            Some(field) => matches_facet(record, field, facet),
            None => true,
        })
        .cloned()
        .collect()
}
