//! Response-envelope normalization.
//!
//! # Responsibility
//! - Accept the three payload shapes the domain services actually return
//!   (`{data, total}`, `{data}` without a total, bare array) and produce
//!   one canonical `PageResult`.
//!
//! # Invariants
//! - `total_count` falls back to the filtered row count when no total is
//!   given.
//! - A payload carrying the full collection (no total, or more rows than
//!   the page size) is filtered by the active term/facet and sliced to
//!   the requested window locally, exactly like a fallback dataset.
//! - Any other JSON shape is a malformed payload, never a panic.

use crate::fetch::error::FetchError;
use crate::filter::filter_records;
use crate::model::page::{PageRequest, PageResult};
use crate::model::record::Record;
use crate::paging::slice::slice_page;
use serde_json::Value;

/// Term/facet context applied when rows must be filtered locally.
///
/// Server-paged responses already reflect any filtering the server did
/// and are adopted verbatim; this only touches full-collection payloads.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilter<'a> {
    pub search_fields: &'a [String],
    pub term: &'a str,
    pub facet_field: Option<&'a str>,
    pub facet: Option<&'a str>,
}

impl LocalFilter<'_> {
    /// Passes every row through, for callers with no active filter.
    pub fn unfiltered() -> LocalFilter<'static> {
        LocalFilter {
            search_fields: &[],
            term: "",
            facet_field: None,
            facet: None,
        }
    }
}

/// Unnormalized page payload as decoded off the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage {
    pub rows: Vec<Value>,
    pub total: Option<usize>,
}

/// Extracts rows and the optional total from a decoded JSON payload.
pub fn normalize_payload(payload: Value) -> Result<RawPage, FetchError> {
    match payload {
        Value::Array(rows) => Ok(RawPage { rows, total: None }),
        Value::Object(mut envelope) => {
            let rows = match envelope.remove("data") {
                Some(Value::Array(rows)) => rows,
                Some(other) => {
                    return Err(FetchError::MalformedPayload(format!(
                        "`data` must be an array, got {other}"
                    )));
                }
                None => {
                    return Err(FetchError::MalformedPayload(
                        "object payload has no `data` array".to_string(),
                    ));
                }
            };
            let total = match envelope.get("total") {
                Some(Value::Number(number)) => match number.as_u64() {
                    Some(total) => Some(total as usize),
                    None => {
                        return Err(FetchError::MalformedPayload(format!(
                            "`total` must be a non-negative integer, got {number}"
                        )));
                    }
                },
                Some(other) => {
                    return Err(FetchError::MalformedPayload(format!(
                        "`total` must be a number, got {other}"
                    )));
                }
                None => None,
            };
            Ok(RawPage { rows, total })
        }
        other => Err(FetchError::MalformedPayload(format!(
            "expected array or envelope object, got {other}"
        ))),
    }
}

/// Turns a raw payload into the page the caller asked for.
///
/// Servers that ignored the paging parameters are detected here: when no
/// total is reported, or more rows than the page size came back, the rows
/// are treated as the full collection, narrowed by `filter`, and sliced
/// locally.
pub fn normalize_page(
    raw: RawPage,
    request: &PageRequest,
    filter: LocalFilter<'_>,
) -> Result<PageResult, FetchError> {
    let records = raw
        .rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            Record::from_value_with_ordinal(row, index as i64 + 1)
                .map_err(|err| FetchError::MalformedPayload(err.to_string()))
        })
        .collect::<Result<Vec<Record>, FetchError>>()?;

    if let Some(total) = raw.total {
        if records.len() <= request.per_page() as usize {
            return Ok(PageResult {
                items: records,
                total_count: total,
            });
        }
    }

    let filtered = filter_records(
        &records,
        filter.search_fields,
        filter.term,
        filter.facet_field,
        filter.facet,
    );
    Ok(PageResult {
        total_count: filtered.len(),
        items: slice_page(&filtered, request),
    })
}
