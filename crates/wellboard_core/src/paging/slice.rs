//! In-memory page slicing.

use crate::model::page::PageRequest;
use crate::model::record::Record;

/// Returns the records falling inside the requested window.
///
/// A window starting past the end of the collection yields an empty page,
/// matching how the screens behave when a filter shrinks the collection
/// under the active page.
pub fn slice_page(records: &[Record], request: &PageRequest) -> Vec<Record> {
    let start = request.offset();
    if start >= records.len() {
        return Vec::new();
    }
    let end = (start + request.per_page() as usize).min(records.len());
    records[start..end].to_vec()
}
