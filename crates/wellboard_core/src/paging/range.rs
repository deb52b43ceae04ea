//! Compact page-marker strip for pagination controls.
//!
//! # Responsibility
//! - Collapse long page runs into an ellipsis while keeping the pages a
//!   user actually navigates to: the boundaries and a window around the
//!   active page.
//!
//! # Invariants
//! - Page 1 and the last page appear exactly once.
//! - Every page within two of the active page appears.
//! - A gap standing for a single page is filled, never elided.
//! - No two ellipsis markers are adjacent.

/// One element of the rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

/// Pages on either side of the active page that are always shown.
const WINDOW_DELTA: u32 = 2;

/// Builds the marker sequence for `current` of `total` pages.
///
/// Pure and deterministic. Out-of-range `current` is a caller bug and is
/// clamped into `[1, total]` rather than panicking.
pub fn pagination_range(current: u32, total: u32) -> Vec<PageMarker> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut kept: Vec<u32> = Vec::new();
    for page in 1..=total {
        let near_current =
            page + WINDOW_DELTA >= current && page <= current.saturating_add(WINDOW_DELTA);
        if page == 1 || page == total || near_current {
            kept.push(page);
        }
    }

    let mut markers: Vec<PageMarker> = Vec::with_capacity(kept.len() + 2);
    let mut previous: Option<u32> = None;
    for page in kept {
        if let Some(last) = previous {
            if page - last == 2 {
                // A lone ellipsis standing for one page reads worse than
                // the page itself.
                markers.push(PageMarker::Page(last + 1));
            } else if page - last > 2 {
                markers.push(PageMarker::Ellipsis);
            }
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::{pagination_range, PageMarker};

    fn pages(markers: &[PageMarker]) -> Vec<u32> {
        markers
            .iter()
            .filter_map(|marker| match marker {
                PageMarker::Page(page) => Some(*page),
                PageMarker::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn single_page_yields_single_marker() {
        assert_eq!(pagination_range(1, 1), vec![PageMarker::Page(1)]);
    }

    #[test]
    fn short_totals_have_no_ellipsis() {
        let markers = pagination_range(3, 6);
        assert_eq!(pages(&markers), vec![1, 2, 3, 4, 5, 6]);
        assert!(!markers.contains(&PageMarker::Ellipsis));
    }

    #[test]
    fn middle_of_long_run_matches_expected_strip() {
        let markers = pagination_range(12, 23);
        assert_eq!(
            markers,
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(10),
                PageMarker::Page(11),
                PageMarker::Page(12),
                PageMarker::Page(13),
                PageMarker::Page(14),
                PageMarker::Ellipsis,
                PageMarker::Page(23),
            ]
        );
    }

    #[test]
    fn gap_of_one_page_is_filled_instead_of_elided() {
        // current=4, total=8 keeps 1..=6 and 8; 6->8 is a gap of exactly
        // one page (7), which must be filled.
        let markers = pagination_range(4, 8);
        assert_eq!(pages(&markers), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!markers.contains(&PageMarker::Ellipsis));
    }

    #[test]
    fn boundary_currents_keep_single_boundary_markers() {
        let first = pages(&pagination_range(1, 20));
        assert_eq!(first.iter().filter(|page| **page == 1).count(), 1);
        assert_eq!(first.iter().filter(|page| **page == 20).count(), 1);

        let last = pages(&pagination_range(20, 20));
        assert_eq!(last.iter().filter(|page| **page == 1).count(), 1);
        assert_eq!(last.iter().filter(|page| **page == 20).count(), 1);
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(pagination_range(0, 3), pagination_range(1, 3));
        assert_eq!(pagination_range(99, 3), pagination_range(3, 3));
    }
}
