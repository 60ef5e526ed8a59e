//! Pagination window computation.
//!
//! Compresses an arbitrarily large page count into a bounded row of page
//! links with ellipsis gaps, mirroring the controls of the web front-ends
//! this client replaces.

/// A unit in the rendered pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

/// Page counts up to this render in full, with no ellipsis.
const FULL_WINDOW_MAX: u32 = 7;

/// Compute the ordered markers to render for `current` of `total` pages.
///
/// Returns an empty sequence when `total <= 1`: with a single page there is
/// nothing to navigate and the caller suppresses the control entirely.
///
/// For larger page counts the window is `1 [...] cur-1 cur cur+1 [...] total`
/// with the inner range clamped to `[2, total-1]`, so the output never
/// duplicates a page, is monotonically increasing, and carries at most two
/// ellipsis gaps.
pub fn compute_window(current: u32, total: u32) -> Vec<PageMarker> {
    if total <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    if total <= FULL_WINDOW_MAX {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut markers = Vec::with_capacity(7);
    markers.push(PageMarker::Page(1));
    if current > 3 {
        markers.push(PageMarker::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    for page in start..=end {
        markers.push(PageMarker::Page(page));
    }
    if current < total - 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(total));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(markers: &[PageMarker]) -> Vec<u32> {
        markers
            .iter()
            .filter_map(|m| match m {
                PageMarker::Page(p) => Some(*p),
                PageMarker::Ellipsis => None,
            })
            .collect()
    }

    fn ellipsis_count(markers: &[PageMarker]) -> usize {
        markers
            .iter()
            .filter(|m| matches!(m, PageMarker::Ellipsis))
            .count()
    }

    #[test]
    fn single_page_suppresses_the_control() {
        assert!(compute_window(1, 1).is_empty());
        assert!(compute_window(1, 0).is_empty());
    }

    #[test]
    fn small_totals_render_every_page() {
        for total in 2..=7 {
            for current in 1..=total {
                let w = compute_window(current, total);
                assert_eq!(pages(&w), (1..=total).collect::<Vec<_>>());
                assert_eq!(ellipsis_count(&w), 0);
            }
        }
    }

    #[test]
    fn seven_pages_at_page_five_has_no_ellipsis() {
        // total=137, limit=20 -> 7 pages; still the full-range branch.
        let w = compute_window(5, 7);
        assert_eq!(pages(&w), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(ellipsis_count(&w), 0);
    }

    #[test]
    fn first_page_of_twenty_five() {
        // total=500, limit=20 -> 25 pages.
        let w = compute_window(1, 25);
        assert_eq!(
            w,
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Ellipsis,
                PageMarker::Page(25),
            ]
        );
    }

    #[test]
    fn middle_page_windows_both_sides() {
        let w = compute_window(12, 25);
        assert_eq!(
            w,
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(11),
                PageMarker::Page(12),
                PageMarker::Page(13),
                PageMarker::Ellipsis,
                PageMarker::Page(25),
            ]
        );
    }

    #[test]
    fn last_page_has_leading_ellipsis_only() {
        let w = compute_window(25, 25);
        assert_eq!(
            w,
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(24),
                PageMarker::Page(25),
            ]
        );
    }

    #[test]
    fn window_is_strictly_increasing_and_bounded() {
        for total in 8..=40 {
            for current in 1..=total {
                let w = compute_window(current, total);
                let p = pages(&w);
                assert_eq!(p.first(), Some(&1), "total={total} current={current}");
                assert_eq!(p.last(), Some(&total), "total={total} current={current}");
                assert!(p.windows(2).all(|ab| ab[0] < ab[1]));
                assert!(ellipsis_count(&w) <= 2);
                assert!(p.contains(&current));
            }
        }
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(pages(&compute_window(0, 5)), vec![1, 2, 3, 4, 5]);
        let w = compute_window(99, 25);
        assert_eq!(pages(&w), vec![1, 24, 25]);
    }
}
