// ---------------------------------------------------------------------------
// Pagination over the filtered view
// ---------------------------------------------------------------------------

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 12;

/// Slice of the view for a 1-based page index, clamped to the view bounds.
/// Out-of-range indices (including 0) return an empty slice — the pager never
/// wraps and never panics; clamping the *current* page is the caller's job.
pub fn page(view: &[usize], page_index: usize, page_size: usize) -> &[usize] {
    if page_index == 0 {
        return &[];
    }
    let start = (page_index - 1) * page_size;
    if start >= view.len() {
        return &[];
    }
    let end = (start + page_size).min(view.len());
    &view[start..end]
}

/// Total number of pages: 0 for an empty view (the empty state, not "page 1
/// of 0"). `page_size` must be non-zero.
pub fn total_pages(view_len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    view_len.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_partial_page_is_clamped() {
        let view: Vec<usize> = (0..25).collect();
        // 25 rows at 12 per page: page 3 holds only the 25th row.
        assert_eq!(page(&view, 3, 12), &[24][..]);
        assert_eq!(page(&view, 1, 12).len(), 12);
        assert_eq!(total_pages(view.len(), 12), 3);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let view: Vec<usize> = (0..5).collect();
        assert!(page(&view, 0, 12).is_empty());
        assert!(page(&view, 2, 12).is_empty());
        assert!(page(&[], 1, 12).is_empty());
    }

    #[test]
    fn empty_view_has_zero_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
    }

    #[test]
    fn pages_partition_the_view_exactly_once() {
        for len in [0usize, 1, 11, 12, 13, 25, 36] {
            let view: Vec<usize> = (0..len).collect();
            let mut seen = Vec::new();
            for p in 1..=total_pages(len, PAGE_SIZE) {
                seen.extend_from_slice(page(&view, p, PAGE_SIZE));
            }
            assert_eq!(seen, view);
        }
    }
}
