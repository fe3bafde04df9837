//! Property tests for pagination arithmetic

use proptest::prelude::*;
use todo_core::pagination::{clamp_page, parse_positive, total_pages};
use todo_core::PageRequest;

proptest! {
    #[test]
    fn total_pages_is_ceiling(limit in 1u32..200, total in 0u64..20_000) {
        let pages = total_pages(total, limit);
        prop_assert_eq!(pages, (total + u64::from(limit) - 1) / u64::from(limit));
        prop_assert_eq!(pages == 0, total == 0);
    }

    #[test]
    fn last_page_starts_inside_the_collection(limit in 1u32..200, total in 1u64..20_000) {
        let pages = total_pages(total, limit);
        let last = PageRequest::new(pages as u32, limit);
        prop_assert!(last.skip() < total);
        prop_assert!(last.skip() + u64::from(limit) >= total);

        let past = PageRequest::new(pages as u32 + 1, limit);
        prop_assert!(past.skip() >= total);
    }

    #[test]
    fn consecutive_pages_are_adjacent(page in 1u32..10_000, limit in 1u32..500) {
        let here = PageRequest::new(page, limit);
        let next = PageRequest::new(page + 1, limit);
        prop_assert_eq!(next.skip(), here.skip() + u64::from(limit));
    }

    #[test]
    fn clamped_page_is_in_range(page in 1u32..1_000, pages in 0u64..500) {
        let shown = clamp_page(page, pages);
        prop_assert!(shown >= 1);
        prop_assert!(u64::from(shown) <= pages.max(1));
    }

    #[test]
    fn parsed_values_are_positive(raw in "\\PC{0,12}") {
        if let Some(value) = parse_positive(Some(&raw)) {
            prop_assert!(value >= 1);
        }
    }
}
