// Pagination
// Slices a filtered snapshot into fixed-size pages

use super::types::{Page, PageRequest};
use crate::database::models::CatchRecord;

/// Return the requested page of `filtered` plus page-count metadata.
///
/// Out-of-range page numbers yield an empty page, never an error, and the
/// caller decides whether to reset its page state. An empty input still
/// reports one (empty) page so a pager always has something to render.
pub fn paginate(filtered: &[CatchRecord], request: PageRequest) -> Page {
    let total_count = filtered.len();
    let total_pages = if total_count == 0 {
        1
    } else {
        total_count.div_ceil(request.page_size())
    };

    let start = (request.page_number() - 1)
        .saturating_mul(request.page_size())
        .min(total_count);
    let end = start.saturating_add(request.page_size()).min(total_count);

    Page {
        items: filtered[start..end].to_vec(),
        page_number: request.page_number(),
        page_size: request.page_size(),
        total_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_catches(count: usize) -> Vec<CatchRecord> {
        (1..=count)
            .map(|n| CatchRecord {
                id: format!("catch_{:03}", n),
                location: format!("Spot {}", n),
                description: String::new(),
                date: format!("2023-01-{:02}", n),
                tags: Vec::new(),
                latitude: None,
                longitude: None,
                image: None,
            })
            .collect()
    }

    #[test]
    fn test_seven_records_page_size_five() {
        let catches = numbered_catches(7);

        let first = paginate(&catches, PageRequest::new(1, 5).unwrap());
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total_count, 7);
        assert_eq!(first.total_pages, 2);

        let second = paginate(&catches, PageRequest::new(2, 5).unwrap());
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[0].id, "catch_006");

        let beyond = paginate(&catches, PageRequest::new(3, 5).unwrap());
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 2);
    }

    #[test]
    fn test_pages_partition_the_input() {
        let catches = numbered_catches(13);
        let page_size = 4;

        let total_pages = paginate(&catches, PageRequest::new(1, page_size).unwrap()).total_pages;
        let mut reassembled = Vec::new();
        for page_number in 1..=total_pages {
            let request = PageRequest::new(page_number, page_size).unwrap();
            reassembled.extend(paginate(&catches, request).items);
        }

        assert_eq!(reassembled, catches);
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let catches = numbered_catches(10);

        let page = paginate(&catches, PageRequest::new(2, 5).unwrap());
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_empty_input_reports_one_empty_page() {
        let page = paginate(&[], PageRequest::new(1, 5).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_far_out_of_range_page_is_empty() {
        let catches = numbered_catches(3);
        let page = paginate(&catches, PageRequest::new(1000, 5).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn test_paginate_is_idempotent_on_identical_inputs() {
        let catches = numbered_catches(6);
        let request = PageRequest::new(2, 4).unwrap();

        assert_eq!(paginate(&catches, request), paginate(&catches, request));
    }
}
