//! Windowing of an ordered record set into pages.

use admetrics_core::types::Page;

/// Slice `records` into the 1-based `page` of size `limit`.
///
/// Non-positive `page`/`limit` clamp to 1. A page past the end yields an
/// empty data vector with correct metadata so callers can detect and clamp.
/// `total_pages` is `ceil(total / limit)`, 0 for an empty set.
pub fn paginate<T: Clone>(records: &[T], page: u32, limit: u32) -> Page<T> {
    let page = page.max(1);
    let limit = limit.max(1);

    let total = records.len();
    let offset = (page as usize - 1).saturating_mul(limit as usize);
    let data = if offset >= total {
        Vec::new()
    } else {
        records[offset..(offset + limit as usize).min(total)].to_vec()
    };

    Page {
        data,
        total,
        page,
        limit,
        total_pages: total.div_ceil(limit as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1. Windowing ---------------------------------------------------------

    #[test]
    fn test_second_page_of_thirty_five_records() {
        let records: Vec<u64> = (1..=35).collect();
        let page = paginate(&records, 2, 20);

        assert_eq!(page.data, (21..=35).collect::<Vec<u64>>());
        assert_eq!(page.total, 35);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 20);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_concatenated_pages_reconstruct_the_set() {
        let records: Vec<u64> = (1..=53).collect();
        let limit = 10;
        let total_pages = paginate(&records, 1, limit).total_pages;
        assert_eq!(total_pages, 6);

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages as u32 {
            rebuilt.extend(paginate(&records, page, limit).data);
        }
        assert_eq!(rebuilt, records);
    }

    // 2. Edges -------------------------------------------------------------

    #[test]
    fn test_page_past_the_end_is_empty_not_an_error() {
        let records: Vec<u64> = (1..=5).collect();
        let page = paginate(&records, 4, 3);

        assert!(page.data.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_empty_set_has_zero_total_pages() {
        let records: Vec<u64> = Vec::new();
        let page = paginate(&records, 1, 50);

        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_non_positive_page_and_limit_clamp_to_one() {
        let records: Vec<u64> = (1..=3).collect();
        let page = paginate(&records, 0, 0);

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);
        assert_eq!(page.data, vec![1]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let records: Vec<u64> = (1..=7).collect();
        let page = paginate(&records, 3, 3);
        assert_eq!(page.data, vec![7]);
    }
}
