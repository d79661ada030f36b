//! Pagination primitives for the post listing.

use serde::{Deserialize, Deserializer, Serialize};

/// Pagination query parameters.
///
/// An absent, non-numeric, zero, or negative page is treated as page 1.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<i64>,
}

/// Query values arrive as strings; anything that does not parse as an
/// integer is treated as absent instead of rejecting the request.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

impl PageRequest {
    pub fn current_page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// The record window for this page: `(offset, limit)`.
    ///
    /// The offset saturates instead of overflowing, so an absurdly large
    /// page number yields an empty window rather than a panic or a negative
    /// offset.
    pub fn window(&self, page_size: i64) -> (i64, i64) {
        (page_size.saturating_mul(self.current_page() - 1), page_size)
    }
}

/// One page of results plus the pointer to the next page, if any.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T: Serialize> {
    pub items: Vec<T>,
    pub current_page: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<i64>,
}

impl<T: Serialize> PageResult<T> {
    /// Assemble a page. `next_page` is present iff at least one record
    /// exists beyond the current window.
    pub fn new(items: Vec<T>, request: &PageRequest, page_size: i64, total: i64) -> Self {
        let current_page = request.current_page();
        // Saturating keeps the comparison meaningful for extreme page
        // numbers: a saturated product can never be below the total, so
        // next_page comes out absent.
        let next_page = if current_page.saturating_mul(page_size) < total {
            Some(current_page + 1)
        } else {
            None
        };
        Self {
            items,
            current_page,
            next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: i64) -> PageRequest {
        PageRequest { page: Some(n) }
    }

    #[test]
    fn absent_page_defaults_to_one() {
        let p = PageRequest::default();
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.window(10), (0, 10));
    }

    #[test]
    fn non_positive_pages_clamp_to_one() {
        assert_eq!(page(0).current_page(), 1);
        assert_eq!(page(-5).current_page(), 1);
        assert_eq!(page(-5).window(10), (0, 10));
    }

    #[test]
    fn non_numeric_page_is_treated_as_absent() {
        let p: PageRequest = serde_json::from_str(r#"{"page":"abc"}"#).unwrap();
        assert_eq!(p.page, None);
        assert_eq!(p.current_page(), 1);

        let p: PageRequest = serde_json::from_str(r#"{"page":"3"}"#).unwrap();
        assert_eq!(p.page, Some(3));
    }

    #[test]
    fn window_offset_calculation() {
        assert_eq!(page(1).window(10), (0, 10));
        assert_eq!(page(2).window(10), (10, 10));
        assert_eq!(page(7).window(25), (150, 25));
    }

    #[test]
    fn next_page_present_while_records_remain() {
        // 25 posts at 10 per page: pages 1 and 2 have a successor, 3 does not.
        let r = PageResult::new(vec![(); 10], &page(1), 10, 25);
        assert_eq!(r.current_page, 1);
        assert_eq!(r.next_page, Some(2));

        let r = PageResult::new(vec![(); 10], &page(2), 10, 25);
        assert_eq!(r.next_page, Some(3));

        let r = PageResult::new(vec![(); 5], &page(3), 10, 25);
        assert_eq!(r.next_page, None);
    }

    #[test]
    fn next_page_absent_on_exact_boundary() {
        let r = PageResult::new(vec![(); 10], &page(2), 10, 20);
        assert_eq!(r.next_page, None);
    }

    #[test]
    fn next_page_absent_for_empty_store() {
        let r = PageResult::new(Vec::<()>::new(), &page(1), 10, 0);
        assert_eq!(r.current_page, 1);
        assert_eq!(r.next_page, None);
    }

    #[test]
    fn next_page_absent_beyond_last_page() {
        let r = PageResult::new(Vec::<()>::new(), &page(9), 10, 25);
        assert_eq!(r.current_page, 9);
        assert_eq!(r.next_page, None);
    }

    #[test]
    fn window_saturates_for_extreme_pages() {
        // A page number near i64::MAX must not overflow the offset; it
        // simply addresses a window far past the end of the data.
        assert_eq!(page(i64::MAX).window(10), (i64::MAX, 10));
        assert_eq!(
            page(1_000_000_000_000).window(10),
            (9_999_999_999_990, 10)
        );
    }

    #[test]
    fn extreme_page_yields_empty_page_without_next() {
        let r = PageResult::new(Vec::<()>::new(), &page(i64::MAX), 10, 25);
        assert_eq!(r.current_page, i64::MAX);
        assert_eq!(r.next_page, None);
        assert!(r.items.is_empty());
    }

    #[test]
    fn next_page_skipped_in_json_when_absent() {
        let r = PageResult::new(vec![1, 2], &page(1), 10, 2);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("next_page").is_none());

        let r = PageResult::new(vec![1, 2], &page(1), 2, 5);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["next_page"], 2);
    }
}
