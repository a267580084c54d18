//! Page selection for question lists

/// Questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A requested page (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub fn new(page: i64) -> Self {
        Self(page)
    }

    /// Parse a `page` query value. Absent or unparsable means page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        Self(raw.and_then(|s| s.trim().parse().ok()).unwrap_or(1))
    }

    pub fn number(&self) -> i64 {
        self.0
    }

    /// Select this page's records.
    ///
    /// Covers `[(page-1)*10, page*10)`, clipped to the input. Pages below 1
    /// or beyond the data yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.0 < 1 {
            return &[];
        }
        let start = usize::try_from(self.0 - 1)
            .ok()
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
            .unwrap_or(usize::MAX);
        if start >= items.len() {
            return &[];
        }
        let end = (start + QUESTIONS_PER_PAGE).min(items.len());
        &items[start..end]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page() {
        let data = items(25);
        assert_eq!(Page::new(1).slice(&data), &data[0..10]);
    }

    #[test]
    fn partial_last_page() {
        let data = items(25);
        assert_eq!(Page::new(3).slice(&data), &data[20..25]);
    }

    #[test]
    fn past_the_end_is_empty() {
        let data = items(25);
        assert!(Page::new(4).slice(&data).is_empty());
        assert!(Page::new(100).slice(&data).is_empty());
        assert!(Page::new(i64::MAX).slice(&data).is_empty());
    }

    #[test]
    fn non_positive_pages_are_empty() {
        let data = items(25);
        assert!(Page::new(0).slice(&data).is_empty());
        assert!(Page::new(-1).slice(&data).is_empty());
    }

    #[test]
    fn exact_multiple() {
        let data = items(20);
        assert_eq!(Page::new(2).slice(&data).len(), 10);
        assert!(Page::new(3).slice(&data).is_empty());
    }

    #[test]
    fn parses_query_leniently() {
        assert_eq!(Page::from_query(None), Page::new(1));
        assert_eq!(Page::from_query(Some("3")), Page::new(3));
        assert_eq!(Page::from_query(Some("abc")), Page::new(1));
        assert_eq!(Page::from_query(Some("-2")), Page::new(-2));
    }
}
