use std::ops::Range;

/// Client-side paging for lists the server returns in full.
///
/// Pages are 1-based. The current page is clamped whenever the row count
/// shrinks below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Always at least one, so an empty list still shows "1 / 1".
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page).max(1)
    }

    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.clamp(1, self.total_pages(len));
    }

    pub fn range(&self, len: usize) -> Range<usize> {
        let page = self.page.clamp(1, self.total_pages(len));
        let start = ((page - 1) * self.per_page).min(len);
        let end = (start + self.per_page).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        &rows[self.range(rows.len())]
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.total_pages(len)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns whether the page changed.
    pub fn next(&mut self, len: usize) -> bool {
        if self.has_next(len) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_pages() {
        let rows: Vec<u32> = (1..=23).collect();
        let mut paginator = Paginator::new(10);

        assert_eq!(paginator.total_pages(rows.len()), 3);
        assert_eq!(paginator.slice(&rows), &rows[0..10]);

        assert!(paginator.next(rows.len()));
        assert!(paginator.next(rows.len()));
        assert_eq!(paginator.slice(&rows), &[21, 22, 23]);
        assert!(!paginator.next(rows.len()));

        assert!(paginator.prev());
        assert_eq!(paginator.page(), 2);
    }

    #[test]
    fn clamps_when_rows_shrink() {
        let mut paginator = Paginator::new(5);
        paginator.next(20);
        paginator.next(20);
        paginator.next(20);
        assert_eq!(paginator.page(), 4);

        let rows = [1, 2, 3, 4, 5, 6];
        assert_eq!(paginator.slice(&rows), &[6]);
        paginator.clamp(rows.len());
        assert_eq!(paginator.page(), 2);
    }

    #[test]
    fn empty_list_has_one_page() {
        let paginator = Paginator::new(0);
        assert_eq!(paginator.per_page(), 1);
        assert_eq!(paginator.total_pages(0), 1);
        assert!(paginator.slice::<u8>(&[]).is_empty());
        assert!(!paginator.has_prev());
    }
}
