#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDisplay {
    pub start: usize,
    pub end: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageDisplay {
    pub fn compute(page: usize, page_size: usize, fetched_len: usize) -> Self {
        let offset = page * page_size;
        Self {
            start: if fetched_len == 0 { 0 } else { offset + 1 },
            end: offset + fetched_len,
            prev_enabled: page > 0,
            next_enabled: fetched_len >= page_size,
        }
    }

    pub fn range_label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_collection_short_page() {
        let display = PageDisplay::compute(2, 10, 7);
        assert_eq!(display.range_label(), "21-27");
        assert!(display.prev_enabled);
        assert!(!display.next_enabled);
    }

    #[test]
    fn first_full_page() {
        let display = PageDisplay::compute(0, 10, 10);
        assert_eq!(display.range_label(), "1-10");
        assert!(!display.prev_enabled);
        assert!(display.next_enabled);
    }

    #[test]
    fn empty_page_has_zero_range() {
        let display = PageDisplay::compute(0, 10, 0);
        assert_eq!(display.range_label(), "0-0");
        assert!(!display.prev_enabled);
        assert!(!display.next_enabled);
    }
}
