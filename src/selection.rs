/// Selection state shared by every list view.
///
/// Each section view that presents a list carries one of these; the index is
/// meaningful only while its owning view is mounted and resets to 0 on every
/// mount. Up/down movement wraps at both ends, matching the left/right
/// section wraparound — the same policy in every view, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSelection {
    index: usize,
    len: usize,
}

impl ListSelection {
    /// A fresh selection over `len` items, starting at the first.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Currently selected index, always in `[0, len)` for non-empty lists.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move down one item, wrapping past the end.
    pub fn move_down(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move up one item, wrapping past the start.
    pub fn move_up(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let sel = ListSelection::new(5);
        assert_eq!(sel.index(), 0);
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn down_wraps_past_end() {
        let mut sel = ListSelection::new(3);
        let visited: Vec<usize> = (0..5)
            .map(|_| {
                sel.move_down();
                sel.index()
            })
            .collect();
        assert_eq!(visited, [1, 2, 0, 1, 2]);
    }

    #[test]
    fn up_wraps_past_start() {
        let mut sel = ListSelection::new(4);
        sel.move_up();
        assert_eq!(sel.index(), 3);
        sel.move_up();
        assert_eq!(sel.index(), 2);
    }

    #[test]
    fn empty_list_stays_put() {
        let mut sel = ListSelection::new(0);
        sel.move_down();
        sel.move_up();
        assert_eq!(sel.index(), 0);
        assert!(sel.is_empty());
    }
}
