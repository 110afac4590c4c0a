/// Lightbox position over the published visible-item list. Every operation
/// takes the current list length because the filter may change it at any
/// time; an empty list never reaches the modulo arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxState {
    index: usize,
    open: bool,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Item to display, if any.
    pub fn current(&self) -> Option<usize> {
        self.open.then_some(self.index)
    }

    /// Gallery item under the current position of `visible`, if open.
    pub fn current_item(&self, visible: &[usize]) -> Option<usize> {
        self.current().and_then(|index| visible.get(index).copied())
    }

    /// Opens at `index`; refuses indices that resolve to no item.
    pub fn open(&mut self, index: usize, visible_len: usize) -> bool {
        if index >= visible_len {
            return false;
        }
        self.index = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self, visible_len: usize) -> Option<usize> {
        if visible_len == 0 {
            return None;
        }
        self.index = (self.index + 1) % visible_len;
        Some(self.index)
    }

    pub fn prev(&mut self, visible_len: usize) -> Option<usize> {
        if visible_len == 0 {
            return None;
        }
        self.index = (self.index % visible_len + visible_len - 1) % visible_len;
        Some(self.index)
    }

    /// Reconciles with a freshly published list: an emptied list closes the
    /// lightbox, a shrunken one pulls the index back into range.
    pub fn sync(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.open = false;
            self.index = 0;
        } else {
            self.index %= visible_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened_at(index: usize, len: usize) -> LightboxState {
        let mut state = LightboxState::default();
        assert!(state.open(index, len));
        state
    }

    #[test]
    fn open_rejects_missing_items() {
        let mut state = LightboxState::default();
        assert!(!state.open(3, 3));
        assert!(!state.is_open());
        assert_eq!(state.current(), None);
        assert!(state.open(2, 3));
        assert_eq!(state.current(), Some(2));
    }

    #[test]
    fn close_hides_index() {
        let mut state = opened_at(1, 4);
        state.close();
        assert_eq!(state.current(), None);
    }

    #[test]
    fn next_cycles_back_after_n_steps() {
        for len in 1..=6 {
            for start in 0..len {
                let mut state = opened_at(start, len);
                for _ in 0..len {
                    state.next(len);
                }
                assert_eq!(state.index(), start);
            }
        }
    }

    #[test]
    fn prev_and_next_cancel_out() {
        for len in 1..=5 {
            for start in 0..len {
                let mut state = opened_at(start, len);
                state.prev(len);
                state.next(len);
                assert_eq!(state.index(), start);
                state.next(len);
                state.prev(len);
                assert_eq!(state.index(), start);
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut state = opened_at(0, 3);
        assert_eq!(state.prev(3), Some(2));
        assert_eq!(state.next(3), Some(0));
    }

    #[test]
    fn empty_list_is_a_no_op_and_closes_on_sync() {
        let mut state = opened_at(2, 5);
        assert_eq!(state.next(0), None);
        assert_eq!(state.prev(0), None);
        assert_eq!(state.index(), 2);
        state.sync(0);
        assert!(!state.is_open());
    }

    #[test]
    fn current_item_follows_the_published_list() {
        let mut state = opened_at(1, 3);
        assert_eq!(state.current_item(&[0, 2, 5]), Some(2));
        state.sync(3);
        assert_eq!(state.current_item(&[1, 4, 6]), Some(4));
        state.close();
        assert_eq!(state.current_item(&[1, 4, 6]), None);
    }

    #[test]
    fn shrinking_list_keeps_index_in_range() {
        let mut state = opened_at(4, 5);
        state.sync(2);
        assert!(state.is_open());
        assert_eq!(state.index(), 0);
        assert_eq!(state.prev(2), Some(1));
    }
}
