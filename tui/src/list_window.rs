/// Scroll window over a list of fixed-height display rows. Keeps the
/// selected row visible by shifting the minimum necessary distance, so
/// small cursor moves never recenter the list.
#[derive(Debug, Default)]
pub(crate) struct ListWindow {
    first: usize,
}

impl ListWindow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn first(&self) -> usize {
        self.first
    }

    pub(crate) fn reset(&mut self) {
        self.first = 0;
    }

    pub(crate) fn ensure_visible(&mut self, selected: usize, len: usize, height: usize) {
        if len == 0 || height == 0 {
            self.first = 0;
            return;
        }
        let max_first = len.saturating_sub(height);
        if self.first > max_first {
            self.first = max_first;
        }
        let selected = selected.min(len - 1);
        if selected < self.first {
            self.first = selected;
        } else if selected >= self.first + height {
            self.first = selected + 1 - height;
        }
    }
}
