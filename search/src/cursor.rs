/// Selection cursor over the flat result sequence. `None` is the idle
/// state (the distilled `-1`): nothing explicitly selected, with the
/// first result acting as the implicit default on confirm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavCursor {
    selected: Option<isize>,
}

impl NavCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected.map(|position| position as usize)
    }

    pub fn is_idle(&self) -> bool {
        self.selected.is_none()
    }

    /// `(cursor + 1) mod N`, wrapping last → first. No-op on an empty
    /// result set.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(-1);
        self.selected = Some((current + 1).rem_euclid(len as isize));
    }

    /// `(cursor - 1 + N) mod N`. Applied to the idle cursor this lands on
    /// `N - 2`, matching the source system's arithmetic exactly.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(-1);
        self.selected = Some((current - 1 + len as isize).rem_euclid(len as isize));
    }

    /// Absolute set from a pointer hovering a rendered row.
    pub fn hover(&mut self, position: usize) {
        self.selected = Some(position as isize);
    }

    /// Back to idle. Invoked whenever the settled query changes, since a
    /// new result set invalidates the old position.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Position a confirm acts on: the explicit selection when it is in
    /// range, else the first result, else nothing.
    pub fn effective(&self, len: usize) -> Option<usize> {
        match self.selected() {
            Some(position) if position < len => Some(position),
            _ if len > 0 => Some(0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_is_a_noop_on_empty_results() {
        let mut cursor = NavCursor::new();
        cursor.move_down(0);
        cursor.move_up(0);
        assert!(cursor.is_idle());
        assert_eq!(cursor.effective(0), None);
    }

    #[test]
    fn move_down_wraps_from_last_to_first() {
        let mut cursor = NavCursor::new();
        cursor.move_down(3);
        assert_eq!(cursor.selected(), Some(0));
        cursor.move_down(3);
        cursor.move_down(3);
        assert_eq!(cursor.selected(), Some(2));
        cursor.move_down(3);
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn move_up_from_idle_matches_source_arithmetic() {
        let mut cursor = NavCursor::new();
        cursor.move_up(4);
        assert_eq!(cursor.selected(), Some(2));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let len = 5;
        let mut cursor = NavCursor::new();
        cursor.hover(3);
        for _ in 0..len {
            cursor.move_down(len);
        }
        assert_eq!(cursor.selected(), Some(3));
        for _ in 0..len {
            cursor.move_up(len);
        }
        assert_eq!(cursor.selected(), Some(3));
    }

    #[test]
    fn effective_defaults_to_first_result() {
        let cursor = NavCursor::new();
        assert_eq!(cursor.effective(3), Some(0));

        let mut explicit = NavCursor::new();
        explicit.hover(2);
        assert_eq!(explicit.effective(3), Some(2));
    }

    #[test]
    fn hover_then_reset_goes_idle() {
        let mut cursor = NavCursor::new();
        cursor.hover(7);
        assert_eq!(cursor.selected(), Some(7));
        cursor.reset();
        assert!(cursor.is_idle());
    }
}
