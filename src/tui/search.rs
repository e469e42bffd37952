/// Search input state for the TUI
pub struct SearchState {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
    /// Set by Ctrl+K: the whole query is selected, so the next edit
    /// replaces it wholesale.
    pub select_all: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
            select_all: false,
        }
    }
}

impl SearchState {
    /// Replace the query, cursor at the end. Used when restoring the
    /// persisted query at startup.
    pub fn set(&mut self, query: String) {
        self.cursor_pos = query.len();
        self.query = query;
        self.select_all = false;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor_pos = 0;
        self.select_all = false;
    }

    /// Consume the pending select-all, reporting whether it was set.
    pub fn take_select_all(&mut self) -> bool {
        std::mem::take(&mut self.select_all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_places_cursor_at_end() {
        let mut search = SearchState::default();
        search.set("hooks".to_string());
        assert_eq!(search.cursor_pos, 5);
        assert_eq!(search.query, "hooks");
    }

    #[test]
    fn take_select_all_is_one_shot() {
        let mut search = SearchState::default();
        search.select_all = true;
        assert!(search.take_select_all());
        assert!(!search.take_select_all());
    }
}
