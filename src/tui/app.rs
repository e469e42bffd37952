use crate::catalog::Catalog;
use crate::filter::{self, FilterOutcome};
use crate::logging;
use crate::router::{RouteState, Router};
use crate::session::QueryStore;
use crate::topics::{self, Topic};
use crate::tui::search::SearchState;
use crate::tui::sidebar::SidebarState;
use crate::tui::ui;
use crate::AppConfig;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// Interactive browser state.
///
/// Owns the catalog, the derived filter outcome and the interaction state
/// (query, selection, scroll). There are only two informal modes: idle
/// (empty query) and filtering (non-empty query); every keystroke moves
/// between them synchronously, so there is no loading state anywhere.
pub struct App {
    pub catalog: Catalog,
    pub config: AppConfig,

    // Derived per query change: visibility flags plus the filtered row
    // list (catalog indices of visible entries, in catalog order).
    pub outcome: FilterOutcome,
    pub rows: Vec<usize>,

    // Sub-states
    pub search: SearchState,
    pub sidebar: SidebarState,

    route: RouteState,
    store: Box<dyn QueryStore>,

    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, config: AppConfig, store: Box<dyn QueryStore>) -> Self {
        let initial_path = catalog.first_link_path().unwrap_or("/").to_string();

        let mut app = Self {
            outcome: filter::apply(&catalog, ""),
            rows: Vec::new(),
            catalog,
            config,
            search: SearchState::default(),
            sidebar: SidebarState::default(),
            route: RouteState::new(&initial_path),
            store,
            status_message: "Ready".to_string(),
            should_quit: false,
        };

        app.restore_query();
        app.sync_active_into_view();
        app
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend<Error = std::io::Error>>) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(40);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            // The centering scroll is deferred to this point: the draw that
            // just finished measured the viewport, so the target row can be
            // placed correctly. A request scheduled after this draw waits
            // for the next one.
            self.resolve_pending_scroll();

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind != KeyEventKind::Release {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.sidebar.step_animation();
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    // --- Query state ---

    /// Seed the query from the persisted store, once at startup.
    fn restore_query(&mut self) {
        if self.config.remember_query {
            if let Some(query) = self.store.load() {
                self.search.set(query);
            }
        }
        self.refilter();
    }

    pub fn set_query(&mut self, next: &str) {
        self.search.set(next.to_string());
        self.persist_query();
        self.refilter();
    }

    pub fn clear_query(&mut self) {
        self.search.clear();
        self.persist_query();
        self.refilter();
    }

    fn persist_query(&mut self) {
        if self.config.remember_query {
            self.store.save(&self.search.query);
        }
    }

    /// Recompute visibility for the current query and rebuild the filtered
    /// row list. Selection lands on the active topic when it survived the
    /// filter, else on the first visible link.
    fn refilter(&mut self) {
        self.outcome = filter::apply(&self.catalog, &self.search.query);
        self.rows = self.outcome.visible_indices();

        let current = self.route.current_path().to_string();
        self.sidebar.selected = self
            .row_of_path(&current)
            .or_else(|| self.link_row_at_or_after(0));
        self.sidebar.scroll_offset = 0;

        self.status_message = format!("{} topics", self.outcome.visible_links());
        logging::debug(
            "FILTER",
            &format!(
                "query '{}' -> {} topics",
                self.search.query,
                self.outcome.visible_links()
            ),
        );
    }

    // --- Navigation ---

    /// Navigate to a topic and keep its sidebar entry in view.
    pub fn open_topic(&mut self, path: &str) {
        self.route.navigate(path);
        self.sidebar.selected = self.row_of_path(path);
        self.sync_active_into_view();
        logging::debug("NAV", &format!("navigate -> {}", path));
    }

    /// Schedule a scroll that centers the active entry after the next draw.
    fn sync_active_into_view(&mut self) {
        let path = self.route.current_path().to_string();
        self.sidebar.request_center(&path);
    }

    /// Fire the deferred centering scroll, if any. Runs right after a draw.
    /// An active entry that the filter hid is simply not scrolled to.
    fn resolve_pending_scroll(&mut self) {
        let Some(path) = self.sidebar.take_pending() else {
            return;
        };
        let Some(row) = self.row_of_path(&path) else {
            return;
        };
        self.sidebar
            .center_on(row, self.rows.len(), self.config.smooth_scroll);
    }

    /// Navigate to the first visible link in catalog order; no-op when the
    /// filter matched nothing.
    fn activate_first_visible(&mut self) {
        let Some(index) = self.outcome.first_visible_link(&self.catalog) else {
            return;
        };
        if let Some(path) = self.catalog.entries()[index].path().map(str::to_owned) {
            self.open_topic(&path);
        }
    }

    pub fn current_path(&self) -> &str {
        self.route.current_path()
    }

    pub fn active_topic(&self) -> Option<Topic<'_>> {
        topics::find(&self.catalog, self.route.current_path())
    }

    // --- Row helpers (filtered-row space) ---

    fn row_is_link(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|&i| self.catalog.entries()[i].is_link())
    }

    fn row_of_path(&self, path: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|&i| self.catalog.entries()[i].path() == Some(path))
    }

    fn link_row_at_or_after(&self, start: usize) -> Option<usize> {
        (start..self.rows.len()).find(|&r| self.row_is_link(r))
    }

    fn link_row_at_or_before(&self, start: usize) -> Option<usize> {
        if self.rows.is_empty() {
            return None;
        }
        let start = start.min(self.rows.len() - 1);
        (0..=start).rev().find(|&r| self.row_is_link(r))
    }

    fn select_row(&mut self, row: Option<usize>) {
        self.sidebar.selected = row;
        if let Some(r) = row {
            self.sidebar.ensure_visible(r);
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focus_search();
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    self.clear_query();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    /// Focus the search field with its contents selected, so typing
    /// replaces the query outright.
    fn focus_search(&mut self) {
        self.search.focused = true;
        self.search.select_all = true;
        self.search.cursor_pos = self.search.query.len();
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                if self.search.take_select_all() {
                    self.search.query.clear();
                    self.search.cursor_pos = 0;
                }
                self.search.query.insert(self.search.cursor_pos, c);
                self.search.cursor_pos += c.len_utf8();
                self.on_query_edited();
            }
            KeyCode::Backspace => {
                if self.search.take_select_all() {
                    self.search.query.clear();
                    self.search.cursor_pos = 0;
                    self.on_query_edited();
                } else if self.search.cursor_pos > 0 {
                    // Find the previous character boundary
                    let prev = self.search.query[..self.search.cursor_pos]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.search.query.remove(prev);
                    self.search.cursor_pos = prev;
                    self.on_query_edited();
                }
            }
            KeyCode::Delete => {
                if self.search.take_select_all() {
                    self.search.query.clear();
                    self.search.cursor_pos = 0;
                    self.on_query_edited();
                } else if self.search.cursor_pos < self.search.query.len() {
                    self.search.query.remove(self.search.cursor_pos);
                    self.on_query_edited();
                }
            }
            KeyCode::Left => {
                self.search.select_all = false;
                if self.search.cursor_pos > 0 {
                    let prev = self.search.query[..self.search.cursor_pos]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.search.cursor_pos = prev;
                }
            }
            KeyCode::Right => {
                self.search.select_all = false;
                if self.search.cursor_pos < self.search.query.len() {
                    let next = self.search.query[self.search.cursor_pos..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.search.cursor_pos + i)
                        .unwrap_or(self.search.query.len());
                    self.search.cursor_pos = next;
                }
            }
            KeyCode::Home => {
                self.search.select_all = false;
                self.search.cursor_pos = 0;
            }
            KeyCode::End => {
                self.search.select_all = false;
                self.search.cursor_pos = self.search.query.len();
            }
            KeyCode::Enter => {
                self.activate_first_visible();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => {
                let row = self.link_row_at_or_after(0);
                self.select_row(row);
            }
            KeyCode::End => {
                let row = self.link_row_at_or_before(self.rows.len().saturating_sub(1));
                self.select_row(row);
            }

            KeyCode::Enter => {
                if let Some(row) = self.sidebar.selected {
                    let path = self
                        .rows
                        .get(row)
                        .and_then(|&i| self.catalog.entries()[i].path())
                        .map(str::to_owned);
                    if let Some(path) = path {
                        self.open_topic(&path);
                    }
                }
            }

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.query.push(c);
                self.search.cursor_pos = self.search.query.len();
                self.on_query_edited();
            }

            _ => {}
        }
    }

    /// Per-keystroke pipeline: persist the raw query, then recompute
    /// visibility inline. No debounce; the catalog is small enough that a
    /// full pass per keystroke is cheap.
    fn on_query_edited(&mut self) {
        self.persist_query();
        self.refilter();
    }

    // --- Selection over visible links (headers are skipped) ---

    fn select_next(&mut self) {
        let start = self.sidebar.selected.map_or(0, |r| r + 1);
        if let Some(row) = self.link_row_at_or_after(start) {
            self.select_row(Some(row));
        }
    }

    fn select_prev(&mut self) {
        match self.sidebar.selected {
            None | Some(0) => {
                let row = self.link_row_at_or_after(0);
                self.select_row(row);
            }
            Some(r) => {
                if let Some(row) = self.link_row_at_or_before(r - 1) {
                    self.select_row(Some(row));
                }
            }
        }
    }

    fn page_down(&mut self) {
        let jump = self.sidebar.visible_rows.saturating_sub(1).max(1);
        let start = self.sidebar.selected.map_or(0, |r| r.saturating_add(jump));
        let row = self
            .link_row_at_or_after(start)
            .or_else(|| self.link_row_at_or_before(start));
        self.select_row(row);
    }

    fn page_up(&mut self) {
        let jump = self.sidebar.visible_rows.saturating_sub(1).max(1);
        let start = self.sidebar.selected.map_or(0, |r| r.saturating_sub(jump));
        let row = self
            .link_row_at_or_before(start)
            .or_else(|| self.link_row_at_or_after(start));
        self.select_row(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(store: Box<dyn QueryStore>) -> App {
        let config = AppConfig {
            smooth_scroll: false,
            ..Default::default()
        };
        App::new(Catalog::builtin(), config, store)
    }

    fn app() -> App {
        app_with(Box::new(MemoryStore::new()))
    }

    #[test]
    fn restores_persisted_query_at_startup() {
        let app = app_with(Box::new(MemoryStore::seeded("what is react")));
        assert_eq!(app.search.query, "what is react");
        assert_eq!(app.outcome.visible_links(), 1);
        let row = app.sidebar.selected.unwrap();
        let entry = &app.catalog.entries()[app.rows[row]];
        assert_eq!(entry.path(), Some("/intro/what-is-react"));
    }

    #[test]
    fn typing_filters_and_persists_each_keystroke() {
        let store = Arc::new(MemoryStore::new());
        let mut app = app_with(Box::new(store.clone()));
        for c in "use".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.search.query, "use");
        assert_eq!(store.load(), Some("use".to_string()));
        assert!(app.outcome.visible_links() > 0);
    }

    #[test]
    fn ctrl_k_selects_all_so_typing_replaces() {
        let mut app = app();
        app.set_query("hooks");
        app.handle_key(ctrl('k'));
        assert!(app.search.focused);
        app.handle_key(key(KeyCode::Char('z')));
        assert_eq!(app.search.query, "z");
    }

    #[test]
    fn cursor_movement_drops_the_selection() {
        let mut app = app();
        app.set_query("hooks");
        app.handle_key(ctrl('k'));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Char('x')));
        // No replacement: the x lands inside the existing query.
        assert_eq!(app.search.query, "hookxs");
    }

    #[test]
    fn escape_clears_then_unfocuses_then_quits() {
        let mut app = app();
        app.set_query("react");

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.search.query, "");
        assert!(app.search.focused, "clearing must not blur the field");

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.search.focused);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut app = app();
        app.clear_query();
        let first = app.outcome.clone();
        app.clear_query();
        assert_eq!(app.outcome, first);
        assert_eq!(app.outcome.visible_links(), filter::apply(&app.catalog, "").visible_links());
    }

    #[test]
    fn enter_in_search_opens_first_visible_topic() {
        let mut app = app();
        app.set_query("react");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_path(), "/intro/what-is-react");
        assert_eq!(
            app.sidebar.pending_path(),
            Some("/intro/what-is-react"),
            "navigation must schedule a centering scroll"
        );
    }

    #[test]
    fn enter_with_no_matches_does_nothing() {
        let mut app = app();
        let before = app.current_path().to_string();
        app.set_query("zzzzzz");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_path(), before);
    }

    #[test]
    fn newer_navigation_cancels_stale_scroll() {
        let mut app = app();
        app.open_topic("/intro/why-react");
        app.open_topic("/hooks-core/useState");

        app.sidebar.visible_rows = 10;
        app.resolve_pending_scroll();

        let row = app.row_of_path("/hooks-core/useState").unwrap();
        let expected = row
            .saturating_sub(5)
            .min(app.rows.len().saturating_sub(10));
        assert_eq!(app.sidebar.scroll_offset, expected);
        assert_eq!(app.sidebar.pending_path(), None, "exactly one scroll fires");
    }

    #[test]
    fn hidden_active_topic_is_not_scrolled_to() {
        let mut app = app();
        app.open_topic("/hooks-core/useState");
        app.set_query("react"); // hides useState
        let before = app.sidebar.scroll_offset;
        app.resolve_pending_scroll();
        assert_eq!(app.sidebar.scroll_offset, before);
    }

    #[test]
    fn selection_moves_over_links_only() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc)); // leave search
        assert_eq!(app.sidebar.selected, Some(0)); // Home link

        app.handle_key(key(KeyCode::Down));
        let row = app.sidebar.selected.unwrap();
        // Row 1 is the "Intro" header; selection skips to its first topic.
        let entry = &app.catalog.entries()[app.rows[row]];
        assert_eq!(entry.path(), Some("/intro/what-is-react"));
    }

    #[test]
    fn list_enter_opens_the_selected_topic() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_path(), "/intro/what-is-react");
    }

    #[test]
    fn typing_in_list_mode_refocuses_search() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('h')));
        assert!(app.search.focused);
        assert_eq!(app.search.query, "h");
    }

    #[test]
    fn filtering_out_active_topic_moves_selection_to_first_match() {
        let mut app = app();
        app.open_topic("/");
        app.set_query("usestate"); // matches the useState topic only
        let row = app.sidebar.selected.expect("a match must be selected");
        assert!(app.row_is_link(row));
        let entry = &app.catalog.entries()[app.rows[row]];
        assert_eq!(entry.path(), Some("/hooks-core/useState"));
    }
}
