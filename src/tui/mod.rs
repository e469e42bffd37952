pub mod app;
pub mod colors;
pub mod search;
pub mod sidebar;
pub mod ui;

use crate::catalog::Catalog;
use crate::session::QueryStore;
use crate::AppConfig;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

/// Entry point: run the interactive browser in the current terminal
pub fn run(catalog: Catalog, config: AppConfig, store: Box<dyn QueryStore>) -> crate::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = app::App::new(catalog, config, store);
    let result = app.run(&mut terminal);
    restore_terminal(&mut terminal);
    result
}

fn setup_terminal() -> crate::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort teardown: never let cleanup mask the app's own result.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
}
