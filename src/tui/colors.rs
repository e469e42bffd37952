use ratatui::style::{Color, Modifier, Style};

pub const STATUS_BG: Color = Color::Rgb(0, 95, 135);
pub const SELECTED_BG: Color = Color::Rgb(60, 60, 80);

pub fn section() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default().fg(Color::White)
}

pub fn active_link() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default().bg(SELECTED_BG).add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn focused_border() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn idle_border() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn status_bar() -> Style {
    Style::default().fg(Color::White).bg(STATUS_BG)
}
