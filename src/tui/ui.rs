use crate::catalog::CatalogEntry;
use crate::tui::app::App;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const SEARCH_PREFIX: &str = " \u{1F50D} ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Sidebar + content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.config.sidebar_width),
            Constraint::Min(20),
        ])
        .split(chunks[1]);

    draw_sidebar(frame, app, body[0]);
    draw_content(frame, app, body[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Show cursor in the search bar when focused
    if app.search.focused {
        let typed = &app.search.query[..app.search.cursor_pos];
        let cursor_x = chunks[0].x + 1 + SEARCH_PREFIX.width() as u16 + typed.width() as u16;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        colors::focused_border()
    } else {
        colors::idle_border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search (Ctrl+K) ");

    let query_style = if app.search.select_all {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::raw(SEARCH_PREFIX),
        Span::styled(app.search.query.clone(), query_style),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_sidebar(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Topics ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The measured viewport height feeds paging and the centering scroll.
    app.sidebar.visible_rows = inner.height as usize;
    app.sidebar.clamp_scroll(app.rows.len());

    if app.rows.is_empty() {
        let empty = Paragraph::new(Text::from(vec![
            Line::raw(""),
            Line::styled("No matching topics", colors::dim()),
            Line::raw(""),
            Line::styled("Esc clears the filter", colors::dim()),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let current = app.current_path().to_string();
    let start = app.sidebar.scroll_offset;
    let end = (start + inner.height as usize).min(app.rows.len());

    let mut lines = Vec::with_capacity(end - start);
    for row in start..end {
        let entry = &app.catalog.entries()[app.rows[row]];
        let is_selected = app.sidebar.selected == Some(row);

        let line = match entry {
            CatalogEntry::Header { title } => Line::styled(title.clone(), colors::section()),
            CatalogEntry::Link { title, path, .. } => {
                let active = *path == current;
                let marker = if active { "\u{203A} " } else { "  " };
                let mut style = if active {
                    colors::active_link()
                } else {
                    colors::link()
                };
                if is_selected {
                    style = style.patch(colors::selected());
                }
                Line::styled(format!("{marker}{title}"), style)
            }
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    let (title, body) = match app.active_topic() {
        Some(topic) => {
            let mut lines = vec![
                Line::styled(topic.path.to_string(), colors::dim()),
                Line::raw(""),
                Line::raw(topic.blurb.to_string()),
            ];
            if let Some(section) = topic.section {
                lines.push(Line::raw(""));
                lines.push(Line::from(vec![
                    Span::styled("Section: ", colors::dim()),
                    Span::raw(section.to_string()),
                ]));
            }
            (format!(" {} ", topic.title), Text::from(lines))
        }
        None => (
            " Notes ".to_string(),
            Text::styled("Pick a topic from the sidebar", colors::dim()),
        ),
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.search.query.trim().is_empty() {
        format!(" {}", app.status_message)
    } else {
        format!(" {} | filter: \"{}\"", app.status_message, app.search.query)
    };

    let right_text = " Ctrl+K:Search  Tab:List  \u{2191}\u{2193}:Move  Enter:Open  Esc:Clear  Ctrl+Q:Quit ";

    // Left-aligned state + padding + right-aligned key hints
    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    frame.render_widget(Paragraph::new(status_str).style(colors::status_bar()), area);
}
