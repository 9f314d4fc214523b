//! The UI renders the reader state into something visible.
//!
//! The screen is split into the table of contents on the left, the zine body on the right and a
//! help bar at the bottom. Header lines are emphasised and the active keyword is painted
//! wherever it occurs in its paragraph.

use crate::highlight::find_matches;
use crate::reader::Reader;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the reader.
pub fn draw(f: &mut Frame, reader: &mut Reader) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    draw_toc(f, reader, panes[0]);
    draw_body(f, reader, panes[1]);

    let help = if reader.back_to_top_visible() {
        "↑/↓: Select | Enter: Jump | PgUp/PgDn, j/k: Scroll | b: Back to contents | q: Quit"
    } else {
        "↑/↓: Select | Enter: Jump | PgUp/PgDn, j/k: Scroll | q: Quit"
    };
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, rows[1]);
}

fn draw_toc(f: &mut Frame, reader: &Reader, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = reader
        .rows
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let style = match (row.link.is_some(), row.depth) {
                (false, _) => Style::default().fg(Color::DarkGray),
                (true, 0) => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                (true, _) => Style::default().fg(Color::Yellow),
            };
            ListItem::new(Line::from(Span::styled(
                format!("{indent}{}", row.label),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Contents"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !reader.rows.is_empty() {
        state.select(Some(reader.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_body(f: &mut Frame, reader: &mut Reader, area: ratatui::layout::Rect) {
    let block = Block::default().borders(Borders::ALL).title("Zine");
    let inner = block.inner(area);
    f.render_widget(block, area);
    reader.viewport_height = usize::from(inner.height).max(1);

    let doc = reader.state.document();
    let highlight = reader.shown_highlight.as_ref().and_then(|h| {
        let span = reader.state.nav().targets.get(&h.target)?;
        Some((span.line_start..span.line_start + span.line_count, &h.keyword))
    });

    let end = (reader.scroll + reader.viewport_height).min(doc.lines.len());
    let lines: Vec<Line> = (reader.scroll..end)
        .map(|i| {
            let text = doc.lines[i].as_str();
            if doc.section_at_line(i).is_some() {
                return Line::from(Span::styled(
                    text.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            match &highlight {
                Some((range, keyword)) if range.contains(&i) => highlighted_line(text, keyword),
                _ => Line::from(text.to_string()),
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn highlighted_line(text: &str, keyword: &str) -> Line<'static> {
    let marked = Style::default().fg(Color::Black).bg(Color::Yellow);
    let mut spans = Vec::new();
    let mut last = 0;
    for range in find_matches(text, keyword) {
        spans.push(Span::raw(text[last..range.start].to_string()));
        spans.push(Span::styled(text[range.clone()].to_string(), marked));
        last = range.end;
    }
    spans.push(Span::raw(text[last..].to_string()));
    Line::from(spans)
}
