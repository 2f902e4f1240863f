//! The whitelist management overlay.
//!
//! A centered panel listing every pinned reply as `set > label`. Rows are
//! removable by long-press; an empty whitelist shows a single placeholder
//! row instead of an empty container.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::whitelist::WhitelistEntry;

const PANEL_WIDTH: u16 = 44;
const PLACEHOLDER: &str = "(nothing pinned yet)";
const HINT: &str = "hold a row to unpin · Esc closes";

/// Computed panel geometry: the overlay rect plus one rect per whitelist
/// row. The placeholder row is not interactive, so `rows` is empty for an
/// empty whitelist.
#[derive(Debug, Default)]
pub struct PanelLayout {
    pub area: Rect,
    pub rows: Vec<Rect>,
}

/// Center the panel on `screen`, sized to the row count.
pub fn panel_layout(screen: Rect, row_count: usize) -> PanelLayout {
    // Borders, rows (at least the placeholder), hint line.
    let height = (row_count.max(1) as u16 + 3).min(screen.height);
    let width = PANEL_WIDTH.min(screen.width);
    let x = screen.x + (screen.width.saturating_sub(width)) / 2;
    let y = screen.y + (screen.height.saturating_sub(height)) / 2;
    let area = Rect::new(x, y, width, height);

    let inner_x = area.x + 1;
    let inner_width = area.width.saturating_sub(2);
    let rows = (0..row_count)
        .map(|i| Rect::new(inner_x, area.y + 1 + i as u16, inner_width, 1))
        .filter(|r| r.bottom() < area.bottom())
        .collect();

    PanelLayout { area, rows }
}

/// Render the panel into the geometry from [`panel_layout`].
pub fn render(frame: &mut Frame, layout: &PanelLayout, entries: &[WhitelistEntry]) {
    frame.render_widget(Clear, layout.area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Pinned Replies ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Black));

    let mut lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        entry.set_name.clone(),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(" > ", Style::default().fg(Color::DarkGray)),
                    Span::styled(entry.label.clone(), Style::default().fg(Color::White)),
                ])
            })
            .collect()
    };
    lines.push(Line::from(Span::styled(
        HINT,
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), layout.area);
}
