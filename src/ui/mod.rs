//! Terminal UI: screen layout, the reply bar, the popup menu, the whitelist
//! panel, and toasts.

pub mod bar;
pub mod layout;
pub mod menu;
pub mod toast;
pub mod whitelist_panel;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, MenuState};

/// Draw one frame. Also records the hit-test rectangles for every
/// interactive element on `app.areas`; mouse handling works off the rects
/// of the frame the user actually saw.
pub fn draw(frame: &mut Frame, app: &mut App) {
    app.areas.clear();

    let screen = frame.area();
    let layout = layout::screen_layout(screen);

    draw_transcript(frame, app, layout.transcript);
    draw_status(frame, app, layout.status);

    if app.config.enabled {
        let entries = app.config.whitelist.entries();
        let labels: Vec<&str> = if app.bar_buttons_visible() {
            entries.iter().map(|e| e.label.as_str()).collect()
        } else {
            Vec::new()
        };
        let bar_layout = bar::bar_layout(layout.bar, &labels);
        bar::render(frame, &bar_layout, entries, app.menu.is_open());
        app.areas.trigger = bar_layout.trigger;
        app.areas.bar_buttons = bar_layout.buttons;
    }

    if let MenuState::Open(content) = &app.menu {
        let anchor = app.areas.trigger.unwrap_or(layout.bar);
        let menu_layout = menu::menu_layout(screen, anchor, content);
        menu::render(frame, &menu_layout, content);
        app.areas.menu = Some(menu_layout.area);
        app.areas.menu_items = menu_layout.items;
    }

    if app.panel_open {
        let entries = app.config.whitelist.entries();
        let panel_layout = whitelist_panel::panel_layout(screen, entries.len());
        whitelist_panel::render(frame, &panel_layout, entries);
        app.areas.panel = Some(panel_layout.area);
        app.areas.panel_rows = panel_layout.rows;
    }

    app.toasts.render(frame, screen);
}

fn draw_transcript(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Chat ",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ));

    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = if app.transcript.is_empty() {
        vec![Line::from(Span::styled(
            "(no messages yet)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let skip = app.transcript.len().saturating_sub(visible);
        app.transcript[skip..]
            .iter()
            .map(|message| {
                Line::from(vec![
                    Span::styled("➤ ", Style::default().fg(Color::Cyan)),
                    Span::raw(message.clone()),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled(" q ", Style::default().fg(Color::Cyan)),
        Span::styled("quit · ", Style::default().fg(Color::DarkGray)),
        Span::styled("m ", Style::default().fg(Color::Cyan)),
        Span::styled("menu · ", Style::default().fg(Color::DarkGray)),
        Span::styled("w ", Style::default().fg(Color::Cyan)),
        Span::styled("pins · ", Style::default().fg(Color::DarkGray)),
        Span::styled("e ", Style::default().fg(Color::Cyan)),
        Span::styled("show/hide", Style::default().fg(Color::DarkGray)),
    ];
    if !app.config.enabled {
        spans.push(Span::styled(
            "  [quick replies hidden]",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
