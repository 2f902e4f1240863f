//! The always-visible reply bar: pinned reply buttons plus the menu trigger.
//!
//! Pinned buttons fill from the left in whitelist order; the trigger button
//! sits at the right edge. Buttons that would overlap the trigger are simply
//! not shown (the management panel still lists every entry).

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::whitelist::WhitelistEntry;

/// Label on the menu trigger button.
pub const TRIGGER_LABEL: &str = " ≡ Replies ";

/// Horizontal padding inside a pinned button, per side.
const BUTTON_PADDING: u16 = 1;
/// Gap between adjacent pinned buttons.
const BUTTON_GAP: u16 = 1;

/// Computed bar geometry for rendering and hit-testing.
#[derive(Debug, Default)]
pub struct BarLayout {
    /// One rect per visible pinned button, parallel to the leading
    /// whitelist entries
    pub buttons: Vec<Rect>,
    pub trigger: Option<Rect>,
}

/// Lay out the bar row. `labels` are the pinned button captions in store
/// order; pass an empty slice to lay out only the trigger.
pub fn bar_layout(area: Rect, labels: &[&str]) -> BarLayout {
    if area.width == 0 || area.height == 0 {
        return BarLayout::default();
    }

    let trigger_width = (TRIGGER_LABEL.chars().count() as u16).min(area.width);
    let trigger = Rect::new(
        area.right() - trigger_width,
        area.y,
        trigger_width,
        1,
    );

    let mut buttons = Vec::new();
    let mut x = area.x;
    for label in labels {
        let width = label.chars().count() as u16 + BUTTON_PADDING * 2;
        // Keep one gap column between the last button and the trigger.
        if x + width + BUTTON_GAP > trigger.x {
            break;
        }
        buttons.push(Rect::new(x, area.y, width, 1));
        x += width + BUTTON_GAP;
    }

    BarLayout {
        buttons,
        trigger: Some(trigger),
    }
}

/// Render the bar into the geometry produced by [`bar_layout`].
pub fn render(
    frame: &mut Frame,
    layout: &BarLayout,
    entries: &[WhitelistEntry],
    menu_open: bool,
) {
    for (rect, entry) in layout.buttons.iter().zip(entries) {
        let button = Paragraph::new(Span::styled(
            format!(" {} ", entry.label),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));
        frame.render_widget(button, *rect);
    }

    if let Some(trigger) = layout.trigger {
        let style = if menu_open {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow).bg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(Span::styled(TRIGGER_LABEL, style)), trigger);
    }
}
