//! The popup quick-reply menu overlay.
//!
//! Opens above the bar, anchored to the trigger button. Two titled sections
//! (chat replies, then global), one row per reply, with a pin marker on
//! whitelisted items. When the host is absent or disabled a placeholder
//! message renders in place of the items.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{MenuContent, MenuItem};
use crate::host::FetchError;

/// Menu body width, borders included.
const MENU_WIDTH: u16 = 40;
/// Labels longer than this are cut for display.
const MAX_LABEL_CHARS: usize = 30;

const CHAT_TITLE: &str = "Chat Quick Replies";
const GLOBAL_TITLE: &str = "Global Quick Replies";
const EMPTY_CHAT: &str = "(no chat quick replies)";
const EMPTY_GLOBAL: &str = "(no global quick replies)";

/// Computed menu geometry: the overlay rect plus one rect per interactive
/// item, parallel to the flattened item indices (chat first).
#[derive(Debug, Default)]
pub struct MenuLayout {
    pub area: Rect,
    pub items: Vec<Rect>,
}

/// Lay the menu out above `anchor` (the trigger button), right-aligned with
/// it, clamped into `screen`.
pub fn menu_layout(
    screen: Rect,
    anchor: Rect,
    content: &Result<MenuContent, FetchError>,
) -> MenuLayout {
    let inner_rows = match content {
        // Title + at-least-one row per section.
        Ok(content) => 2 + content.chat.len().max(1) as u16 + content.global.len().max(1) as u16,
        Err(_) => 1,
    };
    let height = (inner_rows + 2).min(screen.height);
    let width = MENU_WIDTH.min(screen.width);
    let x = anchor
        .right()
        .saturating_sub(width)
        .max(screen.x)
        .min(screen.right().saturating_sub(width));
    let y = anchor.y.saturating_sub(height).max(screen.y);
    let area = Rect::new(x, y, width, height);

    let mut items = Vec::new();
    if let Ok(content) = content {
        let inner_x = area.x + 1;
        let inner_width = area.width.saturating_sub(2);
        let mut row = area.y + 1;

        row += 1; // chat title
        for _ in &content.chat {
            items.push(Rect::new(inner_x, row, inner_width, 1));
            row += 1;
        }
        if content.chat.is_empty() {
            row += 1; // chat placeholder
        }
        row += 1; // global title
        for _ in &content.global {
            items.push(Rect::new(inner_x, row, inner_width, 1));
            row += 1;
        }

        // Rows clipped away by the screen clamp must not stay hit-testable.
        items.retain(|r| r.bottom() < area.bottom());
    }

    MenuLayout { area, items }
}

/// Render the menu overlay into the geometry from [`menu_layout`].
pub fn render(frame: &mut Frame, layout: &MenuLayout, content: &Result<MenuContent, FetchError>) {
    frame.render_widget(Clear, layout.area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Quick Replies ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Black));

    let lines = match content {
        Ok(content) => {
            let mut lines = Vec::new();
            lines.push(section_title(CHAT_TITLE));
            if content.chat.is_empty() {
                lines.push(placeholder_line(EMPTY_CHAT));
            } else {
                lines.extend(content.chat.iter().map(item_line));
            }
            lines.push(section_title(GLOBAL_TITLE));
            if content.global.is_empty() {
                lines.push(placeholder_line(EMPTY_GLOBAL));
            } else {
                lines.extend(content.global.iter().map(item_line));
            }
            lines
        }
        Err(err) => vec![placeholder_line(err.placeholder())],
    };

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, layout.area);
}

fn section_title(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::UNDERLINED),
    ))
}

fn placeholder_line(message: &str) -> Line<'_> {
    Line::from(Span::styled(message, Style::default().fg(Color::DarkGray)))
}

fn item_line(item: &MenuItem) -> Line<'static> {
    let label = truncate_label(&item.reply.label);
    if item.whitelisted {
        // Pinned items get a marker and an accent; membership changes the
        // styling, never the presence or position of the item.
        Line::from(vec![
            Span::styled("▌", Style::default().fg(Color::Green)),
            Span::styled(label, Style::default().fg(Color::Green)),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(label, Style::default().fg(Color::White)),
        ])
    }
}

/// Cut long labels for display, keeping the full label in the data model.
fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let cut: String = label.chars().take(MAX_LABEL_CHARS).collect();
        format!("{cut}…")
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ReplyDescriptor;

    fn item(label: &str, whitelisted: bool) -> MenuItem {
        MenuItem {
            reply: ReplyDescriptor {
                set_name: "S".to_string(),
                label: label.to_string(),
                message: "m".to_string(),
            },
            whitelisted,
        }
    }

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn anchor() -> Rect {
        Rect::new(69, 22, 11, 1)
    }

    #[test]
    fn item_rects_match_flattened_indices() {
        let content = Ok(MenuContent {
            chat: vec![item("Hi", false)],
            global: vec![item("Bye", false), item("Later", false)],
        });
        let layout = menu_layout(screen(), anchor(), &content);
        assert_eq!(layout.items.len(), 3);
        // Rows: border, chat title, chat item, global title, global items.
        assert_eq!(layout.items[0].y, layout.area.y + 2);
        assert_eq!(layout.items[1].y, layout.area.y + 4);
        assert_eq!(layout.items[2].y, layout.area.y + 5);
    }

    #[test]
    fn empty_section_keeps_a_placeholder_row() {
        let content = Ok(MenuContent {
            chat: Vec::new(),
            global: vec![item("Bye", false)],
        });
        let layout = menu_layout(screen(), anchor(), &content);
        assert_eq!(layout.items.len(), 1);
        // The global item sits below the chat title and its placeholder row.
        assert_eq!(layout.items[0].y, layout.area.y + 4);
    }

    #[test]
    fn error_state_has_no_interactive_items() {
        let content = Err(FetchError::Unavailable);
        let layout = menu_layout(screen(), anchor(), &content);
        assert!(layout.items.is_empty());
        assert_eq!(layout.area.height, 3);
    }

    #[test]
    fn menu_opens_above_the_anchor() {
        let content = Err(FetchError::Disabled);
        let layout = menu_layout(screen(), anchor(), &content);
        assert_eq!(layout.area.bottom(), anchor().y);
        assert_eq!(layout.area.right(), anchor().right());
    }

    #[test]
    fn clamped_menu_drops_rects_for_clipped_items() {
        let content = Ok(MenuContent {
            chat: (0..10).map(|i| item(&format!("c{i}"), false)).collect(),
            global: Vec::new(),
        });
        let short_screen = Rect::new(0, 0, 80, 6);
        let layout = menu_layout(short_screen, Rect::new(69, 5, 11, 1), &content);

        assert_eq!(layout.area.height, 6);
        assert!(layout.items.len() < 10);
        for rect in &layout.items {
            assert!(rect.bottom() < layout.area.bottom());
        }
    }

    #[test]
    fn long_labels_are_truncated_for_display() {
        let long = "x".repeat(40);
        let shown = truncate_label(&long);
        assert_eq!(shown.chars().count(), MAX_LABEL_CHARS + 1);
        assert!(shown.ends_with('…'));
        assert_eq!(truncate_label("short"), "short");
    }
}
