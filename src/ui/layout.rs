//! Top-level screen layout: transcript, reply bar, status line.

use ratatui::layout::{Constraint, Layout, Rect};

/// The three fixed screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub transcript: Rect,
    pub bar: Rect,
    pub status: Rect,
}

/// Split the screen vertically: transcript takes the rest, the reply bar and
/// the status line get one row each.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [transcript, bar, status] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenLayout {
        transcript,
        bar,
        status,
    }
}
