//! Transient toast notifications.
//!
//! Execution failures and whitelist feedback surface here instead of being
//! thrown; toasts expire on their own and are rendered stacked in the
//! bottom-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn color(self) -> Color {
        match self {
            ToastKind::Info => Color::Cyan,
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.duration
    }
}

/// Owns the visible toast queue. Oldest toasts are evicted past the cap.
#[derive(Debug, Default)]
pub struct ToastManager {
    queue: VecDeque<Toast>,
}

impl ToastManager {
    const MAX_VISIBLE: usize = 4;
    const DEFAULT_DURATION: Duration = Duration::from_secs(3);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.queue.push_back(Toast {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: Self::DEFAULT_DURATION,
        });
        while self.queue.len() > Self::MAX_VISIBLE {
            self.queue.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    /// Drop expired toasts. Called once per event-loop tick.
    pub fn update(&mut self, now: Instant) {
        self.queue.retain(|t| !t.is_expired(now));
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Stack slot for the `idx`-th toast counting from the corner, or `None`
    /// once the stack runs off the top of `area`. The slot width shrinks
    /// with the terminal but always keeps a one-column right margin.
    fn slot(area: Rect, idx: usize) -> Option<Rect> {
        const WIDTH: u16 = 36;
        const HEIGHT: u16 = 3;
        const GAP: u16 = 0;

        let width = WIDTH.min(area.width.saturating_sub(1));
        let height = HEIGHT.min(area.height);
        let needed = height + 1 + idx as u16 * (height + GAP);
        if needed > area.height || width == 0 {
            return None;
        }
        let x = area.right().saturating_sub(width + 1);
        let y = area.bottom() - needed;
        Some(Rect::new(x, y, width, height))
    }

    /// Render the queue stacked bottom-right, newest closest to the corner.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for (idx, toast) in self.queue.iter().rev().enumerate() {
            let Some(toast_area) = Self::slot(area, idx) else {
                break;
            };

            frame.render_widget(Clear, toast_area);

            let accent = Style::default().fg(toast.kind.color());
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(accent)
                .style(Style::default().bg(Color::Black));
            let text = Paragraph::new(Line::from(vec![
                Span::styled(toast.kind.icon(), accent.add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(toast.message.clone()),
            ]))
            .block(block)
            .alignment(Alignment::Left);

            frame.render_widget(text, toast_area);
        }
    }
}
