//! Application state and core data types for replybar.

mod actions;

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::Config;
use crate::host::{FetchError, FileReplySource, ReplyDescriptor, ReplySource};
use crate::input::PressTracker;
use crate::ui::toast::ToastManager;

/// Interactive element a press session can be armed on. Only the two
/// long-press-capable surfaces are tracked here; plain buttons (trigger,
/// bar) act directly on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// Flattened index into the open menu's items (chat section first)
    MenuItem(usize),
    /// Index into the whitelist management rows
    PanelRow(usize),
}

/// One rendered menu entry: the reply plus its whitelist annotation.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub reply: ReplyDescriptor,
    pub whitelisted: bool,
}

/// The two menu sections, fetched and annotated when the menu opened.
#[derive(Debug, Clone, Default)]
pub struct MenuContent {
    pub chat: Vec<MenuItem>,
    pub global: Vec<MenuItem>,
}

impl MenuContent {
    pub fn item_count(&self) -> usize {
        self.chat.len() + self.global.len()
    }

    /// Item by flattened index: chat items first, then global.
    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        if index < self.chat.len() {
            self.chat.get(index)
        } else {
            self.global.get(index - self.chat.len())
        }
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        let chat_len = self.chat.len();
        if index < chat_len {
            self.chat.get_mut(index)
        } else {
            self.global.get_mut(index - chat_len)
        }
    }
}

/// Popup menu state machine.
#[derive(Debug, Default)]
pub enum MenuState {
    #[default]
    Closed,
    /// Open, holding either the fetched items or the degraded-state marker
    /// rendered as a placeholder.
    Open(Result<MenuContent, FetchError>),
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open(_))
    }
}

/// Screen rectangles recorded during the last render, used for mouse
/// hit-testing. Rebuilt every frame.
#[derive(Debug, Default)]
pub struct HitAreas {
    pub trigger: Option<Rect>,
    pub bar_buttons: Vec<Rect>,
    pub menu: Option<Rect>,
    /// Parallel to the open menu's flattened item indices
    pub menu_items: Vec<Rect>,
    pub panel: Option<Rect>,
    /// Parallel to the whitelist entries; empty when the placeholder row is
    /// shown
    pub panel_rows: Vec<Rect>,
}

impl HitAreas {
    pub fn clear(&mut self) {
        *self = HitAreas::default();
    }
}

/// Application state
pub struct App {
    /// Persisted settings, including the whitelist
    pub config: Config,
    /// The host reply source, if one is present
    pub host: Option<Box<dyn ReplySource>>,
    /// Popup menu state
    pub menu: MenuState,
    /// Whether the whitelist management overlay is open
    pub panel_open: bool,
    /// Click vs long-press disambiguation for menu items and panel rows
    pub press: PressTracker<PressTarget>,
    /// Transient notifications
    pub toasts: ToastManager,
    /// Messages sent this session, newest last
    pub transcript: Vec<String>,
    /// Hit-test rectangles from the last render
    pub areas: HitAreas,
}

impl App {
    /// Create the application: load settings, then the reply sets file.
    /// A corrupt settings file recovers to defaults that still save back to
    /// the same path. A missing sets file leaves the source absent; a
    /// malformed one is reported once and likewise leaves it absent.
    pub fn new() -> Self {
        let (config, config_error) = Config::load();

        let mut replies_error = None;
        let host: Option<Box<dyn ReplySource>> = match Config::replies_path()
            .and_then(|path| FileReplySource::load(&path))
        {
            Ok(Some(source)) => Some(Box::new(source)),
            Ok(None) => None,
            Err(err) => {
                replies_error = Some(format!("{err:#}"));
                None
            }
        };

        let mut app = Self::with_parts(config, host);
        if let Some(err) = config_error {
            app.toasts.error(format!("{err:#}"));
        }
        if let Some(message) = replies_error {
            app.toasts.error(message);
        }
        app
    }

    /// Assemble an application from explicit parts (used by tests and by
    /// [`App::new`]).
    pub fn with_parts(config: Config, host: Option<Box<dyn ReplySource>>) -> Self {
        let hold = Duration::from_millis(config.hold_duration_ms);
        Self {
            config,
            host,
            menu: MenuState::Closed,
            panel_open: false,
            press: PressTracker::new(hold),
            toasts: ToastManager::new(),
            transcript: Vec::new(),
            areas: HitAreas::default(),
        }
    }

    pub fn source(&self) -> Option<&dyn ReplySource> {
        self.host.as_deref()
    }

    /// Whether the bar should show the pinned reply buttons. Mirrors the
    /// host rule for the menu: no source or disabled source means no
    /// buttons, even with a non-empty whitelist.
    pub fn bar_buttons_visible(&self) -> bool {
        self.config.enabled
            && self
                .source()
                .is_some_and(|s| s.is_available() && s.is_enabled())
    }

    /// Per-tick housekeeping: expire toasts and advance the press timer.
    /// A hold that comes due fires here, synchronously.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.update(now);
        if let Some(press) = self.press.tick(now) {
            self.handle_press(press);
        }
    }

    /// Pointer left the terminal (focus loss, resize): tear down any
    /// pending press session without firing.
    pub fn cancel_press(&mut self) {
        self.press.cancel();
    }
}
