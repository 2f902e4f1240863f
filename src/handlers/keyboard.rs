//! Keyboard handling for the main loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// What the event loop should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') => return KeyAction::Quit,
        KeyCode::Esc => {
            // Topmost overlay first.
            if app.panel_open {
                app.close_panel();
            } else if app.menu.is_open() {
                app.close_menu();
            }
        }
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('w') => app.toggle_panel(),
        KeyCode::Char('e') => app.toggle_enabled(),
        _ => {}
    }
    KeyAction::Continue
}
