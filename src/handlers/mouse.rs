//! Mouse handling: hit-testing against the last rendered frame and feeding
//! the long-press tracker.
//!
//! Only the primary button interacts with anything; secondary and middle
//! buttons and scroll events are ignored.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::{App, PressTarget};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_down(app, mouse.column, mouse.row, Instant::now());
        }
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.press.motion(mouse.column, mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(press) = app.press.release(Instant::now()) {
                app.handle_press(press);
            }
        }
        _ => {}
    }
}

fn handle_left_down(app: &mut App, col: u16, row: u16, now: Instant) {
    let pos = Position::new(col, row);

    // The management overlay sits on top of everything.
    if app.panel_open {
        if let Some(index) = hit_index(&app.areas.panel_rows, pos) {
            let rect = app.areas.panel_rows[index];
            app.press
                .press(PressTarget::PanelRow(index), rect, col, row, now);
            return;
        }
        if contains(app.areas.panel, pos) {
            // Panel chrome (borders, placeholder, hint): swallow the press.
            return;
        }
        app.close_panel();
        // A press outside the panel may also land outside the menu; fall
        // through so it can close that too.
    }

    if app.menu.is_open() {
        if let Some(index) = hit_index(&app.areas.menu_items, pos) {
            let rect = app.areas.menu_items[index];
            app.press
                .press(PressTarget::MenuItem(index), rect, col, row, now);
            return;
        }
        if contains(app.areas.menu, pos) {
            return;
        }
        // Anywhere else closes the menu, trigger button included (it
        // toggles).
        app.close_menu();
        return;
    }

    if contains(app.areas.trigger, pos) {
        app.open_menu();
        return;
    }
    if let Some(index) = hit_index(&app.areas.bar_buttons, pos) {
        app.activate_bar_button(index);
    }
}

fn contains(area: Option<Rect>, pos: Position) -> bool {
    area.is_some_and(|rect| rect.contains(pos))
}

fn hit_index(rects: &[Rect], pos: Position) -> Option<usize> {
    rects.iter().position(|rect| rect.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::host::test_support::{reply, StubSource};

    fn down(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    fn up(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: col,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    fn drag(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: col,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    /// App with an open menu holding one chat item, and hand-laid hit areas
    /// standing in for a rendered frame.
    fn menu_app() -> App {
        let stub = StubSource::new(vec![reply("S", "Hi", "hello")], Vec::new());
        let mut app = App::with_parts(Config::in_memory(), Some(Box::new(stub)));
        app.open_menu();
        app.areas.trigger = Some(Rect::new(69, 22, 11, 1));
        app.areas.menu = Some(Rect::new(40, 17, 40, 5));
        app.areas.menu_items = vec![Rect::new(41, 19, 38, 1)];
        app
    }

    #[test]
    fn click_on_item_executes_and_closes() {
        let mut app = menu_app();
        handle_mouse_event(&mut app, down(45, 19));
        handle_mouse_event(&mut app, up(45, 19));

        assert_eq!(app.transcript, ["hello"]);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn drag_off_the_item_cancels_the_press() {
        let mut app = menu_app();
        handle_mouse_event(&mut app, down(45, 19));
        handle_mouse_event(&mut app, drag(45, 23));
        handle_mouse_event(&mut app, up(45, 23));

        assert!(app.transcript.is_empty());
        assert!(app.menu.is_open());
    }

    #[test]
    fn down_outside_menu_closes_it_without_firing() {
        let mut app = menu_app();
        handle_mouse_event(&mut app, down(5, 5));
        assert!(!app.menu.is_open());
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn down_inside_menu_chrome_keeps_it_open() {
        let mut app = menu_app();
        handle_mouse_event(&mut app, down(41, 17));
        assert!(app.menu.is_open());
    }

    #[test]
    fn trigger_click_opens_then_closes_the_menu() {
        let stub = StubSource::new(vec![reply("S", "Hi", "hello")], Vec::new());
        let mut app = App::with_parts(Config::in_memory(), Some(Box::new(stub)));
        app.areas.trigger = Some(Rect::new(69, 22, 11, 1));

        handle_mouse_event(&mut app, down(70, 22));
        assert!(app.menu.is_open());

        // While open the trigger is "anywhere else" and closes.
        handle_mouse_event(&mut app, down(70, 22));
        assert!(!app.menu.is_open());
    }

    #[test]
    fn bar_button_click_executes_pinned_reply() {
        let stub = StubSource::new(vec![reply("S", "Hi", "hello")], Vec::new());
        let mut config = Config::in_memory();
        config.whitelist.add("S", "Hi");
        let mut app = App::with_parts(config, Some(Box::new(stub)));
        app.areas.bar_buttons = vec![Rect::new(0, 22, 4, 1)];

        handle_mouse_event(&mut app, down(1, 22));
        assert_eq!(app.transcript, ["hello"]);
    }

    #[test]
    fn panel_swallows_presses_over_its_chrome() {
        let mut app = menu_app();
        app.panel_open = true;
        app.areas.panel = Some(Rect::new(18, 10, 44, 4));
        app.areas.panel_rows = Vec::new();

        handle_mouse_event(&mut app, down(20, 10));
        assert!(app.panel_open);
        assert!(app.menu.is_open());
    }

    #[test]
    fn down_outside_everything_closes_panel_and_menu() {
        let mut app = menu_app();
        app.panel_open = true;
        app.areas.panel = Some(Rect::new(18, 10, 44, 4));

        handle_mouse_event(&mut app, down(0, 0));
        assert!(!app.panel_open);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn right_button_is_ignored() {
        let mut app = menu_app();
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 45,
            row: 19,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, event);
        assert!(!app.press.is_active());
    }
}
