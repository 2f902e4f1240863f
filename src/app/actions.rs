//! User-facing actions: menu lifecycle, reply execution, pin/unpin.

use super::{App, MenuContent, MenuItem, MenuState, PressTarget};
use crate::host::{self, FetchedReplies, ReplyDescriptor};
use crate::input::Press;

impl App {
    /// Open the popup menu: fetch both collections (or the degraded-state
    /// marker) and annotate each item with its whitelist membership. The
    /// annotation is styling only; membership never hides or reorders items.
    pub fn open_menu(&mut self) {
        if !self.config.enabled {
            return;
        }
        let content = host::fetch_replies(self.source()).map(|fetched| self.annotate(fetched));
        self.menu = MenuState::Open(content);
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
        // Items are gone; any pending press on them must not fire later.
        self.press.cancel();
    }

    pub fn toggle_menu(&mut self) {
        if self.menu.is_open() {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        if self.panel_open {
            self.panel_open = false;
            self.press.cancel();
        }
    }

    pub fn toggle_panel(&mut self) {
        if self.panel_open {
            self.close_panel();
        } else {
            self.open_panel();
        }
    }

    /// Toggle the whole quick-reply UI on or off, persisted.
    pub fn toggle_enabled(&mut self) {
        self.config.enabled = !self.config.enabled;
        if !self.config.enabled {
            self.close_menu();
            self.close_panel();
        }
        self.save_config();
        if self.config.enabled {
            self.toasts.info("Quick replies shown");
        } else {
            self.toasts.info("Quick replies hidden");
        }
    }

    /// Dispatch a resolved press interaction. Runs synchronously at the
    /// moment the tick or release produced it.
    pub fn handle_press(&mut self, press: Press<PressTarget>) {
        match press {
            Press::Activate(PressTarget::MenuItem(index)) => self.activate_menu_item(index),
            Press::Hold(PressTarget::MenuItem(index)) => self.pin_menu_item(index),
            Press::Activate(PressTarget::PanelRow(_)) => {
                self.toasts.info("Hold a row to unpin it");
            }
            Press::Hold(PressTarget::PanelRow(index)) => self.unpin_entry(index),
        }
    }

    /// A menu item was tapped: close the menu first, then execute. The menu
    /// stays closed whether or not execution succeeds.
    pub fn activate_menu_item(&mut self, index: usize) {
        let MenuState::Open(Ok(content)) = &self.menu else {
            self.close_menu();
            return;
        };
        let Some(item) = content.item(index) else {
            self.close_menu();
            return;
        };
        let reply = item.reply.clone();
        self.close_menu();
        self.execute_reply(&reply.set_name, &reply.label);
    }

    /// A menu item was held: add it to the whitelist and flip its visual
    /// indicator in place. No re-fetch, no full re-render.
    pub fn pin_menu_item(&mut self, index: usize) {
        let MenuState::Open(Ok(content)) = &mut self.menu else {
            return;
        };
        let Some(item) = content.item_mut(index) else {
            return;
        };
        let (set_name, label) = (item.reply.set_name.clone(), item.reply.label.clone());

        if self.config.whitelist.add(&set_name, &label) {
            if let MenuState::Open(Ok(content)) = &mut self.menu {
                if let Some(item) = content.item_mut(index) {
                    item.whitelisted = true;
                }
            }
            self.save_config();
            self.toasts.success(format!("Pinned \"{label}\""));
        } else {
            self.toasts.info(format!("\"{label}\" is already pinned"));
        }
    }

    /// A management row was held: remove the entry. The row list and the bar
    /// both re-render from the store on the next frame.
    pub fn unpin_entry(&mut self, index: usize) {
        let Some(entry) = self.config.whitelist.get(index).cloned() else {
            return;
        };
        if self.config.whitelist.remove(&entry.set_name, &entry.label) {
            self.save_config();
            self.toasts.info(format!("Unpinned \"{}\"", entry.label));
        }
    }

    /// A pinned bar button was clicked: execute its reply directly.
    pub fn activate_bar_button(&mut self, index: usize) {
        let Some(entry) = self.config.whitelist.get(index).cloned() else {
            return;
        };
        self.execute_reply(&entry.set_name, &entry.label);
    }

    /// Execute one reply through the host. Failure is caught here and
    /// surfaced as a toast; it never unwinds further.
    pub fn execute_reply(&mut self, set_name: &str, label: &str) {
        let Some(source) = self.source() else {
            self.toasts.error("No reply source available");
            return;
        };
        match source.execute(set_name, label) {
            Ok(message) => self.transcript.push(message),
            Err(err) => {
                self.toasts
                    .error(format!("Failed to send \"{label}\": {err}"));
            }
        }
    }

    /// Persist the settings blob; a failed save becomes a toast, not a
    /// crash. Callers mutate the store first, so every renderer invoked
    /// afterwards sees the new state.
    pub(crate) fn save_config(&mut self) {
        if let Err(err) = self.config.save() {
            self.toasts.error(format!("Failed to save settings: {err:#}"));
        }
    }

    fn annotate(&self, fetched: FetchedReplies) -> MenuContent {
        let annotate_one = |reply: ReplyDescriptor| {
            let whitelisted = self.config.whitelist.contains(&reply.set_name, &reply.label);
            MenuItem { reply, whitelisted }
        };
        MenuContent {
            chat: fetched.chat.into_iter().map(annotate_one).collect(),
            global: fetched.global.into_iter().map(annotate_one).collect(),
        }
    }
}
