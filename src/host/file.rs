//! JSON-file-backed reply source.
//!
//! Reads `replies.json` from the replybar config directory. The file mirrors
//! the host's set-list shape: named sets with a visibility flag, each holding
//! replies that can be individually hidden. Hidden replies and invisible
//! sets never reach the menu.
//!
//! ```json
//! {
//!   "enabled": true,
//!   "chat_sets": [
//!     { "name": "Greetings", "visible": true,
//!       "replies": [ { "label": "Hi", "message": "Hello there!" } ] }
//!   ],
//!   "global_sets": []
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{ExecuteError, ReplyDescriptor, ReplyScope, ReplySource};

/// Fallback message body for replies defined without one.
const EMPTY_MESSAGE: &str = "(no message)";

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct ReplyFile {
    #[serde(default = "default_true")]
    enabled: bool,
    #[serde(default)]
    chat_sets: Vec<ReplySet>,
    #[serde(default)]
    global_sets: Vec<ReplySet>,
}

#[derive(Debug, Deserialize)]
struct ReplySet {
    name: String,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    replies: Vec<ReplyDef>,
}

#[derive(Debug, Deserialize)]
struct ReplyDef {
    label: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    hidden: bool,
}

/// Reply source backed by a JSON sets file loaded once at startup.
#[derive(Debug)]
pub struct FileReplySource {
    enabled: bool,
    chat: Vec<ReplyDescriptor>,
    global: Vec<ReplyDescriptor>,
}

impl FileReplySource {
    /// Load the sets file. `Ok(None)` means the file does not exist (the
    /// source is simply absent); a malformed file is an error the caller
    /// surfaces once.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replies file: {}", path.display()))?;
        let file: ReplyFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse replies file: {}", path.display()))?;

        Ok(Some(Self {
            enabled: file.enabled,
            chat: flatten_sets(file.chat_sets),
            global: flatten_sets(file.global_sets),
        }))
    }

    #[cfg(test)]
    fn from_str(contents: &str) -> Result<Self> {
        let file: ReplyFile = serde_json::from_str(contents)?;
        Ok(Self {
            enabled: file.enabled,
            chat: flatten_sets(file.chat_sets),
            global: flatten_sets(file.global_sets),
        })
    }
}

/// Flatten visible sets into descriptors, skipping hidden and unlabeled
/// replies.
fn flatten_sets(sets: Vec<ReplySet>) -> Vec<ReplyDescriptor> {
    let mut replies = Vec::new();
    for set in sets {
        if !set.visible {
            continue;
        }
        for def in set.replies {
            if def.hidden || def.label.is_empty() {
                continue;
            }
            let message = if def.message.is_empty() {
                EMPTY_MESSAGE.to_string()
            } else {
                def.message
            };
            replies.push(ReplyDescriptor {
                set_name: set.name.clone(),
                label: def.label,
                message,
            });
        }
    }
    replies
}

impl ReplySource for FileReplySource {
    fn is_available(&self) -> bool {
        true
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn list_replies(&self, scope: ReplyScope) -> Vec<ReplyDescriptor> {
        match scope {
            ReplyScope::Chat => self.chat.clone(),
            ReplyScope::Global => self.global.clone(),
        }
    }

    fn execute(&self, set_name: &str, label: &str) -> Result<String, ExecuteError> {
        if !self.enabled {
            return Err(ExecuteError::Disabled);
        }
        self.chat
            .iter()
            .chain(self.global.iter())
            .find(|r| r.set_name == set_name && r.label == label)
            .map(|r| r.message.clone())
            .ok_or_else(|| ExecuteError::NotFound {
                set_name: set_name.to_string(),
                label: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "enabled": true,
        "chat_sets": [
            { "name": "Greetings",
              "replies": [
                  { "label": "Hi", "message": "Hello there!" },
                  { "label": "Secret", "message": "x", "hidden": true },
                  { "label": "Blank" }
              ] },
            { "name": "Drafts", "visible": false,
              "replies": [ { "label": "WIP", "message": "y" } ] }
        ],
        "global_sets": [
            { "name": "Common", "replies": [ { "label": "Bye", "message": "See you" } ] }
        ]
    }"#;

    #[test]
    fn hidden_replies_and_invisible_sets_are_skipped() {
        let source = FileReplySource::from_str(SAMPLE).unwrap();
        let chat = source.list_replies(ReplyScope::Chat);
        let labels: Vec<&str> = chat.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Hi", "Blank"]);
    }

    #[test]
    fn empty_message_gets_a_fallback() {
        let source = FileReplySource::from_str(SAMPLE).unwrap();
        let chat = source.list_replies(ReplyScope::Chat);
        assert_eq!(chat[1].message, EMPTY_MESSAGE);
    }

    #[test]
    fn execute_resolves_across_both_scopes() {
        let source = FileReplySource::from_str(SAMPLE).unwrap();
        assert_eq!(source.execute("Greetings", "Hi").unwrap(), "Hello there!");
        assert_eq!(source.execute("Common", "Bye").unwrap(), "See you");
        assert!(matches!(
            source.execute("Drafts", "WIP"),
            Err(ExecuteError::NotFound { .. })
        ));
    }

    #[test]
    fn disabled_file_refuses_execution() {
        let source = FileReplySource::from_str(r#"{ "enabled": false }"#).unwrap();
        assert!(!source.is_enabled());
        assert_eq!(source.execute("A", "x"), Err(ExecuteError::Disabled));
    }

    #[test]
    fn missing_file_loads_as_absent_source() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FileReplySource::load(&dir.path().join("replies.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("replies.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(FileReplySource::load(&path).is_err());
    }
}
