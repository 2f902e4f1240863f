//! The host reply source: where quick replies come from and how they run.
//!
//! The source is an external collaborator that may be absent or disabled;
//! everything here treats that as a degraded state to report, never a reason
//! to fail.

pub mod file;

use std::collections::HashSet;

pub use file::FileReplySource;

/// One quick reply as the host exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDescriptor {
    pub set_name: String,
    pub label: String,
    pub message: String,
}

/// Which collection a reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyScope {
    /// Replies scoped to the current chat session
    Chat,
    /// Replies available everywhere
    Global,
}

/// Why a reply could not be executed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("quick replies are disabled")]
    Disabled,
    #[error("no quick reply \"{label}\" in set \"{set_name}\"")]
    NotFound { set_name: String, label: String },
}

/// Why the reply collections could not be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// No reply source is present at all.
    Unavailable,
    /// The source exists but the host feature is switched off.
    Disabled,
}

impl FetchError {
    /// Placeholder text shown inside the menu instead of items.
    pub fn placeholder(self) -> &'static str {
        match self {
            FetchError::Unavailable => "Quick replies unavailable (no reply source)",
            FetchError::Disabled => "Quick replies are disabled in the host",
        }
    }
}

/// External source of quick replies.
pub trait ReplySource {
    /// Whether the source is reachable at all.
    fn is_available(&self) -> bool;

    /// Whether the host feature is switched on. Meaningless when
    /// unavailable.
    fn is_enabled(&self) -> bool;

    /// List the visible replies in one scope, in host order.
    fn list_replies(&self, scope: ReplyScope) -> Vec<ReplyDescriptor>;

    /// Execute a reply by key, returning the message that was sent.
    fn execute(&self, set_name: &str, label: &str) -> Result<String, ExecuteError>;
}

/// Both reply collections, de-duplicated at fetch time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedReplies {
    pub chat: Vec<ReplyDescriptor>,
    pub global: Vec<ReplyDescriptor>,
}

/// Fetch both collections from the source, if there is one.
///
/// A global reply whose label also appears in the chat collection is
/// suppressed: the scoped reply takes precedence. This happens here, before
/// any whitelist annotation.
pub fn fetch_replies(source: Option<&dyn ReplySource>) -> Result<FetchedReplies, FetchError> {
    let Some(source) = source else {
        return Err(FetchError::Unavailable);
    };
    if !source.is_available() {
        return Err(FetchError::Unavailable);
    }
    if !source.is_enabled() {
        return Err(FetchError::Disabled);
    }

    let chat = source.list_replies(ReplyScope::Chat);
    let global = {
        let chat_labels: HashSet<&str> = chat.iter().map(|r| r.label.as_str()).collect();
        source
            .list_replies(ReplyScope::Global)
            .into_iter()
            .filter(|r| !chat_labels.contains(r.label.as_str()))
            .collect()
    };

    Ok(FetchedReplies { chat, global })
}


#[cfg(test)]
mod tests {
    use super::test_support::{reply, StubSource};
    use super::*;

    #[test]
    fn fetch_without_source_is_unavailable() {
        assert_eq!(fetch_replies(None), Err(FetchError::Unavailable));
    }

    #[test]
    fn fetch_from_disabled_source_reports_disabled() {
        let mut source = StubSource::new(vec![reply("S", "Hi", "hello")], Vec::new());
        source.enabled = false;
        assert_eq!(fetch_replies(Some(&source)), Err(FetchError::Disabled));
    }

    #[test]
    fn scoped_reply_suppresses_same_label_global() {
        let source = StubSource::new(
            vec![reply("S", "Hi", "hello")],
            vec![reply("S", "Hi", "x"), reply("G", "Bye", "y")],
        );

        let fetched = fetch_replies(Some(&source)).unwrap();
        assert_eq!(fetched.chat, vec![reply("S", "Hi", "hello")]);
        assert_eq!(fetched.global, vec![reply("G", "Bye", "y")]);
    }

    #[test]
    fn dedup_keys_on_label_not_set_name() {
        // A global reply sharing only a set name with a chat reply survives.
        let source = StubSource::new(
            vec![reply("S", "Hi", "hello")],
            vec![reply("S", "Other", "z")],
        );
        let fetched = fetch_replies(Some(&source)).unwrap();
        assert_eq!(fetched.global.len(), 1);
    }

    #[test]
    fn execute_unknown_key_is_not_found() {
        let source = StubSource::new(vec![reply("S", "Hi", "hello")], Vec::new());
        assert_eq!(source.execute("S", "Hi").unwrap(), "hello");
        assert!(matches!(
            source.execute("S", "Nope"),
            Err(ExecuteError::NotFound { .. })
        ));
    }
}
