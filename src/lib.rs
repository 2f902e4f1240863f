//! replybar library crate.
//!
//! This library provides the core functionality for replybar, including:
//! - Long-press interaction tracking
//! - The persisted quick-reply whitelist
//! - Reply source adapters
//! - Terminal UI components

pub mod app;
pub mod config;
pub mod handlers;
pub mod host;
pub mod input;
pub mod ui;
pub mod whitelist;
