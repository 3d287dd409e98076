//! One-shot Gmail snapshot fetcher.
//!
//! Authenticates with OAuth2, fetches the account profile, labels, and the
//! most recent messages concurrently, and renders a plain-text report.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod gmail_api;
pub mod message_body;
pub mod output;
pub mod types;
