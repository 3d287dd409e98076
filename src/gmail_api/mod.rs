//! Gmail API module split into logical submodules
//!
//! - auth: OAuth2 token acquisition with an on-disk token cache
//! - client: authenticated GET calls for labels, profile, and messages

pub mod auth;
pub mod client;

pub use auth::obtain_token;
pub use client::GmailClient;
