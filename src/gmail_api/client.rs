use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};
use crate::types::{Label, LabelsResponse, Message, MessageSummary, MessagesResponse, Profile};

const DEFAULT_BASE_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me";

/// Authenticated Gmail API client. One `reqwest::Client` is shared across
/// all concurrent calls so connections are reused; the bearer token and base
/// URL are fixed at construction.
pub struct GmailClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GmailClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at a different endpoint; tests use this to target a
    /// mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn fetch_labels(&self) -> Result<Vec<Label>> {
        let url = format!("{}/labels", self.base_url);
        let data: LabelsResponse = self.get_json("fetch labels".to_string(), url).await?;
        Ok(data.labels.unwrap_or_default())
    }

    pub async fn fetch_profile(&self) -> Result<Profile> {
        let url = format!("{}/profile", self.base_url);
        self.get_json("fetch profile".to_string(), url).await
    }

    pub async fn list_messages(&self, max_results: u32) -> Result<Vec<MessageSummary>> {
        let url = format!("{}/messages?maxResults={}", self.base_url, max_results);
        let data: MessagesResponse = self.get_json("list messages".to_string(), url).await?;
        Ok(data.messages.unwrap_or_default())
    }

    pub async fn get_message(&self, id: &str) -> Result<Message> {
        let url = format!("{}/messages/{}?format=full", self.base_url, id);
        self.get_json(format!("get message {}", id), url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: String, url: String) -> Result<T> {
        debug!("GET {}", url);
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                operation,
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
