use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use yup_oauth2::{ApplicationSecret, InstalledFlowAuthenticator, InstalledFlowReturnMethod};

use crate::error::{FetchError, Result};

pub const SCOPES: &[&str] = &["https://www.googleapis.com/auth/gmail.readonly"];

// Trait seam over the installed flow so the token wiring can be tested
// without a browser or a live identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenFlow: Send + Sync {
    async fn fetch_token(
        &self,
        secret: ApplicationSecret,
        token_cache: PathBuf,
        scopes: Vec<String>,
    ) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

/// The real flow: reuses the cached token when still valid, refreshes it
/// silently when expired, and falls back to interactive consent only when
/// neither works. The cache file is rewritten after a successful refresh.
pub struct InstalledFlow;

#[async_trait]
impl TokenFlow for InstalledFlow {
    async fn fetch_token(
        &self,
        secret: ApplicationSecret,
        token_cache: PathBuf,
        scopes: Vec<String>,
    ) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let auth =
            InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
                .persist_tokens_to_disk(token_cache)
                .build()
                .await?;
        let scope_refs: Vec<&str> = scopes.iter().map(|s| s.as_str()).collect();
        let token = auth.token(&scope_refs).await?;
        match token.token() {
            Some(t) if !t.is_empty() => Ok(t.to_string()),
            _ => Err("authenticator returned an empty access token".into()),
        }
    }
}

/// Produces a valid bearer token or fails with `FetchError::Auth` before any
/// fetch begins.
pub async fn obtain_token(credentials: &Path, token_cache: &Path) -> Result<String> {
    obtain_token_with(&InstalledFlow, credentials, token_cache).await
}

async fn obtain_token_with<F: TokenFlow>(
    flow: &F,
    credentials: &Path,
    token_cache: &Path,
) -> Result<String> {
    if !credentials.exists() {
        return Err(FetchError::Auth(format!(
            "{} not found; download your OAuth 2.0 client credentials from the Google Cloud Console and save them there",
            credentials.display()
        )));
    }

    let secret = yup_oauth2::read_application_secret(credentials)
        .await
        .map_err(|e| {
            FetchError::Auth(format!("failed to read {}: {}", credentials.display(), e))
        })?;
    debug!("loaded client secret from {}", credentials.display());

    let scopes = SCOPES.iter().map(|s| s.to_string()).collect();
    flow.fetch_token(secret, token_cache.to_path_buf(), scopes)
        .await
        .map_err(|e| FetchError::Auth(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_client_secret(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("credentials.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"{"installed": {
                "client_id": "client-id",
                "client_secret": "client-secret",
                "auth_uri": "https://accounts.google.com/o/oauth2/auth",
                "token_uri": "https://oauth2.googleapis.com/token",
                "redirect_uris": ["http://localhost"]
            }}"#,
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn test_missing_credentials_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = MockTokenFlow::new();
        flow.expect_fetch_token().times(0);

        let err = obtain_token_with(
            &flow,
            &dir.path().join("nope.json"),
            &dir.path().join("tokencache.json"),
        )
        .await
        .unwrap_err();

        match err {
            FetchError::Auth(msg) => assert!(msg.contains("not found")),
            other => panic!("expected Auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_token_from_flow_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let credentials = write_client_secret(&dir);
        let token_cache = dir.path().join("tokencache.json");

        let mut flow = MockTokenFlow::new();
        let expected_cache = token_cache.clone();
        flow.expect_fetch_token()
            .withf(move |secret, cache, scopes| {
                secret.client_id == "client-id"
                    && *cache == expected_cache
                    && scopes == &["https://www.googleapis.com/auth/gmail.readonly".to_string()]
            })
            .returning(|_, _, _| Ok("fresh-access-token".to_string()));

        let token = obtain_token_with(&flow, &credentials, &token_cache)
            .await
            .unwrap();
        assert_eq!(token, "fresh-access-token");
    }

    #[tokio::test]
    async fn test_flow_failure_maps_to_auth_error() {
        let dir = tempfile::tempdir().unwrap();
        let credentials = write_client_secret(&dir);

        let mut flow = MockTokenFlow::new();
        flow.expect_fetch_token()
            .returning(|_, _, _| Err("user declined consent".into()));

        let err = obtain_token_with(&flow, &credentials, &dir.path().join("tokencache.json"))
            .await
            .unwrap_err();
        match err {
            FetchError::Auth(msg) => assert!(msg.contains("declined")),
            other => panic!("expected Auth error, got {:?}", other),
        }
    }
}
