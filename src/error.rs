use thiserror::Error;

/// Everything that can stop a fetch cycle.
///
/// `Auth` is fatal before any request is made. `Api` and `Parse` surface
/// from the orchestrator and abort the batch they belong to; no retry is
/// attempted anywhere.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("{operation} returned {status}: {body}")]
    Api {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("failed to parse message {message_id}: {reason}")]
    Parse {
        message_id: String,
        reason: String,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
