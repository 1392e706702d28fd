use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status. `message` is the
    /// service's own error text when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
