use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid provider config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
