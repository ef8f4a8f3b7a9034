use thiserror::Error;

/// Errors reported by control-plane collaborators (token service, API client)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for ClientError {
    fn from(msg: &str) -> Self {
        ClientError::Other(msg.to_string())
    }
}

impl From<String> for ClientError {
    fn from(msg: String) -> Self {
        ClientError::Other(msg)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors reported by snapshot sinks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("snapshot rejected: {0}")]
    Rejected(String),

    #[error("{0}")]
    Other(String),
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;
