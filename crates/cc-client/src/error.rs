//! Error types for the HTTP adapters

use routesync_ports::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Pagination error: {0}")]
    Pagination(String),
}

/// Convert infrastructure HttpError to port-level ClientError
impl From<HttpError> for ClientError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Http(e) => ClientError::Network(e.to_string()),
            HttpError::Status { status, body } => ClientError::Status { status, body },
            HttpError::Decode(e) => ClientError::Decode(e.to_string()),
            err @ (HttpError::Url(_) | HttpError::Pagination(_)) => {
                ClientError::Other(err.to_string())
            }
        }
    }
}

/// Read a response body, turning non-2xx statuses into [`HttpError::Status`]
pub(crate) async fn read_body(resp: reqwest::Response) -> Result<String, HttpError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(HttpError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
