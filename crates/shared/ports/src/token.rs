use async_trait::async_trait;

use crate::error::ClientResult;

/// Port for obtaining a bearer token for control-plane calls
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Fetch a fresh token. Implementations decide about caching; callers
    /// treat the value as opaque.
    async fn get_token(&self) -> ClientResult<String>;
}
