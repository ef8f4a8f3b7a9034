use async_trait::async_trait;
use routesync_core::{CcDomain, CcRoute, CcSpace};

use crate::error::ClientResult;

/// Port for listing control-plane resources
///
/// The three listings are independent, non-transactional calls, so their
/// results may disagree with each other.
#[async_trait]
pub trait ControlPlaneClient: Send + Sync {
    /// List all routes with their destinations, in API order
    async fn list_routes(&self, token: &str) -> ClientResult<Vec<CcRoute>>;

    /// List all domains
    async fn list_domains(&self, token: &str) -> ClientResult<Vec<CcDomain>>;

    /// List all spaces, each carrying its organization reference
    async fn list_spaces(&self, token: &str) -> ClientResult<Vec<CcSpace>>;
}
