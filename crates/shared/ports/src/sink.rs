use async_trait::async_trait;
use routesync_core::RouteSnapshot;

use crate::error::SinkResult;

/// Port for storing or publishing a finished snapshot
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    async fn put(&self, snapshot: RouteSnapshot) -> SinkResult<()>;
}
