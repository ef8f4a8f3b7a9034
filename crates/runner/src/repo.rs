//! In-memory snapshot repository

use async_trait::async_trait;
use parking_lot::RwLock;
use routesync_core::RouteSnapshot;
use routesync_ports::{SinkResult, SnapshotSink};

/// Keeps the most recent snapshot; each `put` replaces the previous one
#[derive(Debug, Default)]
pub struct MemorySnapshotRepo {
    latest: RwLock<Option<RouteSnapshot>>,
}

impl MemorySnapshotRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot, if any build has completed
    pub fn get(&self) -> Option<RouteSnapshot> {
        self.latest.read().clone()
    }
}

#[async_trait]
impl SnapshotSink for MemorySnapshotRepo {
    async fn put(&self, snapshot: RouteSnapshot) -> SinkResult<()> {
        *self.latest.write() = Some(snapshot);
        Ok(())
    }
}
