//! Fetcher - one fetch-and-build cycle per call

use std::sync::Arc;

use log::{debug, info};
use routesync_ports::{ControlPlaneClient, SnapshotSink, TokenProvider};

use crate::assemble::assemble_snapshot;
use crate::error::{BuildError, BuildResult, Resource};

/// Snapshot builder
///
/// Holds its collaborators and nothing else: every call to
/// [`fetch_once`](Fetcher::fetch_once) is a fresh, complete cycle that
/// shares no state with earlier ones.
pub struct Fetcher<T, C, S> {
    token_provider: Arc<T>,
    cc_client: Arc<C>,
    snapshot_sink: Arc<S>,
}

impl<T, C, S> Fetcher<T, C, S>
where
    T: TokenProvider,
    C: ControlPlaneClient,
    S: SnapshotSink,
{
    pub fn new(token_provider: Arc<T>, cc_client: Arc<C>, snapshot_sink: Arc<S>) -> Self {
        Self {
            token_provider,
            cc_client,
            snapshot_sink,
        }
    }

    /// Fetch routes, domains and spaces, resolve them into a snapshot and
    /// hand it to the sink
    ///
    /// Calls run strictly in order: token, routes, domains, spaces, sink.
    /// The first failure ends the cycle and the sink is only called with a
    /// fully resolved snapshot.
    pub async fn fetch_once(&self) -> BuildResult<()> {
        let token = self
            .token_provider
            .get_token()
            .await
            .map_err(BuildError::Auth)?;

        let routes = self
            .cc_client
            .list_routes(&token)
            .await
            .map_err(BuildError::fetch(Resource::Routes))?;
        debug!("Fetched {} routes", routes.len());

        let domains = self
            .cc_client
            .list_domains(&token)
            .await
            .map_err(BuildError::fetch(Resource::Domains))?;
        debug!("Fetched {} domains", domains.len());

        let spaces = self
            .cc_client
            .list_spaces(&token)
            .await
            .map_err(BuildError::fetch(Resource::Spaces))?;
        debug!("Fetched {} spaces", spaces.len());

        let snapshot = assemble_snapshot(&routes, &domains, &spaces)?;

        info!("Putting route snapshot with {} routes", snapshot.len());
        self.snapshot_sink.put(snapshot).await?;

        Ok(())
    }
}
