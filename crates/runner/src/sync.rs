//! One sync cycle: config → HTTP adapters → fetcher → repo

use std::sync::Arc;

use log::info;
use reqwest::Client;
use routesync_cc_client::{CloudControllerClient, UaaClient};
use routesync_core::RouteSnapshot;
use routesync_fetcher::{BuildError, Fetcher};
use thiserror::Error;

use crate::config::{ConfigError, RunnerConfig};
use crate::repo::MemorySnapshotRepo;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("no snapshot stored after build")]
    NoSnapshot,
}

/// Fetcher wired to the UAA and Cloud Controller adapters
pub type CcFetcher = Fetcher<UaaClient, CloudControllerClient, MemorySnapshotRepo>;

pub struct RouteSync {
    fetcher: CcFetcher,
    repo: Arc<MemorySnapshotRepo>,
}

impl RouteSync {
    /// Validate the config and build the adapters it describes
    pub fn from_config(config: &RunnerConfig) -> Result<Self, SyncError> {
        config.validate()?;

        let http = Client::builder().timeout(config.request_timeout()).build()?;
        let uaa = Arc::new(UaaClient::new(http.clone(), config.uaa_config()));
        let cc = Arc::new(CloudControllerClient::new(
            http,
            config.cloud_controller_url.clone(),
        ));
        let repo = Arc::new(MemorySnapshotRepo::new());

        info!(
            "Configured route sync against {} (uaa {})",
            config.cloud_controller_url, config.uaa_url
        );

        Ok(Self {
            fetcher: Fetcher::new(uaa, cc, repo.clone()),
            repo,
        })
    }

    pub fn repo(&self) -> &Arc<MemorySnapshotRepo> {
        &self.repo
    }

    /// Run one fetch-and-build cycle and return the stored snapshot
    pub async fn run_once(&self) -> Result<RouteSnapshot, SyncError> {
        self.fetcher.fetch_once().await?;
        self.repo.get().ok_or(SyncError::NoSnapshot)
    }
}
