//! Routesync Runner
//!
//! Wires the HTTP adapters, the snapshot builder and an in-memory snapshot
//! repository into a single fetch-and-build cycle:
//!
//! - **Config**: endpoints and client credentials, loaded from JSON
//! - **Repo**: keeps the latest snapshot handed over by the builder
//! - **Sync**: one cycle from config to stored snapshot
//!
//! ```text
//!   UAA ──token──┐
//!                ▼
//!   Cloud Controller ──routes/domains/spaces──► Fetcher ──► MemorySnapshotRepo
//! ```
//!
//! Periodic polling is left to the caller (cron, a supervisor loop, ...).

pub mod config;
pub mod repo;
pub mod sync;

pub use config::{ConfigError, RunnerConfig, load_config, load_config_from_str};
pub use repo::MemorySnapshotRepo;
pub use sync::{RouteSync, SyncError};
