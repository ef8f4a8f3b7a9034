//! Routesync Fetcher
//!
//! Builds one [`RouteSnapshot`](routesync_core::RouteSnapshot) per call:
//!
//! ```text
//! TokenProvider ──token──► ControlPlaneClient
//!                            │ routes, domains, spaces
//!                       ┌────▼─────┐
//!                       │ assemble │ join by GUID, validate, normalize
//!                       └────┬─────┘
//!                            ▼
//!                       SnapshotSink
//! ```
//!
//! A build is all-or-nothing: a single unresolved reference rejects the
//! whole snapshot and the sink is never called. Nothing is retried here;
//! scheduling and retries belong to whoever calls [`Fetcher::fetch_once`].

pub mod assemble;
pub mod error;
pub mod fetcher;

pub use assemble::assemble_snapshot;
pub use error::{BuildError, BuildResult, MissingReference, ReferentialError, Resource};
pub use fetcher::Fetcher;
