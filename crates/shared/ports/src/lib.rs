//! Routesync Ports
//!
//! Port definitions (traits) for the route snapshot builder.
//! These define the boundaries between the build logic and infrastructure:
//! - [`TokenProvider`]: obtains a bearer token (UAA)
//! - [`ControlPlaneClient`]: lists routes, domains and spaces (Cloud Controller)
//! - [`SnapshotSink`]: receives the finished snapshot

mod control_plane;
mod error;
mod sink;
mod token;

pub use control_plane::ControlPlaneClient;
pub use error::{ClientError, ClientResult, SinkError, SinkResult};
pub use sink::SnapshotSink;
pub use token::TokenProvider;
