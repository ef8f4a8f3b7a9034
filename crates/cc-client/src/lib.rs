//! Routesync CC Client
//!
//! Infrastructure adapters that implement the routesync ports over HTTP:
//! - [`UaaClient`]: client-credentials token exchange ([`TokenProvider`](routesync_ports::TokenProvider))
//! - [`CloudControllerClient`]: paginated v3 listings ([`ControlPlaneClient`](routesync_ports::ControlPlaneClient))
//!
//! Neither adapter retries or caches; a failed request is reported as is.

pub mod cloud_controller;
pub mod error;
pub mod uaa;

pub use cloud_controller::CloudControllerClient;
pub use error::HttpError;
pub use uaa::{UaaClient, UaaConfig};
