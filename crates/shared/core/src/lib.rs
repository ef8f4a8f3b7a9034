//! Routesync Core
//!
//! Pure data types for the route snapshot builder.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! - [`resources`]: records as listed by the control plane, with
//!   relationships still expressed as GUID references.
//! - [`entities`]: the resolved snapshot handed to downstream consumers.

pub mod entities;
pub mod resources;

// Re-export commonly used types at crate root
pub use entities::{App, Destination, Domain, Organization, Process, Route, RouteSnapshot, Space};
pub use resources::{
    CcApp, CcDestination, CcDomain, CcProcess, CcRoute, CcSpace, GuidRef, RouteRelationships,
    SpaceRelationships, ToOne,
};

/// Opaque identifier assigned by the control plane
pub type Guid = String;
