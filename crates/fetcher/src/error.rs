//! Error types for the snapshot builder

use std::fmt;

use routesync_ports::{ClientError, SinkError};
use thiserror::Error;

/// Resource collection a list call was fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Routes,
    Domains,
    Spaces,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Routes => "routes",
            Resource::Domains => "domains",
            Resource::Spaces => "spaces",
        };
        f.write_str(name)
    }
}

/// Kind of foreign key that failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReference {
    Domain,
    Space,
}

impl fmt::Display for MissingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReference::Domain => f.write_str("domain"),
            MissingReference::Space => f.write_str("space"),
        }
    }
}

/// A route points at a domain or space absent from the fetched listings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("route {route_guid} refers to missing {kind} {referenced_guid}")]
pub struct ReferentialError {
    pub kind: MissingReference,
    pub route_guid: String,
    pub referenced_guid: String,
}

impl ReferentialError {
    pub fn missing_domain(route_guid: &str, domain_guid: &str) -> Self {
        Self {
            kind: MissingReference::Domain,
            route_guid: route_guid.to_string(),
            referenced_guid: domain_guid.to_string(),
        }
    }

    pub fn missing_space(route_guid: &str, space_guid: &str) -> Self {
        Self {
            kind: MissingReference::Space,
            route_guid: route_guid.to_string(),
            referenced_guid: space_guid.to_string(),
        }
    }
}

/// Failure of a single build cycle
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("uaa get token: {0}")]
    Auth(#[source] ClientError),

    #[error("cc list {resource}: {source}")]
    Fetch {
        resource: Resource,
        #[source]
        source: ClientError,
    },

    #[error(transparent)]
    Referential(#[from] ReferentialError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl BuildError {
    pub(crate) fn fetch(resource: Resource) -> impl FnOnce(ClientError) -> Self {
        move |source| BuildError::Fetch { resource, source }
    }
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;
