//! Control-plane resources as listed by the Cloud Controller v3 API
//!
//! Relationships are still unresolved GUID references here. Unknown JSON
//! fields are ignored so newer API versions keep decoding.

mod route;
mod space;

use serde::{Deserialize, Serialize};

use crate::Guid;

pub use route::{CcApp, CcDestination, CcProcess, CcRoute, RouteRelationships};
pub use space::{CcSpace, SpaceRelationships};

/// `{"guid": "..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidRef {
    pub guid: Guid,
}

/// To-one relationship: `{"data": {"guid": "..."}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToOne {
    pub data: GuidRef,
}

impl ToOne {
    pub fn new(guid: impl Into<Guid>) -> Self {
        Self {
            data: GuidRef { guid: guid.into() },
        }
    }

    pub fn guid(&self) -> &str {
        &self.data.guid
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcDomain {
    pub guid: Guid,
    pub name: String,
    #[serde(default)]
    pub internal: bool,
}
