use serde::{Deserialize, Serialize};

use super::ToOne;
use crate::Guid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcProcess {
    #[serde(rename = "type")]
    pub process_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcApp {
    pub guid: Guid,
    pub process: CcProcess,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcDestination {
    pub guid: Guid,
    pub app: CcApp,
    /// Missing and `null` both decode to `None`
    #[serde(default)]
    pub weight: Option<i32>,
    pub port: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRelationships {
    pub domain: ToOne,
    pub space: ToOne,
}

/// Route as listed by `/v3/routes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcRoute {
    pub guid: Guid,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub path: String,
    pub url: String,
    #[serde(default)]
    pub destinations: Vec<CcDestination>,
    pub relationships: RouteRelationships,
}

impl CcRoute {
    pub fn domain_guid(&self) -> &str {
        self.relationships.domain.guid()
    }

    pub fn space_guid(&self) -> &str {
        self.relationships.space.guid()
    }
}
