use serde::{Deserialize, Serialize};

use super::{Destination, Domain, Space};
use crate::Guid;

/// Fully resolved route
///
/// Domain and space are embedded by value, so a `Route` is meaningful on its
/// own without any further lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub guid: Guid,
    pub host: String,
    pub path: String,
    pub url: String,
    pub domain: Domain,
    pub space: Space,
    /// Empty when the route has no destinations
    #[serde(default)]
    pub destinations: Vec<Destination>,
}
