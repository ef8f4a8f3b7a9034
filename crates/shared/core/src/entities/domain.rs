use serde::{Deserialize, Serialize};

use crate::Guid;

/// Domain a route is registered under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub guid: Guid,
    pub name: String,
    /// Platform-internal domains are not externally routable
    pub internal: bool,
}
