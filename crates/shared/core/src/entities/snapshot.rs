use serde::{Deserialize, Serialize};

use super::Route;

/// Desired routing state produced by one build cycle
///
/// Routes keep the order in which the control plane listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSnapshot {
    pub routes: Vec<Route>,
}

impl RouteSnapshot {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn route(&self, guid: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.guid == guid)
    }
}
