use serde::{Deserialize, Serialize};

use super::ToOne;
use crate::Guid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRelationships {
    pub organization: ToOne,
}

/// Space as listed by `/v3/spaces`; carries its organization reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcSpace {
    pub guid: Guid,
    pub relationships: SpaceRelationships,
}

impl CcSpace {
    pub fn new(guid: impl Into<Guid>, organization_guid: impl Into<Guid>) -> Self {
        Self {
            guid: guid.into(),
            relationships: SpaceRelationships {
                organization: ToOne::new(organization_guid),
            },
        }
    }

    pub fn organization_guid(&self) -> &str {
        self.relationships.organization.guid()
    }
}
