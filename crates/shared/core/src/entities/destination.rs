use serde::{Deserialize, Serialize};

use crate::Guid;

/// Process of an app that receives traffic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    #[serde(rename = "type")]
    pub process_type: String,
}

/// App backing a destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub guid: Guid,
    pub process: Process,
}

/// A backend a route sends traffic to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub guid: Guid,
    pub app: App,
    pub port: i32,
    /// `None` means unweighted, which is not the same as a weight of zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

impl Destination {
    pub fn new(
        guid: impl Into<Guid>,
        app_guid: impl Into<Guid>,
        process_type: impl Into<String>,
        port: i32,
        weight: Option<i32>,
    ) -> Self {
        Self {
            guid: guid.into(),
            app: App {
                guid: app_guid.into(),
                process: Process {
                    process_type: process_type.into(),
                },
            },
            port,
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unweighted_destination_omits_weight() {
        let dest = Destination::new("dest-guid", "app-guid", "web", 8080, None);
        let json = serde_json::to_value(&dest).unwrap();

        assert!(json.get("weight").is_none());
        assert_eq!(json["app"]["process"]["type"], "web");

        let back: Destination = serde_json::from_value(json).unwrap();
        assert_eq!(back.weight, None);
    }

    #[test]
    fn test_zero_weight_is_kept() {
        let dest = Destination::new("dest-guid", "app-guid", "web", 8080, Some(0));
        let json = serde_json::to_string(&dest).unwrap();
        let back: Destination = serde_json::from_str(&json).unwrap();

        assert_eq!(back.weight, Some(0));
    }
}
