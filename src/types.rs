//! Core types for guidepost

use serde::{Deserialize, Serialize};

/// A point in the 2D floor-plan coordinate space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Navigation mode selecting which waypoint catalog a request draws from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    Visual,
    Tactile,
}

impl NavigationMode {
    /// Query-string mapping: the literal string `tactile` selects tactile,
    /// anything else (including an absent parameter) selects visual.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("tactile") => NavigationMode::Tactile,
            _ => NavigationMode::Visual,
        }
    }
}

/// One point of a generated route, optionally carrying a waypoint reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteStep {
    pub x: i32,
    pub y: i32,
    #[serde(
        rename = "waypointId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub waypoint_id: Option<String>,
}

impl RouteStep {
    /// A bare step at the given point, with no waypoint attached
    pub fn at(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            waypoint_id: None,
        }
    }
}

/// A waypoint catalog entry
///
/// Visual entries carry a photo URL; tactile entries are purely textual.
/// Serialized untagged so each variant keeps the flat shape clients expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum WaypointEntry {
    Visual {
        id: String,
        url: String,
        description: String,
    },
    Tactile {
        id: String,
        description: String,
    },
}

impl WaypointEntry {
    pub fn id(&self) -> &str {
        match self {
            WaypointEntry::Visual { id, .. } => id,
            WaypointEntry::Tactile { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_mode_from_query() {
        assert_eq!(
            NavigationMode::from_query(Some("tactile")),
            NavigationMode::Tactile
        );
        assert_eq!(
            NavigationMode::from_query(Some("visual")),
            NavigationMode::Visual
        );
        // Anything other than the literal "tactile" falls back to visual
        assert_eq!(
            NavigationMode::from_query(Some("TACTILE")),
            NavigationMode::Visual
        );
        assert_eq!(NavigationMode::from_query(None), NavigationMode::Visual);
    }

    #[test]
    fn test_route_step_serialization_omits_empty_waypoint() {
        let bare = serde_json::to_value(RouteStep::at(Point::new(3, 4))).unwrap();
        assert_eq!(bare, serde_json::json!({ "x": 3, "y": 4 }));

        let tagged = serde_json::to_value(RouteStep {
            x: 3,
            y: 4,
            waypoint_id: Some("door_handle".to_string()),
        })
        .unwrap();
        assert_eq!(
            tagged,
            serde_json::json!({ "x": 3, "y": 4, "waypointId": "door_handle" })
        );
    }

    #[test]
    fn test_waypoint_entry_untagged_shape() {
        let visual = WaypointEntry::Visual {
            id: "mountain_lake".to_string(),
            url: "https://example.com/a.jpg".to_string(),
            description: "a lake".to_string(),
        };
        let value = serde_json::to_value(&visual).unwrap();
        assert_eq!(value["id"], "mountain_lake");
        assert_eq!(value["url"], "https://example.com/a.jpg");

        let tactile = WaypointEntry::Tactile {
            id: "handrail_main".to_string(),
            description: "a handrail".to_string(),
        };
        let value = serde_json::to_value(&tactile).unwrap();
        assert_eq!(value["id"], "handrail_main");
        assert!(value.get("url").is_none());
    }
}
