//! API handlers

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::config::LatencySection;
use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;
use crate::position::{self, Position};
use crate::types::{NavigationMode, Point, RouteStep, WaypointEntry};

// Mock position mapping; a real deployment would resolve floor/room here.
const MOCK_START: Point = Point { x: 12, y: 24 };
const MOCK_DESTINATION: Point = Point { x: 70, y: 50 };

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// API index, served at the root
pub async fn api_index() -> Json<ApiIndexResponse> {
    let endpoint = |method: &str, path: &str, description: &str| EndpointInfo {
        method: method.to_string(),
        path: path.to_string(),
        description: description.to_string(),
    };

    Json(ApiIndexResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Mock indoor-navigation backend".to_string(),
        endpoints: vec![
            endpoint(
                "GET",
                "/guide/",
                "Random route between two rooms, annotated with visual or tactile waypoints",
            ),
            endpoint("GET", "/simulatedPosition", "Current simulated position"),
            endpoint("POST", "/simulatedPosition", "Replace the simulated position"),
            endpoint(
                "GET",
                "/simulatedPosition/gridSquare",
                "Grid square of the simulated position",
            ),
            endpoint("GET", "/fingerprints", "Static radio fingerprint fixtures"),
            endpoint("GET", "/health/", "Service health"),
            endpoint("GET", "/maps/", "Static map assets"),
            endpoint("GET", "/waypoints/", "Static waypoint assets"),
        ],
    })
}

#[derive(Debug, Serialize)]
pub struct ApiIndexResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

/// Guide route between two rooms
///
/// Floors and rooms are accepted for API compatibility and echoed back; the
/// demo maps every request onto fixed anchor points. Non-numeric values are
/// rejected rather than silently treated as zero; absent ones default to 0.
pub async fn guide(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<GuideResponse>> {
    let start_floor = int_param(&params, "start_floor")?;
    let start_room = int_param(&params, "start_room")?;
    let destination_floor = int_param(&params, "destination_floor")?;
    let destination_room = int_param(&params, "destination_room")?;
    let mode = NavigationMode::from_query(params.get("mode").map(String::as_str));

    let mut rng = fastrand::Rng::new();
    let step_count = rng.usize(state.guide.min_step_count..=state.guide.max_step_count);

    let route = state.generator.generate(
        MOCK_START,
        MOCK_DESTINATION,
        step_count,
        state.catalog.pool(mode),
    );

    tracing::debug!(
        step_count,
        waypoints = route.used_waypoints.len(),
        ?mode,
        "Generated guide route"
    );

    simulate_latency(&state.guide.latency).await;

    Ok(Json(GuideResponse {
        start: RoomRef {
            floor: start_floor,
            room: start_room,
        },
        destination: RoomRef {
            floor: destination_floor,
            room: destination_room,
        },
        route: route.steps,
        waypoints: route.used_waypoints,
        navigation_mode: mode,
    }))
}

#[derive(Debug, Serialize)]
pub struct RoomRef {
    pub floor: i32,
    pub room: i32,
}

#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub start: RoomRef,
    pub destination: RoomRef,
    pub route: Vec<RouteStep>,
    pub waypoints: Vec<WaypointEntry>,
    #[serde(rename = "navigationMode")]
    pub navigation_mode: NavigationMode,
}

/// Current simulated position
pub async fn get_position(State(state): State<AppState>) -> Json<Position> {
    Json(state.position.get().await)
}

/// Replace the simulated position
pub async fn update_position(
    State(state): State<AppState>,
    Json(payload): Json<Position>,
) -> Json<Position> {
    state.position.set(payload).await;
    tracing::debug!(x = payload.x, y = payload.y, floor = payload.floor, "Position updated");
    Json(payload)
}

/// Grid square of the current simulated position
pub async fn grid_square(State(state): State<AppState>) -> Json<GridSquareResponse> {
    let current = state.position.get().await;
    let square = position::grid_square(current, state.grid.cell_size);

    Json(GridSquareResponse {
        grid_square: square.label,
        col: square.col,
        row: square.row,
        position: current,
    })
}

#[derive(Debug, Serialize)]
pub struct GridSquareResponse {
    #[serde(rename = "gridSquare")]
    pub grid_square: String,
    pub col: i32,
    pub row: i32,
    pub position: Position,
}

/// Static fingerprint fixtures
pub async fn fingerprints(State(state): State<AppState>) -> Json<Vec<Fingerprint>> {
    Json(state.fingerprints.as_ref().clone())
}

/// Parse an integer query parameter, defaulting to 0 when absent.
fn int_param(params: &HashMap<String, String>, key: &str) -> Result<i32> {
    match params.get(key) {
        None => Ok(0),
        Some(raw) => raw.trim().parse::<i32>().map_err(|_| {
            Error::invalid_request(format!(
                "query parameter '{}' must be an integer, got '{}'",
                key, raw
            ))
        }),
    }
}

/// Hold the response back for a random interval to mimic network latency.
async fn simulate_latency(latency: &LatencySection) {
    if !latency.enabled {
        return;
    }

    let ms = if latency.max_ms > latency.min_ms {
        fastrand::u64(latency.min_ms..latency.max_ms)
    } else {
        latency.min_ms
    };

    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_param_defaults_to_zero() {
        let params = HashMap::new();
        assert_eq!(int_param(&params, "start_floor").unwrap(), 0);
    }

    #[test]
    fn test_int_param_parses_signed_values() {
        let mut params = HashMap::new();
        params.insert("start_floor".to_string(), "-2".to_string());
        params.insert("start_room".to_string(), " 117 ".to_string());

        assert_eq!(int_param(&params, "start_floor").unwrap(), -2);
        assert_eq!(int_param(&params, "start_room").unwrap(), 117);
    }

    #[test]
    fn test_int_param_rejects_garbage() {
        let mut params = HashMap::new();
        params.insert("start_floor".to_string(), "abc".to_string());

        let err = int_param(&params, "start_floor").unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
}
