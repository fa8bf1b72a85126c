//! Route generation
//!
//! Produces a randomized path between two anchor points, tagging a random
//! subset of the interior steps with waypoints drawn from the active catalog.
//! Output is intentionally non-deterministic; no seeding is exposed.

use serde::Serialize;

use crate::types::{Point, RouteStep, WaypointEntry};

/// Result of one route generation call
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    /// Full step sequence, anchors included
    pub steps: Vec<RouteStep>,
    /// Waypoint entries attached to steps, in consumption order
    pub used_waypoints: Vec<WaypointEntry>,
}

/// Generates randomized routes between two points
///
/// Stateless apart from the waypoint attachment probability. Every call uses
/// a fresh random source, so concurrent requests never share RNG state.
#[derive(Debug, Clone, Copy)]
pub struct RouteGenerator {
    waypoint_probability: f64,
}

impl RouteGenerator {
    pub fn new(waypoint_probability: f64) -> Self {
        Self {
            waypoint_probability,
        }
    }

    /// Generate a route of exactly `step_count` points from `start` to `end`.
    ///
    /// The first and last steps are the anchors verbatim. Each interior point
    /// is drawn uniformly per axis within the anchor bounds. Up to
    /// `step_count / 2` waypoints are pre-selected from `pool` without
    /// replacement; each interior step consumes one with independent
    /// probability `waypoint_probability` until the selection runs dry.
    pub fn generate(
        &self,
        start: Point,
        end: Point,
        step_count: usize,
        pool: &[WaypointEntry],
    ) -> RouteResult {
        assert!(step_count >= 2, "step_count must be at least 2");

        let mut rng = fastrand::Rng::new();
        let mut selected = sample_without_replacement(&mut rng, pool, step_count / 2);

        let mut steps = Vec::with_capacity(step_count);
        let mut used_waypoints = Vec::new();

        steps.push(RouteStep::at(start));

        for _ in 0..step_count - 2 {
            let mut step = RouteStep {
                x: random_coordinate(&mut rng, start.x, end.x),
                y: random_coordinate(&mut rng, start.y, end.y),
                waypoint_id: None,
            };

            if rng.f64() < self.waypoint_probability {
                if let Some(entry) = selected.pop() {
                    step.waypoint_id = Some(entry.id().to_string());
                    used_waypoints.push(entry);
                }
            }

            steps.push(step);
        }

        steps.push(RouteStep::at(end));

        RouteResult {
            steps,
            used_waypoints,
        }
    }
}

/// Uniform sample of `count` entries without replacement.
///
/// Partial Fisher-Yates over a local index copy; the pool itself is never
/// reordered. `count` is capped at the pool size.
fn sample_without_replacement(
    rng: &mut fastrand::Rng,
    pool: &[WaypointEntry],
    count: usize,
) -> Vec<WaypointEntry> {
    let count = count.min(pool.len());
    let mut indices: Vec<usize> = (0..pool.len()).collect();

    for i in 0..count {
        let j = rng.usize(i..indices.len());
        indices.swap(i, j);
    }

    indices[..count].iter().map(|&i| pool[i].clone()).collect()
}

/// Uniform draw in `[min(a, b), max(a, b))`; a degenerate range yields the
/// shared value.
fn random_coordinate(rng: &mut fastrand::Rng, a: i32, b: i32) -> i32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi {
        lo
    } else {
        rng.i32(lo..hi)
    }
}
