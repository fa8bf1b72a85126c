//! Shared API state

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::WaypointCatalog;
use crate::config::{AppConfig, GridSection, GuideSection};
use crate::fingerprint::{self, Fingerprint};
use crate::position::PositionTracker;
use crate::route::RouteGenerator;
use crate::Result;

/// API server state
///
/// Everything here is either immutable after startup or guarded internally;
/// cloning is cheap and handlers never need extra locking.
#[derive(Clone)]
pub struct AppState {
    /// Immutable waypoint catalogs
    pub catalog: Arc<WaypointCatalog>,

    /// Route generator carrying the waypoint attachment probability
    pub generator: RouteGenerator,

    /// Simulated device position
    pub position: Arc<PositionTracker>,

    /// Static fingerprint fixtures
    pub fingerprints: Arc<Vec<Fingerprint>>,

    /// Guide endpoint tunables
    pub guide: GuideSection,

    /// Grid projection settings
    pub grid: GridSection,

    /// Root directory for the static asset mounts
    pub static_root: PathBuf,
}

impl AppState {
    /// Build state from validated configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let catalog = WaypointCatalog::builtin();
        catalog.validate()?;

        Ok(Self {
            catalog: Arc::new(catalog),
            generator: RouteGenerator::new(config.guide.waypoint_probability),
            position: Arc::new(PositionTracker::new(config.position.initial())),
            fingerprints: Arc::new(fingerprint::builtin()),
            guide: config.guide.clone(),
            grid: config.grid.clone(),
            static_root: PathBuf::from(&config.static_files.root),
        })
    }
}
