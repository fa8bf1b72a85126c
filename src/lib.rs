//! Guidepost - a mock backend for an indoor-navigation demo
//!
//! Guidepost simulates the server side of an indoor-navigation app:
//! - Randomly generated guide routes with visual or tactile waypoints
//! - A simulated device position with grid-square lookup
//! - Static radio fingerprint fixtures
//! - Simple HTTP API with static asset mounts
//!
//! There is no real routing or localization; everything is mock data.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod position;
pub mod route;
pub mod types;

pub use error::{Error, Result};
