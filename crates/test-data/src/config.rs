//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};
use workouts::models::Coordinates;

/// Geographic bounding box defined by southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude (south)
    pub min_lat: f64,
    /// Minimum longitude (west)
    pub min_lng: f64,
    /// Maximum latitude (north)
    pub max_lat: f64,
    /// Maximum longitude (east)
    pub max_lng: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// Returns a random point within the bounding box.
    pub fn random_point(&self, rng: &mut impl rand::Rng) -> Coordinates {
        let lat = rng.gen_range(self.min_lat..self.max_lat);
        let lng = rng.gen_range(self.min_lng..self.max_lng);
        Coordinates::new(lat, lng)
    }

    pub fn contains(&self, point: Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Pre-defined regions to scatter workouts over.
#[derive(Debug, Clone, Copy)]
pub struct Region;

impl Region {
    /// Madrid and the Casa de Campo park.
    pub const MADRID: BoundingBox = BoundingBox::new(40.35, -3.8, 40.5, -3.6);

    /// Boulder, CO area - popular fitness trails with varied terrain.
    pub const BOULDER: BoundingBox = BoundingBox::new(39.9, -105.5, 40.1, -105.2);
}

/// Configuration for the `seed` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of workouts to generate.
    pub workout_count: usize,

    /// Share of workouts that are runs (the rest are rides).
    pub running_share: f64,

    /// Where the workouts are pinned.
    pub region: BoundingBox,

    /// Remove existing workouts before seeding.
    pub reset_first: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            workout_count: 25,
            running_share: 0.6,
            region: Region::MADRID,
            reset_first: false,
        }
    }
}

impl SeedConfig {
    /// Reads `SEED_COUNT`, `SEED_RUNNING_SHARE` and `SEED_RESET`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Unset or unusable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            workout_count: lookup("SEED_COUNT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.workout_count),
            running_share: lookup("SEED_RUNNING_SHARE")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|share| share.is_finite())
                .unwrap_or(defaults.running_share),
            reset_first: lookup("SEED_RESET").is_some_and(|v| v == "1" || v == "true"),
            ..defaults
        }
    }
}
