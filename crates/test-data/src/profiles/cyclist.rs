//! Cyclist athletic profile.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use workouts::models::WorkoutKind;

use super::AthleteProfile;

/// Athletic profile for cycling workouts.
///
/// Based on typical recreational to competitive cyclist performance:
/// - Base speed: ~25 km/h on flat terrain
/// - Climbing: ~8 m of elevation per km ridden, widely spread; point-to-point
///   rides that end lower than they start report a negative gain
#[derive(Debug, Clone)]
pub struct CyclistProfile {
    /// Base speed in km/h on flat terrain.
    speed_kmh: f64,
    /// Average climbing per kilometre in metres.
    climb_m_per_km: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    distance_range_km: (f64, f64),
}

impl Default for CyclistProfile {
    fn default() -> Self {
        Self {
            speed_kmh: 25.0,
            climb_m_per_km: 8.0,
            variance: 0.10,
            distance_range_km: (15.0, 80.0),
        }
    }
}

impl CyclistProfile {
    /// Creates a new cyclist profile with specified base speed.
    ///
    /// # Arguments
    /// * `speed_kmh` - Base speed in km/h on flat terrain
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            speed_kmh,
            ..Default::default()
        }
    }

    /// Creates an elite cyclist profile (~35 km/h base).
    pub fn elite() -> Self {
        Self {
            distance_range_km: (40.0, 160.0),
            ..Self::with_speed(35.0)
        }
    }

    /// Creates a recreational cyclist profile (~20 km/h base).
    pub fn recreational() -> Self {
        Self::with_speed(20.0)
    }

    /// Creates a mountain biker profile: slower, much more climbing.
    pub fn mountain_biker() -> Self {
        Self {
            speed_kmh: 15.0,
            climb_m_per_km: 25.0,
            variance: 0.15,
            distance_range_km: (10.0, 40.0),
        }
    }
}

impl AthleteProfile for CyclistProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Cycling
    }

    fn distance_range_km(&self) -> (f64, f64) {
        self.distance_range_km
    }

    fn base_speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn kind_value(&self, distance_km: f64, rng: &mut dyn RngCore) -> f64 {
        let factor = Normal::new(1.0, 0.6)
            .map(|n| n.sample(rng))
            .unwrap_or(1.0);
        (distance_km * self.climb_m_per_km * factor).round()
    }
}
