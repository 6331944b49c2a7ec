//! Runner athletic profile.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use workouts::models::WorkoutKind;

use super::AthleteProfile;

/// Athletic profile for running workouts.
///
/// Based on typical recreational runners:
/// - Base pace: ~5:30/km
/// - Cadence: ~170 spm, a few steps either way from day to day
/// - Distances from a short 3 km jog to a 15 km long run
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Base pace in minutes per kilometre.
    pace_min_per_km: f64,
    /// Average cadence in steps per minute.
    cadence_spm: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    distance_range_km: (f64, f64),
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            pace_min_per_km: 5.5,
            cadence_spm: 170.0,
            variance: 0.08,
            distance_range_km: (3.0, 15.0),
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            pace_min_per_km,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km base pace, high cadence).
    pub fn elite() -> Self {
        Self {
            cadence_spm: 185.0,
            distance_range_km: (8.0, 30.0),
            ..Self::with_pace(3.5)
        }
    }

    /// Creates a recreational runner profile (~6:00/km base pace).
    pub fn recreational() -> Self {
        Self::with_pace(6.0)
    }

    pub fn pace_min_per_km(&self) -> f64 {
        self.pace_min_per_km
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn distance_range_km(&self) -> (f64, f64) {
        self.distance_range_km
    }

    fn base_speed_kmh(&self) -> f64 {
        60.0 / self.pace_min_per_km
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn kind_value(&self, _distance_km: f64, rng: &mut dyn RngCore) -> f64 {
        let cadence = Normal::new(self.cadence_spm, 5.0)
            .map(|n| n.sample(rng))
            .unwrap_or(self.cadence_spm);
        cadence.round().max(120.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_profile() {
        let profile = RunnerProfile::default();
        assert!((profile.base_speed_kmh() - 60.0 / 5.5).abs() < 0.01);
    }

    #[test]
    fn test_elite_is_faster() {
        assert!(RunnerProfile::elite().base_speed_kmh() > RunnerProfile::recreational().base_speed_kmh());
    }

    #[test]
    fn test_cadence_is_whole_and_positive() {
        let profile = RunnerProfile::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let cadence = profile.kind_value(10.0, &mut rng);
            assert!(cadence >= 120.0);
            assert_eq!(cadence, cadence.round());
        }
    }
}
