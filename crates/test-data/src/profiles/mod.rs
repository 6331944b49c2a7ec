//! Athletic performance profiles.
//!
//! Profiles define realistic speeds, distances and kind-specific measurements
//! for each workout kind. The workout generator samples from them.

mod cyclist;
mod runner;

pub use cyclist::CyclistProfile;
pub use runner::RunnerProfile;

use rand::RngCore;
use workouts::models::WorkoutKind;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The kind of workout they describe
/// - A typical distance range and flat-terrain speed
/// - Day-to-day variance
/// - The kind-specific measurement (cadence or elevation gain)
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> WorkoutKind;

    /// Typical workout distance range in kilometres, `(min, max)`.
    fn distance_range_km(&self) -> (f64, f64);

    /// Base speed on flat terrain in km/h.
    fn base_speed_kmh(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;

    /// Cadence in steps per minute for runs, elevation gain in metres for rides.
    fn kind_value(&self, distance_km: f64, rng: &mut dyn RngCore) -> f64;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    let std_dev = profile.variance();
    match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}
