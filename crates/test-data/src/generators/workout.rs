//! Workout generator producing form-style inputs.

use rand::Rng;
use workouts::models::NewWorkout;

use crate::config::BoundingBox;
use crate::profiles::{AthleteProfile, CyclistProfile, RunnerProfile, sample_variance};

/// Generates workout inputs pinned inside a region.
pub struct WorkoutGenerator {
    region: BoundingBox,
    runner: RunnerProfile,
    cyclist: CyclistProfile,
}

impl WorkoutGenerator {
    pub fn new(region: BoundingBox) -> Self {
        Self {
            region,
            runner: RunnerProfile::default(),
            cyclist: CyclistProfile::default(),
        }
    }

    /// Generates a single workout for `profile`.
    ///
    /// Distance and duration are rounded to one decimal, the way they are
    /// typed into the form.
    pub fn generate(&self, profile: &dyn AthleteProfile, rng: &mut impl Rng) -> NewWorkout {
        let (min_km, max_km) = profile.distance_range_km();
        let distance_km = round_tenth(rng.gen_range(min_km..max_km)).max(0.1);

        let speed_kmh = profile.base_speed_kmh() * sample_variance(profile, rng);
        let duration_min = round_tenth(distance_km / speed_kmh * 60.0).max(1.0);

        NewWorkout {
            kind: profile.kind(),
            coordinates: self.region.random_point(rng),
            distance_km,
            duration_min,
            kind_value: profile.kind_value(distance_km, rng),
        }
    }

    /// Generates `count` workouts, each a run with probability `running_share`.
    /// A share that is not a finite number counts as an even split.
    pub fn generate_mix(
        &self,
        count: usize,
        running_share: f64,
        rng: &mut impl Rng,
    ) -> Vec<NewWorkout> {
        let share = if running_share.is_finite() {
            running_share.clamp(0.0, 1.0)
        } else {
            0.5
        };
        (0..count)
            .map(|_| {
                if rng.gen_bool(share) {
                    self.generate(&self.runner, rng)
                } else {
                    self.generate(&self.cyclist, rng)
                }
            })
            .collect()
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
