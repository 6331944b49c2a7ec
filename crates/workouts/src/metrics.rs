//! Derived performance metrics for each workout kind.
//!
//! All functions here are pure. Callers validate that distance and duration
//! are strictly positive before calling in.

use crate::models::WorkoutDetails;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Running pace in minutes per kilometre.
pub fn running_pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in kilometres per hour.
pub fn cycling_speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / MINUTES_PER_HOUR)
}

/// The kind-specific metric derived from distance and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedMetric {
    PaceMinPerKm(f64),
    SpeedKmPerH(f64),
}

impl DerivedMetric {
    pub fn compute(details: &WorkoutDetails, distance_km: f64, duration_min: f64) -> Self {
        match details {
            WorkoutDetails::Running { .. } => {
                Self::PaceMinPerKm(running_pace(distance_km, duration_min))
            }
            WorkoutDetails::Cycling { .. } => {
                Self::SpeedKmPerH(cycling_speed(distance_km, duration_min))
            }
        }
    }

    pub fn pace(self) -> Option<f64> {
        match self {
            Self::PaceMinPerKm(v) => Some(v),
            Self::SpeedKmPerH(_) => None,
        }
    }

    pub fn speed(self) -> Option<f64> {
        match self {
            Self::SpeedKmPerH(v) => Some(v),
            Self::PaceMinPerKm(_) => None,
        }
    }
}
