//! Data generators for workouts.

mod workout;

pub use workout::WorkoutGenerator;
