//! Test data generation for the workout log.
//!
//! Produces realistic running and cycling workouts inside a geographic region,
//! for seeding a local store during manual verification and for randomized
//! tests of the store.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let generator = WorkoutGenerator::new(Region::MADRID);
//! let mut rng = rand::thread_rng();
//! let input = generator.generate(&RunnerProfile::recreational(), &mut rng);
//! store.create(input).await?;
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub use workouts::models::{Coordinates, NewWorkout, WorkoutKind};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BoundingBox, Region, SeedConfig};
    pub use crate::generators::WorkoutGenerator;
    pub use crate::profiles::{AthleteProfile, CyclistProfile, RunnerProfile, sample_variance};
    pub use crate::{Coordinates, NewWorkout, WorkoutKind};
}
