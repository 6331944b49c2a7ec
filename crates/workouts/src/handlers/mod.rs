//! HTTP request handlers for the workouts API.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::WorkoutStore;

pub mod edit;
pub mod stats;
pub mod workouts;

pub use edit::{begin_edit, cancel_edit, commit_edit, get_pending_edit};
pub use stats::health_check;
pub use workouts::{create_workout, delete_workout, get_workout, list_workouts, reset_workouts};

/// The single store shared by all requests. The mutex runs store operations
/// one at a time.
pub type SharedStore = Arc<Mutex<WorkoutStore>>;
