//! Response types for API endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use super::StoredWorkout;

/// Workout list in display order.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutList {
    pub items: Vec<StoredWorkout>,
    pub total_count: usize,
}

/// The record currently being edited, if any.
#[derive(Debug, Serialize, ToSchema)]
pub struct PendingEditResponse {
    pub editing: bool,
    pub workout: Option<StoredWorkout>,
}

/// Health probe response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub workouts: usize,
}
