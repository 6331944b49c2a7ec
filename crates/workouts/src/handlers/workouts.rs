//! Workout collection handlers.

use axum::{
    Extension,
    extract::Path,
    http::StatusCode,
    response::Json,
};

use crate::{
    errors::WorkoutError,
    models::WorkoutId,
    types::{CreateWorkoutRequest, StoredWorkout, WorkoutList},
};

use super::SharedStore;

/// List all workouts in the order they were logged.
#[utoipa::path(
    get,
    path = "/workouts",
    tag = "workouts",
    responses(
        (status = 200, description = "All workouts", body = WorkoutList)
    )
)]
pub async fn list_workouts(Extension(store): Extension<SharedStore>) -> Json<WorkoutList> {
    let store = store.lock().await;
    let items: Vec<StoredWorkout> = store.records().iter().cloned().map(Into::into).collect();
    Json(WorkoutList {
        total_count: items.len(),
        items,
    })
}

/// Log a new workout at the clicked map position.
#[utoipa::path(
    post,
    path = "/workouts",
    tag = "workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout created", body = StoredWorkout),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Workout kept in memory but not saved")
    )
)]
pub async fn create_workout(
    Extension(store): Extension<SharedStore>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<StoredWorkout>), WorkoutError> {
    let input = req.into_new_workout()?;
    let record = store.lock().await.create(input).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Get a single workout.
#[utoipa::path(
    get,
    path = "/workouts/{id}",
    tag = "workouts",
    params(
        ("id" = String, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout details", body = StoredWorkout),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn get_workout(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<StoredWorkout>, WorkoutError> {
    let id = WorkoutId::from(id);
    let store = store.lock().await;
    let record = store
        .get(&id)
        .cloned()
        .ok_or(WorkoutError::NotFound(id))?;
    Ok(Json(record.into()))
}

/// Delete a workout. Deleting an unknown ID succeeds.
#[utoipa::path(
    delete,
    path = "/workouts/{id}",
    tag = "workouts",
    params(
        ("id" = String, Path, description = "Workout ID")
    ),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 500, description = "Workout removed in memory but not saved")
    )
)]
pub async fn delete_workout(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, WorkoutError> {
    store.lock().await.delete(&WorkoutId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every workout and the stored collection.
#[utoipa::path(
    delete,
    path = "/workouts",
    tag = "workouts",
    responses(
        (status = 204, description = "All workouts deleted"),
        (status = 500, description = "Stored collection could not be removed")
    )
)]
pub async fn reset_workouts(
    Extension(store): Extension<SharedStore>,
) -> Result<StatusCode, WorkoutError> {
    store.lock().await.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}
