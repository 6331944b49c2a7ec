//! Pending edit handlers.
//!
//! Mirrors the edit form: clicking "edit" begins an edit and returns the
//! values to pre-populate, submitting commits it, closing the form cancels it.

use axum::{Extension, extract::Path, http::StatusCode, response::Json};

use crate::{
    errors::WorkoutError,
    models::WorkoutId,
    types::{CommitEditRequest, PendingEditResponse, StoredWorkout},
};

use super::SharedStore;

/// Start editing a workout.
#[utoipa::path(
    post,
    path = "/workouts/{id}/edit",
    tag = "edit",
    params(
        ("id" = String, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Current values of the workout", body = StoredWorkout),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn begin_edit(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<StoredWorkout>, WorkoutError> {
    let record = store.lock().await.begin_edit(&WorkoutId::from(id))?;
    Ok(Json(record.into()))
}

/// Get the workout currently being edited.
#[utoipa::path(
    get,
    path = "/edit",
    tag = "edit",
    responses(
        (status = 200, description = "Pending edit, if any", body = PendingEditResponse)
    )
)]
pub async fn get_pending_edit(
    Extension(store): Extension<SharedStore>,
) -> Json<PendingEditResponse> {
    let store = store.lock().await;
    let workout: Option<StoredWorkout> = store.pending_edit().cloned().map(Into::into);
    Json(PendingEditResponse {
        editing: workout.is_some(),
        workout,
    })
}

/// Submit new values for the workout being edited.
#[utoipa::path(
    patch,
    path = "/edit",
    tag = "edit",
    request_body = CommitEditRequest,
    responses(
        (status = 200, description = "Workout updated", body = StoredWorkout),
        (status = 400, description = "Invalid input; the edit stays pending"),
        (status = 409, description = "No workout is being edited")
    )
)]
pub async fn commit_edit(
    Extension(store): Extension<SharedStore>,
    Json(req): Json<CommitEditRequest>,
) -> Result<Json<StoredWorkout>, WorkoutError> {
    let mut store = store.lock().await;
    let kind = store
        .pending_edit()
        .map(|record| record.kind())
        .ok_or(WorkoutError::NoPendingEdit)?;

    let edit = req.into_edit(kind)?;
    let record = store.commit_edit(edit).await?;
    Ok(Json(record.into()))
}

/// Abandon the pending edit.
#[utoipa::path(
    delete,
    path = "/edit",
    tag = "edit",
    responses(
        (status = 204, description = "Edit cancelled")
    )
)]
pub async fn cancel_edit(Extension(store): Extension<SharedStore>) -> StatusCode {
    store.lock().await.cancel_edit();
    StatusCode::NO_CONTENT
}
