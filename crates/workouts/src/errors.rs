use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::{models::WorkoutId, validation::ValidationError};

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Workout not found: {0}")]
    NotFound(WorkoutId),

    #[error("No workout is being edited")]
    NoPendingEdit,

    #[error("Storage error: {0}")]
    Storage(#[from] object_store::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Persistence failed. In-memory state may be ahead of what is stored.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            WorkoutError::Storage(_) | WorkoutError::Io(_) | WorkoutError::Serialization(_)
        )
    }

    /// The operation referred to a record, or an edit, that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkoutError::NotFound(_) | WorkoutError::NoPendingEdit)
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            WorkoutError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> Response {
        match self {
            WorkoutError::Validation(e) => {
                let body = Json(json!({
                    "error": format!("Invalid input: {e}"),
                    "fields": e.fields(),
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            _ => {
                let (status, error_message) = match &self {
                    WorkoutError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found".to_string()),
                    WorkoutError::NoPendingEdit => (StatusCode::CONFLICT, self.to_string()),
                    WorkoutError::Storage(e) => {
                        error!("Storage error: {e}");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Changes were applied but could not be saved".to_string(),
                        )
                    }
                    WorkoutError::Io(e) => {
                        error!("IO error: {e}");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Changes were applied but could not be saved".to_string(),
                        )
                    }
                    WorkoutError::Serialization(e) => {
                        error!("Serialization error: {e}");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Changes were applied but could not be saved".to_string(),
                        )
                    }
                    WorkoutError::Validation(_) => unreachable!(),
                };

                let body = Json(json!({
                    "error": error_message,
                }));

                (status, body).into_response()
            }
        }
    }
}
