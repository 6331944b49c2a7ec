//! Request body types for API endpoints.
//!
//! Numeric fields are optional on the wire so that a blank form field is
//! reported by name instead of failing deserialization as a whole.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    models::{Coordinates, NewWorkout, WorkoutEdit, WorkoutKind},
    validation::{self, Measurements, ValidationError},
};

/// Workout creation request.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub kind: WorkoutKind,
    /// `[latitude, longitude]` of the map click.
    #[schema(value_type = Vec<f64>)]
    pub coords: [f64; 2],
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    /// Required for running.
    pub cadence: Option<f64>,
    /// Required for cycling.
    pub elevation_gain: Option<f64>,
}

impl CreateWorkoutRequest {
    pub fn into_new_workout(self) -> Result<NewWorkout, ValidationError> {
        let coordinates = Coordinates::from(self.coords);
        let edit = validation::check(
            self.kind,
            Some(&coordinates),
            &measurements(
                self.kind,
                self.distance,
                self.duration,
                self.cadence,
                self.elevation_gain,
            ),
        )?;
        Ok(NewWorkout {
            kind: self.kind,
            coordinates,
            distance_km: edit.distance_km,
            duration_min: edit.duration_min,
            kind_value: edit.kind_value,
        })
    }
}

/// Edit commit request. The kind comes from the record being edited, so only
/// its matching kind-specific field is read.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommitEditRequest {
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    pub cadence: Option<f64>,
    pub elevation_gain: Option<f64>,
}

impl CommitEditRequest {
    pub fn into_edit(self, kind: WorkoutKind) -> Result<WorkoutEdit, ValidationError> {
        validation::check(
            kind,
            None,
            &measurements(
                kind,
                self.distance,
                self.duration,
                self.cadence,
                self.elevation_gain,
            ),
        )
    }
}

fn measurements(
    kind: WorkoutKind,
    distance: Option<f64>,
    duration: Option<f64>,
    cadence: Option<f64>,
    elevation_gain: Option<f64>,
) -> Measurements {
    let kind_value = match kind {
        WorkoutKind::Running => cadence,
        WorkoutKind::Cycling => elevation_gain,
    };
    Measurements::for_kind(kind, distance, duration, kind_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_from_json() {
        let req: CreateWorkoutRequest = serde_json::from_str(
            r#"{"kind": "cycling", "coords": [40.0, -3.7], "distance": 27, "duration": 95, "elevationGain": 523}"#,
        )
        .unwrap();

        let input = req.into_new_workout().unwrap();
        assert_eq!(input, NewWorkout::cycling([40.0, -3.7].into(), 27.0, 95.0, 523.0));
    }

    #[test]
    fn test_missing_fields_are_named() {
        let req: CreateWorkoutRequest =
            serde_json::from_str(r#"{"kind": "running", "coords": [40.0, -3.7], "distance": 5, "elevationGain": 10}"#)
                .unwrap();

        let err = req.into_new_workout().unwrap_err();
        assert_eq!(
            err.field_names(),
            vec![validation::DURATION, validation::CADENCE]
        );
    }

    #[test]
    fn test_range_and_missing_reported_together() {
        let req: CreateWorkoutRequest =
            serde_json::from_str(r#"{"kind": "cycling", "coords": [0, 0], "distance": -5, "duration": 30}"#)
                .unwrap();

        let err = req.into_new_workout().unwrap_err();
        assert_eq!(
            err.field_names(),
            vec![validation::DISTANCE, validation::ELEVATION_GAIN]
        );
    }

    #[test]
    fn test_edit_reads_field_matching_kind() {
        let req = CommitEditRequest {
            distance: Some(10.0),
            duration: Some(30.0),
            cadence: Some(170.0),
            elevation_gain: None,
        };
        assert_eq!(
            req.into_edit(WorkoutKind::Running).unwrap(),
            WorkoutEdit::new(10.0, 30.0, 170.0)
        );
    }

    #[test]
    fn test_non_finite_coords_rejected() {
        let req = CreateWorkoutRequest {
            kind: WorkoutKind::Running,
            coords: [f64::NAN, -3.7],
            distance: Some(5.0),
            duration: Some(25.0),
            cadence: Some(170.0),
            elevation_gain: None,
        };

        let err = req.into_new_workout().unwrap_err();
        assert_eq!(err.field_names(), vec![validation::COORDS]);
    }

    #[test]
    fn test_other_kind_field_ignored() {
        let req = CommitEditRequest {
            distance: Some(20.0),
            duration: Some(60.0),
            cadence: Some(f64::NAN),
            elevation_gain: Some(-15.0),
        };
        assert_eq!(
            req.into_edit(WorkoutKind::Cycling).unwrap(),
            WorkoutEdit::new(20.0, 60.0, -15.0)
        );
    }
}
