//! Field validation for raw workout inputs.
//!
//! Rules are declared with `validator` derives on [`Measurements`] and
//! [`Coordinates`]. Every rule is checked before anything is constructed or
//! mutated, and all offending fields are reported together using their wire
//! names.

use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationError as RuleError, ValidationErrors};

use crate::models::{Coordinates, NewWorkout, WorkoutEdit, WorkoutKind};

pub const COORDS: &str = "coords";
pub const DISTANCE: &str = "distance";
pub const DURATION: &str = "duration";
pub const CADENCE: &str = "cadence";
pub const ELEVATION_GAIN: &str = "elevationGain";

const NOT_FINITE: &str = "not_finite";

/// What is wrong with a single field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    #[error("is required")]
    Missing,
    #[error("must be a finite number")]
    NotFinite,
    #[error("must be a positive number")]
    NotPositive,
    #[error("is outside the valid range")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

/// One or more invalid fields. Never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", summarize(.fields))]
pub struct ValidationError {
    fields: Vec<FieldError>,
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.field, f.problem))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn single(field: &'static str, problem: FieldProblem) -> Self {
        Self {
            fields: vec![FieldError { field, problem }],
        }
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.field).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

/// Rejects NaN and infinities. Sign is unrestricted.
pub fn finite(value: f64) -> Result<(), RuleError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RuleError::new(NOT_FINITE))
    }
}

/// Raw numeric inputs shared by creation and editing. Only the field
/// matching the workout kind is filled in.
///
/// Running cadence must be positive; cycling elevation gain only has to be
/// finite because descending rides are legitimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Validate)]
pub struct Measurements {
    #[validate(required, custom(function = "finite"), range(exclusive_min = 0.0))]
    pub distance: Option<f64>,
    #[validate(required, custom(function = "finite"), range(exclusive_min = 0.0))]
    pub duration: Option<f64>,
    #[validate(custom(function = "finite"), range(exclusive_min = 0.0))]
    pub cadence: Option<f64>,
    #[validate(custom(function = "finite"))]
    pub elevation_gain: Option<f64>,
}

impl Measurements {
    pub fn for_kind(
        kind: WorkoutKind,
        distance: Option<f64>,
        duration: Option<f64>,
        kind_value: Option<f64>,
    ) -> Self {
        let (cadence, elevation_gain) = match kind {
            WorkoutKind::Running => (kind_value, None),
            WorkoutKind::Cycling => (None, kind_value),
        };
        Self {
            distance,
            duration,
            cadence,
            elevation_gain,
        }
    }

    fn kind_value(&self, kind: WorkoutKind) -> Option<f64> {
        match kind {
            WorkoutKind::Running => self.cadence,
            WorkoutKind::Cycling => self.elevation_gain,
        }
    }
}

/// Name of the kind-specific input field for a workout kind.
pub fn kind_value_field(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => CADENCE,
        WorkoutKind::Cycling => ELEVATION_GAIN,
    }
}

/// Checks `measurements` (and `coordinates`, for new workouts) and returns
/// the validated values.
pub fn check(
    kind: WorkoutKind,
    coordinates: Option<&Coordinates>,
    measurements: &Measurements,
) -> Result<WorkoutEdit, ValidationError> {
    let mut fields = Vec::new();

    if let Some(Err(errors)) = coordinates.map(Validate::validate)
        && let Some(problem) = problem(COORDS, &rule_errors(&errors, &["lat", "lng"]))
    {
        fields.push(FieldError {
            field: COORDS,
            problem,
        });
    }

    let errors = measurements
        .validate()
        .err()
        .unwrap_or_else(ValidationErrors::new);
    let kind_field = kind_value_field(kind);
    for (field, key) in [
        (DISTANCE, "distance"),
        (DURATION, "duration"),
        (CADENCE, "cadence"),
        (ELEVATION_GAIN, "elevation_gain"),
    ] {
        let found = problem(field, &rule_errors(&errors, &[key]));
        let missing = field == kind_field && measurements.kind_value(kind).is_none();
        if let Some(problem) = found.or(missing.then_some(FieldProblem::Missing)) {
            fields.push(FieldError { field, problem });
        }
    }

    match (
        measurements.distance,
        measurements.duration,
        measurements.kind_value(kind),
    ) {
        (Some(distance_km), Some(duration_min), Some(kind_value)) if fields.is_empty() => {
            Ok(WorkoutEdit::new(distance_km, duration_min, kind_value))
        }
        _ => Err(ValidationError { fields }),
    }
}

pub fn validate_new_workout(input: &NewWorkout) -> Result<(), ValidationError> {
    let measurements = Measurements::for_kind(
        input.kind,
        Some(input.distance_km),
        Some(input.duration_min),
        Some(input.kind_value),
    );
    check(input.kind, Some(&input.coordinates), &measurements).map(|_| ())
}

pub fn validate_edit(kind: WorkoutKind, edit: &WorkoutEdit) -> Result<(), ValidationError> {
    let measurements = Measurements::for_kind(
        kind,
        Some(edit.distance_km),
        Some(edit.duration_min),
        Some(edit.kind_value),
    );
    check(kind, None, &measurements).map(|_| ())
}

fn rule_errors<'a>(errors: &'a ValidationErrors, keys: &[&str]) -> Vec<&'a RuleError> {
    let by_field = errors.field_errors();
    keys.iter()
        .filter_map(|key| by_field.get(*key).copied())
        .flat_map(|errs| errs.iter())
        .collect()
}

/// Collapses the rules a field broke into the single problem reported for it.
fn problem(field: &str, errors: &[&RuleError]) -> Option<FieldProblem> {
    let broke = |code: &str| errors.iter().any(|e| e.code == code);

    if errors.is_empty() {
        None
    } else if broke("required") {
        Some(FieldProblem::Missing)
    } else if broke(NOT_FINITE) {
        Some(FieldProblem::NotFinite)
    } else if field == COORDS {
        Some(FieldProblem::OutOfRange)
    } else {
        Some(FieldProblem::NotPositive)
    }
}
