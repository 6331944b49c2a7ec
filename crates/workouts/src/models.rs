use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    metrics::DerivedMetric,
    types::stored::{MalformedRecord, StoredWorkout},
    validation::{self, ValidationError},
};

/// Opaque workout identifier, unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WorkoutId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    fn title(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latitude/longitude pair in degrees. Serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    #[validate(custom(function = "validation::finite"), range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(custom(function = "validation::finite"), range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// The kind-specific measurement. Exactly one exists per record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

impl WorkoutDetails {
    pub fn new(kind: WorkoutKind, value: f64) -> Self {
        match kind {
            WorkoutKind::Running => WorkoutDetails::Running { cadence_spm: value },
            WorkoutKind::Cycling => WorkoutDetails::Cycling {
                elevation_gain_m: value,
            },
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            WorkoutDetails::Running { cadence_spm } => cadence_spm,
            WorkoutDetails::Cycling { elevation_gain_m } => elevation_gain_m,
        }
    }
}

/// Raw inputs for a new workout, as submitted from the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewWorkout {
    pub kind: WorkoutKind,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Cadence for running, elevation gain for cycling.
    pub kind_value: f64,
}

impl NewWorkout {
    pub fn running(coordinates: Coordinates, distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            coordinates,
            distance_km,
            duration_min,
            kind_value: cadence_spm,
        }
    }

    pub fn cycling(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            coordinates,
            distance_km,
            duration_min,
            kind_value: elevation_gain_m,
        }
    }
}

/// Replacement values for an edit. Kind and position never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutEdit {
    pub distance_km: f64,
    pub duration_min: f64,
    pub kind_value: f64,
}

impl WorkoutEdit {
    pub fn new(distance_km: f64, duration_min: f64, kind_value: f64) -> Self {
        Self {
            distance_km,
            duration_min,
            kind_value,
        }
    }
}

/// A logged workout.
///
/// Fields are private: outside this crate a record is a read-only snapshot,
/// and only [`crate::store::WorkoutStore`] can change one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "StoredWorkout", try_from = "StoredWorkout")]
pub struct WorkoutRecord {
    id: WorkoutId,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    details: WorkoutDetails,
    created_at: OffsetDateTime,
    label: String,
    metric: DerivedMetric,
}

impl WorkoutRecord {
    /// Validates the inputs and builds a record stamped with the current time.
    pub fn create(input: NewWorkout) -> Result<Self, ValidationError> {
        Self::create_at(input, OffsetDateTime::now_utc())
    }

    pub fn create_at(input: NewWorkout, created_at: OffsetDateTime) -> Result<Self, ValidationError> {
        validation::validate_new_workout(&input)?;

        let details = WorkoutDetails::new(input.kind, input.kind_value);
        Ok(Self {
            id: WorkoutId::generate(),
            coordinates: input.coordinates,
            distance_km: input.distance_km,
            duration_min: input.duration_min,
            details,
            created_at,
            label: describe(input.kind, created_at),
            metric: DerivedMetric::compute(&details, input.distance_km, input.duration_min),
        })
    }

    /// Validates and applies an edit. On error the record is untouched.
    pub(crate) fn apply_edit(&mut self, edit: WorkoutEdit) -> Result<(), ValidationError> {
        validation::validate_edit(self.kind(), &edit)?;

        self.distance_km = edit.distance_km;
        self.duration_min = edit.duration_min;
        self.details = WorkoutDetails::new(self.kind(), edit.kind_value);
        self.metric = DerivedMetric::compute(&self.details, self.distance_km, self.duration_min);
        Ok(())
    }

    /// Replaces the id. Used by the store if a generated id collides.
    pub(crate) fn regenerate_id(&mut self) {
        self.id = WorkoutId::generate();
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn details(&self) -> WorkoutDetails {
        self.details
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { cadence_spm } => Some(cadence_spm),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { elevation_gain_m } => Some(elevation_gain_m),
            WorkoutDetails::Running { .. } => None,
        }
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn metric(&self) -> DerivedMetric {
        self.metric
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        self.metric.pace()
    }

    pub fn speed_km_per_h(&self) -> Option<f64> {
        self.metric.speed()
    }
}

/// "Running on April 14"
fn describe(kind: WorkoutKind, date: OffsetDateTime) -> String {
    format!("{} on {} {}", kind.title(), date.month(), date.day())
}

impl From<WorkoutRecord> for StoredWorkout {
    fn from(record: WorkoutRecord) -> Self {
        let cadence = record.cadence_spm();
        let elevation_gain = record.elevation_gain_m();
        StoredWorkout {
            id: record.id.0,
            kind: record.details.kind(),
            coords: record.coordinates.into(),
            distance: record.distance_km,
            duration: record.duration_min,
            cadence,
            elevation_gain,
            date: record.created_at,
            description: record.label,
            pace: record.metric.pace(),
            speed: record.metric.speed(),
        }
    }
}

impl TryFrom<StoredWorkout> for WorkoutRecord {
    type Error = MalformedRecord;

    /// Stored values are trusted: no range checks, but the shape must match
    /// the kind. A missing derived metric is recomputed.
    fn try_from(stored: StoredWorkout) -> Result<Self, Self::Error> {
        let details = match stored.kind {
            WorkoutKind::Running => WorkoutDetails::Running {
                cadence_spm: stored
                    .cadence
                    .ok_or(MalformedRecord::MissingField("cadence"))?,
            },
            WorkoutKind::Cycling => WorkoutDetails::Cycling {
                elevation_gain_m: stored
                    .elevation_gain
                    .ok_or(MalformedRecord::MissingField("elevationGain"))?,
            },
        };
        let metric = match details {
            WorkoutDetails::Running { .. } => stored.pace.map(DerivedMetric::PaceMinPerKm),
            WorkoutDetails::Cycling { .. } => stored.speed.map(DerivedMetric::SpeedKmPerH),
        }
        .unwrap_or_else(|| DerivedMetric::compute(&details, stored.distance, stored.duration));

        Ok(Self {
            id: WorkoutId(stored.id),
            coordinates: stored.coords.into(),
            distance_km: stored.distance,
            duration_min: stored.duration,
            details,
            created_at: stored.date,
            label: stored.description,
            metric,
        })
    }
}
