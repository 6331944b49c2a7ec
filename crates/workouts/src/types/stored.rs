//! Persisted workout shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::models::WorkoutKind;

/// One workout as written to storage and returned by the API.
///
/// Exactly one of `cadence`/`elevationGain` and one of `pace`/`speed` is
/// present, matching `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredWorkout {
    pub id: String,
    /// Older collections call this field `type`.
    #[serde(alias = "type")]
    pub kind: WorkoutKind,
    /// `[latitude, longitude]`
    #[schema(value_type = Vec<f64>)]
    pub coords: [f64; 2],
    /// Kilometres.
    pub distance: f64,
    /// Minutes.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("stored workout is missing `{0}`")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutRecord;

    #[test]
    fn test_reads_collection_written_by_browser_app() {
        let json = r#"[{
            "date": "2024-04-14T08:30:00.000Z",
            "id": "3101234567",
            "coords": [40.0, -3.7],
            "distance": 5.2,
            "duration": 24,
            "type": "running",
            "cadence": 178,
            "pace": 4.615384615384615,
            "description": "Running on April 14"
        }]"#;

        let records: Vec<WorkoutRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id().as_str(), "3101234567");
        assert_eq!(records[0].kind(), WorkoutKind::Running);
        assert_eq!(records[0].cadence_spm(), Some(178.0));
        assert_eq!(records[0].label(), "Running on April 14");
    }

    #[test]
    fn test_missing_kind_value_is_malformed() {
        let json = r#"{
            "id": "a",
            "kind": "cycling",
            "coords": [40.0, -3.7],
            "distance": 27,
            "duration": 95,
            "date": "2024-04-14T08:30:00Z",
            "description": "Cycling on April 14",
            "speed": 17.05
        }"#;

        let err = serde_json::from_str::<WorkoutRecord>(json).unwrap_err();
        assert!(err.to_string().contains("elevationGain"), "{err}");
    }

    #[test]
    fn test_missing_metric_is_recomputed() {
        let json = r#"{
            "id": "b",
            "kind": "cycling",
            "coords": [40.0, -3.7],
            "distance": 30,
            "duration": 60,
            "elevationGain": 0,
            "date": "2024-04-14T08:30:00Z",
            "description": "Cycling on April 14"
        }"#;

        let record: WorkoutRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.speed_km_per_h(), Some(30.0));
    }

    #[test]
    fn test_writes_fixed_field_names() {
        let stored = StoredWorkout {
            id: "c".to_string(),
            kind: WorkoutKind::Cycling,
            coords: [40.0, -3.7],
            distance: 27.0,
            duration: 95.0,
            cadence: None,
            elevation_gain: Some(523.0),
            date: time::macros::datetime!(2024-04-14 08:30 UTC),
            description: "Cycling on April 14".to_string(),
            pace: None,
            speed: Some(17.0),
        };

        let value = serde_json::to_value(&stored).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["kind"], "cycling");
        assert_eq!(obj["elevationGain"], 523.0);
        assert_eq!(obj["date"], "2024-04-14T08:30:00Z");
        assert!(!obj.contains_key("cadence"));
        assert!(!obj.contains_key("pace"));
    }
}
