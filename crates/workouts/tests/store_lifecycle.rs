//! End-to-end store behaviour against the on-disk store.

use tempfile::TempDir;
use workouts::{
    config::AppConfig,
    models::{Coordinates, NewWorkout, WorkoutEdit, WorkoutRecord},
    open_store,
    persistence::{JsonPersistence, PersistenceAdapter},
    storage::KeyValueStore,
};

const HERE: Coordinates = Coordinates::new(40.0, -3.7);

fn config_in(dir: &TempDir) -> AppConfig {
    AppConfig {
        store_path: dir.path().join("store").to_string_lossy().into_owned(),
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_workouts_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let mut store = open_store(&config).await.unwrap();
    let run = store
        .create(NewWorkout::running(HERE, 5.2, 24.0, 178.0))
        .await
        .unwrap();
    let ride = store
        .create(NewWorkout::cycling(HERE, 27.0, 95.0, 523.0))
        .await
        .unwrap();
    store.begin_edit(run.id()).unwrap();
    let run = store
        .commit_edit(WorkoutEdit::new(10.0, 30.0, 178.0))
        .await
        .unwrap();
    drop(store);

    let reopened = open_store(&config).await.unwrap();

    assert_eq!(reopened.records(), &[run.clone(), ride]);
    assert_eq!(reopened.records()[0].pace_min_per_km(), Some(3.0));
    assert!(!reopened.edit_state().is_editing());
}

#[tokio::test]
async fn test_reset_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let mut store = open_store(&config).await.unwrap();
    store
        .create(NewWorkout::running(HERE, 5.0, 25.0, 170.0))
        .await
        .unwrap();
    assert!(dir.path().join("store").join("workouts").exists());

    store.reset().await.unwrap();

    assert!(store.is_empty());
    assert!(!dir.path().join("store").join("workouts").exists());
    assert!(open_store(&config).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_round_trip_is_exact() {
    let persistence = JsonPersistence::new(KeyValueStore::new_in_memory());
    let records: Vec<WorkoutRecord> = [
        NewWorkout::running(HERE, 0.1 + 0.2, 1.0 / 3.0, 171.5),
        NewWorkout::cycling(Coordinates::new(-33.8688, 151.2093), 42.195, 97.3, -0.0001),
        NewWorkout::cycling(HERE, 1e-9, 1e9, 0.0),
    ]
    .into_iter()
    .map(|input| WorkoutRecord::create(input).unwrap())
    .collect();

    persistence.save(&records).await.unwrap();

    assert_eq!(persistence.load().await.unwrap(), records);
}
