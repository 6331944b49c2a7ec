//! The workout collection and its edit state machine.
//!
//! `WorkoutStore` owns every record. Records are appended by [`WorkoutStore::create`],
//! changed only by [`WorkoutStore::commit_edit`] while they are the pending edit,
//! and removed by [`WorkoutStore::delete`] or [`WorkoutStore::reset`]. Each mutation
//! writes the full collection through the [`PersistenceAdapter`] before returning
//! and then notifies the registered [`WorkoutObserver`]s.
//!
//! A failed write does not undo the in-memory change. The error is still returned
//! so the caller can warn that the change may not survive a reload.

use crate::{
    errors::WorkoutError,
    models::{NewWorkout, WorkoutEdit, WorkoutId, WorkoutRecord},
    persistence::PersistenceAdapter,
};

/// Receives collection changes, e.g. to redraw a list or map markers.
pub trait WorkoutObserver: Send + Sync {
    fn on_record_added(&self, _record: &WorkoutRecord) {}

    fn on_record_updated(&self, _record: &WorkoutRecord) {}

    fn on_record_removed(&self, _id: &WorkoutId) {}

    fn on_collection_reset(&self) {}
}

/// Logs every collection change.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl WorkoutObserver for TracingObserver {
    fn on_record_added(&self, record: &WorkoutRecord) {
        tracing::info!(id = %record.id(), kind = %record.kind(), "Workout added: {}", record.label());
    }

    fn on_record_updated(&self, record: &WorkoutRecord) {
        tracing::info!(id = %record.id(), "Workout updated: {}", record.label());
    }

    fn on_record_removed(&self, id: &WorkoutId) {
        tracing::info!(%id, "Workout removed");
    }

    fn on_collection_reset(&self) {
        tracing::info!("All workouts removed");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(WorkoutId),
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    pub fn pending_id(&self) -> Option<&WorkoutId> {
        match self {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }
}

pub struct WorkoutStore {
    records: Vec<WorkoutRecord>,
    edit: EditState,
    persistence: Box<dyn PersistenceAdapter>,
    observers: Vec<Box<dyn WorkoutObserver>>,
}

impl WorkoutStore {
    /// Creates a store and loads whatever the adapter has persisted.
    pub async fn open(persistence: impl PersistenceAdapter + 'static) -> Result<Self, WorkoutError> {
        let mut store = Self {
            records: Vec::new(),
            edit: EditState::Idle,
            persistence: Box::new(persistence),
            observers: Vec::new(),
        };
        store.load().await?;
        Ok(store)
    }

    pub fn with_observer(mut self, observer: impl WorkoutObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn add_observer(&mut self, observer: impl WorkoutObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the collection with the persisted one, without re-validating.
    pub async fn load(&mut self) -> Result<(), WorkoutError> {
        self.records = self.persistence.load().await?;
        self.edit = EditState::Idle;
        Ok(())
    }

    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &WorkoutId) -> Option<&WorkoutRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// The record currently being edited.
    pub fn pending_edit(&self) -> Option<&WorkoutRecord> {
        self.edit.pending_id().and_then(|id| self.get(id))
    }

    /// Validates and appends a new workout. A pending edit is left alone.
    pub async fn create(&mut self, input: NewWorkout) -> Result<WorkoutRecord, WorkoutError> {
        let mut record = WorkoutRecord::create(input)?;
        while self.position(record.id()).is_some() {
            record.regenerate_id();
        }

        self.records.push(record.clone());
        let saved = self.persist().await;
        self.notify(|o| o.on_record_added(&record));
        saved?;
        Ok(record)
    }

    /// Marks `id` as the pending edit and returns its current values.
    ///
    /// Beginning a new edit while one is pending retargets it; there is never
    /// more than one.
    pub fn begin_edit(&mut self, id: &WorkoutId) -> Result<WorkoutRecord, WorkoutError> {
        let record = self
            .get(id)
            .cloned()
            .ok_or_else(|| WorkoutError::NotFound(id.clone()))?;

        if let EditState::Editing(previous) = &self.edit
            && previous != id
        {
            tracing::debug!(%previous, next = %id, "Replacing pending edit");
        }
        self.edit = EditState::Editing(id.clone());
        Ok(record)
    }

    /// Applies `edit` to the pending record.
    ///
    /// On a validation error the store stays in the editing state so the
    /// form can be corrected and resubmitted.
    pub async fn commit_edit(&mut self, edit: WorkoutEdit) -> Result<WorkoutRecord, WorkoutError> {
        let EditState::Editing(id) = &self.edit else {
            return Err(WorkoutError::NoPendingEdit);
        };
        let id = id.clone();

        let Some(index) = self.position(&id) else {
            tracing::warn!(%id, "Pending edit refers to a missing workout");
            self.edit = EditState::Idle;
            return Err(WorkoutError::NotFound(id));
        };

        self.records[index].apply_edit(edit)?;
        self.edit = EditState::Idle;

        let record = self.records[index].clone();
        let saved = self.persist().await;
        self.notify(|o| o.on_record_updated(&record));
        saved?;
        Ok(record)
    }

    /// Drops the pending edit without touching any record. Returns the id
    /// that was being edited.
    pub fn cancel_edit(&mut self) -> Option<WorkoutId> {
        match std::mem::take(&mut self.edit) {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }

    /// Removes a workout. Deleting an absent id is a no-op.
    ///
    /// Deleting the pending edit's record also ends the edit.
    pub async fn delete(&mut self, id: &WorkoutId) -> Result<Option<WorkoutRecord>, WorkoutError> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "Delete of unknown workout ignored");
            return Ok(None);
        };

        let removed = self.records.remove(index);
        if self.edit.pending_id() == Some(id) {
            self.edit = EditState::Idle;
        }

        let saved = self.persist().await;
        self.notify(|o| o.on_record_removed(id));
        saved?;
        Ok(Some(removed))
    }

    /// Removes every workout and erases the persisted key.
    pub async fn reset(&mut self) -> Result<(), WorkoutError> {
        self.records.clear();
        self.edit = EditState::Idle;

        let cleared = self.persistence.clear().await;
        self.notify(|o| o.on_collection_reset());
        cleared
    }

    fn position(&self, id: &WorkoutId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    async fn persist(&self) -> Result<(), WorkoutError> {
        let result = self.persistence.save(&self.records).await;
        if let Err(e) = &result {
            tracing::error!("Failed to persist workouts: {e}");
        }
        result
    }

    fn notify(&self, event: impl Fn(&dyn WorkoutObserver)) {
        for observer in &self.observers {
            event(observer.as_ref());
        }
    }
}
