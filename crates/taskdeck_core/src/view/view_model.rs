//! Task view model.
//!
//! # Responsibility
//! - Serialize every data mutation through the owned task store.
//! - Maintain the active filter predicate and the derived projection.
//! - Notify subscribed listeners after each successful mutation.
//!
//! # Invariants
//! - A failed mutation raises no change notification.
//! - Positional updates address the filtered projection; the index is
//!   translated to the backing sequence before delegation.
//! - Replacing the filter recomputes the projection but is not a data
//!   change and stays silent.

use crate::model::tag::Tag;
use crate::model::task::Task;
use crate::store::task_store::{DataSnapshot, TaskStore};
use crate::store::{StoreError, StoreResult};
use crate::view::filter::{KeywordFilter, TaskFilter};
use log::debug;

/// Subscriber to "store changed" notifications.
///
/// Notifications are fire-and-forget: the view model does not interpret
/// listener behavior, and the payload is the fresh post-mutation snapshot.
pub trait StoreListener {
    fn store_changed(&mut self, snapshot: &DataSnapshot);
}

impl<F> StoreListener for F
where
    F: FnMut(&DataSnapshot),
{
    fn store_changed(&mut self, snapshot: &DataSnapshot) {
        self(snapshot)
    }
}

/// Presentation-facing facade over one task store.
///
/// Holds the single active filter predicate; `None` accepts every task.
pub struct TaskViewModel {
    store: TaskStore,
    filter: Option<Box<dyn TaskFilter>>,
    listeners: Vec<Box<dyn StoreListener>>,
}

impl TaskViewModel {
    /// Creates a view model over an empty store, showing all tasks.
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
            filter: None,
            listeners: Vec::new(),
        }
    }

    /// Creates a view model populated from a snapshot.
    ///
    /// # Errors
    /// - `DuplicateTask` / `DuplicateTag` when the snapshot violates
    ///   uniqueness.
    pub fn from_snapshot(snapshot: &DataSnapshot) -> StoreResult<Self> {
        let mut model = Self::new();
        model.store.reset_data(snapshot)?;
        Ok(model)
    }

    /// Returns the backing store for read-only inspection.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Registers a listener for "store changed" notifications.
    pub fn subscribe(&mut self, listener: Box<dyn StoreListener>) {
        self.listeners.push(listener);
    }

    /// Adds a task, resets the filter to show-all and notifies.
    ///
    /// # Errors
    /// - `DuplicateTask`; no notification is raised and the filter keeps
    ///   its current predicate.
    pub fn add_task(&mut self, task: Task) -> StoreResult<()> {
        self.store.add_task(task)?;
        self.filter = None;
        debug!(
            "event=task_added module=view status=ok tasks={}",
            self.store.task_list().len()
        );
        self.notify();
        Ok(())
    }

    /// Replaces the task at `filtered_index` of the projection.
    ///
    /// The index is translated to the corresponding backing-sequence
    /// position before delegating, since projection and backing sequence
    /// may disagree on ordinals once a filter is active.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `filtered_index` exceeds the projection.
    /// - `DuplicateTask` when `edited` equals another stored task.
    pub fn update_task(&mut self, filtered_index: usize, edited: &Task) -> StoreResult<()> {
        let backing_index = self.source_index(filtered_index)?;
        self.store.update_task(backing_index, edited)?;
        debug!("event=task_updated module=view status=ok index={backing_index}");
        self.notify();
        Ok(())
    }

    /// Removes the stored task equal to `task` and notifies.
    ///
    /// # Errors
    /// - `TaskNotFound`; no notification is raised.
    pub fn delete_task(&mut self, task: &Task) -> StoreResult<()> {
        self.store.remove_task(task)?;
        debug!(
            "event=task_removed module=view status=ok tasks={}",
            self.store.task_list().len()
        );
        self.notify();
        Ok(())
    }

    /// Registers a tag and notifies.
    ///
    /// # Errors
    /// - `DuplicateTag`; no notification is raised.
    pub fn add_tag(&mut self, tag: Tag) -> StoreResult<()> {
        self.store.add_tag(tag)?;
        self.notify();
        Ok(())
    }

    /// Replaces all data from a snapshot and notifies.
    ///
    /// # Errors
    /// - `DuplicateTask` / `DuplicateTag`; the store is unchanged and no
    ///   notification is raised.
    pub fn reset_data(&mut self, snapshot: &DataSnapshot) -> StoreResult<()> {
        self.store.reset_data(snapshot)?;
        debug!(
            "event=data_reset module=view status=ok tasks={} tags={}",
            self.store.task_list().len(),
            self.store.tag_list().len()
        );
        self.notify();
        Ok(())
    }

    /// Activates a keyword predicate over task descriptions.
    ///
    /// View-only change: the projection is recomputed on the next read and
    /// no notification is raised.
    pub fn update_filter<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_filter(Box::new(KeywordFilter::new(keywords)));
    }

    /// Replaces the active predicate. View-only change, no notification.
    pub fn set_filter(&mut self, filter: Box<dyn TaskFilter>) {
        self.filter = Some(filter);
    }

    /// Clears the predicate so every task is shown. No notification.
    pub fn show_all(&mut self) {
        self.filter = None;
    }

    /// Returns the filtered projection in backing-sequence order.
    ///
    /// The projection is recomputed against the live backing sequence on
    /// every call; it is not a snapshot.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.store
            .task_list()
            .iter()
            .filter(|task| self.accepts(task))
            .collect()
    }

    /// Translates a projection index to its backing-sequence index.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `filtered_index` is not addressed by the
    ///   current projection; `len` reports the projection's length.
    pub fn source_index(&self, filtered_index: usize) -> StoreResult<usize> {
        let mut seen = 0;
        for (backing_index, task) in self.store.task_list().iter().enumerate() {
            if self.accepts(task) {
                if seen == filtered_index {
                    return Ok(backing_index);
                }
                seen += 1;
            }
        }
        Err(StoreError::IndexOutOfRange {
            index: filtered_index,
            len: seen,
        })
    }

    fn accepts(&self, task: &Task) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter.matches(task))
    }

    fn notify(&mut self) {
        let snapshot = self.store.snapshot();
        for listener in &mut self.listeners {
            listener.store_changed(&snapshot);
        }
    }
}

impl Default for TaskViewModel {
    fn default() -> Self {
        Self::new()
    }
}
