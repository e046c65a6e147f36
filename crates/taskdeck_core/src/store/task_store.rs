//! Aggregate task store.
//!
//! # Responsibility
//! - Own one unique task collection and one tag registry.
//! - Keep the registry synchronized with every stored task's tag set.
//! - Provide bulk replace from, and export to, read-only snapshots.
//!
//! # Invariants
//! - After any successful mutation, every tag carried by a stored task has
//!   an equal member in the registry.
//! - A failed `add_task`/`update_task` may still leave freshly merged tags
//!   in the registry; the task collection itself is never partially
//!   changed. This is documented, intentional behavior.

use crate::model::tag::Tag;
use crate::model::task::Task;
use crate::store::tag_registry::TagRegistry;
use crate::store::task_collection::TaskCollection;
use crate::store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Read-only exchange format for bulk load and persistence hand-off.
///
/// The store consumes a snapshot in [`TaskStore::reset_data`] and produces
/// one in [`TaskStore::snapshot`]; the encoding applied to it is the
/// persistence collaborator's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub tasks: Vec<Task>,
    pub tags: Vec<Tag>,
}

/// Aggregate root over the unique task collection and the tag registry.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: TaskCollection,
    tags: TagRegistry,
}

impl TaskStore {
    /// Creates a store with empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated from a snapshot.
    ///
    /// # Errors
    /// - `DuplicateTask` / `DuplicateTag` when the snapshot violates
    ///   uniqueness; see [`TaskStore::reset_data`].
    pub fn from_snapshot(snapshot: &DataSnapshot) -> StoreResult<Self> {
        let mut store = Self::new();
        store.reset_data(snapshot)?;
        Ok(store)
    }

    /// Adds a task, first merging its tags into the registry.
    ///
    /// When the add fails with `DuplicateTask` the tag merge has already
    /// happened, so the registry may keep tags referenced by no stored
    /// task. The task collection is unchanged on failure.
    ///
    /// # Errors
    /// - `DuplicateTask` when an equal task is already stored.
    pub fn add_task(&mut self, task: Task) -> StoreResult<()> {
        sync_registry_with(&mut self.tags, &task);
        self.tasks.add(task)
    }

    /// Replaces the task at `index` with a synced copy of `edited`.
    ///
    /// Shares the partial-failure caveat of [`TaskStore::add_task`]: tags
    /// of `edited` stay merged in the registry even when the positional
    /// update fails.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index` does not address a stored task.
    /// - `DuplicateTask` when `edited` equals another stored task.
    pub fn update_task(&mut self, index: usize, edited: &Task) -> StoreResult<()> {
        let copy = edited.clone();
        sync_registry_with(&mut self.tags, &copy);
        self.tasks.update_at(index, copy)
    }

    /// Removes the first stored task equal to `task`.
    ///
    /// # Errors
    /// - `TaskNotFound` when no stored task matches; the collection's size
    ///   and order are unchanged.
    pub fn remove_task(&mut self, task: &Task) -> StoreResult<()> {
        if self.tasks.remove(task) {
            Ok(())
        } else {
            Err(StoreError::TaskNotFound)
        }
    }

    /// Adds a tag directly to the registry.
    ///
    /// # Errors
    /// - `DuplicateTag` when an equal tag is already registered.
    pub fn add_tag(&mut self, tag: Tag) -> StoreResult<()> {
        self.tags.add(tag)
    }

    /// Replaces all tasks and tags from a snapshot.
    ///
    /// Both replacement lists are validated before either collection is
    /// touched, so a failure leaves the store exactly as it was. After a
    /// successful replace, the registry is re-synchronized with every
    /// loaded task, covering tasks whose tags are missing from the
    /// snapshot's own tag list.
    ///
    /// # Errors
    /// - `DuplicateTask` when the snapshot's task list contains two equal
    ///   tasks.
    /// - `DuplicateTag` when the snapshot's tag list contains two equal
    ///   tags.
    pub fn reset_data(&mut self, snapshot: &DataSnapshot) -> StoreResult<()> {
        let staged_tasks = TaskCollection::from_tasks(snapshot.tasks.clone())?;
        let staged_tags = TagRegistry::from_tags(snapshot.tags.clone())?;
        self.tasks = staged_tasks;
        self.tags = staged_tags;
        for task in self.tasks.iter() {
            sync_registry_with(&mut self.tags, task);
        }
        Ok(())
    }

    /// Returns the stored tasks in sequence order.
    pub fn task_list(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    /// Returns the registered tags in insertion order.
    pub fn tag_list(&self) -> &[Tag] {
        self.tags.as_slice()
    }

    /// Exports the current data as an owned snapshot.
    pub fn snapshot(&self) -> DataSnapshot {
        DataSnapshot {
            tasks: self.tasks.as_slice().to_vec(),
            tags: self.tags.as_slice().to_vec(),
        }
    }
}

/// Merges every tag carried by `task` into the registry.
///
/// Tags are plain values compared by equality, so pointing the task at
/// canonical registry instances is unnecessary: once merged, the registry
/// member and the task's tag are indistinguishable.
fn sync_registry_with(registry: &mut TagRegistry, task: &Task) {
    registry.merge_from(task.tags.iter().cloned());
}

impl PartialEq for TaskStore {
    fn eq(&self, other: &Self) -> bool {
        // Task order is significant; tag registration order is not.
        self.tasks == other.tasks && self.tags.eq_order_insensitive(&other.tags)
    }
}

impl Display for TaskStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} tasks, {} tags", self.tasks.len(), self.tags.len())
    }
}
