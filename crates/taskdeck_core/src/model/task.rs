//! Task record.
//!
//! # Responsibility
//! - Define the mutable work item managed by the store.
//! - Provide lifecycle helpers for completion state.
//!
//! # Invariants
//! - Duplicate detection uses full value equality over all fields.
//! - The tag set is order-insensitive for equality and deterministic for
//!   iteration.

use crate::model::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not finished.
    Todo,
    /// Completed.
    Done,
}

/// A work item with a description, completion state and a set of tags.
///
/// After any store-level mutation the tag set is guaranteed to be mirrored
/// in the owning store's tag registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub status: TaskStatus,
    pub tags: BTreeSet<Tag>,
}

impl Task {
    /// Creates a pending task carrying the given tags.
    pub fn new(description: impl Into<String>, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            description: description.into(),
            status: TaskStatus::Todo,
            tags: tags.into_iter().collect(),
        }
    }

    /// Marks this task as completed.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Done;
    }

    /// Returns the task to the pending state.
    pub fn reopen(&mut self) {
        self.status = TaskStatus::Todo;
    }

    /// Returns whether the task is completed.
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)?;
        for tag in &self.tags {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}
