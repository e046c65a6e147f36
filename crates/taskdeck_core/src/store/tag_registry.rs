//! Unique tag registry.
//!
//! # Responsibility
//! - Hold the single source of truth for tag values known to the store.
//! - Enforce that no two members compare equal.
//!
//! # Invariants
//! - Iteration order is insertion order; equality of two registries may
//!   ignore it (`eq_order_insensitive`).
//! - `merge_from` only ever grows the member set.

use crate::model::tag::Tag;
use crate::store::{StoreError, StoreResult};

/// Append/merge-only set of unique tag values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a tag list, validating uniqueness up front.
    ///
    /// # Errors
    /// - `DuplicateTag` when the input contains two equal tags. Nothing is
    ///   constructed in that case.
    pub fn from_tags(tags: Vec<Tag>) -> StoreResult<Self> {
        for (index, tag) in tags.iter().enumerate() {
            if tags[..index].contains(tag) {
                return Err(StoreError::DuplicateTag);
            }
        }
        Ok(Self { tags })
    }

    /// Adds a tag to the registry.
    ///
    /// # Errors
    /// - `DuplicateTag` when an equal tag is already a member.
    pub fn add(&mut self, tag: Tag) -> StoreResult<()> {
        if self.contains(&tag) {
            return Err(StoreError::DuplicateTag);
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Inserts every tag not already present, preserving encounter order.
    ///
    /// Existing members are never removed or reordered; duplicates in the
    /// input are silently skipped.
    pub fn merge_from(&mut self, tags: impl IntoIterator<Item = Tag>) {
        for tag in tags {
            if !self.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Atomically replaces the full member set.
    ///
    /// # Errors
    /// - `DuplicateTag` when the input contains two equal tags. The current
    ///   members are left untouched in that case.
    pub fn replace_all(&mut self, tags: Vec<Tag>) -> StoreResult<()> {
        *self = Self::from_tags(tags)?;
        Ok(())
    }

    /// Returns whether an equal tag is a member.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Returns the members as an ordered slice.
    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Compares two registries ignoring member order.
    pub fn eq_order_insensitive(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|tag| other.contains(tag))
    }
}

impl<'a> IntoIterator for &'a TagRegistry {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
