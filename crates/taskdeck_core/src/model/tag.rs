//! Tag value type.
//!
//! # Responsibility
//! - Represent one immutable, validated tag name.
//! - Reject malformed names at the construction boundary.
//!
//! # Invariants
//! - The stored name is trimmed, non-empty and alphanumeric.
//! - Two tags compare equal exactly when their names compare equal.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag name regex"));

/// Error raised when tag construction rejects the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagParseError {
    /// Input was empty or whitespace-only.
    EmptyName,
    /// Input contains characters outside the alphanumeric set.
    InvalidName(String),
}

impl Display for TagParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "tag name cannot be empty"),
            Self::InvalidName(name) => {
                write!(f, "tag name must be alphanumeric, got `{name}`")
            }
        }
    }
}

impl Error for TagParseError {}

/// Immutable tag value compared purely by name equality.
///
/// The registry deduplicates tags by this equality; no separate identity
/// exists beyond the validated name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Parses a tag from raw input text.
    ///
    /// The input is trimmed before validation; case is preserved.
    ///
    /// # Errors
    /// - `EmptyName` when the trimmed input is empty.
    /// - `InvalidName` when the trimmed input is not purely alphanumeric.
    pub fn new(name: impl Into<String>) -> Result<Self, TagParseError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TagParseError::EmptyName);
        }
        if !TAG_NAME_RE.is_match(trimmed) {
            return Err(TagParseError::InvalidName(trimmed.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Returns the validated tag name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Tag {
    type Error = TagParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.name
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, TagParseError};

    #[test]
    fn new_trims_and_keeps_case() {
        let tag = Tag::new("  Urgent2  ").expect("alphanumeric name should parse");
        assert_eq!(tag.name(), "Urgent2");
    }

    #[test]
    fn new_rejects_empty_and_whitespace_input() {
        assert_eq!(Tag::new("").unwrap_err(), TagParseError::EmptyName);
        assert_eq!(Tag::new("   ").unwrap_err(), TagParseError::EmptyName);
    }

    #[test]
    fn new_rejects_non_alphanumeric_input() {
        let err = Tag::new("work!").unwrap_err();
        assert_eq!(err, TagParseError::InvalidName("work!".to_string()));
    }
}
