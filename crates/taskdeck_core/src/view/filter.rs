//! Task filter predicates.
//!
//! # Responsibility
//! - Define the replaceable predicate seam used by the view model.
//! - Provide whole-word, case-insensitive keyword matching.
//!
//! # Invariants
//! - A keyword matches only as a complete word; partial-word hits are
//!   rejected.
//! - An empty keyword set accepts no task.

use crate::model::task::Task;
use regex::Regex;

/// Replaceable predicate deciding projection membership for one task.
pub trait TaskFilter {
    /// Returns whether `task` belongs in the filtered projection.
    fn matches(&self, task: &Task) -> bool;
}

/// Keyword predicate over task descriptions.
///
/// A task is included when its description contains at least one keyword
/// as a whole word, compared case-insensitively.
pub struct KeywordFilter {
    patterns: Vec<Regex>,
}

impl KeywordFilter {
    /// Compiles one word-boundary pattern per non-blank keyword.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = keywords
            .into_iter()
            .filter_map(|keyword| {
                let trimmed = keyword.as_ref().trim().to_string();
                if trimmed.is_empty() {
                    return None;
                }
                let pattern = format!(r"(?i)\b{}\b", regex::escape(&trimmed));
                Some(Regex::new(&pattern).expect("escaped keyword pattern is valid"))
            })
            .collect();
        Self { patterns }
    }
}

impl TaskFilter for KeywordFilter {
    fn matches(&self, task: &Task) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.is_match(&task.description))
    }
}
