//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for task and tag invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::tag::{Tag, TagParseError};
pub use model::task::{Task, TaskStatus};
pub use store::tag_registry::TagRegistry;
pub use store::task_collection::TaskCollection;
pub use store::task_store::{DataSnapshot, TaskStore};
pub use store::{StoreError, StoreResult};
pub use view::filter::{KeywordFilter, TaskFilter};
pub use view::view_model::{StoreListener, TaskViewModel};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
