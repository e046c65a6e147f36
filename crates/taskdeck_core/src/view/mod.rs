//! Presentation-facing view layer.
//!
//! # Responsibility
//! - Expose a live-filterable, read-only projection of the stored tasks.
//! - Publish change notifications after successful data mutations.
//!
//! # Invariants
//! - The projection is derived on demand from the backing sequence; it is
//!   never independently mutated.
//! - Filter changes are view-only and never raise a change notification.

pub mod filter;
pub mod view_model;
