//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskdeck_core::TaskStore;

fn main() {
    println!("taskdeck_core version={}", taskdeck_core::core_version());
    println!("taskdeck_core store={}", TaskStore::new());
}
