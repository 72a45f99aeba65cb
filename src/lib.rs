//! Orbit - a personal life-management core
//!
//! This crate provides the full domain layer behind a personal dashboard:
//! tasks, habits, finance tracking, fitness logging and notes, all scoped to
//! a signed-in user, plus the derived-statistics engines (category and
//! monthly aggregation, streak tracking, activity heatmaps, budget and goal
//! progress) that the dashboard, habits and finance views are built from.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Application clock - calendar days in the fixed app time zone
pub mod clock;
/// Configuration management for database and identity settings
pub mod config;
/// Core business logic - feature operations and statistics engines
pub mod core;
/// SeaORM entity definitions for the records store
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Explicit identity session with a change stream
pub mod session;
/// Generic owner-scoped records-store operations
pub mod store;

#[cfg(test)]
pub mod test_utils;
