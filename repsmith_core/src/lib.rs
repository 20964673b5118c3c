#![forbid(unsafe_code)]

//! Core domain model and program-assembly engine for repsmith.
//!
//! This crate provides:
//! - Domain types (targets, ranges, catalog entries, session rows)
//! - The built-in exercise catalog
//! - Target allocation across training days
//! - Exercise selection with fallback rules
//! - Progression functions and set splitting
//! - Program assembly and CSV/JSON export

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod allocator;
pub mod selector;
pub mod progression;
pub mod sets;
pub mod engine;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use allocator::{distribute_targets, DaySchedule};
pub use selector::{choose_exercise, select_exercises};
pub use progression::{adjust_reps, adjust_rpe, Progression};
pub use sets::split_sets;
pub use engine::generate_program;
pub use export::{write_csv, write_json};
