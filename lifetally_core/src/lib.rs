#![forbid(unsafe_code)]

//! Core domain model and calculation engine for Lifetally.
//!
//! This crate provides:
//! - Domain types (inputs, the LifeStats aggregate, submissions)
//! - Static reference tables and country-profile catalog
//! - The pure calculation engine and its sub-calculations
//! - Share-digest formatting
//! - Submission logging and CSV rollup

pub mod types;
pub mod error;
pub mod tables;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod elapsed;
pub mod lookup;
pub mod body;
pub mod cosmic;
pub mod consumption;
pub mod milestones;
pub mod engine;
pub mod summary;
pub mod submission;
pub mod csv_rollup;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_profiles, get_default_profiles, BASELINE_COUNTRY};
pub use config::Config;
pub use engine::compute_life_stats;
pub use submission::{JsonlSink, SubmissionSink};
pub use summary::share_summary;
