//! Learner progress tracking
//!
//! This module provides:
//! - The persisted progress state: the SRS map plus XP and daily streak
//! - `ProgressTracker`, the single writer that loads the state, applies
//!   pure SRS transitions, and writes the full state back after every
//!   mutation

pub mod models;
pub mod tracker;

pub use models::ProgressState;
pub use tracker::ProgressTracker;
