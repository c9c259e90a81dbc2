//! Spaced repetition system for vocabulary review
//!
//! This module provides:
//! - SM-2 grading of a single word's review history
//! - Due-word query over the full progress map
//! - Mastery percentage aggregation over word sets
//!
//! Everything here is pure computation over values. Callers own the
//! progress map and are responsible for persisting graded results.

pub mod algorithm;
pub mod models;

pub use algorithm::{due_words, due_words_now, grade_word, grade_word_now, mastery_percent};
pub use models::{ReviewRating, WordProgress};
