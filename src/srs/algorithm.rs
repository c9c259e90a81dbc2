//! SM-2 spaced repetition scheduling
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing the answer, remembered
//! - 2: Incorrect, but the answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation
//!
//! Grading drives two independent signals from the same quality input:
//! the interval/ease pair that schedules the next review, and a coarser
//! 0-5 mastery score used for progress reporting. The thresholds differ
//! on purpose (interval resets below 3, mastery climbs only from 4).

use std::collections::HashMap;

use chrono::Utc;

use super::models::{WordProgress, MIN_EASE_FACTOR, MS_PER_DAY};

/// Grade a word after one review
///
/// `quality` is clamped into 0-5 rather than rejected, and `now` is the
/// wall clock in ms since the epoch. Returns a whole new `WordProgress`;
/// the input is never mutated and the caller persists the result.
pub fn grade_word(progress: &WordProgress, quality: i32, now: i64) -> WordProgress {
    let q = quality.clamp(0, 5);

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored at 1.3
    let missed = (5 - q) as f64;
    let ease_factor =
        (progress.ease_factor + (0.1 - missed * (0.08 + missed * 0.02))).max(MIN_EASE_FACTOR);

    let interval = if q < 3 {
        // Failed: reset to the beginning
        0
    } else if progress.interval == 0 {
        1
    } else if progress.interval == 1 {
        6
    } else {
        (progress.interval as f64 * ease_factor).round() as u32
    };

    // Mastery score moves on coarser thresholds than the interval
    let score = if q >= 4 {
        progress.score.saturating_add(1).min(5)
    } else if q < 3 {
        progress.score.saturating_sub(1)
    } else {
        progress.score
    };

    WordProgress {
        key: progress.key.clone(),
        score,
        interval,
        next_review: now + interval as i64 * MS_PER_DAY,
        ease_factor,
        review_count: progress.review_count + 1,
    }
}

/// Grade a word against the current wall clock
pub fn grade_word_now(progress: &WordProgress, quality: i32) -> WordProgress {
    grade_word(progress, quality, Utc::now().timestamp_millis())
}

/// All words due at `now`, most overdue first
///
/// The sort is stable, so entries sharing a due timestamp keep their
/// iteration order within a single call.
pub fn due_words(progress_map: &HashMap<String, WordProgress>, now: i64) -> Vec<WordProgress> {
    let mut due: Vec<WordProgress> = progress_map
        .values()
        .filter(|p| p.is_due(now))
        .cloned()
        .collect();
    due.sort_by_key(|p| p.next_review);
    due
}

/// All words due right now on the wall clock
pub fn due_words_now(progress_map: &HashMap<String, WordProgress>) -> Vec<WordProgress> {
    due_words(progress_map, Utc::now().timestamp_millis())
}

/// Mastery percentage (0-100) for a set of word keys
///
/// Keys without a progress record count as never reviewed. An empty key
/// list yields 0 by policy, so callers need no division guard of their own.
pub fn mastery_percent(keys: &[String], progress_map: &HashMap<String, WordProgress>) -> u8 {
    if keys.is_empty() {
        return 0;
    }

    let total: u32 = keys
        .iter()
        .map(|key| progress_map.get(key).map_or(0, |p| u32::from(p.score)))
        .sum();

    ((total as f64 / (keys.len() as f64 * 5.0)) * 100.0).round() as u8
}
