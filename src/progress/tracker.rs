//! Progress tracker owning the persisted learner state

use chrono::{Duration, NaiveDate, Utc};
use log::debug;

use super::models::ProgressState;
use crate::srs::{self, WordProgress};
use crate::storage::KvStorage;

/// Storage key holding the whole progress state
const PROGRESS_KEY: &str = "progress";

/// Single writer over a learner's progress
///
/// Loads the full state on construction and writes it back after every
/// mutation, which is the read-modify-write discipline the pure engine
/// expects from its caller. With several concurrent sessions on the same
/// storage the last writer wins; there is no conflict detection.
pub struct ProgressTracker {
    storage: KvStorage,
    state: ProgressState,
}

impl ProgressTracker {
    /// Load the tracker from storage, starting fresh if nothing was saved
    pub fn new(storage: KvStorage) -> Self {
        let state = storage.load(PROGRESS_KEY, ProgressState::default());
        Self { storage, state }
    }

    /// Current in-memory state
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Grade a word after review, creating its record on first contact
    ///
    /// Returns the stored result of the transition.
    pub fn grade(&mut self, word_key: &str, quality: i32) -> WordProgress {
        let now = Utc::now().timestamp_millis();
        let current = self
            .state
            .word_progress
            .get(word_key)
            .cloned()
            .unwrap_or_else(|| WordProgress::new(word_key, now));

        let updated = srs::grade_word(&current, quality, now);
        debug!(
            "graded '{}': quality={} score={} interval={}d",
            word_key, quality, updated.score, updated.interval
        );

        self.state
            .word_progress
            .insert(word_key.to_string(), updated.clone());
        self.persist();
        updated
    }

    /// Grade a word from one of the four review buttons
    pub fn grade_rated(&mut self, word_key: &str, rating: srs::ReviewRating) -> WordProgress {
        self.grade(word_key, rating.quality())
    }

    /// Add earned XP
    pub fn add_xp(&mut self, amount: u32) {
        self.state.xp = self.state.xp.saturating_add(amount);
        self.persist();
    }

    /// Words currently due for review, most overdue first
    pub fn due_words(&self) -> Vec<WordProgress> {
        srs::due_words(&self.state.word_progress, Utc::now().timestamp_millis())
    }

    /// Mastery percentage over a set of word keys
    pub fn mastery_percent(&self, keys: &[String]) -> u8 {
        srs::mastery_percent(keys, &self.state.word_progress)
    }

    /// Record a practice session, updating the daily streak
    pub fn record_practice(&mut self) {
        self.record_practice_on(Utc::now().date_naive());
    }

    fn record_practice_on(&mut self, today: NaiveDate) {
        let yesterday = (today - Duration::days(1)).format("%Y-%m-%d").to_string();
        let today = today.format("%Y-%m-%d").to_string();

        self.state.streak = if self.state.last_practice_date == yesterday {
            self.state.streak + 1
        } else if self.state.last_practice_date == today {
            self.state.streak
        } else {
            // Gap in practice (or first session ever): streak restarts
            1
        };
        self.state.last_practice_date = today;
        self.persist();
    }

    fn persist(&self) {
        self.storage.save(PROGRESS_KEY, &self.state);
    }
}
