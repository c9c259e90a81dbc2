//! Data models for the spaced repetition system

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Ease factor assigned to a word never reviewed
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Milliseconds in a 24h day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Spaced repetition state for a single word
///
/// Created lazily the first time a word is graded and updated only by
/// grading, always as a whole new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgress {
    /// Character or word key
    pub key: String,
    /// Mastery score 0-5
    #[serde(default)]
    pub score: u8,
    /// Days until next review
    #[serde(default)]
    pub interval: u32,
    /// When the word is next due, in ms since the epoch
    pub next_review: i64,
    /// SM-2 ease factor (default 2.5)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    /// Total times reviewed
    #[serde(default)]
    pub review_count: u32,
}

fn default_ease_factor() -> f64 {
    DEFAULT_EASE_FACTOR
}

impl WordProgress {
    /// Initial progress for a word, due at `now`
    pub fn new(key: impl Into<String>, now: i64) -> Self {
        Self {
            key: key.into(),
            score: 0,
            interval: 0,
            next_review: now,
            ease_factor: DEFAULT_EASE_FACTOR,
            review_count: 0,
        }
    }

    /// Initial progress due immediately on the wall clock
    pub fn new_now(key: impl Into<String>) -> Self {
        Self::new(key, Utc::now().timestamp_millis())
    }

    /// Check if the word is due for review at `now`
    pub fn is_due(&self, now: i64) -> bool {
        self.next_review <= now
    }
}

/// The four grade buttons shown after a review, with their fixed qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewRating {
    /// Failed recall, show again soon
    Again,
    /// Recalled with serious difficulty
    Hard,
    /// Recalled after some hesitation
    Good,
    /// Instant recall
    Easy,
}

impl ReviewRating {
    /// SM-2 quality submitted for this rating
    pub fn quality(self) -> i32 {
        match self {
            ReviewRating::Again => 1,
            ReviewRating::Hard => 3,
            ReviewRating::Good => 4,
            ReviewRating::Easy => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress_defaults() {
        let progress = WordProgress::new("你好", 1_000);

        assert_eq!(progress.key, "你好");
        assert_eq!(progress.score, 0);
        assert_eq!(progress.interval, 0);
        assert_eq!(progress.next_review, 1_000);
        assert_eq!(progress.ease_factor, DEFAULT_EASE_FACTOR);
        assert_eq!(progress.review_count, 0);
        assert!(progress.is_due(1_000));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let progress = WordProgress::new("水", 1_700_000_000_000);
        let json = serde_json::to_value(&progress).unwrap();

        assert_eq!(json["key"], "水");
        assert_eq!(json["score"], 0);
        assert_eq!(json["interval"], 0);
        assert_eq!(json["nextReview"], 1_700_000_000_000_i64);
        assert_eq!(json["easeFactor"], 2.5);
        assert_eq!(json["reviewCount"], 0);
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        // Older payloads carried only the key and due timestamp
        let progress: WordProgress =
            serde_json::from_str(r#"{"key":"马","nextReview":42}"#).unwrap();

        assert_eq!(progress.key, "马");
        assert_eq!(progress.next_review, 42);
        assert_eq!(progress.score, 0);
        assert_eq!(progress.interval, 0);
        assert_eq!(progress.ease_factor, DEFAULT_EASE_FACTOR);
        assert_eq!(progress.review_count, 0);
    }

    #[test]
    fn test_rating_qualities() {
        assert_eq!(ReviewRating::Again.quality(), 1);
        assert_eq!(ReviewRating::Hard.quality(), 3);
        assert_eq!(ReviewRating::Good.quality(), 4);
        assert_eq!(ReviewRating::Easy.quality(), 5);
    }
}
