//! Data models for learner progress

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::srs::WordProgress;

/// Everything persisted for one learner profile
///
/// All fields default when absent so payloads written by older versions
/// still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    /// SRS progress per word (keyed by hanzi)
    #[serde(default)]
    pub word_progress: HashMap<String, WordProgress>,
    /// Total XP earned
    #[serde(default)]
    pub xp: u32,
    /// Current daily streak
    #[serde(default)]
    pub streak: u32,
    /// Last practice date (YYYY-MM-DD), empty if never practiced
    #[serde(default)]
    pub last_practice_date: String,
}
