//! High score leaderboard
//!
//! Tracks the top 10 survival times for the lifetime of the process; nothing
//! is persisted across restarts.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Seconds survived
    pub seconds: u32,
    /// Difficulty reached when the run ended
    pub difficulty: f32,
    /// Timestamp (ms) when achieved
    pub timestamp_ms: u64,
}

/// High score leaderboard, sorted descending by seconds survived
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a survival time qualifies for the leaderboard
    pub fn qualifies(&self, seconds: u32) -> bool {
        if seconds == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries
            .last()
            .map(|e| seconds > e.seconds)
            .unwrap_or(true)
    }

    /// Get the rank a time would achieve (1-indexed, None if it doesn't
    /// qualify)
    pub fn potential_rank(&self, seconds: u32) -> Option<usize> {
        if !self.qualifies(seconds) {
            return None;
        }
        let rank = self.entries.iter().position(|e| seconds > e.seconds);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a run to the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(
        &mut self,
        seconds: u32,
        difficulty: f32,
        timestamp_ms: u64,
    ) -> Option<usize> {
        if !self.qualifies(seconds) {
            return None;
        }

        let entry = HighScoreEntry {
            seconds,
            difficulty,
            timestamp_ms,
        };

        let pos = self.entries.iter().position(|e| seconds > e.seconds);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best survival time (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.seconds)
    }
}
