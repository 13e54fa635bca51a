//! Configuration for a turn engine.

use std::collections::BTreeSet;

/// Letters a game may start on when no seed word is given.
pub const DEFAULT_START_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Configuration for a [`TurnEngine`](crate::TurnEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible games. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Candidate letters for an unseeded start.
    pub start_letters: Vec<char>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_letters: DEFAULT_START_LETTERS.chars().collect(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the start alphabet. Only lowercase ASCII letters and digits are
    /// kept, each once; an empty result restores the default alphabet.
    pub fn with_start_letters(mut self, letters: &str) -> Self {
        let kept: BTreeSet<char> = letters
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();
        self.start_letters = if kept.is_empty() {
            DEFAULT_START_LETTERS.chars().collect()
        } else {
            kept.into_iter().collect()
        };
        self
    }
}
