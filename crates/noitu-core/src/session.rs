//! Per play-space game state.
//!
//! A play-space (a chat server, say) owns at most one [`GameSession`]. The
//! session is pinned to one location (a channel) inside that space, and
//! gameplay input from anywhere else is ignored.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::token::{Token, normalize};

/// Identifier of a play-space. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub String);

/// Identifier of a location inside a play-space. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub String);

impl From<&str> for SpaceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Game state for one play-space.
///
/// A session with no required letter is inactive: no game is running.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSession {
    bound_location: Option<LocationId>,
    required_letter: Option<char>,
    used_words: BTreeSet<Token>,
}

impl GameSession {
    /// Create an inactive, unbound session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The location gameplay is accepted from, if any.
    pub fn bound_location(&self) -> Option<&LocationId> {
        self.bound_location.as_ref()
    }

    /// The letter the next word must start with; `None` when inactive.
    pub fn required_letter(&self) -> Option<char> {
        self.required_letter
    }

    /// Words already played in the current game, by either side.
    pub fn used_words(&self) -> &BTreeSet<Token> {
        &self.used_words
    }

    /// Whether a game is in progress.
    pub fn is_active(&self) -> bool {
        self.required_letter.is_some()
    }

    /// Whether gameplay input from `location` should be processed.
    pub fn accepts_from(&self, location: &LocationId) -> bool {
        self.bound_location.as_ref() == Some(location)
    }

    /// Pin the session to a location.
    pub fn bind_location(&mut self, location: LocationId) {
        self.bound_location = Some(location);
    }

    /// Start a fresh game and return the required letter.
    ///
    /// A seed that canonicalizes to a token counts as already played and
    /// sets the letter to its last character. Otherwise the letter is drawn
    /// uniformly from `start_letters` (`'a'` if that is empty).
    pub fn reset<R: Rng>(
        &mut self,
        seed: Option<&str>,
        start_letters: &[char],
        rng: &mut R,
    ) -> char {
        self.used_words.clear();

        let letter = match seed.and_then(normalize) {
            Some(token) => {
                let letter = token.last();
                self.used_words.insert(token);
                letter
            }
            None if start_letters.is_empty() => 'a',
            None => start_letters[rng.random_range(0..start_letters.len())],
        };

        self.required_letter = Some(letter);
        letter
    }

    /// End the current game.
    pub fn deactivate(&mut self) {
        self.required_letter = None;
        self.used_words.clear();
    }

    /// Stop the game but keep the word history until the next reset.
    pub(crate) fn finish(&mut self) {
        self.required_letter = None;
    }

    /// Record a token as played.
    pub(crate) fn mark_used(&mut self, token: Token) {
        self.used_words.insert(token);
    }

    /// Set the letter the next word must start with.
    pub(crate) fn require(&mut self, letter: char) {
        self.required_letter = Some(letter);
    }
}

/// All sessions, keyed by play-space.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SpaceId, GameSession>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session for `space`, creating an inactive one if needed.
    pub fn ensure(&mut self, space: &SpaceId) -> &mut GameSession {
        self.sessions.entry(space.clone()).or_default()
    }

    /// Get the session for `space` if one exists.
    pub fn get(&self, space: &SpaceId) -> Option<&GameSession> {
        self.sessions.get(space)
    }

    /// Get the session for `space` mutably if one exists.
    pub fn get_mut(&mut self, space: &SpaceId) -> Option<&mut GameSession> {
        self.sessions.get_mut(space)
    }

    /// Number of known play-spaces.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session has been created yet.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
