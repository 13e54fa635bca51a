//! The turn engine: rule checks, commits, and the opponent's reply.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::EngineConfig;
use crate::dictionary::Dictionary;
use crate::opponent::{OpponentStrategy, RandomOpponent};
use crate::session::{GameSession, LocationId, SessionRegistry, SpaceId};
use crate::token::{Token, normalize};

/// The result of one player submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The word was accepted and the opponent replied.
    Accepted {
        /// The opponent's word.
        reply: Token,
        /// The letter the player must use next.
        next_letter: char,
    },
    /// The word is not in the dictionary.
    NotInDictionary,
    /// The word was already played this game.
    AlreadyUsed,
    /// The word starts with the wrong letter.
    WrongStartLetter {
        /// The letter that was required.
        expected: char,
    },
    /// The opponent has no word left; the game is over.
    PlayerWins {
        /// The letter the opponent could not continue from.
        stuck_letter: char,
    },
}

impl MoveOutcome {
    /// Whether the submission changed the session.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Accepted { .. } | Self::PlayerWins { .. })
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { reply, next_letter } => {
                write!(f, "accepted ({reply}, next {next_letter})")
            }
            Self::NotInDictionary => write!(f, "not in dictionary"),
            Self::AlreadyUsed => write!(f, "already used"),
            Self::WrongStartLetter { expected } => {
                write!(f, "wrong start letter (expected {expected})")
            }
            Self::PlayerWins { stuck_letter } => write!(f, "player wins (stuck on {stuck_letter})"),
        }
    }
}

/// What a successful start produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Start {
    /// The canonical seed word, if one was given and usable.
    pub seed: Option<Token>,
    /// The letter the first player word must start with.
    pub required_letter: char,
}

/// Apply one move to a session.
///
/// All rule checks run before anything is written. On success the player
/// word is recorded, the opponent picks a reply from the updated exclusion
/// set, and either the reply is recorded or the game ends.
pub fn play_move(
    session: &mut GameSession,
    dictionary: &Dictionary,
    opponent: &mut dyn OpponentStrategy,
    token: Token,
) -> MoveOutcome {
    if !dictionary.contains(token.as_str()) {
        return MoveOutcome::NotInDictionary;
    }
    if session.used_words().contains(&token) {
        return MoveOutcome::AlreadyUsed;
    }
    if let Some(expected) = session.required_letter()
        && token.first() != expected
    {
        return MoveOutcome::WrongStartLetter { expected };
    }

    let next_start = token.last();
    session.mark_used(token);

    match opponent.choose(dictionary, next_start, session.used_words()) {
        None => {
            session.finish();
            MoveOutcome::PlayerWins {
                stuck_letter: next_start,
            }
        }
        Some(reply) => {
            let next_letter = reply.last();
            session.mark_used(reply.clone());
            session.require(next_letter);
            MoveOutcome::Accepted { reply, next_letter }
        }
    }
}

/// Owns the dictionary, the sessions, and the opponent.
#[derive(Debug)]
pub struct TurnEngine {
    dictionary: Dictionary,
    sessions: SessionRegistry,
    opponent: Box<dyn OpponentStrategy>,
    start_letters: Vec<char>,
    rng: StdRng,
}

impl TurnEngine {
    /// Create an engine with a [`RandomOpponent`].
    ///
    /// With a seed, the opponent and the start-letter draw are both
    /// reproducible.
    pub fn new(dictionary: Dictionary, config: EngineConfig) -> Self {
        let (rng, opponent) = match config.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                RandomOpponent::seeded(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), RandomOpponent::from_os_rng()),
        };
        Self {
            dictionary,
            sessions: SessionRegistry::new(),
            opponent: Box::new(opponent),
            start_letters: config.start_letters,
            rng,
        }
    }

    /// Replace the opponent strategy.
    pub fn with_opponent(mut self, opponent: impl OpponentStrategy + 'static) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    /// The dictionary in use.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The opponent strategy in use.
    pub fn opponent(&self) -> &dyn OpponentStrategy {
        self.opponent.as_ref()
    }

    /// The session for `space`, if one exists.
    pub fn session(&self, space: &SpaceId) -> Option<&GameSession> {
        self.sessions.get(space)
    }

    /// The session for `space`, created inactive if needed.
    pub fn ensure(&mut self, space: &SpaceId) -> &mut GameSession {
        self.sessions.ensure(space)
    }

    /// Pin the play-space's session to `location`.
    pub fn bind(&mut self, space: &SpaceId, location: LocationId) {
        info!(%space, %location, "session bound");
        self.sessions.ensure(space).bind_location(location);
    }

    /// Start a new game in `space`.
    ///
    /// An unbound session is bound to `location` first.
    pub fn start(&mut self, space: &SpaceId, location: &LocationId, seed: Option<&str>) -> Start {
        let session = self.sessions.ensure(space);
        if session.bound_location().is_none() {
            session.bind_location(location.clone());
        }
        let required_letter = session.reset(seed, &self.start_letters, &mut self.rng);
        let seed = seed.and_then(normalize);
        info!(%space, seed = ?seed.as_ref().map(Token::as_str), %required_letter, "game started");
        Start {
            seed,
            required_letter,
        }
    }

    /// End the game in `space`, if any.
    pub fn end(&mut self, space: &SpaceId) {
        if let Some(session) = self.sessions.get_mut(space) {
            session.deactivate();
            info!(%space, "game ended");
        }
    }

    /// Submit a gameplay line from `location` in `space`.
    ///
    /// Returns `None`, leaving everything untouched, when the input does not
    /// apply: no session, wrong location, no game running, or no token.
    #[instrument(skip(self))]
    pub fn submit(
        &mut self,
        space: &SpaceId,
        location: &LocationId,
        raw: &str,
    ) -> Option<MoveOutcome> {
        let session = self.sessions.get_mut(space)?;
        if !session.accepts_from(location) || !session.is_active() {
            return None;
        }
        let token = normalize(raw)?;

        let outcome = play_move(session, &self.dictionary, self.opponent.as_mut(), token);
        debug!(%outcome, used = session.used_words().len(), "move evaluated");
        Some(outcome)
    }
}
