//! Core engine for Noitu, a word-chain game.
//!
//! Players and an automated opponent take turns supplying dictionary words.
//! Every word must start with the last letter of the previous one and may
//! only be played once per game. This crate holds the rules; receiving
//! messages and rendering replies is left to the caller (see `noitu-cli`).

/// Engine configuration.
pub mod config;
/// The immutable word list.
pub mod dictionary;
/// The turn engine and move outcomes.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// Opponent word-selection strategies.
pub mod opponent;
/// Per play-space game state and the session registry.
pub mod session;
/// Text normalization into canonical tokens.
pub mod token;

pub use config::EngineConfig;
pub use dictionary::Dictionary;
pub use engine::{MoveOutcome, Start, TurnEngine, play_move};
pub use error::{NoituError, NoituResult};
pub use opponent::{AlphabeticalOpponent, OpponentStrategy, RandomOpponent};
pub use session::{GameSession, LocationId, SessionRegistry, SpaceId};
pub use token::{Token, normalize};
