//! Error types for the word-chain engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for engine operations.
pub type NoituResult<T> = Result<T, NoituError>;

/// Errors that can occur outside normal play.
///
/// Rule violations during a game are not errors; they are reported as
/// [`MoveOutcome`](crate::MoveOutcome) variants.
#[derive(Debug, Error)]
pub enum NoituError {
    /// The dictionary file could not be read.
    #[error("cannot read dictionary {}: {source}", path.display())]
    DictionaryRead {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// A string that should already be canonical is not.
    #[error("not a canonical token: \"{0}\"")]
    NotCanonical(String),
}
