//! Canonical word tokens.
//!
//! Every comparison in the game happens on canonical tokens: the input is
//! decomposed (NFD), combining marks are dropped, the result is lowercased,
//! and everything outside `[a-z0-9]` is removed. `"Hà Nội"` and `"ha noi"`
//! both become `"hanoi"`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::NoituError;

/// A non-empty string over `[a-z0-9]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

/// Canonicalize arbitrary text. Returns `None` when nothing is left.
pub fn normalize(text: &str) -> Option<Token> {
    let canonical: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if canonical.is_empty() {
        None
    } else {
        Some(Token(canonical))
    }
}

impl Token {
    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first character of the token.
    pub fn first(&self) -> char {
        char::from(self.0.as_bytes()[0])
    }

    /// The last character of the token.
    pub fn last(&self) -> char {
        char::from(self.0.as_bytes()[self.0.len() - 1])
    }

    /// Number of characters in the token.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Token {
    type Error = NoituError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match normalize(&value) {
            Some(token) if token.0 == value => Ok(token),
            _ => Err(NoituError::NotCanonical(value)),
        }
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
