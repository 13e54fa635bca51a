//! The word list the game is played against.
//!
//! A [`Dictionary`] is built once and never changes afterwards, so it can be
//! shared by every session. Words are stored as canonical tokens and indexed
//! by their first character for opponent lookups.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{NoituError, NoituResult};
use crate::token::{Token, normalize};

/// Words used when the supplied list yields nothing playable.
pub const FALLBACK_WORDS: &[&str] = &[
    "anh", "ha", "an", "nam", "mien", "noi", "im", "mai", "yeu", "uom", "meo", "ong", "gio",
];

/// An immutable set of canonical tokens.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: BTreeSet<Token>,
    by_initial: BTreeMap<char, Vec<Token>>,
    fallback: bool,
}

impl Dictionary {
    /// Build a dictionary from raw lines.
    ///
    /// Each line is normalized; lines that normalize to nothing are skipped.
    /// If nothing survives, a warning is logged and the built-in
    /// [`FALLBACK_WORDS`] are used instead.
    pub fn load<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dict = Self::from_words(lines);
        if dict.is_empty() {
            warn!(
                fallback_words = FALLBACK_WORDS.len(),
                "dictionary is empty, using built-in word list"
            );
            return Self::fallback();
        }
        debug!(words = dict.len(), "dictionary loaded");
        dict
    }

    /// Build a dictionary from raw lines without the empty-list fallback.
    pub fn from_words<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<Token> = lines
            .into_iter()
            .filter_map(|line| normalize(line.as_ref().trim()))
            .collect();

        let mut by_initial: BTreeMap<char, Vec<Token>> = BTreeMap::new();
        for word in &words {
            by_initial.entry(word.first()).or_default().push(word.clone());
        }

        Self {
            words,
            by_initial,
            fallback: false,
        }
    }

    /// The built-in minimal dictionary.
    pub fn fallback() -> Self {
        Self {
            fallback: true,
            ..Self::from_words(FALLBACK_WORDS)
        }
    }

    /// Parse line-delimited text (`\n` or `\r\n`).
    pub fn parse(text: &str) -> Self {
        Self::load(text.lines())
    }

    /// Read a UTF-8 word list from disk, one word or phrase per line.
    pub fn from_path(path: &Path) -> NoituResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| NoituError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Whether the built-in list was substituted for an empty one.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Whether the token (already canonical) is a dictionary word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// All words starting with `letter` that are not in `excluding`.
    ///
    /// Callers must not rely on the order of the result.
    pub fn candidates_starting_with(
        &self,
        letter: char,
        excluding: &BTreeSet<Token>,
    ) -> Vec<&Token> {
        self.by_initial
            .get(&letter)
            .map(|words| words.iter().filter(|w| !excluding.contains(*w)).collect())
            .unwrap_or_default()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(words: &[&str]) -> BTreeSet<Token> {
        words.iter().filter_map(|w| normalize(w)).collect()
    }

    #[test]
    fn load_normalizes_and_dedups() {
        let dict = Dictionary::load(["Anh", "anh", "ÁNH", "  hà ", "", "   "]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("anh"));
        assert!(dict.contains("ha"));
        assert!(!dict.is_fallback());
    }

    #[test]
    fn phrases_collapse_into_one_token() {
        let dict = Dictionary::load(["Hà Nội"]);
        assert!(dict.contains("hanoi"));
    }

    #[test]
    fn empty_input_falls_back() {
        let dict = Dictionary::load(["", "  ", "!!!"]);
        assert!(dict.is_fallback());
        assert_eq!(dict.len(), FALLBACK_WORDS.len());
        assert!(dict.contains("meo"));
    }

    #[test]
    fn from_words_does_not_fall_back() {
        let dict = Dictionary::from_words(Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(!dict.is_fallback());
    }

    #[test]
    fn parse_handles_crlf() {
        let dict = Dictionary::parse("anh\r\nha\r\n\r\nnam\n");
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("nam"));
    }

    #[test]
    fn candidates_filter_by_initial_and_exclusion() {
        let dict = Dictionary::load(["anh", "ha", "an", "nam"]);
        let used = set(&["anh", "ha"]);
        let found: Vec<&str> = dict
            .candidates_starting_with('a', &used)
            .into_iter()
            .map(Token::as_str)
            .collect();
        assert_eq!(found, vec!["an"]);
    }

    #[test]
    fn candidates_empty_for_unknown_letter() {
        let dict = Dictionary::load(["anh"]);
        assert!(dict.candidates_starting_with('z', &BTreeSet::new()).is_empty());
    }

    #[test]
    fn from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "mèo\nông\n").unwrap();
        let dict = Dictionary::from_path(&path).unwrap();
        assert!(dict.contains("meo"));
        assert!(dict.contains("ong"));
    }

    #[test]
    fn from_path_missing_file_is_error() {
        let err = Dictionary::from_path(Path::new("/nonexistent/noitu/words.txt")).unwrap_err();
        assert!(err.to_string().contains("cannot read dictionary"));
    }
}
