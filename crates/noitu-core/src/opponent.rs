//! How the automated opponent picks its reply.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dictionary::Dictionary;
use crate::token::Token;

/// A policy for choosing the opponent's word.
pub trait OpponentStrategy: std::fmt::Debug {
    /// Human-readable name for this strategy.
    fn name(&self) -> &str;

    /// Pick a word starting with `start` that is not in `excluding`.
    /// Returns `None` when the dictionary has no such word.
    fn choose(
        &mut self,
        dictionary: &Dictionary,
        start: char,
        excluding: &BTreeSet<Token>,
    ) -> Option<Token>;
}

/// Uniform random choice among all valid candidates.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Use the given generator.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Seeded generator for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl OpponentStrategy for RandomOpponent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(
        &mut self,
        dictionary: &Dictionary,
        start: char,
        excluding: &BTreeSet<Token>,
    ) -> Option<Token> {
        let candidates = dictionary.candidates_starting_with(start, excluding);
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.random_range(0..candidates.len())].clone())
    }
}

/// Always the lexically first candidate. Deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticalOpponent;

impl OpponentStrategy for AlphabeticalOpponent {
    fn name(&self) -> &str {
        "alphabetical"
    }

    fn choose(
        &mut self,
        dictionary: &Dictionary,
        start: char,
        excluding: &BTreeSet<Token>,
    ) -> Option<Token> {
        dictionary
            .candidates_starting_with(start, excluding)
            .into_iter()
            .min()
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::normalize;

    fn dict() -> Dictionary {
        Dictionary::load(["anh", "ha", "an", "nam", "ao", "am"])
    }

    fn used(words: &[&str]) -> BTreeSet<Token> {
        words.iter().filter_map(|w| normalize(w)).collect()
    }

    #[test]
    fn random_picks_only_valid_candidates() {
        let d = dict();
        let mut opp = RandomOpponent::seeded(42);
        let excluding = used(&["anh"]);
        for _ in 0..200 {
            let w = opp.choose(&d, 'a', &excluding).unwrap();
            assert_eq!(w.first(), 'a');
            assert_ne!(w.as_str(), "anh");
        }
    }

    #[test]
    fn random_reaches_every_candidate() {
        let d = dict();
        let mut opp = RandomOpponent::seeded(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(opp.choose(&d, 'a', &BTreeSet::new()).unwrap());
        }
        assert_eq!(seen.len(), 4, "missing candidates: {seen:?}");
    }

    #[test]
    fn same_seed_same_choices() {
        let d = dict();
        let mut a = RandomOpponent::seeded(7);
        let mut b = RandomOpponent::seeded(7);
        for _ in 0..20 {
            assert_eq!(
                a.choose(&d, 'a', &BTreeSet::new()),
                b.choose(&d, 'a', &BTreeSet::new())
            );
        }
    }

    #[test]
    fn none_when_exhausted() {
        let d = dict();
        let mut opp = RandomOpponent::seeded(1);
        assert!(opp.choose(&d, 'a', &used(&["anh", "an", "ao", "am"])).is_none());
        assert!(opp.choose(&d, 'x', &BTreeSet::new()).is_none());
    }

    #[test]
    fn alphabetical_is_deterministic() {
        let d = dict();
        let mut opp = AlphabeticalOpponent;
        assert_eq!(opp.choose(&d, 'a', &BTreeSet::new()).unwrap().as_str(), "am");
        assert_eq!(opp.choose(&d, 'a', &used(&["am"])).unwrap().as_str(), "an");
        assert_eq!(opp.name(), "alphabetical");
    }
}
