//! Word selection for a new round.
//!
//! The selector filters a dictionary down to a candidate pool and draws one
//! entry uniformly at random. It never fails: an empty pool degrades to
//! [`FALLBACK_WORD`].

use crate::debug_log;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Word used whenever no dictionary entry qualifies.
pub const FALLBACK_WORD: &str = "SNOWMAN";

pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
pub const DEFAULT_MAX_WORD_LENGTH: usize = 10;

/// Constraints applied to the dictionary before drawing a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPoolConfig {
    /// Inclusive lower bound on word length, in characters.
    pub min_length: usize,
    /// Inclusive upper bound on word length, in characters.
    pub max_length: usize,
    /// When false, entries starting with an uppercase letter are skipped.
    pub allow_proper_nouns: bool,
    /// Uppercased words already played in this group of rounds.
    excluded_words: HashSet<String>,
}

impl Default for WordPoolConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_WORD_LENGTH,
            max_length: DEFAULT_MAX_WORD_LENGTH,
            allow_proper_nouns: false,
            excluded_words: HashSet::new(),
        }
    }
}

impl WordPoolConfig {
    #[must_use]
    pub fn new(min_length: usize, max_length: usize, allow_proper_nouns: bool) -> Self {
        Self {
            min_length,
            max_length,
            allow_proper_nouns,
            excluded_words: HashSet::new(),
        }
    }

    /// Adds words to the exclusion set. Words are stored uppercased, the
    /// same form a session keeps its target in.
    #[must_use]
    pub fn with_excluded<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_uppercase()));
        self
    }

    /// Adds one word to the exclusion set, in any casing.
    pub fn exclude(&mut self, word: &str) {
        self.excluded_words.insert(word.trim().to_uppercase());
    }

    #[must_use]
    pub fn excluded_words(&self) -> &HashSet<String> {
        &self.excluded_words
    }

    #[must_use]
    pub fn is_excluded(&self, word: &str) -> bool {
        self.excluded_words.contains(&word.trim().to_uppercase())
    }

    fn accepts(&self, entry: &str) -> bool {
        if entry.is_empty() || !entry.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }

        let length = entry.chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        // Source casing decides what counts as a proper noun.
        if !self.allow_proper_nouns && entry.starts_with(char::is_uppercase) {
            return false;
        }

        !self.is_excluded(entry)
    }
}

/// Returns the dictionary entries eligible for selection, trimmed but in
/// their original casing.
pub fn candidate_pool<'a, S: AsRef<str>>(
    dictionary: &'a [S],
    config: &WordPoolConfig,
) -> Vec<&'a str> {
    dictionary
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| config.accepts(entry))
        .collect()
}

/// Draws a word with the thread-local generator.
pub fn select_word<S: AsRef<str>>(dictionary: &[S], config: &WordPoolConfig) -> String {
    select_word_with(dictionary, config, &mut rand::thread_rng())
}

/// Draws a word uniformly from the candidate pool using `rng`. The result is
/// always uppercase.
pub fn select_word_with<S, R>(dictionary: &[S], config: &WordPoolConfig, rng: &mut R) -> String
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let pool = candidate_pool(dictionary, config);
    debug_log!(
        "select_word() - {} of {} entries qualify",
        pool.len(),
        dictionary.len()
    );

    match pool.choose(rng) {
        Some(word) => word.to_uppercase(),
        None => {
            log::warn!("No word matches the current settings, using {FALLBACK_WORD}");
            FALLBACK_WORD.to_string()
        }
    }
}
