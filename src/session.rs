//! A single round of the word-guessing game.
//!
//! A [`GameSession`] owns the target word and the guesses made so far. The
//! only transition is [`GameSession::process_guess`]; everything else is a
//! read-only projection for whatever renders the round.
//!
//! # State Machine
//! - `InProgress` → `Won` once every letter of the word has been guessed
//! - `InProgress` → `Lost` once [`MAX_INCORRECT_GUESSES`] misses accumulate
//!
//! Both outcomes are terminal. Bad, repeated or late guesses are ignored
//! silently rather than reported.

use crate::debug_log;
use crate::selector::{FALLBACK_WORD, WordPoolConfig, select_word};
use std::fmt;

/// Number of incorrect guesses that ends a round.
pub const MAX_INCORRECT_GUESSES: u8 = 7;

pub const INITIAL_STATUS_TEXT: &str = "Enter a letter to start the game.";
pub const WON_STATUS_TEXT: &str = "HURRAY!!!! YOU WON!";
pub const LOST_STATUS_TEXT: &str = "You lost. Better luck next time.";
pub const IN_PROGRESS_STATUS_TEXT: &str = "Enter another letter to guess the word.";

/// Placeholder shown instead of the word while a round is still running.
pub const HIDDEN_WORD: &str = "???";

/// Identifier of a round, unique within a history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(u32);

impl GameId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// How one position of the word should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealedLetter {
    /// The player guessed this letter.
    Guessed(char),
    /// Shown only because the round was lost.
    RevealedOnLoss(char),
    Hidden,
}

impl RevealedLetter {
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Guessed(c) | Self::RevealedOnLoss(c) => Some(c),
            Self::Hidden => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    id: GameId,
    word: String,
    guessed_letters: Vec<char>,
    incorrect_guess_count: u8,
    status: GameStatus,
    status_text: &'static str,
}

fn is_playable(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase())
}

impl GameSession {
    /// Starts a round for `word`. The word is uppercased; anything that is
    /// still not a plain `A`–`Z` word is replaced by [`FALLBACK_WORD`].
    #[must_use]
    pub fn new(id: GameId, word: &str) -> Self {
        let mut word = word.trim().to_uppercase();
        if !is_playable(&word) {
            log::warn!("Unplayable word {word:?} for game {id}, using {FALLBACK_WORD}");
            word = FALLBACK_WORD.to_string();
        }

        Self {
            id,
            word,
            guessed_letters: Vec::new(),
            incorrect_guess_count: 0,
            status: GameStatus::InProgress,
            status_text: INITIAL_STATUS_TEXT,
        }
    }

    /// Starts a round with a word drawn from `dictionary`.
    #[must_use]
    pub fn new_game<S: AsRef<str>>(id: GameId, dictionary: &[S], config: &WordPoolConfig) -> Self {
        Self::new(id, &select_word(dictionary, config))
    }

    /// Applies the first character of `raw` as a guess.
    ///
    /// Input is ignored when the round is over, when it is empty or not a
    /// letter, or when the letter was already guessed.
    pub fn process_guess(&mut self, raw: &str) {
        if self.status.is_terminal() {
            debug_log!("process_guess() - game {} already {}, ignoring", self.id, self.status);
            return;
        }

        let Some(first) = raw.chars().next() else {
            return;
        };

        let letter = first.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            debug_log!("process_guess() - ignoring non-letter {:?}", first);
            return;
        }

        if self.guessed_letters.contains(&letter) {
            debug_log!("process_guess() - {} already guessed", letter);
            return;
        }

        self.guessed_letters.push(letter);

        if !self.word.contains(letter) && self.incorrect_guess_count < MAX_INCORRECT_GUESSES {
            self.incorrect_guess_count += 1;
        }

        self.check_for_game_over();
    }

    // Win is checked first so a completed word can never be reported as lost.
    fn check_for_game_over(&mut self) {
        if self.unmatched_letters().next().is_none() {
            self.status = GameStatus::Won;
            self.status_text = WON_STATUS_TEXT;
        } else if self.incorrect_guess_count == MAX_INCORRECT_GUESSES {
            self.status = GameStatus::Lost;
            self.status_text = LOST_STATUS_TEXT;
        } else {
            self.status_text = IN_PROGRESS_STATUS_TEXT;
        }
        debug_log!(
            "game {} - guesses {:?}, misses {}, status {}",
            self.id,
            self.guessed_letters,
            self.incorrect_guess_count,
            self.status
        );
    }

    fn unmatched_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.word
            .chars()
            .filter(|c| !self.guessed_letters.contains(c))
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        self.status_text
    }

    /// Letters guessed so far, in the order they were entered.
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    #[must_use]
    pub fn incorrect_guess_count(&self) -> u8 {
        self.incorrect_guess_count
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u8 {
        MAX_INCORRECT_GUESSES - self.incorrect_guess_count
    }

    #[must_use]
    pub fn has_guesses(&self) -> bool {
        !self.guessed_letters.is_empty()
    }

    /// Per-position view of the word. A lost round reveals every letter it
    /// did not get, flagged as [`RevealedLetter::RevealedOnLoss`].
    #[must_use]
    pub fn letters(&self) -> Vec<RevealedLetter> {
        self.word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    RevealedLetter::Guessed(c)
                } else if self.status == GameStatus::Lost {
                    RevealedLetter::RevealedOnLoss(c)
                } else {
                    RevealedLetter::Hidden
                }
            })
            .collect()
    }

    /// The word once the round is over, [`HIDDEN_WORD`] before that.
    #[must_use]
    pub fn progress_word(&self) -> &str {
        if self.status.is_terminal() {
            &self.word
        } else {
            HIDDEN_WORD
        }
    }

    /// The word with unguessed letters as `_`, e.g. `S _ I _ T`.
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.letters()
            .iter()
            .map(|letter| letter.as_char().unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
