//! Round history: owns every round played so far and the current one.
//!
//! Renderers do not hold on to sessions. They call [`GameHistory::subscribe`]
//! and receive an immutable [`GameSnapshot`] after each change.

use crate::selector::WordPoolConfig;
use crate::session::{GameId, GameSession, GameStatus, RevealedLetter};
use crate::{debug_log, info_log};
use std::sync::mpsc::{self, Receiver, Sender};

/// Immutable copy of the current round as it looked after a change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub id: GameId,
    pub status: GameStatus,
    pub status_text: &'static str,
    pub letters: Vec<RevealedLetter>,
    pub masked_word: String,
    pub guessed_letters: Vec<char>,
    pub incorrect_guess_count: u8,
    pub remaining_guesses: u8,
    /// The word once the round is over, `???` before.
    pub progress_word: String,
}

impl From<&GameSession> for GameSnapshot {
    fn from(game: &GameSession) -> Self {
        Self {
            id: game.id(),
            status: game.status(),
            status_text: game.status_text(),
            letters: game.letters(),
            masked_word: game.masked_word(),
            guessed_letters: game.guessed_letters().to_vec(),
            incorrect_guess_count: game.incorrect_guess_count(),
            remaining_guesses: game.remaining_guesses(),
            progress_word: game.progress_word().to_string(),
        }
    }
}

pub struct GameHistory {
    dictionary: Vec<String>,
    config: WordPoolConfig,
    games: Vec<GameSession>,
    current: usize,
    subscribers: Vec<Sender<GameSnapshot>>,
}

impl GameHistory {
    /// Creates the history and starts round `#1`.
    #[must_use]
    pub fn new(dictionary: Vec<String>, config: WordPoolConfig) -> Self {
        let first = GameSession::new_game(GameId::new(1), &dictionary, &config);
        info_log!("GameHistory::new() - {} words loaded", dictionary.len());
        Self {
            dictionary,
            config,
            games: vec![first],
            current: 0,
            subscribers: Vec::new(),
        }
    }

    /// Returns a receiver that gets a snapshot after every change to the
    /// current round, starting with the next one.
    pub fn subscribe(&mut self) -> Receiver<GameSnapshot> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self) {
        let snapshot = GameSnapshot::from(self.current());
        self.subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    /// Settings with every word used so far excluded.
    fn config_for_next_word(&self) -> WordPoolConfig {
        self.config
            .clone()
            .with_excluded(self.games.iter().map(GameSession::word))
    }

    pub fn start_new_game(&mut self) -> GameId {
        let id = self
            .games
            .iter()
            .map(GameSession::id)
            .max()
            .unwrap_or(GameId::new(0))
            .next();
        let game = GameSession::new_game(id, &self.dictionary, &self.config_for_next_word());
        info_log!("start_new_game() - starting game {}", id);

        self.games.push(game);
        self.current = self.games.len() - 1;
        self.notify();
        id
    }

    /// Makes an earlier round current. Returns `false` for an unknown id.
    pub fn select_game(&mut self, id: GameId) -> bool {
        let Some(index) = self.games.iter().position(|g| g.id() == id) else {
            debug_log!("select_game() - no game {}", id);
            return false;
        };
        self.current = index;
        self.notify();
        true
    }

    /// Draws a different word for the current round. Only allowed before the
    /// first guess; the round keeps its id.
    pub fn reroll_word(&mut self) -> bool {
        let current = &self.games[self.current];
        if current.has_guesses() || current.status().is_terminal() {
            debug_log!("reroll_word() - game {} already started", current.id());
            return false;
        }

        let game = GameSession::new_game(current.id(), &self.dictionary, &self.config_for_next_word());
        self.games[self.current] = game;
        self.notify();
        true
    }

    /// Forwards a guess to the current round. Subscribers only hear about
    /// guesses the round actually accepted.
    pub fn process_guess(&mut self, raw: &str) {
        let game = &mut self.games[self.current];
        let before = game.guessed_letters().len();
        game.process_guess(raw);
        if game.guessed_letters().len() != before {
            self.notify();
        }
    }

    #[must_use]
    pub fn current(&self) -> &GameSession {
        &self.games[self.current]
    }

    #[must_use]
    pub fn selected_id(&self) -> GameId {
        self.current().id()
    }

    #[must_use]
    pub fn games(&self) -> &[GameSession] {
        &self.games
    }

    #[must_use]
    pub fn config(&self) -> &WordPoolConfig {
        &self.config
    }

    #[must_use]
    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::FALLBACK_WORD;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_history_starts_first_game() {
        let history = GameHistory::new(words(&["kettle"]), WordPoolConfig::default());
        assert_eq!(history.games().len(), 1);
        assert_eq!(history.selected_id(), GameId::new(1));
        assert_eq!(history.current().word(), "KETTLE");
        assert_eq!(history.dictionary().len(), 1);
    }

    #[test]
    fn test_new_game_never_repeats_previous_words() {
        let mut history = GameHistory::new(
            words(&["kettle", "mitten", "sleigh"]),
            WordPoolConfig::default(),
        );
        history.start_new_game();
        history.start_new_game();

        let mut played: Vec<&str> = history.games().iter().map(GameSession::word).collect();
        played.sort_unstable();
        assert_eq!(played, vec!["KETTLE", "MITTEN", "SLEIGH"]);

        // Pool exhausted.
        history.start_new_game();
        assert_eq!(history.current().word(), FALLBACK_WORD);
        assert_eq!(history.selected_id(), GameId::new(4));
    }

    #[test]
    fn test_select_game_switches_current() {
        let mut history = GameHistory::new(words(&["kettle", "mitten"]), WordPoolConfig::default());
        history.start_new_game();
        assert_eq!(history.selected_id(), GameId::new(2));

        assert!(history.select_game(GameId::new(1)));
        assert_eq!(history.selected_id(), GameId::new(1));

        assert!(!history.select_game(GameId::new(9)));
        assert_eq!(history.selected_id(), GameId::new(1));
    }

    #[test]
    fn test_guesses_apply_to_selected_game_only() {
        let mut history = GameHistory::new(words(&["kettle", "mitten"]), WordPoolConfig::default());
        history.start_new_game();
        history.select_game(GameId::new(1));
        history.process_guess("e");

        assert_eq!(history.games()[0].guessed_letters(), &['E']);
        assert!(history.games()[1].guessed_letters().is_empty());
    }

    #[test]
    fn test_reroll_only_before_first_guess() {
        let mut history = GameHistory::new(words(&["kettle", "mitten"]), WordPoolConfig::default());
        let first = history.current().word().to_string();

        assert!(history.reroll_word());
        assert_ne!(history.current().word(), first);
        assert_eq!(history.selected_id(), GameId::new(1));
        assert_eq!(history.games().len(), 1);

        history.process_guess("a");
        let word = history.current().word().to_string();
        assert!(!history.reroll_word());
        assert_eq!(history.current().word(), word);
    }

    #[test]
    fn test_subscribers_receive_snapshots() {
        let mut history = GameHistory::new(words(&["swift"]), WordPoolConfig::new(4, 10, false));
        let rx = history.subscribe();

        history.process_guess("s");
        history.process_guess("q");

        let snapshots: Vec<GameSnapshot> = rx.try_iter().collect();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].guessed_letters, vec!['S']);
        assert_eq!(snapshots[0].masked_word, "S _ _ _ _");
        assert_eq!(snapshots[1].incorrect_guess_count, 1);
        assert_eq!(snapshots[1].remaining_guesses, 6);
        assert_eq!(snapshots[1].progress_word, "???");
    }

    #[test]
    fn test_ignored_guesses_send_no_snapshot() {
        let mut history = GameHistory::new(words(&["swift"]), WordPoolConfig::default());
        let rx = history.subscribe();

        history.process_guess("s");
        history.process_guess("s");
        history.process_guess("S");
        history.process_guess("5");
        history.process_guess("");
        assert_eq!(rx.try_iter().count(), 1);

        for c in ["w", "i", "f", "t"] {
            history.process_guess(c);
        }
        assert_eq!(rx.try_iter().count(), 4);
        assert_eq!(history.current().status(), GameStatus::Won);

        // Finished rounds stay silent.
        history.process_guess("q");
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut history = GameHistory::new(words(&["swift"]), WordPoolConfig::default());
        let rx = history.subscribe();
        drop(history.subscribe());

        history.process_guess("s");
        assert_eq!(history.subscribers.len(), 1);
        assert_eq!(rx.try_iter().count(), 1);
    }
}
