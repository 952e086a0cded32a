// Library interface for the snowman word-guessing game
// The binary in main.rs is one front end; the game core has no I/O of its own

pub mod cli;
pub mod game_loop;
pub mod history;
pub mod logging;
pub mod selector;
pub mod session;
pub mod stats;
pub mod wordbank;

// Re-export commonly used items for front ends and tests
pub use game_loop::{GameInterface, UserAction, game_loop};
pub use history::{GameHistory, GameSnapshot};
pub use selector::{
    DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_WORD_LENGTH, FALLBACK_WORD, WordPoolConfig, candidate_pool,
    select_word, select_word_with,
};
pub use session::{GameId, GameSession, GameStatus, MAX_INCORRECT_GUESSES, RevealedLetter};
pub use stats::{GameStats, StatPoint, Trend};
pub use wordbank::{
    EMBEDDED_WORDBANK, default_wordbank_path, load_wordbank_from_file, load_wordbank_from_str,
};
