use crate::debug_log;
use crate::game_loop::{GameInterface, UserAction};
use crate::history::GameSnapshot;
use crate::selector::{DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_WORD_LENGTH, WordPoolConfig};
use crate::session::{GameId, GameSession, MAX_INCORRECT_GUESSES};
use crate::stats::{GameStats, Trend};
use clap::{ArgAction, Parser};
use std::io::BufRead;

/// Snowman word-guessing game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Shortest word to play
    #[arg(long = "min-length", default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    pub min_length: usize,

    /// Longest word to play
    #[arg(long = "max-length", default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    pub max_length: usize,

    /// Allow capitalized words such as place names
    #[arg(long = "proper-nouns")]
    pub proper_nouns: bool,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub fn word_pool_config(&self) -> WordPoolConfig {
        WordPoolConfig::new(self.min_length, self.max_length, self.proper_nouns)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const PROMPT: &str =
    "Enter a letter ('next' new game, 'reroll' new word, 'stats', 'games', 'play N', 'exit'):";

pub const PLAY_USAGE: &str = "Usage: play N";

/// Turns one line of input into an action. Anything that is not a command is
/// handed to the game as a guess. A malformed command returns its usage text.
pub fn parse_action(line: &str) -> Result<UserAction, &'static str> {
    let input = line.trim();
    let lower = input.to_lowercase();

    match lower.as_str() {
        "exit" | "quit" => Ok(UserAction::Exit),
        "next" => Ok(UserAction::NewGame),
        "reroll" => Ok(UserAction::Reroll),
        "stats" => Ok(UserAction::Stats),
        "games" => Ok(UserAction::ListGames),
        _ => {
            if let Some(id) = lower.strip_prefix("play ") {
                return id
                    .trim()
                    .trim_start_matches('#')
                    .parse::<u32>()
                    .map(|id| UserAction::Select(GameId::new(id)))
                    .map_err(|_| PLAY_USAGE);
            }
            Ok(UserAction::Guess(input.to_string()))
        }
    }
}

/// Reads one line. End of input and read errors both end the game.
pub fn read_action<R: BufRead>(reader: &mut R) -> Result<UserAction, &'static str> {
    println!("\n{PROMPT}");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => Ok(UserAction::Exit),
        Ok(_) => parse_action(&input),
        Err(e) => {
            debug_log!("read_action() - read failed: {}", e);
            Ok(UserAction::Exit)
        }
    }
}

#[must_use]
pub fn format_snapshot(snapshot: &GameSnapshot) -> String {
    let guessed: String = snapshot.guessed_letters.iter().collect();
    format!(
        "Game {}  {}\nLetters used: {}\nIncorrect guesses: {}/{}\n{}",
        snapshot.id,
        snapshot.masked_word,
        if guessed.is_empty() { "-".to_string() } else { guessed },
        snapshot.incorrect_guess_count,
        MAX_INCORRECT_GUESSES,
        snapshot.status_text
    )
}

#[must_use]
pub fn format_stats(stats: &GameStats) -> String {
    let mut out = stats.game_report();
    let words = stats.word_length_report();
    if !words.is_empty() {
        out.push('\n');
        out.push_str(&words);
    }
    if let Some(average) = stats.average_word_length() {
        out.push_str(&format!("\nAverage word length: {average:.1}"));
    }
    let trend = match stats.trend() {
        Trend::Winning => "You're on top.",
        Trend::Losing => "The snowman is winning.",
        Trend::Even => "All square.",
    };
    out.push('\n');
    out.push_str(trend);
    out
}

#[must_use]
pub fn format_games(games: &[GameSession], selected: GameId) -> String {
    games
        .iter()
        .map(|game| {
            let marker = if game.id() == selected { '>' } else { ' ' };
            format!("{marker} {}: {} ({})", game.id(), game.progress_word(), game.status())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Line-based front end over any `BufRead`, typically stdin.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        match read_action(&mut self.reader) {
            Ok(action) => Some(action),
            Err(usage) => {
                self.display_message(usage);
                None
            }
        }
    }

    fn display_game(&mut self, snapshot: &GameSnapshot) {
        println!("{}", format_snapshot(snapshot));
    }

    fn display_stats(&mut self, stats: &GameStats) {
        println!("{}", format_stats(stats));
    }

    fn display_games(&mut self, games: &[GameSession], selected: GameId) {
        println!("{}", format_games(games, selected));
    }

    fn display_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
