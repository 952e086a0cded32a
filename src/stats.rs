//! Win/loss and word-length statistics over a set of rounds.

use crate::session::{GameSession, GameStatus};

/// One labelled value, ready for a bar or line chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatPoint {
    pub name: String,
    pub value: usize,
}

impl StatPoint {
    fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Winning,
    Losing,
    Even,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameStats {
    pub won: usize,
    pub lost: usize,
    pub in_progress: usize,
    /// `(id, word length, status)` for every finished round, in play order.
    completed: Vec<(String, usize, GameStatus)>,
}

impl GameStats {
    #[must_use]
    pub fn from_games(games: &[GameSession]) -> Self {
        let mut stats = Self::default();
        for game in games {
            match game.status() {
                GameStatus::Won => stats.won += 1,
                GameStatus::Lost => stats.lost += 1,
                GameStatus::InProgress => {
                    stats.in_progress += 1;
                    continue;
                }
            }
            stats
                .completed
                .push((game.id().to_string(), game.word().chars().count(), game.status()));
        }
        stats
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.won + self.lost
    }

    #[must_use]
    pub fn game_report(&self) -> String {
        format!("Games won: {}\nGames lost: {}", self.won, self.lost)
    }

    #[must_use]
    pub fn outcome_points(&self) -> Vec<StatPoint> {
        vec![StatPoint::new("Wins", self.won), StatPoint::new("Losses", self.lost)]
    }

    /// One line per finished round, e.g. `#2: 6 letters - won`.
    #[must_use]
    pub fn word_length_report(&self) -> String {
        self.completed
            .iter()
            .map(|(id, len, status)| format!("{id}: {len} letters - {status}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn word_length_points(&self) -> Vec<StatPoint> {
        self.completed
            .iter()
            .map(|(id, len, _)| StatPoint::new(id.clone(), *len))
            .collect()
    }

    #[must_use]
    pub fn average_word_length(&self) -> Option<f64> {
        if self.completed.is_empty() {
            return None;
        }
        let total: usize = self.completed.iter().map(|(_, len, _)| len).sum();
        Some(total as f64 / self.completed.len() as f64)
    }

    #[must_use]
    pub fn trend(&self) -> Trend {
        match self.won.cmp(&self.lost) {
            std::cmp::Ordering::Greater => Trend::Winning,
            std::cmp::Ordering::Less => Trend::Losing,
            std::cmp::Ordering::Equal => Trend::Even,
        }
    }
}
