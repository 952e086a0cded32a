use crate::history::{GameHistory, GameSnapshot};
use crate::info_log;
use crate::session::{GameId, GameSession};
use crate::stats::GameStats;
use std::sync::mpsc::Receiver;

/// Something the player asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// Raw guess text; the session decides whether it counts.
    Guess(String),
    NewGame,
    Reroll,
    Stats,
    ListGames,
    Select(GameId),
    Exit,
}

/// Input and rendering side of the game, implemented by each front end.
pub trait GameInterface {
    /// Returns `None` when the input was not understood and should be asked again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_game(&mut self, snapshot: &GameSnapshot);
    fn display_stats(&mut self, stats: &GameStats);
    fn display_games(&mut self, games: &[GameSession], selected: GameId);
    fn display_message(&mut self, message: &str);
    fn display_exit_message(&mut self);
}

fn render_pending<I: GameInterface + ?Sized>(updates: &Receiver<GameSnapshot>, interface: &mut I) {
    for snapshot in updates.try_iter() {
        interface.display_game(&snapshot);
    }
}

/// Runs rounds from `history` until the player exits or input ends.
pub fn game_loop<I: GameInterface + ?Sized>(history: &mut GameHistory, interface: &mut I) {
    let updates = history.subscribe();
    interface.display_game(&GameSnapshot::from(history.current()));

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        info_log!("game_loop() - action {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::Guess(raw) => history.process_guess(&raw),
            UserAction::NewGame => {
                let id = history.start_new_game();
                interface.display_message(&format!("Started game {id}."));
            }
            UserAction::Reroll => {
                if !history.reroll_word() {
                    interface.display_message("The word can only be changed before the first guess.");
                }
            }
            UserAction::Stats => interface.display_stats(&GameStats::from_games(history.games())),
            UserAction::ListGames => interface.display_games(history.games(), history.selected_id()),
            UserAction::Select(id) => {
                if !history.select_game(id) {
                    interface.display_message(&format!("There is no game {id}."));
                }
            }
        }

        render_pending(&updates, interface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::WordPoolConfig;
    use crate::session::GameStatus;
    use std::collections::VecDeque;

    /// Scripted front end that records everything it is asked to show.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        snapshots: Vec<GameSnapshot>,
        messages: Vec<String>,
        stats: Vec<GameStats>,
        listed: usize,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_game(&mut self, snapshot: &GameSnapshot) {
            self.snapshots.push(snapshot.clone());
        }

        fn display_stats(&mut self, stats: &GameStats) {
            self.stats.push(stats.clone());
        }

        fn display_games(&mut self, _games: &[GameSession], _selected: GameId) {
            self.listed += 1;
        }

        fn display_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn guess(s: &str) -> Option<UserAction> {
        Some(UserAction::Guess(s.to_string()))
    }

    fn swift_history() -> GameHistory {
        GameHistory::new(vec!["swift".to_string()], WordPoolConfig::default())
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut history = swift_history();
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut history, &mut interface);

        assert!(interface.exited);
        assert_eq!(interface.snapshots.len(), 1);
        assert_eq!(interface.snapshots[0].status_text, crate::session::INITIAL_STATUS_TEXT);
    }

    #[test]
    fn test_game_loop_renders_each_guess() {
        let mut history = swift_history();
        let mut interface = ScriptedInterface::new(vec![
            guess("s"),
            None,
            guess("w"),
            guess("i"),
            guess("f"),
            guess("t"),
        ]);
        game_loop(&mut history, &mut interface);

        assert_eq!(interface.snapshots.len(), 6);
        let last = interface.snapshots.last().unwrap();
        assert_eq!(last.status, GameStatus::Won);
        assert_eq!(last.progress_word, "SWIFT");
        assert_eq!(history.current().status(), GameStatus::Won);
    }

    #[test]
    fn test_game_loop_new_game_and_stats() {
        let mut history = GameHistory::new(
            vec!["swift".to_string(), "kettle".to_string()],
            WordPoolConfig::default(),
        );
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::NewGame),
            Some(UserAction::Stats),
            Some(UserAction::ListGames),
        ]);
        game_loop(&mut history, &mut interface);

        assert_eq!(history.games().len(), 2);
        assert_eq!(interface.messages, vec!["Started game #2."]);
        assert_eq!(interface.stats.len(), 1);
        assert_eq!(interface.stats[0].in_progress, 2);
        assert_eq!(interface.listed, 1);
    }

    #[test]
    fn test_game_loop_reports_rejected_requests() {
        let mut history = swift_history();
        let mut interface = ScriptedInterface::new(vec![
            guess("s"),
            Some(UserAction::Reroll),
            Some(UserAction::Select(GameId::new(5))),
        ]);
        game_loop(&mut history, &mut interface);

        assert_eq!(
            interface.messages,
            vec![
                "The word can only be changed before the first guess.",
                "There is no game #5.",
            ]
        );
    }
}
