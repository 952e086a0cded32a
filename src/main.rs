use snowman::cli::{CliInterface, parse_cli};
use snowman::{
    EMBEDDED_WORDBANK, GameHistory, default_wordbank_path, game_loop, load_wordbank_from_file,
    load_wordbank_from_str, logging,
};
use std::io;

fn main() {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let dictionary = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return;
            }
        },
        None => match default_wordbank_path().filter(|path| path.is_file()) {
            Some(path) => match load_wordbank_from_file(&path) {
                Ok(words) => {
                    log::info!("Using word list {}", path.display());
                    words
                }
                Err(e) => {
                    log::warn!("Ignoring word list {}: {e}", path.display());
                    load_wordbank_from_str(EMBEDDED_WORDBANK)
                }
            },
            None => load_wordbank_from_str(EMBEDDED_WORDBANK),
        },
    };

    let config = cli.word_pool_config();
    if config.min_length > config.max_length {
        log::warn!(
            "--min-length {} is greater than --max-length {}; every game will use the fallback word",
            config.min_length,
            config.max_length
        );
    }

    println!("Loaded {} words.", dictionary.len());
    let mut history = GameHistory::new(dictionary, config);
    let mut interface = CliInterface::new(io::stdin().lock());
    game_loop(&mut history, &mut interface);
}
