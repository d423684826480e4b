use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_info, LogDestination};
use skillet_core::{update, AppState, Msg};
use skillet_engine::{FavoritesStore, ProviderSettings};

use super::effects::EffectRunner;
use super::persistence;
use super::ui;

const FAVORITES_FILENAME: &str = "recipe_favorites.json";
const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

const USAGE: &str =
    "Commands: <query> | /favorites | /results | /fav <id> | /open <id> | /close | /quit";

/// Inputs multiplexed onto the main loop: core messages from the terminal
/// and the engine bridge, plus the shell's own quit signal.
pub(crate) enum AppInput {
    Core(Msg),
    Quit,
}

pub fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    engine_logging::initialize(LogDestination::File);

    let api_key = std::env::var(API_KEY_ENV)
        .map_err(|_| format!("{API_KEY_ENV} is not set; a recipe API key is required"))?;
    let settings = ProviderSettings {
        api_key,
        ..ProviderSettings::default()
    };
    let store = FavoritesStore::new(PathBuf::from(FAVORITES_FILENAME));

    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let runner = EffectRunner::new(settings, store.clone(), input_tx.clone())?;

    ui::print_banner(USAGE);

    let mut state = AppState::new();
    let favorites = persistence::load_favorites(&store);
    engine_info!("Starting with {} favorites", favorites.len());
    dispatch(&mut state, Msg::RestoreFavorites(favorites), &runner);

    spawn_input_thread(input_tx);

    while let Ok(input) = input_rx.recv() {
        match input {
            AppInput::Core(msg) => dispatch(&mut state, msg, &runner),
            AppInput::Quit => break,
        }
    }

    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.run(effects);
    if next.consume_dirty() {
        ui::render(&next.view());
    }
    *state = next;
}

fn spawn_input_thread(input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                Ok(inputs) => {
                    for input in inputs {
                        if input_tx.send(input).is_err() {
                            return;
                        }
                    }
                }
                Err(usage) => println!("{usage}"),
            }
        }
        // Stdin closed: leave the main loop too.
        let _ = input_tx.send(AppInput::Quit);
    });
}

fn parse_line(line: &str) -> Result<Vec<AppInput>, String> {
    let trimmed = line.trim();
    if let Some(command) = trimmed.strip_prefix('/') {
        let mut parts = command.split_whitespace();
        return match (parts.next(), parts.next()) {
            (Some("favorites"), None) => Ok(vec![AppInput::Core(Msg::FavoritesTabSelected)]),
            (Some("results"), None) => Ok(vec![AppInput::Core(Msg::ResultsTabSelected)]),
            (Some("fav"), Some(id)) => parse_id(id)
                .map(|recipe_id| vec![AppInput::Core(Msg::FavoriteToggled { recipe_id })]),
            (Some("open"), Some(id)) => {
                parse_id(id).map(|recipe_id| vec![AppInput::Core(Msg::DetailOpened { recipe_id })])
            }
            (Some("close"), None) => Ok(vec![AppInput::Core(Msg::DetailClosed)]),
            (Some("quit"), None) | (Some("q"), None) => Ok(vec![AppInput::Quit]),
            _ => Err(USAGE.to_string()),
        };
    }

    // Anything else is a search query; blank input is ignored by the core.
    Ok(vec![
        AppInput::Core(Msg::QueryChanged(line.to_string())),
        AppInput::Core(Msg::QuerySubmitted),
    ])
}

fn parse_id(raw: &str) -> Result<u64, String> {
    raw.parse().map_err(|_| USAGE.to_string())
}
