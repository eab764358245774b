mod console;
mod render;

use std::io;

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uno_engine::constants::{DEFAULT_GOAL_SCORE, MAX_PLAYERS, MIN_PLAYERS};
use uno_engine::game::Game;

use crate::console::Console;
use crate::render::{standings, ConsolePresenter};

/// Play UNO at the terminal, passing the keyboard between players.
#[derive(Parser, Debug)]
#[command(name = "uno", version, about)]
struct Args {
    /// Add a player. Repeat for every seat; prompts for players when omitted.
    #[arg(long = "player", value_name = "NAME")]
    players: Vec<String>,

    /// Score that ends the game.
    #[arg(long, value_name = "POINTS", default_value_t = DEFAULT_GOAL_SCORE,
          value_parser = clap::value_parser!(u32).range(1..))]
    goal: u32,

    /// Seed the shuffles for a repeatable game.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    console.say("Welcome to UNO!\n");

    let names = if args.players.is_empty() {
        console.prompt_player_names()
    } else {
        args.players
    };
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
        bail!(
            "UNO needs between {MIN_PLAYERS} and {MAX_PLAYERS} players, got {}",
            names.len()
        );
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(players = names.len(), goal = args.goal, seed = ?args.seed, "starting game");

    let mut game = Game::new(names, rng).wrap_err("failed to set up the game")?;
    game.set_presenter(Box::new(ConsolePresenter));

    loop {
        let result = game
            .play_round(&mut console)
            .wrap_err_with(|| format!("round {} could not be finished", game.round()))?;

        console.say(format!("\nRound {} Scores:", result.round));
        console.say(standings(&game).trim_end());

        if let Some(winner) = game.game_winner(args.goal) {
            let winner = game.players()[winner].name().to_owned();
            console.say(format!("\n{winner} has won the game!"));
            break;
        }

        console.pause(&format!(
            "\nPress enter to continue to round {}.",
            result.round + 1
        ));
    }

    Ok(())
}
