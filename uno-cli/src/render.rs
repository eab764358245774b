use std::io::{self, Write};

use tracing::warn;
use uno_engine::event::{GameEvent, TurnHeader};
use uno_engine::game::Game;
use uno_engine::io::{Presenter, RandomSource};

/// Prints every game event to standard output.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn present(&mut self, event: &GameEvent) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{}", describe(event)) {
            warn!(%err, "failed to write to the terminal");
        }
    }
}

pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::RoundStarted { round } => format!("\n<<< ROUND {round} >>>"),
        GameEvent::StockRevealed { card } => format!("The first stock is a {card}."),
        GameEvent::TurnStarted(header) => turn_header(header),
        GameEvent::CardDrawn { card, .. } => format!("You drew a {card}."),
        GameEvent::CardPlayed { player, card } => format!("\n{player} plays a {card}."),
        GameEvent::CardsDrawn {
            player,
            drawn,
            requested,
        } => match (*drawn, *requested) {
            (0, _) => format!("There are no cards left to draw, so {player} draws nothing."),
            (drawn, requested) if drawn < requested => format!(
                "There are not enough cards left, so {player} only draws {drawn} of {requested}."
            ),
            (1, _) => format!("{player} draws a card."),
            (drawn, _) => format!("{player} draws {drawn} cards."),
        },
        GameEvent::DirectionReversed => "The direction of play has been reversed.".to_string(),
        GameEvent::PlayerSkipped { player } => format!("{player} is skipped."),
        GameEvent::ColorDeclared { player, color } => format!("{player} chose {color}."),
        GameEvent::TurnSkipped { player } => format!(
            "\nThe draw and discard piles are empty, so {player}'s turn is skipped."
        ),
        GameEvent::RoundEnded {
            round,
            winner,
            points,
        } => format!("\n{winner} wins round {round} and scores {points} points!"),
    }
}

pub fn turn_header(header: &TurnHeader) -> String {
    let remaining: String = header
        .remaining
        .iter()
        .map(|(name, count)| format!(" {count} ( {name} )"))
        .collect();
    // The declared color outlives the wild it was declared for.
    let declared = match header.wild_color {
        Some(color) if header.stock.is_wild() => format!(" ( {color} )"),
        _ => String::new(),
    };

    format!(
        "\n*** {player}'s Turn ***\n\
         Next Player: {next}\n\
         Cards Remaining:{remaining}\n\
         Stock: {stock} ( {label} ){declared}\n\
         Your Hand: {hand}",
        player = header.player,
        next = header.next_player,
        stock = header.stock,
        label = header.stock.short_label(),
        hand = header.hand,
    )
}

/// Players from highest to lowest score, one numbered line each.
pub fn standings<R: RandomSource>(game: &Game<R>) -> String {
    game.standings()
        .into_iter()
        .enumerate()
        .map(|(place, index)| {
            let player = &game.players()[index];
            format!("{}. {} ( {} )\n", place + 1, player.name(), player.score())
        })
        .collect()
}
