use crate::card::{Card, CardColor};
use crate::hand::Hand;

/// What the current player needs to see before acting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnHeader {
    pub player: String,
    pub next_player: String,
    /// Name and hand size of everyone else, in seat order.
    pub remaining: Vec<(String, usize)>,
    pub stock: Card,
    pub wild_color: Option<CardColor>,
    pub hand: Hand,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        round: u32,
    },
    StockRevealed {
        card: Card,
    },
    TurnStarted(TurnHeader),
    CardDrawn {
        player: String,
        card: Card,
    },
    CardPlayed {
        player: String,
        card: Card,
    },
    CardsDrawn {
        player: String,
        drawn: usize,
        requested: usize,
    },
    DirectionReversed,
    PlayerSkipped {
        player: String,
    },
    ColorDeclared {
        player: String,
        color: CardColor,
    },
    /// Nothing left to draw, so the player's turn passed.
    TurnSkipped {
        player: String,
    },
    RoundEnded {
        round: u32,
        winner: String,
        points: u32,
    },
}
