use thiserror::Error;

use crate::card::{Card, CardColor, Rank};

/// Everything here is a broken precondition on the caller's side. Bad user
/// input is handled before it can reach the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("No such card: {rank:?} with color {color:?}")]
    InvalidCard {
        color: Option<CardColor>,
        rank: Rank,
    },
    #[error("Pile is full")]
    PileFull,
    #[error("Pile is empty")]
    PileEmpty,
    #[error("Hand is full")]
    HandFull,
    #[error("Hand index {0} is out of range")]
    HandIndex(usize),
    #[error("No card can be drawn from the table")]
    TableExhausted,
    #[error("Cannot play a {card} on a {stock}")]
    IllegalPlay { card: Card, stock: Card },
    #[error("The stock is wild but no color was declared")]
    UndeclaredWildColor,
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("The round is not over")]
    RoundNotOver,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
