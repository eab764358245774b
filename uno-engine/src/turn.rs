use crate::card::{Card, CardColor};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    pub(crate) fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Turn order bookkeeping, reset at the start of every round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnState {
    pub current_player_index: usize,
    pub direction: Direction,
    pub pending_skip: bool,
    pub wild_color: Option<CardColor>,
}

/// Yes/no questions put to the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Nothing in hand is playable; the answer is ignored and a card is drawn.
    NoPlayableCards,
    /// Draw instead of playing from hand. Defaults to no.
    DrawInstead,
    /// The drawn card is playable. Defaults to yes.
    PlayDrawn(Card),
}

/// Why a chosen label was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    NotInHand(String),
    NotPlayable { card: Card, stock: Card },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(Card),
    Drew(Card),
    DrewAndPlayed(Card),
    /// The table had no card to spare, so the turn passed without a draw.
    NothingToDraw,
}
