use strum::EnumCount;

use crate::card::{CardColor, Rank};

/// Numbers printed on each color's cards. One zero, two of everything else.
pub(crate) const NUMBERS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];

/// Copies of each colored action card in every color, in dealing order.
pub(crate) const ACTIONS_PER_COLOR: &[(Rank, usize)] =
    &[(Rank::Draw2, 2), (Rank::Reverse, 2), (Rank::Skip, 2)];

/// Copies of each colorless card. Draw4 Wilds go last.
pub(crate) const WILDS_IN_DECK: &[(Rank, usize)] = &[(Rank::Wild, 4), (Rank::WildDraw4, 4)];

const fn copies(ranks: &[(Rank, usize)]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < ranks.len() {
        total += ranks[i].1;
        i += 1;
    }
    total
}

pub(crate) const CARDS_PER_COLOR: usize = NUMBERS_PER_COLOR.len() + copies(ACTIONS_PER_COLOR);

pub const TOTAL_CARDS_IN_DECK: usize =
    CARDS_PER_COLOR * CardColor::COUNT + copies(WILDS_IN_DECK);

/// One card always stays face up on the discard pile.
pub const MAX_HAND_SIZE: usize = TOTAL_CARDS_IN_DECK - 1;

pub const STARTING_HAND_SIZE: usize = 7;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

pub const ACTION_SCORE: u32 = 20;
pub const WILD_SCORE: u32 = 50;

pub const DEFAULT_GOAL_SCORE: u32 = 500;
