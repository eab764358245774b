//! The collaborators the engine talks to: a source of shuffles, somebody to
//! make decisions, and an optional audience.

use rand::{seq::SliceRandom, Rng};

use crate::card::{Card, CardColor};
use crate::event::GameEvent;
use crate::player::Player;
use crate::turn::{Prompt, Rejection};

/// Produces uniformly random permutations.
pub trait RandomSource {
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn shuffle(&mut self, cards: &mut [Card]) {
        SliceRandom::shuffle(cards, self);
    }
}

/// Answers the questions a turn asks. Every call blocks the engine until it
/// returns.
pub trait InputProvider {
    /// Must name one of the four real colors.
    fn choose_color(&mut self, player: &Player) -> CardColor;

    fn confirm(&mut self, prompt: Prompt, default_yes: bool) -> bool;

    /// A short label such as `rD`. Labels that are not in the hand or cannot
    /// be played are reported through [`InputProvider::reject`] and asked for
    /// again.
    fn choose_card_label(
        &mut self,
        player: &Player,
        stock: &Card,
        wild_color: Option<CardColor>,
    ) -> String;

    fn reject(&mut self, _rejection: &Rejection) {}
}

pub trait Presenter {
    fn present(&mut self, _event: &GameEvent) {}
}
