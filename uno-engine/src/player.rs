use crate::card::{Card, CardColor};
use crate::error::{Result, UnoError};
use crate::hand::Hand;
use crate::io::RandomSource;
use crate::table::Table;

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    score: u32,
    pub(crate) hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    pub fn draw_card(&mut self, table: &mut Table, rng: &mut dyn RandomSource) -> Result<Card> {
        let card = table.draw_card(rng)?;
        self.hand.add(card)?;
        Ok(card)
    }

    pub fn draw_cards(
        &mut self,
        count: usize,
        table: &mut Table,
        rng: &mut dyn RandomSource,
    ) -> Result<()> {
        for _ in 0..count {
            self.draw_card(table, rng)?;
        }
        Ok(())
    }

    /// Moves `card` from this hand onto the discard pile. The table refuses
    /// the card before anything leaves the hand.
    pub fn play_card(
        &mut self,
        card: Card,
        table: &mut Table,
        wild_color: Option<CardColor>,
    ) -> Result<()> {
        let index = self.hand.find(&card).ok_or(UnoError::CardNotInHand(card))?;
        self.play_card_at(index, table, wild_color)
    }

    pub fn play_card_at(
        &mut self,
        index: usize,
        table: &mut Table,
        wild_color: Option<CardColor>,
    ) -> Result<()> {
        let card = self.hand.card_at(index)?;
        table.play_card(card, wild_color)?;
        self.hand.remove_card_at(index)?;
        Ok(())
    }
}
