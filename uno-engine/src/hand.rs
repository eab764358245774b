use core::fmt;
use std::fmt::Display;

use crate::card::{Card, CardColor};
use crate::constants::MAX_HAND_SIZE;
use crate::error::{Result, UnoError};

/// A player's cards, kept sorted by color and then rank after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts after any equal cards so the hand stays sorted.
    pub fn add(&mut self, card: Card) -> Result<()> {
        if self.is_full() {
            return Err(UnoError::HandFull);
        }
        let index = self.0.partition_point(|held| held <= &card);
        self.0.insert(index, card);
        Ok(())
    }

    pub fn card_at(&self, index: usize) -> Result<Card> {
        self.0.get(index).copied().ok_or(UnoError::HandIndex(index))
    }

    pub fn find(&self, card: &Card) -> Option<usize> {
        self.0.iter().position(|held| held == card)
    }

    pub fn find_by_short_label(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|held| held.short_label() == label)
    }

    pub fn remove_card_at(&mut self, index: usize) -> Result<Card> {
        if index >= self.0.len() {
            return Err(UnoError::HandIndex(index));
        }
        Ok(self.0.remove(index))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn score(&self) -> u32 {
        self.0.iter().map(Card::score).sum()
    }

    pub fn has_playable(&self, stock: &Card, wild_color: Option<CardColor>) -> Result<bool> {
        for card in &self.0 {
            if card.can_play_on(stock, wild_color)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_HAND_SIZE
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.0.iter().map(Card::short_label).collect();
        write!(f, "{}", labels.join(" "))
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
