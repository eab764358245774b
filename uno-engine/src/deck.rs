use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, Rank},
    constants::*,
    error::{Result, UnoError},
    io::RandomSource,
};

/// A stack of cards whose top is the end of the vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        Self(Vec::with_capacity(TOTAL_CARDS_IN_DECK))
    }

    /// The full 108 card deck in a fixed order.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

        for color in CardColor::iter() {
            let numbers = NUMBERS_PER_COLOR.iter().map(|number| Rank::Number(*number));
            let actions = ACTIONS_PER_COLOR
                .iter()
                .flat_map(|(rank, copies)| std::iter::repeat(*rank).take(*copies));
            cards.extend(numbers.chain(actions).map(|rank| Card {
                color: Some(color),
                rank,
            }));
        }

        for (rank, copies) in WILDS_IN_DECK {
            cards.extend(std::iter::repeat(Card { color: None, rank: *rank }).take(*copies));
        }

        Self(cards)
    }

    pub fn push(&mut self, card: Card) -> Result<()> {
        if self.is_full() {
            return Err(UnoError::PileFull);
        }
        self.0.push(card);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Card> {
        self.0.pop().ok_or(UnoError::PileEmpty)
    }

    pub fn peek(&self) -> Result<Card> {
        self.0.last().copied().ok_or(UnoError::PileEmpty)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= TOTAL_CARDS_IN_DECK
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        rng.shuffle(&mut self.0);
    }

    /// Bottom first, top last.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn correct_card_count_standard_deck() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), TOTAL_CARDS_IN_DECK);
        assert!(deck.is_full());
    }

    #[test]
    fn standard_deck_composition() {
        let deck = Deck::standard();
        let count = |card: Card| deck.cards().iter().filter(|c| **c == card).count();

        for color in CardColor::iter() {
            assert_eq!(count(Card::colored(color, Rank::Number(0)).unwrap()), 1);
            for number in 1..=9 {
                assert_eq!(count(Card::colored(color, Rank::Number(number)).unwrap()), 2);
            }
            for rank in [Rank::Draw2, Rank::Reverse, Rank::Skip] {
                assert_eq!(count(Card::colored(color, rank).unwrap()), 2);
            }
        }
        assert_eq!(count(Card::wild()), 4);
        assert_eq!(count(Card::wild_draw_four()), 4);
    }

    #[test]
    fn push_pop_peek_are_last_in_first_out() {
        let mut deck = Deck::new();
        let red_1 = Card::colored(CardColor::Red, Rank::Number(1)).unwrap();

        deck.push(red_1).unwrap();
        deck.push(Card::wild()).unwrap();

        assert_eq!(deck.peek().unwrap(), Card::wild());
        assert_eq!(deck.pop().unwrap(), Card::wild());
        assert_eq!(deck.pop().unwrap(), red_1);
        assert!(deck.is_empty());
    }

    #[test]
    fn empty_deck_cannot_pop_or_peek() {
        let mut deck = Deck::new();
        assert_eq!(deck.pop(), Err(UnoError::PileEmpty));
        assert_eq!(deck.peek(), Err(UnoError::PileEmpty));
    }

    #[test]
    fn full_deck_rejects_push() {
        let mut deck = Deck::standard();
        assert_eq!(deck.push(Card::wild()), Err(UnoError::PileFull));

        deck.clear();
        assert!(deck.is_empty());
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = Deck::standard();
        let mut rng = StdRng::seed_from_u64(11);
        deck.shuffle(&mut rng);

        let mut shuffled = deck.cards().to_vec();
        let mut original = Deck::standard().cards().to_vec();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }
}
