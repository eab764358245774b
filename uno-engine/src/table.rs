use tracing::debug;

use crate::card::{Card, CardColor, Rank};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::io::RandomSource;

/// The draw pile and the discard pile. The top of the discard pile is the
/// stock.
#[derive(Debug, Clone, Default)]
pub struct Table {
    draw: Deck,
    discard: Deck,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refills and shuffles the draw pile, then turns cards over onto the
    /// discard pile until the stock is something other than a Draw4 Wild.
    pub fn initialize(&mut self, rng: &mut dyn RandomSource) -> Result<()> {
        self.draw = Deck::standard();
        self.draw.shuffle(rng);
        self.discard.clear();

        loop {
            let card = self.draw.pop()?;
            self.discard.push(card)?;
            if card.rank() != Rank::WildDraw4 {
                break;
            }
            debug!("Draw4 Wild revealed as the first stock, turning over another card");
        }

        Ok(())
    }

    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// The stock always stays on the table.
    pub fn can_draw_card(&self) -> bool {
        self.can_draw_cards(1)
    }

    pub fn can_draw_cards(&self, count: usize) -> bool {
        self.total_cards() > count
    }

    /// Pops the top of the draw pile, first turning the discard pile (minus
    /// the stock) into a fresh draw pile if it ran out.
    pub fn draw_card(&mut self, rng: &mut dyn RandomSource) -> Result<Card> {
        if !self.can_draw_card() {
            return Err(UnoError::TableExhausted);
        }

        if self.draw.is_empty() {
            let stock = self.discard.pop()?;
            std::mem::swap(&mut self.draw, &mut self.discard);
            self.discard.push(stock)?;
            self.draw.shuffle(rng);
            debug!(cards = self.draw.len(), "reshuffled the discard pile into the draw pile");
        }

        self.draw.pop()
    }

    pub fn play_card(&mut self, card: Card, wild_color: Option<CardColor>) -> Result<()> {
        let stock = self.stock()?;
        if !card.can_play_on(&stock, wild_color)? {
            return Err(UnoError::IllegalPlay { card, stock });
        }
        self.discard.push(card)
    }

    pub fn stock(&self) -> Result<Card> {
        self.discard.peek()
    }

    pub fn draw_pile(&self) -> &Deck {
        &self.draw
    }

    pub fn discard_pile(&self) -> &Deck {
        &self.discard
    }

    #[cfg(test)]
    pub(crate) fn from_piles(draw: Vec<Card>, discard: Vec<Card>) -> Self {
        Self {
            draw: Deck(draw),
            discard: Deck(discard),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::constants::TOTAL_CARDS_IN_DECK;

    /// Leaves every pile in the order it was given.
    struct NoShuffle;

    impl RandomSource for NoShuffle {
        fn shuffle(&mut self, _cards: &mut [Card]) {}
    }

    fn card(color: CardColor, rank: Rank) -> Card {
        Card::colored(color, rank).unwrap()
    }

    #[test]
    fn initialize_reveals_one_card_that_is_not_a_wild_draw_four() {
        for seed in 0..50 {
            let mut table = Table::new();
            table.initialize(&mut StdRng::seed_from_u64(seed)).unwrap();

            assert_eq!(table.total_cards(), TOTAL_CARDS_IN_DECK);
            assert!(table.discard_len() >= 1);
            assert_ne!(table.stock().unwrap().rank(), Rank::WildDraw4);
        }
    }

    #[test]
    fn initialize_turns_over_every_leading_wild_draw_four() {
        // The standard deck ends with the four Draw4 Wilds, so without a
        // shuffle all of them are turned over before the last Wild.
        let mut table = Table::new();
        table.initialize(&mut NoShuffle).unwrap();

        assert_eq!(table.discard_len(), 5);
        assert_eq!(table.stock().unwrap(), Card::wild());
        assert_eq!(table.draw_len(), TOTAL_CARDS_IN_DECK - 5);
    }

    #[test]
    fn initialize_resets_previous_round() {
        let mut table = Table::from_piles(vec![], vec![Card::wild(); 3]);
        table.initialize(&mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(table.total_cards(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn cannot_draw_the_last_card_on_the_table() {
        let mut table = Table::from_piles(vec![], vec![card(CardColor::Red, Rank::Number(1))]);
        assert!(!table.can_draw_card());
        assert_eq!(table.draw_card(&mut NoShuffle), Err(UnoError::TableExhausted));

        let table = Table::from_piles(vec![card(CardColor::Red, Rank::Number(2))], vec![Card::wild()]);
        assert!(table.can_draw_card());
        assert!(table.can_draw_cards(1));
        assert!(!table.can_draw_cards(2));
    }

    #[test]
    fn draw_takes_the_top_of_the_draw_pile() {
        let red_1 = card(CardColor::Red, Rank::Number(1));
        let red_2 = card(CardColor::Red, Rank::Number(2));
        let mut table = Table::from_piles(vec![red_1, red_2], vec![Card::wild()]);

        assert_eq!(table.draw_card(&mut NoShuffle).unwrap(), red_2);
        assert_eq!(table.draw_len(), 1);
        assert_eq!(table.discard_len(), 1);
    }

    #[test]
    fn reshuffle_keeps_the_stock_and_consumes_one_card() {
        let stock = card(CardColor::Blue, Rank::Skip);
        let discard = vec![
            card(CardColor::Red, Rank::Number(1)),
            card(CardColor::Green, Rank::Number(4)),
            card(CardColor::Yellow, Rank::Draw2),
            Card::wild(),
            stock,
        ];
        let k = discard.len();
        let mut table = Table::from_piles(vec![], discard);

        table.draw_card(&mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(table.draw_len() + table.discard_len(), k - 1);
        assert_eq!(table.discard_len(), 1);
        assert_eq!(table.stock().unwrap(), stock);
    }

    #[test]
    fn reshuffle_without_shuffle_draws_from_the_old_discard_top() {
        let yellow_3 = card(CardColor::Yellow, Rank::Number(3));
        let stock = card(CardColor::Red, Rank::Number(8));
        let mut table = Table::from_piles(vec![], vec![Card::wild(), yellow_3, stock]);

        assert_eq!(table.draw_card(&mut NoShuffle).unwrap(), yellow_3);
        assert_eq!(table.draw_pile().cards(), &[Card::wild()]);
        assert_eq!(table.discard_pile().cards(), &[stock]);
    }

    #[test]
    fn play_card_enforces_matching() {
        let red_5 = card(CardColor::Red, Rank::Number(5));
        let mut table = Table::from_piles(vec![], vec![card(CardColor::Red, Rank::Number(3))]);

        table.play_card(red_5, None).unwrap();
        assert_eq!(table.stock().unwrap(), red_5);

        let blue_2 = card(CardColor::Blue, Rank::Number(2));
        assert_eq!(
            table.play_card(blue_2, None),
            Err(UnoError::IllegalPlay {
                card: blue_2,
                stock: red_5
            })
        );
        assert_eq!(table.discard_len(), 2);
    }

    #[test]
    fn play_on_wild_requires_declared_color() {
        let mut table = Table::from_piles(vec![], vec![Card::wild()]);
        let green_1 = card(CardColor::Green, Rank::Number(1));

        assert_eq!(table.play_card(green_1, None), Err(UnoError::UndeclaredWildColor));
        assert!(table.play_card(green_1, Some(CardColor::Red)).is_err());
        table.play_card(green_1, Some(CardColor::Green)).unwrap();
    }

    #[test]
    fn stock_of_empty_table_is_an_error() {
        assert_eq!(Table::new().stock(), Err(UnoError::PileEmpty));
    }
}
