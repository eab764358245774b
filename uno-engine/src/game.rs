use std::fmt::{self, Debug};

use tracing::{debug, info};

use crate::card::{ActionKind, Card, CardColor};
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS, STARTING_HAND_SIZE};
use crate::error::{Result, UnoError};
use crate::event::{GameEvent, TurnHeader};
use crate::io::{InputProvider, Presenter, RandomSource};
use crate::player::Player;
use crate::table::Table;
use crate::turn::{Direction, Prompt, Rejection, TurnOutcome, TurnState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    /// Seat index of the player who emptied their hand.
    pub winner: usize,
    pub points: u32,
}

/// The turn engine. Players live for the whole game and are always addressed
/// by their seat index; only their hands and scores change.
pub struct Game<R> {
    table: Table,
    players: Vec<Player>,
    turn: TurnState,
    round: u32,
    rng: R,
    presenter: Option<Box<dyn Presenter>>,
}

impl<R: RandomSource> Game<R> {
    pub fn new(player_names: Vec<String>, rng: R) -> Result<Self> {
        if player_names.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        Ok(Game {
            table: Table::new(),
            players: player_names.into_iter().map(Player::new).collect(),
            turn: TurnState::default(),
            round: 0,
            rng,
            presenter: None,
        })
    }

    pub fn set_presenter(&mut self, presenter: Box<dyn Presenter>) {
        self.presenter = Some(presenter);
    }

    /// Starts a new round: fresh table and turn state, seven cards each, and
    /// the revealed stock applied as if the dealer had just played it.
    pub fn initialize_round(&mut self, input: &mut dyn InputProvider) -> Result<()> {
        self.round += 1;
        self.table.initialize(&mut self.rng)?;
        self.turn = TurnState::default();

        info!(round = self.round, players = self.players.len(), "starting round");
        self.emit(GameEvent::RoundStarted { round: self.round });

        self.deal()?;
        self.apply_opening_stock(input)
    }

    fn deal(&mut self) -> Result<()> {
        for player in &mut self.players {
            player.hand.clear();
        }

        // One card to each player at a time.
        for _ in 0..STARTING_HAND_SIZE {
            for player in &mut self.players {
                player.draw_card(&mut self.table, &mut self.rng)?;
            }
        }

        debug!(
            draw = self.table.draw_len(),
            discard = self.table.discard_len(),
            "dealt starting hands"
        );
        Ok(())
    }

    fn apply_opening_stock(&mut self, input: &mut dyn InputProvider) -> Result<()> {
        let stock = self.table.stock()?;
        debug!(%stock, "revealed the first stock");
        self.emit(GameEvent::StockRevealed { card: stock });

        let first = 0;
        match stock.action_kind() {
            Some(ActionKind::DrawTwo) => {
                self.draw_up_to(first, 2)?;
            }
            Some(ActionKind::Reverse) => self.reverse(),
            Some(ActionKind::Skip) => {
                let player = self.name_of(first);
                self.turn.current_player_index = self.next_player_index();
                self.emit(GameEvent::PlayerSkipped { player });
            }
            Some(ActionKind::Wild) => {
                let color = input.choose_color(&self.players[first]);
                self.declare_color(first, color);
            }
            // The table never reveals a Draw4 Wild.
            Some(ActionKind::WildDrawFour) | None => {}
        }

        Ok(())
    }

    /// Who plays after the current player, accounting for direction and a
    /// pending skip. Does not change any state.
    pub fn next_player_index(&self) -> usize {
        let count = self.players.len() as isize;
        let hops = if self.turn.pending_skip { 2 } else { 1 };
        let next = self.turn.current_player_index as isize + self.turn.direction.step() * hops;
        next.rem_euclid(count) as usize
    }

    pub fn next_player(&mut self) {
        self.turn.current_player_index = self.next_player_index();
        self.turn.pending_skip = false;
    }

    /// Runs the current player's turn to completion. The turn never advances
    /// here; call [`Game::next_player`] afterwards unless the round is over.
    pub fn play_turn(&mut self, input: &mut dyn InputProvider) -> Result<TurnOutcome> {
        let header = self.turn_header()?;
        self.emit(GameEvent::TurnStarted(header));

        let current = self.turn.current_player_index;
        let stock = self.table.stock()?;
        let can_play = self.players[current]
            .hand
            .has_playable(&stock, self.turn.wild_color)?;

        if !can_play {
            input.confirm(Prompt::NoPlayableCards, true);
            return self.draw_for_turn(input);
        }

        if input.confirm(Prompt::DrawInstead, false) {
            return self.draw_for_turn(input);
        }

        let card = self.choose_card_to_play(input)?;
        self.play(current, card, input)?;
        Ok(TurnOutcome::Played(card))
    }

    /// Asks until the label names a card that is in hand and playable.
    fn choose_card_to_play(&self, input: &mut dyn InputProvider) -> Result<Card> {
        let player = &self.players[self.turn.current_player_index];
        let stock = self.table.stock()?;
        let wild_color = self.turn.wild_color;

        loop {
            let label = input.choose_card_label(player, &stock, wild_color);
            let found = player.hand.find_by_short_label(label.trim());

            let rejection = match found {
                None => Rejection::NotInHand(label),
                Some(index) => {
                    let card = player.hand.card_at(index)?;
                    if card.can_play_on(&stock, wild_color)? {
                        return Ok(card);
                    }
                    Rejection::NotPlayable { card, stock }
                }
            };

            debug!(?rejection, "card choice refused");
            input.reject(&rejection);
        }
    }

    fn draw_for_turn(&mut self, input: &mut dyn InputProvider) -> Result<TurnOutcome> {
        let current = self.turn.current_player_index;

        if !self.table.can_draw_card() {
            let player = self.name_of(current);
            debug!(%player, "nothing left to draw, turn passes");
            self.emit(GameEvent::TurnSkipped { player });
            return Ok(TurnOutcome::NothingToDraw);
        }

        let card = self.players[current].draw_card(&mut self.table, &mut self.rng)?;
        let player = self.name_of(current);
        debug!(%player, %card, "drew a card");
        self.emit(GameEvent::CardDrawn { player, card });

        let stock = self.table.stock()?;
        if card.can_play_on(&stock, self.turn.wild_color)?
            && input.confirm(Prompt::PlayDrawn(card), true)
        {
            self.play(current, card, input)?;
            return Ok(TurnOutcome::DrewAndPlayed(card));
        }

        Ok(TurnOutcome::Drew(card))
    }

    fn play(&mut self, player_index: usize, card: Card, input: &mut dyn InputProvider) -> Result<()> {
        self.players[player_index].play_card(card, &mut self.table, self.turn.wild_color)?;

        let player = self.name_of(player_index);
        debug!(%player, %card, "played a card");
        self.emit(GameEvent::CardPlayed { player, card });

        self.resolve_action(card, input)
    }

    /// Applies a just-played card's effect. The target is whoever would play
    /// next at the moment the card lands.
    fn resolve_action(&mut self, card: Card, input: &mut dyn InputProvider) -> Result<()> {
        let Some(action) = card.action_kind() else {
            return Ok(());
        };
        let effect = action.effect();
        let current = self.turn.current_player_index;
        let target = self.next_player_index();

        if effect.declares_color {
            let color = input.choose_color(&self.players[current]);
            self.declare_color(current, color);
        }

        if effect.reverses {
            self.reverse();
        }

        if effect.skips {
            self.turn.pending_skip = true;
            let player = self.name_of(target);
            debug!(%player, "skipped");
            self.emit(GameEvent::PlayerSkipped { player });
        }

        if effect.draws > 0 {
            self.draw_up_to(target, effect.draws)?;
        }

        Ok(())
    }

    fn reverse(&mut self) {
        self.turn.direction = self.turn.direction.reversed();
        debug!(direction = ?self.turn.direction, "direction of play reversed");
        self.emit(GameEvent::DirectionReversed);
    }

    fn declare_color(&mut self, player_index: usize, color: CardColor) {
        self.turn.wild_color = Some(color);
        let player = self.name_of(player_index);
        debug!(%player, %color, "wild color declared");
        self.emit(GameEvent::ColorDeclared { player, color });
    }

    /// Draws as many of `count` cards as the table can spare without taking
    /// the stock. Returns how many were drawn.
    pub fn draw_up_to(&mut self, player_index: usize, count: usize) -> Result<usize> {
        let drawn = count.min(self.table.total_cards().saturating_sub(1));
        self.players[player_index].draw_cards(drawn, &mut self.table, &mut self.rng)?;

        let player = self.name_of(player_index);
        debug!(%player, drawn, requested = count, "forced draw");
        self.emit(GameEvent::CardsDrawn {
            player,
            drawn,
            requested: count,
        });
        Ok(drawn)
    }

    pub fn round_is_over(&self) -> bool {
        self.players.iter().any(|player| player.hand.is_empty())
    }

    pub fn round_winner(&self) -> Result<usize> {
        self.players
            .iter()
            .position(|player| player.hand.is_empty())
            .ok_or(UnoError::RoundNotOver)
    }

    /// Gives the round winner the value of every card left in hand.
    pub fn score_round(&mut self) -> Result<RoundResult> {
        let winner = self.round_winner()?;
        // The winner's own hand is empty and adds nothing.
        let points = self.players.iter().map(|player| player.hand.score()).sum();
        self.players[winner].add_score(points);

        let result = RoundResult {
            round: self.round,
            winner,
            points,
        };
        let winner = self.name_of(winner);
        info!(round = self.round, %winner, points, "round over");
        self.emit(GameEvent::RoundEnded {
            round: self.round,
            winner,
            points,
        });
        Ok(result)
    }

    /// Deals a round and plays turns until someone runs out of cards.
    pub fn play_round(&mut self, input: &mut dyn InputProvider) -> Result<RoundResult> {
        self.initialize_round(input)?;

        loop {
            self.play_turn(input)?;
            if self.round_is_over() {
                break;
            }
            self.next_player();
        }

        self.score_round()
    }

    pub fn game_winner(&self, goal_score: u32) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.score() >= goal_score)
    }

    pub fn is_game_over(&self, goal_score: u32) -> bool {
        self.game_winner(goal_score).is_some()
    }

    /// Seat indices from highest to lowest score. Tied players are listed
    /// from the highest seat down.
    pub fn standings(&self) -> Vec<usize> {
        let mut seats: Vec<usize> = (0..self.players.len()).collect();
        seats.sort_by_key(|seat| self.players[*seat].score());
        seats.reverse();
        seats
    }

    pub fn turn_header(&self) -> Result<TurnHeader> {
        let current = self.turn.current_player_index;
        let player = &self.players[current];

        Ok(TurnHeader {
            player: player.name().to_owned(),
            next_player: self.name_of(self.next_player_index()),
            remaining: self
                .players
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != current)
                .map(|(_, other)| (other.name().to_owned(), other.cards_count()))
                .collect(),
            stock: self.table.stock()?,
            wild_color: self.turn.wild_color,
            hand: player.hand.clone(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn current_player_index(&self) -> usize {
        self.turn.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn.current_player_index]
    }

    pub fn stock(&self) -> Result<Card> {
        self.table.stock()
    }

    pub fn wild_color(&self) -> Option<CardColor> {
        self.turn.wild_color
    }

    pub fn direction(&self) -> Direction {
        self.turn.direction
    }

    pub fn pending_skip(&self) -> bool {
        self.turn.pending_skip
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    fn name_of(&self, index: usize) -> String {
        self.players[index].name().to_owned()
    }

    fn emit(&mut self, event: GameEvent) {
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.present(&event);
        }
    }
}

impl<R> Debug for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("table", &self.table)
            .field("players", &self.players)
            .field("turn", &self.turn)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}
