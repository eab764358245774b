//! Rules and turn engine for a text-mode game of UNO.
//!
//! The engine owns the table, the players and the turn order. Decisions come
//! from an [`io::InputProvider`], shuffles from an [`io::RandomSource`], and
//! anything worth showing is passed to an optional [`io::Presenter`].

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod io;
pub mod player;
pub mod table;
pub mod turn;
