use core::fmt;
use std::cmp::Ordering;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_SCORE, WILD_SCORE};
use crate::error::{Result, UnoError};

/// One of the four real colors. Wild cards carry no color of their own.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum CardColor {
    #[strum(to_string = "Red", serialize = "r")]
    Red,
    #[strum(to_string = "Yellow", serialize = "y")]
    Yellow,
    #[strum(to_string = "Green", serialize = "g")]
    Green,
    #[strum(to_string = "Blue", serialize = "b")]
    Blue,
}

impl CardColor {
    pub fn short_char(self) -> char {
        match self {
            CardColor::Red => 'r',
            CardColor::Yellow => 'y',
            CardColor::Green => 'g',
            CardColor::Blue => 'b',
        }
    }
}

/// Ranks sort numbers first, then the action cards, then the wild cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Number(u8),
    Draw2,
    Reverse,
    Skip,
    Wild,
    WildDraw4,
}

impl Rank {
    pub fn short_char(self) -> char {
        match self {
            Rank::Number(number) => char::from_digit(number.into(), 10).unwrap_or('?'),
            Rank::Draw2 => 'D',
            Rank::Reverse => 'R',
            Rank::Skip => 'S',
            Rank::Wild => 'W',
            Rank::WildDraw4 => 'X',
        }
    }

    pub fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDraw4)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::Draw2 => write!(f, "Draw2"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Wild => write!(f, "Wild"),
            Rank::WildDraw4 => write!(f, "Draw4 Wild"),
        }
    }
}

/// What playing a card does, as opposed to what it matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    DrawTwo,
    Reverse,
    Skip,
    Wild,
    WildDrawFour,
}

/// The resolved effect of an [`ActionKind`] on the turn state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Effect {
    pub declares_color: bool,
    pub reverses: bool,
    pub skips: bool,
    pub draws: usize,
}

impl ActionKind {
    /// Draw-style actions hand cards to their target without skipping it.
    pub fn effect(self) -> Effect {
        match self {
            ActionKind::DrawTwo => Effect {
                draws: 2,
                ..Effect::default()
            },
            ActionKind::Reverse => Effect {
                reverses: true,
                ..Effect::default()
            },
            ActionKind::Skip => Effect {
                skips: true,
                ..Effect::default()
            },
            ActionKind::Wild => Effect {
                declares_color: true,
                ..Effect::default()
            },
            ActionKind::WildDrawFour => Effect {
                declares_color: true,
                draws: 4,
                ..Effect::default()
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub(crate) color: Option<CardColor>,
    pub(crate) rank: Rank,
}

impl Card {
    /// Builds a card, refusing colorless non-wild cards, colored wild cards
    /// and numbers above 9.
    pub fn new(color: Option<CardColor>, rank: Rank) -> Result<Self> {
        let valid = match (color, rank) {
            (None, rank) => rank.is_wild(),
            (Some(_), Rank::Number(number)) => number <= 9,
            (Some(_), rank) => !rank.is_wild(),
        };

        if valid {
            Ok(Self { color, rank })
        } else {
            Err(UnoError::InvalidCard { color, rank })
        }
    }

    pub fn colored(color: CardColor, rank: Rank) -> Result<Self> {
        Self::new(Some(color), rank)
    }

    pub const fn wild() -> Self {
        Self {
            color: None,
            rank: Rank::Wild,
        }
    }

    pub const fn wild_draw_four() -> Self {
        Self {
            color: None,
            rank: Rank::WildDraw4,
        }
    }

    pub fn color(&self) -> Option<CardColor> {
        self.color
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn score(&self) -> u32 {
        match self.rank {
            Rank::Number(number) => number.into(),
            Rank::Draw2 | Rank::Reverse | Rank::Skip => ACTION_SCORE,
            Rank::Wild | Rank::WildDraw4 => WILD_SCORE,
        }
    }

    /// Wild cards are deliberately not action cards here.
    pub fn is_action(&self) -> bool {
        matches!(self.rank, Rank::Draw2 | Rank::Reverse | Rank::Skip)
    }

    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.rank {
            Rank::Number(_) => None,
            Rank::Draw2 => Some(ActionKind::DrawTwo),
            Rank::Reverse => Some(ActionKind::Reverse),
            Rank::Skip => Some(ActionKind::Skip),
            Rank::Wild => Some(ActionKind::Wild),
            Rank::WildDraw4 => Some(ActionKind::WildDrawFour),
        }
    }

    /// Whether this card may be put on `top`. When `top` is wild the
    /// declared color decides, and it must have been declared.
    pub fn can_play_on(&self, top: &Card, wild_color: Option<CardColor>) -> Result<bool> {
        if self.is_wild() {
            return Ok(true);
        }

        if top.is_wild() {
            let declared = wild_color.ok_or(UnoError::UndeclaredWildColor)?;
            return Ok(self.color == Some(declared));
        }

        Ok(self.color == top.color || self.rank == top.rank)
    }

    /// Two-character form used for input, e.g. `rD` for a Red Draw2.
    pub fn short_label(&self) -> String {
        let color = self.color.map_or('_', CardColor::short_char);
        [color, self.rank.short_char()].iter().collect()
    }

    fn color_key(&self) -> u8 {
        self.color.map_or(4, |color| color as u8)
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.color_key()
            .cmp(&other.color_key())
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} {}", color, self.rank),
            None => write!(f, "{}", self.rank),
        }
    }
}
