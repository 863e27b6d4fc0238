//! Card values and colors.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Lowest card value.
pub const MIN_VALUE: u8 = 1;
/// Highest card value.
pub const MAX_VALUE: u8 = 9;

/// Card color.
///
/// Declaration order matters: win detection scans colors in this order and
/// the first completed line wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in scan order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// The player who owns this color.
    #[must_use]
    pub const fn owner(self) -> Player {
        match self {
            Color::Red | Color::Blue => Player::One,
            Color::Green | Color::Yellow => Player::Two,
        }
    }

    /// Index into `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Yellow => 3,
        }
    }

    /// Single-letter board symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// An immutable colored, numbered card.
///
/// Equality is exact value + color, which is how a played card is matched
/// against the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub value: u8,
    pub color: Color,
}

impl Card {
    /// Create a card, rejecting values outside `1..=9`.
    #[must_use]
    pub fn new(value: u8, color: Color) -> Option<Self> {
        (MIN_VALUE..=MAX_VALUE)
            .contains(&value)
            .then_some(Self { value, color })
    }

    /// The player this card belongs to.
    #[must_use]
    pub const fn owner(self) -> Player {
        self.color.owner()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.symbol(), self.value)
    }
}
