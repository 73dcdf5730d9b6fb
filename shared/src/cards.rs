//! Card types and their wire encoding.

use std::cmp::Ordering;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Raised when a wire token names no known rank or suit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("unknown card token '{0}'")]
    UnknownToken(String),
}

/// Card rank, ordered by face value (Two lowest, Ace highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// The wire token for this rank. The server uses "V" for Jack.
    pub fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "V",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, CardError> {
        Ok(match token {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "V" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(CardError::UnknownToken(token.to_string())),
        })
    }

    /// Signed number of rank steps from `self` up to `other`.
    pub fn steps_to(self, other: Rank) -> i8 {
        other as i8 - self as i8
    }
}

/// Card suit. Declaration order is the suit ordinal used by the table-sort
/// contract; beyond that, suits carry no ordering meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn from_token(token: &str) -> Result<Self, CardError> {
        Ok(match token {
            "♠" => Suit::Spades,
            "♥" => Suit::Hearts,
            "♦" => Suit::Diamonds,
            "♣" => Suit::Clubs,
            _ => return Err(CardError::UnknownToken(token.to_string())),
        })
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// A playing card; equality by value.
///
/// The sort used by the classifier and the sequence detectors orders cards by
/// suit ordinal only, which is inconsistent with equality, so `Card` has no
/// `Ord` impl. The contract lives in [`Card::table_order`] and must be used
/// with a stable sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn is_same_suit(self, other: Card) -> bool {
        self.suit == other.suit
    }

    /// Comparator for the table-sort contract: suit ordinal only.
    pub fn table_order(a: &Card, b: &Card) -> Ordering {
        (a.suit as u8).cmp(&(b.suit as u8))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.glyph())
    }
}

/// Wire form of a card: `{"cardValue": "A", "cardSuit": "♠"}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCard {
    card_value: String,
    card_suit: String,
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireCard {
            card_value: self.rank.token().to_string(),
            card_suit: self.suit.glyph().to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireCard::deserialize(deserializer)?;
        let rank = Rank::from_token(&wire.card_value).map_err(D::Error::custom)?;
        let suit = Suit::from_token(&wire.card_suit).map_err(D::Error::custom)?;
        Ok(Card { rank, suit })
    }
}
