//! Poker hand categories.

use serde::{Deserialize, Serialize};

/// The ten hand categories, weakest to strongest. Ordinal position is the
/// strength ranking used by the classifier's ladder scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Combination {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Combination {
    /// All categories in ladder order.
    pub const LADDER: [Combination; 10] = [
        Combination::HighCard,
        Combination::OnePair,
        Combination::TwoPair,
        Combination::ThreeOfAKind,
        Combination::Straight,
        Combination::Flush,
        Combination::FullHouse,
        Combination::FourOfAKind,
        Combination::StraightFlush,
        Combination::RoyalFlush,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn describe(self) -> &'static str {
        match self {
            Combination::HighCard => "High card",
            Combination::OnePair => "One pair",
            Combination::TwoPair => "Two pair",
            Combination::ThreeOfAKind => "Three of a kind",
            Combination::Straight => "Straight",
            Combination::Flush => "Flush",
            Combination::FullHouse => "Full house",
            Combination::FourOfAKind => "Four of a kind",
            Combination::StraightFlush => "Straight flush",
            Combination::RoyalFlush => "Royal flush",
        }
    }
}
