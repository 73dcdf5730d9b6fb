//! Per-seat snapshot data.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Last declared status of a seat, derived from the wire status token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
    NotMoved,
    SmallBlind,
    BigBlind,
    None,
}

impl PlayerStatus {
    /// Fixed token table; anything unrecognized maps to `None`.
    /// The server really does spell "SmallBLind" with a capital L.
    pub fn from_token(token: &str) -> Self {
        match token {
            "Fold" => PlayerStatus::Fold,
            "Check" => PlayerStatus::Check,
            "Call" => PlayerStatus::Call,
            "Rise" => PlayerStatus::Raise,
            "AllIn" => PlayerStatus::AllIn,
            "NotMoved" => PlayerStatus::NotMoved,
            "SmallBLind" => PlayerStatus::SmallBlind,
            "BigBlind" => PlayerStatus::BigBlind,
            _ => PlayerStatus::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::Fold => "fold",
            PlayerStatus::Check => "check",
            PlayerStatus::Call => "call",
            PlayerStatus::Raise => "raise",
            PlayerStatus::AllIn => "all-in",
            PlayerStatus::NotMoved => "not moved",
            PlayerStatus::SmallBlind => "small blind",
            PlayerStatus::BigBlind => "big blind",
            PlayerStatus::None => "-",
        }
    }
}

/// One player's visible state within a [`crate::RoundEvent`]. `cards` is
/// empty for every seat except the viewing agent's own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub name: String,
    pub balance: u32,
    /// This seat's contribution to the pot in the current round.
    pub pot: u32,
    pub status: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl PlayerSnapshot {
    /// The action implied by the raw status string.
    pub fn status_action(&self) -> PlayerStatus {
        PlayerStatus::from_token(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_token_table() {
        assert_eq!(PlayerStatus::from_token("Fold"), PlayerStatus::Fold);
        assert_eq!(PlayerStatus::from_token("Check"), PlayerStatus::Check);
        assert_eq!(PlayerStatus::from_token("Call"), PlayerStatus::Call);
        assert_eq!(PlayerStatus::from_token("Rise"), PlayerStatus::Raise);
        assert_eq!(PlayerStatus::from_token("AllIn"), PlayerStatus::AllIn);
        assert_eq!(PlayerStatus::from_token("NotMoved"), PlayerStatus::NotMoved);
        assert_eq!(
            PlayerStatus::from_token("SmallBLind"),
            PlayerStatus::SmallBlind
        );
        assert_eq!(PlayerStatus::from_token("BigBlind"), PlayerStatus::BigBlind);
        // The correctly-capitalized spelling is not what the server sends.
        assert_eq!(PlayerStatus::from_token("SmallBlind"), PlayerStatus::None);
        assert_eq!(PlayerStatus::from_token(""), PlayerStatus::None);
    }
}
