//! Betting rounds and the actions the bot can answer with.

use serde::{Deserialize, Serialize};

/// Betting phases of one hand, strictly sequential.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Round {
    #[serde(rename = "BLIND")]
    Blind,
    #[serde(rename = "THREE_CARDS")]
    ThreeCards,
    #[serde(rename = "FOUR_CARDS")]
    FourCards,
    #[serde(rename = "FIVE_CARDS")]
    FiveCards,
    #[serde(rename = "FINAL")]
    Final,
}

/// A betting decision. `None` is the no-op sentinel: the event needs no
/// response and nothing is transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(u32),
    AllIn,
    None,
}

impl Action {
    /// The wire token the game server expects. The empty token means
    /// "suppress transmission". Raises spell the server's "Rise" verb.
    pub fn wire(&self) -> String {
        match self {
            Action::Fold => "Fold".to_string(),
            Action::Check => "Check".to_string(),
            Action::Call => "Call".to_string(),
            Action::Raise(amount) => format!("Rise,{}", amount),
            Action::AllIn => "AllIn".to_string(),
            Action::None => String::new(),
        }
    }
}
