//! The per-update game event delivered by the server.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Round;
use crate::player::PlayerSnapshot;

/// Exact first log line the server emits when a new hand begins.
pub const NEW_HAND_MARKER: &str = "BLIND game round started.";

/// Suffix of the log line announcing an action opportunity.
pub const MOVE_SUFFIX: &str = "moves.";

/// One immutable snapshot of the table, delivered once per game update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundEvent {
    pub game_round: Round,
    pub dealer: String,
    /// Name of the seat expected to move next.
    pub mover: String,
    /// Free-text log lines; element 0 is semantically significant.
    pub event: Vec<String>,
    pub players: Vec<PlayerSnapshot>,
    /// Free-text description of an already-declared combination.
    pub combination: String,
    pub game_status: String,
    pub desk_cards: Vec<Card>,
    pub desk_pot: u32,
}

impl RoundEvent {
    /// True when this event opens a new hand and carried classification
    /// state must be discarded.
    pub fn starts_new_hand(&self) -> bool {
        self.event.first().map(|l| l == NEW_HAND_MARKER).unwrap_or(false)
    }

    /// True when the lead log line announces a move, which counts as an
    /// action opportunity even if the recorded mover differs.
    pub fn announces_move(&self) -> bool {
        self.event
            .first()
            .map(|l| l.ends_with(MOVE_SUFFIX))
            .unwrap_or(false)
    }

    pub fn seat(&self, name: &str) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    const SAMPLE: &str = r#"{
        "gameRound": "THREE_CARDS",
        "dealer": "alice",
        "mover": "bot",
        "event": ["bot moves."],
        "players": [
            {"name": "alice", "balance": 900, "pot": 50, "status": "Check", "cards": []},
            {"name": "bot", "balance": 1200, "pot": 50, "status": "NotMoved",
             "cards": [{"cardValue": "A", "cardSuit": "♠"}, {"cardValue": "V", "cardSuit": "♥"}]}
        ],
        "combination": "",
        "gameStatus": "RUNNING",
        "deskCards": [
            {"cardValue": "10", "cardSuit": "♦"},
            {"cardValue": "2", "cardSuit": "♣"},
            {"cardValue": "K", "cardSuit": "♠"}
        ],
        "deskPot": 100
    }"#;

    #[test]
    fn parses_a_full_event() {
        let event: RoundEvent = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(event.game_round, Round::ThreeCards);
        assert_eq!(event.mover, "bot");
        assert!(event.announces_move());
        assert!(!event.starts_new_hand());
        assert_eq!(event.desk_pot, 100);
        assert_eq!(event.desk_cards.len(), 3);

        let me = event.seat("bot").unwrap();
        assert_eq!(me.balance, 1200);
        assert_eq!(me.cards[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(me.cards[1], Card::new(Rank::Jack, Suit::Hearts));
        assert!(event.seat("alice").unwrap().cards.is_empty());
        assert!(event.seat("nobody").is_none());
    }

    #[test]
    fn new_hand_marker_must_match_exactly() {
        let mut event: RoundEvent = serde_json::from_str(SAMPLE).unwrap();
        event.event = vec![NEW_HAND_MARKER.to_string()];
        assert!(event.starts_new_hand());
        event.event = vec!["BLIND game round started".to_string()];
        assert!(!event.starts_new_hand());
        event.event.clear();
        assert!(!event.starts_new_hand());
        assert!(!event.announces_move());
    }

    #[test]
    fn missing_fields_fail_to_parse() {
        let err = serde_json::from_str::<RoundEvent>(r#"{"gameRound": "BLIND"}"#);
        assert!(err.is_err());
    }
}
