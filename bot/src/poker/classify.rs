//! Ladder scan over the combination detectors.

use holdem_shared::{Card, Combination, Round};

use super::detect::detect;

/// Carried classification state for one agent session: the strongest
/// combination confirmed so far in the current hand, and the round it was
/// last updated in. Owned by a single strategist; never shared across hands
/// running concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierState {
    pub combination: Combination,
    pub previous_round: Option<Round>,
}

impl Default for ClassifierState {
    fn default() -> Self {
        ClassifierState {
            combination: Combination::HighCard,
            previous_round: None,
        }
    }
}

impl ClassifierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of a new hand: the next scan restarts from the bottom of the
    /// ladder.
    pub fn reset(&mut self) {
        self.combination = Combination::HighCard;
    }
}

/// Classify the strongest combination available from hole + board cards,
/// advancing `state.combination`.
///
/// The scan starts at the carried combination's ordinal and walks upward
/// through RoyalFlush, assigning the state on every satisfied detector. The
/// last assignment is the strongest satisfied category, and because the scan
/// never looks below the carried ordinal, the result cannot weaken within a
/// hand.
pub fn classify(state: &mut ClassifierState, hole: &[Card], board: &[Card]) -> Combination {
    let mut cards: Vec<Card> = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    cards.sort_by(Card::table_order);

    for &combination in &Combination::LADDER[state.combination.ordinal()..] {
        if detect(combination, &cards).satisfied {
            state.combination = combination;
        }
    }
    state.combination
}
