//! Round-aware betting policy.
//!
//! A fixed heuristic keyed by betting round and classified hand strength; no
//! pot odds, no opponent modeling. The only carried state is the classifier
//! state, which makes the decision table itself a pure function of
//! (round, combination, combination-changed, stake).

use holdem_shared::{Action, Combination, Round, RoundEvent};

use crate::poker::{classify, ClassifierState};

/// Raise sizing by balance tier, largest tier first. A tier qualifies only
/// when the balance strictly exceeds twice its threshold, so e.g. a balance
/// of exactly 200 stakes 5, not 25.
fn stake_for(balance: u32) -> u32 {
    if balance > 20_000 {
        2_500
    } else if balance > 10_000 {
        1_250
    } else if balance > 2_000 {
        250
    } else if balance > 1_000 {
        125
    } else if balance > 200 {
        25
    } else if balance > 100 {
        5
    } else {
        0
    }
}

/// Decision engine for one agent identity.
///
/// Owns the carried [`ClassifierState`]; events must be fed strictly
/// sequentially, one at a time to completion.
#[derive(Debug, Clone)]
pub struct Strategist {
    user: String,
    state: ClassifierState,
}

impl Strategist {
    pub fn new(user: impl Into<String>) -> Self {
        Strategist {
            user: user.into(),
            state: ClassifierState::new(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Strongest combination confirmed so far in the current hand.
    pub fn current_combination(&self) -> Combination {
        self.state.combination
    }

    /// Resolve one round event into a betting action. [`Action::None`] means
    /// the event requires no response: not our turn, our seat is missing, or
    /// we hold no cards.
    pub fn decide(&mut self, event: &RoundEvent) -> Action {
        if event.starts_new_hand() {
            tracing::debug!(user = %self.user, "new hand, classifier reset");
            self.state.reset();
        }
        if self.state.previous_round != Some(event.game_round) {
            tracing::debug!(round = ?event.game_round, "betting round advanced");
        }
        self.state.previous_round = Some(event.game_round);

        if event.mover != self.user && !event.announces_move() {
            return Action::None;
        }
        let me = match event.seat(&self.user).filter(|p| !p.cards.is_empty()) {
            Some(me) => me,
            None => return Action::None,
        };

        let carried = self.state.combination;
        let combination = classify(&mut self.state, &me.cards, &event.desk_cards);
        let changed = combination != carried;
        let stake = stake_for(me.balance);

        tracing::debug!(
            round = ?event.game_round,
            ?combination,
            changed,
            stake,
            "decision inputs"
        );

        match event.game_round {
            Round::Blind => {
                if combination == Combination::TwoPair {
                    Action::Raise(stake)
                } else {
                    Action::Call
                }
            }
            Round::ThreeCards => post_deal(combination, changed, stake, Action::Check),
            Round::FourCards | Round::FiveCards => {
                post_deal(combination, changed, stake, Action::Fold)
            }
            Round::Final => match combination {
                Combination::RoyalFlush
                | Combination::StraightFlush
                | Combination::FourOfAKind
                | Combination::FullHouse => Action::Raise(stake),
                Combination::Flush | Combination::Straight | Combination::ThreeOfAKind => {
                    if changed {
                        Action::Call
                    } else {
                        Action::Check
                    }
                }
                Combination::TwoPair | Combination::OnePair => Action::Check,
                Combination::HighCard => Action::Fold,
            },
        }
    }
}

/// Shared table for the three post-deal streets; they differ only in the
/// fallback applied to a bare high card (Check on three cards, Fold later).
fn post_deal(combination: Combination, changed: bool, stake: u32, fallback: Action) -> Action {
    match combination {
        Combination::RoyalFlush
        | Combination::StraightFlush
        | Combination::FourOfAKind
        | Combination::FullHouse => {
            if changed {
                Action::Raise(stake)
            } else {
                Action::Check
            }
        }
        Combination::Flush | Combination::Straight | Combination::ThreeOfAKind => {
            if changed {
                Action::Call
            } else {
                Action::Check
            }
        }
        Combination::TwoPair | Combination::OnePair => Action::Check,
        Combination::HighCard => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stake_tiers_use_strict_double_threshold() {
        assert_eq!(stake_for(25_000), 2_500);
        assert_eq!(stake_for(20_001), 2_500);
        assert_eq!(stake_for(20_000), 1_250);
        assert_eq!(stake_for(12_000), 1_250);
        assert_eq!(stake_for(5_000), 250);
        assert_eq!(stake_for(2_000), 125);
        assert_eq!(stake_for(1_001), 125);
        assert_eq!(stake_for(201), 25);
        // Exactly twice the threshold does not qualify.
        assert_eq!(stake_for(200), 5);
        assert_eq!(stake_for(101), 5);
        assert_eq!(stake_for(100), 0);
        assert_eq!(stake_for(0), 0);
    }
}
