//! The ten combination detectors.
//!
//! Each detector is a pure predicate over a 2-7 card slice, reporting whether
//! its category is satisfied plus the cards substantiating it. Detectors are
//! independent: each derives its own grouping or sorting and none calls
//! another.
//!
//! Two behavioral contracts are load-bearing here and must not be "improved":
//! group selection is first-match-wins in encounter order (never the
//! highest-ranked qualifying group), and all sorting follows the suit-ordinal
//! table order from [`Card::table_order`] with a stable sort.

use holdem_shared::{Card, Combination, Rank, Suit};

/// Outcome of a single detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub satisfied: bool,
    pub evidence: Vec<Card>,
}

/// Run the detector for one category over `cards`.
pub fn detect(combination: Combination, cards: &[Card]) -> Detection {
    match combination {
        Combination::HighCard => high_card(cards),
        Combination::OnePair => one_pair(cards),
        Combination::TwoPair => two_pair(cards),
        Combination::ThreeOfAKind => n_of_a_kind(cards, 3),
        Combination::Straight => straight(cards),
        Combination::Flush => flush(cards),
        Combination::FullHouse => full_house(cards),
        Combination::FourOfAKind => n_of_a_kind(cards, 4),
        Combination::StraightFlush => straight_flush(cards),
        Combination::RoyalFlush => royal_flush(cards),
    }
}

/// Group cards by rank, preserving encounter order of groups and members.
fn group_by_rank(cards: &[Card]) -> Vec<(Rank, Vec<Card>)> {
    let mut groups: Vec<(Rank, Vec<Card>)> = Vec::new();
    for &card in cards {
        match groups.iter_mut().find(|(rank, _)| *rank == card.rank) {
            Some((_, members)) => members.push(card),
            None => groups.push((card.rank, vec![card])),
        }
    }
    groups
}

/// Group cards by suit, preserving encounter order of groups and members.
fn group_by_suit(cards: &[Card]) -> Vec<(Suit, Vec<Card>)> {
    let mut groups: Vec<(Suit, Vec<Card>)> = Vec::new();
    for &card in cards {
        match groups.iter_mut().find(|(suit, _)| *suit == card.suit) {
            Some((_, members)) => members.push(card),
            None => groups.push((card.suit, vec![card])),
        }
    }
    groups
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut v = cards.to_vec();
    // stable, so same-suit cards keep their encounter order
    v.sort_by(Card::table_order);
    v
}

fn high_card(cards: &[Card]) -> Detection {
    let evidence = sorted(cards).last().copied().into_iter().collect();
    Detection {
        satisfied: true,
        evidence,
    }
}

fn one_pair(cards: &[Card]) -> Detection {
    let first_pair = group_by_rank(cards)
        .into_iter()
        .find(|(_, members)| members.len() >= 2);
    Detection {
        satisfied: first_pair.is_some(),
        evidence: first_pair.map(|(_, members)| members).unwrap_or_default(),
    }
}

fn two_pair(cards: &[Card]) -> Detection {
    let qualifying: Vec<Vec<Card>> = group_by_rank(cards)
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(_, members)| members)
        .collect();
    Detection {
        satisfied: qualifying.len() == 2,
        evidence: qualifying.into_iter().flatten().collect(),
    }
}

fn n_of_a_kind(cards: &[Card], n: usize) -> Detection {
    let first_group = group_by_rank(cards)
        .into_iter()
        .find(|(_, members)| members.len() >= n);
    Detection {
        satisfied: first_group.is_some(),
        evidence: first_group.map(|(_, members)| members).unwrap_or_default(),
    }
}

fn straight(cards: &[Card]) -> Detection {
    let sorted = sorted(cards);
    let satisfied = sorted
        .windows(2)
        .all(|pair| pair[0].rank.steps_to(pair[1].rank).abs() == 1);
    Detection {
        satisfied,
        evidence: sorted,
    }
}

fn flush(cards: &[Card]) -> Detection {
    let groups = group_by_suit(cards);
    let satisfied = groups.iter().any(|(_, members)| members.len() == 5);
    let evidence = groups
        .into_iter()
        .next()
        .map(|(_, members)| members)
        .unwrap_or_default();
    Detection {
        satisfied,
        evidence,
    }
}

fn full_house(cards: &[Card]) -> Detection {
    let groups = group_by_rank(cards);
    let pair = groups.iter().find(|(_, members)| members.len() == 2);
    let triple = groups.iter().find(|(_, members)| members.len() == 3);
    let satisfied = pair.is_some() && triple.is_some();
    let mut evidence = Vec::new();
    if let Some((_, members)) = pair {
        evidence.extend_from_slice(members);
    }
    if let Some((_, members)) = triple {
        evidence.extend_from_slice(members);
    }
    Detection {
        satisfied,
        evidence,
    }
}

fn straight_flush(cards: &[Card]) -> Detection {
    let sorted = sorted(cards);
    let satisfied = sorted.windows(2).all(|pair| {
        pair[0].is_same_suit(pair[1]) && pair[0].rank.steps_to(pair[1].rank).abs() == 1
    });
    Detection {
        satisfied,
        evidence: sorted,
    }
}

fn royal_flush(cards: &[Card]) -> Detection {
    let sorted = sorted(cards);
    let same_suit = sorted.windows(2).all(|pair| pair[0].is_same_suit(pair[1]));
    let satisfied = same_suit
        && sorted.first().map(|c| c.rank) == Some(Rank::Ten)
        && sorted.last().map(|c| c.rank) == Some(Rank::Ace);
    Detection {
        satisfied,
        evidence: sorted,
    }
}
