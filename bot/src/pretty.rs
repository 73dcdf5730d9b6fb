//! Human-readable console rendering of incoming events.

use holdem_shared::{Card, PlayerSnapshot, RoundEvent};
use owo_colors::OwoColorize;

fn format_card(c: Card, color: bool) -> String {
    let text = c.to_string();
    if color && c.suit.is_red() {
        text.red().to_string()
    } else {
        text
    }
}

fn format_cards(cards: &[Card], color: bool) -> String {
    cards
        .iter()
        .map(|&c| format_card(c, color))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_player(p: &PlayerSnapshot, event: &RoundEvent, you: &str, color: bool) -> String {
    let name = if p.name == you {
        if color {
            format!("{}{}", p.name.bold(), " (You)".bold())
        } else {
            format!("{} (You)", p.name)
        }
    } else {
        p.name.clone()
    };
    let dealer = if p.name == event.dealer { " [D]" } else { "" };
    let to_act = if p.name == event.mover {
        if color {
            " ●".green().to_string()
        } else {
            " *".to_string()
        }
    } else {
        String::new()
    };
    let cards = if p.cards.is_empty() {
        String::new()
    } else {
        format!("  [{}]", format_cards(&p.cards, color))
    };
    format!(
        "  {}{}  balance={} pot={} ({}){}{}",
        name,
        dealer,
        p.balance,
        p.pot,
        p.status_action().label(),
        cards,
        to_act
    )
}

/// Render one event as a multi-line block: round header, pot, board, players
/// and the server's log lines.
pub fn format_event(event: &RoundEvent, you: &str, color: bool) -> String {
    let mut out = String::new();

    let header = format!("== {:?} ==", event.game_round);
    if color {
        out.push_str(&header.bold().purple().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    let pot = if color {
        format!("{} {}", "Pot:".bold().yellow(), event.desk_pot)
    } else {
        format!("Pot: {}", event.desk_pot)
    };
    out.push_str(&pot);
    out.push('\n');

    if !event.desk_cards.is_empty() {
        out.push_str(&format!(
            "Board: [{}]\n",
            format_cards(&event.desk_cards, color)
        ));
    }
    if !event.combination.is_empty() {
        out.push_str(&format!("Declared: {}\n", event.combination));
    }

    out.push_str("Players:\n");
    for p in &event.players {
        out.push_str(&format_player(p, event, you, color));
        out.push('\n');
    }

    if !event.event.is_empty() {
        out.push_str("Log:\n");
        for line in &event.event {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_shared::{Rank, Round, Suit};

    #[test]
    fn renders_without_color_codes() {
        let event = RoundEvent {
            game_round: Round::FourCards,
            dealer: "alice".into(),
            mover: "bot".into(),
            event: vec!["bot moves.".into()],
            players: vec![PlayerSnapshot {
                name: "bot".into(),
                balance: 500,
                pot: 25,
                status: "NotMoved".into(),
                cards: vec![Card::new(Rank::Ace, Suit::Spades)],
            }],
            combination: String::new(),
            game_status: "RUNNING".into(),
            desk_cards: vec![Card::new(Rank::Ten, Suit::Clubs)],
            desk_pot: 50,
        };
        let text = format_event(&event, "bot", false);
        assert!(text.contains("== FourCards =="));
        assert!(text.contains("Pot: 50"));
        assert!(text.contains("Board: [10♣]"));
        assert!(text.contains("bot (You)"));
        assert!(text.contains("(not moved)"));
        assert!(text.contains("bot moves."));
    }
}
