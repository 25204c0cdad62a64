//! Text rendering of cards, rounds and session results.
//!
//! Cards use Unicode suit symbols (♥ ♦ ♣ ♠) where the terminal supports them
//! and fall back to the `h d c s` letters otherwise.
//!
//! ```rust
//! use vidpoker_engine::cards::{Card, Rank, Suit};
//! use vidpoker_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use vidpoker_engine::cards::{Card, Rank, Suit};
use vidpoker_engine::classify::Label;
use vidpoker_engine::montecarlo::MonteCarloSummary;
use vidpoker_engine::round::RoundReport;
use vidpoker_engine::session::{SessionEnd, SessionSummary};

/// Windows consoles only render the suit symbols in modern terminals.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    rank.symbol().to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Five cards in bracket notation, e.g. `[T♠ J♠ Q♠ K♠ A♠]`.
pub fn format_hand(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", parts.join(" "))
}

/// Position numbers aligned under [`format_hand`] output.
pub fn format_positions(cards: &[Card]) -> String {
    let mut line = String::from(" ");
    for (i, card) in cards.iter().enumerate() {
        let width = format_card(card).chars().count();
        let _ = write!(line, "{:<width$}", i + 1, width = width + 1);
    }
    line.trim_end().to_string()
}

pub fn format_label(label: Option<Label>) -> &'static str {
    label.map(Label::code).unwrap_or("-")
}

pub fn format_end(end: SessionEnd) -> &'static str {
    match end {
        SessionEnd::Quit => "quit",
        SessionEnd::BankrollExhausted => "bankroll exhausted",
        SessionEnd::ElapsedRounds => "round limit reached",
        SessionEnd::ReturnThreshold => "return threshold reached",
        SessionEnd::BalanceBand => "balance left the band",
    }
}

/// One completed round: the dealt hand, the hold, every replicated hand and
/// the resulting balance.
pub fn format_round(report: &RoundReport) -> String {
    let mut s = String::new();
    let hold = report.hold.to_string();
    let _ = writeln!(
        s,
        "Round {}: dealt {} hold [{}] cost {:.2}",
        report.step,
        format_hand(&report.initial),
        if hold.is_empty() { "-" } else { hold.as_str() },
        report.cost
    );
    for (i, hand) in report.hands.iter().enumerate() {
        let _ = write!(
            s,
            "  {:>3} {} {:<7}",
            i + 1,
            format_hand(&hand.cards),
            format_label(hand.label)
        );
        if hand.multiplier > 1 {
            let _ = write!(s, " x{}", hand.multiplier);
        }
        if hand.return_amount > 0.0 {
            let _ = write!(s, " +{:.2}", hand.return_amount);
        }
        s.push('\n');
    }
    let _ = writeln!(
        s,
        "  returned {:.2}  balance {:.2}",
        report.total_return, report.balance
    );
    s
}

/// Histogram rows in payout order, including empty buckets.
pub fn format_histogram(histogram: &BTreeMap<Label, u64>) -> String {
    let mut s = String::new();
    for (label, count) in histogram {
        let _ = writeln!(s, "  {:<8}{}", label.code(), count);
    }
    s
}

pub fn format_summary(summary: &SessionSummary) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Session: {} / {} / {} hands",
        summary.variant, summary.multiplier, summary.hand_count
    );
    let _ = writeln!(s, "Ended: {} after {} rounds", format_end(summary.end), summary.rounds);
    let _ = writeln!(
        s,
        "Balance: {:.2} -> {:.2} (peak {:.2}, x{:.3})",
        summary.initial_balance, summary.final_balance, summary.max_balance, summary.peak_ratio
    );
    let _ = writeln!(s, "Final bet: {:.2}", summary.final_bet);
    if let Some(best) = &summary.max_return {
        let _ = writeln!(
            s,
            "Best hand: {} {} x{} returned {:.2} in round {} (balance {:.2}, profit {:.2})",
            format_hand(&best.cards),
            format_label(best.label),
            best.multiplier,
            best.return_amount,
            best.step,
            best.balance,
            best.profit
        );
    }
    s.push_str("Hands:\n");
    s.push_str(&format_histogram(&summary.histogram));
    s
}

pub fn format_monte_carlo(summary: &MonteCarloSummary) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "Runs: {}", summary.runs);
    let _ = writeln!(s, "Mean final balance: {:.2}", summary.mean_final_balance);
    let _ = writeln!(s, "Best final balance: {:.2}", summary.best_final_balance);
    let _ = writeln!(s, "Mean rounds: {:.1}", summary.mean_rounds);
    let _ = writeln!(s, "Mean peak ratio: {:.3}", summary.mean_peak_ratio);
    s.push_str("Ends:\n");
    for (end, count) in &summary.ends {
        let _ = writeln!(s, "  {:<26}{}", format_end(*end), count);
    }
    s
}
