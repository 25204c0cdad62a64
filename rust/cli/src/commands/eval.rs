//! # Eval Command
//!
//! Classifies five cards under one variant and shows how strategy1 would
//! hold them. Card positions refer to the sorted hand that is printed.

use std::io::Write;

use vidpoker_ai::strategy1;
use vidpoker_engine::cards::parse_hand;
use vidpoker_engine::classify::classify;
use vidpoker_engine::hand::encode;
use vidpoker_engine::paytable::Variant;

use crate::error::CliError;
use crate::formatters::{format_hand, format_label, format_positions};

pub fn handle_eval_command(
    cards: &str,
    game: Option<Variant>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let variant = game.unwrap_or(Variant::JacksOrBetter);
    let cards = parse_hand(cards).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let hand = encode(cards);
    let label = classify(variant, &hand);

    writeln!(out, "Hand:       {}", format_hand(&hand.cards))?;
    writeln!(out, "            {}", format_positions(&hand.cards))?;
    writeln!(out, "Values:     {:?}", hand.sorted_values)?;
    writeln!(out, "Categories: {:?}", hand.sorted_categories)?;
    writeln!(out, "Deltas:     {:?} / {:?}", hand.value_deltas, hand.category_deltas)?;
    writeln!(out, "Game:       {}", variant)?;
    writeln!(out, "Label:      {}", format_label(label))?;
    let pays = label.and_then(|l| variant.base_multiplier(l)).unwrap_or(0);
    writeln!(out, "Pays:       {}x", pays)?;
    let hold = strategy1(&hand);
    let hold = hold.to_string();
    writeln!(
        out,
        "strategy1:  hold {}",
        if hold.is_empty() { "nothing" } else { hold.as_str() }
    )?;
    Ok(())
}
