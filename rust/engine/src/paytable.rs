//! Game variants and their payout tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::{
    Label, Predicate, DOUBLE_BONUS_RULES, JACKS_OR_BETTER_RULES, TRIPLE_DOUBLE_BONUS_RULES,
};
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    JacksOrBetter,
    DoubleBonus,
    TripleDoubleBonus,
}

/// 9/6 Jacks or Better, in "for one" units of the bet denomination.
const JACKS_OR_BETTER_PAYS: &[(Label, u32)] = &[
    (Label::RoyalFlush, 800),
    (Label::StraightFlush, 50),
    (Label::FourOfAKind, 25),
    (Label::FullHouse, 9),
    (Label::Flush, 6),
    (Label::Straight, 4),
    (Label::ThreeOfAKind, 3),
    (Label::TwoPair, 2),
    (Label::JacksOrBetter, 1),
];

const DOUBLE_BONUS_PAYS: &[(Label, u32)] = &[
    (Label::RoyalFlush, 800),
    (Label::FourAces, 160),
    (Label::FourLow, 80),
    (Label::FourOfAKind, 50),
    (Label::StraightFlush, 50),
    (Label::FullHouse, 7),
    (Label::Flush, 5),
    (Label::Straight, 4),
    (Label::ThreeOfAKind, 3),
    (Label::TwoPair, 1),
    (Label::JacksOrBetter, 1),
];

const TRIPLE_DOUBLE_BONUS_PAYS: &[(Label, u32)] = &[
    (Label::RoyalFlush, 800),
    (Label::FourAcesLowKicker, 800),
    (Label::FourLowAceKicker, 400),
    (Label::FourAces, 160),
    (Label::FourLow, 80),
    (Label::FourOfAKind, 50),
    (Label::StraightFlush, 50),
    (Label::FullHouse, 7),
    (Label::Flush, 5),
    (Label::Straight, 4),
    (Label::ThreeOfAKind, 2),
    (Label::TwoPair, 1),
    (Label::JacksOrBetter, 1),
];

impl Variant {
    pub fn all() -> [Variant; 3] {
        [
            Variant::JacksOrBetter,
            Variant::DoubleBonus,
            Variant::TripleDoubleBonus,
        ]
    }

    pub fn code(self) -> &'static str {
        match self {
            Variant::JacksOrBetter => "job",
            Variant::DoubleBonus => "db",
            Variant::TripleDoubleBonus => "tdb",
        }
    }

    /// Ordered classification cascade.
    pub fn rules(self) -> &'static [(Predicate, Label)] {
        match self {
            Variant::JacksOrBetter => JACKS_OR_BETTER_RULES,
            Variant::DoubleBonus => DOUBLE_BONUS_RULES,
            Variant::TripleDoubleBonus => TRIPLE_DOUBLE_BONUS_RULES,
        }
    }

    pub fn pay_table(self) -> &'static [(Label, u32)] {
        match self {
            Variant::JacksOrBetter => JACKS_OR_BETTER_PAYS,
            Variant::DoubleBonus => DOUBLE_BONUS_PAYS,
            Variant::TripleDoubleBonus => TRIPLE_DOUBLE_BONUS_PAYS,
        }
    }

    /// Labels this variant can produce, in payout-table order.
    pub fn labels(self) -> impl Iterator<Item = Label> {
        self.pay_table().iter().map(|&(label, _)| label)
    }

    /// Base multiplier of the bet denomination, `None` when `label` is not in
    /// this variant's own table.
    pub fn base_multiplier(self, label: Label) -> Option<u32> {
        self.pay_table()
            .iter()
            .find(|&&(l, _)| l == label)
            .map(|&(_, pays)| pays)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Variant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "job" | "jacks-or-better" => Ok(Variant::JacksOrBetter),
            "db" | "double-bonus" => Ok(Variant::DoubleBonus),
            "tdb" | "triple-double-bonus" => Ok(Variant::TripleDoubleBonus),
            other => Err(GameError::UnknownVariant(other.to_string())),
        }
    }
}

/// `table[variant][label] * bet * multiplier`, zero for a losing or
/// unpayable hand.
pub fn payout(variant: Variant, label: Option<Label>, bet: f64, multiplier: u32) -> f64 {
    label
        .and_then(|l| variant.base_multiplier(l))
        .map_or(0.0, |pays| f64::from(pays) * bet * f64::from(multiplier))
}
