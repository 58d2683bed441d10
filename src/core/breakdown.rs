use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::derived::{Amounted, Percentage, proportion_of_total};

/// Reporting window of a sub-entity breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownPeriod {
    #[default]
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
}

impl BreakdownPeriod {
    pub const ALL: [Self; 4] = [Self::Today, Self::ThisWeek, Self::ThisMonth, Self::ThisYear];

    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Today => "今日",
            Self::ThisWeek => "本周",
            Self::ThisMonth => "本月",
            Self::ThisYear => "今年",
        }
    }
}

/// One entity's contribution inside a breakdown (a channel of a merchant, or a
/// merchant of a channel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub name: String,
    pub amount: Decimal,
    pub count: u64,
}

impl BreakdownItem {
    #[must_use]
    pub fn new(name: impl Into<String>, amount: Decimal, count: u64) -> Self {
        Self {
            name: name.into(),
            amount,
            count,
        }
    }
}

impl Amounted for BreakdownItem {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub name: String,
    pub amount: Decimal,
    pub count: u64,
    pub share: Percentage,
}

/// Pairs every item with its share of the breakdown total.
#[must_use]
pub fn breakdown_rows(items: &[BreakdownItem]) -> Vec<BreakdownRow> {
    let shares = proportion_of_total(items);
    items
        .iter()
        .zip(shares)
        .map(|(item, share)| BreakdownRow {
            name: item.name.clone(),
            amount: item.amount,
            count: item.count,
            share,
        })
        .collect()
}
