use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

use super::granularity::SeriesPair;
use super::record::Record;

/// Implied transaction counts for a monetary series.
pub fn derive_count(amounts: &[f64], average_ticket: f64) -> ViewResult<Vec<f64>> {
    validate_average_ticket(average_ticket)?;
    Ok(amounts.iter().map(|amount| amount / average_ticket).collect())
}

/// Count pair implied by an amount pair, sharing its labels.
pub fn derive_count_pair(amounts: &SeriesPair, average_ticket: f64) -> ViewResult<SeriesPair> {
    validate_average_ticket(average_ticket)?;
    Ok(amounts.map_values(|amount| amount / average_ticket))
}

fn validate_average_ticket(average_ticket: f64) -> ViewResult<()> {
    if !average_ticket.is_finite() || average_ticket <= 0.0 {
        return Err(ViewError::InvalidData(
            "average ticket must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Anything carrying a monetary amount that can be compared against a total.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

impl Amounted for Decimal {
    fn amount(&self) -> Decimal {
        *self
    }
}

impl Amounted for Record {
    fn amount(&self) -> Decimal {
        self.total_payments
    }
}

/// Share of a total, rounded to two decimals.
///
/// `Undefined` marks a share taken against an all-zero total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Percentage {
    Defined(Decimal),
    Undefined,
}

impl Percentage {
    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }

    #[must_use]
    pub fn value(self) -> Option<Decimal> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// Lossy projection for renderers; `Undefined` becomes NaN.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.value()
            .and_then(|value| value.to_f64())
            .unwrap_or(f64::NAN)
    }
}

/// Each item's percentage of the summed amount of all items.
///
/// The total is taken once per call. When it is zero, or too large to
/// represent, every share is [`Percentage::Undefined`]. Shares divide before
/// scaling to percent, so any representable share stays defined.
#[must_use]
pub fn proportion_of_total<T: Amounted>(items: &[T]) -> Vec<Percentage> {
    let total = items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.amount()));
    let Some(total) = total.filter(|total| !total.is_zero()) else {
        return vec![Percentage::Undefined; items.len()];
    };

    items
        .iter()
        .map(|item| {
            item.amount()
                .checked_div(total)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map_or(Percentage::Undefined, |share| {
                    Percentage::Defined(
                        share.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                    )
                })
        })
        .collect()
}

/// Revenue attributed to one named sub-channel of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributedShare {
    pub name: String,
    pub amount: Decimal,
    pub count: u64,
    /// `true` when the figures come from a fixed fraction rather than data.
    pub estimated: bool,
}

/// Per-sub-channel amount and count for `record`.
///
/// Sub-channels with real figures report them as-is. The rest take the
/// fraction at their position in `fractions` (primary first) of the record's
/// totals; sub-channels beyond the fraction list are omitted.
#[must_use]
pub fn attributed_shares(record: &Record, fractions: &[Decimal]) -> Vec<AttributedShare> {
    record
        .sub_channels
        .iter()
        .enumerate()
        .filter_map(|(position, sub)| match (sub.amount, sub.count) {
            (Some(amount), Some(count)) => Some(AttributedShare {
                name: sub.name.clone(),
                amount,
                count,
                estimated: false,
            }),
            _ => {
                let fraction = *fractions.get(position)?;
                let count = (Decimal::from(record.transaction_count) * fraction)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u64()?;
                let amount = record.total_payments.checked_mul(fraction)?;
                Some(AttributedShare {
                    name: sub.name.clone(),
                    amount,
                    count,
                    estimated: true,
                })
            }
        })
        .collect()
}
