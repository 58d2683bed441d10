use std::fmt;

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ViewError, ViewResult};

/// Stable identifier of a record inside one dataset snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Merchant,
    Channel,
}

/// Named sub-channel a record attributes part of its revenue to.
///
/// `amount`/`count` stay `None` unless the host supplies real breakdown
/// figures; views then fall back to fixed attribution fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubChannel {
    pub name: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl SubChannel {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: None,
            count: None,
        }
    }

    #[must_use]
    pub fn with_figures(mut self, amount: Decimal, count: u64) -> Self {
        self.amount = Some(amount);
        self.count = Some(count);
        self
    }
}

/// Merchant or payment-channel row as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub total_payments: Decimal,
    pub transaction_count: u64,
    pub success_rate: f64,
    pub growth_rate: f64,
    #[serde(default)]
    pub sub_channels: SmallVec<[SubChannel; 2]>,
}

impl Record {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        total_payments: Decimal,
        transaction_count: u64,
    ) -> ViewResult<Self> {
        if total_payments.is_sign_negative() && !total_payments.is_zero() {
            return Err(ViewError::InvalidData(format!(
                "record {id} total payments must be >= 0"
            )));
        }

        Ok(Self {
            id,
            name: name.into(),
            total_payments,
            transaction_count,
            success_rate: 100.0,
            growth_rate: 0.0,
            sub_channels: SmallVec::new(),
        })
    }

    pub fn with_rates(mut self, success_rate: f64, growth_rate: f64) -> ViewResult<Self> {
        if !success_rate.is_finite() || !(0.0..=100.0).contains(&success_rate) {
            return Err(ViewError::InvalidData(format!(
                "record {} success rate must be within 0..=100",
                self.id
            )));
        }
        if !growth_rate.is_finite() {
            return Err(ViewError::InvalidData(format!(
                "record {} growth rate must be finite",
                self.id
            )));
        }

        self.success_rate = success_rate;
        self.growth_rate = growth_rate;
        Ok(self)
    }

    #[must_use]
    pub fn with_sub_channel(mut self, sub_channel: SubChannel) -> Self {
        self.sub_channels.push(sub_channel);
        self
    }

    /// Average ticket size, or `None` for a record without transactions.
    #[must_use]
    pub fn average_ticket(&self) -> Option<Decimal> {
        if self.transaction_count == 0 {
            return None;
        }
        self.total_payments
            .checked_div(Decimal::from(self.transaction_count))
    }
}

/// Text attribute the table search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    #[default]
    Name,
    PrimaryChannel,
    SecondaryChannel,
}

impl SearchField {
    #[must_use]
    pub fn text(self, record: &Record) -> Option<&str> {
        match self {
            Self::Name => Some(record.name.as_str()),
            Self::PrimaryChannel => record.sub_channels.first().map(|sub| sub.name.as_str()),
            Self::SecondaryChannel => record.sub_channels.get(1).map(|sub| sub.name.as_str()),
        }
    }
}

/// Sortable table column of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordColumn {
    Name,
    TotalPayments,
    TransactionCount,
    SuccessRate,
    GrowthRate,
}

impl RecordColumn {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::TotalPayments,
        Self::TransactionCount,
        Self::SuccessRate,
        Self::GrowthRate,
    ];

    #[must_use]
    pub fn key(self, record: &Record) -> SortKey {
        match self {
            Self::Name => SortKey::Text(record.name.clone()),
            Self::TotalPayments => SortKey::Amount(record.total_payments),
            Self::TransactionCount => SortKey::Count(record.transaction_count),
            Self::SuccessRate => SortKey::Rate(OrderedFloat(record.success_rate)),
            Self::GrowthRate => SortKey::Rate(OrderedFloat(record.growth_rate)),
        }
    }
}

/// Orderable value extracted from a record column.
///
/// A single column always yields the same variant. Comparing different
/// variants is a caller contract violation; the derived order then falls back
/// to declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    Text(String),
    Amount(Decimal),
    Count(u64),
    Rate(OrderedFloat<f64>),
}
