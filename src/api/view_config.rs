use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{DatasetKind, RecordColumn, SearchField, SortDirection};
use crate::error::{ViewError, ViewResult};

/// Shared defaults handed to every view constructor.
///
/// This type is serializable so host applications can persist/load dashboard
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_sort_column")]
    pub default_sort_column: RecordColumn,
    #[serde(default)]
    pub default_sort_direction: SortDirection,
    #[serde(default)]
    pub search_field: SearchField,
    #[serde(default = "default_sort_column")]
    pub ranking_metric: RecordColumn,
    #[serde(default = "default_merchant_top_n")]
    pub merchant_top_n: usize,
    #[serde(default = "default_channel_top_n")]
    pub channel_top_n: usize,
    /// Divisor turning amount series into implied transaction counts.
    #[serde(default = "default_average_ticket")]
    pub average_ticket: f64,
    /// Scale of the ranking chart's baseline ("7-day average") series.
    #[serde(default = "default_ranking_baseline_factor")]
    pub ranking_baseline_factor: f64,
    /// Fixed revenue fractions for primary, secondary, ... sub-channels.
    #[serde(default = "default_attribution_fractions")]
    pub attribution_fractions: Vec<Decimal>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_sort_column: default_sort_column(),
            default_sort_direction: SortDirection::default(),
            search_field: SearchField::default(),
            ranking_metric: default_sort_column(),
            merchant_top_n: default_merchant_top_n(),
            channel_top_n: default_channel_top_n(),
            average_ticket: default_average_ticket(),
            ranking_baseline_factor: default_ranking_baseline_factor(),
            attribution_fractions: default_attribution_fractions(),
        }
    }
}

impl ViewConfig {
    /// Sets the table's initial sort column and direction.
    #[must_use]
    pub fn with_default_sort(mut self, column: RecordColumn, direction: SortDirection) -> Self {
        self.default_sort_column = column;
        self.default_sort_direction = direction;
        self
    }

    #[must_use]
    pub fn with_search_field(mut self, field: SearchField) -> Self {
        self.search_field = field;
        self
    }

    /// Sets the column the ranking chart orders records by.
    #[must_use]
    pub fn with_ranking_metric(mut self, column: RecordColumn) -> Self {
        self.ranking_metric = column;
        self
    }

    /// Sets how many leading records the ranking chart shows per dataset kind.
    #[must_use]
    pub fn with_top_n(mut self, kind: DatasetKind, n: usize) -> Self {
        match kind {
            DatasetKind::Merchant => self.merchant_top_n = n,
            DatasetKind::Channel => self.channel_top_n = n,
        }
        self
    }

    #[must_use]
    pub fn with_average_ticket(mut self, average_ticket: f64) -> Self {
        self.average_ticket = average_ticket;
        self
    }

    #[must_use]
    pub fn with_ranking_baseline_factor(mut self, factor: f64) -> Self {
        self.ranking_baseline_factor = factor;
        self
    }

    #[must_use]
    pub fn with_attribution_fractions(mut self, fractions: Vec<Decimal>) -> Self {
        self.attribution_fractions = fractions;
        self
    }

    #[must_use]
    pub fn top_n(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Merchant => self.merchant_top_n,
            DatasetKind::Channel => self.channel_top_n,
        }
    }

    pub fn validate(&self) -> ViewResult<()> {
        if self.merchant_top_n == 0 {
            return Err(ViewError::InvalidTopN {
                n: self.merchant_top_n,
            });
        }
        if self.channel_top_n == 0 {
            return Err(ViewError::InvalidTopN {
                n: self.channel_top_n,
            });
        }
        if !self.average_ticket.is_finite() || self.average_ticket <= 0.0 {
            return Err(ViewError::InvalidData(
                "average ticket must be finite and > 0".to_owned(),
            ));
        }
        if !self.ranking_baseline_factor.is_finite()
            || self.ranking_baseline_factor <= 0.0
            || self.ranking_baseline_factor > 1.0
        {
            return Err(ViewError::InvalidData(
                "ranking baseline factor must be within (0, 1]".to_owned(),
            ));
        }

        let mut fraction_sum = Decimal::ZERO;
        for fraction in &self.attribution_fractions {
            if fraction.is_sign_negative() || *fraction > Decimal::ONE {
                return Err(ViewError::InvalidData(
                    "attribution fractions must be within [0, 1]".to_owned(),
                ));
            }
            fraction_sum += *fraction;
        }
        if fraction_sum > Decimal::ONE {
            return Err(ViewError::InvalidData(format!(
                "attribution fractions must not sum above 1, got {fraction_sum}"
            )));
        }

        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ViewResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ViewError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_sort_column() -> RecordColumn {
    RecordColumn::TotalPayments
}

fn default_merchant_top_n() -> usize {
    10
}

fn default_channel_top_n() -> usize {
    5
}

fn default_average_ticket() -> f64 {
    200.0
}

fn default_ranking_baseline_factor() -> f64 {
    0.95
}

fn default_attribution_fractions() -> Vec<Decimal> {
    vec![Decimal::new(6, 1), Decimal::new(3, 1)]
}
