use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

use super::record::{DatasetKind, RecordId};

/// Time-bucketing resolution of a comparative series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    pub const ALL: [Self; 5] = [
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
    ];

    /// Display caption used in selectors and chart titles.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Hourly => "每小时",
            Self::Daily => "每天",
            Self::Weekly => "每周",
            Self::Monthly => "每月",
            Self::Yearly => "每年",
        }
    }

    /// Weekly data has no hand-authored table and is synthesized.
    #[must_use]
    pub fn is_synthesized(self) -> bool {
        matches!(self, Self::Weekly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Overview,
    Merchant,
    Channel,
}

impl From<DatasetKind> for SubjectKind {
    fn from(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::Merchant => Self::Merchant,
            DatasetKind::Channel => Self::Channel,
        }
    }
}

/// Entity a time-series view describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesSubject {
    /// Dashboard-wide aggregate across every merchant and channel.
    Overview,
    Merchant(RecordId),
    Channel(RecordId),
}

impl SeriesSubject {
    #[must_use]
    pub fn of(kind: DatasetKind, id: RecordId) -> Self {
        match kind {
            DatasetKind::Merchant => Self::Merchant(id),
            DatasetKind::Channel => Self::Channel(id),
        }
    }

    #[must_use]
    pub fn kind(self) -> SubjectKind {
        match self {
            Self::Overview => SubjectKind::Overview,
            Self::Merchant(_) => SubjectKind::Merchant,
            Self::Channel(_) => SubjectKind::Channel,
        }
    }
}

/// Current-vs-baseline values sharing one label axis.
///
/// `labels`, `current` and `baseline` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPair {
    labels: Vec<String>,
    current: Vec<f64>,
    baseline: Vec<f64>,
}

impl SeriesPair {
    pub fn new(labels: Vec<String>, current: Vec<f64>, baseline: Vec<f64>) -> ViewResult<Self> {
        for (series, values) in [("current", &current), ("baseline", &baseline)] {
            if values.len() != labels.len() {
                return Err(ViewError::SeriesLengthMismatch {
                    series: series.to_owned(),
                    expected: labels.len(),
                    actual: values.len(),
                });
            }
        }

        Ok(Self {
            labels,
            current,
            baseline,
        })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    #[must_use]
    pub fn baseline(&self) -> &[f64] {
        &self.baseline
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Builds a pair from sequences whose lengths are known to match.
    pub(crate) fn from_checked_parts(
        labels: Vec<String>,
        current: Vec<f64>,
        baseline: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(labels.len(), current.len());
        debug_assert_eq!(labels.len(), baseline.len());
        Self {
            labels,
            current,
            baseline,
        }
    }

    /// Applies `map` to both value sequences, keeping labels.
    pub(crate) fn map_values<F>(&self, map: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            labels: self.labels.clone(),
            current: self.current.iter().copied().map(&map).collect(),
            baseline: self.baseline.iter().copied().map(&map).collect(),
        }
    }
}

/// Category labels for `granularity`.
///
/// Yearly label counts depend on how much history the subject carries.
#[must_use]
pub fn granularity_labels(granularity: Granularity, subject: SubjectKind) -> Vec<String> {
    match granularity {
        Granularity::Hourly => (0..12).map(|step| format!("{:02}:00", step * 2)).collect(),
        Granularity::Daily => {
            let mut day = Weekday::Sun;
            (0..7)
                .map(|_| {
                    let label = weekday_label(day);
                    day = day.succ();
                    label.to_owned()
                })
                .collect()
        }
        Granularity::Weekly => (1..=52).map(|week| format!("第{week}周")).collect(),
        Granularity::Monthly => (1..=12).map(|month| format!("{month}月")).collect(),
        Granularity::Yearly => {
            let first_year = match subject {
                SubjectKind::Overview => 2017,
                SubjectKind::Merchant | SubjectKind::Channel => 2019,
            };
            (first_year..=2023).map(|year| year.to_string()).collect()
        }
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "周日",
        Weekday::Mon => "周一",
        Weekday::Tue => "周二",
        Weekday::Wed => "周三",
        Weekday::Thu => "周四",
        Weekday::Fri => "周五",
        Weekday::Sat => "周六",
    }
}
