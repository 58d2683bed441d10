use serde::{Deserialize, Serialize};

use crate::core::{Granularity, SubjectKind};

/// Display labels of the four comparative series and the two value axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesCaptions {
    pub current_amount: String,
    pub current_count: String,
    pub baseline_amount: String,
    pub baseline_count: String,
    pub amount_axis: String,
    pub count_axis: String,
}

impl SeriesCaptions {
    fn with_prefixes(current: &str, baseline: &str, amount: &str, count: &str) -> Self {
        Self {
            current_amount: format!("{current}{amount}"),
            current_count: format!("{current}{count}"),
            baseline_amount: format!("{baseline}{amount}"),
            baseline_count: format!("{baseline}{count}"),
            amount_axis: format!("{amount} (元)"),
            count_axis: count.to_owned(),
        }
    }

    /// Captions of the top-N ranking chart.
    #[must_use]
    pub fn ranking() -> Self {
        Self::with_prefixes("", "7天平均", "交易金额", "交易数量")
    }

    /// Captions of a time-series chart for `subject` at `granularity`.
    ///
    /// The overview's yearly "平均" baseline has no recorded history behind
    /// it; its table is authored at 95% of each year's volume.
    #[must_use]
    pub fn time_series(subject: SubjectKind, granularity: Granularity) -> Self {
        match subject {
            SubjectKind::Merchant | SubjectKind::Channel => {
                Self::with_prefixes("当前", "平均", "交易额", "交易量")
            }
            SubjectKind::Overview => match granularity {
                Granularity::Hourly => Self::with_prefixes("", "7天平均", "交易额", "交易量"),
                Granularity::Daily => Self::with_prefixes("本周", "前7天平均", "交易额", "交易量"),
                Granularity::Weekly | Granularity::Monthly => {
                    Self::with_prefixes("本年", "上年同期", "交易额", "交易量")
                }
                Granularity::Yearly => Self::with_prefixes("", "平均", "交易额", "交易量"),
            },
        }
    }
}

/// Chart title prefix naming the subject, e.g. `商户 商户A 的`.
#[must_use]
pub fn subject_title_prefix(subject: SubjectKind, display_name: Option<&str>) -> String {
    match (subject, display_name) {
        (SubjectKind::Overview, _) | (_, None) => String::new(),
        (SubjectKind::Merchant, Some(name)) => format!("商户 {name} 的"),
        (SubjectKind::Channel, Some(name)) => format!("支付通道 {name} 的"),
    }
}
