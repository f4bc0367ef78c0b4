use serde::{Deserialize, Serialize};
use crate::name::Gender;

/// An entry of the popularity ranking; the rank is implied by position.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularName {
    pub name_id: i64,
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "crate::lenient::number")]
    pub count: u64,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PopularNames {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    pub names: Vec<PopularName>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TrendingName {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "crate::lenient::number")]
    pub recent_count: u64,
    #[serde(default, deserialize_with = "crate::lenient::number")]
    pub older_count: u64,
    /// Growth in percent between the older and the recent period.
    #[serde(default, deserialize_with = "crate::lenient::number")]
    pub growth: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPeriod {
    pub from: i32,
    pub to: i32,
    pub compare_years: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TrendingNames {
    #[serde(default)]
    pub period: Option<TrendPeriod>,
    #[serde(default)]
    pub gender: Option<String>,
    pub names: Vec<TrendingName>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct GenderBreakdown {
    pub female: u64,
    pub male: u64,
    pub unisex: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyStatistics {
    pub total_records: u64,
    pub year_range: Option<YearRange>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub total_names: u64,
    pub breakdown: GenderBreakdown,
    pub yearly_statistics: YearlyStatistics,
}

/// Decorative badge assigned to a ranking position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Numbered(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendClass {
    Hot,
    Rising,
    Falling,
}

/// Thresholds used when classifying [`TrendingName`] entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendSettings {
    /// Growth percentage above which an entry is considered hot.
    pub hot_threshold: f64,
}

pub const DEFAULT_HOT_THRESHOLD: f64 = 50.0;
pub const DEFAULT_POPULAR_LIMIT: u32 = 20;
pub const DEFAULT_COMPARE_YEARS: u32 = 5;
pub const DEFAULT_TRENDING_LIMIT: u32 = 50;

mod impls;

pub use impls::bar_width;
