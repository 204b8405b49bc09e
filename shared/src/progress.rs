//! Weight progress analysis
//!
//! Reduces the weight log to a single weekly-change figure between the first
//! and the last logged day.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Weight samples keyed by calendar date; one sample per date
pub type WeightEntries = BTreeMap<NaiveDate, f64>;

/// Minimum span, in weeks, before a trend is reported
const MIN_TREND_WEEKS: f64 = 0.5;

/// Result of analyzing the weight log
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightTrend {
    /// Fewer than two samples
    NoData,
    /// Samples span less than half a week
    InsufficientData,
    /// Average change per week in kg
    Weekly(f64),
}

impl WeightTrend {
    /// Weekly change in kg when a trend is available
    pub fn weekly_change(&self) -> Option<f64> {
        match self {
            WeightTrend::Weekly(kg) => Some(*kg),
            _ => None,
        }
    }
}

impl fmt::Display for WeightTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightTrend::NoData => f.write_str("No data"),
            WeightTrend::InsufficientData => f.write_str("Insufficient data"),
            // one decimal, ties away from zero; no leading "+" on gains
            WeightTrend::Weekly(kg) => {
                let tenths = (kg.abs() * 10.0).round() / 10.0;
                let sign = if *kg < 0.0 { "-" } else { "" };
                write!(f, "{sign}{tenths:.1}kg")
            }
        }
    }
}

/// Compute the average weekly weight change across the whole log
pub fn analyze_weight_trend(entries: &WeightEntries) -> WeightTrend {
    if entries.len() < 2 {
        return WeightTrend::NoData;
    }

    // BTreeMap iterates in ascending date order
    let (Some((first_date, first_weight)), Some((last_date, last_weight))) =
        (entries.iter().next(), entries.iter().next_back())
    else {
        return WeightTrend::NoData;
    };

    let weeks = (*last_date - *first_date).num_days() as f64 / 7.0;
    if weeks < MIN_TREND_WEEKS {
        return WeightTrend::InsufficientData;
    }

    WeightTrend::Weekly((last_weight - first_weight) / weeks)
}

/// Display string stored as `weightChange` on the user document
pub fn weekly_weight_change(entries: &WeightEntries) -> String {
    analyze_weight_trend(entries).to_string()
}

/// Most recent logged weight
pub fn latest_weight(entries: &WeightEntries) -> Option<(NaiveDate, f64)> {
    entries.iter().next_back().map(|(d, w)| (*d, *w))
}
