use crate::calendar::{days_in_month, leading_blanks, month_label, month_start};
use crate::engine::{evaluate, DayRecord};
use crate::error::{BaziError, Result};
use crate::pillar::{MovablePillars, NatalChart};
use crate::ten_gods::Category;
use crate::tier::StrategyTier;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MonthProjection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthProjection {
    pub year: i32,
    pub month: u32,
    /// e.g. "March 2024"
    pub label: String,
    /// Empty cells before day 1 in a Sunday-first grid.
    pub leading_blanks: u32,
    pub days: Vec<DayRecord>,
}

/// Run the engine over every day of a month, in calendar order.
pub fn project_month(
    chart: &NatalChart,
    movable: &MovablePillars,
    year: i32,
    month: u32,
) -> Result<MonthProjection> {
    let start = month_start(year, month)?;
    let count = days_in_month(year, month)?;
    let days: Vec<DayRecord> = (0..count)
        .map(|i| evaluate(chart, movable, start + Duration::days(i as i64)))
        .collect();

    tracing::debug!(year, month, days = days.len(), "projected month");

    Ok(MonthProjection {
        year,
        month,
        label: month_label(year, month)?,
        leading_blanks: leading_blanks(year, month)?,
        days,
    })
}

impl MonthProjection {
    /// Days matching a key-date filter, in calendar order.
    pub fn key_dates(&self, filter: KeyDateFilter) -> Vec<&DayRecord> {
        self.days.iter().filter(|d| filter.matches(d)).collect()
    }
}

// ---------------------------------------------------------------------------
// KeyDateFilter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyDateFilter {
    Tier(StrategyTier),
    Authority,
    Resource,
    Wealth,
}

impl KeyDateFilter {
    pub fn matches(self, day: &DayRecord) -> bool {
        match self {
            KeyDateFilter::Tier(tier) => day.tier == tier,
            KeyDateFilter::Authority => day.category() == Category::Authority,
            KeyDateFilter::Resource => day.category() == Category::Resource,
            KeyDateFilter::Wealth => day.category() == Category::Wealth,
        }
    }
}

impl fmt::Display for KeyDateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyDateFilter::Tier(tier) => write!(f, "{tier}"),
            KeyDateFilter::Authority => f.write_str("authority"),
            KeyDateFilter::Resource => f.write_str("resource"),
            KeyDateFilter::Wealth => f.write_str("wealth"),
        }
    }
}

impl std::str::FromStr for KeyDateFilter {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "authority" => Ok(KeyDateFilter::Authority),
            "resource" => Ok(KeyDateFilter::Resource),
            "wealth" => Ok(KeyDateFilter::Wealth),
            other => other
                .parse::<StrategyTier>()
                .map(KeyDateFilter::Tier)
                .map_err(|_| BaziError::InvalidFilter(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
