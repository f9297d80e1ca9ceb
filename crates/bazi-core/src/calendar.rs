//! Fixed-epoch sexagenary day counting and calendar-month helpers.
//!
//! Day pillars are counted from a single anchor date rather than derived
//! from solar terms; the result is a pure function of the civil date.

use crate::error::{BaziError, Result};
use crate::pillar::Pillar;
use crate::symbols::{Branch, Stem};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Anchor
// ---------------------------------------------------------------------------

/// 2024-02-10, a 甲辰 day.
pub const ANCHOR_YMD: (i32, u32, u32) = (2024, 2, 10);

/// Branch offset that puts the anchor date on 辰.
pub const BRANCH_ALIGNMENT: i64 = 4;

pub fn anchor_date() -> NaiveDate {
    let (y, m, d) = ANCHOR_YMD;
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => unreachable!("anchor date {y}-{m}-{d} is a valid calendar date"),
    }
}

// ---------------------------------------------------------------------------
// Converter
// ---------------------------------------------------------------------------

/// The stem-branch pillar of a civil date.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let offset = (date - anchor_date()).num_days();
    let stem = Stem::from_cycle(offset);
    let branch = Branch::from_cycle(offset + BRANCH_ALIGNMENT);
    // offset and offset + 4 share parity, so the pair is always in the cycle.
    Pillar::new(stem, branch)
        .unwrap_or_else(|e| unreachable!("day pillar for {date} out of cycle: {e}"))
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

static DATE_RE: OnceLock<Regex> = OnceLock::new();
static MONTH_RE: OnceLock<Regex> = OnceLock::new();

fn date_re() -> &'static Regex {
    DATE_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

fn month_re() -> &'static Regex {
    MONTH_RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})$").unwrap())
}

/// Parse a `YYYY-MM-DD` date. No time of day or zone is involved, so the
/// result cannot drift across midnight.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if !date_re().is_match(s) {
        return Err(BaziError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| BaziError::InvalidDate(s.to_string()))
}

/// Parse a `YYYY-MM` month into `(year, month)`.
pub fn parse_year_month(s: &str) -> Result<(i32, u32)> {
    let s = s.trim();
    let caps = month_re()
        .captures(s)
        .ok_or_else(|| BaziError::InvalidDate(s.to_string()))?;
    let year: i32 = caps[1]
        .parse()
        .map_err(|_| BaziError::InvalidDate(s.to_string()))?;
    let month: u32 = caps[2]
        .parse()
        .map_err(|_| BaziError::InvalidDate(s.to_string()))?;
    month_start(year, month)?;
    Ok((year, month))
}

// ---------------------------------------------------------------------------
// Month helpers
// ---------------------------------------------------------------------------

pub fn month_start(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(BaziError::InvalidMonth { year, month })
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let start = month_start(year, month)?;
    let next = if month == 12 {
        month_start(year + 1, 1)?
    } else {
        month_start(year, month + 1)?
    };
    Ok((next - start).num_days() as u32)
}

/// Empty cells before day 1 in a Sunday-first week grid.
pub fn leading_blanks(year: i32, month: u32) -> Result<u32> {
    Ok(month_start(year, month)?.weekday().num_days_from_sunday())
}

/// Human-readable month label, e.g. `March 2024`.
pub fn month_label(year: i32, month: u32) -> Result<String> {
    Ok(month_start(year, month)?.format("%B %Y").to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
