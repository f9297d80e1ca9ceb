//! Daily scoring: one pass per date, no state carried between calls.

use crate::calendar::day_pillar;
use crate::conditions::{annual_relation, hidden_in_chart, is_rooted, is_void, AnnualRelation};
use crate::pillar::{MovablePillars, NatalChart, Pillar};
use crate::ten_gods::{ten_god, Category, TenGod};
use crate::tier::StrategyTier;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BASE_SCORE: i32 = 50;

const ANNUAL_CLASH_PENALTY: i32 = 35;
const WEALTH_STAR_BONUS: i32 = 30;
const ROB_WEALTH_PENALTY: i32 = 20;
const WEALTH_ROOT_BONUS: i32 = 25;
const OUTPUT_WEALTH_BONUS: i32 = 15;
const OFFICER_BONUS: i32 = 40;
const SEAL_BONUS: i32 = 25;
const OVERWHELM_PENALTY: i32 = 25;
const RESOURCE_BONUS: i32 = 30;
const VOID_PENALTY: i32 = 20;
const DOMINANT_WEIGHT: f64 = 0.85;
const MINOR_WEIGHT: f64 = 0.15;

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    DayOffendsYearSovereign,
    SovereignAndDayCoincide,
    WealthStar,
    OfficerStar,
    SealTempersAuthority,
    AuthorityOverwhelms,
    ResourceSeal,
    VoidDay,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::DayOffendsYearSovereign => "Day Offends Year Sovereign",
            Tag::SovereignAndDayCoincide => "Sovereign and Day Coincide",
            Tag::WealthStar => "Wealth Star",
            Tag::OfficerStar => "Officer Star",
            Tag::SealTempersAuthority => "Seal Tempers Authority",
            Tag::AuthorityOverwhelms => "Authority Overwhelms",
            Tag::ResourceSeal => "Resource Seal",
            Tag::VoidDay => "Void Day",
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            Tag::DayOffendsYearSovereign => "日犯歲君",
            Tag::SovereignAndDayCoincide => "歲日並臨",
            Tag::WealthStar => "財星",
            Tag::OfficerStar => "官星",
            Tag::SealTempersAuthority => "殺印",
            Tag::AuthorityOverwhelms => "官殺",
            Tag::ResourceSeal => "印綬",
            Tag::VoidDay => "空亡",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// DayRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub pillar: Pillar,
    /// 0..=100
    pub wealth_score: u32,
    /// 0..=100
    pub career_score: u32,
    pub main_score: f64,
    pub tags: Vec<Tag>,
    pub ten_god: TenGod,
    pub is_strong: bool,
    pub tier: StrategyTier,
}

impl DayRecord {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn category(&self) -> Category {
        self.ten_god.category()
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Score a single date against a natal chart and the active movable pillars.
pub fn evaluate(chart: &NatalChart, movable: &MovablePillars, date: NaiveDate) -> DayRecord {
    let record = score_pillar(chart, movable, date, day_pillar(date));
    tracing::debug!(
        %date,
        pillar = %record.pillar,
        wealth = record.wealth_score,
        career = record.career_score,
        main = record.main_score,
        tier = %record.tier,
        "evaluated day"
    );
    record
}

fn score_pillar(
    chart: &NatalChart,
    movable: &MovablePillars,
    date: NaiveDate,
    pillar: Pillar,
) -> DayRecord {
    let dm = chart.day_master();
    let mut tags = Vec::new();

    let adjustment = dm.age_adjustment();
    let mut wealth = BASE_SCORE + adjustment;
    let mut career = BASE_SCORE + adjustment;

    let is_strong = is_rooted(chart);

    match annual_relation(pillar, movable.annual) {
        Some(AnnualRelation::Clash) => {
            wealth -= ANNUAL_CLASH_PENALTY;
            career -= ANNUAL_CLASH_PENALTY;
            tags.push(Tag::DayOffendsYearSovereign);
        }
        Some(AnnualRelation::Coincide) => tags.push(Tag::SovereignAndDayCoincide),
        None => {}
    }

    let god = ten_god(dm, pillar.stem());
    let category = god.category();
    let wealth_dominant = category == Category::Wealth;
    let authority_dominant = category == Category::Authority;
    let resource_dominant = category == Category::Resource;

    if wealth_dominant {
        wealth += WEALTH_STAR_BONUS;
        tags.push(Tag::WealthStar);
        if chart
            .stems()
            .iter()
            .any(|&s| ten_god(dm, s) == TenGod::RobWealth)
        {
            wealth -= ROB_WEALTH_PENALTY;
        }
        if hidden_in_chart(chart, pillar.stem()) {
            wealth += WEALTH_ROOT_BONUS;
        }
    } else if category == Category::Output {
        wealth += OUTPUT_WEALTH_BONUS;
    }

    if authority_dominant {
        if is_strong {
            career += OFFICER_BONUS;
            tags.push(Tag::OfficerStar);
        } else if chart
            .stems()
            .iter()
            .any(|&s| ten_god(dm, s).category() == Category::Resource)
        {
            career += SEAL_BONUS;
            tags.push(Tag::SealTempersAuthority);
        } else {
            career -= OVERWHELM_PENALTY;
            tags.push(Tag::AuthorityOverwhelms);
        }
    }

    if resource_dominant {
        career += RESOURCE_BONUS;
        tags.push(Tag::ResourceSeal);
    }

    if is_void(chart, pillar.branch()) {
        wealth -= VOID_PENALTY;
        career -= VOID_PENALTY;
        tags.push(Tag::VoidDay);
    }

    let wealth = wealth.clamp(0, 100) as u32;
    let career = career.clamp(0, 100) as u32;
    let main_score = main_score(
        wealth,
        career,
        authority_dominant || resource_dominant,
        wealth_dominant,
        authority_dominant,
    );

    DayRecord {
        date,
        pillar,
        wealth_score: wealth,
        career_score: career,
        main_score,
        tags,
        ten_god: god,
        is_strong,
        tier: StrategyTier::from_score(main_score),
    }
}

/// Blend the two indices. Career weighting is checked before wealth weighting.
fn main_score(
    wealth: u32,
    career: u32,
    career_dominant: bool,
    wealth_dominant: bool,
    authority_dominant: bool,
) -> f64 {
    let (w, c) = (wealth as f64, career as f64);
    if career_dominant && !wealth_dominant {
        c * DOMINANT_WEIGHT + w * MINOR_WEIGHT
    } else if wealth_dominant && !authority_dominant {
        w * DOMINANT_WEIGHT + c * MINOR_WEIGHT
    } else {
        (w + c) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date;
    use crate::symbols::Stem;
    use chrono::Duration;
    use std::collections::HashSet;

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    fn chart(pillars: [&str; 4]) -> NatalChart {
        NatalChart::new(p(pillars[0]), p(pillars[1]), p(pillars[2]), p(pillars[3]))
    }

    fn stock_chart() -> NatalChart {
        chart(["丙寅", "庚子", "庚申", "壬子"])
    }

    fn movable(annual: &str) -> MovablePillars {
        MovablePillars::new(p("乙未"), p(annual))
    }

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wealth_day_with_root_in_chart() {
        // 甲戌 for a 庚 Day Master: Indirect Wealth, 甲 hidden in 寅.
        let r = evaluate(&stock_chart(), &movable("丙午"), date("2024-03-11"));
        assert_eq!(r.pillar.to_string(), "甲戌");
        assert_eq!(r.ten_god, TenGod::IndirectWealth);
        assert_eq!(r.wealth_score, 90);
        assert_eq!(r.career_score, 35);
        assert!(close(r.main_score, 0.85 * 90.0 + 0.15 * 35.0));
        assert_eq!(r.tags, vec![Tag::WealthStar]);
        assert_eq!(r.tier, StrategyTier::Engage);
        assert!(r.is_strong);
    }

    #[test]
    fn rob_wealth_in_chart_cuts_wealth_star() {
        // 甲 Day Master with 乙 in the year: Rob Wealth in the natal stems.
        // 戊辰 is Indirect Wealth and 戊 is hidden in 寅.
        let c = chart(["乙丑", "丙寅", "甲子", "庚午"]);
        let r = evaluate(&c, &movable("乙丑"), date("2024-03-05"));
        assert_eq!(r.pillar.to_string(), "戊辰");
        assert_eq!(r.ten_god, TenGod::IndirectWealth);
        assert_eq!(r.wealth_score, 60 + 30 - 20 + 25);
        assert_eq!(r.career_score, 60);
        assert!(close(r.main_score, 89.75));
        assert_eq!(r.tags, vec![Tag::WealthStar]);
        assert_eq!(r.tier, StrategyTier::Advance);

        // Same day without the rival stem: no penalty.
        let clean = chart(["丙寅", "丙寅", "甲子", "庚午"]);
        let r = evaluate(&clean, &movable("乙丑"), date("2024-03-05"));
        assert_eq!(r.wealth_score, 100);
    }

    #[test]
    fn wealth_day_without_root_in_chart() {
        // 乙亥 for a 庚 Day Master: Direct Wealth, but 乙 is hidden in none
        // of 寅 子 申 子.
        let r = evaluate(&stock_chart(), &movable("丙午"), date("2024-03-12"));
        assert_eq!(r.pillar.to_string(), "乙亥");
        assert_eq!(r.ten_god, TenGod::DirectWealth);
        assert!(!hidden_in_chart(&stock_chart(), Stem::Yi));
        assert_eq!(r.wealth_score, 35 + 30);
        assert_eq!(r.career_score, 35);
        assert!(close(r.main_score, 60.5));
        assert_eq!(r.tags, vec![Tag::WealthStar]);
        assert_eq!(r.tier, StrategyTier::Observe);
    }

    #[test]
    fn wealth_and_void_stack() {
        let r = evaluate(&stock_chart(), &movable("丙午"), date("2024-03-01"));
        assert_eq!(r.pillar.to_string(), "甲子");
        assert_eq!(r.wealth_score, 70);
        assert_eq!(r.career_score, 15);
        assert_eq!(r.tags, vec![Tag::WealthStar, Tag::VoidDay]);
        assert!(close(r.main_score, 61.75));
        assert_eq!(r.tier, StrategyTier::Observe);
    }

    #[test]
    fn strong_day_master_takes_officer_star() {
        let r = evaluate(&stock_chart(), &movable("乙丑"), date("2024-03-03"));
        assert_eq!(r.pillar.to_string(), "丙寅");
        assert_eq!(r.ten_god, TenGod::SevenKillings);
        assert_eq!((r.wealth_score, r.career_score), (35, 75));
        assert_eq!(r.tags, vec![Tag::OfficerStar]);
        assert!(close(r.main_score, 69.0));
    }

    #[test]
    fn resource_day() {
        let r = evaluate(&stock_chart(), &movable("丙午"), date("2024-03-05"));
        assert_eq!(r.ten_god, TenGod::IndirectResource);
        assert_eq!((r.wealth_score, r.career_score), (35, 65));
        assert_eq!(r.tags, vec![Tag::ResourceSeal]);
        assert!(close(r.main_score, 60.5));
    }

    #[test]
    fn output_day_adds_wealth_only() {
        let r = evaluate(&stock_chart(), &movable("丙午"), date("2024-03-09"));
        assert_eq!(r.ten_god, TenGod::EatingGod);
        assert_eq!((r.wealth_score, r.career_score), (50, 35));
        assert!(r.tags.is_empty());
        assert!(close(r.main_score, 42.5));
        assert_eq!(r.tier, StrategyTier::Withdraw);
    }

    #[test]
    fn rob_wealth_and_hurting_officer_are_not_wealth_or_authority() {
        let rob = evaluate(&stock_chart(), &movable("丙午"), date("2024-03-08"));
        assert_eq!(rob.ten_god, TenGod::RobWealth);
        assert!(!rob.has_tag(Tag::WealthStar));
        assert_eq!(rob.wealth_score, 35);

        let hurt = evaluate(&stock_chart(), &movable("丙午"), date("2024-03-10"));
        assert_eq!(hurt.ten_god, TenGod::HurtingOfficer);
        assert!(!hurt.has_tag(Tag::OfficerStar));
        assert_eq!(hurt.career_score, 35);
    }

    #[test]
    fn annual_clash_costs_thirty_five_each() {
        // Wood yang Day Master; 2024-03-01 is 甲子, which clashes 庚午.
        let c = chart(["戊辰", "丙寅", "甲子", "庚午"]);
        let day = date("2024-03-01");
        let calm = evaluate(&c, &movable("乙丑"), day);
        let clash = evaluate(&c, &movable("庚午"), day);
        assert_eq!(calm.wealth_score, 60);
        assert_eq!(calm.career_score, 60);
        assert_eq!(clash.wealth_score, calm.wealth_score - 35);
        assert_eq!(clash.career_score, calm.career_score - 35);
        assert!(clash.has_tag(Tag::DayOffendsYearSovereign));
        assert!(!calm.has_tag(Tag::DayOffendsYearSovereign));
    }

    #[test]
    fn coincidence_tags_without_changing_scores() {
        let c = chart(["戊辰", "丙寅", "甲子", "庚午"]);
        let day = date("2024-03-01");
        let calm = evaluate(&c, &movable("乙丑"), day);
        let same = evaluate(&c, &movable("甲子"), day);
        assert_eq!(same.tags, vec![Tag::SovereignAndDayCoincide]);
        assert_eq!(same.wealth_score, calm.wealth_score);
        assert_eq!(same.career_score, calm.career_score);
    }

    #[test]
    fn weak_day_master_is_overwhelmed_by_authority() {
        // 甲 has no root and no Resource stem in the chart.
        let c = chart(["戊辰", "丙午", "甲子", "丙申"]);
        let r = evaluate(&c, &movable("乙丑"), date("2024-03-07"));
        assert_eq!(r.pillar.to_string(), "庚午");
        assert_eq!(r.ten_god, TenGod::SevenKillings);
        assert!(!r.is_strong);
        assert_eq!(r.career_score, 60 - 25);
        assert_eq!(r.wealth_score, 60);
        assert_eq!(r.tags, vec![Tag::AuthorityOverwhelms]);
        assert!(close(r.main_score, 0.85 * 35.0 + 0.15 * 60.0));
    }

    #[test]
    fn resource_stem_tempers_authority() {
        let c = chart(["戊辰", "丙午", "甲子", "壬申"]);
        let r = evaluate(&c, &movable("乙丑"), date("2024-03-07"));
        assert_eq!(r.career_score, 85);
        assert_eq!(r.tags, vec![Tag::SealTempersAuthority]);
    }

    #[test]
    fn scores_clamp_to_zero() {
        // 壬子 clashes 丙午 and is void for 庚申.
        let r = evaluate(&stock_chart(), &movable("丙午"), date("2024-02-18"));
        assert_eq!(r.pillar.to_string(), "壬子");
        assert_eq!((r.wealth_score, r.career_score), (0, 0));
        assert_eq!(r.tags, vec![Tag::DayOffendsYearSovereign, Tag::VoidDay]);
        assert_eq!(r.tier, StrategyTier::Withdraw);
    }

    #[test]
    fn scores_clamp_to_hundred() {
        let c = chart(["戊辰", "丙寅", "甲子", "庚午"]);
        let r = evaluate(&c, &movable("乙丑"), date("2024-03-07"));
        assert_eq!(r.ten_god, TenGod::SevenKillings);
        assert_eq!(r.career_score, 100);
        assert_eq!(r.tier, StrategyTier::Advance);
    }

    #[test]
    fn every_day_stays_in_range_without_duplicate_tags() {
        let charts = [
            stock_chart(),
            chart(["戊辰", "丙午", "甲子", "丙申"]),
            chart(["癸亥", "癸亥", "癸亥", "癸亥"]),
        ];
        let mut d = date("2023-12-01");
        for _ in 0..120 {
            for c in &charts {
                let r = evaluate(c, &movable("丙午"), d);
                assert!(r.wealth_score <= 100 && r.career_score <= 100);
                assert!((0.0..=100.0).contains(&r.main_score));
                let unique: HashSet<Tag> = r.tags.iter().copied().collect();
                assert_eq!(unique.len(), r.tags.len());
                assert_eq!(r.tier, StrategyTier::from_score(r.main_score));
            }
            d += Duration::days(1);
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = evaluate(&stock_chart(), &movable("丙午"), date("2025-06-30"));
        let b = evaluate(&stock_chart(), &movable("丙午"), date("2025-06-30"));
        assert_eq!(a, b);
    }

    #[test]
    fn decade_pillar_does_not_move_scores() {
        let day = date("2024-03-11");
        let a = evaluate(&stock_chart(), &MovablePillars::new(p("乙未"), p("丙午")), day);
        let b = evaluate(&stock_chart(), &MovablePillars::new(p("戊戌"), p("丙午")), day);
        assert_eq!(a, b);
    }

    #[test]
    fn main_score_precedence() {
        assert!(close(main_score(40, 80, true, false, true), 74.0));
        assert!(close(main_score(80, 40, false, true, false), 74.0));
        // Both flags set: career weighting is skipped, then wealth weighting
        // is skipped too because authority is set, leaving the midpoint.
        assert!(close(main_score(80, 40, true, true, true), 60.0));
        assert!(close(main_score(80, 40, false, false, false), 60.0));
    }

    #[test]
    fn minor_weight_is_exact() {
        // 0.85 * 42 + 0.15 * 62 lands just under 45 in floating point.
        let main = main_score(62, 42, true, false, true);
        assert_eq!(main, 42.0 * 0.85 + 62.0 * 0.15);
        assert!(main < 45.0);
        assert_eq!(StrategyTier::from_score(main), StrategyTier::Withdraw);
    }
}
