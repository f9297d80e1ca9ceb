//! Single-day reading: the scored record plus static advisory text.

use crate::conditions::{is_blade_day, is_noble_day};
use crate::engine::{evaluate, DayRecord};
use crate::pillar::{MovablePillars, NatalChart};
use crate::symbols::Element;
use crate::ten_gods::Category;
use crate::tier::{wisdom_for, Wisdom};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSection {
    pub title: String,
    pub content: String,
    pub impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enhancement {
    pub color: &'static str,
    pub accessory: &'static str,
    pub action: &'static str,
}

impl Enhancement {
    pub fn for_element(element: Element) -> Enhancement {
        match element {
            Element::Wood => Enhancement {
                color: "green",
                accessory: "wooden ornaments",
                action: "plan new ventures, apply for positions",
            },
            Element::Fire => Enhancement {
                color: "red, purple",
                accessory: "glossy accessories",
                action: "promote your work, network and entertain",
            },
            Element::Earth => Enhancement {
                color: "yellow, brown",
                accessory: "ceramics or a carved seal",
                action: "consolidate, sign agreements, tidy internal affairs",
            },
            Element::Metal => Enhancement {
                color: "white, gold",
                accessory: "a metal watch",
                action: "make firm decisions, set rules",
            },
            Element::Water => Enhancement {
                color: "black, blue",
                accessory: "pearls or silver",
                action: "research the market, negotiate",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayDetail {
    pub record: DayRecord,
    pub summary: String,
    pub sections: Vec<AnalysisSection>,
    pub wisdom: Wisdom,
    pub enhancement: Enhancement,
    pub noble_day: bool,
    pub blade_day: bool,
}

pub fn day_detail(chart: &NatalChart, movable: &MovablePillars, date: NaiveDate) -> DayDetail {
    let record = evaluate(chart, movable, date);
    let wisdom = wisdom_for(record.main_score, record.day()).clone();

    let summary = if record.tags.is_empty() {
        format!("{} day: calm and balanced", record.pillar)
    } else {
        let tags: Vec<&str> = record.tags.iter().map(|t| t.label()).collect();
        format!("{} day: {}", record.pillar, tags.join(", "))
    };

    let sections = vec![
        wealth_section(&record),
        career_section(&record),
        AnalysisSection {
            title: format!("{}: guidance", wisdom.source),
            content: format!("{} - {}", wisdom.original, wisdom.translation),
            impact: "Self-cultivation".to_string(),
        },
    ];

    let branch = record.pillar.branch();
    DayDetail {
        summary,
        sections,
        wisdom,
        enhancement: Enhancement::for_element(branch.element()),
        noble_day: is_noble_day(chart, branch),
        blade_day: is_blade_day(chart, branch),
        record,
    }
}

fn wealth_section(record: &DayRecord) -> AnalysisSection {
    let (content, impact) = if record.wealth_score > 75 {
        (
            "Wealth energy runs strong; favourable for closing deals and acquiring assets.",
            "Abundant",
        )
    } else {
        (
            "Wealth energy is steady; keep everyday spending in check.",
            "Steady",
        )
    };
    AnalysisSection {
        title: "Wealth Basis".to_string(),
        content: content.to_string(),
        impact: impact.to_string(),
    }
}

fn career_section(record: &DayRecord) -> AnalysisSection {
    let content = match record.category() {
        Category::Authority | Category::Resource if record.career_score > 65 => {
            "Officer and seal shine; favourable for taking charge, promotion, or carrying out decisions."
        }
        Category::Authority | Category::Resource => {
            "Career pressure is marked; speak with care and guard against criticism."
        }
        _ => "Career energy is steady; focus on routine business.",
    };
    AnalysisSection {
        title: "Career Dimension".to_string(),
        content: content.to_string(),
        impact: "Career reading".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
