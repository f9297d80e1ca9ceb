//! Chart conditions: rootedness, annual clash, and void branches.

use crate::pillar::{NatalChart, Pillar};
use crate::symbols::{Branch, Stem};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rootedness
// ---------------------------------------------------------------------------

/// True when the Day Master stem is hidden in the Month branch or any other
/// natal branch. Evaluated against the natal chart only.
pub fn is_rooted(chart: &NatalChart) -> bool {
    let dm = chart.day_master();
    chart.month.branch().hides(dm) || chart.branches().iter().any(|b| b.hides(dm))
}

/// True when `stem` is hidden in any natal branch.
pub fn hidden_in_chart(chart: &NatalChart, stem: Stem) -> bool {
    chart.branches().iter().any(|b| b.hides(stem))
}

// ---------------------------------------------------------------------------
// Annual pillar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnualRelation {
    /// Stem and branch both clash the annual pillar.
    Clash,
    /// Same stem and same branch as the annual pillar.
    Coincide,
}

/// Relation between a daily pillar and the annual pillar, if any.
///
/// A stem-only or branch-only clash is not a clash. The two outcomes are
/// mutually exclusive because no stem clashes itself.
pub fn annual_relation(day: Pillar, annual: Pillar) -> Option<AnnualRelation> {
    let stem_clash = day.stem().clash_partner() == Some(annual.stem());
    let branch_clash = day.branch().clash_partner() == annual.branch();
    if stem_clash && branch_clash {
        Some(AnnualRelation::Clash)
    } else if day == annual {
        Some(AnnualRelation::Coincide)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Void (Kong Wang)
// ---------------------------------------------------------------------------

/// The two void branches of the decade a pillar belongs to.
pub fn void_branches(pillar: Pillar) -> [Branch; 2] {
    let offset = (pillar.branch().index() + 12 - pillar.stem().index()) % 12;
    match offset {
        0 => [Branch::Xu, Branch::Hai],
        2 => [Branch::Zi, Branch::Chou],
        4 => [Branch::Yin, Branch::Mao],
        6 => [Branch::Chen, Branch::Si],
        8 => [Branch::Wu, Branch::Wei],
        10 => [Branch::Shen, Branch::You],
        odd => unreachable!("pillar {pillar} has odd void offset {odd}"),
    }
}

/// True when `branch` is void for the natal Day pillar.
pub fn is_void(chart: &NatalChart, branch: Branch) -> bool {
    void_branches(chart.day).contains(&branch)
}

// ---------------------------------------------------------------------------
// Auxiliary stars
// ---------------------------------------------------------------------------

pub fn is_noble_day(chart: &NatalChart, branch: Branch) -> bool {
    chart.day_master().noble_branches().contains(&branch)
}

pub fn is_blade_day(chart: &NatalChart, branch: Branch) -> bool {
    chart.day_master().blade_branch() == branch
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
