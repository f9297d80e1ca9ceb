use crate::error::BaziError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StrategyTier
// ---------------------------------------------------------------------------

/// Four strategy bands over the main score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTier {
    Withdraw,
    Observe,
    Engage,
    Advance,
}

impl StrategyTier {
    pub fn all() -> &'static [StrategyTier] {
        &[
            StrategyTier::Advance,
            StrategyTier::Engage,
            StrategyTier::Observe,
            StrategyTier::Withdraw,
        ]
    }

    pub fn from_score(main_score: f64) -> StrategyTier {
        if main_score >= 85.0 {
            StrategyTier::Advance
        } else if main_score >= 65.0 {
            StrategyTier::Engage
        } else if main_score >= 45.0 {
            StrategyTier::Observe
        } else {
            StrategyTier::Withdraw
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyTier::Advance => "advance",
            StrategyTier::Engage => "engage",
            StrategyTier::Observe => "observe",
            StrategyTier::Withdraw => "withdraw",
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            StrategyTier::Advance => "攻",
            StrategyTier::Engage => "取",
            StrategyTier::Observe => "觀",
            StrategyTier::Withdraw => "避",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StrategyTier::Advance => {
                "Green light. Momentum is at its peak; make decisive moves."
            }
            StrategyTier::Engage => {
                "Steady progress. Resources are in place; carry plans through."
            }
            StrategyTier::Observe => {
                "Amber light. The situation is unsettled; put your own house in order."
            }
            StrategyTier::Withdraw => {
                "Red light. Pressure runs high; pull back and hold your ground."
            }
        }
    }
}

impl fmt::Display for StrategyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyTier {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        StrategyTier::all()
            .iter()
            .copied()
            .find(|t| t.hanzi() == s || t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaziError::InvalidTier(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Wisdom vault
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wisdom {
    pub source: &'static str,
    pub original: &'static str,
    pub translation: &'static str,
}

const LOW_SHELF: &[Wisdom] = &[Wisdom {
    source: "I Ching",
    original: "君子以恐懼修省。",
    translation: "Red light. Gather yourself today; stay still and no harm will come.",
}];

const MID_SHELF: &[Wisdom] = &[Wisdom {
    source: "The Great Learning",
    original: "知止而后有定。",
    translation: "Even ground. Knowing when to stop brings steadiness, and clarity follows.",
}];

const HIGH_SHELF: &[Wisdom] = &[Wisdom {
    source: "Tao Te Ching",
    original: "功遂身退，天之道也。",
    translation: "Green light. At the peak, stay humble and share; good fortune then lasts.",
}];

/// Quote for a day: the shelf follows the main score (low < 45, high > 84),
/// the entry follows the day of the month.
pub fn wisdom_for(main_score: f64, day_of_month: u32) -> &'static Wisdom {
    let shelf = if main_score < 45.0 {
        LOW_SHELF
    } else if main_score > 84.0 {
        HIGH_SHELF
    } else {
        MID_SHELF
    };
    &shelf[day_of_month as usize % shelf.len()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
