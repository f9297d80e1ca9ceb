use crate::error::{BaziError, Result};
use crate::symbols::{Branch, Stem};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Pillar
// ---------------------------------------------------------------------------

/// A (stem, branch) pair naming one unit of time.
///
/// Only the sixty pairs whose stem and branch share polarity exist in the
/// sexagenary cycle; construction rejects the other sixty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPillar", into = "RawPillar")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

#[derive(Serialize, Deserialize)]
struct RawPillar {
    stem: Stem,
    branch: Branch,
}

impl TryFrom<RawPillar> for Pillar {
    type Error = BaziError;

    fn try_from(raw: RawPillar) -> Result<Self> {
        Pillar::new(raw.stem, raw.branch)
    }
}

impl From<Pillar> for RawPillar {
    fn from(p: Pillar) -> Self {
        RawPillar {
            stem: p.stem,
            branch: p.branch,
        }
    }
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Result<Self> {
        if stem.polarity() != branch.polarity() {
            return Err(BaziError::MismatchedPolarity {
                stem: stem.to_string(),
                branch: branch.to_string(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at a position of the sixty-cycle (0 = 甲子); wraps any integer.
    pub fn from_cycle(position: i64) -> Self {
        Self {
            stem: Stem::from_cycle(position),
            branch: Branch::from_cycle(position),
        }
    }

    pub fn stem(self) -> Stem {
        self.stem
    }

    pub fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the sixty-cycle, 0 = 甲子 .. 59 = 癸亥.
    pub fn cycle_index(self) -> usize {
        let s = self.stem.index();
        let b = self.branch.index();
        // Solve i ≡ s (mod 10), i ≡ b (mod 12) over 0..60.
        (0..60)
            .find(|i| i % 10 == s && i % 12 == b)
            .unwrap_or_else(|| unreachable!("pillar {self} has mismatched polarity"))
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl std::str::FromStr for Pillar {
    type Err = BaziError;

    /// Accepts `甲子`, `jia-zi`, `jia zi` or `jia,zi`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let (stem, branch) = match parts.as_slice() {
            [stem, branch] => (stem.parse::<Stem>()?, branch.parse::<Branch>()?),
            [single] if single.chars().count() == 2 => {
                let mut chars = single.chars();
                let (Some(a), Some(b)) = (chars.next(), chars.next()) else {
                    return Err(BaziError::InvalidPillar(s.to_string()));
                };
                (a.to_string().parse::<Stem>()?, b.to_string().parse::<Branch>()?)
            }
            _ => return Err(BaziError::InvalidPillar(s.to_string())),
        };
        Pillar::new(stem, branch)
    }
}

// ---------------------------------------------------------------------------
// NatalChart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

/// Four natal pillars in Year, Month, Day, Hour order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatalChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl NatalChart {
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Build a chart from parallel stem and branch columns.
    pub fn from_columns(stems: [Stem; 4], branches: [Branch; 4]) -> Result<Self> {
        Ok(Self {
            year: Pillar::new(stems[0], branches[0])?,
            month: Pillar::new(stems[1], branches[1])?,
            day: Pillar::new(stems[2], branches[2])?,
            hour: Pillar::new(stems[3], branches[3])?,
        })
    }

    /// The Day pillar's stem; every relationship is measured from it.
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub fn pillar(&self, role: PillarRole) -> Pillar {
        match role {
            PillarRole::Year => self.year,
            PillarRole::Month => self.month,
            PillarRole::Day => self.day,
            PillarRole::Hour => self.hour,
        }
    }

    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(Pillar::stem)
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(Pillar::branch)
    }
}

impl fmt::Display for NatalChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Parse four natal columns, e.g. "丙,庚,庚,壬", "bing geng geng ren" or the
/// compact "丙庚庚壬".
pub fn parse_columns<T>(s: &str) -> Result<[T; 4]>
where
    T: std::str::FromStr<Err = BaziError>,
{
    let trimmed = s.trim();
    let tokens: Vec<String> = if trimmed.contains(|c: char| c == ',' || c.is_whitespace()) {
        trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        trimmed.chars().map(String::from).collect()
    };
    if tokens.len() != 4 {
        return Err(BaziError::InvalidChart(format!(
            "expected 4 columns in '{s}', found {}",
            tokens.len()
        )));
    }
    let parsed = tokens
        .iter()
        .map(|t| t.parse::<T>())
        .collect::<Result<Vec<T>>>()?;
    parsed
        .try_into()
        .map_err(|_| BaziError::InvalidChart(s.to_string()))
}

// ---------------------------------------------------------------------------
// MovablePillars
// ---------------------------------------------------------------------------

/// The currently active decade (large-luck) and annual pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovablePillars {
    pub decade: Pillar,
    pub annual: Pillar,
}

impl MovablePillars {
    pub fn new(decade: Pillar, annual: Pillar) -> Self {
        Self { decade, annual }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
