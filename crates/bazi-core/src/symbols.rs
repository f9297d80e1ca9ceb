//! Closed symbol tables: the five elements, ten stems and twelve branches,
//! together with every fixed lookup keyed on them.

use crate::error::BaziError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub fn all() -> &'static [Element] {
        &[
            Element::Wood,
            Element::Fire,
            Element::Earth,
            Element::Metal,
            Element::Water,
        ]
    }

    /// The element this one generates: Wood→Fire→Earth→Metal→Water→Wood.
    pub fn produces(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one overcomes: Wood→Earth→Water→Fire→Metal→Wood.
    pub fn overcomes(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Element {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Element::all()
            .iter()
            .copied()
            .find(|e| e.hanzi() == s || e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaziError::InvalidElement(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Polarity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    fn from_index(index: usize) -> Polarity {
        if index % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

// ---------------------------------------------------------------------------
// Stem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    #[serde(alias = "甲")]
    Jia,
    #[serde(alias = "乙")]
    Yi,
    #[serde(alias = "丙")]
    Bing,
    #[serde(alias = "丁")]
    Ding,
    #[serde(alias = "戊")]
    Wu,
    #[serde(alias = "己")]
    Ji,
    #[serde(alias = "庚")]
    Geng,
    #[serde(alias = "辛")]
    Xin,
    #[serde(alias = "壬")]
    Ren,
    #[serde(alias = "癸")]
    Gui,
}

/// Stems in cyclic order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem at a cyclic position; any integer wraps into 0..10.
    pub fn from_cycle(position: i64) -> Stem {
        ALL_STEMS[position.rem_euclid(10) as usize]
    }

    pub fn element(self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    /// Even cycle positions are yang, odd are yin.
    pub fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Clash partner: 甲↔庚, 乙↔辛, 丙↔壬, 丁↔癸. The Earth stems have none.
    pub fn clash_partner(self) -> Option<Stem> {
        match self {
            Stem::Jia => Some(Stem::Geng),
            Stem::Geng => Some(Stem::Jia),
            Stem::Yi => Some(Stem::Xin),
            Stem::Xin => Some(Stem::Yi),
            Stem::Bing => Some(Stem::Ren),
            Stem::Ren => Some(Stem::Bing),
            Stem::Ding => Some(Stem::Gui),
            Stem::Gui => Some(Stem::Ding),
            Stem::Wu | Stem::Ji => None,
        }
    }

    /// Nobleman branches for this stem as Day Master.
    pub fn noble_branches(self) -> [Branch; 2] {
        match self {
            Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
            Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
            Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
            Stem::Ren | Stem::Gui => [Branch::Mao, Branch::Si],
            Stem::Xin => [Branch::Yin, Branch::Wu],
        }
    }

    /// Sheep Blade branch for this stem as Day Master.
    pub fn blade_branch(self) -> Branch {
        match self {
            Stem::Jia => Branch::Mao,
            Stem::Yi => Branch::Chen,
            Stem::Bing | Stem::Wu => Branch::Wu,
            Stem::Ding | Stem::Ji => Branch::Wei,
            Stem::Geng => Branch::You,
            Stem::Xin => Branch::Xu,
            Stem::Ren => Branch::Zi,
            Stem::Gui => Branch::Chou,
        }
    }

    /// Baseline shift applied to both indices when this stem is the Day Master.
    pub fn age_adjustment(self) -> i32 {
        match self {
            Stem::Jia | Stem::Yi => 10,
            Stem::Bing => -20,
            Stem::Ding => -15,
            Stem::Wu | Stem::Ji => 5,
            Stem::Geng => -15,
            Stem::Xin => -10,
            Stem::Ren => 20,
            Stem::Gui => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stem::Jia => "jia",
            Stem::Yi => "yi",
            Stem::Bing => "bing",
            Stem::Ding => "ding",
            Stem::Wu => "wu",
            Stem::Ji => "ji",
            Stem::Geng => "geng",
            Stem::Xin => "xin",
            Stem::Ren => "ren",
            Stem::Gui => "gui",
        }
    }

    pub fn hanzi(self) -> &'static str {
        ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"][self.index()]
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl std::str::FromStr for Stem {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| stem.hanzi() == s || stem.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaziError::InvalidStem(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    #[serde(alias = "子")]
    Zi,
    #[serde(alias = "丑")]
    Chou,
    #[serde(alias = "寅")]
    Yin,
    #[serde(alias = "卯")]
    Mao,
    #[serde(alias = "辰")]
    Chen,
    #[serde(alias = "巳")]
    Si,
    #[serde(alias = "午")]
    Wu,
    #[serde(alias = "未")]
    Wei,
    #[serde(alias = "申")]
    Shen,
    #[serde(alias = "酉")]
    You,
    #[serde(alias = "戌")]
    Xu,
    #[serde(alias = "亥")]
    Hai,
}

/// Branches in cyclic order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at a cyclic position; any integer wraps into 0..12.
    pub fn from_cycle(position: i64) -> Branch {
        ALL_BRANCHES[position.rem_euclid(12) as usize]
    }

    pub fn element(self) -> Element {
        match self {
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Element::Earth,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Hai | Branch::Zi => Element::Water,
        }
    }

    pub fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Opposite branch on the twelve-branch wheel.
    pub fn clash_partner(self) -> Branch {
        Branch::from_cycle(self.index() as i64 + 6)
    }

    /// Stems stored inside the branch, main qi first.
    pub fn hidden_stems(self) -> &'static [Stem] {
        use Stem::*;
        match self {
            Branch::Zi => &[Gui],
            Branch::Chou => &[Ji, Gui, Xin],
            Branch::Yin => &[Jia, Bing, Wu],
            Branch::Mao => &[Yi],
            Branch::Chen => &[Wu, Yi, Gui],
            Branch::Si => &[Bing, Geng, Wu],
            Branch::Wu => &[Ding, Ji],
            Branch::Wei => &[Ji, Ding, Yi],
            Branch::Shen => &[Geng, Ren, Wu],
            Branch::You => &[Xin],
            Branch::Xu => &[Wu, Xin, Ding],
            Branch::Hai => &[Ren, Jia],
        }
    }

    pub fn hides(self, stem: Stem) -> bool {
        self.hidden_stems().contains(&stem)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Branch::Zi => "zi",
            Branch::Chou => "chou",
            Branch::Yin => "yin",
            Branch::Mao => "mao",
            Branch::Chen => "chen",
            Branch::Si => "si",
            Branch::Wu => "wu",
            Branch::Wei => "wei",
            Branch::Shen => "shen",
            Branch::You => "you",
            Branch::Xu => "xu",
            Branch::Hai => "hai",
        }
    }

    pub fn hanzi(self) -> &'static str {
        ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"][self.index()]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl std::str::FromStr for Branch {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.hanzi() == s || b.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaziError::InvalidBranch(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
