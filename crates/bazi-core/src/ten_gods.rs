//! Ten-Gods resolution: how any stem relates to the Day Master.

use crate::symbols::{Element, Stem};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Coarse five-way relationship between the Day Master's element and another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Same element.
    Peer,
    /// Day Master produces it.
    Output,
    /// Day Master overcomes it.
    Wealth,
    /// It overcomes the Day Master.
    Authority,
    /// It produces the Day Master.
    Resource,
}

impl Category {
    pub fn between(day_master: Element, other: Element) -> Category {
        if other == day_master {
            Category::Peer
        } else if day_master.produces() == other {
            Category::Output
        } else if day_master.overcomes() == other {
            Category::Wealth
        } else if other.overcomes() == day_master {
            Category::Authority
        } else if other.produces() == day_master {
            Category::Resource
        } else {
            unreachable!("{day_master} and {other} fall outside the five-element cycle")
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Peer => "peer",
            Category::Output => "output",
            Category::Wealth => "wealth",
            Category::Authority => "authority",
            Category::Resource => "resource",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TenGod
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    Friend,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    pub fn all() -> &'static [TenGod] {
        &[
            TenGod::Friend,
            TenGod::RobWealth,
            TenGod::EatingGod,
            TenGod::HurtingOfficer,
            TenGod::IndirectWealth,
            TenGod::DirectWealth,
            TenGod::SevenKillings,
            TenGod::DirectOfficer,
            TenGod::IndirectResource,
            TenGod::DirectResource,
        ]
    }

    /// Split a category by polarity: same polarity takes the first name.
    pub fn from_parts(category: Category, same_polarity: bool) -> TenGod {
        match (category, same_polarity) {
            (Category::Peer, true) => TenGod::Friend,
            (Category::Peer, false) => TenGod::RobWealth,
            (Category::Output, true) => TenGod::EatingGod,
            (Category::Output, false) => TenGod::HurtingOfficer,
            (Category::Wealth, true) => TenGod::IndirectWealth,
            (Category::Wealth, false) => TenGod::DirectWealth,
            (Category::Authority, true) => TenGod::SevenKillings,
            (Category::Authority, false) => TenGod::DirectOfficer,
            (Category::Resource, true) => TenGod::IndirectResource,
            (Category::Resource, false) => TenGod::DirectResource,
        }
    }

    pub fn category(self) -> Category {
        match self {
            TenGod::Friend | TenGod::RobWealth => Category::Peer,
            TenGod::EatingGod | TenGod::HurtingOfficer => Category::Output,
            TenGod::IndirectWealth | TenGod::DirectWealth => Category::Wealth,
            TenGod::SevenKillings | TenGod::DirectOfficer => Category::Authority,
            TenGod::IndirectResource | TenGod::DirectResource => Category::Resource,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TenGod::Friend => "friend",
            TenGod::RobWealth => "rob_wealth",
            TenGod::EatingGod => "eating_god",
            TenGod::HurtingOfficer => "hurting_officer",
            TenGod::IndirectWealth => "indirect_wealth",
            TenGod::DirectWealth => "direct_wealth",
            TenGod::SevenKillings => "seven_killings",
            TenGod::DirectOfficer => "direct_officer",
            TenGod::IndirectResource => "indirect_resource",
            TenGod::DirectResource => "direct_resource",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TenGod::Friend => "Friend",
            TenGod::RobWealth => "Rob Wealth",
            TenGod::EatingGod => "Eating God",
            TenGod::HurtingOfficer => "Hurting Officer",
            TenGod::IndirectWealth => "Indirect Wealth",
            TenGod::DirectWealth => "Direct Wealth",
            TenGod::SevenKillings => "Seven Killings",
            TenGod::DirectOfficer => "Direct Officer",
            TenGod::IndirectResource => "Indirect Resource",
            TenGod::DirectResource => "Direct Resource",
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            TenGod::Friend => "比肩",
            TenGod::RobWealth => "劫財",
            TenGod::EatingGod => "食神",
            TenGod::HurtingOfficer => "傷官",
            TenGod::IndirectWealth => "偏財",
            TenGod::DirectWealth => "正財",
            TenGod::SevenKillings => "七殺",
            TenGod::DirectOfficer => "正官",
            TenGod::IndirectResource => "梟神",
            TenGod::DirectResource => "正印",
        }
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hanzi(), self.label())
    }
}

/// Resolve the relationship of `other` to `day_master`.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let category = Category::between(day_master.element(), other.element());
    TenGod::from_parts(category, day_master.polarity() == other.polarity())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::ALL_STEMS;
    use std::collections::HashSet;

    #[test]
    fn geng_day_master_table() {
        let dm = Stem::Geng;
        let expected = [
            (Stem::Jia, TenGod::IndirectWealth),
            (Stem::Yi, TenGod::DirectWealth),
            (Stem::Bing, TenGod::SevenKillings),
            (Stem::Ding, TenGod::DirectOfficer),
            (Stem::Wu, TenGod::IndirectResource),
            (Stem::Ji, TenGod::DirectResource),
            (Stem::Geng, TenGod::Friend),
            (Stem::Xin, TenGod::RobWealth),
            (Stem::Ren, TenGod::EatingGod),
            (Stem::Gui, TenGod::HurtingOfficer),
        ];
        for (other, god) in expected {
            assert_eq!(ten_god(dm, other), god, "庚 vs {other}");
        }
    }

    #[test]
    fn every_day_master_sees_all_ten_gods_once() {
        for dm in ALL_STEMS {
            let gods: HashSet<TenGod> = ALL_STEMS.iter().map(|&o| ten_god(dm, o)).collect();
            assert_eq!(gods.len(), 10, "day master {dm}");
            assert_eq!(ten_god(dm, dm), TenGod::Friend);
        }
    }

    #[test]
    fn categories_follow_the_element_cycle() {
        for dm in ALL_STEMS {
            for other in ALL_STEMS {
                let cat = ten_god(dm, other).category();
                let (a, b) = (dm.element(), other.element());
                let expected = if a == b {
                    Category::Peer
                } else if a.produces() == b {
                    Category::Output
                } else if a.overcomes() == b {
                    Category::Wealth
                } else if b.overcomes() == a {
                    Category::Authority
                } else {
                    Category::Resource
                };
                assert_eq!(cat, expected, "{dm} vs {other}");
                if a.produces() == b {
                    assert_ne!(cat, Category::Authority);
                }
            }
        }
    }

    #[test]
    fn polarity_splits_each_category() {
        for &god in TenGod::all() {
            let same = TenGod::from_parts(god.category(), true);
            let opposite = TenGod::from_parts(god.category(), false);
            assert_ne!(same, opposite);
            assert!(god == same || god == opposite);
        }
    }

    #[test]
    fn display_shows_hanzi_and_label() {
        assert_eq!(TenGod::SevenKillings.to_string(), "七殺 Seven Killings");
        assert_eq!(TenGod::IndirectResource.hanzi(), "梟神");
    }
}
