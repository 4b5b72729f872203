//! Known categories and the fixed groups the resolvers combine.
//!
//! Group membership is static configuration. A new category takes part in a
//! computation only after it is added to a group here.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::interval::Interval;

/// Per-category intervals for one day, keyed by the category label.
///
/// Labels without a [`Category`] variant are carried through untouched.
pub type DayIntervals = BTreeMap<String, Vec<Interval>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Rahu,
    Yamaganda,
    Gulika,
    DurMuhurat,
    Varjyam,
    AmritKaal,
    AbhijitMuhurat,
    GandaMoolNakshatra,
    Free,
}

/// Occupied time for the free-time complement.
pub const BUSY: [Category; 5] = [
    Category::Rahu,
    Category::Yamaganda,
    Category::Gulika,
    Category::DurMuhurat,
    Category::Varjyam,
];

/// Time favorable for important activity.
///
/// Yamaganda and Gulika are also in [`BUSY`]: they are excluded from free
/// time yet count as favorable.
pub const FAVORABLE: [Category; 5] = [
    Category::Free,
    Category::AmritKaal,
    Category::AbhijitMuhurat,
    Category::Yamaganda,
    Category::Gulika,
];

/// Time unfavorable for important activity.
pub const UNFAVORABLE: [Category; 3] = [Category::Rahu, Category::DurMuhurat, Category::Varjyam];

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Free,
        Category::AmritKaal,
        Category::AbhijitMuhurat,
        Category::Rahu,
        Category::DurMuhurat,
        Category::Varjyam,
        Category::Yamaganda,
        Category::Gulika,
        Category::GandaMoolNakshatra,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Rahu => "Rahu",
            Category::Yamaganda => "Yamaganda",
            Category::Gulika => "Gulika",
            Category::DurMuhurat => "Dur Muhurat",
            Category::Varjyam => "Varjyam",
            Category::AmritKaal => "Amrit Kaal",
            Category::AbhijitMuhurat => "Abhijit Muhurat",
            Category::GandaMoolNakshatra => "Ganda Mool Nakshatra",
            Category::Free => "Free",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Clone every interval of `group` out of `day`. Missing categories
/// contribute nothing.
pub fn collect_group(day: &DayIntervals, group: &[Category]) -> Vec<Interval> {
    group
        .iter()
        .filter_map(|c| day.get(c.label()))
        .flatten()
        .copied()
        .collect()
}
