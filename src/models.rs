use std::fmt;
use std::str::FromStr;

use crate::error::BakeryError;

// ---------------------------------------------------------------------------
// Daypart / DayType
// ---------------------------------------------------------------------------

/// Time-of-day bucket. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Daypart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Daypart {
    pub const ALL: [Daypart; 4] = [
        Daypart::Morning,
        Daypart::Afternoon,
        Daypart::Evening,
        Daypart::Night,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }

    /// Lenient lookup for user input: trimmed, any case.
    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(raw))
    }

    /// Exact lookup for values read from the data file.
    pub fn from_exact(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == raw)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Daypart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Daypart {
    type Err = BakeryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| BakeryError::UnknownDaypart(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub const ALL: [DayType; 2] = [DayType::Weekday, DayType::Weekend];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekday => "Weekday",
            Self::Weekend => "Weekend",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(raw))
    }

    pub fn from_exact(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == raw)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Item taxonomy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkKind {
    Coffee,
    Tea,
    Sweet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DessertKind {
    Bread,
    Crunch,
    Sweet,
    Soft,
}

/// Where an item sits in the two-level menu taxonomy. Each variant pins both
/// the category and its sub-category, so a Meal can never carry "coffee".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Meal,
    Drink(DrinkKind),
    Dessert(DessertKind),
    Other,
}

impl Classification {
    pub fn category(&self) -> Category {
        match self {
            Self::Meal => Category::Meal,
            Self::Drink(_) => Category::Drink,
            Self::Dessert(_) => Category::Dessert,
            Self::Other => Category::Other,
        }
    }

    pub fn sub_label(&self) -> &'static str {
        match self {
            Self::Meal => "meal",
            Self::Drink(DrinkKind::Coffee) => "coffee",
            Self::Drink(DrinkKind::Tea) => "tea",
            Self::Drink(DrinkKind::Sweet) => "sweet",
            Self::Dessert(DessertKind::Bread) => "bread",
            Self::Dessert(DessertKind::Crunch) => "crunch",
            Self::Dessert(DessertKind::Sweet) => "sweet",
            Self::Dessert(DessertKind::Soft) => "soft",
            Self::Other => "other",
        }
    }

    /// Resolve a (category, sub-category) label pair, case-insensitively.
    pub fn from_labels(category: &str, sub: &str) -> Option<Self> {
        let category = Category::from_label(category)?;
        let sub = sub.trim();
        category
            .sub_categories()
            .iter()
            .copied()
            .find(|c| c.sub_label().eq_ignore_ascii_case(sub))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.category().label(), self.sub_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Meal,
    Drink,
    Dessert,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Meal,
        Category::Drink,
        Category::Dessert,
        Category::Other,
    ];

    /// Categories offered in the dashboard picker, in picker order.
    pub const PICKABLE: [Category; 3] = [Category::Dessert, Category::Drink, Category::Meal];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Meal => "Meal",
            Self::Drink => "Drink",
            Self::Dessert => "Dessert",
            Self::Other => "Other",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(raw))
    }

    /// Sub-categories belonging to this category, in picker order.
    pub fn sub_categories(&self) -> &'static [Classification] {
        match self {
            Self::Meal => &[Classification::Meal],
            Self::Drink => &[
                Classification::Drink(DrinkKind::Sweet),
                Classification::Drink(DrinkKind::Coffee),
                Classification::Drink(DrinkKind::Tea),
            ],
            Self::Dessert => &[
                Classification::Dessert(DessertKind::Sweet),
                Classification::Dessert(DessertKind::Crunch),
                Classification::Dessert(DessertKind::Soft),
                Classification::Dessert(DessertKind::Bread),
            ],
            Self::Other => &[Classification::Other],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One item line of a sale, as read from the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub transaction_no: u64,
    pub item: String,
    pub day_type: DayType,
    /// `None` when the data file carries a blank or unknown daypart label.
    pub daypart: Option<Daypart>,
}

/// A transaction row together with its derived classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTransaction {
    pub transaction: Transaction,
    pub class: Classification,
}
