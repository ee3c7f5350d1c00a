use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::dataset::Dataset;
use crate::models::{Category, ClassifiedTransaction, Classification, DayType, Daypart};

// ---------------------------------------------------------------------------
// Item ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ItemCount {
    pub item: String,
    pub count: usize,
    /// Percent of the filtered rows.
    pub share: f64,
}

/// Count rows per item and rank by count, highest first. Items with equal
/// counts keep the order in which they first appear in the data.
fn rank_items<'a>(rows: impl Iterator<Item = &'a ClassifiedTransaction>, limit: usize) -> Vec<ItemCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(&str, usize)> = Vec::new();
    let mut total = 0usize;

    for row in rows {
        total += 1;
        let item = row.transaction.item.as_str();
        match index.entry(item) {
            Entry::Occupied(e) => tallies[*e.get()].1 += 1,
            Entry::Vacant(e) => {
                e.insert(tallies.len());
                tallies.push((item, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    tallies.sort_by(|a, b| b.1.cmp(&a.1));
    tallies
        .into_iter()
        .take(limit)
        .map(|(item, count)| ItemCount {
            item: item.to_string(),
            count,
            share: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

pub fn top_items_by_daypart(ds: &Dataset, daypart: Daypart, limit: usize) -> Vec<ItemCount> {
    rank_items(
        ds.rows().iter().filter(|r| r.transaction.daypart == Some(daypart)),
        limit,
    )
}

pub fn top_items_by_category(ds: &Dataset, class: Classification, limit: usize) -> Vec<ItemCount> {
    rank_items(ds.rows().iter().filter(|r| r.class == class), limit)
}

// ---------------------------------------------------------------------------
// Weekday vs weekend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTypeCounts {
    pub weekday: usize,
    pub weekend: usize,
}

impl DayTypeCounts {
    pub fn get(&self, day_type: DayType) -> usize {
        match day_type {
            DayType::Weekday => self.weekday,
            DayType::Weekend => self.weekend,
        }
    }

    pub fn max(&self) -> usize {
        self.weekday.max(self.weekend)
    }
}

/// Distinct transaction numbers per day type. A sale spanning several item
/// rows counts once.
pub fn transaction_count_by_day_type(ds: &Dataset) -> DayTypeCounts {
    let mut weekday: HashSet<u64> = HashSet::new();
    let mut weekend: HashSet<u64> = HashSet::new();
    for row in ds.rows() {
        let txn = &row.transaction;
        match txn.day_type {
            DayType::Weekday => weekday.insert(txn.transaction_no),
            DayType::Weekend => weekend.insert(txn.transaction_no),
        };
    }
    DayTypeCounts {
        weekday: weekday.len(),
        weekend: weekend.len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTypeComparison {
    pub weekend: usize,
    pub weekday: usize,
    pub winner: DayType,
}

impl DayTypeComparison {
    /// Weekend wins only with strictly more transactions; a tie goes to Weekday.
    pub fn from_counts(counts: DayTypeCounts) -> Self {
        let winner = if counts.weekend > counts.weekday {
            DayType::Weekend
        } else {
            DayType::Weekday
        };
        Self {
            weekend: counts.weekend,
            weekday: counts.weekday,
            winner,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.weekend == self.weekday
    }

    pub fn counts(&self) -> DayTypeCounts {
        DayTypeCounts {
            weekday: self.weekday,
            weekend: self.weekend,
        }
    }
}

pub fn compare_weekend_vs_weekday(ds: &Dataset) -> DayTypeComparison {
    DayTypeComparison::from_counts(transaction_count_by_day_type(ds))
}

// ---------------------------------------------------------------------------
// Category mix
// ---------------------------------------------------------------------------

/// Item rows per top-level category, in taxonomy order.
pub fn rows_by_category(ds: &Dataset) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|c| {
            let n = ds.rows().iter().filter(|r| r.class.category() == c).count();
            (c, n)
        })
        .collect()
}
