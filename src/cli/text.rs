use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::categorizer::{rules, Matcher};
use crate::dataset::Dataset;
use crate::fmt::{number, percent};
use crate::importer::LoadSummary;
use crate::models::{Category, Classification, DayType, Daypart};
use crate::reports::{self, DayTypeComparison, ItemCount};

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

pub fn format_top(title: &str, items: &[ItemCount]) -> String {
    if items.is_empty() {
        return format!("{title}\nNo sales recorded.");
    }
    let mut table = Table::new();
    table.set_header(vec!["#", "Item", "Sold", "Share"]);
    for (rank, item) in items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&item.item),
            Cell::new(number(item.count)),
            Cell::new(percent(item.share)),
        ]);
    }
    format!("{title}\n{table}")
}

pub fn daypart_title(daypart: Daypart, limit: usize) -> String {
    format!("Top {limit} items: {daypart}")
}

pub fn category_title(class: Classification, limit: usize) -> String {
    format!("Top {limit} items: {class}")
}

/// Rankings for every daypart, in daypart order.
pub fn format_all_dayparts(ds: &Dataset, limit: usize) -> String {
    Daypart::ALL
        .into_iter()
        .map(|d| format_top(&daypart_title(d, limit), &reports::top_items_by_daypart(ds, d, limit)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Rankings for every pickable sub-category.
pub fn format_all_categories(ds: &Dataset, limit: usize) -> String {
    Category::PICKABLE
        .into_iter()
        .flat_map(|c| c.sub_categories().iter().copied())
        .map(|class| {
            format_top(
                &category_title(class, limit),
                &reports::top_items_by_category(ds, class, limit),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ---------------------------------------------------------------------------
// Weekday vs weekend
// ---------------------------------------------------------------------------

pub fn verdict(cmp: &DayTypeComparison) -> String {
    if cmp.weekend == 0 && cmp.weekday == 0 {
        return "No transactions recorded.".to_string();
    }
    match cmp.winner {
        DayType::Weekend => "Weekend trade beats weekdays!".to_string(),
        DayType::Weekday if cmp.is_tie() => {
            "Weekdays and weekends are level; the tie goes to weekdays.".to_string()
        }
        DayType::Weekday => "Weekdays out-trade the weekend.".to_string(),
    }
}

pub fn format_daytype(cmp: &DayTypeComparison) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Day type", "Transactions"]);
    for day_type in DayType::ALL {
        let count = number(cmp.counts().get(day_type));
        let label = if day_type == cmp.winner && !cmp.is_tie() {
            day_type.label().bold().to_string()
        } else {
            day_type.label().to_string()
        };
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    format!("Weekday vs Weekend\n{table}\n{}", verdict(cmp))
}

// ---------------------------------------------------------------------------
// Taxonomy / classification
// ---------------------------------------------------------------------------

fn matcher_text(matcher: &Matcher) -> String {
    match matcher {
        Matcher::ContainsAny(keywords) => format!("contains {}", keywords.join(", ")),
        Matcher::Equals(word) => format!("equals {word}"),
    }
}

pub fn format_categories() -> String {
    let dayparts: Vec<&str> = Daypart::ALL.iter().map(|d| d.label()).collect();

    let mut table = Table::new();
    table.set_header(vec!["Category", "Sub-categories"]);
    for category in Category::ALL {
        let subs: Vec<&str> = category.sub_categories().iter().map(|c| c.sub_label()).collect();
        table.add_row(vec![Cell::new(category.label()), Cell::new(subs.join(", "))]);
    }

    let mut rule_table = Table::new();
    rule_table.set_header(vec!["#", "Category", "Rule"]);
    for (i, rule) in rules().iter().enumerate() {
        rule_table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(rule.class.to_string()),
            Cell::new(matcher_text(&rule.matcher)),
        ]);
    }

    format!(
        "Dayparts: {}\n\nCategories\n{table}\n\nRules (first match wins; anything else is Other / other)\n{rule_table}",
        dayparts.join(", ")
    )
}

pub fn format_classification(item: &str, class: Classification, keyword: Option<&str>) -> String {
    match keyword {
        Some(kw) => format!("{item}: {class} (matched \"{kw}\")"),
        None => format!("{item}: {class}"),
    }
}

// ---------------------------------------------------------------------------
// Load summary
// ---------------------------------------------------------------------------

pub fn format_load_summary(summary: &LoadSummary, ds: &Dataset) -> String {
    let cmp = reports::compare_weekend_vs_weekday(ds);

    let mut table = Table::new();
    table.set_header(vec!["", "Rows"]);
    table.add_row(vec![Cell::new("Read"), Cell::new(number(summary.rows_read))]);
    table.add_row(vec![Cell::new("Kept"), Cell::new(number(summary.kept))]);
    table.add_row(vec![Cell::new("Missing item"), Cell::new(number(summary.missing_items))]);
    table.add_row(vec![Cell::new("Malformed"), Cell::new(number(summary.malformed))]);
    table.add_row(vec![Cell::new("No daypart"), Cell::new(number(summary.no_daypart))]);
    table.add_row(vec![
        Cell::new("Transactions".bold()),
        Cell::new(number(cmp.weekday + cmp.weekend)),
    ]);

    let mut mix = Table::new();
    mix.set_header(vec!["Category", "Rows", "Share"]);
    let total = ds.len();
    for (category, n) in reports::rows_by_category(ds) {
        let share = if total > 0 { n as f64 / total as f64 * 100.0 } else { 0.0 };
        mix.add_row(vec![
            Cell::new(category.label()),
            Cell::new(number(n)),
            Cell::new(percent(share)),
        ]);
    }

    format!("Load Summary\n{table}\n\nCategory Mix\n{mix}")
}
