use crate::error::{BakeryError, Result};
use crate::models::{Classification, Daypart};
use crate::reports;
use crate::settings::load_settings;

use super::load_dataset;
use super::text::{category_title, daypart_title, format_top};

pub fn daypart(file: Option<&str>, daypart: &str, limit: Option<usize>) -> Result<()> {
    let daypart: Daypart = daypart.parse()?;
    let limit = limit.unwrap_or_else(|| load_settings().daypart_limit);
    let (ds, _) = load_dataset(file)?;
    let items = reports::top_items_by_daypart(&ds, daypart, limit);
    println!("{}", format_top(&daypart_title(daypart, limit), &items));
    Ok(())
}

pub fn category(file: Option<&str>, category: &str, sub_category: &str, limit: Option<usize>) -> Result<()> {
    let class = Classification::from_labels(category, sub_category)
        .ok_or_else(|| BakeryError::UnknownCategory(format!("{category} / {sub_category}")))?;
    let limit = limit.unwrap_or_else(|| load_settings().category_limit);
    let (ds, _) = load_dataset(file)?;
    let items = reports::top_items_by_category(&ds, class, limit);
    println!("{}", format_top(&category_title(class, limit), &items));
    Ok(())
}
