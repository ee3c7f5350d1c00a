use crate::error::Result;
use crate::reports;

use super::load_dataset;
use super::text::format_daytype;

pub fn run(file: Option<&str>) -> Result<()> {
    let (ds, _) = load_dataset(file)?;
    let cmp = reports::compare_weekend_vs_weekday(&ds);
    println!("{}", format_daytype(&cmp));
    Ok(())
}
