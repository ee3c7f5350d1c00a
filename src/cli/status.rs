use crate::error::Result;
use crate::settings::{data_path, load_settings, settings_path};

use super::load_dataset;
use super::text::format_load_summary;

pub fn run(file: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let path = data_path(file);

    println!("Settings:        {}", settings_path().display());
    println!("Data file:       {}", path.display());
    println!("Daypart limit:   {}", settings.daypart_limit);
    println!("Category limit:  {}", settings.category_limit);
    println!();

    let (ds, summary) = load_dataset(file)?;
    println!("{}", format_load_summary(&summary, &ds));
    if ds.is_empty() {
        println!("\nNo usable rows in the data file.");
    }
    Ok(())
}
