use std::path::PathBuf;

use crate::error::Result;
use crate::reports;
use crate::settings::load_settings;

use super::load_dataset;
use super::text::{format_all_categories, format_all_dayparts, format_daytype};

pub fn run(file: Option<&str>, output_dir: Option<String>) -> Result<()> {
    let settings = load_settings();
    let (ds, _) = load_dataset(file)?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let dir = output_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("exports"));
    std::fs::create_dir_all(&dir)?;

    // Files get plain text even when stdout is a colour terminal.
    colored::control::set_override(false);
    let cmp = reports::compare_weekend_vs_weekday(&ds);
    let files = [
        ("dayparts", format_all_dayparts(&ds, settings.daypart_limit)),
        ("categories", format_all_categories(&ds, settings.category_limit)),
        ("daytype", format_daytype(&cmp)),
    ];

    for (name, content) in files {
        let path = dir.join(format!("{name}-{date}.txt"));
        std::fs::write(&path, format!("{content}\n"))?;
        tracing::info!(path = %path.display(), "wrote report");
        println!("Wrote {}", path.display());
    }
    Ok(())
}
