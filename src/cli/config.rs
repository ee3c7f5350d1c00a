use crate::error::{BakeryError, Result};
use crate::settings::{load_settings, save_settings, settings_path};

pub fn run(
    data_file: Option<String>,
    daypart_limit: Option<usize>,
    category_limit: Option<usize>,
) -> Result<()> {
    if [daypart_limit, category_limit].into_iter().flatten().any(|n| n == 0) {
        return Err(BakeryError::Settings("limits must be at least 1".into()));
    }

    let mut settings = load_settings();
    let changed = data_file.is_some() || daypart_limit.is_some() || category_limit.is_some();

    if let Some(f) = data_file {
        settings.data_file = f;
    }
    if let Some(n) = daypart_limit {
        settings.daypart_limit = n;
    }
    if let Some(n) = category_limit {
        settings.category_limit = n;
    }

    if changed {
        save_settings(&settings)?;
        println!("Saved {}", settings_path().display());
    }
    println!("data_file:       {}", settings.data_file);
    println!("daypart_limit:   {}", settings.daypart_limit);
    println!("category_limit:  {}", settings.category_limit);
    Ok(())
}
