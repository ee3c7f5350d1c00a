use crate::error::Result;

use super::text::format_categories;

pub fn run() -> Result<()> {
    println!("{}", format_categories());
    Ok(())
}
