use crate::categorizer::{classify, matching_rule};
use crate::error::Result;

use super::text::format_classification;

pub fn run(items: &[String], explain: bool) -> Result<()> {
    for item in items {
        let class = classify(item);
        let keyword = if explain {
            matching_rule(item).map(|(_, kw)| kw)
        } else {
            None
        };
        println!("{}", format_classification(item, class, keyword));
    }
    Ok(())
}
