pub mod categories;
pub mod classify;
pub mod config;
pub mod dashboard;
pub mod daytype;
pub mod export;
pub mod status;
pub mod text;
pub mod top;

use clap::{Parser, Subcommand};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::importer::LoadSummary;
use crate::settings::data_path;

/// Load and classify the data file named by `--file` or the saved settings.
pub(crate) fn load_dataset(file: Option<&str>) -> Result<(Dataset, LoadSummary)> {
    Dataset::load(&data_path(file))
}

#[derive(Parser)]
#[command(
    name = "bakery",
    about = "Bakery sales dashboard: best sellers by time of day and category, weekday vs weekend trade."
)]
pub struct Cli {
    /// Transactions CSV to read (default: the configured data file, Bakery.csv)
    #[arg(long, global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard (plain text when not on a terminal).
    Dashboard,
    /// Best-selling items.
    Top {
        #[command(subcommand)]
        command: TopCommands,
    },
    /// Compare distinct transactions on weekdays and weekends.
    Daytype,
    /// Show the category an item name falls into.
    Classify {
        /// Item names, e.g. "Hot chocolate"
        #[arg(required = true)]
        items: Vec<String>,
        /// Show which keyword decided the category
        #[arg(long)]
        explain: bool,
    },
    /// List dayparts, categories and the keyword rules behind them.
    Categories,
    /// Show settings and a summary of the data file.
    Status,
    /// Write every report as text files.
    Export {
        /// Directory for the report files (default: ./exports)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
    },
    /// Show or change saved settings.
    Config {
        /// Default transactions CSV
        #[arg(long = "data-file")]
        data_file: Option<String>,
        /// Rows shown in the time-of-day ranking
        #[arg(long = "daypart-limit")]
        daypart_limit: Option<usize>,
        /// Rows shown in the category ranking
        #[arg(long = "category-limit")]
        category_limit: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum TopCommands {
    /// Best sellers in one time of day.
    Daypart {
        /// Morning, Afternoon, Evening or Night
        daypart: String,
        /// Number of items to show (default: configured daypart limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Best sellers in one category.
    Category {
        /// Meal, Drink, Dessert or Other
        category: String,
        /// Sub-category, e.g. coffee, tea, sweet, bread
        sub_category: String,
        /// Number of items to show (default: configured category limit)
        #[arg(long)]
        limit: Option<usize>,
    },
}
