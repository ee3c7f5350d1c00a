use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BakeryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file '{}' not found. Put Bakery.csv in the working directory or pass --file.", .0.display())]
    MissingSource(PathBuf),

    #[error("Data file is missing the '{0}' column")]
    MissingColumn(String),

    #[error("Unknown daypart: {0} (expected Morning, Afternoon, Evening or Night)")]
    UnknownDaypart(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, BakeryError>;
