use std::path::Path;

use csv::StringRecord;

use crate::error::{BakeryError, Result};
use crate::models::{DayType, Daypart, Transaction};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Accepts plain integers and integer-valued floats ("123", "123.0").
pub fn parse_transaction_no(raw: &str) -> Option<u64> {
    let s = raw.trim();
    if let Ok(n) = s.parse::<u64>() {
        return Some(n);
    }
    let f: f64 = s.parse().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

struct Columns {
    transaction_no: usize,
    items: usize,
    day_type: usize,
    daypart: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| BakeryError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            transaction_no: find("TransactionNo")?,
            items: find("Items")?,
            day_type: find("DayType")?,
            daypart: find("Daypart")?,
        })
    }
}

// ---------------------------------------------------------------------------
// load_file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_read: usize,
    pub kept: usize,
    pub missing_items: usize,
    pub malformed: usize,
    /// Kept rows whose daypart label was blank or unknown.
    pub no_daypart: usize,
}

/// Read the transaction log. Rows without an item name are dropped. Rows with
/// an unreadable transaction number or day type are dropped as malformed. An
/// unknown daypart keeps the row with no daypart.
pub fn load_file(file_path: &Path) -> Result<(Vec<Transaction>, LoadSummary)> {
    if !file_path.exists() {
        return Err(BakeryError::MissingSource(file_path.to_path_buf()));
    }
    let file = std::fs::File::open(file_path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(std::io::BufReader::new(file));
    let columns = Columns::locate(rdr.headers()?)?;

    let mut rows = Vec::new();
    let mut summary = LoadSummary::default();

    for (line, result) in rdr.records().enumerate() {
        summary.rows_read += 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(line = line + 2, error = %e, "skipping unreadable row");
                summary.malformed += 1;
                continue;
            }
        };

        let item = record.get(columns.items).unwrap_or("");
        if item.trim().is_empty() {
            tracing::debug!(line = line + 2, "dropping row without an item");
            summary.missing_items += 1;
            continue;
        }

        let transaction_no = record
            .get(columns.transaction_no)
            .and_then(parse_transaction_no);
        let day_type = record.get(columns.day_type).and_then(DayType::from_exact);

        let (Some(transaction_no), Some(day_type)) = (transaction_no, day_type) else {
            tracing::warn!(line = line + 2, record = ?record, "skipping malformed row");
            summary.malformed += 1;
            continue;
        };

        let raw_daypart = record.get(columns.daypart).unwrap_or("");
        let daypart = Daypart::from_exact(raw_daypart);
        if daypart.is_none() {
            tracing::debug!(line = line + 2, daypart = raw_daypart, "row has no known daypart");
            summary.no_daypart += 1;
        }

        rows.push(Transaction {
            transaction_no,
            item: item.to_string(),
            day_type,
            daypart,
        });
    }

    summary.kept = rows.len();
    tracing::info!(
        path = %file_path.display(),
        kept = summary.kept,
        missing_items = summary.missing_items,
        malformed = summary.malformed,
        no_daypart = summary.no_daypart,
        "loaded transactions"
    );
    Ok((rows, summary))
}
