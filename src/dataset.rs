use std::path::Path;

use crate::categorizer::classify;
use crate::error::Result;
use crate::importer::{load_file, LoadSummary};
use crate::models::{ClassifiedTransaction, Transaction};

/// The loaded transaction log with every row classified. Built once, then
/// only read: every report borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<ClassifiedTransaction>,
}

impl Dataset {
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let rows = transactions
            .into_iter()
            .map(|transaction| {
                let class = classify(&transaction.item);
                ClassifiedTransaction { transaction, class }
            })
            .collect();
        Self { rows }
    }

    pub fn load(path: &Path) -> Result<(Self, LoadSummary)> {
        let (transactions, summary) = load_file(path)?;
        Ok((Self::from_transactions(transactions), summary))
    }

    pub fn rows(&self) -> &[ClassifiedTransaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
