//! Persistence collaborator contract.
//!
//! The core hands a validated dataset to a store together with a destination
//! identifier and a replace-or-append flag; the store answers success or
//! failure only, no row-level diagnostics. Writes are all-or-nothing from
//! the caller's point of view.

use crate::table::Dataset;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the destination with the dataset.
    Replace,
    /// Append the dataset's rows after the destination's existing rows.
    Append,
}

pub trait DatasetStore {
    fn save(&self, dataset: &Dataset, dest: &str, mode: WriteMode) -> crate::Result<()>;
}

/// Store backed by a single CSV file.
pub struct CsvFileStore;

impl DatasetStore for CsvFileStore {
    fn save(&self, dataset: &Dataset, dest: &str, mode: WriteMode) -> crate::Result<()> {
        let text = dataset.to_csv()?;
        match mode {
            WriteMode::Replace => {
                fs::write(dest, text).with_context(|| format!("write {}", dest))?;
            }
            WriteMode::Append => {
                // Appending to a missing or empty destination keeps the
                // header; otherwise only the data rows are added.
                let existing = fs::read(dest).unwrap_or_default();

                let payload = if existing.is_empty() {
                    text
                } else {
                    let mut rows = String::new();
                    // The destination's last line may lack a terminator;
                    // supply one so the first new row starts on its own line.
                    if existing.last() != Some(&b'\n') {
                        rows.push('\n');
                    }
                    if let Some((_header, data)) = text.split_once('\n') {
                        rows.push_str(data);
                    }
                    rows
                };

                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(dest)
                    .with_context(|| format!("open {} for append", dest))?;
                file.write_all(payload.as_bytes())
                    .with_context(|| format!("append to {}", dest))?;
            }
        }
        Ok(())
    }
}
