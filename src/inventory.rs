//! The inventory aggregate: owns the current validated dataset and the
//! errors from the last validation attempt.
//!
//! `load_and_validate` is the only mutator and swaps both fields as a unit:
//! either the dataset is set and errors are cleared, or the dataset is
//! cleared and errors are populated. There is never a mixed state, and the
//! call is re-entrant — revalidating replaces the previous outcome wholesale.

use crate::table::{self, Dataset, ValidationResult};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    dataset: Option<Dataset>,
    errors: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Read and validate a CSV file. An unreadable file is input-fatal and
    /// reported through the result like any other finding.
    pub fn load_and_validate(&mut self, path: &Path) -> ValidationResult {
        match fs::read_to_string(path) {
            Ok(text) => self.load_and_validate_str(&text),
            Err(e) => {
                self.dataset = None;
                self.errors = vec![format!("cannot read {}: {}", path.display(), e)];
                ValidationResult::failed(self.errors.clone())
            }
        }
    }

    /// Validate in-memory CSV text. Deterministic: the same input always
    /// yields the same result and the same subsequent projections.
    pub fn load_and_validate_str(&mut self, text: &str) -> ValidationResult {
        match table::validate_table(text) {
            Ok(dataset) => {
                self.dataset = Some(dataset);
                self.errors = Vec::new();
                ValidationResult::ok()
            }
            Err(errors) => {
                self.dataset = None;
                self.errors = errors;
                ValidationResult::failed(self.errors.clone())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn with_dataset(dataset: Dataset) -> Self {
        Inventory {
            dataset: Some(dataset),
            errors: Vec::new(),
        }
    }

    /// The current validated dataset, if the last attempt passed.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Errors from the last validation attempt (empty after a pass).
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.dataset.is_some()
    }

    /// Number of validated devices; 0 when no dataset is held.
    pub fn len(&self) -> usize {
        self.dataset.as_ref().map(Dataset::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VALID: &str = "\
job_id,job_property,device_name,device_location,device_type,ip_address,mac_address,subnet_mask,default_gateway,serial_number
J1001,Main Office,Switch A,Rack 1,Networking,10.0.0.10,aa:bb:cc:dd:ee:ff,255.255.255.0,10.0.0.1,SN-1
J1001,Main Office,Camera 3,Lobby,Surveillance,10.0.0.21,aa:bb:cc:dd:ee:01,255.255.255.0,10.0.0.1,SN-2
";

    #[test]
    fn valid_input_commits_dataset_and_clears_errors() {
        let mut inv = Inventory::new();
        let result = inv.load_and_validate_str(VALID);
        assert!(result.valid);
        assert_eq!(result.errors, Vec::<String>::new());
        assert!(inv.is_valid());
        assert_eq!(inv.len(), 2);
        assert!(inv.errors().is_empty());
    }

    #[test]
    fn invalid_input_discards_dataset_and_stores_errors() {
        let mut inv = Inventory::new();
        inv.load_and_validate_str(VALID);
        assert!(inv.is_valid());

        // Revalidation with bad input replaces the previous state entirely.
        let result = inv.load_and_validate_str("job_id\nJ1001\n");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(inv.dataset().is_none());
        assert_eq!(inv.errors(), &result.errors[..]);
        assert_eq!(inv.len(), 0);
    }

    #[test]
    fn revalidation_is_idempotent() {
        let mut inv = Inventory::new();
        let first = inv.load_and_validate_str(VALID);
        let first_csv = inv.dataset().unwrap().to_csv().unwrap();

        let second = inv.load_and_validate_str(VALID);
        let second_csv = inv.dataset().unwrap().to_csv().unwrap();

        assert_eq!(first, second);
        assert_eq!(first_csv, second_csv);
    }

    #[test]
    fn unreadable_file_is_input_fatal() {
        let mut inv = Inventory::new();
        let result = inv.load_and_validate(Path::new("/nonexistent/devices.csv"));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("cannot read /nonexistent/devices.csv:"));
    }
}
