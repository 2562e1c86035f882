//! Read-only projections over a validated dataset.
//!
//! Every projection is a deterministic read of the inventory's current
//! dataset. When no dataset is held (nothing loaded yet, or the last
//! validation failed) projections yield empty output rather than erroring —
//! the presentation layer decides how to react to the invalid state.

use crate::inventory::Inventory;
use serde::Serialize;

/// Column subset shown in the device table view, in display order.
pub const DISPLAY_COLUMNS: &[&str] = &[
    "job_id",
    "job_property",
    "device_name",
    "device_location",
    "device_type",
    "ip_address",
    "mac_address",
];

/// Per-device detail record for structured export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceDetail {
    pub job_id: String,
    pub device_name: String,
    pub ip_address: String,
    pub device_location: String,
    pub device_type: String,
}

impl Inventory {
    /// One IP address per device, in row order.
    pub fn ips(&self) -> Vec<String> {
        let Some(dataset) = self.dataset() else {
            return Vec::new();
        };
        (0..dataset.len())
            .map(|i| dataset.cell(i, "ip_address").to_string())
            .collect()
    }

    /// Newline-delimited IP list for plain-text export.
    pub fn ip_text(&self) -> String {
        self.ips().join("\n")
    }

    /// Annotated lines for the plain-text download export:
    /// `"{ip}\t # {device_name} at {device_location}"`.
    pub fn annotated_ips(&self) -> Vec<String> {
        let Some(dataset) = self.dataset() else {
            return Vec::new();
        };
        (0..dataset.len())
            .map(|i| {
                format!(
                    "{}\t # {} at {}",
                    dataset.cell(i, "ip_address"),
                    dataset.cell(i, "device_name"),
                    dataset.cell(i, "device_location"),
                )
            })
            .collect()
    }

    /// IPs paired with a human label: `"{job_id} - {device_name} ({device_location})"`.
    pub fn labeled_ips(&self) -> Vec<(String, String)> {
        let Some(dataset) = self.dataset() else {
            return Vec::new();
        };
        (0..dataset.len())
            .map(|i| {
                let label = format!(
                    "{} - {} ({})",
                    dataset.cell(i, "job_id"),
                    dataset.cell(i, "device_name"),
                    dataset.cell(i, "device_location"),
                );
                (dataset.cell(i, "ip_address").to_string(), label)
            })
            .collect()
    }

    /// Structured per-device records. A blank device name reads "Unnamed".
    pub fn details(&self) -> Vec<DeviceDetail> {
        let Some(dataset) = self.dataset() else {
            return Vec::new();
        };
        (0..dataset.len())
            .map(|i| {
                let name = dataset.cell(i, "device_name").trim();
                DeviceDetail {
                    job_id: dataset.cell(i, "job_id").to_string(),
                    device_name: if name.is_empty() {
                        "Unnamed".to_string()
                    } else {
                        name.to_string()
                    },
                    ip_address: dataset.cell(i, "ip_address").to_string(),
                    device_location: dataset.cell(i, "device_location").to_string(),
                    device_type: dataset.cell(i, "device_type").to_string(),
                }
            })
            .collect()
    }

    /// The fixed-column display subset as rows of cell values, ordered per
    /// `DISPLAY_COLUMNS`.
    pub fn display_table(&self) -> Vec<Vec<String>> {
        let Some(dataset) = self.dataset() else {
            return Vec::new();
        };
        (0..dataset.len())
            .map(|i| {
                DISPLAY_COLUMNS
                    .iter()
                    .map(|col| dataset.cell(i, col).to_string())
                    .collect()
            })
            .collect()
    }

    /// Re-serialize the full validated dataset back to CSV text. Empty
    /// string when no dataset is held.
    pub fn export_csv(&self) -> crate::Result<String> {
        match self.dataset() {
            Some(dataset) => dataset.to_csv(),
            None => Ok(String::new()),
        }
    }
}
