//! Static schema for the device inventory CSV.
//!
//! The schema is fixed: a set of required columns that must be present in the
//! header and non-blank per row, a set of optional columns backfilled with ""
//! when absent, and closed value sets for `device_type` and the multicast
//! labels. Required and optional column name sets are disjoint.

/// Columns that must appear in the header and be non-blank in every row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "job_id",
    "job_property",
    "device_name",
    "device_location",
    "device_type",
    "ip_address",
    "mac_address",
    "subnet_mask",
    "default_gateway",
    "serial_number",
];

/// Columns defaulted to the empty string when the header omits them.
pub const OPTIONAL_COLUMNS: &[&str] = &["dns_1", "dns_2", "notes"];

/// Accepted values for `device_type`.
pub const DEVICE_TYPES: &[&str] = &[
    "Audio",
    "Video",
    "Audiovisual",
    "Control",
    "Intercom",
    "Networking",
    "Security",
    "Surveillance",
    "Access Control",
];

/// Accepted values for `multicast_label_1` / `multicast_label_2`.
pub const MULTICAST_LABELS: &[&str] = &["Audio", "Video", "AUX", "Streaming"];

/// Multicast column groups validated conditionally: when the address column is
/// non-blank, the paired port and label columns become required.
pub const MULTICAST_GROUPS: &[(&str, &str, &str)] = &[
    ("multicast_address_1", "multicast_port_1", "multicast_label_1"),
    ("multicast_address_2", "multicast_port_2", "multicast_label_2"),
];

/// Number of header lines preceding the first data row. Data row `i`
/// (1-based) is reported to the user as `Row i + HEADER_ROWS`.
pub const HEADER_ROWS: usize = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_types_constant() {
        assert!(DEVICE_TYPES.contains(&"Audio"));
        assert!(DEVICE_TYPES.contains(&"Networking"));
        assert_eq!(DEVICE_TYPES.len(), 9);
    }

    #[test]
    fn multicast_labels_constant() {
        assert!(MULTICAST_LABELS.contains(&"Audio"));
        assert_eq!(MULTICAST_LABELS.len(), 4);
    }

    #[test]
    fn required_and_optional_are_disjoint() {
        for col in OPTIONAL_COLUMNS {
            assert!(!REQUIRED_COLUMNS.contains(col), "{} in both sets", col);
        }
    }
}
