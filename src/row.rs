//! Per-row validation.
//!
//! A row is a plain column-name -> raw-value map; it only exists while the
//! table validator is running. `validate_row` applies every applicable field
//! check and returns the full list of findings for that row, each prefixed
//! with the row's display index (`Row N: ...`).

use crate::field;
use crate::schema;
use std::collections::BTreeMap;

/// One CSV data row, keyed by column name. Cells already normalized so that
/// an absent value is the empty string.
pub type Row = BTreeMap<String, String>;

fn cell<'a>(row: &'a Row, col: &str) -> &'a str {
    row.get(col).map(String::as_str).unwrap_or("")
}

fn blank(row: &Row, col: &str) -> bool {
    cell(row, col).trim().is_empty()
}

/// Validate one row against the fixed schema. `display_index` is the
/// user-facing row number (data position plus header offset).
///
/// Required-blankness and format failure are independent checks: a blank
/// `mac_address` yields both "is required" and the format message. That
/// duplication is deliberate so the caller sees every finding per field.
pub fn validate_row(row: &Row, display_index: usize) -> Vec<String> {
    let mut errors = Vec::new();
    let mut push = |msg: String| errors.push(format!("Row {}: {}", display_index, msg));

    // 1) Required columns must be non-blank.
    for col in schema::REQUIRED_COLUMNS {
        if blank(row, col) {
            push(format!("{} is required", col));
        }
    }

    // 2) Format checks on the designated columns.
    if !field::validate_job_id(cell(row, "job_id")) {
        push("invalid job_id (expected J#### or J####-##)".to_string());
    }
    if !field::validate_ip(cell(row, "ip_address")) {
        push("invalid ip_address (expected a private IPv4 address)".to_string());
    }
    if !field::validate_subnet_mask(cell(row, "subnet_mask")) {
        push("invalid subnet_mask (expected a contiguous network mask)".to_string());
    }
    if !field::validate_ip(cell(row, "default_gateway")) {
        push("invalid default_gateway (expected a private IPv4 address)".to_string());
    }
    if !field::validate_mac(cell(row, "mac_address")) {
        push("invalid mac_address (expected aa:bb:cc:dd:ee:ff)".to_string());
    }
    if !field::validate_serial_number(cell(row, "serial_number")) {
        push("serial_number must be non-empty".to_string());
    }

    // 3) device_type must come from the closed set (only checked when set;
    //    blankness was already reported above).
    let device_type = cell(row, "device_type").trim();
    if !device_type.is_empty() && !schema::DEVICE_TYPES.contains(&device_type) {
        push(format!(
            "device_type must be one of: {}",
            schema::DEVICE_TYPES.join(", ")
        ));
    }

    // 4) Conditional multicast groups: a non-blank address makes its paired
    //    port and label required; a blank address skips the whole group.
    for &(addr_col, port_col, label_col) in schema::MULTICAST_GROUPS {
        if blank(row, addr_col) {
            continue;
        }

        if !field::validate_multicast_address(cell(row, addr_col)) {
            push(format!(
                "invalid {} (expected an IPv4 address in 224.0.0.0-239.255.255.255)",
                addr_col
            ));
        }

        if blank(row, port_col) {
            push(format!("{} is required when {} is set", port_col, addr_col));
        }
        if !field::validate_multicast_port(cell(row, port_col)) {
            push(format!("invalid {} (expected an integer in 1025-65000)", port_col));
        }

        if blank(row, label_col) {
            push(format!("{} is required when {} is set", label_col, addr_col));
        } else {
            let label = cell(row, label_col).trim();
            if !schema::MULTICAST_LABELS.contains(&label) {
                push(format!(
                    "{} must be one of: {}",
                    label_col,
                    schema::MULTICAST_LABELS.join(", ")
                ));
            }
        }
    }

    errors
}
