//! Table-level validation: CSV parsing, column shape checks, and per-row
//! orchestration.
//!
//! Validation findings are data, not control flow: the only `Err` paths here
//! are internal serialization failures. A table either validates into a
//! `Dataset` or produces an ordered error list.
//!
//! Error policy, applied uniformly:
//! - input-fatal (unparseable CSV) and schema-fatal (missing required
//!   columns) short-circuit with a single descriptive error;
//! - row-level findings are accumulated across all rows, no early exit.

use crate::row::{self, Row};
use crate::schema;
use serde::Serialize;

/// Terminal outcome of one validation pass. `valid` is true iff `errors`
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        ValidationResult {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<String>) -> Self {
        ValidationResult {
            valid: false,
            errors,
        }
    }
}

/// A table that passed validation. Column order is preserved from the input
/// header (backfilled optional columns appended) so re-serialization
/// round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Cell accessor; absent cells read as "".
    pub fn cell<'a>(&'a self, row: usize, col: &str) -> &'a str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Serialize the full table back to CSV, header first, rows in original
    /// order.
    pub fn to_csv(&self) -> crate::Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            let record: Vec<&str> = self
                .columns
                .iter()
                .map(|c| row.get(c).map(String::as_str).unwrap_or(""))
                .collect();
            wtr.write_record(&record)?;
        }
        let buf = wtr
            .into_inner()
            .map_err(|e| anyhow::anyhow!("flush CSV writer: {}", e))?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Validate one CSV table in a single pass.
///
/// On success the returned dataset carries every input row with absent
/// optional columns backfilled as "".
pub fn validate_table(text: &str) -> Result<Dataset, Vec<String>> {
    // Phase 1: parse. Any CSV-level failure (ragged record, bad quoting) is
    // fatal for the whole call.
    let (mut columns, mut rows) = match parse_csv(text) {
        Ok(parsed) => parsed,
        Err(e) => return Err(vec![format!("cannot parse CSV input: {}", e)]),
    };

    // Phase 2: required columns must all be present; if any are missing the
    // table shape is wrong and per-row diagnosis is pointless.
    let missing: Vec<&str> = schema::REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !columns.iter().any(|have| have == c))
        .collect();
    if !missing.is_empty() {
        return Err(vec![format!(
            "missing required column(s): {}",
            missing.join(", ")
        )]);
    }

    // Phase 3: backfill absent optional columns with "" for every row.
    for col in schema::OPTIONAL_COLUMNS {
        if !columns.iter().any(|have| have == col) {
            columns.push(col.to_string());
        }
    }

    // Phase 4: normalize — every declared column reads as "" when a row has
    // no value for it.
    for row in &mut rows {
        for col in &columns {
            row.entry(col.clone()).or_default();
        }
    }

    // Phase 5: validate every row in order, accumulating all findings so the
    // caller sees the whole picture at once.
    let mut errors = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        errors.extend(row::validate_row(row, i + schema::HEADER_ROWS + 1));
    }

    if errors.is_empty() {
        Ok(Dataset { columns, rows })
    } else {
        Err(errors)
    }
}

/// Parse CSV text into (header, rows). Header names are taken verbatim
/// (case-sensitive match against the schema).
fn parse_csv(text: &str) -> crate::Result<(Vec<String>, Vec<Row>)> {
    let mut rdr = csv::Reader::from_reader(text.as_bytes());

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: Row = columns
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    Ok((columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "job_id,job_property,device_name,device_location,device_type,\
ip_address,mac_address,subnet_mask,default_gateway,serial_number";

    fn good_line(name: &str, ip: &str) -> String {
        format!(
            "J1001,Main Office,{},Rack 1,Networking,{},aa:bb:cc:dd:ee:ff,255.255.255.0,10.0.0.1,SN-1",
            name, ip
        )
    }

    #[test]
    fn valid_two_row_table() {
        let text = format!(
            "{}\n{}\n{}\n",
            HEADER,
            good_line("Switch A", "10.0.0.10"),
            good_line("Switch B", "10.0.0.11")
        );
        let dataset = validate_table(&text).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.cell(0, "device_name"), "Switch A");
        assert_eq!(dataset.cell(1, "ip_address"), "10.0.0.11");
        // Optional columns are backfilled as empty.
        assert_eq!(dataset.cell(0, "dns_1"), "");
        assert!(dataset.columns.iter().any(|c| c == "notes"));
    }

    #[test]
    fn missing_columns_short_circuit_with_one_error() {
        let text = "job_id,device_name\nJ1001,Switch A\n";
        let errors = validate_table(text).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "missing required column(s): job_property, device_location, device_type, \
ip_address, mac_address, subnet_mask, default_gateway, serial_number"
                    .to_string()
            ]
        );
    }

    #[test]
    fn row_errors_accumulate_across_all_rows() {
        let text = format!(
            "{}\n{}\n{}\n",
            HEADER,
            good_line("Switch A", "8.8.8.8"),
            good_line("Switch B", "not.an.ip")
        );
        let errors = validate_table(&text).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Row 2: invalid ip_address (expected a private IPv4 address)".to_string(),
                "Row 3: invalid ip_address (expected a private IPv4 address)".to_string(),
            ]
        );
    }

    #[test]
    fn ragged_record_is_input_fatal() {
        let text = format!("{}\nJ1001,too,few,fields\n", HEADER);
        let errors = validate_table(&text).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("cannot parse CSV input:"));
    }

    #[test]
    fn error_rows_are_numbered_past_the_header() {
        let text = format!("{}\n{}\n", HEADER, good_line("Switch A", "8.8.8.8"));
        let errors = validate_table(&text).unwrap_err();
        // First data line is line 2 of the file.
        assert!(errors[0].starts_with("Row 2:"));
    }

    #[test]
    fn csv_round_trip_is_lossless() {
        let text = format!(
            "{},dns_1,dns_2,notes\n{},1.1.1.1,8.8.4.4,spare\n",
            HEADER,
            good_line("Switch A", "10.0.0.10")
        );
        let dataset = validate_table(&text).unwrap();
        let out = dataset.to_csv().unwrap();
        let dataset2 = validate_table(&out).unwrap();
        assert_eq!(dataset, dataset2);
    }
}
