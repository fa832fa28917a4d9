//! CSV export of the aggregated catalog.
//!
//! One header row in the fixed canonical column order, one row per record.
//! Fields are quoted only when they contain the separator, a quote, or a
//! line break; embedded quotes are doubled.

use crate::record::PartnerRecord;
use std::io::{self, Write};

/// Canonical output column order.
pub const COLUMNS: [&str; 12] = [
    "source",
    "id",
    "name",
    "category",
    "cashback",
    "reward_type",
    "taksit_months",
    "city",
    "address",
    "phone",
    "website",
    "image_url",
];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Project a record into the canonical column order. Absent optionals render
/// as empty cells; months are comma-joined (`3,6,12`).
pub fn record_row(record: &PartnerRecord) -> Vec<String> {
    let months: Vec<String> = record
        .taksit_months
        .iter()
        .map(u32::to_string)
        .collect();
    vec![
        record.source.to_string(),
        record.id.clone().unwrap_or_default(),
        record.name.clone(),
        record.category.clone(),
        record.cashback.clone().unwrap_or_default(),
        record.reward_type.to_string(),
        months.join(","),
        record.city.clone(),
        record.address.clone(),
        record.phone.clone(),
        record.website.clone(),
        record.image_url.clone(),
    ]
}

/// Write the header plus all records.
pub fn write_csv<W: Write>(mut w: W, records: &[PartnerRecord]) -> io::Result<()> {
    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    write_row(&mut w, &header)?;
    for record in records {
        write_row(&mut w, &record_row(record))?;
    }
    Ok(())
}

/// Render the full CSV as a string (tests, snapshots, stdout export).
pub fn to_csv_string(records: &[PartnerRecord]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_csv(&mut buf, records);
    String::from_utf8_lossy(&buf).into_owned()
}
