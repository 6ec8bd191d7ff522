//! # Row Mapping
//!
//! Positional conversion between spreadsheet rows and client records.
//! Column order is fixed: `id, name, email, phone, note, lastContacted`.

use serde_json::Value;

use crate::clients::ClientRecord;

/// Number of columns a client row occupies
pub const COLUMN_COUNT: usize = 6;

/// Coerce an id cell to an integer.
///
/// Returns `None` when the cell holds something other than a non-negative
/// whole number that fits in a `u64`.
pub fn parse_id(cell: &Value) -> Option<u64> {
    match cell {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_f64))
        }
        _ => None,
    }
}

/// Float cells such as `4.0` or `"1e3"`. Values at or past 2^64 are rejected
/// rather than saturated.
fn whole_f64(f: f64) -> Option<u64> {
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// Render a text cell. Missing and null cells become empty strings.
fn text(cell: Option<&Value>) -> String {
    match cell {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Map one row to a record.
///
/// An unreadable id becomes 0 and is logged. Cells past the sixth are ignored.
pub fn row_to_record(row: &[Value]) -> ClientRecord {
    let id = match row.first() {
        Some(cell) => parse_id(cell).unwrap_or_else(|| {
            tracing::warn!(cell = %cell, "client row has non-numeric id");
            0
        }),
        None => 0,
    };

    ClientRecord {
        id,
        name: text(row.get(1)),
        email: text(row.get(2)),
        phone: text(row.get(3)),
        note: text(row.get(4)),
        last_contacted: text(row.get(5)),
    }
}

/// Map a record to a row in column order
pub fn record_to_row(record: &ClientRecord) -> Vec<Value> {
    vec![
        Value::from(record.id),
        Value::from(record.name.as_str()),
        Value::from(record.email.as_str()),
        Value::from(record.phone.as_str()),
        Value::from(record.note.as_str()),
        Value::from(record.last_contacted.as_str()),
    ]
}
