//! A1-notation ranges

/// First data row (row 1 holds the header)
pub const FIRST_DATA_ROW: u32 = 2;

/// Last column of a client row
pub const LAST_COLUMN: char = 'F';

/// Quote a sheet name for A1 notation when it is not a plain identifier.
///
/// Embedded single quotes are doubled.
pub fn quote_sheet_name(name: &str) -> String {
    let plain = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

/// The open-ended client data range for `sheet`, e.g. `Sheet1!A2:F`
pub fn client_range(sheet: &str) -> String {
    format!(
        "{}!A{}:{}",
        quote_sheet_name(sheet),
        FIRST_DATA_ROW,
        LAST_COLUMN
    )
}
