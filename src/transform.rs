//! Report rows to store records.

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::dynamodb::Item;
use crate::lifecycle::{PARTITION_KEY, SORT_KEY};
use crate::source::ReportRow;

/// Stored in place of a missing province/state.
pub const STATE_NOT_AVAILABLE: &str = "Not Available";

pub const ATTR_STATE: &str = "state";
pub const ATTR_LAST_UPDATE: &str = "lastupdate";
pub const ATTR_CONFIRMED: &str = "confirmed";
pub const ATTR_DEATHS: &str = "deaths";
pub const ATTR_RECOVERED: &str = "recovered";

/// A report row in the shape it is stored, minus its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub country: String,
    pub state: String,
    pub last_update: String,
    pub confirmed: BigDecimal,
    pub deaths: BigDecimal,
    pub recovered: BigDecimal,
}

impl StoredRecord {
    /// Builds the item written for this record under identifier `id`.
    pub fn to_item(&self, id: &str) -> Item {
        Item::new()
            .set_string(PARTITION_KEY, id)
            .set_string(SORT_KEY, self.country.as_str())
            .set_string(ATTR_STATE, self.state.as_str())
            .set_string(ATTR_LAST_UPDATE, self.last_update.as_str())
            .set_number(ATTR_CONFIRMED, &self.confirmed)
            .set_number(ATTR_DEATHS, &self.deaths)
            .set_number(ATTR_RECOVERED, &self.recovered)
    }
}

/// Maps one row. `line` is the 1-based row number used in error messages.
pub fn transform_row(row: ReportRow, line: usize) -> Result<StoredRecord> {
    let state = row
        .region
        .filter(|region| !region.is_empty())
        .unwrap_or_else(|| STATE_NOT_AVAILABLE.to_string());

    Ok(StoredRecord {
        confirmed: parse_count(&row.confirmed, "Confirmed", line)?,
        deaths: parse_count(&row.deaths, "Deaths", line)?,
        recovered: parse_count(&row.recovered, "Recovered", line)?,
        country: row.country,
        state,
        last_update: row.last_update,
    })
}

/// Lazily maps rows to records, preserving order. Single pass.
///
/// Counts keep the textual precision of the source: `"10.0"` is stored as
/// `10.0`, not `10`. Nothing goes through `f64`.
pub fn transform<I>(rows: I) -> impl Iterator<Item = Result<StoredRecord>>
where
    I: IntoIterator<Item = ReportRow>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| transform_row(row, i + 1))
}

fn parse_count(raw: &str, column: &str, line: usize) -> Result<BigDecimal> {
    BigDecimal::from_str(raw.trim())
        .with_context(|| format!("row {line}: {column} value {raw:?} is not a number"))
}
