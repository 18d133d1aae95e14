//! Records of the television energy registry
//!
//! The registry ships as a CSV export with one row per registered model.
//! Numeric cells are decoded leniently: a cell that does not parse becomes
//! `NaN` instead of failing the row, and the number of such cells is
//! reported on the parsed [`Dataset`]. NaN values drop out of every chart
//! filter downstream, so a handful of bad cells never takes the page down.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Columns the dataset must carry. Checked against the header row before
/// any row is decoded, so a renamed column fails the load up front instead
/// of producing a column of NaN.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Brand_Reg",
    "Screen_Tech",
    "Advertised_Size_Int",
    "Avg_mode_power",
    "Star2",
];

/// A single registered television model
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TelevisionRecord {
    /// Manufacturer name as registered
    pub brand: String,
    /// Display technology label (e.g. "LCD (LED)", "OLED")
    pub screen_tech: String,
    /// Nominal screen size in inches
    pub screen_size: f64,
    /// Measured average power draw in watts
    pub avg_mode_power: f64,
    /// Energy efficiency star rating
    pub star_rating: f64,
}

/// A parsed snapshot of the registry, immutable for one page view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Every row, in file order
    pub records: Vec<TelevisionRecord>,
    /// Number of numeric cells that failed to parse and were coerced to NaN
    pub coercion_anomalies: usize,
}

/// Raw row as it appears in the CSV; numeric columns stay text so the
/// lenient coercion below can count failures.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Brand_Reg")]
    brand: String,
    #[serde(rename = "Screen_Tech")]
    screen_tech: String,
    #[serde(rename = "Advertised_Size_Int")]
    screen_size: String,
    #[serde(rename = "Avg_mode_power")]
    avg_mode_power: String,
    #[serde(rename = "Star2")]
    star_rating: String,
}

fn coerce(cell: &str, anomalies: &mut usize) -> f64 {
    match cell.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            *anomalies += 1;
            f64::NAN
        }
    }
}

/// Parse the registry CSV into typed records.
///
/// The header row is required and must contain every column in
/// [`REQUIRED_COLUMNS`]; extra columns are ignored. Structurally malformed
/// CSV fails the whole load. Unparsable numeric cells do not: they become
/// NaN and are tallied in [`Dataset::coercion_anomalies`], with a single
/// warning logged per load.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut anomalies = 0usize;

    for row in reader.deserialize::<RawRecord>() {
        let raw = row?;
        records.push(TelevisionRecord {
            brand: raw.brand,
            screen_tech: raw.screen_tech,
            screen_size: coerce(&raw.screen_size, &mut anomalies),
            avg_mode_power: coerce(&raw.avg_mode_power, &mut anomalies),
            star_rating: coerce(&raw.star_rating, &mut anomalies),
        });
    }

    if anomalies > 0 {
        tracing::warn!(
            anomalies,
            rows = records.len(),
            "numeric cells failed to parse and were coerced to NaN"
        );
    }

    Ok(Dataset {
        records,
        coercion_anomalies: anomalies,
    })
}
