//! CSV import/export for emission inventories.
//!
//! The interchange format is a two-column CSV with a `source,emission`
//! header: one row per emission source, emission in kg CO₂. Extra columns
//! are ignored on import. A fixed three-row sample inventory is bundled
//! for download prompts and documentation.

use std::io::{Read, Write};

use thiserror::Error;

use crate::models::{EmissionInventory, EmissionSource};

/// Required CSV columns, in export order.
const COLUMNS: [&str; 2] = ["source", "emission"];

/// Errors from reading or writing inventory CSV data.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The header row lacks a required column.
    #[error("invalid dataset: missing required column '{0}'")]
    MissingColumn(&'static str),
    /// A row could not be parsed (non-numeric emission, malformed CSV).
    #[error("invalid dataset: {0}")]
    InvalidRecord(#[from] csv::Error),
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads an emission inventory from CSV.
///
/// Requires `source` and `emission` columns in the header; column order
/// and any extra columns are ignored. Rows with a non-numeric emission
/// value fail the whole import.
///
/// # Errors
/// [`DatasetError::MissingColumn`] if a required column is absent,
/// [`DatasetError::InvalidRecord`] for malformed rows.
pub fn read_inventory_csv<R: Read>(reader: R) -> Result<EmissionInventory, DatasetError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column));
        }
    }

    let mut inventory = EmissionInventory::new();
    for record in rdr.deserialize::<EmissionSource>() {
        inventory.push(record?);
    }
    Ok(inventory)
}

/// Writes an emission inventory as CSV, header included.
///
/// Numeric formatting drops trailing zeros (`1500`, not `1500.0`), matching
/// the bundled sample file.
pub fn write_inventory_csv<W: Write>(
    writer: W,
    inventory: &EmissionInventory,
) -> Result<(), DatasetError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for source in inventory.iter() {
        let emission = source.emission_kg.to_string();
        wtr.write_record([source.source.as_str(), emission.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Returns the bundled three-row sample inventory.
///
/// Shipped as a reference dataset so users can see the expected CSV shape
/// before preparing their own.
pub fn sample_inventory() -> EmissionInventory {
    EmissionInventory::new()
        .with_source(EmissionSource::new("Factory A", 1500.0))
        .with_source(EmissionSource::new("Factory B", 2300.0))
        .with_source(EmissionSource::new("Factory C", 1200.0))
}

/// Renders the bundled sample inventory as a CSV string.
pub fn sample_csv() -> Result<String, DatasetError> {
    let mut buf = Vec::new();
    write_inventory_csv(&mut buf, &sample_inventory())?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
