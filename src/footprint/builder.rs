//! Activity Record Builder.
//!
//! Normalizes every entry path (manual form, quick entry, upload row,
//! sample profile) into one canonical [`ActivityRecord`]. Precedence
//! between paths is the shell's concern; by the time a source reaches
//! this module it has already been chosen.

use std::collections::BTreeMap;
use std::num::ParseFloatError;

use thiserror::Error;

use super::factors::FIELDS;
use super::models::{ActivityRecord, ActivitySource, BuiltRecord};

/// Failure while parsing an uploaded delimited file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Data row shaped differently than the header.
    #[error("malformed upload: header has {header} columns, data row has {row}")]
    ColumnMismatch { header: usize, row: usize },
    /// A header with nothing under it, or an empty body.
    #[error("upload has no data row")]
    NoDataRow,
    /// A recognized column holding something that is not a number.
    #[error("column '{column}' is not numeric: {source}")]
    BadNumber {
        column: String,
        source: ParseFloatError,
    },
}

/// Base quantities for one canned restaurant profile. Everything not
/// listed here is derived by [`sample_record`].
struct ProfileBase {
    name: &'static str,
    lpg_used: f64,
    generator_fuel: f64,
    electricity: f64,
    rice_kg: f64,
    vegetables_kg: f64,
    milk_liters: f64,
    staff_count: i64,
    customer_visits: i64,
}

const PROFILES: [ProfileBase; 4] = [
    ProfileBase {
        name: "Small Dosa Shop",
        lpg_used: 300.0,
        generator_fuel: 50.0,
        electricity: 8000.0,
        rice_kg: 1500.0,
        vegetables_kg: 1000.0,
        milk_liters: 800.0,
        staff_count: 5,
        customer_visits: 10_000,
    },
    ProfileBase {
        name: "Medium Restaurant",
        lpg_used: 500.0,
        generator_fuel: 100.0,
        electricity: 12_000.0,
        rice_kg: 2000.0,
        vegetables_kg: 1500.0,
        milk_liters: 1000.0,
        staff_count: 8,
        customer_visits: 15_000,
    },
    ProfileBase {
        name: "Large Restaurant",
        lpg_used: 800.0,
        generator_fuel: 200.0,
        electricity: 20_000.0,
        rice_kg: 3000.0,
        vegetables_kg: 2500.0,
        milk_liters: 1500.0,
        staff_count: 15,
        customer_visits: 25_000,
    },
    ProfileBase {
        name: "Food Court Stall",
        lpg_used: 200.0,
        generator_fuel: 30.0,
        electricity: 5000.0,
        rice_kg: 800.0,
        vegetables_kg: 600.0,
        milk_liters: 400.0,
        staff_count: 3,
        customer_visits: 8000,
    },
];

/// Normalize any entry source into a canonical record.
///
/// Total over all inputs: unknown field names are dropped, missing
/// upload columns become zero with a notice, and unknown profile names
/// fall back to the medium profile.
pub fn build(source: &ActivitySource) -> BuiltRecord {
    let entry = source.entry_kind();
    match source {
        ActivitySource::Manual { fields } | ActivitySource::QuickEntry { fields } => BuiltRecord {
            record: from_fields(fields),
            notices: Vec::new(),
            entry,
        },
        ActivitySource::Upload { row } => {
            let notices = FIELDS
                .iter()
                .filter(|spec| !row.contains_key(spec.name))
                .map(|spec| format!("column '{}' missing from upload, defaulted to 0", spec.name))
                .collect();
            BuiltRecord {
                record: from_fields(row),
                notices,
                entry,
            }
        }
        ActivitySource::SampleProfile { name } => BuiltRecord {
            record: sample_record(name),
            notices: Vec::new(),
            entry,
        },
    }
}

/// Fill a record from a name/value map. Recognized names are copied in,
/// anything else is dropped, absent fields stay zero.
fn from_fields(fields: &BTreeMap<String, f64>) -> ActivityRecord {
    let mut record = ActivityRecord::default();
    for (name, value) in fields {
        record.set(name, *value);
    }
    record
}

/// Expand a named profile into a complete record.
///
/// Only the eight base quantities vary per profile; the rest is filled
/// with fixed ratios so the sample stays internally consistent. Derived
/// counts round to the nearest whole number.
fn sample_record(name: &str) -> ActivityRecord {
    let base = PROFILES
        .iter()
        .find(|profile| profile.name == name)
        .unwrap_or(&PROFILES[1]);

    let visits = base.customer_visits as f64;
    ActivityRecord {
        lpg_used: base.lpg_used,
        generator_fuel: base.generator_fuel,
        refrigerant_leak: 0.0,
        owned_vehicle_fuel: 0.0,
        electricity: base.electricity,
        chilled_water: 0.0,
        rice_kg: base.rice_kg,
        lentils_kg: base.rice_kg * 0.25,
        vegetables_kg: base.vegetables_kg,
        milk_liters: base.milk_liters,
        ghee_kg: base.milk_liters * 0.2,
        spices_kg: base.vegetables_kg * 0.1,
        oil_liters: base.vegetables_kg * 0.2,
        upstream_transport_km: base.rice_kg * 2.0,
        food_waste_kg: base.rice_kg * 0.25,
        packaging_waste_kg: visits * 0.02,
        staff_count: base.staff_count,
        avg_commute_km: 5.0,
        business_travel_km: 100.0,
        third_party_deliveries: (visits * 0.3).round() as i64,
        customer_visits: base.customer_visits,
        takeaway_containers: (visits * 0.4).round() as i64,
    }
}

/// Parse the first data row of an uploaded delimited file into a
/// name/value map keyed by canonical field name.
///
/// Only recognized columns are parsed; stray text columns (restaurant
/// name, notes) are skipped outright and cannot fail the upload. Empty
/// cells count as absent. Rows beyond the first are ignored.
pub fn parse_upload(text: &str) -> Result<BTreeMap<String, f64>, ParseError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header = match lines.next() {
        Some(line) => split_row(line),
        None => return Err(ParseError::NoDataRow),
    };
    let row = match lines.next() {
        Some(line) => split_row(line),
        None => return Err(ParseError::NoDataRow),
    };
    if row.len() != header.len() {
        return Err(ParseError::ColumnMismatch {
            header: header.len(),
            row: row.len(),
        });
    }

    let mut fields = BTreeMap::new();
    for (column, cell) in header.iter().zip(row.iter()) {
        if cell.is_empty() {
            continue;
        }
        if !FIELDS.iter().any(|spec| spec.name == column.as_str()) {
            continue;
        }
        let value = cell.parse::<f64>().map_err(|source| ParseError::BadNumber {
            column: column.clone(),
            source,
        })?;
        fields.insert(column.clone(), value);
    }
    Ok(fields)
}

/// Minimal cell splitter with quote support; commas inside double quotes
/// do not break cells.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() || line.ends_with(',') {
        cells.push(current.trim().to_string());
    }
    cells
}
