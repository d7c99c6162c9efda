//! Report shapes for export and display.
//!
//! Everything here is formatting. Values come straight from the record
//! and the calculator result and are never re-derived; the only
//! arithmetic below is rounding for display.

use chrono::NaiveDate;
use serde::Serialize;

use super::factors::FIELDS;
use super::models::{ActivityRecord, EmissionsResult, EntryKind};

/// One labelled value in the flat export table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRow {
    pub parameter: &'static str,
    pub value: f64,
}

/// One emissions category in the report's results table.
#[derive(Debug, Clone, Serialize)]
pub struct EmissionRow {
    pub category: &'static str,
    pub kg: f64,
    pub tonnes: f64,
    /// Share of the total; absent on the total row itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

/// The textual summary block at the end of a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Grand total at two decimals
    pub total_line: String,
    /// One line per scope, tonnes and share at one decimal
    pub scope_lines: [String; 3],
    /// Generation date, e.g. "March 05, 2024"
    pub generated_on: String,
    /// How the data entered the system
    pub entry_label: &'static str,
}

/// Full three-section report: raw activity data, emissions results, and
/// the textual summary.
#[derive(Debug, Clone, Serialize)]
pub struct EmissionsReport {
    pub activity: Vec<ParameterRow>,
    pub emissions: [EmissionRow; 4],
    pub summary: ReportSummary,
}

/// The 22 activity fields as labelled rows, in canonical field order.
fn activity_rows(record: &ActivityRecord) -> Vec<ParameterRow> {
    FIELDS
        .iter()
        .map(|spec| ParameterRow {
            parameter: spec.label,
            value: record.get(spec.name).unwrap_or(0.0),
        })
        .collect()
}

/// Flat export table: every activity field in canonical order, then the
/// four scope totals in tonnes. Fixed 26-row shape; the shell serializes
/// it as CSV or a spreadsheet verbatim.
pub fn flat_table(record: &ActivityRecord, result: &EmissionsResult) -> Vec<ParameterRow> {
    let mut rows = activity_rows(record);
    rows.push(ParameterRow {
        parameter: "Scope 1 Emissions (tCO2e/year)",
        value: result.scope1_tonnes,
    });
    rows.push(ParameterRow {
        parameter: "Scope 2 Emissions (tCO2e/year)",
        value: result.scope2_tonnes,
    });
    rows.push(ParameterRow {
        parameter: "Scope 3 Emissions (tCO2e/year)",
        value: result.scope3_tonnes,
    });
    rows.push(ParameterRow {
        parameter: "Total Emissions (tCO2e/year)",
        value: result.total_tonnes,
    });
    rows
}

/// Assemble the three-section report.
///
/// The generation date is a parameter so the formatter stays pure; the
/// HTTP layer passes today's date.
pub fn build_report(
    record: &ActivityRecord,
    result: &EmissionsResult,
    entry: EntryKind,
    generated: NaiveDate,
) -> EmissionsReport {
    let emissions = [
        EmissionRow {
            category: "Scope 1 (Direct)",
            kg: result.scope1_kg,
            tonnes: result.scope1_tonnes,
            percent: Some(result.scope1_pct),
        },
        EmissionRow {
            category: "Scope 2 (Energy)",
            kg: result.scope2_kg,
            tonnes: result.scope2_tonnes,
            percent: Some(result.scope2_pct),
        },
        EmissionRow {
            category: "Scope 3 (Value Chain)",
            kg: result.scope3_kg,
            tonnes: result.scope3_tonnes,
            percent: Some(result.scope3_pct),
        },
        EmissionRow {
            category: "Total",
            kg: result.total_kg,
            tonnes: result.total_tonnes,
            percent: None,
        },
    ];

    let summary = ReportSummary {
        total_line: format!("Total Emissions: {:.2} tCO2e/year", result.total_tonnes),
        scope_lines: [
            format!(
                "Scope 1 (Direct): {:.1} tCO2e ({:.1}%)",
                result.scope1_tonnes, result.scope1_pct
            ),
            format!(
                "Scope 2 (Energy): {:.1} tCO2e ({:.1}%)",
                result.scope2_tonnes, result.scope2_pct
            ),
            format!(
                "Scope 3 (Value Chain): {:.1} tCO2e ({:.1}%)",
                result.scope3_tonnes, result.scope3_pct
            ),
        ],
        generated_on: generated.format("%B %d, %Y").to_string(),
        entry_label: entry.label(),
    };

    EmissionsReport {
        activity: activity_rows(record),
        emissions,
        summary,
    }
}
