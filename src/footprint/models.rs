//! Data types for the footprint engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical activity record: one restaurant, one reporting year.
///
/// A flat record of annual quantities. Missing wire fields deserialize to
/// zero so the calculator is always total, and counts are signed on
/// purpose: this is a canonical *shape*, not a proof of validity, and the
/// validator must be able to see negative garbage to flag it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ActivityRecord {
    // Direct combustion and leakage (scope 1)
    /// LPG or natural gas used for cooking (kg/year)
    pub lpg_used: f64,
    /// Diesel or petrol burned in backup generators (liters/year)
    pub generator_fuel: f64,
    /// Refrigerant lost from fridges and ACs (kg/year)
    pub refrigerant_leak: f64,
    /// Fuel used by restaurant-owned delivery vehicles (liters/year)
    pub owned_vehicle_fuel: f64,

    // Purchased energy (scope 2)
    /// Grid electricity (kWh/year)
    pub electricity: f64,
    /// Purchased chilled water or steam (kWh-equivalent/year)
    pub chilled_water: f64,

    // Value chain (scope 3)
    /// Rice purchased (kg/year)
    pub rice_kg: f64,
    /// Lentils purchased (kg/year)
    pub lentils_kg: f64,
    /// Vegetables purchased (kg/year)
    pub vegetables_kg: f64,
    /// Milk purchased (liters/year)
    pub milk_liters: f64,
    /// Ghee purchased (kg/year)
    pub ghee_kg: f64,
    /// Spices purchased (kg/year)
    pub spices_kg: f64,
    /// Cooking oil purchased (liters/year)
    pub oil_liters: f64,
    /// Ingredient delivery distance from suppliers (km/year)
    pub upstream_transport_km: f64,
    /// Food waste generated (kg/year)
    pub food_waste_kg: f64,
    /// Packaging waste generated (kg/year)
    pub packaging_waste_kg: f64,
    /// Number of staff
    pub staff_count: i64,
    /// Average one-way staff commute (km)
    pub avg_commute_km: f64,
    /// Business travel (km/year)
    pub business_travel_km: f64,
    /// Third-party delivery orders per year
    pub third_party_deliveries: i64,
    /// Estimated customer visits per year
    pub customer_visits: i64,
    /// Takeaway containers used per year
    pub takeaway_containers: i64,
}

impl ActivityRecord {
    /// Read a field by canonical name. Counts are widened to f64.
    pub fn get(&self, name: &str) -> Option<f64> {
        let value = match name {
            "lpg_used" => self.lpg_used,
            "generator_fuel" => self.generator_fuel,
            "refrigerant_leak" => self.refrigerant_leak,
            "owned_vehicle_fuel" => self.owned_vehicle_fuel,
            "electricity" => self.electricity,
            "chilled_water" => self.chilled_water,
            "rice_kg" => self.rice_kg,
            "lentils_kg" => self.lentils_kg,
            "vegetables_kg" => self.vegetables_kg,
            "milk_liters" => self.milk_liters,
            "ghee_kg" => self.ghee_kg,
            "spices_kg" => self.spices_kg,
            "oil_liters" => self.oil_liters,
            "upstream_transport_km" => self.upstream_transport_km,
            "food_waste_kg" => self.food_waste_kg,
            "packaging_waste_kg" => self.packaging_waste_kg,
            "staff_count" => self.staff_count as f64,
            "avg_commute_km" => self.avg_commute_km,
            "business_travel_km" => self.business_travel_km,
            "third_party_deliveries" => self.third_party_deliveries as f64,
            "customer_visits" => self.customer_visits as f64,
            "takeaway_containers" => self.takeaway_containers as f64,
            _ => return None,
        };
        Some(value)
    }

    /// Write a field by canonical name, returning false for unknown names.
    ///
    /// Count fields round to the nearest whole number: derivation ratios
    /// like `customer_visits * 0.3` land a hair under the intended count
    /// in IEEE-754, and truncation would eat a whole order.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        match name {
            "lpg_used" => self.lpg_used = value,
            "generator_fuel" => self.generator_fuel = value,
            "refrigerant_leak" => self.refrigerant_leak = value,
            "owned_vehicle_fuel" => self.owned_vehicle_fuel = value,
            "electricity" => self.electricity = value,
            "chilled_water" => self.chilled_water = value,
            "rice_kg" => self.rice_kg = value,
            "lentils_kg" => self.lentils_kg = value,
            "vegetables_kg" => self.vegetables_kg = value,
            "milk_liters" => self.milk_liters = value,
            "ghee_kg" => self.ghee_kg = value,
            "spices_kg" => self.spices_kg = value,
            "oil_liters" => self.oil_liters = value,
            "upstream_transport_km" => self.upstream_transport_km = value,
            "food_waste_kg" => self.food_waste_kg = value,
            "packaging_waste_kg" => self.packaging_waste_kg = value,
            "staff_count" => self.staff_count = value.round() as i64,
            "avg_commute_km" => self.avg_commute_km = value,
            "business_travel_km" => self.business_travel_km = value,
            "third_party_deliveries" => self.third_party_deliveries = value.round() as i64,
            "customer_visits" => self.customer_visits = value.round() as i64,
            "takeaway_containers" => self.takeaway_containers = value.round() as i64,
            _ => return false,
        }
        true
    }
}

/// Which entry path produced the raw data.
///
/// Resolved by the shell before it calls the engine; the engine has no
/// notion of precedence between paths. Field maps are ordered so the
/// serialized request, and therefore its input hash, is stable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivitySource {
    /// Field-by-field entry from the full form.
    Manual {
        fields: BTreeMap<String, f64>,
    },
    /// The shortened quick-entry form (a subset of fields).
    QuickEntry {
        fields: BTreeMap<String, f64>,
    },
    /// One parsed row from an uploaded spreadsheet or CSV.
    Upload {
        row: BTreeMap<String, f64>,
    },
    /// A canned restaurant profile by name.
    SampleProfile {
        name: String,
    },
}

impl ActivitySource {
    /// Collapse the source to the label category used in reports.
    pub fn entry_kind(&self) -> EntryKind {
        match self {
            ActivitySource::Manual { .. } | ActivitySource::QuickEntry { .. } => EntryKind::Manual,
            ActivitySource::Upload { .. } | ActivitySource::SampleProfile { .. } => {
                EntryKind::DerivedBatch
            }
        }
    }
}

/// Report label category: hand-typed data or derived/batch data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Manual,
    DerivedBatch,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Manual => "Manual Entry",
            EntryKind::DerivedBatch => "Derived/Batch Entry",
        }
    }
}

/// Builder output: the canonical record plus anything the caller should
/// surface to the user (missing upload columns).
#[derive(Debug, Clone, Serialize)]
pub struct BuiltRecord {
    /// The normalized record
    pub record: ActivityRecord,
    /// Non-fatal notices raised while building
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
    /// Label category for reports
    pub entry: EntryKind,
}

/// Result of plausibility checks over a record.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    /// True iff no errors were found; warnings never clear this flag
    pub is_valid: bool,
    /// Advisory findings, in field order
    pub warnings: Vec<String>,
    /// Fatal findings (negative values), in field order
    pub errors: Vec<String>,
}

/// Scope totals in kg CO2e plus the derived tonne values and percentage
/// split. Filled entirely by the calculator; formatters read, never derive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EmissionsResult {
    /// Scope 1 (direct) emissions in kg CO2e
    pub scope1_kg: f64,
    /// Scope 2 (purchased energy) emissions in kg CO2e
    pub scope2_kg: f64,
    /// Scope 3 (value chain) emissions in kg CO2e
    pub scope3_kg: f64,
    /// Grand total in kg CO2e
    pub total_kg: f64,
    /// Scope 1 in tonnes CO2e
    pub scope1_tonnes: f64,
    /// Scope 2 in tonnes CO2e
    pub scope2_tonnes: f64,
    /// Scope 3 in tonnes CO2e
    pub scope3_tonnes: f64,
    /// Grand total in tonnes CO2e
    pub total_tonnes: f64,
    /// Scope 1 share of the total, in percent (0 when the total is 0)
    pub scope1_pct: f64,
    /// Scope 2 share of the total, in percent (0 when the total is 0)
    pub scope2_pct: f64,
    /// Scope 3 share of the total, in percent (0 when the total is 0)
    pub scope3_pct: f64,
}

/// Request wrapping an activity source.
#[derive(Debug, Deserialize, Serialize)]
pub struct SourceRequest {
    /// Where the raw values came from
    pub source: ActivitySource,
}

/// Request carrying an already-built record for standalone validation.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// Record to check
    pub record: ActivityRecord,
}

/// Request for the report and export endpoints.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    /// Record the result was calculated from
    pub record: ActivityRecord,
    /// Calculator output for that record
    pub result: EmissionsResult,
    /// Label category (defaults to manual entry)
    #[serde(default = "default_entry")]
    pub entry: EntryKind,
}

fn default_entry() -> EntryKind {
    EntryKind::Manual
}

/// Response payload from the calculation pipeline.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// Tool identifier
    pub tool: &'static str,
    /// Tool version
    pub tool_version: &'static str,
    /// Accounting method
    pub method: &'static str,
    /// The normalized record the numbers were computed from
    pub record: ActivityRecord,
    /// Builder notices (missing upload columns)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
    /// Label category for reports
    pub entry: EntryKind,
    /// Human-readable form of `entry`
    pub entry_label: &'static str,
    /// Plausibility findings; errors mark the result untrusted but never
    /// stop the arithmetic
    pub validation: ValidationOutcome,
    /// Scope totals and percentage split
    pub result: EmissionsResult,
    /// SHA256 hash of the canonical input
    pub input_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_covers_all_fields() {
        let record = ActivityRecord::default();
        for spec in crate::footprint::factors::FIELDS.iter() {
            assert_eq!(record.get(spec.name), Some(0.0), "{}", spec.name);
        }
        assert_eq!(record.get("not_a_field"), None);
    }

    #[test]
    fn test_set_rounds_counts() {
        let mut record = ActivityRecord::default();
        // 15000 * 0.3 evaluates just below 4500 in IEEE-754.
        assert!(record.set("third_party_deliveries", 15000.0 * 0.3));
        assert_eq!(record.third_party_deliveries, 4500);
        assert!(record.set("lpg_used", 12.5));
        assert_eq!(record.lpg_used, 12.5);
        assert!(!record.set("not_a_field", 1.0));
    }

    #[test]
    fn test_missing_wire_fields_default_to_zero() {
        let record: ActivityRecord =
            serde_json::from_str(r#"{"lpg_used": 500.0, "staff_count": 8}"#).unwrap();
        assert_eq!(record.lpg_used, 500.0);
        assert_eq!(record.staff_count, 8);
        assert_eq!(record.electricity, 0.0);
        assert_eq!(record.customer_visits, 0);
    }

    #[test]
    fn test_source_entry_kinds() {
        let manual = ActivitySource::Manual { fields: BTreeMap::new() };
        let quick = ActivitySource::QuickEntry { fields: BTreeMap::new() };
        let upload = ActivitySource::Upload { row: BTreeMap::new() };
        let sample = ActivitySource::SampleProfile { name: "Medium Restaurant".into() };
        assert_eq!(manual.entry_kind(), EntryKind::Manual);
        assert_eq!(quick.entry_kind(), EntryKind::Manual);
        assert_eq!(upload.entry_kind(), EntryKind::DerivedBatch);
        assert_eq!(sample.entry_kind(), EntryKind::DerivedBatch);
        assert_eq!(EntryKind::Manual.label(), "Manual Entry");
        assert_eq!(EntryKind::DerivedBatch.label(), "Derived/Batch Entry");
    }

    #[test]
    fn test_source_wire_format() {
        let source: ActivitySource = serde_json::from_str(
            r#"{"kind": "sample_profile", "name": "Small Dosa Shop"}"#,
        )
        .unwrap();
        assert!(matches!(source, ActivitySource::SampleProfile { ref name } if name == "Small Dosa Shop"));

        let source: ActivitySource =
            serde_json::from_str(r#"{"kind": "manual", "fields": {"lpg_used": 300.0}}"#).unwrap();
        match source {
            ActivitySource::Manual { fields } => assert_eq!(fields["lpg_used"], 300.0),
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
