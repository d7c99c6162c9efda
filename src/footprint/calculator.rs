//! Scope 1/2/3 emissions arithmetic.

use super::factors;
use super::models::{ActivityRecord, EmissionsResult};

/// Calendar days used to annualize the daily staff commute.
pub const COMMUTE_DAYS_PER_YEAR: f64 = 365.0;

/// Compute scope totals, tonne conversions, and the percentage split.
///
/// Pure and total: callable on any record, including one the validator
/// rejected (whether to trust the output is the caller's call). No
/// intermediate rounding anywhere; display precision belongs to the
/// report formatter.
pub fn calculate(record: &ActivityRecord) -> EmissionsResult {
    let scope1_kg = record.lpg_used * factors::LPG
        + record.generator_fuel * factors::DIESEL
        + record.refrigerant_leak * factors::REFRIGERANT
        + record.owned_vehicle_fuel * factors::PETROL;

    // Chilled water is deliberately priced at the grid factor.
    let scope2_kg = record.electricity * factors::ELECTRICITY
        + record.chilled_water * factors::ELECTRICITY;

    let commute_km = record.staff_count as f64 * record.avg_commute_km * COMMUTE_DAYS_PER_YEAR;
    let scope3_kg = record.rice_kg * factors::RICE
        + record.lentils_kg * factors::LENTILS
        + record.vegetables_kg * factors::VEGETABLES
        + record.milk_liters * factors::MILK
        + record.ghee_kg * factors::GHEE
        + record.spices_kg * factors::SPICES
        + record.oil_liters * factors::OIL
        + record.upstream_transport_km * factors::TRANSPORT
        + record.food_waste_kg * factors::FOOD_WASTE
        + record.packaging_waste_kg * factors::PACKAGING
        + commute_km * factors::COMMUTE
        + record.business_travel_km * factors::BUSINESS_TRAVEL
        + record.third_party_deliveries as f64 * factors::DELIVERY
        + record.customer_visits as f64 * factors::CUSTOMER_VISIT
        + record.takeaway_containers as f64 * factors::TAKEAWAY_CONTAINER;

    let total_kg = scope1_kg + scope2_kg + scope3_kg;

    let scope1_tonnes = scope1_kg / 1000.0;
    let scope2_tonnes = scope2_kg / 1000.0;
    let scope3_tonnes = scope3_kg / 1000.0;
    let total_tonnes = total_kg / 1000.0;

    // An all-zero record is legal; percentages are 0 there, never NaN.
    let (scope1_pct, scope2_pct, scope3_pct) = if total_kg == 0.0 {
        (0.0, 0.0, 0.0)
    } else {
        (
            scope1_tonnes / total_tonnes * 100.0,
            scope2_tonnes / total_tonnes * 100.0,
            scope3_tonnes / total_tonnes * 100.0,
        )
    };

    EmissionsResult {
        scope1_kg,
        scope2_kg,
        scope3_kg,
        total_kg,
        scope1_tonnes,
        scope2_tonnes,
        scope3_tonnes,
        total_tonnes,
        scope1_pct,
        scope2_pct,
        scope3_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::builder::build;
    use crate::footprint::models::ActivitySource;

    fn medium_result() -> EmissionsResult {
        let built = build(&ActivitySource::SampleProfile {
            name: "Medium Restaurant".to_string(),
        });
        calculate(&built.record)
    }

    #[test]
    fn test_zero_record_is_all_zero() {
        let result = calculate(&ActivityRecord::default());
        assert_eq!(result.scope1_kg, 0.0);
        assert_eq!(result.scope2_kg, 0.0);
        assert_eq!(result.scope3_kg, 0.0);
        assert_eq!(result.total_kg, 0.0);
        assert_eq!(result.total_tonnes, 0.0);
        assert_eq!(result.scope1_pct, 0.0);
        assert_eq!(result.scope2_pct, 0.0);
        assert_eq!(result.scope3_pct, 0.0);
        assert!(!result.scope1_pct.is_nan());
    }

    #[test]
    fn test_scopes_sum_to_total() {
        let result = medium_result();
        let sum = result.scope1_kg + result.scope2_kg + result.scope3_kg;
        assert!((sum - result.total_kg).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let result = medium_result();
        let sum = result.scope1_pct + result.scope2_pct + result.scope3_pct;
        assert!((sum - 100.0).abs() < 1e-6, "{sum}");
    }

    #[test]
    fn test_medium_restaurant_golden_values() {
        let result = medium_result();
        assert!((result.scope1_kg - 1759.5).abs() < 1e-9, "{}", result.scope1_kg);
        assert!((result.scope2_kg - 9840.0).abs() < 1e-9, "{}", result.scope2_kg);
        assert!((result.scope3_kg - 19_532.0).abs() < 1e-9, "{}", result.scope3_kg);
        assert!((result.total_kg - 31_131.5).abs() < 1e-9, "{}", result.total_kg);
        assert!((result.total_tonnes - 31.1315).abs() < 1e-9, "{}", result.total_tonnes);
    }

    #[test]
    fn test_scope_attribution_per_field() {
        let record = ActivityRecord {
            refrigerant_leak: 2.0,
            ..ActivityRecord::default()
        };
        let result = calculate(&record);
        assert!((result.scope1_kg - 2600.0).abs() < 1e-9);
        assert_eq!(result.scope2_kg, 0.0);
        assert_eq!(result.scope3_kg, 0.0);
        assert!((result.scope1_pct - 100.0).abs() < 1e-9);

        let record = ActivityRecord {
            chilled_water: 500.0,
            ..ActivityRecord::default()
        };
        let result = calculate(&record);
        assert!((result.scope2_kg - 410.0).abs() < 1e-9);
        assert_eq!(result.scope1_kg, 0.0);
    }

    #[test]
    fn test_commute_annualization() {
        let record = ActivityRecord {
            staff_count: 2,
            avg_commute_km: 3.0,
            ..ActivityRecord::default()
        };
        let result = calculate(&record);
        assert!((result.scope3_kg - 262.8).abs() < 1e-9, "{}", result.scope3_kg);
    }
}
