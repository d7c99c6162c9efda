//! Plausibility checks over a canonical activity record.
//!
//! Errors mark data that cannot be right (negative quantities); warnings
//! mark data that is merely suspicious. Derived sample records go through
//! exactly the same checks as hand-typed input.

use super::factors::FIELDS;
use super::models::{ActivityRecord, ValidationOutcome};

/// Customers-per-staff ratio above which footfall is flagged as implausible.
pub const MAX_CUSTOMERS_PER_STAFF: f64 = 10_000.0;

/// Check every field against its typical range, then the cross-field
/// staffing ratio.
///
/// Findings come out in field order with the ratio check last. The three
/// per-field arms are mutually exclusive: a negative value is an error and
/// nothing else, a too-high value warns once, and a zero only warns for
/// the primary drivers (lpg, electricity, rice, vegetables) where a real
/// restaurant cannot plausibly report none.
pub fn validate(record: &ActivityRecord) -> ValidationOutcome {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for spec in FIELDS.iter() {
        let value = match record.get(spec.name) {
            Some(value) => value,
            None => continue,
        };
        if value < 0.0 {
            errors.push(format!(
                "{}: cannot be negative ({} {})",
                spec.name, value, spec.unit
            ));
        } else if value > spec.max {
            warnings.push(format!(
                "{}: value seems high ({} {}, typical max: {} {})",
                spec.name, value, spec.unit, spec.max, spec.unit
            ));
        } else if value == 0.0 && spec.primary {
            warnings.push(format!(
                "{}: value is 0 - please verify if this is correct",
                spec.name
            ));
        }
    }

    // Division guarded: never computed for an unstaffed record.
    if record.staff_count > 0 && record.customer_visits > 0 {
        let ratio = record.customer_visits as f64 / record.staff_count as f64;
        if ratio > MAX_CUSTOMERS_PER_STAFF {
            warnings.push(format!(
                "High customer-to-staff ratio ({ratio:.0} customers per staff)"
            ));
        }
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        warnings,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::builder::build;
    use crate::footprint::models::ActivitySource;

    fn medium_record() -> ActivityRecord {
        build(&ActivitySource::SampleProfile {
            name: "Medium Restaurant".to_string(),
        })
        .record
    }

    #[test]
    fn test_clean_record_has_no_findings() {
        let outcome = validate(&medium_record());
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);
        assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    }

    #[test]
    fn test_negative_value_is_error() {
        let mut record = medium_record();
        record.generator_fuel = -5.0;
        let outcome = validate(&record);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors,
            vec!["generator_fuel: cannot be negative (-5 L)".to_string()]
        );
    }

    #[test]
    fn test_negative_count_is_error() {
        let mut record = medium_record();
        record.staff_count = -2;
        let outcome = validate(&record);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors,
            vec!["staff_count: cannot be negative (-2 people)".to_string()]
        );
    }

    #[test]
    fn test_negative_primary_skips_zero_and_high_arms() {
        let mut record = medium_record();
        record.rice_kg = -1.0;
        let outcome = validate(&record);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].starts_with("rice_kg:"));
        assert!(outcome.warnings.iter().all(|w| !w.contains("rice_kg")));
    }

    #[test]
    fn test_max_boundary_is_inclusive() {
        let mut record = medium_record();
        record.electricity = 50_000.0;
        assert!(validate(&record).warnings.is_empty());

        record.electricity = 50_000.01;
        let outcome = validate(&record);
        assert_eq!(
            outcome.warnings,
            vec![
                "electricity: value seems high (50000.01 kWh, typical max: 50000 kWh)".to_string()
            ]
        );
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_zero_primary_fields_warn() {
        let outcome = validate(&ActivityRecord::default());
        assert!(outcome.is_valid);
        assert_eq!(
            outcome.warnings,
            vec![
                "lpg_used: value is 0 - please verify if this is correct".to_string(),
                "electricity: value is 0 - please verify if this is correct".to_string(),
                "rice_kg: value is 0 - please verify if this is correct".to_string(),
                "vegetables_kg: value is 0 - please verify if this is correct".to_string(),
            ]
        );
    }

    #[test]
    fn test_customer_staff_ratio() {
        let mut record = medium_record();
        record.staff_count = 1;
        record.customer_visits = 20_000;
        let outcome = validate(&record);
        assert_eq!(
            outcome.warnings.last().map(String::as_str),
            Some("High customer-to-staff ratio (20000 customers per staff)")
        );

        // Exactly at the threshold is still plausible.
        record.staff_count = 2;
        assert!(validate(&record).warnings.is_empty());

        // No staff, no division.
        record.staff_count = 0;
        let outcome = validate(&record);
        assert!(outcome.warnings.iter().all(|w| !w.contains("ratio")));
    }
}
