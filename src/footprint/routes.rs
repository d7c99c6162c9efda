//! HTTP route handlers for the footprint API.

use axum::{
    extract::Path,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::error::Result;

use super::builder;
use super::calculator;
use super::factors::{FACTOR_LISTING, FIELDS};
use super::models::{
    ActivitySource, BuiltRecord, CalculateResponse, ReportRequest, SourceRequest,
    ValidateRequest, ValidationOutcome,
};
use super::report::{build_report, flat_table, EmissionsReport, ParameterRow};
use super::validator;
use super::{METHOD, TOOL, TOOL_VERSION};

/// Create the footprint router with all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/factors", get(factor_table))
        .route("/sample/:name", get(sample))
        .route("/build", post(build))
        .route("/validate", post(validate))
        .route("/calculate", post(calculate))
        .route("/report", post(report))
        .route("/export", post(export))
        .route("/upload", post(upload))
}

/// Health check for the footprint engine.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "footprint-engine",
        "version": TOOL_VERSION,
        "method": METHOD
    }))
}

/// Emission factors and typical ranges.
///
/// The shell renders these on its info page and uses the ranges for form
/// bounds, so serving them keeps shell and engine in lockstep.
async fn factor_table() -> Json<serde_json::Value> {
    let factors: Vec<_> = FACTOR_LISTING
        .iter()
        .map(|(name, factor, unit)| {
            serde_json::json!({ "name": name, "factor": factor, "unit": unit })
        })
        .collect();
    let ranges: Vec<_> = FIELDS
        .iter()
        .map(|spec| {
            serde_json::json!({
                "name": spec.name,
                "label": spec.label,
                "unit": spec.unit,
                "min": spec.min,
                "max": spec.max,
                "integer": spec.integer,
                "primary": spec.primary,
            })
        })
        .collect();
    Json(serde_json::json!({
        "method": METHOD,
        "factors": factors,
        "ranges": ranges
    }))
}

/// Canned profile lookup; unknown names resolve to the medium profile.
async fn sample(Path(name): Path<String>) -> Json<BuiltRecord> {
    Json(builder::build(&ActivitySource::SampleProfile { name }))
}

/// Normalize a source into a canonical record without calculating.
async fn build(Json(request): Json<SourceRequest>) -> Json<BuiltRecord> {
    Json(builder::build(&request.source))
}

/// Run plausibility checks on an already-built record.
async fn validate(Json(request): Json<ValidateRequest>) -> Json<ValidationOutcome> {
    Json(validator::validate(&request.record))
}

/// Full pipeline: build, validate, calculate.
///
/// Validation errors never block the arithmetic; how much to trust a
/// flagged result is the caller's decision.
async fn calculate(Json(request): Json<SourceRequest>) -> Json<CalculateResponse> {
    Json(run_pipeline(&request))
}

/// Three-section report for a calculated result, dated today.
async fn report(Json(request): Json<ReportRequest>) -> Json<EmissionsReport> {
    let generated = Utc::now().date_naive();
    Json(build_report(
        &request.record,
        &request.result,
        request.entry,
        generated,
    ))
}

/// Flat parameter table the shell serializes as CSV or a spreadsheet.
async fn export(Json(request): Json<ReportRequest>) -> Json<Vec<ParameterRow>> {
    Json(flat_table(&request.record, &request.result))
}

/// Raw delimited upload: parse the first data row, then run the full
/// pipeline over it. Parse failures are 400s; a partial record is never
/// calculated.
async fn upload(body: String) -> Result<Json<CalculateResponse>> {
    let row = builder::parse_upload(&body)?;
    let request = SourceRequest {
        source: ActivitySource::Upload { row },
    };
    Ok(Json(run_pipeline(&request)))
}

/// Build, validate, and calculate in one pass, hashing the canonical
/// request so the shell can tie a result to the exact input.
fn run_pipeline(request: &SourceRequest) -> CalculateResponse {
    // Serialize request for input hash
    let input_json = serde_json::to_string(request).unwrap_or_default();
    let built = builder::build(&request.source);
    let validation = validator::validate(&built.record);
    let result = calculator::calculate(&built.record);

    if !validation.is_valid {
        tracing::debug!(
            "calculated over record with {} validation errors",
            validation.errors.len()
        );
    }

    CalculateResponse {
        tool: TOOL,
        tool_version: TOOL_VERSION,
        method: METHOD,
        record: built.record,
        notices: built.notices,
        entry: built.entry,
        entry_label: built.entry.label(),
        validation,
        result,
        input_hash: sha256_hex(&input_json),
    }
}

/// Compute SHA256 hash of input string.
fn sha256_hex(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let digest = hasher.finalize();
    format!("sha256:{}", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_on_sample_profile() {
        let request = SourceRequest {
            source: ActivitySource::SampleProfile {
                name: "Medium Restaurant".to_string(),
            },
        };
        let response = run_pipeline(&request);

        assert_eq!(response.tool, TOOL);
        assert_eq!(response.method, METHOD);
        assert!(response.validation.is_valid);
        assert!(response.notices.is_empty());
        assert_eq!(response.entry_label, "Derived/Batch Entry");
        assert!((response.result.total_kg - 31_131.5).abs() < 1e-9);
    }

    #[test]
    fn test_pipeline_reports_errors_but_still_calculates() {
        let fields = std::collections::BTreeMap::from([
            ("lpg_used".to_string(), -10.0),
            ("electricity".to_string(), 1000.0),
        ]);
        let request = SourceRequest {
            source: ActivitySource::Manual { fields },
        };
        let response = run_pipeline(&request);

        assert!(!response.validation.is_valid);
        assert_eq!(response.validation.errors.len(), 1);
        // Arithmetic still ran, negative term included.
        assert!((response.result.scope2_kg - 820.0).abs() < 1e-9);
    }

    #[test]
    fn test_input_hash_shape() {
        let request = SourceRequest {
            source: ActivitySource::SampleProfile {
                name: "Small Dosa Shop".to_string(),
            },
        };
        let response = run_pipeline(&request);
        assert!(response.input_hash.starts_with("sha256:"));
        assert_eq!(response.input_hash.len(), 7 + 64); // "sha256:" + 64 hex chars

        // Same request, same hash.
        let again = run_pipeline(&request);
        assert_eq!(response.input_hash, again.input_hash);
    }
}
