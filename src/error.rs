//! Application error type and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::footprint::{ParseError, TOOL, TOOL_VERSION};

/// Errors a handler can surface to the wire.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Parse(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "tool": TOOL,
            "tool_version": TOOL_VERSION,
        }));
        (status, body).into_response()
    }
}
