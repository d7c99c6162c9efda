//! Restaurant carbon footprint module.
//!
//! GHG Protocol scope 1/2/3 estimation as HTTP endpoints: the Streamlit
//! shell collects the data and renders the charts, this module owns every
//! number in between. Entry normalization, plausibility checks, the
//! factor arithmetic, and report shapes all live here.

mod builder;
mod calculator;
mod factors;
mod models;
mod report;
mod routes;
mod validator;

pub use builder::ParseError;
pub use routes::router;

/// Tool identifier echoed in responses.
pub const TOOL: &str = "carboncalc-footprint";
/// Tool version echoed in responses.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Accounting method behind the numbers.
pub const METHOD: &str = "GHG Protocol (Scope 1/2/3)";
