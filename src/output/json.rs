//! JSON report output.

use crate::models::SubnetReport;
use std::error::Error;

/// Pretty printed JSON of the full report.
pub fn render_json(report: &SubnetReport) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(report).map_err(|e| format!("Error serializing JSON: {e}").into())
}
