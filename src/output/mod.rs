//! Output formatting for the report.
//!
//! - [`terminal`] - centered text box
//! - [`json`] - JSON document

mod json;
mod terminal;

use crate::config::{Config, OutputFormat};
use crate::models::SubnetReport;
use std::error::Error;

pub use json::render_json;
pub use terminal::{create_box, render_box, report_lines};

/// Render `report` in the format selected by `config`.
pub fn render(report: &SubnetReport, config: &Config) -> Result<String, Box<dyn Error>> {
    log::debug!("render({}) as {:?}", report.ip, config.output);
    match config.output {
        OutputFormat::Box => Ok(render_box(report, config.color)),
        OutputFormat::Json => render_json(report),
    }
}
