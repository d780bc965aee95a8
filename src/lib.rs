// cargo watch -x 'fmt' -x 'run -- 192.168.1.10'

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{Config, OutputFormat};
pub use error::Ipv4InfoError;
pub use models::SubnetReport;
pub use processing::build_report;

/// Message shown for input that is not a dotted-quad address.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid IPv4 address";

/// Turn one input token into the text to print.
///
/// Validation and class failures become the user facing message rather than
/// an `Err`, so the caller can print it and exit normally. `Err` is kept for
/// rendering failures.
pub fn run(input: &str, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    match build_report(input) {
        Ok(report) => output::render(&report, config),
        Err(Ipv4InfoError::MalformedAddressText(_)) => Ok(INVALID_INPUT_MESSAGE.to_string()),
        Err(e @ Ipv4InfoError::UnsupportedClass(_)) => {
            log::warn!("{e}");
            Ok(e.to_string())
        }
    }
}
