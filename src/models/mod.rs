//! Domain models for IPv4 address information.
//!
//! - [`ipv4`] - dotted-quad codec over 32-bit addresses
//! - [`SubnetReport`] - every derived field for one input

mod ipv4;
mod report;

// Re-export public types
pub use ipv4::{
    format, octets, parse, to_binary_text, to_binary_text_str, validate, Address, Mask, MAX_LENGTH,
};
pub use report::{
    ReportRow, SubnetReport, SECTION_BROADCAST, SECTION_CIDR, SECTION_IP_INFO, SECTION_NETWORK,
    SECTION_OTHER, SECTION_SUBNET,
};
