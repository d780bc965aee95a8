//! The report handed to the output layer.

use crate::processing::NetworkClass;
use serde::Serialize;

/// Every derived field for one input address.
///
/// Built once by [`crate::processing::build_report`] and never mutated.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// The address as entered.
    pub ip: String,
    /// Binary form of the address.
    pub ip_binary: String,
    pub class: NetworkClass,
    pub subnet_mask: String,
    pub subnet_mask_binary: String,
    /// Longest runs of 1-bits and 0-bits in the mask.
    pub longest_bits: (u32, u32),
    pub broadcast_address: String,
    pub broadcast_binary: String,
    /// Usable host range, `"first - last"`.
    pub range: String,
    pub cidr_notation: String,
    pub wildcard: String,
    pub private: bool,
    pub network_address: String,
    pub total_ips: u64,
    /// Can be 0 or negative for /31 and /32.
    pub usable_ips: i64,
    pub prev_network: String,
    pub next_network: String,
    pub ipv6: String,
    /// The address as a single unsigned integer.
    pub decimal: u32,
}

/// One `Field: value` line of the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub section: &'static str,
    pub field: &'static str,
    pub value: String,
}

impl ReportRow {
    fn new(section: &'static str, field: &'static str, value: impl ToString) -> ReportRow {
        ReportRow {
            section,
            field,
            value: value.to_string(),
        }
    }
}

pub const SECTION_IP_INFO: &str = "IP INFO";
pub const SECTION_SUBNET: &str = "Subnet info";
pub const SECTION_BROADCAST: &str = "Broadcast info";
pub const SECTION_CIDR: &str = "CIDR info";
pub const SECTION_NETWORK: &str = "Network";
pub const SECTION_OTHER: &str = "Other";

impl SubnetReport {
    /// `private` or `public`.
    pub fn address_type(&self) -> &'static str {
        if self.private {
            "private"
        } else {
            "public"
        }
    }

    /// The report as an ordered sequence of (section, field, value) rows.
    pub fn rows(&self) -> Vec<ReportRow> {
        let (ones, zeros) = self.longest_bits;
        vec![
            ReportRow::new(SECTION_IP_INFO, "IP", &self.ip),
            ReportRow::new(SECTION_IP_INFO, "Binary", &self.ip_binary),
            ReportRow::new(SECTION_SUBNET, "Class", self.class),
            ReportRow::new(SECTION_SUBNET, "Subnet mask", &self.subnet_mask),
            ReportRow::new(SECTION_SUBNET, "Subnet mask binary", &self.subnet_mask_binary),
            ReportRow::new(SECTION_SUBNET, "Longest bits", format!("({ones}, {zeros})")),
            ReportRow::new(SECTION_BROADCAST, "Address", &self.broadcast_address),
            ReportRow::new(SECTION_BROADCAST, "Binary", &self.broadcast_binary),
            ReportRow::new(SECTION_CIDR, "Range", &self.range),
            ReportRow::new(SECTION_CIDR, "Notation", &self.cidr_notation),
            ReportRow::new(SECTION_CIDR, "Wildcard", &self.wildcard),
            ReportRow::new(SECTION_NETWORK, "Type", self.address_type()),
            ReportRow::new(SECTION_NETWORK, "Address", &self.network_address),
            ReportRow::new(SECTION_NETWORK, "Total IPs", self.total_ips),
            ReportRow::new(SECTION_NETWORK, "Usable IPs", self.usable_ips),
            ReportRow::new(SECTION_NETWORK, "Prev Network", &self.prev_network),
            ReportRow::new(SECTION_NETWORK, "Next Network", &self.next_network),
            ReportRow::new(SECTION_OTHER, "IPv6", &self.ipv6),
            ReportRow::new(SECTION_OTHER, "Decimal", self.decimal),
        ]
    }
}
