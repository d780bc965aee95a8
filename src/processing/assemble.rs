//! Builds a [`SubnetReport`] from input text.

use crate::error::Ipv4InfoError;
use crate::models::{format, parse, to_binary_text, validate, SubnetReport};
use crate::processing::{
    bit_analysis, classify, ipv6, privacy,
    subnet_math::{self, is_contiguous_mask},
};

/// Validate, parse and classify `text`, then derive every report field.
///
/// All-or-nothing: a malformed address or unsupported class returns an
/// error and no partial report.
pub fn build_report(text: &str) -> Result<SubnetReport, Ipv4InfoError> {
    log::debug!("build_report({text})");
    if !validate(text) {
        log::warn!("Invalid IPv4 address text: '{text}'");
        return Err(Ipv4InfoError::MalformedAddressText(text.to_string()));
    }
    let addr = parse(text)?;
    let (class, mask) = classify::classify(addr)?;
    if !is_contiguous_mask(mask) {
        log::warn!("Mask {} is not contiguous", format(mask));
    }

    let network = subnet_math::network_address(addr, mask);
    let broadcast = subnet_math::broadcast_address(addr, mask);
    let (prev_network, next_network) = subnet_math::neighboring_networks(network, mask);

    let report = SubnetReport {
        ip: text.to_string(),
        ip_binary: to_binary_text(addr),
        class,
        subnet_mask: format(mask),
        subnet_mask_binary: to_binary_text(mask),
        longest_bits: bit_analysis::longest_runs(mask),
        broadcast_address: format(broadcast),
        broadcast_binary: to_binary_text(broadcast),
        range: subnet_math::usable_range(addr, mask),
        cidr_notation: subnet_math::cidr_notation(addr, mask),
        wildcard: format(subnet_math::wildcard_mask(mask)),
        private: privacy::is_private(addr),
        network_address: format(network),
        total_ips: subnet_math::total_addresses(mask),
        usable_ips: subnet_math::usable_addresses(mask),
        prev_network: format(prev_network),
        next_network: format(next_network),
        ipv6: ipv6::to_ipv4_mapped_ipv6(addr),
        decimal: addr,
    };
    log::debug!("Built report for {} class {}", report.ip, report.class);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::NetworkClass;

    #[test]
    fn test_build_report_class_c_private() {
        let r = build_report("192.168.1.10").unwrap();
        assert_eq!(r.class, NetworkClass::C);
        assert_eq!(r.subnet_mask, "255.255.255.0");
        assert_eq!(r.network_address, "192.168.1.0");
        assert_eq!(r.broadcast_address, "192.168.1.255");
        assert_eq!(r.range, "192.168.1.1 - 192.168.1.254");
        assert_eq!(r.total_ips, 256);
        assert_eq!(r.usable_ips, 254);
        assert_eq!(r.cidr_notation, "192.168.1.10/24");
        assert_eq!(r.wildcard, "0.0.0.255");
        assert_eq!(r.ipv6, "::ffff:c0a8:010a");
        assert!(r.private);
        assert_eq!(r.longest_bits, (24, 8));
        assert_eq!(r.prev_network, "192.168.0.0");
        assert_eq!(r.next_network, "192.168.2.0");
        assert_eq!(r.decimal, 3232235786);
    }

    #[test]
    fn test_build_report_class_a_public() {
        let r = build_report("8.8.8.8").unwrap();
        assert_eq!(r.class, NetworkClass::A);
        assert_eq!(r.subnet_mask_binary, "11111111.00000000.00000000.00000000");
        assert_eq!(r.broadcast_address, "8.255.255.255");
        assert_eq!(r.broadcast_binary, "00001000.11111111.11111111.11111111");
        assert_eq!(r.total_ips, 16777216);
        assert_eq!(r.prev_network, "7.0.0.0");
        assert_eq!(r.next_network, "9.0.0.0");
        assert!(!r.private);
        assert_eq!(r.address_type(), "public");
    }

    #[test]
    fn test_build_report_keeps_input_text() {
        let r = build_report("010.0.0.1").unwrap();
        assert_eq!(r.ip, "010.0.0.1");
        assert_eq!(r.cidr_notation, "10.0.0.1/8");
    }

    #[test]
    fn test_build_report_errors() {
        assert_eq!(
            build_report("1.2.3").unwrap_err(),
            Ipv4InfoError::MalformedAddressText("1.2.3".to_string())
        );
        assert_eq!(
            build_report("127.0.0.1").unwrap_err(),
            Ipv4InfoError::UnsupportedClass(127)
        );
    }

    #[test]
    fn test_rows_order() {
        let rows = build_report("172.16.0.1").unwrap().rows();
        let fields: Vec<&str> = rows.iter().map(|r| r.field).collect();
        assert_eq!(
            fields,
            vec![
                "IP",
                "Binary",
                "Class",
                "Subnet mask",
                "Subnet mask binary",
                "Longest bits",
                "Address",
                "Binary",
                "Range",
                "Notation",
                "Wildcard",
                "Type",
                "Address",
                "Total IPs",
                "Usable IPs",
                "Prev Network",
                "Next Network",
                "IPv6",
                "Decimal",
            ]
        );
        assert_eq!(rows[5].value, "(16, 16)");
        assert_eq!(rows[11].value, "private");
    }
}
