//! IPv4-mapped IPv6 notation.

use crate::models::{octets, Address};

/// `::ffff:XXYY:ZZWW`, every octet as two lowercase hex digits.
pub fn to_ipv4_mapped_ipv6(addr: Address) -> String {
    let [a, b, c, d] = octets(addr);
    format!("::ffff:{a:02x}{b:02x}:{c:02x}{d:02x}")
}
