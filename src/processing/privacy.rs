//! RFC1918 private address check.

use crate::models::{octets, Address};

/// True for 10.0.0.0/8, 172.16.0.0/12 and 192.168.0.0/16.
///
/// Loopback, link-local and other reserved ranges count as public here.
pub fn is_private(addr: Address) -> bool {
    match octets(addr) {
        [10, ..] => true,
        [172, 16..=31, ..] => true,
        [192, 168, ..] => true,
        _ => false,
    }
}
