//! Subnet arithmetic over an address and a mask.
//!
//! All arithmetic wraps modulo 2^32. Tiny subnets (/31, /32) give the
//! legacy results: an inverted usable range and a usable count of 0 or -1.

use crate::models::{format, Address, Mask, MAX_LENGTH};

/// Network address, the address with all host bits cleared.
pub fn network_address(addr: Address, mask: Mask) -> Address {
    addr & mask
}

/// Broadcast address, the network address with all host bits set.
pub fn broadcast_address(addr: Address, mask: Mask) -> Address {
    network_address(addr, mask) | wildcard_mask(mask)
}

/// First and last usable host, network + 1 and broadcast - 1.
pub fn usable_bounds(addr: Address, mask: Mask) -> (Address, Address) {
    let first = network_address(addr, mask).wrapping_add(1);
    let last = broadcast_address(addr, mask).wrapping_sub(1);
    (first, last)
}

/// Usable host range rendered as `"first - last"`.
///
/// # Examples
/// ```
/// use ipv4_info::processing::usable_range;
/// assert_eq!(usable_range(0xC0A8010A, 0xFFFFFF00), "192.168.1.1 - 192.168.1.254");
/// ```
pub fn usable_range(addr: Address, mask: Mask) -> String {
    let (first, last) = usable_bounds(addr, mask);
    format!("{} - {}", format(first), format(last))
}

/// Number of addresses covered by `mask`, 2^(32 - prefix).
pub fn total_addresses(mask: Mask) -> u64 {
    1u64 << (MAX_LENGTH - cidr_prefix_length(mask))
}

/// Total addresses minus network and broadcast. Not clamped at zero.
pub fn usable_addresses(mask: Mask) -> i64 {
    total_addresses(mask) as i64 - 2
}

/// Bitwise complement of the mask.
pub fn wildcard_mask(mask: Mask) -> Mask {
    !mask
}

/// Prefix length, the number of 1-bits in the mask.
pub fn cidr_prefix_length(mask: Mask) -> u8 {
    mask.count_ones() as u8
}

/// `<address>/<prefix>` for the given host address.
pub fn cidr_notation(addr: Address, mask: Mask) -> String {
    format!("{}/{}", format(addr), cidr_prefix_length(mask))
}

/// Previous and next network of the same size as `network`.
///
/// No overflow guard: 0.0.0.0/8 has 255.0.0.0 as its previous network.
pub fn neighboring_networks(network: Address, mask: Mask) -> (Address, Address) {
    let step = wildcard_mask(mask).wrapping_add(1);
    let previous = network.wrapping_sub(step);
    let next = network.wrapping_add(step);
    log::trace!(
        "neighboring_networks({}) step={step} prev={} next={}",
        format(network),
        format(previous),
        format(next)
    );
    (previous, next)
}

/// True when `mask` is a run of 1s followed only by 0s.
pub fn is_contiguous_mask(mask: Mask) -> bool {
    mask.leading_ones() + mask.trailing_zeros() >= u32::from(MAX_LENGTH)
}
