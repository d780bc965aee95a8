//! Address and subnet calculations.
//!
//! - [`classify`] - legacy class and default mask
//! - [`subnet_math`] - network, broadcast, ranges, counts, neighbors
//! - [`bit_analysis`] - longest bit runs of a mask
//! - [`privacy`] - RFC1918 check
//! - [`ipv6`] - IPv4-mapped IPv6 form
//! - [`assemble`] - builds the full report

mod assemble;
pub mod bit_analysis;
pub mod classify;
pub mod ipv6;
pub mod privacy;
pub mod subnet_math;

// Re-export public functions
pub use assemble::build_report;
pub use bit_analysis::longest_runs;
pub use classify::{classify, NetworkClass};
pub use ipv6::to_ipv4_mapped_ipv6;
pub use privacy::is_private;
pub use subnet_math::{
    broadcast_address, cidr_notation, cidr_prefix_length, is_contiguous_mask,
    neighboring_networks, network_address, total_addresses, usable_addresses, usable_bounds,
    usable_range, wildcard_mask,
};
