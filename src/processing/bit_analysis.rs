//! Bit run statistics of a mask.

use crate::models::Mask;

/// Longest run of consecutive 1-bits and of consecutive 0-bits in `mask`.
///
/// Scans the 32 bits most significant first. Each counter tracks its own
/// run; a run's length is folded into its maximum when the run ends.
pub fn longest_runs(mask: Mask) -> (u32, u32) {
    let mut max_ones: u32 = 0;
    let mut max_zeros: u32 = 0;
    let mut count_ones: u32 = 0;
    let mut count_zeros: u32 = 0;

    for bit in (0..32u32).rev().map(|i| (mask >> i) & 1) {
        if bit == 1 {
            count_ones += 1;
            max_zeros = max_zeros.max(count_zeros);
            count_zeros = 0;
        } else {
            count_zeros += 1;
            max_ones = max_ones.max(count_ones);
            count_ones = 0;
        }
    }

    (max_ones.max(count_ones), max_zeros.max(count_zeros))
}
