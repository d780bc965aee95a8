//! Dotted-quad text <-> 32-bit address conversion.
//!
//! Addresses and masks are plain `u32` values, most significant octet first.

use crate::error::Ipv4InfoError;
use lazy_static::lazy_static;
use regex::Regex;

/// A 32-bit IPv4 address.
pub type Address = u32;
/// A 32-bit subnet mask, expected to be a run of 1s followed by 0s.
pub type Mask = u32;

/// Number of bits in an address.
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DIGITS_RE: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// Parse a single octet segment, `None` if it is not 0..=255 in decimal digits.
fn parse_octet(segment: &str) -> Option<u8> {
    if !DIGITS_RE.is_match(segment) {
        return None;
    }
    // leading zeros are accepted, "010" == 10
    let significant = segment.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    if significant.len() > 3 {
        return None;
    }
    significant.parse::<u16>().ok().and_then(|v| u8::try_from(v).ok())
}

/// Check that `text` is exactly four dot separated decimal octets in 0..=255.
///
/// Malformed input is a normal `false`, this never panics.
///
/// # Examples
/// ```
/// use ipv4_info::models::validate;
/// assert!(validate("192.168.1.10"));
/// assert!(!validate("256.1.1.1"));
/// ```
pub fn validate(text: &str) -> bool {
    let segments: Vec<&str> = text.split('.').collect();
    segments.len() == 4 && segments.iter().all(|s| parse_octet(s).is_some())
}

/// Parse dotted-quad text into an [`Address`].
pub fn parse(text: &str) -> Result<Address, Ipv4InfoError> {
    let octets = text
        .split('.')
        .map(parse_octet)
        .collect::<Option<Vec<u8>>>()
        .filter(|o| o.len() == 4)
        .ok_or_else(|| Ipv4InfoError::MalformedAddressText(text.to_string()))?;

    let addr = (u32::from(octets[0]) << 24)
        | (u32::from(octets[1]) << 16)
        | (u32::from(octets[2]) << 8)
        | u32::from(octets[3]);
    log::trace!("parse({text}) = {addr}");
    Ok(addr)
}

/// The four octets of `addr`, most significant first.
pub fn octets(addr: Address) -> [u8; 4] {
    [24u32, 16, 8, 0].map(|shift| ((addr >> shift) & 0xFF) as u8)
}

/// Render an [`Address`] as dotted-quad text.
pub fn format(addr: Address) -> String {
    octets(addr)
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<String>>()
        .join(".")
}

/// Render an [`Address`] as four 8-bit binary octets joined by `.`.
pub fn to_binary_text(addr: Address) -> String {
    octets(addr)
        .iter()
        .map(|o| format!("{o:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// Like [`to_binary_text`] but starting from dotted-quad text.
pub fn to_binary_text_str(text: &str) -> Result<String, Ipv4InfoError> {
    Ok(to_binary_text(parse(text)?))
}
