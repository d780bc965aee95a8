//! Error kinds raised while turning input text into a report.

use std::{error, fmt};

/// Failures that stop report assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ipv4InfoError {
    /// Text is not four dot separated decimal octets in 0..=255.
    MalformedAddressText(String),
    /// First octet is outside the class A, B and C ranges.
    UnsupportedClass(u8),
}

impl fmt::Display for Ipv4InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedAddressText(text) => {
                write!(f, "Not a valid IPv4 address: '{text}'")
            }
            Self::UnsupportedClass(first_octet) => write!(
                f,
                "The IP address is not a Class A, B, or C address (first octet {first_octet})."
            ),
        }
    }
}

impl error::Error for Ipv4InfoError {}
