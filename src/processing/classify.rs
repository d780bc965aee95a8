//! Legacy classful network classification.

use crate::error::Ipv4InfoError;
use crate::models::{octets, Address, Mask};
use serde::Serialize;
use std::fmt;

/// Legacy network class, derived from the first octet only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NetworkClass {
    A,
    B,
    C,
}

impl NetworkClass {
    /// Default subnet mask of the class.
    pub fn default_mask(&self) -> Mask {
        match self {
            NetworkClass::A => 0xFF000000,
            NetworkClass::B => 0xFFFF0000,
            NetworkClass::C => 0xFFFFFF00,
        }
    }
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            NetworkClass::A => "A",
            NetworkClass::B => "B",
            NetworkClass::C => "C",
        };
        write!(f, "{name}")
    }
}

/// Derive the class and default mask of `addr`.
///
/// 0.x, 127.x (loopback) and class D/E are rejected with
/// [`Ipv4InfoError::UnsupportedClass`].
pub fn classify(addr: Address) -> Result<(NetworkClass, Mask), Ipv4InfoError> {
    let first_octet = octets(addr)[0];
    let class = match first_octet {
        1..=126 => NetworkClass::A,
        128..=191 => NetworkClass::B,
        192..=223 => NetworkClass::C,
        _ => {
            log::debug!("classify: first octet {first_octet} has no legacy class");
            return Err(Ipv4InfoError::UnsupportedClass(first_octet));
        }
    };
    Ok((class, class.default_mask()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{format, parse};

    fn classify_str(text: &str) -> Result<(NetworkClass, String), Ipv4InfoError> {
        classify(parse(text).unwrap()).map(|(class, mask)| (class, format(mask)))
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify_str("10.1.2.3").unwrap(),
            (NetworkClass::A, "255.0.0.0".to_string())
        );
        assert_eq!(
            classify_str("172.16.0.1").unwrap(),
            (NetworkClass::B, "255.255.0.0".to_string())
        );
        assert_eq!(
            classify_str("200.5.5.5").unwrap(),
            (NetworkClass::C, "255.255.255.0".to_string())
        );
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_str("1.0.0.0").unwrap().0, NetworkClass::A);
        assert_eq!(classify_str("126.255.255.255").unwrap().0, NetworkClass::A);
        assert_eq!(classify_str("128.0.0.0").unwrap().0, NetworkClass::B);
        assert_eq!(classify_str("191.255.0.1").unwrap().0, NetworkClass::B);
        assert_eq!(classify_str("192.0.0.1").unwrap().0, NetworkClass::C);
        assert_eq!(classify_str("223.1.1.1").unwrap().0, NetworkClass::C);
    }

    #[test]
    fn test_classify_rejected() {
        assert_eq!(
            classify_str("0.0.0.0").unwrap_err(),
            Ipv4InfoError::UnsupportedClass(0)
        );
        assert_eq!(
            classify_str("127.0.0.1").unwrap_err(),
            Ipv4InfoError::UnsupportedClass(127)
        );
        assert_eq!(
            classify_str("224.0.0.1").unwrap_err(),
            Ipv4InfoError::UnsupportedClass(224)
        );
        assert_eq!(
            classify_str("240.0.0.0").unwrap_err(),
            Ipv4InfoError::UnsupportedClass(240)
        );
        assert!(classify_str("255.255.255.255").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(NetworkClass::B.to_string(), "B");
    }
}
