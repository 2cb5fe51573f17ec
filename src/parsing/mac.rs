//! MAC address text forms.
//!
//! Accepted input:
//!
//! | Form | Example |
//! |------|---------|
//! | 12 hex digits | `aabbcc001122` |
//! | colon separated | `aa:bb:cc:00:11:22` |
//! | dash separated | `AA-BB-CC-00-11-22` |
//!
//! Hex digits may be either case. Separators must all be the same character.
//! Output is always lower-case and colon separated.

use crate::error::StoreError;
use eyre::{bail, Result};
use std::fmt::Write;

pub fn parse_mac_address(s: &str) -> Result<[u8; 6]> {
    let bytes = s.as_bytes();
    let mut mac = [0u8; 6];

    match bytes.len() {
        12 => {
            for (i, pair) in bytes.chunks_exact(2).enumerate() {
                mac[i] = parse_octet(pair)?;
            }
        }
        17 => {
            let delimiter = bytes[2];
            if delimiter != b':' && delimiter != b'-' {
                bail!(StoreError::InvalidMacFormat);
            }
            for (i, octet) in mac.iter_mut().enumerate() {
                let pos = i * 3;
                *octet = parse_octet(&bytes[pos..pos + 2])?;
                if i < 5 && bytes[pos + 2] != delimiter {
                    bail!(StoreError::InvalidMacFormat);
                }
            }
        }
        _ => bail!(StoreError::InvalidMacFormat),
    }

    Ok(mac)
}

fn parse_octet(pair: &[u8]) -> Result<u8> {
    match (hex_digit(pair[0]), hex_digit(pair[1])) {
        (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
        _ => bail!(StoreError::InvalidMacFormat),
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

pub fn format_mac_address(mac: &[u8; 6]) -> String {
    let mut out = String::with_capacity(17);
    for (i, byte) in mac.iter().enumerate() {
        if i > 0 {
            out.push(':');
        }
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAC: [u8; 6] = [0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22];

    #[test]
    fn test_parse_all_forms() {
        assert_eq!(parse_mac_address("aabbcc001122").unwrap(), MAC);
        assert_eq!(parse_mac_address("AA:BB:CC:00:11:22").unwrap(), MAC);
        assert_eq!(parse_mac_address("aa-bb-cc-00-11-22").unwrap(), MAC);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "aabbcc00112",
            "aabbcc00112g",
            "aa:bb:cc:00:11-22",
            "aa.bb.cc.00.11.22",
            "aa:bb:cc:00:11:2z",
            "aa:bb:cc:00:11:22:33",
        ] {
            let err = parse_mac_address(bad).unwrap_err();
            assert_eq!(StoreError::of(&err), Some(StoreError::InvalidMacFormat), "{bad}");
        }
    }

    #[test]
    fn test_parse_rejects_multibyte_input() {
        // 12 bytes but not 12 hex chars
        assert!(parse_mac_address("éééééé").is_err());
    }

    #[test]
    fn test_format_lower_colon() {
        assert_eq!(format_mac_address(&MAC), "aa:bb:cc:00:11:22");
        assert_eq!(format_mac_address(&[0; 6]), "00:00:00:00:00:00");
    }
}
