// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::net::Ipv4Addr;

/// Dotted-quad form, f.ex. `192.168.1.10`.
#[inline]
pub fn to_octet_string(v: u32) -> String {
    Ipv4Addr::from(v).to_string()
}

/// Exactly 32 characters of `0`/`1`, most significant bit first.
#[inline]
pub fn to_padded_binary(v: u32) -> String {
    format!("{v:032b}")
}

/// Lowercase hex without `0x` prefix or zero-padding, f.ex. `a000001`.
#[inline]
pub fn to_hex(v: u32) -> String {
    format!("{v:x}")
}

#[inline]
pub fn to_decimal(v: u32) -> String {
    v.to_string()
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iptools::parse_octet_string;

    #[test]
    fn test_octet_string() {
        assert_eq!(to_octet_string(0), "0.0.0.0");
        assert_eq!(to_octet_string(u32::MAX), "255.255.255.255");
        assert_eq!(to_octet_string(0xC0A8_010A), "192.168.1.10");
        assert_eq!(to_octet_string(0x0A00_0001), "10.0.0.1");
    }

    #[test]
    fn test_padded_binary() {
        assert_eq!(to_padded_binary(0), "0".repeat(32));
        assert_eq!(to_padded_binary(u32::MAX), "1".repeat(32));
        assert_eq!(to_padded_binary(0x0A00_0001), "00001010000000000000000000000001");
        assert_eq!(to_padded_binary(1).len(), 32);
    }

    #[test]
    fn test_hex() {
        assert_eq!(to_hex(0), "0");
        assert_eq!(to_hex(0x0A00_0001), "a000001");
        assert_eq!(to_hex(0xC0A8_010A), "c0a8010a");
        assert_eq!(to_hex(u32::MAX), "ffffffff");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(to_decimal(0xC0A8_010A), "3232235786");
    }

    #[test]
    fn test_octet_round_trip() {
        #[rustfmt::skip]
        let values: [u32; 9] = [
            0, 1, 255, 256, 0x00FF_FF00,
            0x0A00_0001, 0x7F00_0001, 0xC0A8_010A, u32::MAX,
        ];
        for v in values {
            assert_eq!(parse_octet_string(&to_octet_string(v)), Some(v));
        }
        // walk the whole space in coarse steps as well
        for v in (0..=u32::MAX).step_by(0x0101_0101 / 7) {
            assert_eq!(parse_octet_string(&to_octet_string(v)), Some(v));
        }
    }
}
