// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    arithmetic::prefix_to_mask,
    strings::*,
    structs::{MaskField, ParsedNetwork},
    validation::mask_to_prefix,
    IPV4_BITS,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

// `\d` would also match non-ASCII digits, hence the explicit classes.
lazy_static! {
    static ref RE_OCTETS: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").unwrap();
    static ref RE_DECIMAL: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/**
Parse free-form calculator input. Never fails: problems are recorded in the
returned [ParsedNetwork] instead.

Leading and trailing whitespace is ignored. Accepted forms, first match wins:
- `A.B.C.D`: bare address
- `A.B.C.D/N`: address with prefix length, `N` in `0..=32`
- `A.B.C.D/E.F.G.H`: address with a dotted-quad netmask
- `N`: bare address as a 32-bit decimal integer

Anything else leaves the address undefined. A good address with a bad
mask part keeps the address and flags only the mask.
*/
pub fn parse(raw: &str) -> ParsedNetwork {
    let input: &str = raw.trim();

    let parsed: ParsedNetwork = match input.split_once(SLASH) {
        None => {
            let addr: Option<u32> = parse_octet_string(input).or_else(|| parse_decimal(input));
            ParsedNetwork::new(raw, addr, MaskField::Absent)
        }
        Some((_, mask)) if mask.contains(SLASH) => {
            debug!("too many slashes in '{input}'");
            ParsedNetwork::new(raw, None, MaskField::Invalid)
        }
        Some((addr, mask)) => ParsedNetwork::new(raw, parse_octet_string(addr), parse_mask(mask)),
    };

    if parsed.address().is_none() {
        debug!("{ERR_INVALID_ADDR}: '{input}'");
    } else if parsed.mask() == MaskField::Invalid {
        debug!("{ERR_INVALID_MASK}: '{input}'");
    }
    trace!(?parsed, "parsed calculator input");
    parsed
}

/// Parse a strict dotted-quad string (`0.0.0.0` ..= `255.255.255.255`) into a u32.
pub fn parse_octet_string(s: &str) -> Option<u32> {
    let caps = RE_OCTETS.captures(s)?;
    let mut v: u32 = 0;
    for i in 1..=4 {
        // up to three digits, so only the range can fail here
        let octet: u8 = caps.get(i)?.as_str().parse().ok()?;
        v = (v << 8) | u32::from(octet);
    }
    Some(v)
}

/// Bare decimal form, f.ex. `3232235786`. Overflowing values are rejected.
fn parse_decimal(s: &str) -> Option<u32> {
    if !RE_DECIMAL.is_match(s) {
        return None;
    }
    s.parse::<u32>().ok()
}

/// Interpret whatever follows the slash. Holes in a dotted-quad mask are not
/// rounded to a nearby prefix.
fn parse_mask(s: &str) -> MaskField {
    if RE_DECIMAL.is_match(s) {
        return match s.parse::<u8>() {
            Ok(prefix) if prefix <= IPV4_BITS => MaskField::Valid {
                mask: prefix_to_mask(prefix),
                prefix,
            },
            _ => MaskField::Invalid,
        };
    }

    match parse_octet_string(s) {
        Some(mask) => match mask_to_prefix(mask) {
            Some(prefix) => MaskField::Valid { mask, prefix },
            None => MaskField::Invalid,
        },
        None => MaskField::Invalid,
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = "192.168.1.10";
    const WITH_PREFIX: &str = "192.168.1.10/24";
    const WITH_MASK: &str = "192.168.1.10/255.255.255.0";
    const HOLEY_MASK: &str = "10.0.0.1/255.0.255.0";
    const DECIMAL: &str = "3232235786";
    const ADDR_192: u32 = 0xC0A8_010A;

    fn prefix_field(prefix: u8) -> MaskField {
        MaskField::Valid {
            mask: prefix_to_mask(prefix),
            prefix,
        }
    }

    #[test]
    fn test_parse_bare() {
        let p = parse(BARE);
        assert_eq!(p.address(), Some(ADDR_192));
        assert_eq!(p.mask(), MaskField::Absent);
        assert_eq!(p.raw(), BARE);
    }

    #[test]
    fn test_parse_prefix() {
        let p = parse(WITH_PREFIX);
        assert_eq!(p.address(), Some(ADDR_192));
        assert_eq!(p.mask(), prefix_field(24));
        assert_eq!(parse("0.0.0.0/0").mask(), prefix_field(0));
        assert_eq!(parse("1.2.3.4/32").mask(), prefix_field(32));
    }

    #[test]
    fn test_parse_dotted_mask() {
        let a = parse(WITH_MASK);
        let b = parse(WITH_PREFIX);
        assert_eq!(a.address(), b.address());
        assert_eq!(a.mask(), b.mask());
    }

    #[test]
    fn test_parse_holey_mask() {
        let p = parse(HOLEY_MASK);
        assert_eq!(p.address(), Some(0x0A00_0001));
        assert_eq!(p.mask(), MaskField::Invalid);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse(DECIMAL).address(), Some(ADDR_192));
        assert_eq!(parse("0").address(), Some(0));
        assert_eq!(parse("4294967295").address(), Some(u32::MAX));
        assert_eq!(parse("4294967296").address(), None);
        // decimal form takes no mask
        assert_eq!(parse("3232235786/24").address(), None);
    }

    #[test]
    fn test_parse_whitespace() {
        let p = parse("  192.168.1.10/24\t\n");
        assert_eq!(p.address(), Some(ADDR_192));
        assert_eq!(p.raw(), "  192.168.1.10/24\t\n");
        assert_eq!(parse("192.168.1.10 /24").address(), None);
        assert_eq!(parse("192. 168.1.10").address(), None);
    }

    #[test]
    fn test_parse_bad_addresses() {
        #[rustfmt::skip]
        let bad: [&str; 14] = [
            "", " ", "256.1.1.1", "1.2.3", "1.2.3.4.5", "a.b.c.d",
            "1.2.3.4x", "x1.2.3.4", "1..2.3", "1.2.3.0256", "-1.2.3.4",
            "+1.2.3.4", "1.2.3.4/24/8", "١.٢.٣.٤",
        ];
        for s in bad {
            assert_eq!(parse(s).address(), None, "'{s}'");
        }
    }

    #[test]
    fn test_parse_bad_masks() {
        #[rustfmt::skip]
        let bad: [&str; 8] = [
            "10.0.0.1/33", "10.0.0.1/999", "10.0.0.1/99999999999",
            "10.0.0.1/", "10.0.0.1/abc", "10.0.0.1/1.2.3",
            "10.0.0.1/0.255.255.255", "10.0.0.1/-1",
        ];
        for s in bad {
            let p = parse(s);
            assert_eq!(p.address(), Some(0x0A00_0001), "'{s}'");
            assert_eq!(p.mask(), MaskField::Invalid, "'{s}'");
        }
    }

    #[test]
    fn test_parse_leading_zeros() {
        // decimal, never octal
        assert_eq!(parse("010.000.000.001").address(), Some(0x0A00_0001));
        assert_eq!(parse("10.0.0.1/024").mask(), prefix_field(24));
    }

    #[test]
    fn test_octet_string_strict() {
        assert_eq!(parse_octet_string("255.255.255.255"), Some(u32::MAX));
        assert_eq!(parse_octet_string(" 1.2.3.4"), None);
        assert_eq!(parse_octet_string("1.2.3.256"), None);
        assert_eq!(parse_octet_string("3232235786"), None);
    }
}
