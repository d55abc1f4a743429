// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    arithmetic::{broadcast, host_count, host_max, host_min, network, prefix_to_mask, wildcard},
    formatting::to_octet_string,
    strings::*,
    validation::mask_to_prefix,
    CalcError, IPV4_BITS,
};
use ipnet::Ipv4Net;
use std::{fmt, net::Ipv4Addr};

/// State of the mask part of a parsed input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MaskField {
    /// no `/...` suffix at all
    Absent,
    /// prefix in `0..=32`, or a contiguous dotted-quad mask
    Valid { mask: u32, prefix: u8 },
    /// prefix out of range, mask with a hole, or an unrecognised token
    Invalid,
}

/**
Result of parsing one raw input string. Produced once per input by
[parse](super::parse) and read by every query; never modified afterwards.

The address is `None` when any part of the input failed to parse as an
IPv4 address. The mask state is tracked separately so that address-only
queries still work when just the mask is bad.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedNetwork {
    raw: String,
    addr: Option<u32>,
    mask: MaskField,
}

impl ParsedNetwork {
    pub(crate) fn new(raw: &str, addr: Option<u32>, mask: MaskField) -> Self {
        Self {
            raw: raw.to_string(),
            addr,
            mask,
        }
    }

    /// The input exactly as given, untrimmed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn address(&self) -> Option<u32> {
        self.addr
    }

    pub fn mask(&self) -> MaskField {
        self.mask
    }

    /// The address, or [CalcError::InvalidAddress].
    pub fn require_address(&self) -> Result<u32, CalcError> {
        self.addr.ok_or(CalcError::InvalidAddress)
    }

    /**
    Validated (address, mask) pair. This is the only way to reach the
    subnet arithmetic from parsed input.

    Address errors take precedence over mask errors.
    */
    pub fn subnet(&self) -> Result<Subnet, CalcError> {
        let addr: u32 = self.require_address()?;
        match self.mask {
            MaskField::Valid { mask, prefix } => Ok(Subnet { addr, mask, prefix }),
            MaskField::Invalid => Err(CalcError::InvalidNetmask),
            MaskField::Absent => Err(CalcError::MissingMask),
        }
    }
}

/* -------------------------------------------------------------------------- */

/// An IPv4 address together with a valid, contiguous netmask.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Subnet {
    addr: u32,
    mask: u32,
    /// `0..=32`, always agrees with `mask`
    prefix: u8,
}

impl Subnet {
    /// Build from an address and prefix length. Fails for prefix > 32.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, CalcError> {
        if prefix > IPV4_BITS {
            return Err(CalcError::InvalidNetmask);
        }
        Ok(Self {
            addr: u32::from(addr),
            mask: prefix_to_mask(prefix),
            prefix,
        })
    }

    /// Build from an address and dotted-quad netmask. Fails for masks with holes.
    pub fn with_netmask(addr: Ipv4Addr, netmask: Ipv4Addr) -> Result<Self, CalcError> {
        let mask: u32 = u32::from(netmask);
        let prefix: u8 = mask_to_prefix(mask).ok_or(CalcError::InvalidNetmask)?;
        Ok(Self {
            addr: u32::from(addr),
            mask,
            prefix,
        })
    }

    /// The address as given, host bits not cleared.
    pub fn addr(&self) -> u32 {
        self.addr
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn network(&self) -> u32 {
        network(self.addr, self.mask)
    }

    pub fn broadcast(&self) -> u32 {
        broadcast(self.addr, self.mask)
    }

    pub fn wildcard(&self) -> u32 {
        wildcard(self.mask)
    }

    pub fn host_min(&self) -> u32 {
        host_min(self.network(), self.prefix)
    }

    pub fn host_max(&self) -> u32 {
        host_max(self.broadcast(), self.prefix)
    }

    /// Number of usable hosts. A /0 holds 2^32 - 2 of them, hence [u64].
    pub fn host_count(&self) -> u64 {
        host_count(self.prefix)
    }
}

impl From<Subnet> for Ipv4Net {
    fn from(s: Subnet) -> Self {
        // prefix is <= 32 by construction
        Ipv4Net::new_assert(Ipv4Addr::from(s.addr), s.prefix)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", to_octet_string(self.addr), self.prefix)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const HOST_24: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 10);
    const MASK_24: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);
    const HOLEY: Ipv4Addr = Ipv4Addr::new(255, 0, 255, 0);

    #[test]
    fn test_subnet_new() {
        let s = Subnet::new(HOST_24, 24).unwrap();
        assert_eq!(s.mask(), 0xFFFF_FF00);
        assert_eq!(s.prefix(), 24);
        assert_eq!(s.to_string(), "192.168.1.10/24");
        assert_eq!(Subnet::new(HOST_24, 33), Err(CalcError::InvalidNetmask));
    }

    #[test]
    fn test_subnet_with_netmask() {
        let a = Subnet::with_netmask(HOST_24, MASK_24).unwrap();
        let b = Subnet::new(HOST_24, 24).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            Subnet::with_netmask(HOST_24, HOLEY),
            Err(CalcError::InvalidNetmask)
        );
    }

    #[test]
    fn test_subnet_derived() {
        let s = Subnet::new(HOST_24, 24).unwrap();
        assert_eq!(Ipv4Addr::from(s.network()), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(Ipv4Addr::from(s.broadcast()), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(Ipv4Addr::from(s.wildcard()), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(Ipv4Addr::from(s.host_min()), Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(Ipv4Addr::from(s.host_max()), Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(s.host_count(), 254);
    }

    #[test]
    fn test_subnet_agrees_with_ipnet() {
        for prefix in 0..=IPV4_BITS {
            let s = Subnet::new(Ipv4Addr::new(10, 123, 45, 67), prefix).unwrap();
            let net: Ipv4Net = s.into();
            assert_eq!(u32::from(net.network()), s.network(), "/{prefix}");
            assert_eq!(u32::from(net.broadcast()), s.broadcast(), "/{prefix}");
            assert_eq!(u32::from(net.netmask()), s.mask(), "/{prefix}");
        }
    }

    #[test]
    fn test_parsed_gate_precedence() {
        let bad_both = ParsedNetwork::new("x", None, MaskField::Invalid);
        assert_eq!(bad_both.subnet(), Err(CalcError::InvalidAddress));

        let no_mask = ParsedNetwork::new("x", Some(1), MaskField::Absent);
        assert_eq!(no_mask.subnet(), Err(CalcError::MissingMask));
        assert_eq!(no_mask.require_address(), Ok(1));

        let bad_mask = ParsedNetwork::new("x", Some(1), MaskField::Invalid);
        assert_eq!(bad_mask.subnet(), Err(CalcError::InvalidNetmask));
    }
}
