// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subnet arithmetic over host-order `u32` addresses.
//!
//! Callers must only pass valid prefixes (`0..=32`) and contiguous masks;
//! go through [Subnet](super::Subnet) to have that checked.

use super::{IPV4_BITS, MAX_ROUTED_PREFIX, P2P_PREFIX};

/// Returns a u32 with `prefix` high bits set, remaining low bits zero.
#[inline]
pub fn prefix_to_mask(prefix: u8) -> u32 {
    debug_assert!(prefix <= IPV4_BITS);
    if prefix == 0 {
        // u32 << 32 overflows
        return 0;
    }
    u32::MAX << (IPV4_BITS - prefix)
}

#[inline]
pub fn network(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Network address with all host bits set.
#[inline]
pub fn broadcast(addr: u32, mask: u32) -> u32 {
    network(addr, mask) | !mask
}

/// Inverse of the netmask (Cisco "wildcard" mask).
#[inline]
pub fn wildcard(mask: u32) -> u32 {
    !mask
}

/**
First usable host. For /31 and /32 there is no separate network address
to skip, so the network address itself is returned.
*/
#[inline]
pub fn host_min(network: u32, prefix: u8) -> u32 {
    if prefix <= MAX_ROUTED_PREFIX {
        // at least two host bits are clear in a network address
        network + 1
    } else {
        network
    }
}

/// Last usable host. Same /31 and /32 treatment as [host_min].
#[inline]
pub fn host_max(broadcast: u32, prefix: u8) -> u32 {
    if prefix <= MAX_ROUTED_PREFIX {
        broadcast - 1
    } else {
        broadcast
    }
}

/**
Number of usable hosts for a prefix length:
- `2^(32 - prefix) - 2` up to /30 (network and broadcast excluded)
- 2 for /31 (RFC 3021, both addresses usable)
- 1 for /32

/0 gives 4294967294, which does not fit a u32 counter.
*/
#[inline]
pub fn host_count(prefix: u8) -> u64 {
    debug_assert!(prefix <= IPV4_BITS);
    match prefix {
        p if p <= MAX_ROUTED_PREFIX => (1u64 << (IPV4_BITS - p)) - 2,
        P2P_PREFIX => 2,
        _ => 1,
    }
}

/* -------------------------------------------------------------------------- */
