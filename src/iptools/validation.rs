// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::structs::{MaskField, ParsedNetwork};

/// True if every octet parsed and was in range.
#[inline]
pub fn is_address_valid(parsed: &ParsedNetwork) -> bool {
    parsed.address().is_some()
}

/// True if a mask was given and it is usable. An absent mask is not valid.
#[inline]
pub fn is_mask_valid(parsed: &ParsedNetwork) -> bool {
    matches!(parsed.mask(), MaskField::Valid { .. })
}

/// True if the input had any mask part at all, valid or not.
#[inline]
pub fn is_mask_present(parsed: &ParsedNetwork) -> bool {
    !matches!(parsed.mask(), MaskField::Absent)
}

/**
Whether `mask` is a left-aligned run of one-bits followed only by zero-bits.

The inverted mask then has the form `2^k - 1`, so adding one to it clears
every bit it had. Both `0.0.0.0` and `255.255.255.255` qualify.
*/
#[inline]
pub fn is_contiguous_mask(mask: u32) -> bool {
    let host: u32 = !mask;
    host & host.wrapping_add(1) == 0
}

/// Prefix length of a contiguous mask, `None` for a mask with holes.
#[inline]
pub fn mask_to_prefix(mask: u32) -> Option<u8> {
    if is_contiguous_mask(mask) {
        Some(mask.leading_ones() as u8)
    } else {
        None
    }
}

/* -------------------------------------------------------------------------- */
