// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4 address/subnet calculations: parsing of free-form input, mask
//! validation, network arithmetic and alternate representations.

mod arithmetic;
mod calculator;
mod formatting;
mod parsing;
mod strings;
mod structs;
mod validation;

use serde::{Deserialize, Serialize};
use std::{error, fmt};
use strings::*;

pub use arithmetic::*;
pub use calculator::*;
pub use formatting::*;
pub use parsing::{parse, parse_octet_string};
pub use structs::{MaskField, ParsedNetwork, Subnet};
pub use validation::*;

pub(crate) const IPV4_BITS: u8 = 32;
/// Largest prefix which still has distinct network and broadcast addresses.
pub(crate) const MAX_ROUTED_PREFIX: u8 = 30;
/// RFC 3021 point-to-point prefix; both addresses are usable hosts.
pub(crate) const P2P_PREFIX: u8 = 31;

/// Why a query could not be answered for a given input.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CalcError {
    /// octet out of range, wrong arity or non-numeric token
    InvalidAddress,
    /// prefix out of `0..=32` or a dotted-quad mask with a hole
    InvalidNetmask,
    /// the query needs a mask and none was given
    MissingMask,
}

impl CalcError {
    /// Legacy UI text for this error. [CalcError::MissingMask] renders as an
    /// empty string, i.e. "not answerable yet".
    pub fn sentinel(&self) -> &'static str {
        match self {
            CalcError::InvalidAddress => SENTINEL_INVALID_IP,
            CalcError::InvalidNetmask => SENTINEL_INVALID_MASK,
            CalcError::MissingMask => SENTINEL_NOT_APPLICABLE,
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidAddress => write!(f, "{ERR_INVALID_ADDR}"),
            CalcError::InvalidNetmask => write!(f, "{ERR_INVALID_MASK}"),
            CalcError::MissingMask => write!(f, "{ERR_MISSING_MASK}"),
        }
    }
}

impl error::Error for CalcError {}
