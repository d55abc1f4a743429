// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static SLASH: char = '/';

// mod.rs
pub(crate) static ERR_INVALID_ADDR: &str = "invalid IPv4 address";
pub(crate) static ERR_INVALID_MASK: &str = "invalid netmask or prefix length";
pub(crate) static ERR_MISSING_MASK: &str = "no netmask or prefix length given";

// legacy presentation
pub(crate) static SENTINEL_INVALID_IP: &str = "Invalid IP";
pub(crate) static SENTINEL_INVALID_MASK: &str = "Invalid netmask";
pub(crate) static SENTINEL_NOT_APPLICABLE: &str = "";

// calculator.rs
pub(crate) static ERR_UNKNOWN_QUERY: &str = "unknown query";
