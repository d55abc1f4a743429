// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    formatting::{to_decimal, to_hex, to_octet_string, to_padded_binary},
    parsing::parse,
    strings::*,
    structs::{ParsedNetwork, Subnet},
    CalcError,
};
use serde::{Deserialize, Serialize};
use std::{error, fmt, str::FromStr};
use tracing::trace;

/// One derived value the calculator can produce for an input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Query {
    Network,
    Netmask,
    /// `network/netmask`, both dotted-quad
    NetworkNetmask,
    HostMin,
    HostMax,
    Broadcast,
    HostCount,
    /// address as a 32-bit decimal integer
    AsInteger,
    AsHex,
    AsBinary,
    /// address as dotted-quad, mostly useful for decimal input
    AsOctets,
}

impl Query {
    /// Every query, in display order.
    #[rustfmt::skip]
    pub const ALL: [Query; 11] = [
        Query::AsInteger, Query::AsOctets, Query::AsBinary, Query::AsHex,
        Query::NetworkNetmask, Query::Network, Query::Netmask,
        Query::HostMin, Query::HostMax, Query::Broadcast, Query::HostCount,
    ];

    /// Whether answering this query needs a valid mask on top of the address.
    pub fn needs_mask(&self) -> bool {
        !matches!(
            self,
            Query::AsInteger | Query::AsHex | Query::AsBinary | Query::AsOctets
        )
    }

    /// Stable machine name, same as the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Query::Network => "network",
            Query::Netmask => "netmask",
            Query::NetworkNetmask => "network-netmask",
            Query::HostMin => "host-min",
            Query::HostMax => "host-max",
            Query::Broadcast => "broadcast",
            Query::HostCount => "host-count",
            Query::AsInteger => "as-integer",
            Query::AsHex => "as-hex",
            Query::AsBinary => "as-binary",
            Query::AsOctets => "as-octets",
        }
    }

    /// Human readable row title.
    pub fn title(&self) -> &'static str {
        match self {
            Query::Network => "Network",
            Query::Netmask => "Netmask",
            Query::NetworkNetmask => "Network / netmask",
            Query::HostMin => "Min host",
            Query::HostMax => "Max host",
            Query::Broadcast => "Broadcast",
            Query::HostCount => "Hosts",
            Query::AsInteger => "IP to Dec",
            Query::AsHex => "IP to Hex",
            Query::AsBinary => "IP to Bin",
            Query::AsOctets => "Dec to IP",
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [Query::from_str] for unknown query names.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownQuery(pub String);

impl fmt::Display for UnknownQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ERR_UNKNOWN_QUERY}: '{}'", self.0)
    }
}

impl error::Error for UnknownQuery {}

impl FromStr for Query {
    type Err = UnknownQuery;

    /// Accepts [Query::name] plus a few short aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.trim().to_ascii_lowercase().replace('_', "-");
        let query: Query = match key.as_str() {
            "network" | "net" => Query::Network,
            "netmask" | "mask" => Query::Netmask,
            "network-netmask" => Query::NetworkNetmask,
            "host-min" | "hostmin" => Query::HostMin,
            "host-max" | "hostmax" => Query::HostMax,
            "broadcast" => Query::Broadcast,
            "host-count" | "hosts" => Query::HostCount,
            "as-integer" | "int" | "dec" => Query::AsInteger,
            "as-hex" | "hex" => Query::AsHex,
            "as-binary" | "bin" => Query::AsBinary,
            "as-octets" | "octets" => Query::AsOctets,
            _ => return Err(UnknownQuery(s.to_string())),
        };
        Ok(query)
    }
}

/* -------------------------------------------------------------------------- */

/**
Answer a single query for `parsed`.

- invalid address: every query fails with [CalcError::InvalidAddress]
- valid address, no mask: mask queries fail with [CalcError::MissingMask]
- valid address, bad mask: mask queries fail with [CalcError::InvalidNetmask]

Address-only queries succeed whenever the address is valid.
*/
pub fn evaluate_parsed(parsed: &ParsedNetwork, query: Query) -> Result<String, CalcError> {
    let addr: u32 = parsed.require_address()?;
    if !query.needs_mask() {
        return Ok(match query {
            Query::AsInteger => to_decimal(addr),
            Query::AsHex => to_hex(addr),
            Query::AsBinary => to_padded_binary(addr),
            _ => to_octet_string(addr),
        });
    }

    let s: Subnet = parsed.subnet()?;
    Ok(match query {
        Query::Network => to_octet_string(s.network()),
        Query::Netmask => to_octet_string(s.mask()),
        Query::NetworkNetmask => format!(
            "{}{SLASH}{}",
            to_octet_string(s.network()),
            to_octet_string(s.mask())
        ),
        Query::HostMin => to_octet_string(s.host_min()),
        Query::HostMax => to_octet_string(s.host_max()),
        Query::Broadcast => to_octet_string(s.broadcast()),
        _ => s.host_count().to_string(),
    })
}

/// Parse `raw` and answer one query. Use [Calculator] for several queries.
pub fn evaluate(raw: &str, query: Query) -> Result<String, CalcError> {
    Calculator::new(raw).evaluate(query)
}

/// Legacy UI rendering of a query outcome: the value itself, or
/// `"Invalid IP"` / `"Invalid netmask"` / `""` per [CalcError::sentinel].
pub fn render(outcome: &Result<String, CalcError>) -> String {
    match outcome {
        Ok(value) => value.clone(),
        Err(e) => e.sentinel().to_string(),
    }
}

/* -------------------------------------------------------------------------- */

/// Parses one input once and answers any number of queries from it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Calculator {
    parsed: ParsedNetwork,
}

impl Calculator {
    pub fn new(raw: &str) -> Self {
        Self { parsed: parse(raw) }
    }

    pub fn parsed(&self) -> &ParsedNetwork {
        &self.parsed
    }

    pub fn evaluate(&self, query: Query) -> Result<String, CalcError> {
        let res = evaluate_parsed(&self.parsed, query);
        trace!(input = self.parsed.raw(), %query, ?res, "evaluated");
        res
    }

    /// Answer every query in [Query::ALL].
    pub fn report(&self) -> SubnetReport {
        self.report_for(&Query::ALL)
    }

    pub fn report_for(&self, queries: &[Query]) -> SubnetReport {
        SubnetReport {
            input: self.parsed.raw().to_string(),
            results: queries
                .iter()
                .map(|&q| QueryResult::new(q, self.evaluate(q)))
                .collect(),
        }
    }
}

impl From<ParsedNetwork> for Calculator {
    fn from(parsed: ParsedNetwork) -> Self {
        Self { parsed }
    }
}

/// Outcome of one query, flattened for serialization.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: Query,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CalcError>,
}

impl QueryResult {
    pub fn new(query: Query, outcome: Result<String, CalcError>) -> Self {
        match outcome {
            Ok(value) => Self {
                query,
                value: Some(value),
                error: None,
            },
            Err(e) => Self {
                query,
                value: None,
                error: Some(e),
            },
        }
    }

    pub fn outcome(&self) -> Result<String, CalcError> {
        match (&self.value, self.error) {
            (_, Some(e)) => Err(e),
            (Some(v), None) => Ok(v.clone()),
            // only reachable through hand-built/deserialized values
            (None, None) => Err(CalcError::InvalidAddress),
        }
    }
}

/// All query outcomes for one input.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SubnetReport {
    pub input: String,
    pub results: Vec<QueryResult>,
}

impl SubnetReport {
    pub fn get(&self, query: Query) -> Option<&QueryResult> {
        self.results.iter().find(|r| r.query == query)
    }
}

/* -------------------------------------------------------------------------- */
