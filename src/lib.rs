// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IPv4 address and subnet calculator.

Give it a bare address, an address with a CIDR prefix, an address with a
dotted-quad netmask or a plain 32-bit decimal, and it derives network,
netmask, broadcast, usable host range, host count and alternate
representations of the address.

```
use subnetcalc::{Calculator, CalcError, Query};

let calc = Calculator::new("192.168.1.10/24");
assert_eq!(calc.evaluate(Query::Broadcast).unwrap(), "192.168.1.255");
assert_eq!(calc.evaluate(Query::HostCount).unwrap(), "254");

let calc = Calculator::new("10.0.0.1");
assert_eq!(calc.evaluate(Query::AsHex).unwrap(), "a000001");
assert_eq!(calc.evaluate(Query::Network), Err(CalcError::MissingMask));
```
*/

pub mod iptools;

pub use iptools::{
    evaluate, parse, render, CalcError, Calculator, MaskField, ParsedNetwork, Query, QueryResult,
    Subnet, SubnetReport, UnknownQuery,
};
