// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Result;
use clap::Parser;
use subnetcalc::{render, Calculator, Query, SubnetReport};
use tracing::{info, Level};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Inputs: `A.B.C.D`, `A.B.C.D/N`, `A.B.C.D/E.F.G.H` or a 32-bit decimal
    #[clap(required = true)]
    inputs: Vec<String>,

    /// Only answer these queries (repeatable), f.ex. `-q broadcast -q hosts`
    #[clap(short, long = "query")]
    queries: Vec<Query>,

    /// Print a JSON report per input instead of a table
    #[clap(long)]
    json: bool,

    /// Print debug information
    #[clap(long)]
    debug: bool,
}

fn print_table(report: &SubnetReport) {
    println!("{}", report.input.trim());
    let width: usize = report
        .results
        .iter()
        .map(|r| r.query.title().len())
        .max()
        .unwrap_or(0);
    for r in &report.results {
        println!("  {:<width$}  {}", r.query.title(), render(&r.outcome()));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    let queries: Vec<Query> = match cli.queries.is_empty() {
        true => Query::ALL.to_vec(),
        false => cli.queries,
    };
    info!("answering {} queries for {} inputs", queries.len(), cli.inputs.len());

    for input in &cli.inputs {
        let report: SubnetReport = Calculator::new(input).report_for(&queries);
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_table(&report);
        }
    }

    Ok(())
}
