// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! cpm_compute — CLI front for the CPM calculator
//!
//! Takes a calculator request on stdin or as --json, runs the same code path
//! the browser uses, and prints the response as pretty JSON.
//!
//! Usage:
//!   echo '{"mode":"perLoad","jurisdiction":"TX","fields":{"gross":"1850","miles":"1000"}}' | cpm_compute
//!   cpm_compute --json '{"mode":"monthly","fields":{"gross":"15000","miles":"9000"}}'
//!   cpm_compute --list-prices
//!   cpm_compute --session-code

use anyhow::Context;
use clap::Parser;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use cpm_core::session::new_session_code;
use cpm_core::{CpmCalculator, FuelPriceTable};

#[derive(Parser, Debug)]
#[command(name = "cpm_compute", about = "Trucking cost-per-mile calculator")]
struct Args {
    /// Request JSON; read from stdin when omitted
    #[arg(long)]
    json: Option<String>,

    /// Print the built-in diesel price table and exit
    #[arg(long)]
    list_prices: bool,

    /// Print a fresh display access code and exit
    #[arg(long)]
    session_code: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let table = FuelPriceTable::builtin();

    if args.list_prices {
        for entry in table.entries() {
            println!("{} ${:.2}", entry.code, entry.price);
        }
        return Ok(());
    }

    if args.session_code {
        println!("{}", new_session_code());
        return Ok(());
    }

    let input = match args.json {
        Some(json) => json,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };

    let response = CpmCalculator::respond_json(&input, &table)?;
    tracing::info!(
        mode = ?response.mode,
        advisories = response.advisories.len(),
        "request evaluated"
    );
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
