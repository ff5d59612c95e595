#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod error;
mod fmt;
mod mcs;
mod prelude;
mod quantity;
mod tables;
mod tariff;

use std::sync::Arc;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, EstimateArgs, LookupArgs, TableCommand},
    core::{engine::Engine, solar::SelfUseSplit},
    fmt::FormattedPercentage,
    mcs::{
        resolver::{Query, Resolver},
        table::ReferenceTable,
    },
    prelude::*,
    tables::{build_breakdown_table, build_summary_table, build_tariffs_table},
    tariff::catalog::TariffCatalog,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.command {
        Command::Estimate(args) => {
            estimate(&args)?;
        }
        Command::Tariffs => {
            let catalog = TariffCatalog::with_defaults();
            println!("{}", build_tariffs_table(&catalog.snapshot().tariffs));
        }
        Command::Table(args) => match args.command {
            TableCommand::Lookup(args) => {
                lookup(&args)?;
            }
            TableCommand::BuildSnapshot(args) => {
                let table = ReferenceTable::load(&args.path)?;
                info!(n_entries = table.len(), "snapshot refreshed alongside the raw table");
            }
        },
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all)]
fn estimate(args: &EstimateArgs) -> Result {
    let split = args.split();
    let table = match split {
        // The fixed split never consults the table, so skip loading it.
        SelfUseSplit::Fixed => ReferenceTable::new(Vec::new()),
        SelfUseSplit::Table => ReferenceTable::load(&args.table.path)?,
    };
    let engine =
        Engine::new(Arc::new(table), Arc::new(TariffCatalog::with_defaults()), split);
    let result = engine.calculate(&args.request())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!("{}", build_summary_table(&result));
    if let Some(breakdowns) = &result.yearly_breakdown {
        println!("{}", build_breakdown_table(breakdowns));
    }
    Ok(())
}

#[instrument(skip_all)]
fn lookup(args: &LookupArgs) -> Result {
    let table = ReferenceTable::load(&args.table.path)?;
    let resolver = Resolver::new(&table);
    let query = Query {
        occupancy: args.occupancy,
        annual_consumption: args.annual_consumption,
        pv_generation: args.pv_generation,
        battery_size: args.battery_size,
    };

    if args.approximate {
        let matched = resolver.closest_match(&query)?;
        info!(
            matched.occupancy_days,
            matched.annual_consumption,
            matched.pv_generation,
            matched.battery_size,
            matched.similarity,
            "weighted nearest match"
        );
        println!("{}", FormattedPercentage(matched.percentage));
    } else {
        println!("{}", FormattedPercentage(resolver.lookup(&query)?));
    }
    Ok(())
}
