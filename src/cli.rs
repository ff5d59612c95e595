use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    core::{
        request::{InstallationRequest, Orientation},
        solar::SelfUseSplit,
    },
    mcs::occupancy::Occupancy,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the return on a solar and battery installation.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// List the configured electricity tariffs.
    #[clap(name = "tariffs")]
    Tariffs,

    /// Self-consumption reference table tools.
    #[clap(name = "table")]
    Table(Box<TableToolArgs>),
}

#[must_use]
#[derive(Parser)]
pub struct TableArgs {
    /// Path to the raw self-consumption reference table.
    #[clap(long = "table", env = "SOLAR_ROI_TABLE", default_value = "data/self_consumption.json")]
    pub path: PathBuf,
}

#[must_use]
#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    pub table: TableArgs,

    /// Nameplate battery capacity, zero for a solar-only installation [kWh].
    #[clap(long = "battery-size", default_value = "17.5")]
    pub battery_size: KilowattHours,

    /// Annual household consumption [kWh].
    #[clap(long = "annual-usage", default_value = "4000")]
    pub annual_usage: KilowattHours,

    /// Solar array size, zero for a battery-only installation [kW].
    #[clap(long = "solar-size", default_value = "4.0")]
    pub solar_size: Kilowatts,

    /// Compass orientation of the solar array.
    #[clap(long, value_enum, default_value = "south")]
    pub orientation: Orientation,

    /// Daytime occupancy pattern of the household.
    #[clap(long, value_enum, default_value = "out-during-day")]
    pub occupancy: Occupancy,

    /// The household owns an EV, unlocking EV-only tariffs.
    #[clap(long = "ev")]
    pub has_ev: bool,

    /// The household wants a financing quote alongside the estimate.
    #[clap(long = "finance")]
    pub needs_finance: bool,

    /// Include the per-year breakdown in the output.
    #[clap(long)]
    pub breakdown: bool,

    /// Use the legacy fixed self-use split instead of the reference table.
    #[clap(long = "fixed-split")]
    pub fixed_split: bool,

    /// Emit machine-readable JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

impl EstimateArgs {
    pub fn request(&self) -> InstallationRequest {
        InstallationRequest {
            battery_size: self.battery_size,
            annual_usage: self.annual_usage,
            solar_size: self.solar_size,
            orientation: self.orientation,
            has_ev: self.has_ev,
            occupancy: self.occupancy,
            needs_finance: self.needs_finance,
            include_breakdown: self.breakdown,
        }
    }

    pub const fn split(&self) -> SelfUseSplit {
        if self.fixed_split { SelfUseSplit::Fixed } else { SelfUseSplit::Table }
    }
}

#[must_use]
#[derive(Parser)]
pub struct TableToolArgs {
    #[command(subcommand)]
    pub command: TableCommand,
}

#[derive(Subcommand)]
pub enum TableCommand {
    /// Look up the expected self-consumption percentage for one scenario.
    #[clap(name = "lookup")]
    Lookup(Box<LookupArgs>),

    /// Parse the raw table and refresh the binary snapshot alongside it.
    #[clap(name = "build-snapshot")]
    BuildSnapshot(TableArgs),
}

#[must_use]
#[derive(Parser)]
pub struct LookupArgs {
    #[clap(flatten)]
    pub table: TableArgs,

    /// Daytime occupancy pattern of the household.
    #[clap(long, value_enum, default_value = "out-during-day")]
    pub occupancy: Occupancy,

    /// Annual household consumption [kWh].
    #[clap(long = "consumption", default_value = "4000")]
    pub annual_consumption: f64,

    /// Annual PV generation [kWh].
    #[clap(long = "pv", default_value = "3400")]
    pub pv_generation: f64,

    /// Nameplate battery capacity [kWh].
    #[clap(long = "battery", default_value = "17.5")]
    pub battery_size: f64,

    /// Skip the exact path and report the weighted nearest match instead.
    #[clap(long)]
    pub approximate: bool,
}
