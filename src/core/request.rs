use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    mcs::occupancy::Occupancy,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

/// Compass orientation of the solar array.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Orientation {
    /// Annual output relative to a due-south array.
    pub const fn output_multiplier(self) -> f64 {
        match self {
            Self::South => 1.0,
            Self::SouthEast | Self::SouthWest => 0.97,
            Self::East | Self::West => 0.83,
            Self::NorthEast | Self::NorthWest => 0.73,
            Self::North => 0.63,
        }
    }
}

/// User inputs for a single calculation. Immutable once built.
#[derive(Clone, Debug)]
pub struct InstallationRequest {
    pub battery_size: KilowattHours,
    pub annual_usage: KilowattHours,
    pub solar_size: Kilowatts,
    pub orientation: Orientation,
    pub has_ev: bool,
    pub occupancy: Occupancy,

    /// Carried for the financing collaborator, not used by the engine itself.
    pub needs_finance: bool,

    pub include_breakdown: bool,
}

impl Default for InstallationRequest {
    fn default() -> Self {
        Self {
            battery_size: KilowattHours(17.5),
            annual_usage: KilowattHours(4000.0),
            solar_size: Kilowatts(4.0),
            orientation: Orientation::South,
            has_ev: false,
            occupancy: Occupancy::OutDuringDay,
            needs_finance: false,
            include_breakdown: false,
        }
    }
}
