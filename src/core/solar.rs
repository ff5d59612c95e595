use crate::{
    core::request::InstallationRequest,
    error::Error,
    mcs::{
        resolver::{Query, Resolver},
        table::ReferenceTable,
    },
    quantity::energy::KilowattHours,
};

/// Typical UK specific yield [kWh per installed kW per year].
pub const SPECIFIC_YIELD: f64 = 850.0;

/// Which self-use/export heuristic to apply.
///
/// The reference table is canonical; the fixed split is the legacy fallback
/// kept for comparison runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SelfUseSplit {
    Table,
    Fixed,
}

/// Annual solar generation and its self-use/export breakdown.
///
/// Computed once per request: the split does not change across simulated
/// years.
#[derive(Copy, Clone, Debug)]
pub struct SolarInfo {
    pub generation: KilowattHours,
    pub self_used: KilowattHours,
    pub exported: KilowattHours,
}

impl SolarInfo {
    pub fn annual_generation(request: &InstallationRequest) -> KilowattHours {
        KilowattHours(request.solar_size.0 * SPECIFIC_YIELD * request.orientation.output_multiplier())
    }

    pub fn resolve(
        request: &InstallationRequest,
        split: SelfUseSplit,
        table: &ReferenceTable,
    ) -> Result<Self, Error> {
        let generation = Self::annual_generation(request);
        match split {
            SelfUseSplit::Fixed => {
                let self_use_fraction =
                    if request.occupancy.home_during_work_hours() { 0.7 } else { 0.5 };
                Ok(Self::from_fraction(generation, self_use_fraction))
            }
            SelfUseSplit::Table => {
                let query = Query {
                    occupancy: request.occupancy,
                    annual_consumption: request.annual_usage.0,
                    pv_generation: generation.0,
                    battery_size: request.battery_size.0,
                };
                let percentage = Resolver::new(table).lookup(&query)?;
                Ok(Self::from_fraction(generation, percentage / 100.0))
            }
        }
    }

    fn from_fraction(generation: KilowattHours, self_use_fraction: f64) -> Self {
        let self_used = generation * self_use_fraction;
        Self { generation, self_used, exported: generation - self_used }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{core::request::Orientation, mcs::occupancy::Occupancy};

    #[test]
    fn generation_scales_with_orientation() {
        let mut request = InstallationRequest::default();
        request.orientation = Orientation::North;
        assert_relative_eq!(SolarInfo::annual_generation(&request).0, 4.0 * 850.0 * 0.63);
    }

    #[test]
    fn fixed_split_depends_on_occupancy() {
        let empty = ReferenceTable::new(Vec::new());

        let mut request = InstallationRequest::default();
        request.occupancy = Occupancy::HomeAllDay;
        let info = SolarInfo::resolve(&request, SelfUseSplit::Fixed, &empty).unwrap();
        assert_relative_eq!(info.self_used.0, info.generation.0 * 0.7);
        assert_relative_eq!(info.exported.0, info.generation.0 * 0.3);

        request.occupancy = Occupancy::OutDuringDay;
        let info = SolarInfo::resolve(&request, SelfUseSplit::Fixed, &empty).unwrap();
        assert_relative_eq!(info.self_used.0, info.generation.0 * 0.5);
        assert_relative_eq!(info.exported.0, info.generation.0 * 0.5);
    }
}
