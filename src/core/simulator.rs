use serde::Serialize;

use crate::{
    core::{degradation::degradation, request::InstallationRequest, solar::SolarInfo},
    quantity::{Zero, cost::Gbp, energy::KilowattHours},
    tariff::Tariff,
};

/// Number of simulated years; also the assumed battery lifespan.
pub const HORIZON_YEARS: u32 = 15;

/// Portion of nameplate battery capacity that is actually usable.
pub const USABLE_BATTERY_FRACTION: f64 = 0.90;

/// Round-trip efficiency of charging off-peak and discharging at peak.
pub const ROUND_TRIP_EFFICIENCY: f64 = 0.85;

const DAYS_PER_YEAR: f64 = 365.0;

/// Savings and energy figures for a single simulated year.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBreakdown {
    pub year: u32,
    pub usable_capacity: KilowattHours,
    pub degradation_factor: f64,
    pub shiftable: KilowattHours,
    pub battery_savings: Gbp,
    pub solar_used: KilowattHours,
    pub solar_export: KilowattHours,
    pub solar_savings_self_use: Gbp,
    pub solar_savings_export: Gbp,
    pub yearly_total: Gbp,

    /// Filled in by the aggregator.
    pub cumulative: Gbp,
}

pub fn simulate_year(
    year: u32,
    request: &InstallationRequest,
    tariff: &Tariff,
    solar: SolarInfo,
) -> YearlyBreakdown {
    let degradation_factor = degradation(year);
    let (usable_capacity, shiftable, battery_savings) =
        if request.battery_size > KilowattHours::ZERO {
            let usable_capacity =
                request.battery_size * USABLE_BATTERY_FRACTION * degradation_factor;
            let shiftable = (usable_capacity * DAYS_PER_YEAR).min(request.annual_usage);
            let battery_savings =
                shiftable * (tariff.peak_rate - tariff.offpeak_rate) * ROUND_TRIP_EFFICIENCY;
            (usable_capacity, shiftable, battery_savings)
        } else {
            (KilowattHours::ZERO, KilowattHours::ZERO, Gbp::ZERO)
        };

    let solar_savings_self_use = solar.self_used * tariff.peak_rate;
    let solar_savings_export = solar.exported * tariff.export_rate;

    YearlyBreakdown {
        year,
        usable_capacity,
        degradation_factor,
        shiftable,
        battery_savings,
        solar_used: solar.self_used,
        solar_export: solar.exported,
        solar_savings_self_use,
        solar_savings_export,
        yearly_total: battery_savings + solar_savings_self_use + solar_savings_export,
        cumulative: Gbp::ZERO,
    }
}

pub fn simulate(
    request: &InstallationRequest,
    tariff: &Tariff,
    solar: SolarInfo,
) -> Vec<YearlyBreakdown> {
    (1..=HORIZON_YEARS).map(|year| simulate_year(year, request, tariff, solar)).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::quantity::rate::KilowattHourRate;

    fn test_tariff() -> Tariff {
        Tariff {
            name: "Test".to_string(),
            peak_rate: KilowattHourRate(0.2771),
            offpeak_rate: KilowattHourRate(0.075),
            export_rate: KilowattHourRate(0.15),
            ev_required: false,
        }
    }

    fn no_solar() -> SolarInfo {
        SolarInfo {
            generation: KilowattHours::ZERO,
            self_used: KilowattHours::ZERO,
            exported: KilowattHours::ZERO,
        }
    }

    /// 17.5 kWh battery against 4000 kWh usage: the daily cycle is capped by
    /// usage, not capacity.
    #[test]
    fn year_one_shiftable_is_capped_by_usage() {
        let request = InstallationRequest::default();
        let breakdown = simulate_year(1, &request, &test_tariff(), no_solar());
        assert_relative_eq!(breakdown.shiftable.0, 4000.0);
        assert_relative_eq!(breakdown.battery_savings.0, 687.14, epsilon = 0.01);
    }

    #[test]
    fn no_battery_means_no_battery_figures() {
        let request =
            InstallationRequest { battery_size: KilowattHours::ZERO, ..Default::default() };
        for year in 1..=HORIZON_YEARS {
            let breakdown = simulate_year(year, &request, &test_tariff(), no_solar());
            assert_relative_eq!(breakdown.usable_capacity.0, 0.0);
            assert_relative_eq!(breakdown.shiftable.0, 0.0);
            assert_relative_eq!(breakdown.battery_savings.0, 0.0);
        }
    }

    #[test]
    fn degradation_eventually_uncaps_the_shiftable_energy() {
        let request = InstallationRequest::default();
        // By year 12 capacity has faded enough that usage is no longer the cap.
        let breakdown = simulate_year(12, &request, &test_tariff(), no_solar());
        let expected = 17.5 * 0.90 * (0.70 - 0.70 * (2.0 / 5.0)) * 365.0;
        assert!(expected < 4000.0);
        assert_relative_eq!(breakdown.shiftable.0, expected, epsilon = 1e-9);
    }

    #[test]
    fn solar_savings_use_peak_and_export_rates() {
        let request =
            InstallationRequest { battery_size: KilowattHours::ZERO, ..Default::default() };
        let solar = SolarInfo {
            generation: KilowattHours(3400.0),
            self_used: KilowattHours(1700.0),
            exported: KilowattHours(1700.0),
        };
        let breakdown = simulate_year(1, &request, &test_tariff(), solar);
        assert_relative_eq!(breakdown.solar_savings_self_use.0, 1700.0 * 0.2771);
        assert_relative_eq!(breakdown.solar_savings_export.0, 1700.0 * 0.15);
        assert_relative_eq!(
            breakdown.yearly_total.0,
            breakdown.solar_savings_self_use.0 + breakdown.solar_savings_export.0
        );
    }

    #[test]
    fn simulation_covers_the_whole_horizon() {
        let request = InstallationRequest::default();
        let breakdowns = simulate(&request, &test_tariff(), no_solar());
        assert_eq!(breakdowns.len(), 15);
        assert_eq!(breakdowns[0].year, 1);
        assert_eq!(breakdowns[14].year, 15);
        // Fully degraded final year.
        assert_relative_eq!(breakdowns[14].battery_savings.0, 0.0);
    }
}
