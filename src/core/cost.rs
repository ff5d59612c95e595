use crate::{
    core::request::InstallationRequest,
    quantity::{Zero, cost::Gbp, energy::KilowattHours},
};

pub const BATTERY_COST_PER_KWH: f64 = 500.0;
pub const SOLAR_COST_PER_KW: f64 = 1500.0;

/// Upfront installation cost. The battery term is omitted entirely for
/// solar-only installations.
pub fn initial_cost(request: &InstallationRequest) -> Gbp {
    let battery = if request.battery_size > KilowattHours::ZERO {
        Gbp(request.battery_size.0 * BATTERY_COST_PER_KWH)
    } else {
        Gbp::ZERO
    };
    battery + Gbp(request.solar_size.0 * SOLAR_COST_PER_KW)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn combined_installation() {
        let request = InstallationRequest::default();
        assert_relative_eq!(initial_cost(&request).0, 17.5 * 500.0 + 4.0 * 1500.0);
    }

    #[test]
    fn solar_only_installation() {
        let request =
            InstallationRequest { battery_size: KilowattHours::ZERO, ..Default::default() };
        assert_relative_eq!(initial_cost(&request).0, 6000.0);
    }
}
