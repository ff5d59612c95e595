pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::{error::Error, quantity::rate::KilowattHourRate};

/// A named rate structure a household can be billed under.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tariff {
    pub name: String,
    pub peak_rate: KilowattHourRate,
    pub offpeak_rate: KilowattHourRate,
    pub export_rate: KilowattHourRate,

    /// Some tariffs are only available to EV owners.
    pub ev_required: bool,
}

/// First catalog entry whose EV requirement matches the request. An empty
/// catalog or a missing match is a configuration defect, never defaulted.
pub fn select(tariffs: &[Tariff], needs_ev_tariff: bool) -> Result<&Tariff, Error> {
    tariffs
        .iter()
        .find(|tariff| tariff.ev_required == needs_ev_tariff)
        .ok_or(Error::NoTariffConfigured { ev_required: needs_ev_tariff })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::catalog::TariffCatalog;

    #[test]
    fn selection_filters_on_the_ev_requirement() {
        let tariffs = TariffCatalog::default_tariffs();
        let ev = select(&tariffs, true).unwrap();
        assert!(ev.ev_required);
        let non_ev = select(&tariffs, false).unwrap();
        assert!(!non_ev.ev_required);
        assert_ne!(ev.name, non_ev.name);
    }

    #[test]
    fn first_match_wins() {
        let tariffs = TariffCatalog::default_tariffs();
        let expected = tariffs.iter().find(|tariff| !tariff.ev_required).unwrap();
        assert_eq!(select(&tariffs, false).unwrap().name, expected.name);
    }

    #[test]
    fn empty_catalog_is_fatal() {
        let error = select(&[], false).unwrap_err();
        assert!(matches!(error, Error::NoTariffConfigured { ev_required: false }));
    }
}
