//! In-memory tariff catalog with atomic snapshot semantics: readers grab an
//! [`Arc`] of the current snapshot and keep computing against it even while a
//! replacement lands.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::{quantity::rate::KilowattHourRate, tariff::Tariff};

pub struct Snapshot {
    pub tariffs: Vec<Tariff>,
    pub refreshed_at: DateTime<Utc>,
}

pub struct TariffCatalog {
    current: RwLock<Arc<Snapshot>>,
}

impl TariffCatalog {
    pub fn new(tariffs: Vec<Tariff>) -> Self {
        let snapshot = Snapshot { tariffs, refreshed_at: Utc::now() };
        Self { current: RwLock::new(Arc::new(snapshot)) }
    }

    pub fn with_defaults() -> Self {
        Self::new(Self::default_tariffs())
    }

    /// The current snapshot. The returned [`Arc`] stays valid and unchanged
    /// for as long as the caller holds it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            // A poisoned lock still holds a consistent snapshot: the catalog
            // is only ever replaced wholesale, never mutated in place.
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Swap in a complete replacement. In-flight calculations holding the
    /// previous snapshot are unaffected.
    pub fn replace(&self, tariffs: Vec<Tariff>) {
        let snapshot = Arc::new(Snapshot { tariffs, refreshed_at: Utc::now() });
        match self.current.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }

    pub fn default_tariffs() -> Vec<Tariff> {
        fn tariff(
            name: &str,
            peak_rate: f64,
            offpeak_rate: f64,
            export_rate: f64,
            ev_required: bool,
        ) -> Tariff {
            Tariff {
                name: name.to_string(),
                peak_rate: KilowattHourRate(peak_rate),
                offpeak_rate: KilowattHourRate(offpeak_rate),
                export_rate: KilowattHourRate(export_rate),
                ev_required,
            }
        }

        vec![
            tariff("Intelligent Octopus Go", 0.2771, 0.075, 0.15, true),
            tariff("Octopus Flux", 0.2758, 0.1655, 0.2922, false),
            tariff("EDF GoElectric", 0.2980, 0.0899, 0.1850, true),
            tariff("OVO Energy", 0.2790, 0.1299, 0.1650, false),
            tariff("Bulb Smart Tariff", 0.2810, 0.1180, 0.1720, false),
        ]
    }
}

impl Default for TariffCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_ev_and_non_ev_households() {
        let catalog = TariffCatalog::with_defaults();
        let snapshot = catalog.snapshot();
        assert_eq!(snapshot.tariffs.len(), 5);
        assert!(snapshot.tariffs.iter().any(|tariff| tariff.ev_required));
        assert!(snapshot.tariffs.iter().any(|tariff| !tariff.ev_required));
    }

    #[test]
    fn replacement_does_not_disturb_held_snapshots() {
        let catalog = TariffCatalog::with_defaults();
        let held = catalog.snapshot();

        catalog.replace(vec![Tariff {
            name: "Flat Standard".to_string(),
            peak_rate: KilowattHourRate(0.30),
            offpeak_rate: KilowattHourRate(0.30),
            export_rate: KilowattHourRate(0.05),
            ev_required: false,
        }]);

        assert_eq!(held.tariffs.len(), 5);
        let fresh = catalog.snapshot();
        assert_eq!(fresh.tariffs.len(), 1);
        assert_eq!(fresh.tariffs[0].name, "Flat Standard");
        assert!(fresh.refreshed_at >= held.refreshed_at);
    }
}
