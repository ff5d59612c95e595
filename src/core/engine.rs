use std::sync::Arc;

use crate::{
    core::{
        aggregate::{RoiResult, aggregate},
        cost::initial_cost,
        request::InstallationRequest,
        simulator::simulate,
        solar::{SelfUseSplit, SolarInfo},
    },
    error::Error,
    mcs::table::ReferenceTable,
    tariff::{self, catalog::TariffCatalog},
};

/// The calculation engine with its injected read-only dependencies.
///
/// Purely functional per request: all simulation state is request-local, the
/// reference table and the catalog snapshot are only ever read.
pub struct Engine {
    table: Arc<ReferenceTable>,
    catalog: Arc<TariffCatalog>,
    split: SelfUseSplit,
}

impl Engine {
    pub const fn new(
        table: Arc<ReferenceTable>,
        catalog: Arc<TariffCatalog>,
        split: SelfUseSplit,
    ) -> Self {
        Self { table, catalog, split }
    }

    pub fn calculate(&self, request: &InstallationRequest) -> Result<RoiResult, Error> {
        let catalog = self.catalog.snapshot();
        let tariff = tariff::select(&catalog.tariffs, request.has_ev)?;
        let solar = SolarInfo::resolve(request, self.split, &self.table)?;
        let mut breakdowns = simulate(request, tariff, solar);
        Ok(aggregate(initial_cost(request), &mut breakdowns, request.include_breakdown))
    }
}
