use crate::{
    error::Error,
    mcs::{entry::Entry, occupancy::Occupancy, table::ReferenceTable},
};

pub const MAX_CONSUMPTION: f64 = 20_000.0;
pub const MAX_PV_GENERATION: f64 = 10_000.0;
pub const MAX_BATTERY_SIZE: f64 = 50.0;

const OCCUPANCY_WEIGHT: f64 = 0.40;
const CONSUMPTION_WEIGHT: f64 = 0.30;
const PV_WEIGHT: f64 = 0.20;
const BATTERY_WEIGHT: f64 = 0.10;

/// A self-consumption query. All energies in kWh, matching the table itself.
#[derive(Copy, Clone, Debug)]
pub struct Query {
    pub occupancy: Occupancy,
    pub annual_consumption: f64,
    pub pv_generation: f64,
    pub battery_size: f64,
}

/// The winning row of a weighted search, with the values it was matched on.
#[derive(Clone, Debug)]
pub struct Match {
    pub occupancy_days: u8,
    pub annual_consumption: f64,
    pub pv_generation: f64,
    pub battery_size: f64,
    pub percentage: f64,
    pub similarity: f64,
}

/// Deterministic lookup against a read-only reference table: an exact band
/// match when one exists, otherwise a weighted nearest-match scan.
pub struct Resolver<'a> {
    table: &'a ReferenceTable,
}

impl<'a> Resolver<'a> {
    pub const fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    /// Expected self-consumption percentage in `[0, 100]`.
    pub fn lookup(&self, query: &Query) -> Result<f64, Error> {
        self.validate(query)?;
        if let Some(percentage) = self.exact(query) {
            return Ok(percentage);
        }
        Ok(self.closest(query).ok_or(Error::EmptyTable)?.percentage)
    }

    /// Exact band lookup only; `NoMatch` when no band contains the query.
    pub fn lookup_exact(&self, query: &Query) -> Result<f64, Error> {
        self.validate(query)?;
        self.exact(query).ok_or(Error::NoMatch {
            consumption: query.annual_consumption,
            generation: query.pv_generation,
        })
    }

    /// Weighted nearest-match over the whole table, skipping the exact path.
    pub fn closest_match(&self, query: &Query) -> Result<Match, Error> {
        self.validate(query)?;
        self.closest(query).ok_or(Error::EmptyTable)
    }

    fn validate(&self, query: &Query) -> Result<(), Error> {
        check("annual consumption", query.annual_consumption, 0.0, MAX_CONSUMPTION)?;
        check("PV generation", query.pv_generation, 0.0, MAX_PV_GENERATION)?;
        check("battery size", query.battery_size, 0.0, MAX_BATTERY_SIZE)?;
        if self.table.is_empty() {
            return Err(Error::EmptyTable);
        }
        Ok(())
    }

    /// Battery breakpoint closest to the request within the bands containing
    /// it. Ties keep the earlier row.
    fn exact(&self, query: &Query) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for entry in self.table.entries() {
            if entry.occupancy_days != query.occupancy.days_at_home()
                || !entry.consumption.contains(query.annual_consumption)
                || !entry.generation.contains(query.pv_generation)
            {
                continue;
            }
            let delta = (entry.battery_size - query.battery_size).abs();
            if best.is_none_or(|(best_delta, _)| delta < best_delta) {
                best = Some((delta, entry.percentage));
            }
        }
        best.map(|(_, percentage)| percentage)
    }

    /// Strictly-greater comparison keeps the first-encountered maximum, so
    /// identical inputs always reproduce identical matches.
    fn closest(&self, query: &Query) -> Option<Match> {
        let mut best_similarity = -1.0;
        let mut best: Option<&Entry> = None;
        for entry in self.table.entries() {
            let similarity = Self::similarity(entry, query);
            if similarity > best_similarity {
                best_similarity = similarity;
                best = Some(entry);
            }
        }
        best.map(|entry| Match {
            occupancy_days: entry.occupancy_days,
            annual_consumption: entry.consumption.midpoint(),
            pv_generation: entry.generation.midpoint(),
            battery_size: entry.battery_size,
            percentage: entry.percentage,
            similarity: best_similarity,
        })
    }

    fn similarity(entry: &Entry, query: &Query) -> f64 {
        let occupancy = match &entry.occupancy_label {
            Some(label) => normalized_levenshtein(query.occupancy.label(), label),
            None => {
                if entry.occupancy_days == query.occupancy.days_at_home() { 1.0 } else { 0.0 }
            }
        };

        let consumption =
            (1.0 - entry.consumption.distance_to(query.annual_consumption) / MAX_CONSUMPTION)
                .max(0.0);

        let pv_distance = entry.generation.distance_to(query.pv_generation);
        let pv = if pv_distance == 0.0 {
            1.0
        } else {
            let band_width = entry.generation.width();
            let scale = if band_width > 0.0 { band_width } else { MAX_PV_GENERATION };
            (1.0 - pv_distance / scale).max(0.0)
        };

        let battery =
            (1.0 - (entry.battery_size - query.battery_size).abs() / MAX_BATTERY_SIZE).max(0.0);

        occupancy * OCCUPANCY_WEIGHT
            + consumption * CONSUMPTION_WEIGHT
            + pv * PV_WEIGHT
            + battery * BATTERY_WEIGHT
    }
}

fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), Error> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value, min, max })
    }
}

/// Similarity in `[0, 1]`: 1.0 for equal labels (case-insensitive), falling
/// off with edit distance relative to the longer label.
fn normalized_levenshtein(left: &str, right: &str) -> f64 {
    let left: Vec<char> = left.to_lowercase().chars().collect();
    let right: Vec<char> = right.to_lowercase().chars().collect();
    let longest = left.len().max(right.len());
    if longest == 0 {
        return 1.0;
    }
    #[expect(clippy::cast_precision_loss)]
    {
        1.0 - levenshtein(&left, &right) as f64 / longest as f64
    }
}

fn levenshtein(left: &[char], right: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=right.len()).collect();
    let mut current = vec![0; right.len() + 1];
    for (row, left_char) in left.iter().enumerate() {
        current[0] = row + 1;
        for (column, right_char) in right.iter().enumerate() {
            let substitution = previous[column] + usize::from(left_char != right_char);
            current[column + 1] = substitution.min(previous[column + 1] + 1).min(current[column] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[right.len()]
}
