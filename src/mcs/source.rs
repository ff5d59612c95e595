//! Parsers for the two raw reference-table encodings: delimited text with one
//! sample point per row, and the nested band-keyed JSON document. Both produce
//! the same canonical entry list.

use std::path::Path;

use serde::Deserialize;

use crate::{
    mcs::{
        entry::{Band, Entry},
        occupancy::Occupancy,
    },
    prelude::*,
};

/// Dispatch on the file extension: `.json` is the band-keyed document,
/// anything else is treated as delimited text.
pub fn parse(path: &Path, raw: &[u8]) -> Result<Vec<Entry>> {
    if path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("json")) {
        parse_json(raw).with_context(|| format!("failed to parse `{}`", path.display()))
    } else {
        parse_csv(raw).with_context(|| format!("failed to parse `{}`", path.display()))
    }
}

#[derive(Deserialize)]
struct RawRow {
    occupancy_days: u8,
    occupancy_days_normalized: f64,
    annual_consumption_kwh: f64,
    pv_generation_kwh: f64,
    battery_size_kwh: f64,
    predicted_self_consumption_pct: f64,
    pv_to_consumption_ratio: f64,
    battery_to_consumption_ratio: f64,
}

pub fn parse_csv(raw: &[u8]) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (index, row) in csv::Reader::from_reader(raw).deserialize().enumerate() {
        let row: RawRow = row.with_context(|| format!("malformed record #{}", index + 1))?;
        entries.push(Entry {
            occupancy_days: row.occupancy_days,
            occupancy_normalized: row.occupancy_days_normalized,
            occupancy_label: None,
            consumption: Band::point(row.annual_consumption_kwh),
            generation: Band::point(row.pv_generation_kwh),
            battery_size: row.battery_size_kwh,
            percentage: row.predicted_self_consumption_pct,
            pv_to_consumption: row.pv_to_consumption_ratio,
            battery_to_consumption: row.battery_to_consumption_ratio,
        });
    }
    Ok(entries)
}

#[derive(Deserialize)]
struct RawPvBand {
    generation_band_kwh: RawBand,
    fractions_by_battery_kwh: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RawOccupancyNode {
    bands: Vec<RawPvBand>,
}

#[derive(Copy, Clone, Deserialize)]
struct RawBand {
    min: f64,
    max: f64,
}

pub fn parse_json(raw: &[u8]) -> Result<Vec<Entry>> {
    // `preserve_order` keeps the document order, which fixes the tie-breaking
    // order of the resolver.
    let root: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(raw)?;

    let mut entries = Vec::new();
    for (band_key, occupancies) in &root {
        let consumption = parse_band_key(band_key)?;
        let occupancies = occupancies
            .as_object()
            .with_context(|| format!("consumption band `{band_key}` is not an object"))?;
        for (label, node) in occupancies {
            let occupancy = Occupancy::from_label(label)
                .with_context(|| format!("unknown occupancy label `{label}`"))?;
            let node: RawOccupancyNode = serde_json::from_value(node.clone())
                .with_context(|| format!("malformed occupancy node `{label}`"))?;
            for pv_band in node.bands {
                let generation =
                    Band { min: pv_band.generation_band_kwh.min, max: pv_band.generation_band_kwh.max };
                for (breakpoint, percentage) in &pv_band.fractions_by_battery_kwh {
                    let battery_size: f64 = breakpoint
                        .parse()
                        .with_context(|| format!("malformed battery breakpoint `{breakpoint}`"))?;
                    let percentage = percentage
                        .as_f64()
                        .with_context(|| format!("non-numeric percentage at `{breakpoint}`"))?;
                    entries.push(Entry {
                        occupancy_days: occupancy.days_at_home(),
                        occupancy_normalized: f64::from(occupancy.days_at_home()) / 5.0,
                        occupancy_label: Some(label.clone()),
                        consumption,
                        generation,
                        battery_size,
                        percentage,
                        pv_to_consumption: ratio(generation.midpoint(), consumption.midpoint()),
                        battery_to_consumption: ratio(battery_size, consumption.midpoint()),
                    });
                }
            }
        }
    }
    Ok(entries)
}

fn parse_band_key(key: &str) -> Result<Band> {
    let (lo, hi) =
        key.split_once('-').with_context(|| format!("malformed consumption band key `{key}`"))?;
    Ok(Band { min: lo.trim().parse()?, max: hi.trim().parse()? })
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 { numerator / denominator } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const FIXTURE_CSV: &[u8] = include_bytes!("../../data/self_consumption.csv");
    const FIXTURE_JSON: &[u8] = include_bytes!("../../data/self_consumption.json");

    #[test]
    fn csv_rows_become_point_bands() {
        let entries = parse_csv(FIXTURE_CSV).unwrap();
        assert!(!entries.is_empty());
        let first = &entries[0];
        assert_eq!(first.occupancy_days, 5);
        assert_relative_eq!(first.consumption.width(), 0.0);
        assert!(first.occupancy_label.is_none());
    }

    #[test]
    fn json_document_expands_to_one_entry_per_breakpoint() {
        let entries = parse_json(FIXTURE_JSON).unwrap();
        assert!(!entries.is_empty());
        // Every entry carries its source label and a real band.
        for entry in &entries {
            assert!(entry.occupancy_label.is_some());
            assert!(entry.generation.width() > 0.0);
            assert!((0.0..=100.0).contains(&entry.percentage));
        }
    }

    #[test]
    fn unknown_occupancy_label_is_rejected() {
        let raw = br#"{ "0-2500": { "Weekends only": { "bands": [] } } }"#;
        assert!(parse_json(raw).is_err());
    }

    #[test]
    fn band_keys_parse() {
        let band = parse_band_key("2500-5000").unwrap();
        assert_relative_eq!(band.min, 2500.0);
        assert_relative_eq!(band.max, 5000.0);
        assert!(parse_band_key("all").is_err());
    }
}
