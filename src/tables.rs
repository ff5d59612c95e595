use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{aggregate::RoiResult, simulator::YearlyBreakdown},
    fmt::{FormattedPercentage, Money},
    quantity::{Zero, cost::Gbp},
    tariff::Tariff,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_summary_table(result: &RoiResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Total cost"),
        Cell::new(Money(result.total_cost)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Average yearly savings"),
        Cell::new(Money(result.average_yearly_savings))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Average monthly savings"),
        Cell::new(Money(result.average_monthly_savings))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Payback year"),
        match result.payback_year {
            Some(year) => Cell::new(year).set_alignment(CellAlignment::Right).fg(Color::Green),
            None => Cell::new("beyond horizon").set_alignment(CellAlignment::Right).fg(Color::Red),
        },
    ]);
    table.add_row(vec![
        Cell::new("Return on investment"),
        Cell::new(FormattedPercentage(result.roi_percentage))
            .set_alignment(CellAlignment::Right)
            .fg(if result.roi_percentage >= 100.0 { Color::Green } else { Color::Red }),
    ]);
    table
}

pub fn build_breakdown_table(breakdowns: &[YearlyBreakdown]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Year", "Usable", "Shifted", "Battery", "Self-used", "Exported", "Solar", "Total",
        "Cumulative",
    ]);
    for breakdown in breakdowns {
        table.add_row(vec![
            Cell::new(breakdown.year).add_attribute(Attribute::Dim),
            Cell::new(breakdown.usable_capacity).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.shiftable).set_alignment(CellAlignment::Right),
            Cell::new(Money(breakdown.battery_savings)).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.solar_used)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(breakdown.solar_export)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(Money(breakdown.solar_savings_self_use + breakdown.solar_savings_export))
                .set_alignment(CellAlignment::Right),
            Cell::new(Money(breakdown.yearly_total)).set_alignment(CellAlignment::Right),
            Cell::new(Money(breakdown.cumulative)).set_alignment(CellAlignment::Right).fg(
                if breakdown.cumulative > Gbp::ZERO { Color::Green } else { Color::Red },
            ),
        ]);
    }
    table
}

pub fn build_tariffs_table(tariffs: &[Tariff]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tariff", "Peak", "Off-peak", "Export", "EV only"]);
    for tariff in tariffs {
        table.add_row(vec![
            Cell::new(&tariff.name),
            Cell::new(tariff.peak_rate).set_alignment(CellAlignment::Right).fg(Color::Red),
            Cell::new(tariff.offpeak_rate).set_alignment(CellAlignment::Right).fg(Color::Green),
            Cell::new(tariff.export_rate).set_alignment(CellAlignment::Right),
            Cell::new(if tariff.ev_required { "yes" } else { "" })
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}
