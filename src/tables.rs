use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    catalog::Catalog,
    core::{Allocation, BillBreakdown, ComparisonResult, Month, MonthlySeries},
    fmt::FormattedPercentage,
    quantity::cost::Cost,
    request::SupplyInfo,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn cost_cell(cost: Cost) -> Cell {
    Cell::new(cost).set_alignment(CellAlignment::Right)
}

/// Green for a saving, red for an extra cost.
fn saving_cell(saving: Cost) -> Cell {
    cost_cell(saving).fg(if saving > Cost::ZERO {
        Color::Green
    } else if saving < Cost::ZERO {
        Color::Red
    } else {
        Color::Reset
    })
}

pub fn build_supply_table(supply: &SupplyInfo) -> Table {
    let mut table = new_table();
    let rows = [
        ("Customer", supply.customer_name.clone()),
        ("Address", Some(supply.address.clone())),
        ("Town", Some(supply.town.clone())),
        ("Tax ID", Some(supply.tax_id.clone())),
        ("CUPS", Some(supply.cups.clone())),
        ("Study date", Some(supply.study_date.format("%d/%m/%Y").to_string())),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            table.add_row(vec![Cell::new(label).add_attribute(Attribute::Dim), Cell::new(value)]);
        }
    }
    table
}

pub fn build_comparison_table(
    result: &ComparisonResult,
    current_name: &str,
    proposed_name: &str,
) -> Table {
    let lines: [(&str, fn(&BillBreakdown) -> Cost); 7] = [
        ("Power", |bill| bill.power),
        ("Energy", |bill| bill.energy),
        ("Fixed charges", |bill| bill.fixed_surcharge),
        ("Electricity tax", |bill| bill.electricity_tax),
        ("VAT", |bill| bill.vat),
        ("Total per year", |bill| bill.total_annual),
        ("Total per month", |bill| bill.total_monthly),
    ];

    let mut table = new_table();
    table.set_header(vec![
        Cell::new(result.tariff).add_attribute(Attribute::Bold),
        Cell::new(current_name),
        Cell::new(proposed_name),
        Cell::new("Difference"),
    ]);
    for (label, line) in lines {
        let current = line(&result.current);
        let proposed = line(&result.proposed);
        table.add_row(vec![
            Cell::new(label),
            cost_cell(current),
            cost_cell(proposed),
            saving_cell(current - proposed).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Saving")
            .add_attribute(Attribute::Bold)
            .fg(if result.is_saving() { Color::Green } else { Color::Red }),
        saving_cell(result.saving_annual).add_attribute(Attribute::Bold),
        saving_cell(result.saving_monthly).add_attribute(Attribute::Bold),
        Cell::new(FormattedPercentage(result.saving_percent))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_monthly_table(
    series: &MonthlySeries,
    current_name: &str,
    proposed_name: &str,
) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Month"),
        Cell::new(format!("{current_name}: energy")),
        Cell::new("Power"),
        Cell::new("Taxes"),
        Cell::new(format!("{proposed_name}: energy")),
        Cell::new("Power"),
        Cell::new("Taxes"),
        Cell::new("Difference"),
    ]);
    for (index, month) in Month::ALL.into_iter().enumerate() {
        let current = &series.current;
        let proposed = &series.proposed;
        let difference = current.month_total(index) - proposed.month_total(index);
        table.add_row(vec![
            Cell::new(month).add_attribute(Attribute::Bold),
            cost_cell(current.energy[index]),
            cost_cell(current.power[index]).add_attribute(Attribute::Dim),
            cost_cell(current.taxes[index]).add_attribute(Attribute::Dim),
            cost_cell(proposed.energy[index]),
            cost_cell(proposed.power[index]).add_attribute(Attribute::Dim),
            cost_cell(proposed.taxes[index]).add_attribute(Attribute::Dim),
            saving_cell(difference),
        ]);
    }
    table
}

/// How far the monthly lines drift from the yearly bills.
pub fn build_drift_table(
    allocation: &Allocation,
    current_name: &str,
    proposed_name: &str,
) -> Table {
    let (current_drift, proposed_drift) = allocation.drift();
    let mut table = new_table();
    table.set_header(vec!["Plan", "Monthly sum", "Yearly bill", "Drift"]);
    for (name, lines, bill, drift) in [
        (current_name, &allocation.monthly.current, &allocation.annual.current, current_drift),
        (proposed_name, &allocation.monthly.proposed, &allocation.annual.proposed, proposed_drift),
    ] {
        table.add_row(vec![
            Cell::new(name),
            cost_cell(lines.pre_tax_total()),
            cost_cell(bill.subtotal()),
            cost_cell(drift).fg(if drift.abs() >= Cost::ONE_CENT {
                Color::DarkYellow
            } else {
                Color::Reset
            }),
        ]);
    }
    table
}

pub fn build_offers_table(catalog: &Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Offer", "Label", "Tariff", "Power", "Energy"]);
    for (key, offer) in &catalog.0 {
        for (tariff, prices) in &offer.tariffs {
            table.add_row(vec![
                Cell::new(key).add_attribute(Attribute::Bold),
                Cell::new(&offer.label),
                Cell::new(tariff),
                Cell::new(
                    prices
                        .power_price
                        .iter()
                        .map(|(period, price)| format!("{period}: {price}"))
                        .join("\n"),
                ),
                Cell::new(
                    prices
                        .energy_price
                        .iter()
                        .map(|(period, price)| format!("{period}: {price}"))
                        .join("\n"),
                ),
            ]);
        }
    }
    table
}
