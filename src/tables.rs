//! Terminal rendering of the summary and the cost breakdown.

use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

use crate::{
    allocate::{BillingInputs, CostBreakdown},
    extract::ChargeSummary,
};

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() { "N/A".to_string() } else { value.to_string() }
}

#[must_use]
pub fn build_summary_table(summary: &ChargeSummary) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Charge report", ""]);
    table.add_row(vec![Cell::new("Location"), Cell::new(or_not_available(&summary.location))]);
    table.add_row(vec![Cell::new("Charger"), Cell::new(or_not_available(&summary.charger_name))]);
    table.add_row(vec![
        Cell::new("Period"),
        Cell::new(format!(
            "{} to {}",
            or_not_available(&summary.from_date),
            or_not_available(&summary.end_date),
        )),
    ]);
    table.add_row(vec![Cell::new("Sessions"), Cell::new(summary.sessions)]);
    table.add_row(vec![Cell::new("Duration"), Cell::new(or_not_available(&summary.duration))]);
    table.add_row(vec![Cell::new("Generated"), Cell::new(or_not_available(&summary.generated_date))]);
    table.add_row(vec![
        Cell::new("Total energy"),
        Cell::new(summary.total_energy).add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_inputs_table(inputs: &BillingInputs) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Billing inputs", ""]);
    table.add_row(vec![
        Cell::new("Household usage"),
        Cell::new(inputs.household_usage).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Network fee"),
        Cell::new(inputs.network_fee).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Energy cost"),
        Cell::new(inputs.energy_cost).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Supplier monthly fee"),
        Cell::new(inputs.supplier_monthly_fee).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Markup"),
        Cell::new(format!("{} ({})", inputs.markup, inputs.markup.to_kroner()))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_breakdown_table(breakdown: &CostBreakdown) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Cost breakdown", ""]);
    table.add_row(vec![
        Cell::new("Network fee per kWh"),
        Cell::new(breakdown.network_fee_per_kwh).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Energy cost per kWh"),
        Cell::new(breakdown.energy_cost_per_kwh).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Supplier fee per kWh"),
        Cell::new(breakdown.supplier_fee_per_kwh).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Markup per kWh"),
        Cell::new(breakdown.markup_per_kwh).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Blended rate").add_attribute(Attribute::Bold),
        Cell::new(breakdown.blended_rate)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Total charging cost").add_attribute(Attribute::Bold),
        Cell::new(breakdown.total_charging_cost)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}
