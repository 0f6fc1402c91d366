//! Cost allocation: value the charging energy at the blended household rate.

use serde::{Deserialize, Serialize};

use crate::{
    extract::ChargeSummary,
    units::{KilowattHours, Kroner, KronerPerKilowattHour, OerePerKilowattHour},
};

/// Household billing figures over one period, user-edited and persisted.
///
/// All fields default to zero; `household_usage == 0` is the
/// "not yet configured" sentinel that keeps the allocator from running.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingInputs {
    pub household_usage: KilowattHours,
    pub network_fee: Kroner,
    pub energy_cost: Kroner,
    pub supplier_monthly_fee: Kroner,
    pub markup: OerePerKilowattHour,
}

impl BillingInputs {
    pub fn is_configured(&self) -> bool {
        self.household_usage > KilowattHours::ZERO
    }
}

/// Derived per-kWh rates and the valued charging cost. Never persisted on
/// its own, recomputed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub network_fee_per_kwh: KronerPerKilowattHour,
    pub energy_cost_per_kwh: KronerPerKilowattHour,
    pub supplier_fee_per_kwh: KronerPerKilowattHour,
    pub markup_per_kwh: KronerPerKilowattHour,
    pub blended_rate: KronerPerKilowattHour,
    pub total_charging_cost: Kroner,
}

/// Pure function of its two arguments, no I/O, no hidden state.
///
/// Precondition: `inputs.household_usage > 0`. The caller gates the call;
/// violating it yields plain IEEE-754 division-by-zero results.
#[must_use]
pub fn allocate(summary: &ChargeSummary, inputs: &BillingInputs) -> CostBreakdown {
    let network_fee_per_kwh = inputs.network_fee / inputs.household_usage;
    let energy_cost_per_kwh = inputs.energy_cost / inputs.household_usage;
    let supplier_fee_per_kwh = inputs.supplier_monthly_fee / inputs.household_usage;
    let markup_per_kwh = inputs.markup.to_kroner();
    let blended_rate =
        network_fee_per_kwh + energy_cost_per_kwh + supplier_fee_per_kwh + markup_per_kwh;
    CostBreakdown {
        network_fee_per_kwh,
        energy_cost_per_kwh,
        supplier_fee_per_kwh,
        markup_per_kwh,
        blended_rate,
        total_charging_cost: summary.total_energy * blended_rate,
    }
}
