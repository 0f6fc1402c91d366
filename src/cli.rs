use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    allocate::BillingInputs,
    units::{KilowattHours, Kroner, OerePerKilowattHour},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Directory holding the persisted billing inputs and print records.
    #[clap(long, env = "LADEKOST_STORE_DIR", default_value = ".ladekost")]
    pub store_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract and show the charge summary from a report workbook.
    Inspect(ReportArgs),

    /// Show the persisted billing inputs, applying any overrides first.
    Inputs(InputsArgs),

    /// Extract, allocate against the billing inputs, and render the report.
    Calculate(CalculateArgs),
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to the charger report workbook (`.xlsx`/`.xls`).
    pub report: PathBuf,
}

#[derive(clap::Args)]
pub struct InputsArgs {
    #[command(flatten)]
    pub billing: BillingArgs,
}

#[derive(clap::Args)]
pub struct CalculateArgs {
    /// Path to the charger report workbook (`.xlsx`/`.xls`).
    pub report: PathBuf,

    #[command(flatten)]
    pub billing: BillingArgs,

    /// Write the print handoff record after calculating.
    #[clap(long)]
    pub print: bool,
}

/// Billing figure overrides; every provided value is persisted.
#[derive(clap::Args)]
pub struct BillingArgs {
    /// Total household consumption over the billing period, in kWh.
    #[clap(long)]
    pub household_usage: Option<KilowattHours>,

    /// Network fee (nettleie) billed over the period, in kroner.
    #[clap(long)]
    pub network_fee: Option<Kroner>,

    /// Household energy cost billed over the period, in kroner.
    #[clap(long)]
    pub energy_cost: Option<Kroner>,

    /// Supplier monthly fee billed over the period, in kroner.
    #[clap(long)]
    pub supplier_monthly_fee: Option<Kroner>,

    /// Supplier markup (påslag), in øre per kWh.
    #[clap(long)]
    pub markup: Option<OerePerKilowattHour>,
}

impl BillingArgs {
    /// Merge the provided overrides into the inputs. Returns whether
    /// anything changed, so unchanged inputs are not rewritten.
    pub fn merge_into(&self, inputs: &mut BillingInputs) -> bool {
        let mut changed = false;
        if let Some(household_usage) = self.household_usage {
            inputs.household_usage = household_usage;
            changed = true;
        }
        if let Some(network_fee) = self.network_fee {
            inputs.network_fee = network_fee;
            changed = true;
        }
        if let Some(energy_cost) = self.energy_cost {
            inputs.energy_cost = energy_cost;
            changed = true;
        }
        if let Some(supplier_monthly_fee) = self.supplier_monthly_fee {
            inputs.supplier_monthly_fee = supplier_monthly_fee;
            changed = true;
        }
        if let Some(markup) = self.markup {
            inputs.markup = markup;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_into() {
        let args = BillingArgs {
            household_usage: Some(KilowattHours(1000.0)),
            network_fee: None,
            energy_cost: None,
            supplier_monthly_fee: None,
            markup: Some(OerePerKilowattHour(10.0)),
        };
        let mut inputs = BillingInputs { network_fee: Kroner(500.0), ..BillingInputs::default() };
        assert!(args.merge_into(&mut inputs));
        assert_eq!(inputs.household_usage, KilowattHours(1000.0));
        assert_eq!(inputs.markup, OerePerKilowattHour(10.0));
        // Fields without an override are left alone.
        assert_eq!(inputs.network_fee, Kroner(500.0));
    }

    #[test]
    fn test_merge_into_no_overrides() {
        let args = BillingArgs {
            household_usage: None,
            network_fee: None,
            energy_cost: None,
            supplier_monthly_fee: None,
            markup: None,
        };
        let mut inputs = BillingInputs::default();
        assert!(!args.merge_into(&mut inputs));
        assert_eq!(inputs, BillingInputs::default());
    }
}
