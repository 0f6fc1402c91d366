//! Explicit state machine over the `(summary, inputs, breakdown)` triple.
//!
//! Single-owner state, last write wins: a newly parsed report fully replaces
//! the previous one, and any derived breakdown is invalidated by whichever
//! event makes it stale.

use serde::Serialize;

use crate::{
    allocate::{BillingInputs, CostBreakdown, allocate},
    extract::ChargeSummary,
    prelude::*,
    store::{KeyValueStore, PRINT_DATA_KEY},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Empty,
    Parsed,
    Configured,
    Calculated,
}

pub struct Session<S> {
    store: S,
    summary: Option<ChargeSummary>,
    inputs: BillingInputs,
    breakdown: Option<CostBreakdown>,
}

/// Record handed to the print view through the store channel.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrintData<'a> {
    charge_data: &'a ChargeSummary,
    cost_inputs: &'a BillingInputs,
    results: &'a CostBreakdown,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session over the injected store, loading any persisted billing
    /// inputs leniently.
    pub fn open(store: S) -> Self {
        let inputs = BillingInputs::load_from(&store);
        Self { store, summary: None, inputs, breakdown: None }
    }

    pub fn phase(&self) -> Phase {
        if self.breakdown.is_some() {
            Phase::Calculated
        } else if self.summary.is_none() {
            Phase::Empty
        } else if self.inputs.is_configured() {
            Phase::Configured
        } else {
            Phase::Parsed
        }
    }

    pub const fn summary(&self) -> Option<&ChargeSummary> {
        self.summary.as_ref()
    }

    pub const fn inputs(&self) -> &BillingInputs {
        &self.inputs
    }

    pub const fn breakdown(&self) -> Option<&CostBreakdown> {
        self.breakdown.as_ref()
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Accept a newly parsed report. The previous summary is replaced
    /// atomically and any breakdown is invalidated.
    pub fn load_report(&mut self, summary: ChargeSummary) {
        info!(total_energy = %summary.total_energy, "report loaded");
        self.summary = Some(summary);
        self.breakdown = None;
    }

    /// Persist edited billing inputs; any breakdown is stale afterwards.
    pub fn update_inputs(&mut self, inputs: BillingInputs) -> Result {
        self.inputs = inputs;
        self.breakdown = None;
        self.inputs.persist_to(&mut self.store)
    }

    /// Whether the calculate action is available: a parsed report plus a
    /// positive household usage.
    pub fn can_calculate(&self) -> bool {
        self.summary.is_some() && self.inputs.is_configured()
    }

    pub fn calculate(&mut self) -> Result<&CostBreakdown> {
        let summary = self.summary.as_ref().context("no report has been parsed yet")?;
        ensure!(
            self.inputs.is_configured(),
            "household usage must be positive before calculating",
        );
        let breakdown = allocate(summary, &self.inputs);
        info!(blended_rate = %breakdown.blended_rate, "breakdown calculated");
        Ok(self.breakdown.insert(breakdown))
    }

    /// Serialize the triple for the print view under its fixed key.
    pub fn hand_off_print(&mut self) -> Result {
        let record = PrintData {
            charge_data: self.summary.as_ref().context("no report has been parsed yet")?,
            cost_inputs: &self.inputs,
            results: self.breakdown.as_ref().context("no breakdown has been calculated yet")?,
        };
        let serialized = serde_json::to_string(&record)?;
        self.store.put(PRINT_DATA_KEY, &serialized)
    }
}
