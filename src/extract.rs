//! Label-scanning extraction of a [`ChargeSummary`] from a report grid.
//!
//! The vendor export has no fixed schema: fields are located by scanning for
//! known labels, and anything that cannot be found or coerced silently keeps
//! its default. Only an unreadable container fails, and that happens one
//! layer down in [`crate::grid`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    grid::{Cell, Grid},
    prelude::*,
    units::KilowattHours,
};

/// Normalized record extracted from one charger report.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeSummary {
    pub total_energy: KilowattHours,
    pub location: String,
    pub charger_name: String,
    pub from_date: String,
    pub end_date: String,
    pub sessions: u32,
    pub duration: String,
    pub generated_date: String,
}

/// Grid-to-summary capability, one implementation per vendor layout.
pub trait ReportExtractor {
    fn extract(&self, grid: &Grid) -> ChargeSummary;
}

/// Extractor for the charger vendor's spreadsheet export layout.
pub struct LabelScanExtractor;

/// The address line only ever appears in the report header.
const LOCATION_ROW_LIMIT: usize = 5;
const KNOWN_STREET: &str = "Sandervegen";
const FROM_DATE_LABEL: &str = "From Date";
const END_DATE_LABEL: &str = "End Date";
const CHARGER_LABEL: &str = "Charger";
const TOTAL_ENERGY_LABEL: &str = "Total Energy (kWh)";
const GENERATED_MARKER: &str = "Generated:";

/// Words followed by a number, e.g. `Main Street 12`. A placeholder
/// pattern-matcher for one export layout, not a general address parser.
static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+\s+\d+").unwrap());

impl ReportExtractor for LabelScanExtractor {
    /// Single forward pass, label-driven, first match wins per field.
    #[instrument(skip_all)]
    fn extract(&self, grid: &Grid) -> ChargeSummary {
        let mut summary = ChargeSummary::default();
        for row in 0..grid.n_rows() {
            if row < LOCATION_ROW_LIMIT
                && summary.location.is_empty()
                && let Some(text) = grid.cell(row, 0).text()
                && !text.is_empty()
                && (text.contains(KNOWN_STREET) || ADDRESS_PATTERN.is_match(text))
            {
                // The heuristic may misfire on a coincidental match; either
                // way the first match is final.
                summary.location = text.to_string();
            }

            if summary.from_date.is_empty()
                && grid.cell(row, 0).is_label(FROM_DATE_LABEL)
                && grid.cell(row, 2).is_label(END_DATE_LABEL)
            {
                summary.from_date = grid.cell(row, 1).to_text();
                summary.end_date = grid.cell(row, 3).to_text();
            }

            // The label row is followed by a data row.
            if summary.charger_name.is_empty() && grid.cell(row, 0).is_label(CHARGER_LABEL) {
                summary.charger_name = grid.cell(row + 1, 0).to_text();
                summary.sessions = coerce_sessions(grid.cell(row + 1, 1));
                summary.duration = grid.cell(row + 1, 2).to_text();
            }

            if grid.cell(row, 3).is_label(TOTAL_ENERGY_LABEL) {
                summary.total_energy =
                    KilowattHours(grid.cell(row + 1, 3).to_number().unwrap_or(0.0));
                // Terminal condition: the energy total is the last field of
                // the report, stop scanning here.
                break;
            }

            if summary.generated_date.is_empty()
                && let Some(text) = grid.cell(row, 0).text()
                && let Some((_, rest)) = text.split_once(GENERATED_MARKER)
            {
                summary.generated_date = rest.trim().to_string();
            }
        }
        debug!(
            total_energy = %summary.total_energy,
            sessions = summary.sessions,
            charger_name = %summary.charger_name,
            "summary extracted",
        );
        summary
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coerce_sessions(cell: &Cell) -> u32 {
    cell.to_number()
        .filter(|count| count.is_finite() && *count >= 0.0)
        .map_or(0, |count| count as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    fn number(value: f64) -> Cell {
        Cell::Number(value)
    }

    fn extract(rows: Vec<Vec<Cell>>) -> ChargeSummary {
        LabelScanExtractor.extract(&Grid::from(rows))
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(extract(Vec::new()), ChargeSummary::default());
    }

    #[test]
    fn test_charger_block_only() {
        let summary = extract(vec![
            vec![text("Charger")],
            vec![text("StationX"), number(5.0), text("3h20m")],
        ]);
        assert_eq!(summary.charger_name, "StationX");
        assert_eq!(summary.sessions, 5);
        assert_eq!(summary.duration, "3h20m");
        // Every other field keeps its default.
        assert_eq!(summary.total_energy, KilowattHours::ZERO);
        assert_eq!(summary.location, "");
        assert_eq!(summary.from_date, "");
        assert_eq!(summary.end_date, "");
        assert_eq!(summary.generated_date, "");
    }

    #[test]
    fn test_charger_label_without_data_row() {
        let summary = extract(vec![vec![text("Charger")]]);
        assert_eq!(summary.charger_name, "");
        assert_eq!(summary.sessions, 0);
        assert_eq!(summary.duration, "");
    }

    #[test]
    fn test_sessions_from_text_cell() {
        let summary = extract(vec![
            vec![text("Charger")],
            vec![text("StationX"), text("7"), text("1h")],
        ]);
        assert_eq!(summary.sessions, 7);
    }

    #[test]
    fn test_sessions_coercion_failure_defaults_to_zero() {
        let summary = extract(vec![
            vec![text("Charger")],
            vec![text("StationX"), text("many"), text("1h")],
        ]);
        assert_eq!(summary.sessions, 0);
    }

    #[test]
    fn test_total_energy() {
        let summary = extract(vec![
            vec![Cell::Empty, Cell::Empty, Cell::Empty, text("Total Energy (kWh)")],
            vec![Cell::Empty, Cell::Empty, Cell::Empty, text("42.5")],
        ]);
        assert_eq!(summary.total_energy, KilowattHours(42.5));
    }

    #[test]
    fn test_total_energy_malformed_defaults_to_zero() {
        let summary = extract(vec![
            vec![Cell::Empty, Cell::Empty, Cell::Empty, text("Total Energy (kWh)")],
            vec![Cell::Empty, Cell::Empty, Cell::Empty, text("bad")],
        ]);
        assert_eq!(summary.total_energy, KilowattHours::ZERO);
    }

    #[test]
    fn test_total_energy_is_terminal() {
        // The generated-date row sits below the energy total, so the scan
        // never reaches it.
        let summary = extract(vec![
            vec![Cell::Empty, Cell::Empty, Cell::Empty, text("Total Energy (kWh)")],
            vec![Cell::Empty, Cell::Empty, Cell::Empty, number(12.0)],
            vec![text("Generated: 01.02.2025")],
        ]);
        assert_eq!(summary.total_energy, KilowattHours(12.0));
        assert_eq!(summary.generated_date, "");
    }

    #[test]
    fn test_dates() {
        let summary = extract(vec![vec![
            text("From Date"),
            text("01.01.2025"),
            text("End Date"),
            text("31.01.2025"),
        ]]);
        assert_eq!(summary.from_date, "01.01.2025");
        assert_eq!(summary.end_date, "31.01.2025");
    }

    #[test]
    fn test_dates_require_both_labels() {
        let summary = extract(vec![vec![text("From Date"), text("01.01.2025")]]);
        assert_eq!(summary.from_date, "");
        assert_eq!(summary.end_date, "");
    }

    #[test]
    fn test_generated_date() {
        let summary = extract(vec![vec![text("Report Generated: 01.02.2025 10:00 ")]]);
        assert_eq!(summary.generated_date, "01.02.2025 10:00");
    }

    #[test]
    fn test_location_word_number_pattern() {
        let summary = extract(vec![vec![text("Main Street 12")]]);
        assert_eq!(summary.location, "Main Street 12");
    }

    #[test]
    fn test_location_known_street() {
        let summary = extract(vec![vec![text("Sandervegen")]]);
        assert_eq!(summary.location, "Sandervegen");
    }

    #[test]
    fn test_location_first_match_wins() {
        let summary = extract(vec![vec![text("Main Street 12")], vec![text("Other Road 3")]]);
        assert_eq!(summary.location, "Main Street 12");
    }

    #[test]
    fn test_location_not_matched_outside_header() {
        let rows = vec![
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![text("Main Street 12")],
        ];
        assert_eq!(extract(rows).location, "");
    }

    #[test]
    fn test_location_ignores_plain_text() {
        assert_eq!(extract(vec![vec![text("Charging report")]]).location, "");
    }

    #[test]
    fn test_full_report() {
        let summary = extract(vec![
            vec![text("Sandervegen 23")],
            Vec::new(),
            vec![text("From Date"), text("01.01.2025"), text("End Date"), text("31.01.2025")],
            vec![text("Charger")],
            vec![text("StationX"), number(5.0), text("3h20m")],
            vec![text("Generated: 01.02.2025 10:00")],
            vec![Cell::Empty, Cell::Empty, Cell::Empty, text("Total Energy (kWh)")],
            vec![Cell::Empty, Cell::Empty, Cell::Empty, number(42.5)],
        ]);
        assert_eq!(
            summary,
            ChargeSummary {
                total_energy: KilowattHours(42.5),
                location: "Sandervegen 23".to_string(),
                charger_name: "StationX".to_string(),
                from_date: "01.01.2025".to_string(),
                end_date: "31.01.2025".to_string(),
                sessions: 5,
                duration: "3h20m".to_string(),
                generated_date: "01.02.2025 10:00".to_string(),
            },
        );
    }
}
