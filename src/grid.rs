//! Abstract grid-of-cells view over the first worksheet of a charger report.
//!
//! Binary container parsing is delegated to `calamine`; everything downstream
//! only ever sees rows of [`Cell`] values.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::prelude::*;

/// A single spreadsheet cell, reduced to the three shapes the report layout
/// actually uses.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Empty | Self::Number(_) => None,
        }
    }

    /// Exact-equality label check.
    pub fn is_label(&self, label: &str) -> bool {
        self.text() == Some(label)
    }

    /// Numeric coercion: numbers pass through, text is read like the vendor
    /// tooling reads it (longest leading float prefix, so `42.5 kWh` is
    /// `42.5`), anything else is `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => parse_float_prefix(text.trim()),
            Self::Empty => None,
        }
    }

    /// Lossy text coercion, empty string for an empty cell.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            // The vendor layout never carries data in booleans or error cells.
            Data::Empty | Data::Bool(_) | Data::Error(_) => Self::Empty,
            Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
                Self::Text(text.clone())
            }
            Data::Float(number) => Self::Number(*number),
            #[allow(clippy::cast_precision_loss)]
            Data::Int(number) => Self::Number(*number as f64),
            Data::DateTime(datetime) => datetime
                .as_datetime()
                .map_or_else(|| Self::Number(datetime.as_f64()), |decoded| Self::Text(decoded.to_string())),
        }
    }
}

/// Longest leading prefix that reads as a float, `None` when there is none.
fn parse_float_prefix(text: &str) -> Option<f64> {
    text.char_indices()
        .map(|(index, character)| index + character.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse().ok())
}

/// Dense row-major view of a worksheet's used range.
pub struct Grid(Vec<Vec<Cell>>);

static EMPTY: Cell = Cell::Empty;

impl Grid {
    /// Open the workbook and read the first worksheet.
    ///
    /// This is the single hard-failure point: an unreadable container, an
    /// empty workbook, or an unreadable range aborts with no partial output.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_workbook_path(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("failed to open the workbook at `{}`", path.display()))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .context("the workbook contains no worksheets")?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("failed to read the worksheet `{sheet_name}`"))?;
        let rows: Vec<Vec<Cell>> =
            range.rows().map(|row| row.iter().map(Cell::from).collect()).collect();
        debug!(n_rows = rows.len(), sheet_name = %sheet_name, "worksheet loaded");
        Ok(Self(rows))
    }

    pub fn n_rows(&self) -> usize {
        self.0.len()
    }

    /// Cell at the given position, [`Cell::Empty`] when out of range, so the
    /// extractor can probe label and value positions freely.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.0.get(row).and_then(|row| row.get(column)).unwrap_or(&EMPTY)
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self(rows)
    }
}
