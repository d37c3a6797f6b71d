//! Row normalization
//!
//! Turns a raw extracted table row (ragged, nullable cells) into a fixed-width
//! [`NormalizedRow`]. Rows that are too short to carry timetable data (page
//! headers, decorative lines, empty table artifacts) are discarded.

use serde::{Deserialize, Serialize};

/// A raw row as produced by the table extractor: one entry per cell, `None`
/// for cells the extractor could not fill.
pub type RawRow = Vec<Option<String>>;

/// All rows of a single extracted table, in document order.
pub type RawTable = Vec<RawRow>;

/// Number of positional fields in a normalized row.
pub const ROW_WIDTH: usize = 9;

/// Rows with fewer cleaned cells than this are treated as noise.
pub const MIN_ROW_WIDTH: usize = 6;

/// Column positions of the timetable convention.
pub mod column {
    pub const COMMITTEE_CODE: usize = 0;
    pub const COURSE_NO: usize = 1;
    pub const TITLE: usize = 2;
    pub const CREDITS: usize = 3;
    pub const SECTION: usize = 4;
    pub const INSTRUCTOR: usize = 5;
    pub const ROOM: usize = 6;
    pub const DAYS: usize = 7;
    pub const HOURS: usize = 8;
}

/// A cleaned row with exactly [`ROW_WIDTH`] fields. Empty string means absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRow([String; ROW_WIDTH]);

impl NormalizedRow {
    /// Build a row from already cleaned cells.
    ///
    /// Short input is right-padded with empty strings; anything past
    /// [`ROW_WIDTH`] is ignored.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: [String; ROW_WIDTH] = Default::default();
        for (slot, cell) in fields.iter_mut().zip(cells) {
            *slot = cell.into();
        }
        NormalizedRow(fields)
    }

    pub fn fields(&self) -> &[String; ROW_WIDTH] {
        &self.0
    }

    pub fn get(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn committee_code(&self) -> &str {
        &self.0[column::COMMITTEE_CODE]
    }

    pub fn course_no(&self) -> &str {
        &self.0[column::COURSE_NO]
    }

    pub fn title(&self) -> &str {
        &self.0[column::TITLE]
    }

    pub fn credits(&self) -> &str {
        &self.0[column::CREDITS]
    }

    pub fn section(&self) -> &str {
        &self.0[column::SECTION]
    }

    pub fn instructor(&self) -> &str {
        &self.0[column::INSTRUCTOR]
    }

    pub fn room(&self) -> &str {
        &self.0[column::ROOM]
    }

    pub fn days(&self) -> &str {
        &self.0[column::DAYS]
    }

    pub fn hours(&self) -> &str {
        &self.0[column::HOURS]
    }

    /// Reconstruct the row as raw cells, e.g. to feed it back into [`normalize`].
    pub fn to_raw(&self) -> RawRow {
        self.0.iter().cloned().map(Some).collect()
    }
}

/// Clean a single cell: line breaks become a single space, surrounding
/// whitespace is stripped, and a missing cell becomes the empty string.
pub fn clean_cell(cell: Option<&str>) -> String {
    match cell {
        Some(text) => text
            .replace("\r\n", " ")
            .replace(['\n', '\r'], " ")
            .trim()
            .to_string(),
        None => String::new(),
    }
}

/// Normalize a raw row.
///
/// Returns `None` when the row has fewer than [`MIN_ROW_WIDTH`] cells. Rows
/// between [`MIN_ROW_WIDTH`] and [`ROW_WIDTH`] are padded; only the first
/// [`ROW_WIDTH`] cells of wider rows are read.
pub fn normalize(row: &[Option<String>]) -> Option<NormalizedRow> {
    if row.len() < MIN_ROW_WIDTH {
        return None;
    }

    Some(NormalizedRow::from_cells(
        row.iter().take(ROW_WIDTH).map(|cell| clean_cell(cell.as_deref())),
    ))
}
