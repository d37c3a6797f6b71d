//! Page-table input
//!
//! The PDF table extractor is an external collaborator: for every page it
//! yields zero or one table of nullable text cells. This module models that
//! output, and composes the row normalizer with the timetable builder over
//! all pages in document order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::{BuildReport, TimetableBuilder};
use crate::course::Course;
use crate::row::{normalize, NormalizedRow, RawTable};

/// The table extracted from one page, if any.
pub type PageTable = Option<RawTable>;

/// Failure to obtain page tables from the source document.
///
/// This is the only hard failure of a parse: row-level anomalies are treated
/// as noise and never surface here.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid page table data: {0}")]
    Format(String),
    #[error("Document has no pages")]
    NoPages,
}

/// Table-finding configuration handed to the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSettings {
    pub vertical_strategy: String,
    pub horizontal_strategy: String,
    pub snap_tolerance: f32,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            vertical_strategy: "lines".to_string(),
            horizontal_strategy: "lines".to_string(),
            snap_tolerance: 3.0,
        }
    }
}

/// Anything that can produce the page tables of a document, in page order.
pub trait TableSource {
    fn page_tables(&self) -> Result<Vec<PageTable>, SourceError>;
}

/// Serialized extractor output.
///
/// Accepts either `{"settings": {...}, "pages": [...]}` or a bare array of
/// pages, where each page is `null` or a list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableDumpRepr")]
pub struct TableDump {
    pub settings: Option<ExtractionSettings>,
    pub pages: Vec<PageTable>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableDumpRepr {
    Full {
        #[serde(default)]
        settings: Option<ExtractionSettings>,
        pages: Vec<PageTable>,
    },
    Pages(Vec<PageTable>),
}

impl From<TableDumpRepr> for TableDump {
    fn from(repr: TableDumpRepr) -> Self {
        match repr {
            TableDumpRepr::Full { settings, pages } => TableDump { settings, pages },
            TableDumpRepr::Pages(pages) => TableDump {
                settings: None,
                pages,
            },
        }
    }
}

impl TableDump {
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        serde_json::from_str(json).map_err(|e| SourceError::Format(e.to_string()))
    }

    /// Whether the dump was produced with settings other than `expected`.
    ///
    /// A dump without recorded settings is assumed to match.
    pub fn settings_differ(&self, expected: &ExtractionSettings) -> bool {
        self.settings.as_ref().is_some_and(|s| s != expected)
    }
}

impl TableSource for TableDump {
    fn page_tables(&self) -> Result<Vec<PageTable>, SourceError> {
        if self.pages.is_empty() {
            return Err(SourceError::NoPages);
        }
        Ok(self.pages.clone())
    }
}

/// Counters for a whole-document parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub pages: usize,
    pub pages_without_table: usize,
    pub raw_rows: usize,
    pub discarded_rows: usize,
    pub build: BuildReport,
}

/// Normalize every row of every page, in order, skipping discarded rows.
pub fn normalized_rows(pages: &[PageTable]) -> impl Iterator<Item = NormalizedRow> + '_ {
    pages
        .iter()
        .flatten()
        .flatten()
        .filter_map(|row| normalize(row))
}

/// Parse already extracted page tables into courses.
pub fn parse_pages(pages: &[PageTable]) -> (Vec<Course>, ParseReport) {
    let mut report = ParseReport {
        pages: pages.len(),
        ..ParseReport::default()
    };
    let mut builder = TimetableBuilder::new();

    for (page_idx, page) in pages.iter().enumerate() {
        let Some(table) = page else {
            log::debug!("page {}: no table", page_idx + 1);
            report.pages_without_table += 1;
            continue;
        };

        log::debug!("page {}: {} rows", page_idx + 1, table.len());
        for row in table {
            report.raw_rows += 1;
            match normalize(row) {
                Some(normalized) => {
                    builder.push(&normalized);
                }
                None => report.discarded_rows += 1,
            }
        }
    }

    let (courses, build) = builder.finish_with_report();
    report.build = build;
    (courses, report)
}

/// Pull page tables from `source` and parse them into courses.
pub fn parse_document(source: &dyn TableSource) -> Result<(Vec<Course>, ParseReport), SourceError> {
    let pages = source.page_tables()?;
    let (courses, report) = parse_pages(&pages);
    log::info!(
        "parsed {} pages, {} rows ({} discarded) into {} courses",
        report.pages,
        report.raw_rows,
        report.discarded_rows,
        courses.len()
    );
    Ok((courses, report))
}
