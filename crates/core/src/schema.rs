//! Column-convention check
//!
//! Every field of a [`NormalizedRow`] is read by position, so a layout change
//! in the source document would silently shift data between fields. These
//! helpers recognise the table's header row and check that its labels are in
//! the expected order. Header rows are not removed from the fold.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::row::{NormalizedRow, ROW_WIDTH};

/// Expected header labels, in column order.
pub const COLUMN_HEADERS: [&str; ROW_WIDTH] = [
    "COM COD",
    "COURSE NO",
    "COURSE TITLE",
    "CREDIT",
    "SECTION",
    "INSTRUCTOR",
    "ROOM",
    "DAYS",
    "HOURS",
];

fn header_patterns() -> &'static [Regex; ROW_WIDTH] {
    static PATTERNS: OnceLock<[Regex; ROW_WIDTH]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(?i)^COM(M(ITTEE)?)?\.?\s*CO?DE?\.?$",
            r"(?i)^COURSE\s*(NO|NUMBER)\.?$",
            r"(?i)^(COURSE\s*)?TITLE$",
            r"(?i)^CREDITS?(\s*\(?\s*L\s*P\s*U\s*\)?)?$",
            r"(?i)^SEC(TION|T?\.?)(\s*NO\.?)?$",
            r"(?i)^INSTRUCTORS?(\s*IN\s*CHARGE\s*/\s*INSTRUCTORS?)?$",
            r"(?i)^ROOM(\s*NO\.?)?$",
            r"(?i)^DAYS?$",
            r"(?i)^HOURS?$",
        ]
        .map(|pattern| Regex::new(pattern).unwrap())
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Column {index} header is {found:?}, expected {expected:?}")]
    ColumnMismatch {
        index: usize,
        expected: &'static str,
        found: String,
    },
}

fn matches_header(index: usize, text: &str) -> bool {
    header_patterns()[index].is_match(text.trim())
}

/// Whether the row looks like the table's header row.
///
/// Only the course number and title columns are inspected, so a header with
/// other columns moved is still recognised and can then be rejected by
/// [`validate_header`].
pub fn is_header_row(row: &NormalizedRow) -> bool {
    use crate::row::column;

    matches_header(column::COURSE_NO, row.course_no()) && matches_header(column::TITLE, row.title())
}

/// Check that every column of a header row carries its expected label.
pub fn validate_header(row: &NormalizedRow) -> Result<(), SchemaError> {
    for (index, found) in row.fields().iter().enumerate() {
        if !matches_header(index, found) {
            return Err(SchemaError::ColumnMismatch {
                index,
                expected: COLUMN_HEADERS[index],
                found: found.clone(),
            });
        }
    }
    Ok(())
}

/// Validate every header row in `rows`, returning how many were checked.
pub fn check_rows<'a, I>(rows: I) -> Result<usize, SchemaError>
where
    I: IntoIterator<Item = &'a NormalizedRow>,
{
    let mut checked = 0;
    for row in rows.into_iter().filter(|row| is_header_row(row)) {
        validate_header(row)?;
        checked += 1;
    }
    Ok(checked)
}
