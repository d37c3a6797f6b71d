//! Core library for timetable
//!
//! This crate implements the **Functional Core** of the timetable application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The timetable project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`timetable_core`** (this crate): Pure transformation functions with zero I/O
//! - **`timetable`**: Reading extracted tables, writing JSON, and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`row`]: Cleans raw extracted rows into fixed-width [`row::NormalizedRow`]s
//! - [`builder`]: Folds normalized rows into courses and their sections
//! - [`course`]: Output data model and section type inference
//! - [`source`]: Page tables produced by the PDF extractor and whole-document parsing
//! - [`schema`]: Optional header check for the nine-column layout
//!
//! # Example Usage
//!
//! ```rust
//! use timetable_core::builder::build;
//! use timetable_core::row::normalize;
//!
//! let rows = vec![
//!     vec!["CS", "CS101", "Intro to CS", "4", "L1", "Dr. A", "R101", "MWF", "1 2"],
//!     vec!["", "", "", "", "P1", "Dr. B", "R102", "T", "3"],
//! ];
//!
//! let normalized = rows.iter().filter_map(|row| {
//!     let raw: Vec<Option<String>> = row.iter().map(|c| Some(c.to_string())).collect();
//!     normalize(&raw)
//! });
//!
//! let courses = build(normalized);
//! assert_eq!(courses.len(), 1);
//! assert_eq!(courses[0].sections.len(), 2);
//! ```

pub mod builder;
pub mod course;
pub mod row;
pub mod schema;
pub mod source;

pub use builder::{build, build_with_report, parse_hours, BuildReport, TimetableBuilder};
pub use course::{Course, Section, SectionType};
pub use row::{normalize, NormalizedRow, RawRow, RawTable};
pub use source::{parse_document, parse_pages, PageTable, ParseReport, SourceError, TableSource};
