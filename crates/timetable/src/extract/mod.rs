use std::path::PathBuf;

use crate::prelude::{println, *};
use colored::Colorize;
use timetable_core::schema;
use timetable_core::source::{normalized_rows, parse_pages, ParseReport, TableSource};
use timetable_core::Course;

pub mod dump;
pub mod output;

pub use dump::DumpFile;

/// Page tables extracted from `TIMETABLE-I-SEMESTER-2024-25.pdf`
pub const DEFAULT_INPUT: &str = "TIMETABLE-I-SEMESTER-2024-25.json";
pub const DEFAULT_OUTPUT: &str = "lib/data/timetable_default.json";

#[derive(Debug, Clone, clap::Args, serde::Serialize, serde::Deserialize)]
pub struct ExtractOptions {
    /// Page tables extracted from the timetable PDF (JSON)
    #[arg(short, long, env = "TIMETABLE_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the course list
    #[arg(short, long, env = "TIMETABLE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Fail if a header row does not match the expected nine-column layout
    #[arg(long, env = "TIMETABLE_STRICT_SCHEMA")]
    pub strict_schema: bool,
}

pub fn run(options: ExtractOptions, global: crate::Global) -> Result<()> {
    let source = DumpFile::new(&options.input);

    println!("Parsing PDF...");
    if global.verbose {
        println!("Reading page tables from {}", source.path().display());
    }

    let (courses, report) = extract_data(&source, options.strict_schema)
        .with_context(|| f!("Failed to parse {}", source.path().display()))?;

    println!("Found {} courses.", courses.len().to_string().bright_cyan().bold());
    if global.verbose {
        print_report(&report);
    }

    output::write_courses(&options.output, &courses)?;
    println!("JSON saved to {}", options.output.display().to_string().green());

    Ok(())
}

/// Reads every page table from `source` and assembles the course list.
///
/// Nothing is written here; the caller persists the result only after the
/// whole document parsed.
pub fn extract_data(
    source: &dyn TableSource,
    strict_schema: bool,
) -> Result<(Vec<Course>, ParseReport)> {
    let pages = source.page_tables()?;

    if strict_schema {
        let rows: Vec<_> = normalized_rows(&pages).collect();
        let headers = schema::check_rows(&rows).map_err(Error::from)?;
        log::info!("validated {headers} header rows");
    }

    let (courses, report) = parse_pages(&pages);
    log::info!(
        "{} pages ({} without table), {} rows, {} discarded, {} orphan section rows",
        report.pages,
        report.pages_without_table,
        report.raw_rows,
        report.discarded_rows,
        report.build.orphan_rows
    );

    Ok((courses, report))
}

fn print_report(report: &ParseReport) {
    let mut table = new_table();
    table.add_row(prettytable::row!["Pages", report.pages]);
    table.add_row(prettytable::row!["Pages without table", report.pages_without_table]);
    table.add_row(prettytable::row!["Rows", report.raw_rows]);
    table.add_row(prettytable::row!["Discarded rows", report.discarded_rows]);
    table.add_row(prettytable::row!["Courses", report.build.courses]);
    table.add_row(prettytable::row!["Sections", report.build.sections]);
    table.add_row(prettytable::row!["Orphan section rows", report.build.orphan_rows]);
    table.printstd();
}
