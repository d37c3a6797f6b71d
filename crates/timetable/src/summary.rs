use std::path::{Path, PathBuf};

use crate::prelude::{println, *};
use colored::Colorize;
use serde::Serialize;
use timetable_core::course::SectionCounts;
use timetable_core::Course;

#[derive(Debug, Clone, clap::Args)]
pub struct SummaryOptions {
    /// Course list written by `timetable extract`
    #[arg(value_name = "PATH", env = "TIMETABLE_OUTPUT", default_value = crate::extract::DEFAULT_OUTPUT)]
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line of the summary
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub credits: String,
    #[serde(flatten)]
    pub counts: SectionCounts,
}

pub fn run(options: SummaryOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Reading {}", options.path.display());
    }

    let courses = load_courses(&options.path)?;
    let summaries = summarize(&courses);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        output_formatted(&summaries);
    }

    Ok(())
}

pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()).into());
    }

    let json = std::fs::read_to_string(path)
        .with_context(|| f!("Failed to read {}", path.display()))?;
    let courses: Vec<Course> = serde_json::from_str(&json)
        .with_context(|| f!("{} is not a course list", path.display()))?;

    if courses.is_empty() {
        return Err(Error::NoCourses(path.to_path_buf()).into());
    }

    Ok(courses)
}

pub fn summarize(courses: &[Course]) -> Vec<CourseSummary> {
    courses
        .iter()
        .map(|course| CourseSummary {
            id: course.id.clone(),
            title: course.title.clone(),
            credits: course.credits.clone(),
            counts: course.count_by_type(),
        })
        .collect()
}

fn output_formatted(summaries: &[CourseSummary]) {
    let mut table = new_table();
    table.add_row(prettytable::row!["Course", "Title", "Credits", "L", "T", "P"]);
    for summary in summaries {
        table.add_row(prettytable::row![
            summary.id,
            summary.title,
            summary.credits,
            summary.counts.lectures,
            summary.counts.tutorials,
            summary.counts.practicals
        ]);
    }
    table.printstd();

    let sections: usize = summaries
        .iter()
        .map(|s| s.counts.lectures + s.counts.tutorials + s.counts.practicals)
        .sum();
    println!(
        "\n{} courses, {} sections",
        summaries.len().to_string().bright_cyan().bold(),
        sections.to_string().bright_cyan().bold()
    );
}
