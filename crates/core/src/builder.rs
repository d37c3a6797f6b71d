//! Course and section assembly
//!
//! The timetable has no explicit grouping markers: a row that carries both a
//! course number and a title opens a new course, and any row with section
//! data attaches a section to the most recently opened course. The fold keeps
//! a single piece of state, the index of that course, so rows must arrive in
//! document order.

use serde::Serialize;

use crate::course::{Course, Section, SectionType};
use crate::row::NormalizedRow;

/// What a single row contributed to the timetable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row opened a course and also carried a section for it.
    CourseWithSection,
    /// The row opened a course without section data.
    Course,
    /// The row added a section to the current course.
    Section,
    /// The row had section data but no course was open yet.
    Orphan,
    /// The row carried neither course nor section data.
    Ignored,
}

/// Counters collected while folding rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub rows: usize,
    pub courses: usize,
    pub sections: usize,
    pub orphan_rows: usize,
    pub ignored_rows: usize,
}

impl BuildReport {
    fn record(&mut self, outcome: RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::CourseWithSection => {
                self.courses += 1;
                self.sections += 1;
            }
            RowOutcome::Course => self.courses += 1,
            RowOutcome::Section => self.sections += 1,
            RowOutcome::Orphan => self.orphan_rows += 1,
            RowOutcome::Ignored => self.ignored_rows += 1,
        }
    }
}

/// Single-pass fold from normalized rows to courses
#[derive(Debug, Default)]
pub struct TimetableBuilder {
    courses: Vec<Course>,
    current: Option<usize>,
    report: BuildReport,
}

impl TimetableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one row.
    ///
    /// Course detection runs first, so a row that opens a course can also
    /// contribute that course's first section.
    pub fn push(&mut self, row: &NormalizedRow) -> RowOutcome {
        let opened = starts_course(row);
        if opened {
            self.courses
                .push(Course::new(row.course_no(), row.title(), row.credits()));
            self.current = Some(self.courses.len() - 1);
        }

        let outcome = match (has_section_data(row), self.current_course_mut()) {
            (true, Some(course)) => {
                course.sections.push(section_from_row(row));
                if opened {
                    RowOutcome::CourseWithSection
                } else {
                    RowOutcome::Section
                }
            }
            (true, None) => RowOutcome::Orphan,
            (false, _) if opened => RowOutcome::Course,
            (false, _) => RowOutcome::Ignored,
        };

        log::trace!("row {:?} -> {:?}", row.fields(), outcome);
        self.report.record(outcome);
        outcome
    }

    /// The course sections are currently attached to.
    pub fn current_course(&self) -> Option<&Course> {
        self.current.and_then(|idx| self.courses.get(idx))
    }

    fn current_course_mut(&mut self) -> Option<&mut Course> {
        self.current.and_then(|idx| self.courses.get_mut(idx))
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn finish(self) -> Vec<Course> {
        self.courses
    }

    pub fn finish_with_report(self) -> (Vec<Course>, BuildReport) {
        (self.courses, self.report)
    }
}

/// Fold an ordered sequence of rows into courses.
pub fn build<I>(rows: I) -> Vec<Course>
where
    I: IntoIterator<Item = NormalizedRow>,
{
    build_with_report(rows).0
}

/// Like [`build`], also returning what each kind of row contributed.
pub fn build_with_report<I>(rows: I) -> (Vec<Course>, BuildReport)
where
    I: IntoIterator<Item = NormalizedRow>,
{
    let mut builder = TimetableBuilder::new();
    for row in rows {
        builder.push(&row);
    }
    builder.finish_with_report()
}

/// Extract hour codes from the hours cell.
///
/// Tokens made only of ASCII digits are kept in order; everything else
/// (including values that do not fit in a `u32`) is dropped.
pub fn parse_hours(hours: &str) -> Vec<u32> {
    hours
        .split_whitespace()
        .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse().ok())
        .collect()
}

fn starts_course(row: &NormalizedRow) -> bool {
    !row.course_no().is_empty() && !row.title().is_empty()
}

fn has_section_data(row: &NormalizedRow) -> bool {
    [row.instructor(), row.room(), row.days(), row.section()]
        .iter()
        .any(|field| !field.is_empty())
}

fn section_from_row(row: &NormalizedRow) -> Section {
    Section {
        section: row.section().to_string(),
        instructor: row.instructor().to_string(),
        room: row.room().to_string(),
        days: row.days().to_string(),
        hours: parse_hours(row.hours()),
        section_type: SectionType::classify(row.section(), row.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: [&str; 9]) -> NormalizedRow {
        NormalizedRow::from_cells(cells)
    }

    // ============================================================================
    // parse_hours tests
    // ============================================================================

    #[test]
    fn test_parse_hours_drops_non_numeric_tokens() {
        assert_eq!(parse_hours("3 4 X 5"), vec![3, 4, 5]);
    }

    #[test]
    fn test_parse_hours_empty() {
        assert!(parse_hours("").is_empty());
        assert!(parse_hours("   ").is_empty());
    }

    #[test]
    fn test_parse_hours_multi_digit() {
        assert_eq!(parse_hours("10"), vec![10]);
    }

    #[test]
    fn test_parse_hours_rejects_signs_and_mixed_tokens() {
        assert_eq!(parse_hours("-1 +2 3a 4"), vec![4]);
    }

    #[test]
    fn test_parse_hours_drops_overflowing_tokens() {
        assert_eq!(parse_hours("99999999999 2"), vec![2]);
    }

    #[test]
    fn test_parse_hours_any_whitespace() {
        assert_eq!(parse_hours("1\t2\n3"), vec![1, 2, 3]);
    }

    // ============================================================================
    // build tests
    // ============================================================================

    #[test]
    fn test_build_course_with_lecture_and_practical() {
        let rows = vec![
            row(["CS", "CS101", "Intro to CS", "4", "L1", "Dr. A", "R101", "MWF", "1 2"]),
            row(["", "", "", "", "P1", "Dr. B", "R102", "T", "3"]),
        ];

        let courses = build(rows);

        assert_eq!(courses.len(), 1);
        let course = &courses[0];
        assert_eq!(course.id, "CS101");
        assert_eq!(course.title, "Intro to CS");
        assert_eq!(course.credits, "4");
        assert_eq!(course.sections.len(), 2);

        assert_eq!(
            course.sections[0],
            Section {
                section: "L1".to_string(),
                instructor: "Dr. A".to_string(),
                room: "R101".to_string(),
                days: "MWF".to_string(),
                hours: vec![1, 2],
                section_type: SectionType::Lecture,
            }
        );
        assert_eq!(
            course.sections[1],
            Section {
                section: "P1".to_string(),
                instructor: "Dr. B".to_string(),
                room: "R102".to_string(),
                days: "T".to_string(),
                hours: vec![3],
                section_type: SectionType::Practical,
            }
        );
    }

    #[test]
    fn test_build_drops_orphan_sections() {
        let rows = vec![
            row(["", "", "", "", "L1", "Dr. A", "R101", "MWF", "1"]),
            row(["CS", "CS101", "Intro", "4", "", "", "", "", ""]),
        ];

        let (courses, report) = build_with_report(rows);

        assert_eq!(courses.len(), 1);
        assert!(courses[0].sections.is_empty());
        assert_eq!(report.orphan_rows, 1);
        assert_eq!(report.courses, 1);
        assert_eq!(report.sections, 0);
    }

    #[test]
    fn test_build_does_not_merge_repeated_course_numbers() {
        let rows = vec![
            row(["CS", "CS101", "Intro", "4", "L1", "Dr. A", "", "", ""]),
            row(["CS", "CS101", "Intro", "4", "L2", "Dr. B", "", "", ""]),
        ];

        let courses = build(rows);

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].sections[0].section, "L1");
        assert_eq!(courses[1].sections[0].section, "L2");
    }

    #[test]
    fn test_build_course_count_matches_qualifying_rows() {
        let rows = vec![
            row(["CS", "CS101", "Intro", "4", "", "", "", "", ""]),
            row(["", "CS102", "", "", "L1", "", "", "", ""]),
            row(["", "", "Data Structures", "", "", "", "R1", "", ""]),
            row(["CS", "CS103", "Algorithms", "3", "", "", "", "", ""]),
            row(["CS", "CS101", "Intro", "4", "", "", "", "", ""]),
        ];

        let courses = build(rows);

        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CS101", "CS103", "CS101"]);
    }

    #[test]
    fn test_build_half_filled_course_row_attaches_to_current() {
        // A course number without a title does not open a course; its
        // section data lands on the previous one.
        let rows = vec![
            row(["CS", "CS101", "Intro", "4", "L1", "Dr. A", "", "", ""]),
            row(["", "CS102", "", "", "L1", "Dr. C", "", "", ""]),
        ];

        let courses = build(rows);

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].sections.len(), 2);
        assert_eq!(courses[0].sections[1].instructor, "Dr. C");
    }

    #[test]
    fn test_build_title_marker_only_on_course_row() {
        // Type inference reads the title of the row itself, which is empty on
        // continuation rows.
        let rows = vec![
            row(["CS", "CS201", "Practical Electronics", "1", "1", "Dr. A", "Lab", "M", "7 8"]),
            row(["", "", "", "", "2", "Dr. B", "Lab", "W", "7 8"]),
        ];

        let courses = build(rows);

        assert_eq!(courses[0].sections[0].section_type, SectionType::Practical);
        assert_eq!(courses[0].sections[1].section_type, SectionType::Lecture);
    }

    #[test]
    fn test_build_section_requires_one_of_four_fields() {
        // Hours alone do not make a section.
        let rows = vec![
            row(["CS", "CS101", "Intro", "4", "", "", "", "", ""]),
            row(["", "", "", "", "", "", "", "", "1 2"]),
            row(["", "", "", "", "", "", "", "TTh", ""]),
        ];

        let (courses, report) = build_with_report(rows);

        assert_eq!(courses[0].sections.len(), 1);
        assert_eq!(courses[0].sections[0].days, "TTh");
        assert!(courses[0].sections[0].hours.is_empty());
        assert_eq!(report.ignored_rows, 1);
    }

    #[test]
    fn test_build_empty_input() {
        let (courses, report) = build_with_report(Vec::new());
        assert!(courses.is_empty());
        assert_eq!(report, BuildReport::default());
    }

    // ============================================================================
    // TimetableBuilder tests
    // ============================================================================

    #[test]
    fn test_push_outcomes() {
        let mut builder = TimetableBuilder::new();

        assert_eq!(
            builder.push(&row(["", "", "", "", "L1", "", "", "", ""])),
            RowOutcome::Orphan
        );
        assert!(builder.current_course().is_none());

        assert_eq!(
            builder.push(&row(["CS", "CS101", "Intro", "4", "", "", "", "", ""])),
            RowOutcome::Course
        );
        assert_eq!(
            builder.push(&row(["CS", "CS102", "Next", "3", "L1", "", "", "", ""])),
            RowOutcome::CourseWithSection
        );
        assert_eq!(
            builder.push(&row(["", "", "", "", "T1", "", "", "", ""])),
            RowOutcome::Section
        );
        assert_eq!(
            builder.push(&row(["", "", "", "", "", "", "", "", ""])),
            RowOutcome::Ignored
        );

        assert_eq!(builder.current_course().map(|c| c.id.as_str()), Some("CS102"));

        let report = *builder.report();
        assert_eq!(report.rows, 5);
        assert_eq!(report.courses, 2);
        assert_eq!(report.sections, 2);
        assert_eq!(report.orphan_rows, 1);
        assert_eq!(report.ignored_rows, 1);

        let courses = builder.finish();
        assert!(courses[0].sections.is_empty());
        assert_eq!(courses[1].sections.len(), 2);
        assert_eq!(courses[1].sections[1].section_type, SectionType::Tutorial);
    }
}
