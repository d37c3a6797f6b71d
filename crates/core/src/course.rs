use serde::{Deserialize, Serialize};

/// Kind of scheduled component. Serialized as `"L"`, `"T"` or `"P"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    #[default]
    #[serde(rename = "L")]
    Lecture,
    #[serde(rename = "T")]
    Tutorial,
    #[serde(rename = "P")]
    Practical,
}

impl SectionType {
    /// Infer the section type from the printed section label and the row title.
    ///
    /// The rules are checked in order and the first match wins:
    /// 1. section contains `P` or title contains `PRAC` -> Practical
    /// 2. section contains `T` or title contains `TUT` -> Tutorial
    /// 3. otherwise Lecture
    ///
    /// Matching is case-insensitive.
    pub fn classify(section: &str, title: &str) -> Self {
        let section = section.to_uppercase();
        let title = title.to_uppercase();

        if section.contains('P') || title.contains("PRAC") {
            SectionType::Practical
        } else if section.contains('T') || title.contains("TUT") {
            SectionType::Tutorial
        } else {
            SectionType::Lecture
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SectionType::Lecture => "L",
            SectionType::Tutorial => "T",
            SectionType::Practical => "P",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One scheduled component (lecture, tutorial or practical) of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub section: String,
    pub instructor: String,
    pub room: String,
    pub days: String,
    pub hours: Vec<u32>,
    #[serde(rename = "type")]
    pub section_type: SectionType,
}

/// A course and its sections, in the order they appear in the timetable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub credits: String,
    pub sections: Vec<Section>,
}

/// Number of sections per type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionCounts {
    pub lectures: usize,
    pub tutorials: usize,
    pub practicals: usize,
}

impl Course {
    pub fn new(id: impl Into<String>, title: impl Into<String>, credits: impl Into<String>) -> Self {
        Course {
            id: id.into(),
            title: title.into(),
            credits: credits.into(),
            sections: Vec::new(),
        }
    }

    pub fn count_by_type(&self) -> SectionCounts {
        self.sections
            .iter()
            .fold(SectionCounts::default(), |mut counts, section| {
                match section.section_type {
                    SectionType::Lecture => counts.lectures += 1,
                    SectionType::Tutorial => counts.tutorials += 1,
                    SectionType::Practical => counts.practicals += 1,
                }
                counts
            })
    }
}
