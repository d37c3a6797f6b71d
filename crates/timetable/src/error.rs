use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("No courses found in {}", .0.display())]
    NoCourses(PathBuf),

    #[error("Unexpected table layout: {0}")]
    Schema(#[from] timetable_core::schema::SchemaError),
}
