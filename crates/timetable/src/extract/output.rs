use std::io::Write;
use std::path::Path;

use crate::prelude::*;
use timetable_core::Course;

/// Convert the course list to indented JSON
pub fn format_courses_json(courses: &[Course]) -> Result<String> {
    serde_json::to_string_pretty(courses).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Write the course list to `path`.
///
/// The JSON is written to a temporary file next to `path` and moved into place
/// once complete, so a failed run never leaves a truncated output file.
pub fn write_courses(path: &Path, courses: &[Course]) -> Result<()> {
    let json = format_courses_json(courses)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| f!("Failed to create output directory {}", dir.display()))?;

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| f!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(json.as_bytes())?;
    file.persist(path)
        .map_err(|e| eyre!("Failed to write {}: {}", path.display(), e.error))?;

    Ok(())
}
