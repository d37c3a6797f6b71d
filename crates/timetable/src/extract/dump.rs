use std::path::{Path, PathBuf};

use timetable_core::source::{ExtractionSettings, PageTable, SourceError, TableDump, TableSource};

/// Page tables stored as JSON by the PDF table extractor.
///
/// The file is read when the tables are requested, so a missing or unreadable
/// file surfaces as a [`SourceError`] from [`TableSource::page_tables`].
#[derive(Debug, Clone)]
pub struct DumpFile {
    path: PathBuf,
    settings: ExtractionSettings,
}

impl DumpFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settings: ExtractionSettings::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TableDump, SourceError> {
        let json = std::fs::read_to_string(&self.path)?;
        let dump = TableDump::from_json(&json)?;

        if dump.settings_differ(&self.settings) {
            log::warn!(
                "{} was extracted with {:?}, expected {:?}; column positions may not match",
                self.path.display(),
                dump.settings,
                self.settings
            );
        }

        Ok(dump)
    }
}

impl TableSource for DumpFile {
    fn page_tables(&self) -> Result<Vec<PageTable>, SourceError> {
        self.load()?.page_tables()
    }
}
