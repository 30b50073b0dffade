use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{Criteria, VacancyEntry, VacancyStore};
use crate::error::Result;
use crate::vacancy::Vacancy;

pub const DEFAULT_FILENAME: &str = "vacancies.json";

/// Keeps every vacancy in a single JSON array file.
///
/// Each mutation reads the whole file and writes it back in full. Nothing guards
/// against concurrent writers or a crash half way through a write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when the backing file does not exist yet
    fn read_entries(&self) -> Result<Option<Vec<VacancyEntry>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist, treating it as empty", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let entries: Vec<VacancyEntry> = serde_json::from_str(&content)?;
        Ok(Some(entries))
    }

    fn load(&self) -> Result<Vec<VacancyEntry>> {
        Ok(self.read_entries()?.unwrap_or_default())
    }

    fn write_entries(&self, entries: &[VacancyEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut serializer)?;
        fs::write(&self.path, buf)?;
        log::debug!(
            "wrote {} vacancies to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl VacancyStore for JsonFileStore {
    fn save(&mut self, vacancy: &Vacancy) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(VacancyEntry::from(vacancy));
        self.write_entries(&entries)
    }

    fn get(&self, criteria: &Criteria) -> Result<Vec<VacancyEntry>> {
        let mut entries = self.load()?;
        entries.retain(|entry| criteria.matches(entry));
        Ok(entries)
    }

    fn delete(&mut self, url: &str) -> Result<usize> {
        let Some(mut entries) = self.read_entries()? else {
            return Ok(0);
        };
        let before = entries.len();
        entries.retain(|entry| entry.url != url);
        let removed = before - entries.len();
        self.write_entries(&entries)?;
        log::info!("deleted {} vacancies with url: {}", removed, url);
        Ok(removed)
    }
}
