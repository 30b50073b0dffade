//! Storage of vacancies.
//!
//! [`VacancyStore`] is the capability every backend implements:
//! - [`json::JsonFileStore`]: the whole collection as a JSON array in a single file
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! Stores never keep [`Vacancy`] values around, only their [`VacancyEntry`] projection
//! in insertion order.

use crate::error::Result;
use crate::vacancy::Vacancy;

pub mod entry;
pub mod json;
pub mod memory;

pub use entry::{Criteria, Field, VacancyEntry};

pub trait VacancyStore {
    /// Append a vacancy, duplicates by url are kept
    fn save(&mut self, vacancy: &Vacancy) -> Result<()>;

    /// Entries matching every criterion, in insertion order
    fn get(&self, criteria: &Criteria) -> Result<Vec<VacancyEntry>>;

    /// Remove every entry with the given url, returns how many were removed
    fn delete(&mut self, url: &str) -> Result<usize>;

    fn all(&self) -> Result<Vec<VacancyEntry>> {
        self.get(&Criteria::new())
    }
}
