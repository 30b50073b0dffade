pub mod error;
pub mod query;
pub mod store;
pub mod vacancy;

pub use error::{Error, Result};
pub use store::{
    json::JsonFileStore, memory::InMemoryStore, Criteria, Field, VacancyEntry, VacancyStore,
};
pub use vacancy::Vacancy;
