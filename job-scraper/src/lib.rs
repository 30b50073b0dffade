pub mod api;
pub mod hh;

pub use api::{SearchQuery, VacancySource};
