pub mod scraper;
pub mod types;

pub use scraper::HeadHunterApi;
pub use types::{Posting, PostingSalary, SearchResponse, Snippet};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to retrieve vacancies from: '{url}', status: {status}")]
    RequestNotOk {
        url: String,
        status: reqwest::StatusCode,
    },
}
