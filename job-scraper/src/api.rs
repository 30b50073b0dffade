use async_trait::async_trait;
use std::error::Error;

/// Parameters of a single keyword search against a job board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    /// region code understood by the job board, `1` is Moscow on hh.ru
    pub area: u32,
    pub per_page: u32,
    pub page: u32,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            area: 1,
            per_page: 10,
            page: 0,
        }
    }

    pub fn area(mut self, area: u32) -> Self {
        self.area = area;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Trait for retrieving raw job postings from a remote job board
#[async_trait]
pub trait VacancySource<T> {
    type E: Error + Send + Sync;
    async fn fetch_vacancies(&self, query: &SearchQuery) -> Result<Vec<T>, Self::E>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_search_query_defaults() {
        let query = SearchQuery::new("Rust");
        assert_eq!(query.keyword, "Rust");
        assert_eq!(query.area, 1);
        assert_eq!(query.per_page, 10);
        assert_eq!(query.page, 0);
    }

    #[test]
    fn test_search_query_builder() {
        let query = SearchQuery::new("Python").area(2).per_page(50).page(3);
        assert_eq!(query.area, 2);
        assert_eq!(query.per_page, 50);
        assert_eq!(query.page, 3);
    }
}
