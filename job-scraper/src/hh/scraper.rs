use async_trait::async_trait;
use reqwest::Client;

use crate::api::{SearchQuery, VacancySource};
use crate::hh::types::{Posting, SearchResponse};
use crate::hh::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.hh.ru";

/// hh.ru rejects requests that come without a User-Agent
const USER_AGENT: &str = concat!("vacancies/", env!("CARGO_PKG_VERSION"));

pub struct HeadHunterApi {
    client: Client,
    base_url: String,
}

impl HeadHunterApi {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn search_page(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let url = vacancy_search_url(&self.base_url, query);
        log::debug!(
            "requesting vacancies from hh, page: {}, search: {}",
            query.page,
            query.keyword
        );
        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve vacancies for page: {}, search: {}, error resp body: {:?}",
                query.page,
                query.keyword,
                error_body,
            );
            return Err(Error::RequestNotOk { url, status });
        }

        let search: SearchResponse = resp.json().await?;
        log::debug!(
            "retrieved {} of {} vacancies for search: {}",
            search.items.len(),
            search.found,
            query.keyword
        );
        Ok(search)
    }
}

#[async_trait]
impl VacancySource<Posting> for HeadHunterApi {
    type E = Error;

    async fn fetch_vacancies(&self, query: &SearchQuery) -> Result<Vec<Posting>> {
        let search = self.search_page(query).await?;
        Ok(search.items)
    }
}

fn vacancy_search_url(base_url: &str, query: &SearchQuery) -> String {
    format!(
        "{}/vacancies?text={}&area={}&per_page={}&page={}",
        base_url,
        urlencoding::encode(&query.keyword),
        query.area,
        query.per_page,
        query.page
    )
}
