use job_scraper::{hh::Posting, SearchQuery, VacancySource};
use persistence::{Vacancy, VacancyStore};

use crate::{Error, Result};

/// Fetch one page of postings and save every one that passes validation.
/// Returns how many vacancies were saved.
pub async fn search_and_store<S, St>(
    source: &S,
    store: &mut St,
    query: &SearchQuery,
) -> Result<usize>
where
    S: VacancySource<Posting> + Sync,
    S::E: 'static,
    St: VacancyStore,
{
    let postings = source
        .fetch_vacancies(query)
        .await
        .map_err(|e| Error::Fetch(Box::new(e)))?;
    log::info!(
        "fetched {} postings for search: {}",
        postings.len(),
        query.keyword
    );
    let mut saved = 0;
    for posting in postings {
        let url = posting.alternate_url.clone();
        let vacancy = match Vacancy::try_from(posting) {
            Ok(vacancy) => vacancy,
            Err(e) => {
                log::warn!("skipping posting {}: {}", url, e);
                continue;
            }
        };
        store.save(&vacancy)?;
        log::debug!("saved vacancy: {}", vacancy);
        saved += 1;
    }
    Ok(saved)
}
