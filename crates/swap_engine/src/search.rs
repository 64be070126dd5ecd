use meilisearch_sdk::client::Client;
use swap_core::{Item, SearchPage};
use swap_logging::swap_debug;

use crate::settings::ClientSettings;
use crate::types::{map_search_error, SearchError};

/// Hosted full-text index holding the listings.
#[async_trait::async_trait]
pub trait SearchEngine: Send + Sync {
    async fn search(
        &self,
        index: &str,
        query: &str,
        filter: &[String],
    ) -> Result<SearchPage, SearchError>;
}

/// Meilisearch through its official SDK.
#[derive(Debug, Clone)]
pub struct MeiliSearchClient {
    client: Client,
}

impl MeiliSearchClient {
    /// An empty key means the index is public; no `Authorization` header is sent.
    pub fn new(settings: &ClientSettings) -> Result<Self, SearchError> {
        let api_key = Some(settings.search_key.as_str()).filter(|key| !key.is_empty());
        let client = Client::new(settings.search_url.as_str(), api_key).map_err(map_search_error)?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl SearchEngine for MeiliSearchClient {
    async fn search(
        &self,
        index: &str,
        query: &str,
        filter: &[String],
    ) -> Result<SearchPage, SearchError> {
        swap_debug!("search {:?} with {} filter clause(s)", query, filter.len());

        let index = self.client.index(index);
        let mut request = index.search();
        request.with_query(query);
        if !filter.is_empty() {
            request.with_array_filter(filter.iter().map(String::as_str).collect());
        }
        let results = request.execute::<Item>().await.map_err(map_search_error)?;

        let hits: Vec<Item> = results.hits.into_iter().map(|hit| hit.result).collect();
        let total_hits = results
            .estimated_total_hits
            .or(results.total_hits)
            .unwrap_or(hits.len());
        Ok(SearchPage {
            hits,
            total_hits: total_hits as u64,
        })
    }
}
