//! REST client for the DataForSEO v3 API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::messages::{
    negative_keyword_filters, AutocompleteRow, AutocompleteTask, KeywordDataRow,
    KeywordIdeasResult, KeywordIdeasTask, RelatedKeywordsTask, SerpResult, SerpTask, Task,
    TaskEnvelope, UserData,
};
use crate::errors::ProviderError;
use crate::models::keyword::KeywordObservation;
use crate::models::serp::SerpPage;

pub const API_BASE_URL: &str = "https://api.dataforseo.com/v3";

const RELATED_KEYWORDS_PATH: &str = "keywords_data/google_ads/keywords_for_keywords/live";
const KEYWORD_IDEAS_PATH: &str = "dataforseo_labs/google/keyword_ideas/live";
const AUTOCOMPLETE_PATH: &str = "keywords_data/google/autocomplete/live";
const SERP_PATH: &str = "serp/google/organic/live/advanced";
const USER_DATA_PATH: &str = "appendix/user_data";

/// Basic-auth REST client. Cheap to clone; the underlying
/// `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct DataForSeoClient {
    http: Client,
    base_url: String,
    login: String,
    password: String,
}

impl DataForSeoClient {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_client(API_BASE_URL.to_string(), Client::new(), login, password)
    }

    /// Construct against a custom base URL and client. Integration tests
    /// point this at a mock server.
    pub fn with_client(
        base_url: String,
        http: Client,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            login: login.into(),
            password: password.into(),
        }
    }

    async fn post_tasks<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        tasks: &[T],
    ) -> Result<TaskEnvelope<R>, ProviderError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, task_count = tasks.len(), "POST {}", path);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.login, Some(&self.password))
            .json(&tasks)
            .send()
            .await?
            .error_for_status()?;
        let envelope = response.json::<TaskEnvelope<R>>().await?;
        Ok(envelope)
    }

    /// Related keywords for one seed, sorted by volume server-side, with
    /// the negative-keyword filter hint attached.
    pub async fn related_keywords(
        &self,
        seed: &str,
        location_code: u32,
        language_code: &str,
        limit: u32,
        negatives: &[String],
    ) -> Result<Vec<KeywordObservation>, ProviderError> {
        let task = RelatedKeywordsTask {
            keywords: vec![seed.to_string()],
            location_code,
            language_code: language_code.to_string(),
            sort_by: "search_volume".to_string(),
            limit,
            filters: negative_keyword_filters(negatives),
        };
        let envelope: TaskEnvelope<KeywordDataRow> =
            self.post_tasks(RELATED_KEYWORDS_PATH, &[task]).await?;
        Ok(envelope
            .tasks
            .into_iter()
            .flat_map(|task| task.result.unwrap_or_default())
            .filter_map(|row| {
                Some(KeywordObservation {
                    keyword: row.keyword?,
                    search_volume: row.search_volume.unwrap_or(0),
                })
            })
            .collect())
    }

    /// Keyword ideas for one seed. The volume sits nested under
    /// `keyword_info` and is flattened here.
    pub async fn keyword_ideas(
        &self,
        seed: &str,
        location_code: u32,
        language_code: &str,
        limit: u32,
        negatives: &[String],
    ) -> Result<Vec<KeywordObservation>, ProviderError> {
        let task = KeywordIdeasTask {
            keywords: vec![seed.to_string()],
            location_code,
            language_code: language_code.to_string(),
            include_seed_keyword: true,
            include_serp_info: false,
            limit,
            filters: negative_keyword_filters(negatives),
        };
        let envelope: TaskEnvelope<KeywordIdeasResult> =
            self.post_tasks(KEYWORD_IDEAS_PATH, &[task]).await?;
        Ok(envelope
            .tasks
            .into_iter()
            .flat_map(|task| task.result.unwrap_or_default())
            .flat_map(|result| result.items)
            .filter_map(|item| {
                Some(KeywordObservation {
                    keyword: item.keyword?,
                    search_volume: item
                        .keyword_info
                        .and_then(|info| info.search_volume)
                        .unwrap_or(0),
                })
            })
            .collect())
    }

    /// Autocomplete suggestions for one seed. The endpoint reports no
    /// volume data, so every observation comes back at volume 0.
    pub async fn autocomplete(
        &self,
        seed: &str,
        location_code: u32,
        language_code: &str,
    ) -> Result<Vec<KeywordObservation>, ProviderError> {
        let task = AutocompleteTask {
            keyword: seed.to_string(),
            location_code,
            language_code: language_code.to_string(),
        };
        let envelope: TaskEnvelope<AutocompleteRow> =
            self.post_tasks(AUTOCOMPLETE_PATH, &[task]).await?;
        Ok(envelope
            .tasks
            .into_iter()
            .flat_map(|task| task.result.unwrap_or_default())
            .map(|row| KeywordObservation {
                keyword: row.into_keyword(),
                search_volume: 0,
            })
            .filter(|obs| !obs.keyword.is_empty())
            .collect())
    }

    /// Ranked SERP pages for a batch of keywords, one task per keyword.
    /// Tasks that produced no result are skipped.
    pub async fn serp_pages(
        &self,
        keywords: &[String],
        location_code: u32,
        language_code: &str,
        depth: u32,
    ) -> Result<Vec<SerpPage>, ProviderError> {
        let tasks: Vec<SerpTask> = keywords
            .iter()
            .map(|keyword| SerpTask {
                keyword: keyword.clone(),
                location_code,
                language_code: language_code.to_string(),
                depth,
            })
            .collect();
        let envelope: TaskEnvelope<SerpResult> = self.post_tasks(SERP_PATH, &tasks).await?;
        Ok(envelope
            .tasks
            .into_iter()
            .filter_map(|task: Task<SerpResult>| task.result)
            .flatten()
            .map(|result| SerpPage {
                keyword: result.keyword,
                items: result.items,
            })
            .collect())
    }

    /// Current account balance in USD.
    pub async fn account_balance(&self) -> Result<f64, ProviderError> {
        let url = format!("{}/{}", self.base_url, USER_DATA_PATH);
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.login, Some(&self.password))
            .send()
            .await?
            .error_for_status()?;
        let envelope = response.json::<TaskEnvelope<UserData>>().await?;
        envelope
            .tasks
            .into_iter()
            .flat_map(|task| task.result.unwrap_or_default())
            .next()
            .map(|data| data.money.balance)
            .ok_or_else(|| {
                ProviderError::MalformedResponse("user_data response had no result".to_string())
            })
    }
}
