//! DataForSEO-backed implementations of the provider interfaces.
//!
//! One adapter per discovery source over a shared client, so payload
//! shape differences stay at this boundary.

use async_trait::async_trait;

use super::client::DataForSeoClient;
use crate::config::AnalysisConfig;
use crate::errors::ProviderError;
use crate::models::keyword::KeywordObservation;
use crate::models::serp::SerpPage;
use crate::services::providers::{KeywordSource, SerpProvider, SourceKind};

/// One discovery source bound to the shared client and run parameters.
pub struct DataForSeoKeywordSource {
    client: DataForSeoClient,
    kind: SourceKind,
    location_code: u32,
    language_code: String,
    limit: u32,
    negative_keywords: Vec<String>,
}

impl DataForSeoKeywordSource {
    pub fn new(client: DataForSeoClient, kind: SourceKind, config: &AnalysisConfig) -> Self {
        Self {
            client,
            kind,
            location_code: config.location_code,
            language_code: config.language_code.clone(),
            limit: config.fetch_limit,
            negative_keywords: config.negative_keywords.clone(),
        }
    }
}

#[async_trait]
impl KeywordSource for DataForSeoKeywordSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn fetch(&self, seed: &str) -> Result<Vec<KeywordObservation>, ProviderError> {
        match self.kind {
            SourceKind::RelatedKeywords => {
                self.client
                    .related_keywords(
                        seed,
                        self.location_code,
                        &self.language_code,
                        self.limit,
                        &self.negative_keywords,
                    )
                    .await
            }
            SourceKind::KeywordIdeas => {
                self.client
                    .keyword_ideas(
                        seed,
                        self.location_code,
                        &self.language_code,
                        self.limit,
                        &self.negative_keywords,
                    )
                    .await
            }
            SourceKind::Autocomplete => {
                self.client
                    .autocomplete(seed, self.location_code, &self.language_code)
                    .await
            }
        }
    }
}

/// SERP supplier bound to the shared client and run parameters.
pub struct DataForSeoSerpProvider {
    client: DataForSeoClient,
    location_code: u32,
    language_code: String,
    depth: u32,
}

impl DataForSeoSerpProvider {
    pub fn new(client: DataForSeoClient, config: &AnalysisConfig) -> Self {
        Self {
            client,
            location_code: config.location_code,
            language_code: config.language_code.clone(),
            depth: config.serp_depth.as_u32(),
        }
    }
}

#[async_trait]
impl SerpProvider for DataForSeoSerpProvider {
    async fn fetch_serp_pages(&self, keywords: &[String]) -> Result<Vec<SerpPage>, ProviderError> {
        self.client
            .serp_pages(keywords, self.location_code, &self.language_code, self.depth)
            .await
    }
}
