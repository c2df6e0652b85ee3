//! Provider interfaces decoupling the pipeline from the data vendor.
//!
//! Each discovery source normalizes its own payload shape into
//! [`KeywordObservation`] before anything reaches the aggregation core.

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::keyword::KeywordObservation;
use crate::models::serp::SerpPage;

/// Discovery source kinds, used for cost attribution and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Related-keywords data backed by Google Ads.
    RelatedKeywords,
    /// Broader keyword-ideas suggestions.
    KeywordIdeas,
    /// Autocomplete suggestions; no volume data.
    Autocomplete,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::RelatedKeywords => "related_keywords",
            SourceKind::KeywordIdeas => "keyword_ideas",
            SourceKind::Autocomplete => "autocomplete",
        }
    }

    /// Autocomplete reports no search volumes and bills per request
    /// instead of per keyword block.
    pub fn has_volume_data(&self) -> bool {
        !matches!(self, SourceKind::Autocomplete)
    }
}

/// One keyword discovery source.
#[async_trait]
pub trait KeywordSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Fetch keyword candidates for one seed keyword.
    ///
    /// A failing source is isolated by the caller: its contribution
    /// becomes empty and the remaining sources still merge.
    async fn fetch(&self, seed: &str) -> Result<Vec<KeywordObservation>, ProviderError>;
}

/// Ranked-SERP supplier for batches of keywords.
#[async_trait]
pub trait SerpProvider: Send + Sync {
    /// Fetch ranked SERP items for a batch of keywords. A keyword whose
    /// task produced no result is simply absent from the output.
    async fn fetch_serp_pages(&self, keywords: &[String]) -> Result<Vec<SerpPage>, ProviderError>;
}
