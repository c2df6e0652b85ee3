//! Environment-driven analysis configuration.

use std::env;

use crate::errors::AnalysisError;

/// Deployment environment name, defaulting to "sandbox".
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// SERP sampling depth. The provider prices pages in blocks of 10, so
/// only these four depths are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerpDepth {
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl SerpDepth {
    pub fn as_u32(self) -> u32 {
        match self {
            SerpDepth::Ten => 10,
            SerpDepth::Twenty => 20,
            SerpDepth::Fifty => 50,
            SerpDepth::Hundred => 100,
        }
    }

    pub fn from_u32(value: u32) -> Result<Self, AnalysisError> {
        match value {
            10 => Ok(SerpDepth::Ten),
            20 => Ok(SerpDepth::Twenty),
            50 => Ok(SerpDepth::Fifty),
            100 => Ok(SerpDepth::Hundred),
            other => Err(AnalysisError::InvalidConfiguration(format!(
                "SERP depth must be one of 10/20/50/100, got {}",
                other
            ))),
        }
    }
}

/// Which discovery sources participate in a run.
#[derive(Debug, Clone, Copy)]
pub struct SourceSelection {
    pub related_keywords: bool,
    pub keyword_ideas: bool,
    pub autocomplete: bool,
}

impl Default for SourceSelection {
    fn default() -> Self {
        Self {
            related_keywords: true,
            keyword_ideas: false,
            autocomplete: false,
        }
    }
}

impl SourceSelection {
    pub fn enabled_count(&self) -> usize {
        [self.related_keywords, self.keyword_ideas, self.autocomplete]
            .iter()
            .filter(|enabled| **enabled)
            .count()
    }
}

/// Parameters for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Seed keywords, deduplicated, insertion order preserved.
    pub seed_keywords: Vec<String>,
    pub location_code: u32,
    pub language_code: String,
    /// Keywords to fetch from each enabled source.
    pub fetch_limit: u32,
    /// Top keywords (by volume) to take into SERP sampling.
    pub keywords_to_analyze: usize,
    pub serp_depth: SerpDepth,
    /// Hard ceiling: any stage estimated above this is blocked.
    pub max_cost_usd: f64,
    pub negative_keywords: Vec<String>,
    pub negative_domains: Vec<String>,
    pub sources: SourceSelection,
}

impl AnalysisConfig {
    /// Build a validated config from environment variables.
    pub fn from_env() -> Result<Self, AnalysisError> {
        let seed_keywords = dedup_preserving_order(parse_list(
            &env::var("SEED_KEYWORDS").unwrap_or_default(),
        ));

        let location_code: u32 = env::var("LOCATION_CODE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2840);
        let language_code = env::var("LANGUAGE_CODE").unwrap_or_else(|_| "en".to_string());
        let fetch_limit: u32 = env::var("FETCH_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(700);
        let keywords_to_analyze: usize = env::var("KEYWORDS_TO_ANALYZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);
        let depth: u32 = env::var("SERP_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let max_cost_usd: f64 = env::var("MAX_COST_USD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5.0);

        let negative_keywords = lowercase_all(parse_list(
            &env::var("NEGATIVE_KEYWORDS").unwrap_or_default(),
        ));
        let negative_domains = lowercase_all(parse_list(
            &env::var("NEGATIVE_DOMAINS").unwrap_or_default(),
        ));

        let defaults = SourceSelection::default();
        let sources = SourceSelection {
            related_keywords: parse_bool("SOURCE_RELATED_KEYWORDS", defaults.related_keywords),
            keyword_ideas: parse_bool("SOURCE_KEYWORD_IDEAS", defaults.keyword_ideas),
            autocomplete: parse_bool("SOURCE_AUTOCOMPLETE", defaults.autocomplete),
        };

        let config = Self {
            seed_keywords,
            location_code,
            language_code,
            fetch_limit,
            keywords_to_analyze,
            serp_depth: SerpDepth::from_u32(depth)?,
            max_cost_usd,
            negative_keywords,
            negative_domains,
            sources,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects unusable configurations before any network call is made.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.seed_keywords.is_empty() {
            return Err(AnalysisError::InvalidConfiguration(
                "at least one seed keyword is required".to_string(),
            ));
        }
        if self.sources.enabled_count() == 0 {
            return Err(AnalysisError::InvalidConfiguration(
                "at least one keyword source must be enabled".to_string(),
            ));
        }
        if self.fetch_limit == 0 {
            return Err(AnalysisError::InvalidConfiguration(
                "fetch limit must be greater than zero".to_string(),
            ));
        }
        if self.keywords_to_analyze == 0 {
            return Err(AnalysisError::InvalidConfiguration(
                "keywords to analyze must be greater than zero".to_string(),
            ));
        }
        if self.max_cost_usd < 0.0 {
            return Err(AnalysisError::InvalidConfiguration(
                "max cost must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn lowercase_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.to_lowercase()).collect()
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

fn parse_bool(var: &str, default: bool) -> bool {
    env::var(var)
        .ok()
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
