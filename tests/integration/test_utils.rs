//! Shared helpers: a mocked DataForSEO server and pipelines wired to it.

use std::sync::Arc;

use serde_json::{json, Value};
use serpshare::config::{AnalysisConfig, SerpDepth, SourceSelection};
use serpshare::core::pipeline::AnalysisPipeline;
use serpshare::services::dataforseo::{
    DataForSeoClient, DataForSeoKeywordSource, DataForSeoSerpProvider,
};
use serpshare::services::providers::{KeywordSource, SerpProvider, SourceKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const RELATED_KEYWORDS_PATH: &str = "/keywords_data/google_ads/keywords_for_keywords/live";
pub const KEYWORD_IDEAS_PATH: &str = "/dataforseo_labs/google/keyword_ideas/live";
pub const AUTOCOMPLETE_PATH: &str = "/keywords_data/google/autocomplete/live";
pub const SERP_PATH: &str = "/serp/google/organic/live/advanced";
pub const USER_DATA_PATH: &str = "/appendix/user_data";

pub fn test_config(seeds: &[&str]) -> AnalysisConfig {
    AnalysisConfig {
        seed_keywords: seeds.iter().map(|s| s.to_string()).collect(),
        location_code: 2840,
        language_code: "en".to_string(),
        fetch_limit: 700,
        keywords_to_analyze: 100,
        serp_depth: SerpDepth::Ten,
        max_cost_usd: 5.0,
        negative_keywords: Vec::new(),
        negative_domains: Vec::new(),
        sources: SourceSelection::default(),
    }
}

pub fn client_for(server: &MockServer) -> DataForSeoClient {
    DataForSeoClient::with_client(server.uri(), reqwest::Client::new(), "login", "password")
}

/// Build a pipeline with one source adapter per enabled config source,
/// all pointed at the mock server.
pub fn pipeline_for(server: &MockServer, config: &AnalysisConfig) -> AnalysisPipeline {
    let client = client_for(server);
    let mut sources: Vec<Arc<dyn KeywordSource>> = Vec::new();
    if config.sources.related_keywords {
        sources.push(Arc::new(DataForSeoKeywordSource::new(
            client.clone(),
            SourceKind::RelatedKeywords,
            config,
        )));
    }
    if config.sources.keyword_ideas {
        sources.push(Arc::new(DataForSeoKeywordSource::new(
            client.clone(),
            SourceKind::KeywordIdeas,
            config,
        )));
    }
    if config.sources.autocomplete {
        sources.push(Arc::new(DataForSeoKeywordSource::new(
            client.clone(),
            SourceKind::Autocomplete,
            config,
        )));
    }
    let serp_provider: Arc<dyn SerpProvider> =
        Arc::new(DataForSeoSerpProvider::new(client, config));
    AnalysisPipeline::new(config.clone(), sources, serp_provider)
}

/// keywords_for_keywords response: flat keyword + volume rows.
pub fn keyword_rows_body(rows: &[(&str, u64)]) -> Value {
    let rows: Vec<Value> = rows
        .iter()
        .map(|(keyword, volume)| json!({"keyword": keyword, "search_volume": volume}))
        .collect();
    json!({"tasks": [{"result": rows}]})
}

/// keyword_ideas response: rows nested under items/keyword_info.
pub fn keyword_ideas_body(rows: &[(&str, u64)]) -> Value {
    let items: Vec<Value> = rows
        .iter()
        .map(|(keyword, volume)| {
            json!({"keyword": keyword, "keyword_info": {"search_volume": volume}})
        })
        .collect();
    json!({"tasks": [{"result": [{"items": items}]}]})
}

/// autocomplete response: bare keyword strings, no volume data.
pub fn autocomplete_body(keywords: &[&str]) -> Value {
    json!({"tasks": [{"result": keywords}]})
}

/// SERP response: one task per (keyword, items) page, where each item is
/// (domain, rank_group, type).
pub fn serp_body(pages: &[(&str, &[(&str, u32, &str)])]) -> Value {
    let tasks: Vec<Value> = pages
        .iter()
        .map(|(keyword, items)| {
            let items: Vec<Value> = items
                .iter()
                .map(|(domain, rank_group, item_type)| {
                    json!({
                        "type": item_type,
                        "domain": domain,
                        "url": format!("https://{}/page", domain),
                        "title": format!("{} result", domain),
                        "rank_group": rank_group
                    })
                })
                .collect();
            json!({"result": [{"keyword": keyword, "items": items}]})
        })
        .collect();
    json!({"tasks": tasks})
}

pub async fn mock_post(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mock_post_failure(server: &MockServer, endpoint: &str) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}
