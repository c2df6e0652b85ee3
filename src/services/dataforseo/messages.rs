//! DataForSEO v3 request and response payload shapes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::serp::SerpItem;

/// Response envelope common to every v3 endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TaskEnvelope<T> {
    #[serde(default)]
    pub tasks: Vec<Task<T>>,
}

/// A failed task carries `result: null`; callers skip it.
#[derive(Debug, Deserialize)]
pub struct Task<T> {
    pub result: Option<Vec<T>>,
}

/// Task for `keywords_data/google_ads/keywords_for_keywords/live`.
#[derive(Debug, Serialize)]
pub struct RelatedKeywordsTask {
    pub keywords: Vec<String>,
    pub location_code: u32,
    pub language_code: String,
    pub sort_by: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
}

/// Task for `dataforseo_labs/google/keyword_ideas/live`.
#[derive(Debug, Serialize)]
pub struct KeywordIdeasTask {
    pub keywords: Vec<String>,
    pub location_code: u32,
    pub language_code: String,
    pub include_seed_keyword: bool,
    pub include_serp_info: bool,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
}

/// Task for `keywords_data/google/autocomplete/live`.
#[derive(Debug, Serialize)]
pub struct AutocompleteTask {
    pub keyword: String,
    pub location_code: u32,
    pub language_code: String,
}

/// Task for `serp/google/organic/live/advanced`, one per keyword.
#[derive(Debug, Serialize)]
pub struct SerpTask {
    pub keyword: String,
    pub location_code: u32,
    pub language_code: String,
    pub depth: u32,
}

/// Row returned by keywords_for_keywords: flat keyword + volume.
#[derive(Debug, Deserialize)]
pub struct KeywordDataRow {
    pub keyword: Option<String>,
    #[serde(default)]
    pub search_volume: Option<u64>,
}

/// keyword_ideas wraps its rows in an `items` array and nests the volume
/// under `keyword_info`.
#[derive(Debug, Deserialize)]
pub struct KeywordIdeasResult {
    #[serde(default)]
    pub items: Vec<KeywordIdeaItem>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordIdeaItem {
    pub keyword: Option<String>,
    #[serde(default)]
    pub keyword_info: Option<KeywordInfo>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordInfo {
    #[serde(default)]
    pub search_volume: Option<u64>,
}

/// Autocomplete rows arrive either as objects or bare keyword strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AutocompleteRow {
    Item { keyword: String },
    Keyword(String),
}

impl AutocompleteRow {
    pub fn into_keyword(self) -> String {
        match self {
            AutocompleteRow::Item { keyword } => keyword,
            AutocompleteRow::Keyword(keyword) => keyword,
        }
    }
}

/// Result for one SERP task: the keyword plus its ranked items.
#[derive(Debug, Deserialize)]
pub struct SerpResult {
    pub keyword: String,
    #[serde(default)]
    pub items: Vec<SerpItem>,
}

/// `appendix/user_data` result carrying the account balance.
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub money: Money,
}

#[derive(Debug, Deserialize)]
pub struct Money {
    pub balance: f64,
}

/// Server-side negative-keyword filter hint:
/// `["keyword", "not_like", "%neg%"]` terms joined by `"and"`.
///
/// Best-effort only; the client-side keyword filter still always runs.
pub fn negative_keyword_filters(negatives: &[String]) -> Option<Value> {
    if negatives.is_empty() {
        return None;
    }
    if negatives.len() == 1 {
        return Some(json!(["keyword", "not_like", format!("%{}%", negatives[0])]));
    }
    let mut filters: Vec<Value> = Vec::new();
    for (i, neg) in negatives.iter().enumerate() {
        filters.push(json!(["keyword", "not_like", format!("%{}%", neg)]));
        if i < negatives.len() - 1 {
            filters.push(json!("and"));
        }
    }
    Some(Value::Array(filters))
}
