//! SERP result data models.

use serde::{Deserialize, Serialize};

/// Item type string the provider uses for organic results. Paid and
/// featured item types are excluded from aggregation entirely.
pub const ORGANIC_ITEM_TYPE: &str = "organic";

/// One ranked result item from a SERP page. `rank_group` is the 1-based
/// position within the organic listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub rank_group: u32,
}

impl SerpItem {
    pub fn is_organic(&self) -> bool {
        self.item_type == ORGANIC_ITEM_TYPE
    }
}

/// All ranked items returned for a single keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpPage {
    pub keyword: String,
    #[serde(default)]
    pub items: Vec<SerpItem>,
}

/// Per-item record for the detailed export.
///
/// Rows are retained even when `ctr` is 0 (positions beyond the modeled
/// curve) so the detail export covers every sampled position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpDetailRow {
    pub keyword: String,
    pub search_volume: u64,
    pub domain: String,
    pub url: String,
    pub title: String,
    pub position: u32,
    pub ctr: f64,
    pub estimated_traffic: f64,
}
