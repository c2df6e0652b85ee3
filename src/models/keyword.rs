//! Keyword discovery data models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single keyword-volume pair as reported by one discovery source.
///
/// `search_volume` is monthly searches; 0 marks an "unknown volume"
/// placeholder from sources that report no volume data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordObservation {
    pub keyword: String,
    pub search_volume: u64,
}

/// Deduplicated keyword set, sorted by search volume descending.
///
/// Keyword texts are unique within the set; the merge rule that builds it
/// lives in [`KeywordAggregator`](crate::analysis::keywords::KeywordAggregator).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordSet {
    pub observations: Vec<KeywordObservation>,
}

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The top `n` observations by volume, clamped to the set size.
    pub fn top(&self, n: usize) -> &[KeywordObservation] {
        &self.observations[..n.min(self.observations.len())]
    }
}

/// Volume lookup for a slice of observations, keyed by keyword text.
pub fn volume_by_keyword(observations: &[KeywordObservation]) -> HashMap<String, u64> {
    observations
        .iter()
        .map(|obs| (obs.keyword.clone(), obs.search_volume))
        .collect()
}
