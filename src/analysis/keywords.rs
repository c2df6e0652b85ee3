//! Multi-source keyword merging with volume and negative filtering.

use std::collections::HashMap;

use crate::analysis::filters::is_keyword_clean;
use crate::models::keyword::{KeywordObservation, KeywordSet};

/// Minimum monthly search volume for a keyword to be kept.
pub const MIN_SEARCH_VOLUME: u64 = 10;

/// Merges keyword observations from any number of discovery sources into
/// one deduplicated [`KeywordSet`].
pub struct KeywordAggregator {
    allow_unknown_volume: bool,
}

impl KeywordAggregator {
    /// `allow_unknown_volume` keeps volume-0 observations as "unknown
    /// volume" placeholders; enabled when an autocomplete-style source
    /// with no volume data participates in the run.
    pub fn new(allow_unknown_volume: bool) -> Self {
        Self {
            allow_unknown_volume,
        }
    }

    /// Merge observations across sources, in source order.
    ///
    /// The highest volume seen for a keyword text wins; source attribution
    /// is not retained. Output is sorted by volume descending, ties keeping
    /// first-encountered order.
    pub fn merge(
        &self,
        per_source: &[Vec<KeywordObservation>],
        negative_terms: &[String],
    ) -> KeywordSet {
        let mut order: Vec<String> = Vec::new();
        let mut volumes: HashMap<String, u64> = HashMap::new();

        for observations in per_source {
            for obs in observations {
                if !self.is_eligible(obs, negative_terms) {
                    continue;
                }
                match volumes.get_mut(&obs.keyword) {
                    Some(existing) => {
                        if obs.search_volume > *existing {
                            *existing = obs.search_volume;
                        }
                    }
                    None => {
                        volumes.insert(obs.keyword.clone(), obs.search_volume);
                        order.push(obs.keyword.clone());
                    }
                }
            }
        }

        let mut observations: Vec<KeywordObservation> = order
            .into_iter()
            .map(|keyword| {
                let search_volume = volumes[&keyword];
                KeywordObservation {
                    keyword,
                    search_volume,
                }
            })
            .collect();
        observations.sort_by(|a, b| b.search_volume.cmp(&a.search_volume));

        KeywordSet { observations }
    }

    fn is_eligible(&self, obs: &KeywordObservation, negative_terms: &[String]) -> bool {
        if !is_keyword_clean(&obs.keyword, negative_terms) {
            return false;
        }
        obs.search_volume >= MIN_SEARCH_VOLUME
            || (obs.search_volume == 0 && self.allow_unknown_volume)
    }
}
