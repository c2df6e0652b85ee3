//! SERP-item to domain-traffic aggregation.

use std::collections::HashMap;

use crate::analysis::ctr::ctr_for_position;
use crate::analysis::filters::is_domain_excluded;
use crate::models::market::DomainTrafficRecord;
use crate::models::serp::{SerpDetailRow, SerpPage};

/// Aggregated traffic totals plus the complete per-item detail rows.
///
/// `domain_traffic` preserves first-encountered domain order so downstream
/// ranking can break ties stably. The sum over all records equals
/// `total_market_traffic`.
#[derive(Debug, Clone, Default)]
pub struct TrafficSummary {
    pub domain_traffic: Vec<DomainTrafficRecord>,
    pub total_market_traffic: f64,
    pub detail_rows: Vec<SerpDetailRow>,
}

pub struct TrafficAggregator;

impl TrafficAggregator {
    /// Accumulate `volume × CTR` per domain over every organic,
    /// non-excluded item.
    ///
    /// A keyword missing from `volume_by_keyword` counts as volume 0.
    /// Detail rows keep every aggregated item, including zero-CTR
    /// positions beyond the modeled curve. Result is independent of item
    /// order apart from floating-point summation order.
    pub fn aggregate(
        pages: &[SerpPage],
        volume_by_keyword: &HashMap<String, u64>,
        negative_domains: &[String],
    ) -> TrafficSummary {
        let mut summary = TrafficSummary::default();
        let mut index_by_domain: HashMap<String, usize> = HashMap::new();

        for page in pages {
            let volume = volume_by_keyword
                .get(&page.keyword)
                .copied()
                .unwrap_or(0);

            for item in &page.items {
                if !item.is_organic() {
                    continue;
                }
                if is_domain_excluded(&item.domain, negative_domains) {
                    continue;
                }

                let ctr = ctr_for_position(item.rank_group);
                let traffic = volume as f64 * ctr;

                summary.detail_rows.push(SerpDetailRow {
                    keyword: page.keyword.clone(),
                    search_volume: volume,
                    domain: item.domain.clone(),
                    url: item.url.clone(),
                    title: item.title.clone(),
                    position: item.rank_group,
                    ctr,
                    estimated_traffic: traffic,
                });

                let index = match index_by_domain.get(&item.domain) {
                    Some(&index) => index,
                    None => {
                        summary.domain_traffic.push(DomainTrafficRecord {
                            domain: item.domain.clone(),
                            estimated_traffic: 0.0,
                        });
                        let index = summary.domain_traffic.len() - 1;
                        index_by_domain.insert(item.domain.clone(), index);
                        index
                    }
                };
                summary.domain_traffic[index].estimated_traffic += traffic;
                summary.total_market_traffic += traffic;
            }
        }

        summary
    }
}
