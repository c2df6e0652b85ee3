//! Market-share ranking and concentration metrics.

use std::cmp::Ordering;

use crate::analysis::traffic::TrafficSummary;
use crate::models::market::{MarketReport, MarketShareRow, MarketType};

pub struct ReportBuilder;

impl ReportBuilder {
    /// Rank domains by estimated traffic and derive share-of-voice plus
    /// concentration metrics.
    ///
    /// A zero-traffic market yields an empty report rather than dividing
    /// by zero. The sort is stable: ties keep the aggregator's
    /// first-encountered order.
    pub fn build(summary: &TrafficSummary) -> MarketReport {
        if summary.total_market_traffic <= 0.0 {
            return MarketReport::default();
        }

        let mut records = summary.domain_traffic.clone();
        records.sort_by(|a, b| {
            b.estimated_traffic
                .partial_cmp(&a.estimated_traffic)
                .unwrap_or(Ordering::Equal)
        });

        let rows: Vec<MarketShareRow> = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| MarketShareRow {
                rank: (i + 1) as u32,
                share_of_voice_pct: 100.0 * record.estimated_traffic
                    / summary.total_market_traffic,
                domain: record.domain,
                estimated_traffic: record.estimated_traffic,
            })
            .collect();

        let top3_share_pct = Self::top_n_share(&rows, 3);
        let top10_share_pct = Self::top_n_share(&rows, 10);

        MarketReport {
            total_market_traffic: summary.total_market_traffic,
            top3_share_pct,
            top10_share_pct,
            market_type: MarketType::classify(top3_share_pct),
            rows,
        }
    }

    /// Combined share-of-voice of the first `n` ranked rows.
    pub fn top_n_share(rows: &[MarketShareRow], n: usize) -> f64 {
        rows.iter().take(n).map(|r| r.share_of_voice_pct).sum()
    }
}
