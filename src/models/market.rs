//! Market-share and cost data models.

use serde::{Deserialize, Serialize};

/// Accumulated estimated traffic for one domain across the analyzed
/// keyword set. Always non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainTrafficRecord {
    pub domain: String,
    pub estimated_traffic: f64,
}

/// One ranked row of the market-share table. `share_of_voice_pct` is the
/// domain's percentage of `total_market_traffic`; shares over all rows sum
/// to 100 within floating-point tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketShareRow {
    pub rank: u32,
    pub domain: String,
    pub estimated_traffic: f64,
    pub share_of_voice_pct: f64,
}

/// Market concentration classification derived from the top-3 share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketType {
    Monopolistic,
    Concentrated,
    Fragmented,
}

impl MarketType {
    /// Top-3 share above 75% is monopolistic, above 50% concentrated,
    /// otherwise fragmented. Boundary values fall to the lower category.
    pub fn classify(top3_share_pct: f64) -> Self {
        if top3_share_pct > 75.0 {
            MarketType::Monopolistic
        } else if top3_share_pct > 50.0 {
            MarketType::Concentrated
        } else {
            MarketType::Fragmented
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::Monopolistic => "Monopolistic",
            MarketType::Concentrated => "Concentrated",
            MarketType::Fragmented => "Fragmented",
        }
    }
}

/// Ranked market-share table plus concentration metrics for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    pub rows: Vec<MarketShareRow>,
    pub total_market_traffic: f64,
    pub top3_share_pct: f64,
    pub top10_share_pct: f64,
    pub market_type: MarketType,
}

impl Default for MarketReport {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_market_traffic: 0.0,
            top3_share_pct: 0.0,
            top10_share_pct: 0.0,
            market_type: MarketType::Fragmented,
        }
    }
}

impl MarketReport {
    /// The highest-traffic domain, if any domain ranked at all.
    pub fn leader(&self) -> Option<&MarketShareRow> {
        self.rows.first()
    }
}

/// Estimated cost of a planned provider operation, in USD. Recomputed from
/// the actual parameters immediately before each paid stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub keyword_cost_usd: f64,
    pub serp_cost_usd: f64,
    pub total_usd: f64,
}
