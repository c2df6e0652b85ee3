//! Cost estimation and budget guardrails for paid provider stages.

use crate::errors::AnalysisError;
use crate::models::market::CostEstimate;

/// Price of one keyword-data request covering up to 700 keywords.
pub const COST_PER_KEYWORD_REQUEST_USD: f64 = 0.01;
pub const KEYWORDS_PER_REQUEST: u32 = 700;

/// Price per keyword for a depth-10 SERP page; scales linearly with depth.
pub const BASE_SERP_COST_USD: f64 = 0.0006;
pub const SERP_BASE_DEPTH: u32 = 10;

/// Autocomplete bills per request rather than per keyword block.
pub const AUTOCOMPLETE_COST_PER_REQUEST_USD: f64 = 0.0002;

pub struct CostEstimator;

impl CostEstimator {
    /// Discovery-stage estimate.
    ///
    /// Each volume-bearing source bills `ceil(fetch_limit / 700)` requests
    /// independently: two sources fetching 700 keywords each cost twice
    /// one source doing so. Autocomplete adds one request per seed.
    pub fn estimate_discovery(
        volume_source_count: usize,
        autocomplete_enabled: bool,
        fetch_limit: u32,
        seed_count: usize,
    ) -> CostEstimate {
        let requests_per_source = (fetch_limit as f64 / KEYWORDS_PER_REQUEST as f64).ceil();
        let mut keyword_cost_usd =
            volume_source_count as f64 * requests_per_source * COST_PER_KEYWORD_REQUEST_USD;
        if autocomplete_enabled {
            keyword_cost_usd += AUTOCOMPLETE_COST_PER_REQUEST_USD * seed_count as f64;
        }
        CostEstimate {
            keyword_cost_usd,
            serp_cost_usd: 0.0,
            total_usd: keyword_cost_usd,
        }
    }

    /// SERP-stage estimate from the keyword count and depth about to be
    /// sent.
    pub fn estimate_serp(keywords_to_analyze: usize, depth: u32) -> CostEstimate {
        let per_keyword = BASE_SERP_COST_USD * (depth as f64 / SERP_BASE_DEPTH as f64);
        let serp_cost_usd = keywords_to_analyze as f64 * per_keyword;
        CostEstimate {
            keyword_cost_usd: 0.0,
            serp_cost_usd,
            total_usd: serp_cost_usd,
        }
    }

    /// Combined estimate for a full run, for upfront display and logging.
    /// The per-stage guardrails still recompute from actual parameters.
    pub fn estimate_total(
        volume_source_count: usize,
        autocomplete_enabled: bool,
        fetch_limit: u32,
        seed_count: usize,
        keywords_to_analyze: usize,
        depth: u32,
    ) -> CostEstimate {
        let discovery = Self::estimate_discovery(
            volume_source_count,
            autocomplete_enabled,
            fetch_limit,
            seed_count,
        );
        let serp = Self::estimate_serp(keywords_to_analyze, depth);
        CostEstimate {
            keyword_cost_usd: discovery.keyword_cost_usd,
            serp_cost_usd: serp.serp_cost_usd,
            total_usd: discovery.keyword_cost_usd + serp.serp_cost_usd,
        }
    }

    /// A stage is blocked when its estimate strictly exceeds the ceiling;
    /// an estimate equal to the ceiling may run.
    pub fn ensure_within_budget(
        estimate: &CostEstimate,
        ceiling_usd: f64,
    ) -> Result<(), AnalysisError> {
        if estimate.total_usd > ceiling_usd {
            return Err(AnalysisError::BudgetExceeded {
                estimated_usd: estimate.total_usd,
                ceiling_usd,
            });
        }
        Ok(())
    }
}
