//! Analysis pipeline: discovery → SERP sampling → aggregation → report.
//!
//! Every paid stage is gated by the cost estimator immediately before it
//! runs, using the parameters actually about to be sent.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::analysis::keywords::KeywordAggregator;
use crate::analysis::report::ReportBuilder;
use crate::analysis::traffic::TrafficAggregator;
use crate::config::AnalysisConfig;
use crate::cost::CostEstimator;
use crate::errors::AnalysisError;
use crate::models::keyword::{volume_by_keyword, KeywordObservation, KeywordSet};
use crate::models::serp::SerpPage;
use crate::models::session::{AnalysisSession, Notice, RunStatus};
use crate::services::providers::{KeywordSource, SerpProvider};

/// Keywords per SERP request batch.
pub const SERP_BATCH_SIZE: usize = 50;

/// Pause after each batch to respect the provider's rate limits.
pub const BATCH_DELAY: Duration = Duration::from_millis(100);

pub struct AnalysisPipeline {
    config: AnalysisConfig,
    keyword_sources: Vec<Arc<dyn KeywordSource>>,
    serp_provider: Arc<dyn SerpProvider>,
}

impl AnalysisPipeline {
    pub fn new(
        config: AnalysisConfig,
        keyword_sources: Vec<Arc<dyn KeywordSource>>,
        serp_provider: Arc<dyn SerpProvider>,
    ) -> Self {
        Self {
            config,
            keyword_sources,
            serp_provider,
        }
    }

    /// Run the full analysis and produce a fresh session. Nothing from a
    /// previous run is carried over.
    ///
    /// Provider failures are isolated into notices; the only hard stops
    /// are an invalid configuration and a blown budget.
    pub async fn run(&self) -> Result<AnalysisSession, AnalysisError> {
        self.config.validate()?;
        if self.keyword_sources.is_empty() {
            return Err(AnalysisError::InvalidConfiguration(
                "at least one keyword source must be enabled".to_string(),
            ));
        }

        let mut session = AnalysisSession::start();

        let upfront = CostEstimator::estimate_total(
            self.volume_source_count(),
            self.autocomplete_enabled(),
            self.config.fetch_limit,
            self.config.seed_keywords.len(),
            self.config.keywords_to_analyze,
            self.config.serp_depth.as_u32(),
        );
        info!(
            keyword_cost_usd = upfront.keyword_cost_usd,
            serp_cost_usd = upfront.serp_cost_usd,
            total_usd = upfront.total_usd,
            "Estimated full-run cost: ${:.4}",
            upfront.total_usd
        );

        session.keywords = self.discover_keywords(&mut session.notices).await?;
        if session.keywords.is_empty() {
            info!("Discovery produced no usable keywords");
            session.status = RunStatus::NoKeywords;
            return Ok(session);
        }
        info!(
            keyword_count = session.keywords.len(),
            "Discovered {} unique keywords",
            session.keywords.len()
        );

        let analyzed: Vec<KeywordObservation> = session
            .keywords
            .top(self.config.keywords_to_analyze)
            .to_vec();

        let serp_estimate =
            CostEstimator::estimate_serp(analyzed.len(), self.config.serp_depth.as_u32());
        CostEstimator::ensure_within_budget(&serp_estimate, self.config.max_cost_usd)?;

        let volumes = volume_by_keyword(&analyzed);
        let keyword_texts: Vec<String> =
            analyzed.iter().map(|obs| obs.keyword.clone()).collect();

        let pages = self
            .collect_serp_pages(&keyword_texts, &mut session.notices)
            .await;

        let summary =
            TrafficAggregator::aggregate(&pages, &volumes, &self.config.negative_domains);
        if summary.detail_rows.is_empty() {
            info!("SERP sampling produced no eligible organic items");
            session.status = RunStatus::NoEligibleResults;
            return Ok(session);
        }

        info!(
            domains = summary.domain_traffic.len(),
            items = summary.detail_rows.len(),
            total_traffic = summary.total_market_traffic,
            "Aggregated {} domains over {} SERP items",
            summary.domain_traffic.len(),
            summary.detail_rows.len()
        );

        session.report = ReportBuilder::build(&summary);
        session.detail_rows = summary.detail_rows;
        Ok(session)
    }

    /// Discovery stage: one fetch per seed × enabled source, merged into
    /// one deduplicated keyword set. A failing source contributes nothing
    /// and leaves a notice; the merge of the others proceeds.
    async fn discover_keywords(
        &self,
        notices: &mut Vec<Notice>,
    ) -> Result<KeywordSet, AnalysisError> {
        let estimate = CostEstimator::estimate_discovery(
            self.volume_source_count(),
            self.autocomplete_enabled(),
            self.config.fetch_limit,
            self.config.seed_keywords.len(),
        );
        CostEstimator::ensure_within_budget(&estimate, self.config.max_cost_usd)?;

        let mut per_source: Vec<Vec<KeywordObservation>> = Vec::new();
        for seed in &self.config.seed_keywords {
            for source in &self.keyword_sources {
                debug!(
                    seed = %seed,
                    source = source.kind().as_str(),
                    "Fetching keyword candidates for '{}'",
                    seed
                );
                match source.fetch(seed).await {
                    Ok(observations) => {
                        debug!(
                            seed = %seed,
                            source = source.kind().as_str(),
                            count = observations.len(),
                            "Got {} candidates",
                            observations.len()
                        );
                        per_source.push(observations);
                    }
                    Err(e) => {
                        warn!(
                            seed = %seed,
                            source = source.kind().as_str(),
                            error = %e,
                            "Keyword source unavailable, continuing without it"
                        );
                        notices.push(Notice::new(format!(
                            "{} source unavailable for seed '{}': {}",
                            source.kind().as_str(),
                            seed,
                            e
                        )));
                        per_source.push(Vec::new());
                    }
                }
            }
        }

        let aggregator = KeywordAggregator::new(self.autocomplete_enabled());
        Ok(aggregator.merge(&per_source, &self.config.negative_keywords))
    }

    /// SERP stage: fixed-size batches issued sequentially, each followed
    /// by a short delay. A failed batch contributes zero items and leaves
    /// a notice; subsequent batches still run.
    async fn collect_serp_pages(
        &self,
        keywords: &[String],
        notices: &mut Vec<Notice>,
    ) -> Vec<SerpPage> {
        let total_batches = keywords.len().div_ceil(SERP_BATCH_SIZE);
        let mut pages: Vec<SerpPage> = Vec::new();

        for (index, batch) in keywords.chunks(SERP_BATCH_SIZE).enumerate() {
            let batch_number = index + 1;
            info!(
                batch = batch_number,
                total = total_batches,
                size = batch.len(),
                "Fetching SERP batch {}/{}",
                batch_number,
                total_batches
            );
            match self.serp_provider.fetch_serp_pages(batch).await {
                Ok(mut batch_pages) => pages.append(&mut batch_pages),
                Err(e) => {
                    warn!(
                        batch = batch_number,
                        error = %e,
                        "SERP batch {} failed, continuing with remaining batches",
                        batch_number
                    );
                    notices.push(Notice::new(format!(
                        "SERP batch {}/{} failed: {}",
                        batch_number, total_batches, e
                    )));
                }
            }
            tokio::time::sleep(BATCH_DELAY).await;
        }

        pages
    }

    fn volume_source_count(&self) -> usize {
        self.keyword_sources
            .iter()
            .filter(|source| source.kind().has_volume_data())
            .count()
    }

    fn autocomplete_enabled(&self) -> bool {
        self.keyword_sources
            .iter()
            .any(|source| !source.kind().has_volume_data())
    }
}
