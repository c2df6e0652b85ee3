//! Serpshare analysis runner
//!
//! Runs one full topic analysis from environment configuration and writes
//! the summary and detail CSV exports.

use dotenvy::dotenv;
use serpshare::config::AnalysisConfig;
use serpshare::core::pipeline::AnalysisPipeline;
use serpshare::export;
use serpshare::logging;
use serpshare::models::session::{AnalysisSession, RunStatus};
use serpshare::services::dataforseo::{
    DataForSeoClient, DataForSeoKeywordSource, DataForSeoSerpProvider,
};
use serpshare::services::providers::{KeywordSource, SerpProvider, SourceKind};
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env_name = serpshare::config::get_environment();
    info!("Starting serpshare analysis run");
    info!(environment = %env_name, "Environment");

    let config = AnalysisConfig::from_env()?;
    info!(
        seeds = config.seed_keywords.len(),
        sources = config.sources.enabled_count(),
        depth = config.serp_depth.as_u32(),
        max_cost_usd = config.max_cost_usd,
        "Analyzing {} seed keyword(s) with {} source(s)",
        config.seed_keywords.len(),
        config.sources.enabled_count()
    );

    let login =
        env::var("DATAFORSEO_LOGIN").map_err(|_| "DATAFORSEO_LOGIN must be set")?;
    let password =
        env::var("DATAFORSEO_PASSWORD").map_err(|_| "DATAFORSEO_PASSWORD must be set")?;
    let client = DataForSeoClient::new(login, password);

    match client.account_balance().await {
        Ok(balance) => info!(balance_usd = balance, "Provider balance: ${:.2}", balance),
        Err(e) => warn!(error = %e, "Could not fetch provider balance"),
    }

    let mut sources: Vec<Arc<dyn KeywordSource>> = Vec::new();
    if config.sources.related_keywords {
        sources.push(Arc::new(DataForSeoKeywordSource::new(
            client.clone(),
            SourceKind::RelatedKeywords,
            &config,
        )));
    }
    if config.sources.keyword_ideas {
        sources.push(Arc::new(DataForSeoKeywordSource::new(
            client.clone(),
            SourceKind::KeywordIdeas,
            &config,
        )));
    }
    if config.sources.autocomplete {
        sources.push(Arc::new(DataForSeoKeywordSource::new(
            client.clone(),
            SourceKind::Autocomplete,
            &config,
        )));
    }
    let serp_provider: Arc<dyn SerpProvider> =
        Arc::new(DataForSeoSerpProvider::new(client, &config));

    let pipeline = AnalysisPipeline::new(config, sources, serp_provider);
    let session = pipeline.run().await?;

    for notice in &session.notices {
        warn!("{}", notice.message);
    }

    match session.status {
        RunStatus::NoKeywords => {
            info!("No keywords with sufficient search volume were found");
            return Ok(());
        }
        RunStatus::NoEligibleResults => {
            info!("SERP sampling produced no eligible organic results");
            return Ok(());
        }
        RunStatus::Complete => {}
    }

    print_report(&session);

    let summary_path = env::var("SUMMARY_CSV_PATH")
        .unwrap_or_else(|_| "topic_authority_summary.csv".to_string());
    let detail_path =
        env::var("DETAIL_CSV_PATH").unwrap_or_else(|_| "serp_detail.csv".to_string());
    export::export_summary(Path::new(&summary_path), &session.report)?;
    export::export_detail(Path::new(&detail_path), &session.detail_rows)?;
    info!(
        summary = %summary_path,
        detail = %detail_path,
        "Exports written to {} and {}",
        summary_path,
        detail_path
    );

    Ok(())
}

fn print_report(session: &AnalysisSession) {
    let report = &session.report;

    if let Some(leader) = report.leader() {
        println!(
            "Market leader: {} ({:.2}% share, {:.0} est. monthly traffic)",
            leader.domain, leader.share_of_voice_pct, leader.estimated_traffic
        );
    }
    println!("Keywords discovered: {}", session.keywords.len());
    println!("Domains ranked: {}", report.rows.len());
    println!("Total est. traffic: {:.0}", report.total_market_traffic);
    println!(
        "Top 3 share: {:.1}%  Top 10 share: {:.1}%  Market type: {}",
        report.top3_share_pct,
        report.top10_share_pct,
        report.market_type.as_str()
    );
    println!();
    println!(
        "{:<6} {:<40} {:>14} {:>9}",
        "Rank", "Domain", "Est. Traffic", "Share %"
    );
    for row in report.rows.iter().take(15) {
        println!(
            "{:<6} {:<40} {:>14.0} {:>9.2}",
            row.rank, row.domain, row.estimated_traffic, row.share_of_voice_pct
        );
    }
}
