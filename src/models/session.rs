//! Session state for one analysis run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::keyword::KeywordSet;
use crate::models::market::MarketReport;
use crate::models::serp::SerpDetailRow;

/// How a run concluded. The empty outcomes are informational, not errors:
/// downstream consumers get well-defined empty outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Complete,
    /// Discovery yielded zero usable keywords.
    NoKeywords,
    /// SERP sampling yielded zero eligible organic items.
    NoEligibleResults,
}

/// Non-fatal condition surfaced to the caller alongside the results,
/// e.g. an unreachable discovery source or a failed SERP batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// All state produced by one analysis run.
///
/// A new run builds a fresh session and the previous one is discarded
/// wholesale; prior results are never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSession {
    pub started_at: DateTime<Utc>,
    pub status: RunStatus,
    pub keywords: KeywordSet,
    pub detail_rows: Vec<SerpDetailRow>,
    pub report: MarketReport,
    pub notices: Vec<Notice>,
}

impl AnalysisSession {
    /// Begin a fresh session.
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            status: RunStatus::Complete,
            keywords: KeywordSet::default(),
            detail_rows: Vec::new(),
            report: MarketReport::default(),
            notices: Vec::new(),
        }
    }
}
