//! Shared data models spanning the pipeline layers.

pub mod keyword;
pub mod market;
pub mod serp;
pub mod session;

pub use keyword::{volume_by_keyword, KeywordObservation, KeywordSet};
pub use market::{CostEstimate, DomainTrafficRecord, MarketReport, MarketShareRow, MarketType};
pub use serp::{SerpDetailRow, SerpItem, SerpPage, ORGANIC_ITEM_TYPE};
pub use session::{AnalysisSession, Notice, RunStatus};
