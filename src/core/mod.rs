//! Core orchestration primitives.

pub mod pipeline;

pub use pipeline::{AnalysisPipeline, BATCH_DELAY, SERP_BATCH_SIZE};
