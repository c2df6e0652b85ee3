//! Topic-authority and organic market-share estimation from sampled SERP
//! data: keyword discovery, SERP sampling, and CTR-weighted traffic-share
//! aggregation, gated by a cost estimator.

pub mod analysis;
pub mod config;
pub mod core;
pub mod cost;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
