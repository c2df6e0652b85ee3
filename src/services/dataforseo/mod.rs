//! DataForSEO provider integration.

pub mod client;
pub mod messages;
pub mod provider;

pub use client::{DataForSeoClient, API_BASE_URL};
pub use provider::{DataForSeoKeywordSource, DataForSeoSerpProvider};
