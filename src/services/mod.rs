//! External data services and the interfaces the pipeline consumes.

pub mod dataforseo;
pub mod providers;

pub use providers::{KeywordSource, SerpProvider, SourceKind};
