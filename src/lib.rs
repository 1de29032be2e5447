pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::metrics::{MetricsClient, MetricsCredentials};
pub use crate::adapters::suggest::SuggestClient;
pub use crate::config::CliConfig;
pub use crate::core::pipeline::KeywordPipeline;
pub use crate::domain::model::{AnalyzeRequest, AnalyzeResponse, CompetitionLevel, RankedResult};
pub use crate::utils::error::{AnalyzeError, ErrorClass, Result};
