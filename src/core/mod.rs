pub mod pipeline;
pub mod scoring;
pub mod throttle;

pub use crate::domain::model::{
    AnalyzeRequest, AnalyzeResponse, Candidate, CandidatePool, CompetitionLevel, Metric,
    RankedResult,
};
pub use crate::domain::ports::{MetricsSource, SuggestionSource};
pub use crate::utils::error::Result;
