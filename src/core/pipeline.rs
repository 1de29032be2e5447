use crate::core::scoring::{composite_score, dedup_and_sort};
use crate::core::throttle::RateGate;
use crate::domain::model::{
    normalize, AnalyzeRequest, AnalyzeResponse, Candidate, CandidatePool, RankedResult,
};
use crate::domain::ports::{MetricsSource, SuggestionSource};
use crate::utils::error::{AnalyzeError, Result};
use std::time::Duration;

pub const DEFAULT_CALL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Aggregation pipeline: collect suggestions per seed, enrich candidates with
/// volume/competition metrics in chunks, score and rank the merged set.
///
/// All external calls run strictly sequentially through one [`RateGate`].
/// Per-call failures are contained here: a failed seed or chunk degrades the
/// output, it never aborts the run.
pub struct KeywordPipeline<S: SuggestionSource, M: MetricsSource> {
    suggestions: S,
    metrics: M,
    gate: RateGate,
    chunk_size: usize,
}

impl<S: SuggestionSource, M: MetricsSource> KeywordPipeline<S, M> {
    pub fn new(suggestions: S, metrics: M) -> Self {
        Self::with_limits(suggestions, metrics, DEFAULT_CALL_INTERVAL, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_limits(
        suggestions: S,
        metrics: M,
        call_interval: Duration,
        chunk_size: usize,
    ) -> Self {
        Self {
            suggestions,
            metrics,
            gate: RateGate::new(call_interval),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Run the full pipeline for 1–3 seed keywords. Returns the ranked list,
    /// possibly empty when every external call failed soft.
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        if request.keywords.is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        tracing::info!("Analyzing {} seed keyword(s)", request.keywords.len());

        let pool = self.collect(&request.keywords).await;
        tracing::info!("Collected {} candidate(s)", pool.len());

        let scored = self.enrich(&pool).await;
        tracing::info!("Matched {} candidate(s) with metrics", scored.len());

        Ok(AnalyzeResponse {
            result: dedup_and_sort(scored),
        })
    }

    /// One suggestion call per seed. The seed itself enters the pool at rank 0,
    /// suggestions at 1..N. A failed seed contributes nothing.
    async fn collect(&self, seeds: &[String]) -> CandidatePool {
        let mut pool = CandidatePool::new();

        for seed in seeds {
            self.gate.wait().await;
            match self.suggestions.suggestions(seed).await {
                Ok(list) => {
                    tracing::debug!("Seed '{}': {} suggestion(s)", seed, list.len());
                    pool.insert(Candidate {
                        term: seed.clone(),
                        rank: 0,
                    });
                    for (position, term) in list.into_iter().enumerate() {
                        pool.insert(Candidate {
                            term,
                            rank: position as u32 + 1,
                        });
                    }
                }
                Err(e) => {
                    tracing::warn!("Suggestion fetch failed for seed '{}': {}", seed, e);
                }
            }
        }

        pool
    }

    /// One metrics call per chunk of pool terms, in pool order. Metrics are
    /// joined back to candidates on the normalized key; unmatched metrics and
    /// candidates without metrics are dropped.
    async fn enrich(&self, pool: &CandidatePool) -> Vec<RankedResult> {
        let terms = pool.terms();
        let mut scored = Vec::new();

        for chunk in terms.chunks(self.chunk_size) {
            self.gate.wait().await;
            let metrics = match self.metrics.metrics(chunk).await {
                Ok(metrics) => metrics,
                Err(e) => {
                    tracing::warn!("Metrics fetch failed for chunk of {}: {}", chunk.len(), e);
                    continue;
                }
            };

            for metric in metrics {
                let Some(candidate) = pool.get(&normalize(&metric.term)) else {
                    continue;
                };
                scored.push(RankedResult {
                    score: composite_score(metric.volume, metric.competition, candidate.rank),
                    keyword: metric.term,
                    rank: candidate.rank,
                    volume: metric.volume,
                    competition: metric.competition,
                });
            }
        }

        scored
    }
}
