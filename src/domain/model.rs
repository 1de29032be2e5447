use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Join key shared by both external sources: all whitespace stripped, lowercased.
pub fn normalize(term: &str) -> String {
    term.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompetitionLevel {
    Low,
    Mid,
    High,
}

impl CompetitionLevel {
    /// Map the metrics API's competition index string. The API labels either in
    /// English or Korean; anything unrecognized counts as low competition.
    pub fn from_label(label: &str) -> Self {
        match label {
            "HIGH" | "높음" => CompetitionLevel::High,
            "MID" | "중간" => CompetitionLevel::Mid,
            _ => CompetitionLevel::Low,
        }
    }
}

/// A term discovered via the suggestion source. Rank 0 is the seed itself,
/// 1..N the position in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub term: String,
    pub rank: u32,
}

/// Volume/competition data for one term, as returned by the metrics source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub term: String,
    pub volume: u64,
    pub competition: CompetitionLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub keyword: String,
    pub rank: u32,
    #[serde(rename = "vol")]
    pub volume: u64,
    #[serde(rename = "comp")]
    pub competition: CompetitionLevel,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: Vec<RankedResult>,
}

/// Candidates accumulated across all seeds, keyed by normalized term.
///
/// Keys keep their first-insertion position (the enricher chunks terms in pool
/// order), while the stored candidate for a key is the one with the lowest
/// discovery rank seen so far.
#[derive(Debug, Default)]
pub struct CandidatePool {
    entries: HashMap<String, Candidate>,
    order: Vec<String>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert if absent; replace only when the incoming rank is strictly lower.
    /// Ties keep the first-seen candidate.
    pub fn insert(&mut self, candidate: Candidate) {
        let key = normalize(&candidate.term);
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                if candidate.rank < occupied.get().rank {
                    occupied.insert(candidate);
                }
            }
            Entry::Vacant(vacant) => {
                self.order.push(vacant.key().clone());
                vacant.insert(candidate);
            }
        }
    }

    pub fn get(&self, normalized_key: &str) -> Option<&Candidate> {
        self.entries.get(normalized_key)
    }

    /// Original terms in first-insertion order.
    pub fn terms(&self) -> Vec<String> {
        self.order
            .iter()
            .map(|key| self.entries[key].term.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
