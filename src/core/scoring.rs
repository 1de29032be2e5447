use crate::domain::model::{CompetitionLevel, RankedResult};
use std::collections::HashMap;

/// Composite ranking score: log-scaled volume, damped by competition, plus
/// discovery-rank bonuses. The bonuses are cumulative (a rank-1 term gets both
/// the rank-1 bonus and the top-tier bonus).
pub fn composite_score(volume: u64, competition: CompetitionLevel, rank: u32) -> i64 {
    let mut score = ((volume + 1) as f64).log10() * 20.0;

    score *= match competition {
        CompetitionLevel::High => 0.3,
        CompetitionLevel::Mid => 0.7,
        CompetitionLevel::Low => 1.0,
    };

    if rank == 0 {
        score += 10.0;
    }
    if rank == 1 {
        score += 20.0;
    }
    if rank <= 3 {
        score += 5.0;
    }

    score.round() as i64
}

/// Deduplicate by the literal keyword string, then stable-sort by score
/// descending.
///
/// Duplicates take the last-seen value at the first-seen position. Note the
/// key here is the keyword exactly as the metrics source spelled it, not the
/// normalized join key, so near-spellings that normalize identically can both
/// survive.
pub fn dedup_and_sort(results: Vec<RankedResult>) -> Vec<RankedResult> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<RankedResult> = Vec::new();

    for item in results {
        match position.get(&item.keyword) {
            Some(&index) => unique[index] = item,
            None => {
                position.insert(item.keyword.clone(), unique.len());
                unique.push(item);
            }
        }
    }

    unique.sort_by(|a, b| b.score.cmp(&a.score));
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(keyword: &str, score: i64) -> RankedResult {
        RankedResult {
            keyword: keyword.to_string(),
            rank: 5,
            volume: 100,
            competition: CompetitionLevel::Low,
            score,
        }
    }

    #[test]
    fn test_zero_volume_is_finite() {
        // log10(0 + 1) = 0, so only the rank bonuses remain.
        assert_eq!(composite_score(0, CompetitionLevel::Low, 0), 15);
        assert_eq!(composite_score(0, CompetitionLevel::Low, 10), 0);
    }

    #[test]
    fn test_score_monotone_in_volume() {
        let mut previous = i64::MIN;
        for volume in [0, 1, 9, 99, 999, 10_000, 1_000_000] {
            let score = composite_score(volume, CompetitionLevel::Mid, 5);
            assert!(
                score >= previous,
                "score dropped from {} to {} at volume {}",
                previous,
                score,
                volume
            );
            previous = score;
        }
    }

    #[test]
    fn test_competition_ordering() {
        for volume in [0, 100, 50_000] {
            let low = composite_score(volume, CompetitionLevel::Low, 2);
            let mid = composite_score(volume, CompetitionLevel::Mid, 2);
            let high = composite_score(volume, CompetitionLevel::High, 2);
            assert!(low >= mid, "LOW {} < MID {} at volume {}", low, mid, volume);
            assert!(mid >= high, "MID {} < HIGH {} at volume {}", mid, high, volume);
        }
    }

    #[test]
    fn test_seed_rank_bonus() {
        let seed = composite_score(1000, CompetitionLevel::Low, 0);
        let deep = composite_score(1000, CompetitionLevel::Low, 10);
        assert!(seed - deep >= 10);
    }

    #[test]
    fn test_rank_one_gets_cumulative_bonuses() {
        // rank 1: +20 (top suggestion) +5 (top tier); rank 4 and beyond: nothing.
        let top = composite_score(1000, CompetitionLevel::Low, 1);
        let deep = composite_score(1000, CompetitionLevel::Low, 4);
        assert_eq!(top - deep, 25);
    }

    #[test]
    fn test_known_score_values() {
        // log10(1001) * 20 ≈ 60.0087; +10 seed +5 top tier.
        assert_eq!(composite_score(1000, CompetitionLevel::Low, 0), 75);
        // log10(101) * 20 * 0.3 ≈ 12.03; +20 +5.
        assert_eq!(composite_score(100, CompetitionLevel::High, 1), 37);
    }

    #[test]
    fn test_dedup_last_write_wins_first_position() {
        let deduped = dedup_and_sort(vec![
            result("alpha", 50),
            result("beta", 50),
            result("alpha", 10),
        ]);

        assert_eq!(deduped.len(), 2);
        // "alpha" keeps its first-seen position but takes the later value, so
        // beta (50) now outranks it.
        assert_eq!(deduped[0].keyword, "beta");
        assert_eq!(deduped[1].keyword, "alpha");
        assert_eq!(deduped[1].score, 10);
    }

    #[test]
    fn test_sort_descending_stable_on_ties() {
        let sorted = dedup_and_sort(vec![
            result("first", 30),
            result("second", 70),
            result("third", 30),
        ]);

        assert_eq!(sorted[0].keyword, "second");
        assert_eq!(sorted[1].keyword, "first");
        assert_eq!(sorted[2].keyword, "third");
    }
}
