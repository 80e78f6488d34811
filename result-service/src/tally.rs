//! Tally computation
//!
//! Pure full-scan grouping over a vote snapshot. Candidates with zero votes
//! are absent from the output; for a fixed snapshot the result is exactly
//! reproducible.

use std::collections::BTreeMap;

use crate::feed::VoteDto;

/// Group the vote set by candidate and count rows per group.
pub fn compute_tallies(votes: &[VoteDto]) -> BTreeMap<i64, i64> {
    let mut tallies = BTreeMap::new();
    for vote in votes {
        *tallies.entry(vote.candidate_id).or_insert(0) += 1;
    }
    tallies
}

/// Share of the overall vote, in percent. A zero overall count yields 0.0,
/// not NaN.
pub fn percentage(total_votes: i64, overall_votes: i64) -> f64 {
    if overall_votes == 0 {
        0.0
    } else {
        total_votes as f64 * 100.0 / overall_votes as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(id_vote: i64, elector_id: i64, candidate_id: i64) -> VoteDto {
        VoteDto {
            id_vote,
            elector_id,
            candidate_id,
            cast_at: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn empty_snapshot_yields_empty_tally() {
        assert!(compute_tallies(&[]).is_empty());
    }

    #[test]
    fn groups_votes_by_candidate() {
        let votes = vec![vote(1, 1, 1), vote(2, 2, 1), vote(3, 3, 2)];

        let tallies = compute_tallies(&votes);

        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[&1], 2);
        assert_eq!(tallies[&2], 1);
    }

    #[test]
    fn tally_sum_matches_vote_count() {
        let votes: Vec<VoteDto> = (0..17).map(|i| vote(i, i, i % 5)).collect();

        let tallies = compute_tallies(&votes);

        let total: i64 = tallies.values().sum();
        assert_eq!(total, votes.len() as i64);
        assert!(tallies.values().all(|&count| count > 0));
    }

    #[test]
    fn percentage_of_zero_overall_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let votes = vec![vote(1, 1, 1), vote(2, 2, 1), vote(3, 3, 2)];

        let tallies = compute_tallies(&votes);
        let overall: i64 = tallies.values().sum();
        let sum: f64 = tallies
            .values()
            .map(|&count| percentage(count, overall))
            .sum();

        assert!((sum - 100.0).abs() < 1e-9);
    }
}
