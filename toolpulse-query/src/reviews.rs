// Copyright 2025 Toolpulse (https://github.com/toolpulse)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Review statistics.
//!
//! Pure aggregation over fetched review snapshots: star distributions,
//! running rating averages and review ordering. Review submission and
//! persistence stay with the external store.

use serde::{Deserialize, Serialize};
use toolpulse_core::{Result, ReviewRecord, ToolpulseError};

/// Review count per star bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDistribution {
    counts: [u64; 5],
}

impl RatingDistribution {
    /// Count reviews into star buckets. Out-of-range ratings are dropped.
    pub fn from_reviews(reviews: &[ReviewRecord]) -> Self {
        let mut distribution = Self::default();
        for review in reviews {
            if review.validate().is_ok() {
                distribution.counts[(review.rating - 1) as usize] += 1;
            }
        }
        distribution
    }

    /// Number of reviews with the given star rating (1..=5).
    pub fn count(&self, star: u8) -> u64 {
        match star {
            1..=5 => self.counts[(star - 1) as usize],
            _ => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of reviews at the given star rating, as a percentage.
    pub fn percentage(&self, star: u8) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(star) as f64 / total as f64 * 100.0
        }
    }

    fn bump(&mut self, star: u8) {
        self.counts[(star - 1) as usize] += 1;
    }
}

/// Running rating aggregate for one tool.
///
/// Mirrors how the store maintains its per-tool rating row: the average
/// is merged incrementally and rounded to one decimal place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub average: f64,
    pub count: u64,
    pub distribution: RatingDistribution,
}

impl RatingAggregate {
    pub fn new(average: f64, count: u64, distribution: RatingDistribution) -> Self {
        Self {
            average,
            count,
            distribution,
        }
    }

    /// Fold one new star rating into the aggregate.
    pub fn record(&mut self, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(ToolpulseError::InvalidRating(rating));
        }

        let merged =
            (self.average * self.count as f64 + rating as f64) / (self.count + 1) as f64;
        self.average = (merged * 10.0).round() / 10.0;
        self.count += 1;
        self.distribution.bump(rating);
        Ok(())
    }
}

/// Ordering applied to a review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSort {
    Newest,
    MostHelpful,
    HighestRated,
}

/// Rank reviews for display. The sort is stable.
pub fn rank_reviews(reviews: &[ReviewRecord], sort: ReviewSort) -> Vec<ReviewRecord> {
    let mut ranked = reviews.to_vec();
    match sort {
        ReviewSort::Newest => ranked.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ReviewSort::MostHelpful => ranked.sort_by(|a, b| b.helpful_votes.cmp(&a.helpful_votes)),
        ReviewSort::HighestRated => ranked.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn review(rating: u8, helpful_votes: u64, days_ago: i64) -> ReviewRecord {
        ReviewRecord {
            tool_name: "ChatGPT-4".to_string(),
            rating,
            review_text: String::new(),
            reviewer_name: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap()
                - Duration::days(days_ago),
            helpful_votes,
            verified: true,
            pros: vec![],
            cons: vec![],
        }
    }

    #[test]
    fn test_distribution_from_reviews() {
        let reviews = vec![review(5, 0, 0), review(5, 0, 1), review(4, 0, 2), review(1, 0, 3)];
        let distribution = RatingDistribution::from_reviews(&reviews);

        assert_eq!(distribution.count(5), 2);
        assert_eq!(distribution.count(4), 1);
        assert_eq!(distribution.count(1), 1);
        assert_eq!(distribution.total(), 4);
        assert!((distribution.percentage(5) - 50.0).abs() < 1e-9);
        assert_eq!(distribution.percentage(3), 0.0);
    }

    #[test]
    fn test_distribution_drops_invalid_ratings() {
        let reviews = vec![review(5, 0, 0), review(0, 0, 1), review(9, 0, 2)];
        let distribution = RatingDistribution::from_reviews(&reviews);
        assert_eq!(distribution.total(), 1);
    }

    #[test]
    fn test_aggregate_running_average() {
        let mut aggregate = RatingAggregate::new(4.5, 156, RatingDistribution::default());
        aggregate.record(5).unwrap();

        // (4.5 * 156 + 5) / 157 = 4.503..., rounded to one decimal.
        assert_eq!(aggregate.average, 4.5);
        assert_eq!(aggregate.count, 157);
        assert_eq!(aggregate.distribution.count(5), 1);
    }

    #[test]
    fn test_aggregate_from_empty() {
        let mut aggregate = RatingAggregate::default();
        aggregate.record(4).unwrap();
        assert_eq!(aggregate.average, 4.0);
        assert_eq!(aggregate.count, 1);

        aggregate.record(5).unwrap();
        assert_eq!(aggregate.average, 4.5);
    }

    #[test]
    fn test_aggregate_rejects_invalid_rating() {
        let mut aggregate = RatingAggregate::default();
        assert!(aggregate.record(0).is_err());
        assert!(aggregate.record(6).is_err());
        assert_eq!(aggregate.count, 0);
    }

    #[test]
    fn test_rank_reviews_by_each_key() {
        let reviews = vec![review(3, 8, 5), review(5, 2, 1), review(4, 15, 3)];

        let newest = rank_reviews(&reviews, ReviewSort::Newest);
        assert_eq!(newest[0].rating, 5);

        let helpful = rank_reviews(&reviews, ReviewSort::MostHelpful);
        assert_eq!(helpful[0].helpful_votes, 15);

        let rated = rank_reviews(&reviews, ReviewSort::HighestRated);
        assert_eq!(rated[0].rating, 5);
    }
}
