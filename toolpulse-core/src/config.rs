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

//! Tuning knobs for the analytics and recommendation engines.
//!
//! The thresholds and confidence weights are product heuristics, not
//! algorithmic invariants, so they live in config structs rather than in
//! the engine code.

use serde::{Deserialize, Serialize};

/// Thresholds used to classify trending behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Trending score above which a tool counts toward the growth rate.
    pub high_trending: f64,
    /// Mean category trending score above which the category trends up.
    pub trend_up: f64,
    /// Mean category trending score below which the category trends down.
    pub trend_down: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            high_trending: 80.0,
            trend_up: 85.0,
            trend_down: 70.0,
        }
    }
}

/// Selection counts and confidence weights for the recommendation engine.
///
/// Confidences are fixed self-reported certainty weights, not derived
/// statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Tools picked per preferred category in personalized mode.
    pub picks_per_category: usize,
    /// Tools picked outside the preferred categories for discovery.
    pub discovery_picks: usize,
    /// Categories sampled in cold-start mode.
    pub cold_start_categories: usize,
    /// Overall top-trending tools appended in cold-start mode.
    pub top_trending_picks: usize,
    pub personalized_confidence: f64,
    pub discovery_confidence: f64,
    pub popular_confidence: f64,
    pub top_trending_confidence: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            picks_per_category: 2,
            discovery_picks: 2,
            cold_start_categories: 3,
            top_trending_picks: 3,
            personalized_confidence: 0.9,
            discovery_confidence: 0.7,
            popular_confidence: 0.8,
            top_trending_confidence: 0.85,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = TrendThresholds::default();
        assert_eq!(thresholds.high_trending, 80.0);
        assert_eq!(thresholds.trend_up, 85.0);
        assert_eq!(thresholds.trend_down, 70.0);
    }

    #[test]
    fn test_default_recommender_config() {
        let config = RecommenderConfig::default();
        assert_eq!(config.picks_per_category, 2);
        assert_eq!(config.cold_start_categories, 3);
        assert!(config.personalized_confidence > config.discovery_confidence);
    }
}
