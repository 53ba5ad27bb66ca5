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

//! Fixed leaderboard rankings for the directory's browse tabs.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use toolpulse_core::ToolRecord;

/// One of the directory's browse tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardTab {
    Trending,
    MostViewed,
    TopRated,
    RecentlyUpdated,
}

/// Rank a snapshot for a browse tab, best first. The sort is stable.
pub fn rank(tools: &[ToolRecord], tab: LeaderboardTab) -> Vec<ToolRecord> {
    let mut ranked = tools.to_vec();
    match tab {
        LeaderboardTab::Trending => ranked.sort_by(|a, b| compare_f64(b.trending_score, a.trending_score)),
        LeaderboardTab::MostViewed => ranked.sort_by(|a, b| b.views_count.cmp(&a.views_count)),
        LeaderboardTab::TopRated => ranked.sort_by(|a, b| compare_f64(b.avg_rating, a.avg_rating)),
        LeaderboardTab::RecentlyUpdated => ranked.sort_by(|a, b| b.last_updated.cmp(&a.last_updated)),
    }
    ranked
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use toolpulse_core::{PricingTier, ToolCategory};

    fn tool(id: &str, trending: f64, views: u64, rating: f64, day: u32) -> ToolRecord {
        ToolRecord {
            tool_id: id.to_string(),
            name: id.to_string(),
            category: ToolCategory::Chatbots,
            description: String::new(),
            tags: String::new(),
            pricing: PricingTier::Free,
            avg_rating: rating,
            tests_count: 0,
            views_count: views,
            review_count: 0,
            trending_score: trending,
            website_url: None,
            last_updated: Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_each_tab_ranks_by_its_key() {
        let tools = vec![
            tool("a", 90.0, 10, 3.0, 1),
            tool("b", 50.0, 500, 5.0, 2),
            tool("c", 70.0, 100, 4.0, 28),
        ];

        assert_eq!(rank(&tools, LeaderboardTab::Trending)[0].tool_id, "a");
        assert_eq!(rank(&tools, LeaderboardTab::MostViewed)[0].tool_id, "b");
        assert_eq!(rank(&tools, LeaderboardTab::TopRated)[0].tool_id, "b");
        assert_eq!(rank(&tools, LeaderboardTab::RecentlyUpdated)[0].tool_id, "c");
    }

    #[test]
    fn test_rank_does_not_drop_or_duplicate() {
        let tools = vec![tool("a", 1.0, 1, 1.0, 1), tool("b", 1.0, 1, 1.0, 1)];
        let ranked = rank(&tools, LeaderboardTab::Trending);
        assert_eq!(ranked.len(), 2);
        // Ties keep input order.
        assert_eq!(ranked[0].tool_id, "a");
    }
}
