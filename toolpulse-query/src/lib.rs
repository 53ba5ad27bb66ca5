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

//! Toolpulse Query Engines
//!
//! Pure, deterministic ranking over tool snapshots: multi-criteria
//! filter/sort, category-affinity recommendations and derived analytics.
//! Every entry point borrows its snapshot, performs no I/O and holds no
//! state between calls; callers re-fetch through the store adapter when
//! the underlying data changes.

pub mod analytics;
pub mod leaderboard;
pub mod recommend;
pub mod reviews;
pub mod search;

pub use analytics::{summarize, summarize_with, AnalyticsSummary, CategoryStats, GrowthTrend};
pub use leaderboard::{rank, LeaderboardTab};
pub use recommend::{
    recommend, recommend_with, CategoryAffinity, RecommendationItem, RecommendationMode,
};
pub use reviews::{rank_reviews, RatingAggregate, RatingDistribution, ReviewSort};
pub use search::{search, sort_tools, ClosedRange, FilterSpec, SortDirection, SortKey};
