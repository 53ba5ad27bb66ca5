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

//! Derived directory analytics.
//!
//! Global and per-category aggregates over a tool snapshot. All means are
//! zero for an empty input; no aggregate ever divides by zero.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use toolpulse_core::{ToolCategory, ToolRecord, TrendThresholds};

/// Qualitative growth classification of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthTrend {
    Up,
    Down,
    Stable,
}

/// Aggregates for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: ToolCategory,
    pub tool_count: u64,
    pub avg_rating: f64,
    pub total_views: u64,
    pub avg_trending: f64,
    pub growth_trend: GrowthTrend,
}

/// Directory-wide aggregates plus the per-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_tools: u64,
    pub total_views: u64,
    pub total_tests: u64,
    pub total_reviews: u64,
    pub avg_rating: f64,
    /// Category with the most tools; `None` for an empty snapshot.
    pub top_category: Option<ToolCategory>,
    /// Share of tools trending above the high-trending threshold, as a
    /// percentage in [0,100].
    pub growth_rate: f64,
    /// Per-category breakdown, sorted by total views descending.
    pub categories: Vec<CategoryStats>,
}

impl AnalyticsSummary {
    fn empty() -> Self {
        Self {
            total_tools: 0,
            total_views: 0,
            total_tests: 0,
            total_reviews: 0,
            avg_rating: 0.0,
            top_category: None,
            growth_rate: 0.0,
            categories: Vec::new(),
        }
    }
}

/// Summarize a snapshot with the default thresholds.
pub fn summarize(tools: &[ToolRecord]) -> AnalyticsSummary {
    summarize_with(tools, &TrendThresholds::default())
}

/// Summarize a snapshot.
pub fn summarize_with(tools: &[ToolRecord], thresholds: &TrendThresholds) -> AnalyticsSummary {
    if tools.is_empty() {
        return AnalyticsSummary::empty();
    }

    let total_views: u64 = tools.iter().map(|t| t.views_count).sum();
    let total_tests: u64 = tools.iter().map(|t| t.tests_count).sum();
    let total_reviews: u64 = tools.iter().map(|t| t.review_count).sum();
    let avg_rating = tools.iter().map(|t| t.avg_rating).sum::<f64>() / tools.len() as f64;

    let groups = group_by_category(tools);

    // Largest member count wins; ties keep the first-seen category.
    let top_category = groups
        .iter()
        .max_by(|a, b| match a.1.len().cmp(&b.1.len()) {
            // max_by returns the last maximum, so prefer the earlier group
            // by treating equal counts as "greater" for the left side.
            Ordering::Equal => Ordering::Greater,
            ordering => ordering,
        })
        .map(|(category, _)| *category);

    let high_trending = tools
        .iter()
        .filter(|t| t.trending_score > thresholds.high_trending)
        .count();
    let growth_rate = high_trending as f64 / tools.len() as f64 * 100.0;

    let mut categories: Vec<CategoryStats> = groups
        .into_iter()
        .map(|(category, members)| category_stats(category, &members, thresholds))
        .collect();
    categories.sort_by(|a, b| b.total_views.cmp(&a.total_views));

    AnalyticsSummary {
        total_tools: tools.len() as u64,
        total_views,
        total_tests,
        total_reviews,
        avg_rating,
        top_category,
        growth_rate,
        categories,
    }
}

fn category_stats(
    category: ToolCategory,
    members: &[&ToolRecord],
    thresholds: &TrendThresholds,
) -> CategoryStats {
    let count = members.len() as f64;
    let avg_rating = members.iter().map(|t| t.avg_rating).sum::<f64>() / count;
    let total_views = members.iter().map(|t| t.views_count).sum();
    let avg_trending = members.iter().map(|t| t.trending_score).sum::<f64>() / count;

    let growth_trend = if avg_trending > thresholds.trend_up {
        GrowthTrend::Up
    } else if avg_trending < thresholds.trend_down {
        GrowthTrend::Down
    } else {
        GrowthTrend::Stable
    };

    CategoryStats {
        category,
        tool_count: members.len() as u64,
        avg_rating,
        total_views,
        avg_trending,
        growth_trend,
    }
}

/// Group tools by category, preserving first-seen category order.
fn group_by_category(tools: &[ToolRecord]) -> Vec<(ToolCategory, Vec<&ToolRecord>)> {
    let mut groups: Vec<(ToolCategory, Vec<&ToolRecord>)> = Vec::new();
    for tool in tools {
        match groups.iter_mut().find(|(c, _)| *c == tool.category) {
            Some((_, members)) => members.push(tool),
            None => groups.push((tool.category, vec![tool])),
        }
    }
    groups
}
