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

//! Multi-criteria filter/sort over a tool snapshot.
//!
//! `search` is a pure function: filters are conjunctive, the sort is stable,
//! and the input slice is never mutated. Malformed input is handled by
//! defaulting, never by raising.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use toolpulse_query::search::{search, FilterSpec, SortKey};
//!
//! let spec = FilterSpec {
//!     query: "chat".to_string(),
//!     sort_key: SortKey::Rating,
//!     ..Default::default()
//! };
//! let results = search(&tools, &spec);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use toolpulse_core::{PricingTier, ToolCategory, ToolRecord};
use tracing::debug;

/// Inclusive range used by the numeric filters.
///
/// An inverted range (`lo > hi`) is an always-false predicate: `contains`
/// rejects every value, so the filtered result is empty by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosedRange<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: PartialOrd + Copy> ClosedRange<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// Sort key for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    TrendingScore,
    Rating,
    TestCount,
    ViewCount,
    Name,
}

/// Sort direction for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A user's current search intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Free-text query matched against name, description, category label
    /// and tags as a case-insensitive substring.
    #[serde(default)]
    pub query: String,

    /// Selected categories; empty means no restriction.
    #[serde(default)]
    pub categories: Vec<ToolCategory>,

    /// Selected pricing tiers; empty means no restriction.
    #[serde(default)]
    pub pricing: Vec<PricingTier>,

    #[serde(default = "default_rating_range")]
    pub rating_range: ClosedRange<f64>,

    #[serde(default = "default_trending_range")]
    pub trending_range: ClosedRange<f64>,

    #[serde(default = "default_test_count_range")]
    pub test_count_range: ClosedRange<u64>,

    #[serde(default = "default_sort_key")]
    pub sort_key: SortKey,

    #[serde(default = "default_sort_direction")]
    pub sort_direction: SortDirection,
}

fn default_rating_range() -> ClosedRange<f64> {
    ClosedRange::new(0.0, 5.0)
}

fn default_trending_range() -> ClosedRange<f64> {
    ClosedRange::new(0.0, 100.0)
}

fn default_test_count_range() -> ClosedRange<u64> {
    ClosedRange::new(0, u64::MAX)
}

fn default_sort_key() -> SortKey {
    SortKey::TrendingScore
}

fn default_sort_direction() -> SortDirection {
    SortDirection::Descending
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            query: String::new(),
            categories: Vec::new(),
            pricing: Vec::new(),
            rating_range: default_rating_range(),
            trending_range: default_trending_range(),
            test_count_range: default_test_count_range(),
            sort_key: default_sort_key(),
            sort_direction: default_sort_direction(),
        }
    }
}

impl FilterSpec {
    /// Check whether a record passes every active filter.
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let haystack_hit = tool.name.to_lowercase().contains(&query)
                || tool.description.to_lowercase().contains(&query)
                || tool.category.label().to_lowercase().contains(&query)
                || tool.tags.to_lowercase().contains(&query);
            if !haystack_hit {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&tool.category) {
            return false;
        }

        if !self.pricing.is_empty() && !self.pricing.contains(&tool.pricing) {
            return false;
        }

        self.rating_range.contains(tool.avg_rating)
            && self.trending_range.contains(tool.trending_score)
            && self.test_count_range.contains(tool.tests_count)
    }

    /// Whether any filter beyond the defaults is in effect.
    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0 || !self.query.trim().is_empty()
    }

    /// Number of active filter groups, for presentation badges.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.categories.is_empty() {
            count += 1;
        }
        if !self.pricing.is_empty() {
            count += 1;
        }
        if self.rating_range != default_rating_range() {
            count += 1;
        }
        if self.trending_range != default_trending_range() {
            count += 1;
        }
        if self.test_count_range != default_test_count_range() {
            count += 1;
        }
        count
    }
}

/// Filter and rank a tool snapshot.
///
/// Filters are conjunctive; the sort is stable, so records with equal
/// sort-key values keep their relative input order.
pub fn search(tools: &[ToolRecord], spec: &FilterSpec) -> Vec<ToolRecord> {
    let mut results: Vec<ToolRecord> = tools
        .iter()
        .filter(|tool| spec.matches(tool))
        .cloned()
        .collect();

    sort_tools(&mut results, spec.sort_key, spec.sort_direction);

    debug!(
        snapshot = tools.len(),
        matched = results.len(),
        active_filters = spec.active_filter_count(),
        "search filtered snapshot"
    );
    results
}

/// Stable in-place sort by the given key and direction.
pub fn sort_tools(tools: &mut [ToolRecord], key: SortKey, direction: SortDirection) {
    tools.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_by_key(a: &ToolRecord, b: &ToolRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::TrendingScore => compare_f64(a.trending_score, b.trending_score),
        SortKey::Rating => compare_f64(a.avg_rating, b.avg_rating),
        SortKey::TestCount => a.tests_count.cmp(&b.tests_count),
        SortKey::ViewCount => a.views_count.cmp(&b.views_count),
        // Case-folded lexicographic comparison for the string key.
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
