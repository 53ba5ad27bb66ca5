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

//! Personalized and cold-start tool recommendations.
//!
//! Personalization is a single-user category-affinity heuristic over the
//! user's recorded interactions, not a trained model. Both modes are pure
//! functions over the snapshot and are deterministic: trending-score ties
//! are broken by original collection order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use toolpulse_core::{InteractionRecord, RecommenderConfig, ToolCategory, ToolRecord};
use tracing::debug;

/// A tool decorated with the reason it was recommended and a fixed
/// confidence weight in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub tool: ToolRecord,
    pub reason: String,
    pub confidence: f64,
}

/// Category preferences inferred from a user's interaction history.
///
/// Categories are ranked by occurrence count descending; ties keep the
/// order in which a category first appeared in the interaction sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAffinity {
    ranked: Vec<(ToolCategory, usize)>,
}

impl CategoryAffinity {
    pub fn from_interactions(interactions: &[InteractionRecord]) -> Self {
        let mut ranked: Vec<(ToolCategory, usize)> = Vec::new();
        for interaction in interactions {
            match ranked.iter_mut().find(|(c, _)| *c == interaction.category) {
                Some((_, count)) => *count += 1,
                None => ranked.push((interaction.category, 1)),
            }
        }
        // Stable sort: equal counts keep first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        Self { ranked }
    }

    /// Preferred categories, most frequent first.
    pub fn categories(&self) -> impl Iterator<Item = ToolCategory> + '_ {
        self.ranked.iter().map(|(c, _)| *c)
    }

    pub fn contains(&self, category: ToolCategory) -> bool {
        self.ranked.iter().any(|(c, _)| *c == category)
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Which recommendation algorithm applies for a given history.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationMode {
    Personalized(CategoryAffinity),
    ColdStart,
}

impl RecommendationMode {
    pub fn from_interactions(interactions: &[InteractionRecord]) -> Self {
        let affinity = CategoryAffinity::from_interactions(interactions);
        if affinity.is_empty() {
            RecommendationMode::ColdStart
        } else {
            RecommendationMode::Personalized(affinity)
        }
    }
}

/// Produce at most `limit` recommendations with the default configuration.
pub fn recommend(
    tools: &[ToolRecord],
    interactions: &[InteractionRecord],
    limit: usize,
) -> Vec<RecommendationItem> {
    recommend_with(tools, interactions, limit, &RecommenderConfig::default())
}

/// Produce at most `limit` recommendations.
///
/// With interactions present, picks from the user's preferred categories
/// come first, followed by discovery picks from outside them. Without
/// interactions, falls back to per-category and overall trending picks.
pub fn recommend_with(
    tools: &[ToolRecord],
    interactions: &[InteractionRecord],
    limit: usize,
    config: &RecommenderConfig,
) -> Vec<RecommendationItem> {
    let mode = RecommendationMode::from_interactions(interactions);
    let personalized_mode = matches!(mode, RecommendationMode::Personalized(_));
    let mut items = match mode {
        RecommendationMode::Personalized(affinity) => personalized(tools, &affinity, config),
        RecommendationMode::ColdStart => cold_start(tools, config),
    };
    items.truncate(limit);

    debug!(
        snapshot = tools.len(),
        personalized = personalized_mode,
        returned = items.len(),
        limit,
        "generated recommendations"
    );
    items
}

fn personalized(
    tools: &[ToolRecord],
    affinity: &CategoryAffinity,
    config: &RecommenderConfig,
) -> Vec<RecommendationItem> {
    let mut items = Vec::new();

    for category in affinity.categories() {
        let picks = top_by_trending(
            tools.iter().filter(|t| t.category == category),
            config.picks_per_category,
        );
        for tool in picks {
            items.push(RecommendationItem {
                tool: tool.clone(),
                reason: format!("Based on your interest in {}", category),
                confidence: config.personalized_confidence,
            });
        }
    }

    // Discovery: trending tools outside the preferred categories.
    let discoveries = top_by_trending(
        tools.iter().filter(|t| !affinity.contains(t.category)),
        config.discovery_picks,
    );
    for tool in discoveries {
        items.push(RecommendationItem {
            tool: tool.clone(),
            reason: "Trending in the community".to_string(),
            confidence: config.discovery_confidence,
        });
    }

    items
}

fn cold_start(tools: &[ToolRecord], config: &RecommenderConfig) -> Vec<RecommendationItem> {
    let mut items: Vec<RecommendationItem> = Vec::new();

    for category in distinct_categories(tools)
        .into_iter()
        .take(config.cold_start_categories)
    {
        let top = top_by_trending(tools.iter().filter(|t| t.category == category), 1);
        if let Some(tool) = top.first() {
            items.push(RecommendationItem {
                tool: (*tool).clone(),
                reason: format!("Popular in {}", category),
                confidence: config.popular_confidence,
            });
        }
    }

    for tool in top_by_trending(tools.iter(), config.top_trending_picks) {
        if items.iter().any(|item| item.tool.tool_id == tool.tool_id) {
            continue;
        }
        items.push(RecommendationItem {
            tool: tool.clone(),
            reason: "Top trending tool".to_string(),
            confidence: config.top_trending_confidence,
        });
    }

    items
}

/// Up to `n` tools with the highest trending score, ties broken by the
/// order the tools appear in the snapshot.
fn top_by_trending<'a>(
    tools: impl Iterator<Item = &'a ToolRecord>,
    n: usize,
) -> Vec<&'a ToolRecord> {
    let mut candidates: Vec<&ToolRecord> = tools.collect();
    candidates.sort_by(|a, b| {
        b.trending_score
            .partial_cmp(&a.trending_score)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(n);
    candidates
}

/// Distinct categories in first-seen order.
fn distinct_categories(tools: &[ToolRecord]) -> Vec<ToolCategory> {
    let mut categories = Vec::new();
    for tool in tools {
        if !categories.contains(&tool.category) {
            categories.push(tool.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use toolpulse_core::PricingTier;

    fn tool(id: &str, category: ToolCategory, trending_score: f64) -> ToolRecord {
        ToolRecord {
            tool_id: id.to_string(),
            name: id.to_string(),
            category,
            description: String::new(),
            tags: String::new(),
            pricing: PricingTier::Freemium,
            avg_rating: 4.5,
            tests_count: 0,
            views_count: 0,
            review_count: 0,
            trending_score,
            website_url: None,
            last_updated: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn catalog() -> Vec<ToolRecord> {
        vec![
            tool("text-a", ToolCategory::TextGeneration, 98.5),
            tool("text-b", ToolCategory::TextGeneration, 89.4),
            tool("text-c", ToolCategory::TextGeneration, 40.0),
            tool("image-a", ToolCategory::ImageCreation, 95.2),
            tool("image-b", ToolCategory::ImageCreation, 85.7),
            tool("image-c", ToolCategory::ImageCreation, 30.0),
        ]
    }

    #[test]
    fn test_personalized_prefers_interacted_category() {
        let tools = catalog();
        let interactions = vec![InteractionRecord::new("u1", ToolCategory::TextGeneration)];

        let items = recommend(&tools, &interactions, 6);

        assert_eq!(items[0].tool.tool_id, "text-a");
        assert_eq!(items[1].tool.tool_id, "text-b");
        for item in &items[..2] {
            assert_eq!(item.reason, "Based on your interest in Text Generation");
            assert_eq!(item.confidence, 0.9);
        }

        // Discovery picks come from the non-preferred category, best first.
        assert_eq!(items[2].tool.tool_id, "image-a");
        assert_eq!(items[2].reason, "Trending in the community");
        assert_eq!(items[2].confidence, 0.7);
        assert_eq!(items[3].tool.tool_id, "image-b");
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_affinity_ranked_by_frequency_then_first_seen() {
        let interactions = vec![
            InteractionRecord::new("u1", ToolCategory::ImageCreation),
            InteractionRecord::new("u1", ToolCategory::TextGeneration),
            InteractionRecord::new("u1", ToolCategory::TextGeneration),
            InteractionRecord::new("u1", ToolCategory::CodeAssistant),
        ];

        let affinity = CategoryAffinity::from_interactions(&interactions);
        let ranked: Vec<ToolCategory> = affinity.categories().collect();
        assert_eq!(
            ranked,
            vec![
                ToolCategory::TextGeneration,
                ToolCategory::ImageCreation,
                ToolCategory::CodeAssistant,
            ]
        );
    }

    #[test]
    fn test_cold_start_covers_categories_then_top_trending() {
        let tools = catalog();
        let items = recommend(&tools, &[], 10);

        // One pick per first-seen category.
        assert_eq!(items[0].tool.tool_id, "text-a");
        assert_eq!(items[0].reason, "Popular in Text Generation");
        assert_eq!(items[0].confidence, 0.8);
        assert_eq!(items[1].tool.tool_id, "image-a");
        assert_eq!(items[1].reason, "Popular in Image Creation");

        // Overall top trending, deduplicated: text-a and image-a already
        // present, so only text-b remains of the top three.
        assert_eq!(items[2].tool.tool_id, "text-b");
        assert_eq!(items[2].reason, "Top trending tool");
        assert_eq!(items[2].confidence, 0.85);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_limit_bounds_output() {
        let tools = catalog();
        let interactions = vec![InteractionRecord::new("u1", ToolCategory::TextGeneration)];

        assert_eq!(recommend(&tools, &interactions, 1).len(), 1);
        assert!(recommend(&tools, &interactions, 0).is_empty());
        assert!(recommend(&[], &interactions, 5).is_empty());
    }

    #[test]
    fn test_sparse_category_contributes_fewer_picks() {
        let tools = vec![
            tool("only-text", ToolCategory::TextGeneration, 75.0),
            tool("image-a", ToolCategory::ImageCreation, 95.2),
        ];
        let interactions = vec![InteractionRecord::new("u1", ToolCategory::TextGeneration)];

        let items = recommend(&tools, &interactions, 6);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].tool.tool_id, "only-text");
        assert_eq!(items[1].tool.tool_id, "image-a");
    }

    #[test]
    fn test_trending_ties_keep_collection_order() {
        let tools = vec![
            tool("first", ToolCategory::Chatbots, 90.0),
            tool("second", ToolCategory::Chatbots, 90.0),
            tool("third", ToolCategory::Chatbots, 90.0),
        ];

        let items = recommend(&tools, &[], 10);
        assert_eq!(items[0].tool.tool_id, "first");
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let tools = catalog();
        let interactions = vec![InteractionRecord::new("u1", ToolCategory::ImageCreation)];

        let first = recommend(&tools, &interactions, 6);
        let second = recommend(&tools, &interactions, 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(
            RecommendationMode::from_interactions(&[]),
            RecommendationMode::ColdStart
        );
        let interactions = vec![InteractionRecord::new("u1", ToolCategory::Chatbots)];
        assert!(matches!(
            RecommendationMode::from_interactions(&interactions),
            RecommendationMode::Personalized(_)
        ));
    }
}
