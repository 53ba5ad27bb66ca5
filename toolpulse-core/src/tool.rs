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

//! Catalogued AI tool records.
//!
//! `ToolRecord` is the unit the engines operate on. Records are created and
//! updated exclusively by the remote store; within one engine call they are
//! immutable snapshots.

use crate::error::{Result, ToolpulseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of tool categories served by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    #[serde(rename = "Text Generation")]
    TextGeneration,
    #[serde(rename = "Image Creation")]
    ImageCreation,
    #[serde(rename = "Code Assistant")]
    CodeAssistant,
    #[serde(rename = "Data Analysis")]
    DataAnalysis,
    #[serde(rename = "Audio Processing")]
    AudioProcessing,
    #[serde(rename = "Video Editing")]
    VideoEditing,
    #[serde(rename = "Chatbots")]
    Chatbots,
    #[serde(rename = "Translation")]
    Translation,
    #[serde(rename = "Content Writing")]
    ContentWriting,
}

impl ToolCategory {
    /// All categories in display order.
    pub const ALL: [ToolCategory; 9] = [
        ToolCategory::TextGeneration,
        ToolCategory::ImageCreation,
        ToolCategory::CodeAssistant,
        ToolCategory::DataAnalysis,
        ToolCategory::AudioProcessing,
        ToolCategory::VideoEditing,
        ToolCategory::Chatbots,
        ToolCategory::Translation,
        ToolCategory::ContentWriting,
    ];

    /// Human-readable label, as stored in the remote table.
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::TextGeneration => "Text Generation",
            ToolCategory::ImageCreation => "Image Creation",
            ToolCategory::CodeAssistant => "Code Assistant",
            ToolCategory::DataAnalysis => "Data Analysis",
            ToolCategory::AudioProcessing => "Audio Processing",
            ToolCategory::VideoEditing => "Video Editing",
            ToolCategory::Chatbots => "Chatbots",
            ToolCategory::Translation => "Translation",
            ToolCategory::ContentWriting => "Content Writing",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToolCategory {
    type Err = ToolpulseError;

    fn from_str(s: &str) -> Result<Self> {
        ToolCategory::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolpulseError::UnknownCategory(s.to_string()))
    }
}

/// Pricing tier of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingTier {
    Free,
    Freemium,
    Paid,
    Enterprise,
}

impl PricingTier {
    /// All tiers in display order.
    pub const ALL: [PricingTier; 4] = [
        PricingTier::Free,
        PricingTier::Freemium,
        PricingTier::Paid,
        PricingTier::Enterprise,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PricingTier::Free => "Free",
            PricingTier::Freemium => "Freemium",
            PricingTier::Paid => "Paid",
            PricingTier::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PricingTier {
    type Err = ToolpulseError;

    fn from_str(s: &str) -> Result<Self> {
        PricingTier::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolpulseError::UnknownPricingTier(s.to_string()))
    }
}

/// One catalogued AI tool.
///
/// Numeric fields default to zero when the remote row omits them, so a
/// sparse row still deserializes into a usable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Stable identifier assigned by the store.
    pub tool_id: String,
    /// Display name.
    #[serde(rename = "tool_name")]
    pub name: String,
    pub category: ToolCategory,
    #[serde(default)]
    pub description: String,
    /// Comma-separated keywords.
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "pricing_model")]
    pub pricing: PricingTier,
    /// Mean review rating, 0.0..=5.0.
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub tests_count: u64,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub review_count: u64,
    /// Popularity momentum, 0.0..=100.0, recomputed by the store.
    #[serde(default)]
    pub trending_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl ToolRecord {
    /// Check the record invariants: rating in [0,5], trending score in
    /// [0,100]. Counts are unsigned and need no check.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=5.0).contains(&self.avg_rating) {
            return Err(ToolpulseError::InvalidRecord(format!(
                "{}: avg_rating {} outside [0,5]",
                self.tool_id, self.avg_rating
            )));
        }
        if !(0.0..=100.0).contains(&self.trending_score) {
            return Err(ToolpulseError::InvalidRecord(format!(
                "{}: trending_score {} outside [0,100]",
                self.tool_id, self.trending_score
            )));
        }
        Ok(())
    }

    /// Tags split on commas, trimmed, empty entries dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ToolRecord {
        ToolRecord {
            tool_id: "chatgpt-4".to_string(),
            name: "ChatGPT-4".to_string(),
            category: ToolCategory::TextGeneration,
            description: "Advanced conversational AI".to_string(),
            tags: "conversation, writing,analysis,".to_string(),
            pricing: PricingTier::Freemium,
            avg_rating: 4.8,
            tests_count: 3240,
            views_count: 15420,
            review_count: 892,
            trending_score: 98.5,
            website_url: Some("https://openai.com/chatgpt".to_string()),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_category_round_trip() {
        for category in ToolCategory::ALL {
            let parsed: ToolCategory = category.label().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("Quantum Computing".parse::<ToolCategory>().is_err());
    }

    #[test]
    fn test_pricing_parse_case_insensitive() {
        assert_eq!("freemium".parse::<PricingTier>().unwrap(), PricingTier::Freemium);
        assert!("Donationware".parse::<PricingTier>().is_err());
    }

    #[test]
    fn test_validate_bounds() {
        let mut tool = record();
        assert!(tool.validate().is_ok());

        tool.avg_rating = 5.1;
        assert!(tool.validate().is_err());

        tool.avg_rating = 4.8;
        tool.trending_score = -0.5;
        assert!(tool.validate().is_err());
    }

    #[test]
    fn test_tag_list_trims_and_drops_empty() {
        let tool = record();
        assert_eq!(tool.tag_list(), vec!["conversation", "writing", "analysis"]);
    }

    #[test]
    fn test_sparse_row_deserializes_with_zeros() {
        let json = r#"{
            "tool_id": "bare",
            "tool_name": "Bare",
            "category": "Chatbots",
            "pricing_model": "Free",
            "last_updated": "2025-06-01T00:00:00Z"
        }"#;
        let tool: ToolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(tool.avg_rating, 0.0);
        assert_eq!(tool.views_count, 0);
        assert_eq!(tool.trending_score, 0.0);
        assert!(tool.tags.is_empty());
        assert!(tool.website_url.is_none());
    }
}
