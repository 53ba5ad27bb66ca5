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

//! Sample catalog for demos and tests.

use chrono::{DateTime, TimeZone, Utc};
use toolpulse_core::{InteractionRecord, PricingTier, ReviewRecord, ToolCategory, ToolRecord};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn tool(
    tool_id: &str,
    name: &str,
    category: ToolCategory,
    description: &str,
    tags: &str,
    pricing: PricingTier,
    avg_rating: f64,
    tests_count: u64,
    views_count: u64,
    review_count: u64,
    trending_score: f64,
    website_url: &str,
    updated: u32,
) -> ToolRecord {
    ToolRecord {
        tool_id: tool_id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        tags: tags.to_string(),
        pricing,
        avg_rating,
        tests_count,
        views_count,
        review_count,
        trending_score,
        website_url: Some(website_url.to_string()),
        last_updated: day(updated),
    }
}

/// Six representative tools spanning three categories.
pub fn tools() -> Vec<ToolRecord> {
    vec![
        tool(
            "chatgpt-4",
            "ChatGPT-4",
            ToolCategory::TextGeneration,
            "Advanced conversational AI for text generation, analysis, and creative writing.",
            "conversation,writing,analysis,creative",
            PricingTier::Freemium,
            4.8,
            3240,
            15420,
            892,
            98.5,
            "https://openai.com/chatgpt",
            28,
        ),
        tool(
            "midjourney",
            "Midjourney",
            ToolCategory::ImageCreation,
            "Create stunning AI-generated artwork and images from text prompts.",
            "art,images,creative,design",
            PricingTier::Paid,
            4.7,
            2890,
            12800,
            654,
            95.2,
            "https://midjourney.com",
            25,
        ),
        tool(
            "github-copilot",
            "GitHub Copilot",
            ToolCategory::CodeAssistant,
            "AI-powered code completion and programming assistant.",
            "coding,development,programming,github",
            PricingTier::Paid,
            4.6,
            2156,
            9850,
            432,
            92.8,
            "https://github.com/features/copilot",
            22,
        ),
        tool(
            "claude-3",
            "Claude 3",
            ToolCategory::TextGeneration,
            "Anthropic's advanced AI assistant for complex reasoning and analysis.",
            "assistant,reasoning,analysis,anthropic",
            PricingTier::Freemium,
            4.7,
            1890,
            8560,
            298,
            89.4,
            "https://claude.ai",
            27,
        ),
        tool(
            "stable-diffusion",
            "Stable Diffusion",
            ToolCategory::ImageCreation,
            "Open-source AI model for generating images from text descriptions.",
            "opensource,images,generation,stable",
            PricingTier::Free,
            4.4,
            1654,
            7320,
            387,
            85.7,
            "https://stability.ai",
            18,
        ),
        tool(
            "cursor-ai",
            "Cursor",
            ToolCategory::CodeAssistant,
            "AI-powered code editor with intelligent autocomplete and refactoring.",
            "editor,IDE,coding,autocomplete",
            PricingTier::Freemium,
            4.5,
            1423,
            6890,
            234,
            82.3,
            "https://cursor.sh",
            20,
        ),
    ]
}

/// Interaction history for the sample user `demo-user`.
pub fn interactions() -> Vec<InteractionRecord> {
    vec![
        InteractionRecord::new("demo-user", ToolCategory::TextGeneration),
        InteractionRecord::new("demo-user", ToolCategory::TextGeneration),
        InteractionRecord::new("demo-user", ToolCategory::CodeAssistant),
    ]
}

/// A handful of reviews for the sample catalog.
pub fn reviews() -> Vec<ReviewRecord> {
    vec![
        ReviewRecord {
            tool_name: "ChatGPT-4".to_string(),
            rating: 5,
            review_text: "Absolutely incredible tool for productivity. I use it daily for \
                          coding, writing, and problem-solving."
                .to_string(),
            reviewer_name: "Alex Developer".to_string(),
            created_at: day(26),
            helpful_votes: 12,
            verified: true,
            pros: vec![
                "Fast responses".to_string(),
                "Great for coding".to_string(),
                "Versatile use cases".to_string(),
            ],
            cons: vec![
                "Can be verbose sometimes".to_string(),
                "Requires fact-checking".to_string(),
            ],
        },
        ReviewRecord {
            tool_name: "ChatGPT-4".to_string(),
            rating: 4,
            review_text: "Very useful for brainstorming and getting unstuck on problems."
                .to_string(),
            reviewer_name: "Sarah Writer".to_string(),
            created_at: day(23),
            helpful_votes: 8,
            verified: true,
            pros: vec![
                "Creative suggestions".to_string(),
                "Good explanations".to_string(),
            ],
            cons: vec!["Knowledge cutoff".to_string()],
        },
        ReviewRecord {
            tool_name: "Midjourney".to_string(),
            rating: 5,
            review_text: "The quality of images generated is simply stunning. Perfect for \
                          creative projects and concept art."
                .to_string(),
            reviewer_name: "Mike Artist".to_string(),
            created_at: day(27),
            helpful_votes: 15,
            verified: true,
            pros: vec![
                "Exceptional image quality".to_string(),
                "Active community".to_string(),
            ],
            cons: vec![
                "Discord-only interface".to_string(),
                "Learning curve".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_are_valid() {
        for tool in tools() {
            tool.validate().unwrap();
        }
        for review in reviews() {
            review.validate().unwrap();
        }
    }

    #[test]
    fn test_sample_reviews_reference_catalog_tools() {
        let names: Vec<String> = tools().into_iter().map(|t| t.name).collect();
        for review in reviews() {
            assert!(names.contains(&review.tool_name));
        }
    }
}
