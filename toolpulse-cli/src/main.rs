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

//! Toolpulse CLI
//!
//! Thin presentation over the store adapter and the query engines: each
//! subcommand fetches a fresh snapshot, runs one engine and renders the
//! result. No state is kept between invocations.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use toolpulse_query::{
    rank, rank_reviews, recommend, search, summarize, ClosedRange, FilterSpec, LeaderboardTab,
    RatingDistribution, ReviewSort, SortDirection, SortKey,
};
use toolpulse_store::{MemoryStore, RemoteTableStore, StoreConfig, ToolStore, MAX_PAGE_SIZE};

#[derive(Parser)]
#[command(name = "toolpulse", about = "AI tool directory: search, recommendations, analytics")]
struct Cli {
    /// Path to a TOML store configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the built-in sample catalog instead of the remote store.
    #[arg(long, global = true)]
    offline: bool,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter and rank the tool catalog.
    Search {
        /// Free-text query over name, description, category and tags.
        query: Option<String>,

        /// Restrict to categories (repeatable), e.g. "Text Generation".
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Restrict to pricing tiers (repeatable), e.g. "Freemium".
        #[arg(long = "pricing")]
        pricing: Vec<String>,

        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,
        #[arg(long, default_value_t = 5.0)]
        max_rating: f64,

        #[arg(long, default_value_t = 0.0)]
        min_trending: f64,
        #[arg(long, default_value_t = 100.0)]
        max_trending: f64,

        #[arg(long)]
        min_tests: Option<u64>,
        #[arg(long)]
        max_tests: Option<u64>,

        #[arg(long, value_enum, default_value = "trending")]
        sort: SortArg,

        /// Sort ascending instead of descending.
        #[arg(long)]
        ascending: bool,
    },

    /// Recommend tools, personalized when a user is given.
    Recommend {
        /// User whose interaction history drives personalization.
        #[arg(long)]
        user: Option<String>,

        #[arg(long, default_value_t = 6)]
        limit: usize,
    },

    /// Directory-wide and per-category analytics.
    Analytics,

    /// Ranked browse tabs.
    Leaderboard {
        #[arg(long, value_enum, default_value = "trending")]
        tab: TabArg,
    },

    /// Reviews and rating distribution for one tool.
    Reviews {
        #[arg(long)]
        tool: String,

        #[arg(long, value_enum, default_value = "newest")]
        sort: ReviewSortArg,
    },

    /// Print the sample catalog as JSON for loading into a store.
    Seed,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Trending,
    Rating,
    Tests,
    Views,
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Trending => SortKey::TrendingScore,
            SortArg::Rating => SortKey::Rating,
            SortArg::Tests => SortKey::TestCount,
            SortArg::Views => SortKey::ViewCount,
            SortArg::Name => SortKey::Name,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TabArg {
    Trending,
    Viewed,
    Rated,
    Recent,
}

impl From<TabArg> for LeaderboardTab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Trending => LeaderboardTab::Trending,
            TabArg::Viewed => LeaderboardTab::MostViewed,
            TabArg::Rated => LeaderboardTab::TopRated,
            TabArg::Recent => LeaderboardTab::RecentlyUpdated,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReviewSortArg {
    Newest,
    Helpful,
    Rating,
}

impl From<ReviewSortArg> for ReviewSort {
    fn from(arg: ReviewSortArg) -> Self {
        match arg {
            ReviewSortArg::Newest => ReviewSort::Newest,
            ReviewSortArg::Helpful => ReviewSort::MostHelpful,
            ReviewSortArg::Rating => ReviewSort::HighestRated,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    let cli = Cli::parse();
    let store = build_store(&cli)?;

    match cli.command {
        Command::Search {
            ref query,
            ref categories,
            ref pricing,
            min_rating,
            max_rating,
            min_trending,
            max_trending,
            min_tests,
            max_tests,
            sort,
            ascending,
        } => {
            let spec = FilterSpec {
                query: query.clone().unwrap_or_default(),
                categories: categories
                    .iter()
                    .map(|c| c.parse())
                    .collect::<Result<_, _>>()?,
                pricing: pricing
                    .iter()
                    .map(|p| p.parse())
                    .collect::<Result<_, _>>()?,
                rating_range: ClosedRange::new(min_rating, max_rating),
                trending_range: ClosedRange::new(min_trending, max_trending),
                test_count_range: ClosedRange::new(
                    min_tests.unwrap_or(0),
                    max_tests.unwrap_or(u64::MAX),
                ),
                sort_key: sort.into(),
                sort_direction: if ascending {
                    SortDirection::Ascending
                } else {
                    SortDirection::Descending
                },
            };

            let tools = store.fetch_tools(MAX_PAGE_SIZE).await?;
            let results = search(&tools, &spec);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No tools found matching your criteria.");
            } else {
                for tool in &results {
                    println!(
                        "{:<20} {:<16} {:<10} rating {:.1}  trending {:.1}",
                        tool.name,
                        tool.category.to_string(),
                        tool.pricing.to_string(),
                        tool.avg_rating,
                        tool.trending_score
                    );
                }
            }
        }

        Command::Recommend { ref user, limit } => {
            let tools = store.fetch_tools(MAX_PAGE_SIZE).await?;
            let interactions = match user {
                Some(user_id) => store.fetch_interactions(user_id, MAX_PAGE_SIZE).await?,
                None => Vec::new(),
            };

            let items = recommend(&tools, &interactions, limit);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if items.is_empty() {
                println!("No recommendations yet. Start exploring AI tools!");
            } else {
                for item in &items {
                    println!(
                        "{:<20} {:<36} confidence {:.2}",
                        item.tool.name, item.reason, item.confidence
                    );
                }
            }
        }

        Command::Analytics => {
            let tools = store.fetch_tools(MAX_PAGE_SIZE).await?;
            let summary = summarize(&tools);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} tools, {} views, {} tests, {} reviews",
                    summary.total_tools, summary.total_views, summary.total_tests,
                    summary.total_reviews
                );
                println!(
                    "mean rating {:.1}, growth rate {:.1}%",
                    summary.avg_rating, summary.growth_rate
                );
                if let Some(top) = summary.top_category {
                    println!("top category: {top}");
                }
                for stats in &summary.categories {
                    println!(
                        "  {:<18} {:>2} tools  {:>9} views  rating {:.1}  {:?}",
                        stats.category.to_string(),
                        stats.tool_count,
                        stats.total_views,
                        stats.avg_rating,
                        stats.growth_trend
                    );
                }
            }
        }

        Command::Leaderboard { tab } => {
            let tools = store.fetch_tools(MAX_PAGE_SIZE).await?;
            let ranked = rank(&tools, tab.into());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                for (position, tool) in ranked.iter().enumerate() {
                    println!(
                        "{:>2}. {:<20} trending {:>5.1}  views {:>8}  rating {:.1}",
                        position + 1,
                        tool.name,
                        tool.trending_score,
                        tool.views_count,
                        tool.avg_rating
                    );
                }
            }
        }

        Command::Reviews { ref tool, sort } => {
            let reviews = store.fetch_reviews(tool, MAX_PAGE_SIZE).await?;
            let ranked = rank_reviews(&reviews, sort.into());
            let distribution = RatingDistribution::from_reviews(&ranked);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else if ranked.is_empty() {
                println!("No reviews for {tool} yet.");
            } else {
                for star in (1..=5u8).rev() {
                    println!(
                        "{} stars: {:>3} ({:.0}%)",
                        star,
                        distribution.count(star),
                        distribution.percentage(star)
                    );
                }
                println!();
                for review in &ranked {
                    println!(
                        "[{}/5] {} ({} helpful): {}",
                        review.rating, review.reviewer_name, review.helpful_votes,
                        review.review_text
                    );
                }
            }
        }

        Command::Seed => {
            let seed = serde_json::json!({
                "tools": toolpulse_store::sample::tools(),
                "interactions": toolpulse_store::sample::interactions(),
                "reviews": toolpulse_store::sample::reviews(),
            });
            println!("{}", serde_json::to_string_pretty(&seed)?);
        }
    }

    Ok(())
}

fn build_store(cli: &Cli) -> anyhow::Result<Arc<dyn ToolStore>> {
    if cli.offline {
        return Ok(Arc::new(MemoryStore::with_sample_catalog()));
    }

    let config = match &cli.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("loading store config from {}", path.display()))?,
        None => {
            tracing::info!("no store config given, using defaults");
            StoreConfig::default()
        }
    };
    Ok(Arc::new(RemoteTableStore::new(config)))
}
