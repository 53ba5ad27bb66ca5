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

//! Remote store configuration.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hard upper bound on a fetched page.
pub const MAX_PAGE_SIZE: usize = 100;

/// Connection settings for the remote table store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the table API.
    pub base_url: String,
    /// Table holding tool records.
    pub tools_table: String,
    /// Table holding per-user interaction records.
    pub interactions_table: String,
    /// Table holding review records.
    pub reviews_table: String,
    /// Optional bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Default page size for fetches, clamped to [`MAX_PAGE_SIZE`].
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

fn default_page_limit() -> usize {
    MAX_PAGE_SIZE
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            tools_table: "tools".to_string(),
            interactions_table: "interactions".to_string(),
            reviews_table: "reviews".to_string(),
            api_key: None,
            page_limit: default_page_limit(),
        }
    }
}

impl StoreConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&contents).map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Effective page size for a requested limit.
    pub fn clamp_page(&self, requested: usize) -> usize {
        requested.min(self.page_limit).min(MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        let config = StoreConfig::default();
        assert_eq!(config.clamp_page(20), 20);
        assert_eq!(config.clamp_page(5_000), MAX_PAGE_SIZE);

        let small = StoreConfig {
            page_limit: 10,
            ..Default::default()
        };
        assert_eq!(small.clamp_page(50), 10);
    }

    #[test]
    fn test_parses_minimal_toml() {
        let config: StoreConfig = toml::from_str(
            r#"
            base_url = "https://store.example.com"
            tools_table = "evxj3vkz0idc"
            interactions_table = "evxj49dhtwqo"
            reviews_table = "evtx4fco5u68"
            "#,
        )
        .unwrap();
        assert_eq!(config.page_limit, MAX_PAGE_SIZE);
        assert!(config.api_key.is_none());
    }
}
