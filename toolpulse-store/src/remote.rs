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

//! HTTP client for the remote key-indexed table store.
//!
//! One GET per page: `{base_url}/tables/{table}/items?limit=N[&key=value]`,
//! answered with an `{"items": [...]}` envelope. Rows that fail to decode
//! or violate record invariants are skipped with a warning instead of
//! failing the whole page.

use crate::{StoreConfig, StoreError, ToolStore};
use async_trait::async_trait;
use serde::Deserialize;
use toolpulse_core::{InteractionRecord, ReviewRecord, ToolRecord};
use tracing::warn;

/// Client for the remote table API.
pub struct RemoteTableStore {
    client: reqwest::Client,
    config: StoreConfig,
}

#[derive(Debug, Deserialize)]
struct ItemPage {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

impl RemoteTableStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn items_url(&self, table: &str) -> String {
        format!("{}/tables/{}/items", self.config.base_url.trim_end_matches('/'), table)
    }

    async fn fetch_page(
        &self,
        table: &str,
        page_limit: usize,
        key: Option<(&str, &str)>,
    ) -> Result<ItemPage, StoreError> {
        let limit = self.config.clamp_page(page_limit);
        let mut request = self
            .client
            .get(self.items_url(table))
            .query(&[("limit", limit.to_string())]);

        if let Some((name, value)) = key {
            request = request.query(&[(name, value)]);
        }
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }

    /// Decode every row of a page, dropping rows that do not parse.
    fn decode_rows<T: serde::de::DeserializeOwned>(table: &str, page: ItemPage) -> Vec<T> {
        let mut rows = Vec::with_capacity(page.items.len());
        for item in page.items {
            match serde_json::from_value(item) {
                Ok(row) => rows.push(row),
                Err(e) => warn!(table, error = %e, "skipping undecodable row"),
            }
        }
        rows
    }
}

#[async_trait]
impl ToolStore for RemoteTableStore {
    async fn fetch_tools(&self, page_limit: usize) -> Result<Vec<ToolRecord>, StoreError> {
        let page = self
            .fetch_page(&self.config.tools_table, page_limit, None)
            .await?;

        let mut tools: Vec<ToolRecord> = Self::decode_rows(&self.config.tools_table, page);
        tools.retain(|tool| match tool.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!(tool_id = %tool.tool_id, error = %e, "skipping invalid tool record");
                false
            }
        });
        Ok(tools)
    }

    async fn fetch_interactions(
        &self,
        user_id: &str,
        page_limit: usize,
    ) -> Result<Vec<InteractionRecord>, StoreError> {
        let page = self
            .fetch_page(
                &self.config.interactions_table,
                page_limit,
                Some(("_uid", user_id)),
            )
            .await?;
        Ok(Self::decode_rows(&self.config.interactions_table, page))
    }

    async fn fetch_reviews(
        &self,
        tool_name: &str,
        page_limit: usize,
    ) -> Result<Vec<ReviewRecord>, StoreError> {
        let page = self
            .fetch_page(
                &self.config.reviews_table,
                page_limit,
                Some(("tool_name", tool_name)),
            )
            .await?;

        let mut reviews: Vec<ReviewRecord> = Self::decode_rows(&self.config.reviews_table, page);
        reviews.retain(|review| match review.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!(tool_name = %review.tool_name, error = %e, "skipping invalid review");
                false
            }
        });
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url_normalizes_trailing_slash() {
        let store = RemoteTableStore::new(StoreConfig {
            base_url: "https://store.example.com/".to_string(),
            ..Default::default()
        });
        assert_eq!(
            store.items_url("tools"),
            "https://store.example.com/tables/tools/items"
        );
    }

    #[test]
    fn test_decode_rows_skips_bad_items() {
        let page = ItemPage {
            items: vec![
                serde_json::json!({
                    "user_id": "u1",
                    "user_category_preference": "Text Generation"
                }),
                serde_json::json!({"user_category_preference": 42}),
            ],
        };

        let rows: Vec<InteractionRecord> = RemoteTableStore::decode_rows("interactions", page);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, "u1");
    }
}
