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

//! In-memory store for tests and offline use.

use crate::{sample, StoreError, ToolStore, MAX_PAGE_SIZE};
use async_trait::async_trait;
use parking_lot::RwLock;
use toolpulse_core::{InteractionRecord, ReviewRecord, ToolRecord};

#[derive(Default)]
struct Inner {
    tools: Vec<ToolRecord>,
    interactions: Vec<InteractionRecord>,
    reviews: Vec<ReviewRecord>,
}

/// Store implementation backed by process memory.
///
/// Fetches observe the same page bound as the remote store so callers see
/// identical behavior in both modes.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the sample catalog.
    pub fn with_sample_catalog() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write();
            inner.tools = sample::tools();
            inner.interactions = sample::interactions();
            inner.reviews = sample::reviews();
        }
        store
    }

    pub fn insert_tool(&self, tool: ToolRecord) {
        self.inner.write().tools.push(tool);
    }

    pub fn insert_interaction(&self, interaction: InteractionRecord) {
        self.inner.write().interactions.push(interaction);
    }

    pub fn insert_review(&self, review: ReviewRecord) {
        self.inner.write().reviews.push(review);
    }
}

#[async_trait]
impl ToolStore for MemoryStore {
    async fn fetch_tools(&self, page_limit: usize) -> Result<Vec<ToolRecord>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .tools
            .iter()
            .take(page_limit.min(MAX_PAGE_SIZE))
            .cloned()
            .collect())
    }

    async fn fetch_interactions(
        &self,
        user_id: &str,
        page_limit: usize,
    ) -> Result<Vec<InteractionRecord>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .interactions
            .iter()
            .filter(|i| i.user_id == user_id)
            .take(page_limit.min(MAX_PAGE_SIZE))
            .cloned()
            .collect())
    }

    async fn fetch_reviews(
        &self,
        tool_name: &str,
        page_limit: usize,
    ) -> Result<Vec<ReviewRecord>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .reviews
            .iter()
            .filter(|r| r.tool_name == tool_name)
            .take(page_limit.min(MAX_PAGE_SIZE))
            .cloned()
            .collect())
    }
}
