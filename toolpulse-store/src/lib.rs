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

//! Toolpulse Store Adapter
//!
//! Boundary to the remote key-indexed table store. The engines never talk
//! to the store directly; callers fetch a bounded snapshot here and pass
//! it down. No filtering or sorting happens remotely, and no pagination
//! cursor is exposed: every call returns a single page snapshot.

pub mod config;
pub mod memory;
pub mod remote;
pub mod sample;

use async_trait::async_trait;
use thiserror::Error;
use toolpulse_core::{InteractionRecord, ReviewRecord, ToolRecord};

pub use config::{StoreConfig, MAX_PAGE_SIZE};
pub use memory::MemoryStore;
pub use remote::RemoteTableStore;

/// Errors from the store boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport failure reaching the remote table API.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote response was not the expected item envelope.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The remote answered with a non-success status.
    #[error("Store answered {status}: {message}")]
    Status { status: u16, message: String },

    /// Configuration could not be read or parsed.
    #[error("Invalid store config: {0}")]
    Config(String),
}

/// Read access to the record store.
///
/// Page limits are clamped to [`MAX_PAGE_SIZE`]; implementations always
/// operate on a single page and never expose a cursor.
#[async_trait]
pub trait ToolStore: Send + Sync {
    /// Fetch up to `page_limit` tool records.
    async fn fetch_tools(&self, page_limit: usize) -> Result<Vec<ToolRecord>, StoreError>;

    /// Fetch up to `page_limit` interaction records for one user.
    async fn fetch_interactions(
        &self,
        user_id: &str,
        page_limit: usize,
    ) -> Result<Vec<InteractionRecord>, StoreError>;

    /// Fetch up to `page_limit` reviews for one tool.
    async fn fetch_reviews(
        &self,
        tool_name: &str,
        page_limit: usize,
    ) -> Result<Vec<ReviewRecord>, StoreError>;
}
