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

//! User review records.
//!
//! Reviews are submitted and persisted by the external store; the query
//! crate only derives statistics from fetched snapshots.

use crate::error::{Result, ToolpulseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user review of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub tool_name: String,
    /// Star rating, 1..=5.
    pub rating: u8,
    #[serde(default)]
    pub review_text: String,
    #[serde(default)]
    pub reviewer_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub helpful_votes: u64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl ReviewRecord {
    /// A rating must be a whole star count between 1 and 5.
    pub fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(ToolpulseError::InvalidRating(self.rating));
        }
        Ok(())
    }
}
