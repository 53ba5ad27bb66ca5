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

//! User preference signals consumed by the recommendation engine.

use crate::tool::ToolCategory;
use serde::{Deserialize, Serialize};

/// One recorded category preference for a user.
///
/// Written by the presentation layer when a user engages with a tool; the
/// recommendation engine only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(alias = "_uid")]
    pub user_id: String,
    #[serde(rename = "user_category_preference")]
    pub category: ToolCategory,
}

impl InteractionRecord {
    pub fn new(user_id: impl Into<String>, category: ToolCategory) -> Self {
        Self {
            user_id: user_id.into(),
            category,
        }
    }
}
