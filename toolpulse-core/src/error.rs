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

//! Error types shared across Toolpulse crates.

use thiserror::Error;

/// Errors raised by record validation and parsing.
#[derive(Error, Debug)]
pub enum ToolpulseError {
    /// A record failed an invariant check (rating or trending score out of bounds).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A category label not in the closed enumeration.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A pricing tier label not in the closed enumeration.
    #[error("Unknown pricing tier: {0}")]
    UnknownPricingTier(String),

    /// A star rating outside 1..=5.
    #[error("Invalid star rating: {0}")]
    InvalidRating(u8),
}

/// Result type for Toolpulse operations.
pub type Result<T> = std::result::Result<T, ToolpulseError>;
