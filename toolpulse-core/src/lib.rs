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

//! Toolpulse Core
//!
//! Record types and shared configuration for the Toolpulse AI tool
//! directory.

pub mod config;
pub mod error;
pub mod interaction;
pub mod review;
pub mod tool;

pub use config::{RecommenderConfig, TrendThresholds};
pub use error::{Result, ToolpulseError};
pub use interaction::InteractionRecord;
pub use review::ReviewRecord;
pub use tool::{PricingTier, ToolCategory, ToolRecord};
