pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::{rate_batch, RatingEngine};
pub use crate::core::rating::{compute_rating, Rating};
pub use crate::domain::model::{Grade, HistoryEntry, RatingBreakdown, RatingVariant, Voyage};
pub use crate::utils::error::{RatingError, Result};
