pub mod engine;
pub mod rating;
pub mod report;

pub use crate::domain::model::{Grade, HistoryEntry, RatingBreakdown, RatingVariant, Voyage};
pub use crate::domain::ports::RatingInputProvider;
pub use crate::utils::error::Result;
