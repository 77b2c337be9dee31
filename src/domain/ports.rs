use crate::domain::model::{HistoryEntry, Voyage};
use crate::utils::error::Result;

/// Where the engine gets the voyage to rate and the captain's history from.
pub trait RatingInputProvider {
    fn voyage(&self) -> Result<Voyage>;
    fn history(&self) -> Result<Vec<HistoryEntry>>;
}
