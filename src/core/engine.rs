use crate::core::rating::Rating;
use crate::core::{HistoryEntry, RatingBreakdown, RatingInputProvider, Voyage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct RatingEngine<P: RatingInputProvider> {
    provider: P,
}

impl<P: RatingInputProvider> RatingEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn run(&self) -> Result<RatingBreakdown> {
        tracing::info!("Loading voyage...");
        let voyage = self.provider.voyage()?;
        voyage.validate()?;

        tracing::info!("Loading captain history...");
        let history = self.provider.history()?;
        for entry in &history {
            entry.validate()?;
        }
        tracing::info!(
            "Rating voyage to {} (length {}) against {} past voyages",
            voyage.zone,
            voyage.length,
            history.len()
        );

        let breakdown = Rating::new(&voyage, &history)?.breakdown();
        tracing::info!("Grade {} ({} rating)", breakdown.grade, breakdown.variant);

        Ok(breakdown)
    }
}

/// Rates each candidate voyage against the same captain history. A rejected
/// voyage yields an error in its own slot without affecting the others.
pub fn rate_batch(voyages: &[Voyage], history: &[HistoryEntry]) -> Vec<Result<RatingBreakdown>> {
    voyages
        .iter()
        .map(|voyage| {
            let result = Rating::new(voyage, history).map(|rating| rating.breakdown());
            if let Err(e) = &result {
                tracing::warn!("Skipping voyage to {}: {}", voyage.zone, e);
            }
            result
        })
        .collect()
}
