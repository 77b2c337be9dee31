use crate::domain::model::{
    Grade, HistoryEntry, RatingBreakdown, RatingVariant, Voyage, CHINA, EAST_INDIES,
    HIGH_RISK_ZONES,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative;

/// 依序套用 (條件, 增量)，只累加條件成立的增量
fn accumulate(base: i64, steps: &[(bool, i64)]) -> i64 {
    steps
        .iter()
        .filter(|(applies, _)| *applies)
        .fold(base, |acc, (_, delta)| acc.saturating_add(*delta))
}

fn count_as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

pub fn is_high_risk_zone(zone: &str) -> bool {
    HIGH_RISK_ZONES.contains(&zone)
}

pub fn has_china_history(history: &[HistoryEntry]) -> bool {
    history.iter().any(|entry| entry.zone == CHINA)
}

pub fn voyage_risk(voyage: &Voyage) -> i64 {
    accumulate(
        1,
        &[
            (voyage.length > 4, 2),
            (voyage.length > 8, voyage.length.saturating_sub(8)),
            (is_high_risk_zone(&voyage.zone), 4),
        ],
    )
    .max(0)
}

pub fn standard_captain_history_risk(history: &[HistoryEntry]) -> i64 {
    let losses = count_as_i64(history.iter().filter(|entry| entry.is_loss()).count());

    accumulate(1, &[(history.len() < 5, 4), (true, losses)]).max(0)
}

pub fn standard_length_factor(voyage: &Voyage, history: &[HistoryEntry]) -> i64 {
    accumulate(0, &[(history.len() > 8, 1), (voyage.length > 14, -1)])
}

fn experienced_china_length_factor(voyage: &Voyage, history: &[HistoryEntry]) -> i64 {
    accumulate(
        0,
        &[
            (true, 3),
            (history.len() > 10, 1),
            (voyage.length > 12, 1),
            (voyage.length > 18, -1),
        ],
    )
}

impl RatingVariant {
    /// Picks the variant for a voyage: a China voyage by a captain who has
    /// sailed to China before is rated as experienced.
    pub fn select(voyage: &Voyage, history: &[HistoryEntry]) -> Self {
        if voyage.zone == CHINA && has_china_history(history) {
            RatingVariant::ExperiencedChina
        } else {
            RatingVariant::Standard
        }
    }

    pub fn captain_history_risk(&self, history: &[HistoryEntry]) -> i64 {
        let standard = standard_captain_history_risk(history);
        match self {
            RatingVariant::Standard => standard,
            RatingVariant::ExperiencedChina => standard.saturating_sub(2).max(0),
        }
    }

    pub fn length_factor(&self, voyage: &Voyage, history: &[HistoryEntry]) -> i64 {
        match self {
            RatingVariant::Standard => standard_length_factor(voyage, history),
            RatingVariant::ExperiencedChina => experienced_china_length_factor(voyage, history),
        }
    }

    pub fn voyage_profit_factor(&self, voyage: &Voyage, history: &[HistoryEntry]) -> i64 {
        accumulate(
            2,
            &[(voyage.zone == CHINA, 1), (voyage.zone == EAST_INDIES, 1)],
        )
        .saturating_add(self.length_factor(voyage, history))
    }
}

fn decide(voyage_profit_factor: i64, voyage_risk: i64, captain_history_risk: i64) -> Grade {
    let profit = voyage_profit_factor.saturating_mul(3);
    let risk = voyage_risk.saturating_add(captain_history_risk.saturating_mul(2));
    if profit > risk {
        Grade::A
    } else {
        Grade::B
    }
}

/// A rating whose variant was selected and whose factors were computed once
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    breakdown: RatingBreakdown,
}

impl Rating {
    pub fn new(voyage: &Voyage, history: &[HistoryEntry]) -> Result<Self> {
        validate_non_negative("voyage.length", voyage.length)?;

        let variant = RatingVariant::select(voyage, history);
        let voyage_risk = voyage_risk(voyage);
        let captain_history_risk = variant.captain_history_risk(history);
        let length_factor = variant.length_factor(voyage, history);
        let voyage_profit_factor = variant.voyage_profit_factor(voyage, history);
        let grade = decide(voyage_profit_factor, voyage_risk, captain_history_risk);

        tracing::debug!(
            zone = %voyage.zone,
            length = voyage.length,
            history_len = history.len(),
            %variant,
            voyage_risk,
            captain_history_risk,
            voyage_profit_factor,
            %grade,
            "rated voyage"
        );

        Ok(Self {
            breakdown: RatingBreakdown {
                variant,
                voyage_risk,
                captain_history_risk,
                voyage_profit_factor,
                length_factor,
                grade,
            },
        })
    }

    pub fn value(&self) -> Grade {
        self.breakdown.grade
    }

    pub fn variant(&self) -> RatingVariant {
        self.breakdown.variant
    }

    pub fn breakdown(&self) -> RatingBreakdown {
        self.breakdown
    }
}

pub fn compute_rating(voyage: &Voyage, history: &[HistoryEntry]) -> Result<Grade> {
    Rating::new(voyage, history).map(|rating| rating.value())
}
