use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_non_negative, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CHINA: &str = "china";
pub const EAST_INDIES: &str = "east-indies";

/// 風險較高的貿易區域
pub const HIGH_RISK_ZONES: [&str; 2] = [CHINA, EAST_INDIES];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voyage {
    pub zone: String,
    pub length: i64,
}

impl Voyage {
    pub fn new(zone: impl Into<String>, length: i64) -> Self {
        Self {
            zone: zone.into(),
            length,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub zone: String,
    pub profit: f64,
}

impl HistoryEntry {
    pub fn new(zone: impl Into<String>, profit: f64) -> Self {
        Self {
            zone: zone.into(),
            profit,
        }
    }

    pub fn is_loss(&self) -> bool {
        self.profit < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingVariant {
    Standard,
    ExperiencedChina,
}

impl fmt::Display for RatingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingVariant::Standard => f.write_str("standard"),
            RatingVariant::ExperiencedChina => f.write_str("experienced-china"),
        }
    }
}

/// Factor values computed for one voyage against one captain history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub variant: RatingVariant,
    pub voyage_risk: i64,
    pub captain_history_risk: i64,
    pub voyage_profit_factor: i64,
    pub length_factor: i64,
    pub grade: Grade,
}

impl Validate for Voyage {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("voyage.zone", &self.zone)?;
        validate_non_negative("voyage.length", self.length)
    }
}

impl Validate for HistoryEntry {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("history.zone", &self.zone)?;
        validate_finite("history.profit", self.profit)
    }
}
