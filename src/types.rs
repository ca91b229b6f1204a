//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Again,
    Hard,
    Good,
    Easy,
}

impl Grade {
    /// Convert to 4-point numeric value (1-4).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Again => 1,
            Self::Hard => 2,
            Self::Good => 3,
            Self::Easy => 4,
        }
    }

    /// Create from 4-point numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Again),
            2 => Some(Self::Hard),
            3 => Some(Self::Good),
            4 => Some(Self::Easy),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = crate::CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(crate::CoreError::InvalidGrade(value))
    }
}

/// Stable content-derived key for a vocabulary pair.
///
/// Formed as `category::spanish::english`, so the same card keeps the same
/// identity across sessions regardless of deck ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(category: &str, spanish: &str, english: &str) -> Self {
        Self(format!("{category}::{spanish}::{english}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One vocabulary pair as supplied by the vocabulary source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabCard {
    pub category: String,
    pub spanish: String,
    pub english: String,
}

impl VocabCard {
    /// Derive the stable identity for this card.
    pub fn id(&self) -> CardId {
        CardId::new(&self.category, &self.spanish, &self.english)
    }
}

/// Persisted spaced-repetition state for one card.
///
/// Absence of a state means the card has never been graded ("new card").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Multiplier controlling interval growth; never below 1.3.
    pub ease_factor: f64,
    /// Consecutive successful (Good/Easy) reviews; reset to 0 on failure.
    pub streak: u32,
    /// Time until next due, in milliseconds.
    pub interval_ms: i64,
    /// Next review time, recomputed on every grading event.
    pub due_at: DateTime<Utc>,
    /// Cumulative failures; never reset.
    pub lapses: u32,
    /// One-way latch set once the card has lapsed too often.
    #[serde(default)]
    pub is_leech: bool,
}

impl ReviewState {
    /// State for a card graded for the first time, before the grade applies.
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            ease_factor: 2.5,
            streak: 0,
            interval_ms: 0,
            due_at: now,
            lapses: 0,
            is_leech: false,
        }
    }

    /// A card is due once its scheduled time has passed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grade_value_round_trip() {
        for v in 1..=4 {
            assert_eq!(Grade::from_value(v).unwrap().to_value(), v);
        }
        assert_eq!(Grade::from_value(0), None);
        assert_eq!(Grade::from_value(5), None);
    }

    #[test]
    fn out_of_range_grade_is_rejected() {
        let err = Grade::try_from(7).unwrap_err();
        assert!(matches!(err, crate::CoreError::InvalidGrade(7)));
    }

    #[test]
    fn card_id_is_content_derived() {
        let card = VocabCard {
            category: "Numbers".into(),
            spanish: "dos".into(),
            english: "two".into(),
        };
        assert_eq!(card.id().as_str(), "Numbers::dos::two");
        assert_eq!(card.id(), card.clone().id());
    }
}
