//! Session-scoped bookkeeping, kept apart from persisted review state.
//!
//! Flags like "first seen this session" and the last response time only
//! matter until the tab closes; they live in their own map keyed by card
//! identity and are never merged into the schedule.

use crate::types::CardId;
use std::collections::HashMap;

/// Transient per-card flags for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardFlags {
    /// The card was graded for the first time during this session.
    pub seen_new: bool,
    /// Milliseconds the user took on the most recent answer.
    pub response_time_ms: Option<u64>,
}

/// Counters and flags for one study session.
#[derive(Debug, Default)]
pub struct Session {
    seen: u32,
    flags: HashMap<CardId, CardFlags>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a card was graded. `first_time` marks cards that had no
    /// persisted state before this grading event.
    pub fn record_review(&mut self, id: &CardId, first_time: bool) {
        self.seen += 1;
        if first_time {
            self.flags.entry(id.clone()).or_default().seen_new = true;
        }
    }

    pub fn set_response_time(&mut self, id: &CardId, ms: u64) {
        self.flags.entry(id.clone()).or_default().response_time_ms = Some(ms);
    }

    pub fn response_time(&self, id: &CardId) -> Option<u64> {
        self.flags.get(id).and_then(|f| f.response_time_ms)
    }

    /// Total cards graded this session.
    pub fn seen_count(&self) -> u32 {
        self.seen
    }

    /// How many new cards were introduced this session.
    pub fn new_cards_seen(&self) -> usize {
        self.flags.values().filter(|f| f.seen_new).count()
    }

    /// Forget everything, as after a bulk progress reset.
    pub fn reset(&mut self) {
        self.seen = 0;
        self.flags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_reviews_and_new_cards() {
        let mut session = Session::new();
        let a = CardId::new("Animals", "gato", "cat");
        let b = CardId::new("Animals", "perro", "dog");

        session.record_review(&a, true);
        session.record_review(&b, false);
        session.record_review(&a, false);

        assert_eq!(session.seen_count(), 3);
        assert_eq!(session.new_cards_seen(), 1);
    }

    #[test]
    fn response_time_is_per_card() {
        let mut session = Session::new();
        let a = CardId::new("Numbers", "dos", "two");
        let b = CardId::new("Numbers", "tres", "three");

        session.set_response_time(&a, 4_200);
        assert_eq!(session.response_time(&a), Some(4_200));
        assert_eq!(session.response_time(&b), None);

        session.set_response_time(&a, 9_000);
        assert_eq!(session.response_time(&a), Some(9_000));
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new();
        let a = CardId::new("Animals", "gato", "cat");
        session.record_review(&a, true);
        session.set_response_time(&a, 1_000);

        session.reset();
        assert_eq!(session.seen_count(), 0);
        assert_eq!(session.new_cards_seen(), 0);
        assert_eq!(session.response_time(&a), None);
    }
}
