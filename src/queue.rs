//! Due/new queries and study-queue building.
//!
//! A card is due iff a review state exists and its time has passed; a card
//! with no state is new. The queue takes every due card plus a capped slice
//! of new cards in deck order, then shuffles.

use crate::store::ScheduleMap;
use crate::types::{CardId, VocabCard};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Counts shown in the deck header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckStats {
    /// Cards with a review state whose due time has passed.
    pub due: usize,
    /// Cards never graded.
    pub fresh: usize,
}

/// Unique categories in deck order.
pub fn categories(cards: &[VocabCard]) -> Vec<String> {
    let mut seen = HashSet::new();
    cards
        .iter()
        .filter(|c| seen.insert(c.category.clone()))
        .map(|c| c.category.clone())
        .collect()
}

/// Count due and new cards among the selected categories.
pub fn deck_stats(
    cards: &[VocabCard],
    schedules: &ScheduleMap,
    selected: &HashSet<String>,
    now: DateTime<Utc>,
) -> DeckStats {
    let mut stats = DeckStats { due: 0, fresh: 0 };
    for card in cards {
        if !selected.contains(&card.category) {
            continue;
        }
        match schedules.get(&card.id()) {
            None => stats.fresh += 1,
            Some(state) if state.is_due(now) => stats.due += 1,
            Some(_) => {}
        }
    }
    stats
}

/// Build a shuffled study queue: all due cards plus at most `max_new` new
/// cards, drawn in deck order from the selected categories.
pub fn build_queue<R: Rng + ?Sized>(
    cards: &[VocabCard],
    schedules: &ScheduleMap,
    selected: &HashSet<String>,
    max_new: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<CardId> {
    let mut due = Vec::new();
    let mut fresh = Vec::new();

    for card in cards {
        if !selected.contains(&card.category) {
            continue;
        }
        let id = card.id();
        match schedules.get(&id) {
            None => fresh.push(id),
            Some(state) if state.is_due(now) => due.push(id),
            Some(_) => {}
        }
    }

    fresh.truncate(max_new);
    due.extend(fresh);
    due.shuffle(rng);
    due
}
