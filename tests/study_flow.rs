//! End-to-end study flow: queue building, answering, grading, persistence.

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use senderos_core::{
    build_queue, deck_stats, export_document, import_document, suggest_grade, Grade, MemoryStore,
    Matcher, ProgressStore, ScheduleMap, Scheduler, Session, VocabCard, DAY_MS, NUMBERS_CATEGORY,
};
use std::collections::HashSet;

fn deck() -> Vec<VocabCard> {
    vec![
        VocabCard {
            category: "Numbers".into(),
            spanish: "dos".into(),
            english: "two".into(),
        },
        VocabCard {
            category: "Numbers".into(),
            spanish: "dieciocho".into(),
            english: "eighteen".into(),
        },
        VocabCard {
            category: "Animals".into(),
            spanish: "el gato".into(),
            english: "the cat".into(),
        },
    ]
}

#[test]
fn spoken_answer_is_matched_graded_and_persisted() {
    let cards = deck();
    let scheduler = Scheduler::default();
    let matcher = Matcher::new();
    let mut store = MemoryStore::new();
    let mut session = Session::new();
    let now = Utc::now();

    let mut schedules: ScheduleMap = store.load();
    let selected: HashSet<String> = cards.iter().map(|c| c.category.clone()).collect();

    let mut rng = StdRng::seed_from_u64(1);
    let queue = build_queue(&cards, &schedules, &selected, 10, now, &mut rng);
    assert_eq!(queue.len(), 3);

    // Study the "dos" card from a speech transcript.
    let card = &cards[0];
    let alternatives: Vec<String> = vec!["dose".into(), "doce".into(), "trace".into()];
    let heard = matcher
        .resolve_alternatives(&alternatives, &card.spanish, &card.category)
        .unwrap();
    assert_eq!(heard, "dose");

    let result = matcher.compare(heard, &card.spanish, &card.category);
    assert!(result.is_correct);

    session.set_response_time(&card.id(), 5_000);
    let grade = suggest_grade(result.is_correct, 5_000);
    assert_eq!(grade, Grade::Easy);

    let first_time = !schedules.contains_key(&card.id());
    let state = scheduler.grade(schedules.get(&card.id()), grade, now);
    assert_eq!(state.interval_ms, 4 * DAY_MS);
    schedules.insert(card.id(), state);
    store.save(&schedules);
    session.record_review(&card.id(), first_time);

    assert_eq!(session.seen_count(), 1);
    assert_eq!(session.new_cards_seen(), 1);

    // The graded card is scheduled out; the other two remain new.
    let stats = deck_stats(&cards, &store.load(), &selected, now);
    assert_eq!((stats.due, stats.fresh), (0, 2));
    let stats = deck_stats(&cards, &store.load(), &selected, now + Duration::days(5));
    assert_eq!((stats.due, stats.fresh), (1, 2));

    // Progress survives an export/import cycle wholesale.
    let doc = export_document(&store.load()).unwrap();
    let imported = import_document(&doc).unwrap();
    assert_eq!(imported, store.load());
}

#[test]
fn typed_number_answers_accept_digits_and_words() {
    let matcher = Matcher::new();
    for typed in ["18", "eighteen", "dieci ocho", "diez y ocho"] {
        let result = matcher.compare(typed, "dieciocho", NUMBERS_CATEGORY);
        assert!(result.is_correct, "rejected {typed:?}");
        assert_eq!(result.expected_normalized, "dieciocho");
    }
    assert!(!matcher.compare("17", "dieciocho", NUMBERS_CATEGORY).is_correct);
}

#[test]
fn failed_import_leaves_current_state_usable() {
    let scheduler = Scheduler::default();
    let mut store = MemoryStore::new();
    let now = Utc::now();

    let mut schedules = store.load();
    let card = &deck()[0];
    schedules.insert(card.id(), scheduler.grade(None, Grade::Good, now));
    store.save(&schedules);

    assert!(import_document("[]").is_err());

    // Caller keeps its map on rejection; nothing was replaced.
    assert_eq!(store.load().len(), 1);
}
