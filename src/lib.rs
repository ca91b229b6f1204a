//! Core library for a bilingual (English/Spanish) spaced-repetition
//! vocabulary trainer.
//!
//! Provides:
//! - SM-2-style scheduler (grade-driven interval/easiness update)
//! - Answer normalization and equivalence, including number-word/digit
//!   translation and speech-alternative resolution
//! - Progress store seam with JSON export/import
//! - Session bookkeeping and study-queue building
//!
//! The scheduler and the matcher are independent; the caller (UI layer,
//! speech plumbing) composes them and owns all I/O.

pub mod error;
pub mod lexicon;
pub mod matching;
pub mod queue;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod types;

pub use error::{CoreError, Result};
pub use lexicon::{Language, NumberLexicon};
pub use matching::{suggest_grade, MatchResult, Matcher, NUMBERS_CATEGORY};
pub use queue::{build_queue, categories, deck_stats, DeckStats};
pub use scheduler::{Scheduler, DAY_MS};
pub use session::{CardFlags, Session};
pub use store::{export_document, import_document, parse_or_default, MemoryStore, ProgressStore, ScheduleMap};
pub use types::{CardId, Grade, ReviewState, VocabCard};
