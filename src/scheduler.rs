//! SM-2-style spaced repetition scheduler.
//!
//! The grading transition is a pure function of (state, grade, now): it never
//! touches storage and never fails. Intervals are held in milliseconds so the
//! short relearning steps (one minute, five minutes) stay exact.

use crate::types::{Grade, ReviewState};
use chrono::{DateTime, Duration, Utc};

/// One day in milliseconds.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Scheduler with configurable parameters.
#[derive(Debug, Clone)]
pub struct Scheduler {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval after a failed review.
    pub lapse_interval_ms: i64,
    /// Interval when Hard is the first grade a card receives.
    pub hard_initial_interval_ms: i64,
    pub hard_multiplier: f64,
    /// Interval when a card graduates with Good.
    pub graduating_interval_ms: i64,
    /// Interval for the second consecutive Good.
    pub second_interval_ms: i64,
    /// Interval when Easy is the first grade a card receives.
    pub easy_initial_interval_ms: i64,
    /// Added to the ease factor when multiplying an Easy interval.
    pub easy_bonus: f64,
    /// Interval cap, six months by default.
    pub max_interval_ms: i64,
    /// Lapse count at which a card is latched as a leech.
    pub leech_threshold: u32,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            lapse_interval_ms: 60 * 1000,
            hard_initial_interval_ms: 5 * 60 * 1000,
            hard_multiplier: 1.2,
            graduating_interval_ms: DAY_MS,
            second_interval_ms: 6 * DAY_MS,
            easy_initial_interval_ms: 4 * DAY_MS,
            easy_bonus: 0.3,
            max_interval_ms: 180 * DAY_MS,
            leech_threshold: 8,
        }
    }
}

impl Scheduler {
    /// State for a card that has never been graded.
    pub fn initial_state(&self, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            ease_factor: self.initial_ease,
            streak: 0,
            interval_ms: 0,
            due_at: now,
            lapses: 0,
            is_leech: false,
        }
    }

    /// Apply a grade and return the updated state.
    ///
    /// `None` means the card is new; defaults are created before the grade
    /// applies. The returned state has `due_at = now + interval`.
    pub fn grade(
        &self,
        state: Option<&ReviewState>,
        grade: Grade,
        now: DateTime<Utc>,
    ) -> ReviewState {
        let mut s = match state {
            Some(s) => s.clone(),
            None => self.initial_state(now),
        };

        match grade {
            Grade::Again => {
                s.streak = 0;
                s.interval_ms = self.lapse_interval_ms;
                s.ease_factor = (s.ease_factor - 0.3).max(self.minimum_ease);
                s.lapses += 1;
                if s.lapses >= self.leech_threshold {
                    s.is_leech = true;
                }
            }
            Grade::Hard => {
                s.ease_factor = (s.ease_factor - 0.15).max(self.minimum_ease);
                s.interval_ms = if s.streak == 0 {
                    self.hard_initial_interval_ms
                } else {
                    scale(s.interval_ms, self.hard_multiplier).max(DAY_MS)
                };
            }
            Grade::Good => {
                // Ease factor stays put for Good.
                match s.streak {
                    0 => {
                        s.streak = 1;
                        s.interval_ms = self.graduating_interval_ms;
                    }
                    1 => {
                        s.streak = 2;
                        s.interval_ms = self.second_interval_ms;
                    }
                    _ => {
                        s.streak += 1;
                        s.interval_ms =
                            scale(s.interval_ms, s.ease_factor).min(self.max_interval_ms);
                    }
                }
            }
            Grade::Easy => {
                s.ease_factor += 0.15;
                if s.streak == 0 {
                    s.streak = 2;
                    s.interval_ms = self.easy_initial_interval_ms;
                } else {
                    s.streak += 1;
                    s.interval_ms = scale(s.interval_ms, s.ease_factor + self.easy_bonus)
                        .min(self.max_interval_ms);
                }
            }
        }

        s.due_at = now + Duration::milliseconds(s.interval_ms);
        s
    }
}

fn scale(interval_ms: i64, factor: f64) -> i64 {
    (interval_ms as f64 * factor).round() as i64
}
