//! Answer normalization and equivalence for typed and spoken answers.
//!
//! Raw answers arrive messy: stray punctuation, gender hints like "(f)" or a
//! trailing "male"/"female", and speech transcripts that render numbers as
//! digits or as regional spellings. Equivalence is decided on a canonical
//! form so "18", "eighteen" and "dieciocho" all count as the same answer in
//! the Numbers category.

use crate::lexicon::NumberLexicon;
use crate::types::Grade;
use serde::{Deserialize, Serialize};

/// Category whose answers are number words rather than digits.
pub const NUMBERS_CATEGORY: &str = "Numbers";

/// Answers faster than this suggest Easy.
const EASY_THRESHOLD_MS: u64 = 8_000;
/// Answers faster than this (but not fast enough for Easy) suggest Good.
const GOOD_THRESHOLD_MS: u64 = 30_000;

/// Result of comparing a user answer to the expected answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized user answer (for display).
    pub user_normalized: String,
    /// Normalized expected answer (for display).
    pub expected_normalized: String,
}

/// Normalizes answers against a fixed number lexicon.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    lexicon: NumberLexicon,
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            lexicon: NumberLexicon::new(),
        }
    }

    pub fn lexicon(&self) -> &NumberLexicon {
        &self.lexicon
    }

    /// Normalize raw answer text into its canonical comparable form.
    pub fn normalize(&self, raw: &str, category: &str) -> String {
        let lowered = raw.to_lowercase();
        let no_punct: String = lowered
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
            .collect();
        let no_parens = strip_parentheticals(&no_punct);
        let stripped = strip_trailing_gender(&no_parens);
        let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

        if category == NUMBERS_CATEGORY {
            // The expected answer here is a word, so digits and all spoken
            // variants route through the digit form onto one canonical word.
            if is_digits(&collapsed) {
                if let Some(word) = self.lexicon.canonical_word(&collapsed) {
                    return word.to_string();
                }
            } else if let Some(digit) = self.lexicon.digit_for(&collapsed) {
                if let Some(word) = self.lexicon.canonical_word(digit) {
                    return word.to_string();
                }
            }
            collapsed
        } else {
            // Other categories accept either form; convert whichever side is
            // recognized so word and digit answers meet in the middle.
            if let Some(digit) = self.lexicon.digit_for(&collapsed) {
                return digit.to_string();
            }
            if let Some(word) = self.lexicon.canonical_word(&collapsed) {
                return word.to_string();
            }
            collapsed
        }
    }

    /// Two raw answers are equivalent iff their canonical forms agree.
    pub fn is_equivalent(&self, a: &str, b: &str, category: &str) -> bool {
        self.normalize(a, category) == self.normalize(b, category)
    }

    /// Compare a user answer to the expected answer.
    pub fn compare(&self, user: &str, expected: &str, category: &str) -> MatchResult {
        let user_normalized = self.normalize(user, category);
        let expected_normalized = self.normalize(expected, category);
        MatchResult {
            is_correct: user_normalized == expected_normalized,
            user_normalized,
            expected_normalized,
        }
    }

    /// Pick the best transcription from a speech engine's N-best list.
    ///
    /// Returns the first alternative whose canonical form matches the
    /// expected answer, falling back to the most likely alternative so the
    /// caller always has something to show. `None` only on an empty list,
    /// which the speech collaborator never produces.
    pub fn resolve_alternatives<'a>(
        &self,
        alternatives: &'a [String],
        expected: &str,
        category: &str,
    ) -> Option<&'a str> {
        let want = self.normalize(expected, category);
        alternatives
            .iter()
            .find(|alt| self.normalize(alt, category) == want)
            .or_else(|| alternatives.first())
            .map(String::as_str)
    }
}

/// Suggest a grade from correctness and response time.
pub fn suggest_grade(is_correct: bool, response_time_ms: u64) -> Grade {
    if !is_correct {
        Grade::Again
    } else if response_time_ms < EASY_THRESHOLD_MS {
        Grade::Easy
    } else if response_time_ms < GOOD_THRESHOLD_MS {
        Grade::Good
    } else {
        Grade::Hard
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Remove parenthesized annotations and the whitespace preceding them.
/// An unclosed parenthesis is left alone.
fn strip_parentheticals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(rest[..open].trim_end());
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Drop a trailing standalone "male"/"female" token. The token must be
/// preceded by whitespace, so a bare "male" answer is untouched.
fn strip_trailing_gender(s: &str) -> &str {
    let trimmed = s.trim_end();
    for marker in ["male", "female"] {
        if let Some(prefix) = trimmed.strip_suffix(marker) {
            if prefix.ends_with(char::is_whitespace) {
                return prefix.trim_end();
            }
        }
    }
    s
}
