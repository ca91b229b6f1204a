//! Bidirectional number word ↔ digit lexicon for English and Spanish.
//!
//! Covers 1-20 in both languages, plus the spellings speech engines commonly
//! produce for the Spanish words ("dose" for "dos", "vente" for "veinte",
//! spaced compounds like "dieci ocho"). Several words map to the same digit;
//! the reverse direction picks the first-listed primary Spanish spelling per
//! digit, so canonicalization is deterministic and independent of table order
//! changes among the variants.

use std::collections::HashMap;

/// Language of a vocabulary side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
}

use Language::{English, Spanish};

/// (word, digit, language, primary spelling rather than a recognition variant)
const ENTRIES: &[(&str, &str, Language, bool)] = &[
    // English
    ("one", "1", English, true),
    ("two", "2", English, true),
    ("three", "3", English, true),
    ("four", "4", English, true),
    ("five", "5", English, true),
    ("six", "6", English, true),
    ("seven", "7", English, true),
    ("eight", "8", English, true),
    ("nine", "9", English, true),
    ("ten", "10", English, true),
    ("eleven", "11", English, true),
    ("twelve", "12", English, true),
    ("thirteen", "13", English, true),
    ("fourteen", "14", English, true),
    ("fifteen", "15", English, true),
    ("sixteen", "16", English, true),
    ("seventeen", "17", English, true),
    ("eighteen", "18", English, true),
    ("nineteen", "19", English, true),
    ("twenty", "20", English, true),
    // Spanish
    ("uno", "1", Spanish, true),
    ("un", "1", Spanish, false),
    ("dos", "2", Spanish, true),
    ("dose", "2", Spanish, false),
    ("tres", "3", Spanish, true),
    ("trace", "3", Spanish, false),
    ("cuatro", "4", Spanish, true),
    ("cinco", "5", Spanish, true),
    ("seis", "6", Spanish, true),
    ("sais", "6", Spanish, false),
    ("siete", "7", Spanish, true),
    ("ocho", "8", Spanish, true),
    ("nueve", "9", Spanish, true),
    ("diez", "10", Spanish, true),
    ("dies", "10", Spanish, false),
    ("once", "11", Spanish, true),
    ("doce", "12", Spanish, true),
    ("trece", "13", Spanish, true),
    ("catorce", "14", Spanish, true),
    ("quince", "15", Spanish, true),
    ("dieciseis", "16", Spanish, true),
    ("dieciséis", "16", Spanish, false),
    ("dieci seis", "16", Spanish, false),
    ("diecisiete", "17", Spanish, true),
    ("dieci siete", "17", Spanish, false),
    ("dieciocho", "18", Spanish, true),
    ("dieci ocho", "18", Spanish, false),
    ("diecinueve", "19", Spanish, true),
    ("dieci nueve", "19", Spanish, false),
    ("veinte", "20", Spanish, true),
    ("vente", "20", Spanish, false),
    // Compound forms sometimes produced for 16-19
    ("diez y seis", "16", Spanish, false),
    ("diez y siete", "17", Spanish, false),
    ("diez y ocho", "18", Spanish, false),
    ("diez y nueve", "19", Spanish, false),
];

/// Immutable word ↔ digit maps, built once at construction.
#[derive(Debug, Clone)]
pub struct NumberLexicon {
    word_to_digit: HashMap<&'static str, &'static str>,
    digit_to_word: HashMap<&'static str, &'static str>,
    display: HashMap<(&'static str, Language), &'static str>,
}

impl NumberLexicon {
    pub fn new() -> Self {
        let mut word_to_digit = HashMap::new();
        let mut digit_to_word = HashMap::new();
        let mut display = HashMap::new();

        for &(word, digit, lang, primary) in ENTRIES {
            word_to_digit.insert(word, digit);
            if primary {
                // First-listed primary spelling wins per digit and language.
                display.entry((digit, lang)).or_insert(word);
                if lang == Spanish {
                    digit_to_word.entry(digit).or_insert(word);
                }
            }
        }

        Self {
            word_to_digit,
            digit_to_word,
            display,
        }
    }

    /// Digit form of a known number word or recognition variant.
    pub fn digit_for(&self, word: &str) -> Option<&'static str> {
        self.word_to_digit.get(word).copied()
    }

    /// The canonical word for a digit (primary Spanish spelling).
    pub fn canonical_word(&self, digit: &str) -> Option<&'static str> {
        self.digit_to_word.get(digit).copied()
    }

    /// The primary spelling of a digit in a specific language, for display.
    pub fn display_word(&self, digit: &str, lang: Language) -> Option<&'static str> {
        self.display.get(&(digit, lang)).copied()
    }
}

impl Default for NumberLexicon {
    fn default() -> Self {
        Self::new()
    }
}
