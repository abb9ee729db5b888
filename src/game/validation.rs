//! Word validation for WordSwipe
//!
//! A candidate traced on the board is judged against:
//! - Letter availability on the board (with multiplicity)
//! - Dictionary presence
//! - Words already found this session

use super::dictionary::Dictionary;
use super::{Board, FoundWords};
use std::collections::HashMap;
use std::sync::Arc;

/// Points awarded per letter of an accepted word
pub const POINTS_PER_LETTER: u32 = 10;

/// Result of judging a candidate word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// New valid word
    Accepted { word: String, points: u32 },
    /// Valid word that was already found this session
    AlreadyFound { word: String },
    /// Word uses more of some letter than the board holds
    NotFormable { word: String },
    /// Word can be formed but is not in the dictionary
    InvalidWord { word: String },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    /// Returns a user-facing message for this outcome
    pub fn message(&self) -> String {
        match self {
            Outcome::Accepted { word, points } => {
                format!("Great! Found \"{}\" (+{} pts)", word, points)
            }
            Outcome::AlreadyFound { word } => format!("You already found \"{}\"", word),
            Outcome::NotFormable { word } => {
                format!("\"{}\" cannot be formed from these letters", word)
            }
            Outcome::InvalidWord { word } => format!("\"{}\" is not a valid word", word),
        }
    }
}

/// Points for a word of the given length
pub fn points_for(word: &str) -> u32 {
    word.chars().count() as u32 * POINTS_PER_LETTER
}

/// Check whether the letters of `word` are a sub-multiset of the board's
/// letters. Position and adjacency are ignored.
pub fn can_form(word: &str, board: &Board) -> bool {
    let available = letter_counts(board.letters().iter().copied());
    let needed = letter_counts(word.chars().map(|c| c.to_ascii_uppercase()));

    needed
        .iter()
        .all(|(letter, count)| available.get(letter).is_some_and(|have| have >= count))
}

fn letter_counts(letters: impl Iterator<Item = char>) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in letters {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Classifies submitted candidates for a session.
#[derive(Debug, Clone)]
pub struct WordJudge {
    dictionary: Arc<Dictionary>,
}

impl WordJudge {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// Judge a candidate
    ///
    /// Checks in order:
    /// 1. Formable from the board letters
    /// 2. Word exists in dictionary
    /// 3. Not already found
    pub fn judge(&self, candidate: &str, board: &Board, found: &FoundWords) -> Outcome {
        let word = candidate.to_uppercase();

        if !can_form(&word, board) {
            return Outcome::NotFormable { word };
        }

        if !self.dictionary.is_valid_word(&word) {
            return Outcome::InvalidWord { word };
        }

        if found.contains(&word) {
            return Outcome::AlreadyFound { word };
        }

        let points = points_for(&word);
        Outcome::Accepted { word, points }
    }
}
