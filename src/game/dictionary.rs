//! Dictionary module for word validation
//!
//! Embeds the WordSwipe word list at build time and can load a
//! replacement list from disk. Lookups are case-insensitive.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shortest word the dictionary will ever accept.
pub const MIN_WORD_LENGTH: usize = 2;

/// Embedded word list, one uppercase word per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Shared dictionary built from the embedded list on first use
static EMBEDDED: Lazy<Arc<Dictionary>> = Lazy::new(|| Arc::new(Dictionary::parse(WORDS_DATA)));

/// Errors that can occur while loading a word list.
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The word list held no usable words
    Empty { path: PathBuf },
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::Io { path, source } => {
                write!(f, "failed to read word list {}: {}", path.display(), source)
            }
            DictionaryError::Empty { path } => {
                write!(f, "word list {} contains no usable words", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io { source, .. } => Some(source),
            DictionaryError::Empty { .. } => None,
        }
    }
}

/// Immutable set of valid words, stored upper-cased.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// The dictionary embedded in the binary.
    pub fn embedded() -> Arc<Dictionary> {
        Arc::clone(&EMBEDDED)
    }

    /// Build a dictionary from an explicit list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize_entry(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Parse word-list text: one word per line, `#` starts a comment line.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Load a word list from a file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&text);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(dictionary)
    }

    /// Check if a word is valid.
    /// Case-insensitive; words shorter than two letters are never valid.
    pub fn is_valid_word(&self, word: &str) -> bool {
        if word.chars().count() < MIN_WORD_LENGTH {
            return false;
        }
        self.words.contains(&word.to_uppercase())
    }

    /// Returns the total number of words in the dictionary
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Upper-case an entry, rejecting blanks, short words and non-letters.
fn normalize_entry(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.chars().count() < MIN_WORD_LENGTH || !entry.chars().all(|c| c.is_alphabetic()) {
        return None;
    }
    Some(entry.to_uppercase())
}
