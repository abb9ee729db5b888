//! Game logic: boards, letter pools, word paths and validation

pub mod dictionary;
pub mod path;
pub mod validation;

use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Number of rows and columns on the board.
pub const GRID_SIZE: usize = 4;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = GRID_SIZE * GRID_SIZE;

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

pub const CONSONANTS: [char; 21] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'X', 'Y', 'Z',
];

/// Minimum number of board slots filled from the vowel pool.
const MIN_VOWELS: usize = 4;

/// Vowel slots per board: at least `MIN_VOWELS`, or a quarter of the cells.
pub const VOWEL_SLOTS: usize = if BOARD_CELLS / 4 > MIN_VOWELS {
    BOARD_CELLS / 4
} else {
    MIN_VOWELS
};

pub const CONSONANT_SLOTS: usize = BOARD_CELLS - VOWEL_SLOTS;

/// A 4x4 grid of letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: [char; BOARD_CELLS],
}

impl Board {
    /// Build a board from exactly 16 letters. Letters are upper-cased.
    pub fn new(letters: [char; BOARD_CELLS]) -> Self {
        Self {
            letters: letters.map(|c| c.to_ascii_uppercase()),
        }
    }

    /// Build a board from a 16 letter string, e.g. `"CATSXXXXXXXXXXXX"`.
    /// Returns `None` for any other length or for non-letters.
    pub fn from_str_letters(s: &str) -> Option<Self> {
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let chars: Vec<char> = s.chars().collect();
        let letters: [char; BOARD_CELLS] = chars.try_into().ok()?;
        Some(Self::new(letters))
    }

    /// Generate a board using the thread RNG.
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut rand::rng())
    }

    /// Generate a board using a specific RNG (for testing/seeding).
    pub fn generate_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut letters = draw_letters(rng);
        letters.shuffle(rng);
        Self { letters }
    }

    /// Letter at a cell index, if the index is on the board.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The letters of each row, e.g. `["CATS", ...]`.
    pub fn rows(&self) -> Vec<String> {
        self.letters
            .chunks(GRID_SIZE)
            .map(|row| row.iter().collect())
            .collect()
    }
}

/// Draw the unshuffled board letters: the vowel slots first, then the
/// consonant slots. Every draw is independent and with replacement.
fn draw_letters<R: Rng>(rng: &mut R) -> [char; BOARD_CELLS] {
    let mut letters = ['A'; BOARD_CELLS];
    for slot in letters.iter_mut().take(VOWEL_SLOTS) {
        *slot = VOWELS[rng.random_range(0..VOWELS.len())];
    }
    for slot in letters.iter_mut().skip(VOWEL_SLOTS).take(CONSONANT_SLOTS) {
        *slot = CONSONANTS[rng.random_range(0..CONSONANTS.len())];
    }
    letters
}

/// Board source owned by a session. Seeded generators replay the same
/// sequence of boards.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    rng: StdRng,
}

impl BoardGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn next_board(&mut self) -> Board {
        Board::generate_with_rng(&mut self.rng)
    }
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Words found during a session, unique and in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct FoundWords {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.to_uppercase();
        if !self.seen.insert(word.clone()) {
            return false;
        }
        self.order.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(&word.to_uppercase())
    }

    pub fn words(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}
