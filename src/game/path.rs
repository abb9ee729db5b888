//! Adjacency-constrained path selection over the board
//!
//! A drag gesture engages one cell, then extends the path into neighbouring
//! cells that have not been visited yet. Releasing the gesture turns the
//! path into a candidate word.

use super::{Board, BOARD_CELLS, GRID_SIZE};

/// Check whether two cell indices touch, diagonals included.
pub fn is_adjacent(from: usize, to: usize) -> bool {
    if from == to || from >= BOARD_CELLS || to >= BOARD_CELLS {
        return false;
    }
    let (from_row, from_col) = (from / GRID_SIZE, from % GRID_SIZE);
    let (to_row, to_col) = (to / GRID_SIZE, to % GRID_SIZE);

    from_row.abs_diff(to_row) <= 1 && from_col.abs_diff(to_col) <= 1
}

/// Selection state for one gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PathSelector {
    #[default]
    Idle,
    Selecting { path: Vec<usize> },
}

impl PathSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture on `index`. Any previous path is replaced.
    pub fn engage(&mut self, index: usize) {
        if index >= BOARD_CELLS {
            return;
        }
        *self = PathSelector::Selecting { path: vec![index] };
    }

    /// Extend the path into `index`.
    /// Returns false (and leaves the path untouched) for moves that are not
    /// adjacent to the last cell or that revisit a cell.
    pub fn enter(&mut self, index: usize) -> bool {
        let PathSelector::Selecting { path } = self else {
            return false;
        };
        let Some(&last) = path.last() else {
            return false;
        };
        if !is_adjacent(last, index) || path.contains(&index) {
            return false;
        }
        path.push(index);
        true
    }

    /// End the gesture, returning the traced path. The selector is idle
    /// afterwards whatever the path held.
    pub fn release(&mut self) -> Vec<usize> {
        match std::mem::take(self) {
            PathSelector::Idle => Vec::new(),
            PathSelector::Selecting { path } => path,
        }
    }

    /// Drop the gesture without producing a path.
    pub fn cancel(&mut self) {
        *self = PathSelector::Idle;
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, PathSelector::Selecting { .. })
    }

    /// The current path (empty when idle)
    pub fn path(&self) -> &[usize] {
        match self {
            PathSelector::Idle => &[],
            PathSelector::Selecting { path } => path,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.path().contains(&index)
    }

    /// Letters along the current path, in selection order
    pub fn word(&self, board: &Board) -> String {
        word_for_path(self.path(), board)
    }
}

/// Concatenate the board letters at each index of `path`.
pub fn word_for_path(path: &[usize], board: &Board) -> String {
    path.iter().filter_map(|&i| board.letter(i)).collect()
}
