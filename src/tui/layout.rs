//! Screen geometry for the playing screen
//!
//! Rendering and mouse hit-testing share this layout so a click always
//! lands on the cell drawn under it.

use crate::game::{BOARD_CELLS, GRID_SIZE};
use ratatui::prelude::*;

/// Terminal columns per letter cell (including border)
pub const CELL_WIDTH: u16 = 7;
/// Terminal rows per letter cell (including border)
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * GRID_SIZE as u16;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * GRID_SIZE as u16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLayout {
    pub header: Rect,
    pub board: Rect,
    pub cells: [Rect; BOARD_CELLS],
    pub current_word: Rect,
    pub feedback: Rect,
    pub found_words: Rect,
    pub footer: Rect,
}

impl GameLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Header: title, score, timer
                Constraint::Length(BOARD_HEIGHT), // Letter grid
                Constraint::Length(1),            // Current word
                Constraint::Length(1),            // Feedback
                Constraint::Min(3),               // Found words
                Constraint::Length(1),            // Footer
            ])
            .margin(1)
            .split(area);

        let board_row = rows[1];
        let board = Rect::new(
            board_row.x + board_row.width.saturating_sub(BOARD_WIDTH) / 2,
            board_row.y,
            BOARD_WIDTH.min(board_row.width),
            board_row.height,
        );

        let cells = std::array::from_fn(|i| {
            let row = (i / GRID_SIZE) as u16;
            let col = (i % GRID_SIZE) as u16;
            let cell = Rect::new(
                board.x + col * CELL_WIDTH,
                board.y + row * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board);
            // Cells clipped away entirely are never drawn or hit
            if cell.is_empty() {
                Rect::default()
            } else {
                cell
            }
        });

        Self {
            header: rows[0],
            board,
            cells,
            current_word: rows[2],
            feedback: rows[3],
            found_words: rows[4],
            footer: rows[5],
        }
    }

    /// Whether a terminal position lies on the letter grid
    pub fn on_board(&self, column: u16, row: u16) -> bool {
        self.board.contains(Position::new(column, row))
    }

    /// Map a terminal position to the cell drawn there
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cells.iter().position(|cell| {
            column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height
        })
    }
}
