//! WordSwipe - a terminal word-finding game
//!
//! Drag across adjacent letters to spell words. Find as many as you can
//! before the clock runs out.

mod app;
mod cli;
mod game;
mod tui;

use app::{AppCoordinator, GameSession, SessionPhase};
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use game::dictionary::Dictionary;
use game::validation::WordJudge;
use game::{Board, BoardGenerator};
use log::{error, info};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tui::{GameLayout, Tui};

/// Longest the loop waits for input before redrawing
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    let args = cli::parse();
    cli::init_logging(&args, !args.print_board);

    if args.print_board {
        let board = match (&args.board, args.seed) {
            (Some(board), _) => board.clone(),
            (None, Some(seed)) => BoardGenerator::new(Some(seed)).next_board(),
            (None, None) => Board::generate(),
        };
        for row in board.rows() {
            println!("{}", row);
        }
        return ExitCode::SUCCESS;
    }

    let dictionary = match &args.words {
        Some(path) => match Dictionary::load(path) {
            Ok(dictionary) => Arc::new(dictionary),
            Err(e) => {
                error!("{}", e);
                eprintln!("wordswipe: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Dictionary::embedded(),
    };
    info!("dictionary loaded: {} words", dictionary.word_count());

    let session = GameSession::new(WordJudge::new(dictionary), BoardGenerator::new(args.seed))
        .with_duration(args.duration)
        .with_board(args.board.clone());
    let mut app = AppCoordinator::new(session);

    match run(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("terminal error: {}", e);
            eprintln!("wordswipe: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(app: &mut AppCoordinator) -> io::Result<()> {
    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    loop {
        terminal.draw(|frame| tui::render(frame, app))?;

        let timeout = app.next_wakeup(Instant::now(), MAX_POLL_INTERVAL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Esc => app.back(Instant::now()),
                    KeyCode::Enter | KeyCode::Char(' ') => app.confirm(Instant::now()),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    let layout = GameLayout::new(terminal.area()?);
                    on_mouse(app, &layout, mouse);
                }
                Event::FocusLost => app.gesture_release(Instant::now()),
                _ => {}
            }
        }

        // Handle timer ticks and feedback expiry
        app.poll(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

/// Translate mouse input into cell gestures
fn on_mouse(app: &mut AppCoordinator, layout: &GameLayout, mouse: MouseEvent) {
    if app.session.phase() != SessionPhase::Playing {
        return;
    }
    let now = Instant::now();
    let cell = layout.cell_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = cell {
                app.cell_engage(index, now);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => match cell {
            Some(index) => app.cell_enter(index, now),
            // Dragging off the grid ends the gesture like a release
            None if !layout.on_board(mouse.column, mouse.row) && app.session.is_selecting() => {
                app.gesture_release(now)
            }
            None => {}
        },
        MouseEventKind::Up(MouseButton::Left) => app.gesture_release(now),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use crossterm::event::MouseEventKind::{Down, Drag, Up};
    use ratatui::layout::Rect;

    fn coordinator() -> AppCoordinator {
        let session = GameSession::new(
            WordJudge::new(Arc::new(Dictionary::from_words(["CAT"]))),
            BoardGenerator::new(Some(1)),
        )
        .with_board(Board::from_str_letters("CATSXXXXXXXXXXXX"));
        let mut app = AppCoordinator::new(session);
        app.start(Instant::now());
        app
    }

    fn layout() -> GameLayout {
        GameLayout::new(Rect::new(0, 0, 80, 30))
    }

    fn send(app: &mut AppCoordinator, layout: &GameLayout, kind: MouseEventKind, at: (u16, u16)) {
        let (column, row) = at;
        let mouse = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        on_mouse(app, layout, mouse);
    }

    fn cell_pos(layout: &GameLayout, index: usize) -> (u16, u16) {
        let cell = layout.cells[index];
        (cell.x + cell.width / 2, cell.y + cell.height / 2)
    }

    #[test]
    fn test_press_drag_release_scores_word() {
        let layout = layout();
        let mut app = coordinator();

        send(&mut app, &layout, Down(MouseButton::Left), cell_pos(&layout, 0));
        send(&mut app, &layout, Drag(MouseButton::Left), cell_pos(&layout, 1));
        send(&mut app, &layout, Drag(MouseButton::Left), cell_pos(&layout, 2));
        assert_eq!(app.session.current_word(), "CAT");

        send(&mut app, &layout, Up(MouseButton::Left), (0, 0));
        assert!(!app.session.is_selecting());
        assert_eq!(app.session.score(), 30);
    }

    #[test]
    fn test_drag_off_grid_releases_gesture() {
        let layout = layout();
        let mut app = coordinator();

        send(&mut app, &layout, Down(MouseButton::Left), cell_pos(&layout, 0));
        send(&mut app, &layout, Drag(MouseButton::Left), cell_pos(&layout, 1));
        send(&mut app, &layout, Drag(MouseButton::Left), cell_pos(&layout, 2));
        send(&mut app, &layout, Drag(MouseButton::Left), (0, 0));

        assert!(!app.session.is_selecting());
        assert_eq!(app.session.score(), 30);
        assert_eq!(app.session.found_words().words(), ["CAT"]);

        // Coming back onto the grid without a new press does nothing
        send(&mut app, &layout, Drag(MouseButton::Left), cell_pos(&layout, 3));
        assert!(!app.session.is_selecting());
    }

    #[test]
    fn test_drag_off_grid_without_selection_is_ignored() {
        let layout = layout();
        let mut app = coordinator();
        app.session.drain_events();

        send(&mut app, &layout, Drag(MouseButton::Left), (0, 0));
        assert!(!app.session.is_selecting());
        assert!(app.session.drain_events().is_empty());
    }

    #[test]
    fn test_mouse_ignored_outside_play() {
        let layout = layout();
        let mut app = coordinator();
        app.back(Instant::now());
        assert_eq!(app.session.phase(), SessionPhase::Over);

        send(&mut app, &layout, Down(MouseButton::Left), cell_pos(&layout, 0));
        assert!(!app.session.is_selecting());
    }
}
