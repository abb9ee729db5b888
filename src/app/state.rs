//! Game session state: board, score, countdown, found words and phase

use crate::game::path::PathSelector;
use crate::game::validation::{Outcome, WordJudge};
use crate::game::{Board, BoardGenerator, FoundWords, BOARD_CELLS};

/// Default round duration in seconds
pub const DEFAULT_ROUND_DURATION: u32 = 120;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Before the first game
    Menu,
    Playing,
    Over,
}

impl SessionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            SessionPhase::Menu => "menu",
            SessionPhase::Playing => "playing",
            SessionPhase::Over => "over",
        }
    }
}

/// Notifications for the presentation layer, drained after each event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    PhaseChanged { from: SessionPhase, to: SessionPhase },
    Judged { outcome: Outcome },
    ScoreChanged { delta: u32, total: u32 },
    TimeChanged { remaining: u32 },
}

/// What the presentation layer needs to draw one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: char,
    pub selected: bool,
}

/// End-of-game award tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Participation,
}

impl Medal {
    pub fn for_score(score: u32) -> Self {
        match score {
            1000.. => Medal::Gold,
            500..=999 => Medal::Silver,
            250..=499 => Medal::Bronze,
            _ => Medal::Participation,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
            Medal::Participation => "Participation",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
            Medal::Participation => "🏅",
        }
    }
}

/// One player's game: owns the board, score, countdown and found words.
pub struct GameSession {
    phase: SessionPhase,
    board: Option<Board>,
    score: u32,
    time_remaining: u32,
    round_duration: u32,
    fixed_board: Option<Board>,
    found_words: FoundWords,
    selector: PathSelector,
    judge: WordJudge,
    generator: BoardGenerator,
    events: Vec<SessionEvent>,
}

impl GameSession {
    pub fn new(judge: WordJudge, generator: BoardGenerator) -> Self {
        Self {
            phase: SessionPhase::Menu,
            board: None,
            score: 0,
            time_remaining: DEFAULT_ROUND_DURATION,
            round_duration: DEFAULT_ROUND_DURATION,
            fixed_board: None,
            found_words: FoundWords::new(),
            selector: PathSelector::new(),
            judge,
            generator,
            events: Vec::new(),
        }
    }

    /// Use a round length other than the default. Zero is treated as one second.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.round_duration = seconds.max(1);
        self.time_remaining = self.round_duration;
        self
    }

    /// Play every round on the same board instead of generating one
    pub fn with_board(mut self, board: Option<Board>) -> Self {
        self.fixed_board = board;
        self
    }

    /// Start a new game on a freshly generated (or the fixed) board
    pub fn start(&mut self) {
        let board = match &self.fixed_board {
            Some(board) => board.clone(),
            None => self.generator.next_board(),
        };
        self.start_with_board(board);
    }

    /// Start a new game on the given board
    pub fn start_with_board(&mut self, board: Board) {
        self.board = Some(board);
        self.score = 0;
        self.time_remaining = self.round_duration;
        self.found_words.clear();
        self.selector.cancel();
        self.set_phase(SessionPhase::Playing);
        self.events.push(SessionEvent::TimeChanged {
            remaining: self.time_remaining,
        });
    }

    /// Advance the countdown by one second. Ignored unless playing.
    pub fn tick(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.events.push(SessionEvent::TimeChanged {
            remaining: self.time_remaining,
        });
        if self.time_remaining == 0 {
            self.end_game();
        }
    }

    /// End the running game regardless of the clock
    pub fn force_game_over(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        // An unfinished gesture is discarded, never judged
        self.selector.cancel();
        self.set_phase(SessionPhase::Over);
    }

    fn set_phase(&mut self, to: SessionPhase) {
        let from = self.phase;
        self.phase = to;
        self.events.push(SessionEvent::PhaseChanged { from, to });
    }

    /// Judge a candidate word. Returns `None` when not playing or when the
    /// candidate is shorter than two letters.
    pub fn submit(&mut self, candidate: &str) -> Option<Outcome> {
        if self.phase != SessionPhase::Playing || candidate.chars().count() < 2 {
            return None;
        }
        let board = self.board.as_ref()?;
        let outcome = self.judge.judge(candidate, board, &self.found_words);

        if let Outcome::Accepted { word, points } = &outcome {
            self.found_words.insert(word);
            self.score += points;
            self.events.push(SessionEvent::ScoreChanged {
                delta: *points,
                total: self.score,
            });
        }
        self.events.push(SessionEvent::Judged {
            outcome: outcome.clone(),
        });
        Some(outcome)
    }

    /// Pointer pressed on a cell
    pub fn cell_engage(&mut self, index: usize) {
        if self.phase == SessionPhase::Playing {
            self.selector.engage(index);
        }
    }

    /// Pointer dragged into a cell
    pub fn cell_enter(&mut self, index: usize) {
        if self.phase == SessionPhase::Playing {
            self.selector.enter(index);
        }
    }

    /// Pointer released: judge the traced word
    pub fn gesture_release(&mut self) -> Option<Outcome> {
        let path = self.selector.release();
        let word = match &self.board {
            Some(board) => crate::game::path::word_for_path(&path, board),
            None => return None,
        };
        self.submit(&word)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn found_words(&self) -> &FoundWords {
        &self.found_words
    }

    pub fn is_selecting(&self) -> bool {
        self.selector.is_selecting()
    }

    /// Letters of the in-progress selection
    pub fn current_word(&self) -> String {
        match &self.board {
            Some(board) => self.selector.word(board),
            None => String::new(),
        }
    }

    /// Letter and selection state for a cell
    pub fn cell(&self, index: usize) -> Option<CellView> {
        let letter = self.board.as_ref()?.letter(index)?;
        Some(CellView {
            letter,
            selected: self.selector.contains(index),
        })
    }

    /// All cells in board order (empty before the first game)
    pub fn cells(&self) -> Vec<CellView> {
        (0..BOARD_CELLS).filter_map(|i| self.cell(i)).collect()
    }

    pub fn medal(&self) -> Medal {
        Medal::for_score(self.score)
    }

    /// Take the notifications recorded since the last call
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::Dictionary;
    use std::sync::Arc;

    const CAT_BOARD: &str = "CATSXXXXDOGXXXXX";

    fn session() -> GameSession {
        let dictionary = Dictionary::from_words(["CAT", "CATS", "DOG", "AT", "QUIZ"]);
        GameSession::new(
            WordJudge::new(Arc::new(dictionary)),
            BoardGenerator::new(Some(3)),
        )
    }

    fn playing() -> GameSession {
        let mut session = session();
        session.start_with_board(Board::from_str_letters(CAT_BOARD).unwrap());
        session
    }

    fn swipe(session: &mut GameSession, path: &[usize]) -> Option<Outcome> {
        session.cell_engage(path[0]);
        for &i in &path[1..] {
            session.cell_enter(i);
        }
        session.gesture_release()
    }

    #[test]
    fn test_starts_in_menu() {
        let session = session();
        assert_eq!(session.phase(), SessionPhase::Menu);
        assert!(session.board.is_none());
        assert!(session.cells().is_empty());
        assert_eq!(session.time_remaining(), DEFAULT_ROUND_DURATION);
    }

    #[test]
    fn test_start_generates_board() {
        let mut session = session();
        session.start();
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.cells().len(), BOARD_CELLS);
        assert_eq!(session.time_remaining(), 120);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_fixed_board_reused_every_round() {
        let board = Board::from_str_letters(CAT_BOARD).unwrap();
        let mut session = session().with_board(Some(board.clone()));
        session.start();
        assert_eq!(session.board.as_ref(), Some(&board));

        session.force_game_over();
        session.start();
        assert_eq!(session.board.as_ref(), Some(&board));
        assert!(swipe(&mut session, &[0, 1, 2]).unwrap().is_accepted());
    }

    #[test]
    fn test_end_to_end_accept_then_already_found() {
        let mut session = playing();

        let outcome = swipe(&mut session, &[0, 1, 2]);
        assert_eq!(
            outcome,
            Some(Outcome::Accepted {
                word: "CAT".to_string(),
                points: 30
            })
        );
        assert_eq!(session.score(), 30);
        assert_eq!(session.found_words().words(), ["CAT"]);

        let outcome = swipe(&mut session, &[0, 1, 2]);
        assert_eq!(
            outcome,
            Some(Outcome::AlreadyFound {
                word: "CAT".to_string()
            })
        );
        assert_eq!(session.score(), 30);
        assert_eq!(session.found_words().len(), 1);
    }

    #[test]
    fn test_rejections_leave_score_alone() {
        let mut session = playing();

        // "TAC": formable, not a word
        let outcome = swipe(&mut session, &[2, 1, 0]).unwrap();
        assert!(matches!(outcome, Outcome::InvalidWord { .. }));

        // "QUIZ": a word, but not on the board
        let outcome = session.submit("quiz").unwrap();
        assert!(matches!(outcome, Outcome::NotFormable { .. }));

        assert_eq!(session.score(), 0);
        assert!(session.found_words().is_empty());
    }

    #[test]
    fn test_short_selection_not_judged() {
        let mut session = playing();
        session.drain_events();

        assert_eq!(swipe(&mut session, &[0]), None);
        assert_eq!(session.submit("A"), None);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_non_adjacent_moves_ignored_mid_gesture() {
        let mut session = playing();
        session.cell_engage(0);
        session.cell_enter(2); // not adjacent to 0
        session.cell_enter(1);
        session.cell_enter(0); // already selected
        session.cell_enter(2);
        assert_eq!(session.current_word(), "CAT");
        assert_eq!(session.selector.path(), [0, 1, 2]);
        assert!(session.cell(1).unwrap().selected);
        assert!(!session.cell(3).unwrap().selected);

        assert!(session.gesture_release().unwrap().is_accepted());
        assert!(session.selector.path().is_empty());
    }

    #[test]
    fn test_timer_countdown() {
        let mut session = playing().with_duration(5);
        session.start_with_board(Board::from_str_letters(CAT_BOARD).unwrap());
        assert_eq!(session.time_remaining(), 5);

        for expected in (1..5).rev() {
            session.tick();
            assert_eq!(session.time_remaining(), expected);
            assert!(session.is_playing());
        }

        session.tick();
        assert_eq!(session.time_remaining(), 0);
        assert_eq!(session.phase(), SessionPhase::Over);

        // Late ticks are no-ops
        session.tick();
        session.tick();
        assert_eq!(session.time_remaining(), 0);
        assert_eq!(session.phase(), SessionPhase::Over);
    }

    #[test]
    fn test_full_round_is_120_ticks() {
        let mut session = playing();
        for _ in 0..119 {
            session.tick();
        }
        assert!(session.is_playing());
        assert_eq!(session.time_remaining(), 1);
        session.tick();
        assert_eq!(session.phase(), SessionPhase::Over);
    }

    #[test]
    fn test_timeout_discards_selection() {
        let mut session = playing().with_duration(1);
        session.start_with_board(Board::from_str_letters(CAT_BOARD).unwrap());

        session.cell_engage(0);
        session.cell_enter(1);
        session.cell_enter(2);
        session.tick();

        assert_eq!(session.phase(), SessionPhase::Over);
        assert!(!session.is_selecting());
        assert_eq!(session.gesture_release(), None);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_input_locked_when_over() {
        let mut session = playing();
        session.force_game_over();
        assert_eq!(session.phase(), SessionPhase::Over);

        session.cell_engage(0);
        assert!(!session.is_selecting());
        assert_eq!(session.submit("CAT"), None);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_force_game_over_only_from_playing() {
        let mut session = session();
        session.force_game_over();
        assert_eq!(session.phase(), SessionPhase::Menu);
    }

    #[test]
    fn test_replay_resets_state() {
        let mut session = playing();
        session.submit("CAT");
        session.tick();
        session.force_game_over();

        session.start();
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.score(), 0);
        assert!(session.found_words().is_empty());
        assert_eq!(session.time_remaining(), 120);
    }

    #[test]
    fn test_events_recorded() {
        let mut session = session();
        session.start_with_board(Board::from_str_letters(CAT_BOARD).unwrap());
        session.submit("CAT");
        session.tick();

        let events = session.drain_events();
        assert_eq!(
            events,
            vec![
                SessionEvent::PhaseChanged {
                    from: SessionPhase::Menu,
                    to: SessionPhase::Playing
                },
                SessionEvent::TimeChanged { remaining: 120 },
                SessionEvent::ScoreChanged {
                    delta: 30,
                    total: 30
                },
                SessionEvent::Judged {
                    outcome: Outcome::Accepted {
                        word: "CAT".to_string(),
                        points: 30
                    }
                },
                SessionEvent::TimeChanged { remaining: 119 },
            ]
        );
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_medal_tiers() {
        assert_eq!(Medal::for_score(0), Medal::Participation);
        assert_eq!(Medal::for_score(249), Medal::Participation);
        assert_eq!(Medal::for_score(250), Medal::Bronze);
        assert_eq!(Medal::for_score(500), Medal::Silver);
        assert_eq!(Medal::for_score(999), Medal::Silver);
        assert_eq!(Medal::for_score(1000), Medal::Gold);
    }
}
