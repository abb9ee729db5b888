//! UI rendering using ratatui
//!
//! Supports three screens:
//! - Menu: title and instructions
//! - Playing: letter grid, timer, score, feedback and found words
//! - Over: final score, medal and share message

use crate::app::{AppCoordinator, GameSession, Medal, SessionPhase};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::GameLayout;

/// Render the appropriate screen based on session phase
pub fn render(frame: &mut Frame, app: &AppCoordinator) {
    match app.session.phase() {
        SessionPhase::Menu => render_menu(frame),
        SessionPhase::Playing => render_game(frame, app),
        SessionPhase::Over => render_game_over(frame, &app.session),
    }
}

fn render_menu(frame: &mut Frame) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Tagline
            Constraint::Length(8), // Instructions
            Constraint::Min(0),
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let title = Paragraph::new("Welcome to WordSwipe!")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout[0]);

    let tagline = Paragraph::new("Swipe letters to form words. Find as many as you can!")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, layout[1]);

    let instructions = Paragraph::new(vec![
        Line::from("How to Play:").bold(),
        Line::from("• Drag the mouse over letters to form words"),
        Line::from("• Find as many words as possible in 2 minutes"),
        Line::from("• Each letter can only be used once per word"),
        Line::from("• Earn points for each word found"),
        Line::from("• Bigger words = more points!"),
    ])
    .style(Style::default().fg(Color::Cyan))
    .alignment(Alignment::Center);
    frame.render_widget(instructions, layout[2]);

    let footer = Paragraph::new("Enter Start Game  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

fn render_game(frame: &mut Frame, app: &AppCoordinator) {
    let session = &app.session;
    let layout = GameLayout::new(frame.area());

    render_header(frame, layout.header, session);
    render_board(frame, &layout, session);

    let current = Paragraph::new(format!("Current Word: {}", session.current_word()))
        .style(Style::default().fg(Color::White).bold())
        .alignment(Alignment::Center);
    frame.render_widget(current, layout.current_word);

    if let Some(feedback) = app.feedback() {
        let color = if feedback.accepted {
            Color::Green
        } else {
            Color::Red
        };
        let message = Paragraph::new(feedback.text.as_str())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        frame.render_widget(message, layout.feedback);
    }

    render_found_words(frame, layout.found_words, session);

    let footer = Paragraph::new("Drag across letters to form words  Esc End game  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}

/// Render the header: title | score | timer
fn render_header(frame: &mut Frame, area: Rect, session: &GameSession) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(block, area);

    let title = Paragraph::new("WordSwipe").style(Style::default().fg(Color::Yellow).bold());
    frame.render_widget(title, header_layout[0]);

    let score = Paragraph::new(format!("Score: {}", session.score()))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, header_layout[1]);

    let timer_color = if session.time_remaining() <= 10 {
        Color::Red
    } else if session.time_remaining() <= 30 {
        Color::Yellow
    } else {
        Color::Green
    };
    let timer = Paragraph::new(format!("Time: {}", format_timer(session.time_remaining())))
        .style(Style::default().fg(timer_color).bold())
        .alignment(Alignment::Right);
    frame.render_widget(timer, header_layout[2]);
}

fn render_board(frame: &mut Frame, layout: &GameLayout, session: &GameSession) {
    for (cell, rect) in session.cells().iter().zip(layout.cells.iter()) {
        if rect.is_empty() {
            continue;
        }
        let style = if cell.selected {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White).bold()
        };
        let letter = Paragraph::new(cell.letter.to_string())
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(letter, *rect);
    }
}

fn render_found_words(frame: &mut Frame, area: Rect, session: &GameSession) {
    let found = session.found_words();
    let words = if found.is_empty() {
        Paragraph::new("No words yet").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(found.words().join("  ")).style(Style::default().fg(Color::Green))
    };
    let words = words
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!("Found Words ({})", found.len())),
        );
    frame.render_widget(words, area);
}

fn render_game_over(frame: &mut Frame, session: &GameSession) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Score
            Constraint::Length(2), // Words found
            Constraint::Length(2), // Medal
            Constraint::Length(3), // Share
            Constraint::Min(0),
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let header = Paragraph::new("Game Over!")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let score = Paragraph::new(format!("Your Score: {}", session.score()))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, layout[1]);

    let words = Paragraph::new(format!("Words Found: {}", session.found_words().len()))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(words, layout[2]);

    let medal = session.medal();
    let medal_widget = Paragraph::new(format!("{} {} medal", medal.icon(), medal.label()))
        .style(Style::default().fg(medal_color(medal)).bold())
        .alignment(Alignment::Center);
    frame.render_widget(medal_widget, layout[3]);

    let share = Paragraph::new(share_text(session.score()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(share, layout[4]);

    let footer = Paragraph::new("Enter Play Again  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[6]);
}

fn medal_color(medal: Medal) -> Color {
    match medal {
        Medal::Gold => Color::Yellow,
        Medal::Silver => Color::White,
        Medal::Bronze => Color::LightRed,
        Medal::Participation => Color::Cyan,
    }
}

/// Text a player can paste to share their result
pub fn share_text(score: u32) -> String {
    format!(
        "I scored {} points in WordSwipe! Can you beat my score?",
        score
    )
}

/// Format the timer display
fn format_timer(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}
