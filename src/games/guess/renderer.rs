//! Ratatui drawing for the guessing game - no game logic here
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::engine::Snapshot;
use super::feedback::{Message, MessageKind};
use super::rules::{MAX_HINTS, MAX_SECRET};

/// Everything the screen needs for one frame
pub struct ScreenView<'a> {
    pub snapshot: Snapshot,
    pub hints_remaining: u8,
    pub input: &'a str,
    pub message: Option<&'a Message>,
    pub celebrating: bool,
}

pub fn render(f: &mut Frame, view: &ScreenView) {
    let frame_style = if view.celebrating {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let outer = Block::default()
        .title(" 🎯 GUESS THE NUMBER ")
        .borders(Borders::ALL)
        .border_style(frame_style);
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(format!(
            "I'm thinking of a number between 0 and {}. Can you find it?",
            MAX_SECRET
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let s = view.snapshot;
    let stats = Line::from(vec![
        Span::raw(" Attempts: "),
        Span::styled(s.attempts.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw("   Score: "),
        Span::styled(s.score.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(format!("   Hints: {}/{}", s.hints_used, MAX_HINTS)),
        Span::raw(format!("   Round: {}", s.round)),
    ]);
    f.render_widget(
        Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title(" STATS ")),
        chunks[1],
    );

    let input_text = if s.is_over {
        "(game over)".to_string()
    } else {
        format!("> {}", view.input)
    };
    f.render_widget(
        Paragraph::new(input_text).block(Block::default().borders(Borders::ALL).title(" YOUR GUESS ")),
        chunks[2],
    );
    if !s.is_over {
        // Inside the border, after "> "
        let x = chunks[2].x + 3 + view.input.chars().count() as u16;
        f.set_cursor_position((x, chunks[2].y + 1));
    }

    let message = match view.message {
        Some(m) => Paragraph::new(m.text.as_str()).style(Style::default().fg(color_for(m.kind))),
        None => Paragraph::new(""),
    };
    f.render_widget(
        message.alignment(Alignment::Center).block(Block::default().borders(Borders::ALL)),
        chunks[3],
    );

    f.render_widget(
        Paragraph::new(legend(s.is_over, view.hints_remaining))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[5],
    );
}

fn color_for(kind: MessageKind) -> Color {
    match kind {
        MessageKind::Success => Color::Green,
        MessageKind::Warning => Color::Yellow,
        MessageKind::Error => Color::Red,
    }
}

/// Key help; actions that cannot be taken right now are left out
fn legend(is_over: bool, hints_remaining: u8) -> String {
    let mut keys = Vec::new();
    if is_over {
        keys.push("[R] New Game".to_string());
    } else {
        keys.push("[0-9] Type  [Enter] Guess".to_string());
        if hints_remaining > 0 {
            keys.push(format!("[H] Hint ({} left)", hints_remaining));
        }
    }
    keys.push("[Esc] Quit".to_string());
    keys.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_hides_unavailable_actions() {
        assert!(legend(false, 2).contains("[H] Hint (2 left)"));
        assert!(!legend(false, 0).contains("[H]"));
        assert!(!legend(false, 3).contains("[R]"));

        let over = legend(true, 3);
        assert!(over.contains("[R] New Game"));
        assert!(!over.contains("[H]"));
        assert!(!over.contains("[Enter]"));
    }
}
