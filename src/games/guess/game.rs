use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::engine::{GameEngine, GuessResult};
use super::feedback::{self, Message, ENCOURAGE_AT_ATTEMPT};
use super::input::clamp_input;
use super::renderer::{self, ScreenView};
use super::secret::SecretSource;
use crate::{Context, Game};

const ENCOURAGE_DELAY: Duration = Duration::from_secs(2);
const CELEBRATION_DELAY: Duration = Duration::from_millis(500);
const CELEBRATION_LENGTH: Duration = Duration::from_secs(2);

/// Timed effects; each carries the round it was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Encourage { round: u32 },
    CelebrationStart { round: u32 },
    CelebrationEnd { round: u32 },
}

impl ScreenEvent {
    fn round(&self) -> u32 {
        match *self {
            ScreenEvent::Encourage { round }
            | ScreenEvent::CelebrationStart { round }
            | ScreenEvent::CelebrationEnd { round } => round,
        }
    }
}

/// Interactive front end: maps keys onto engine commands and keeps the
/// presentation-only state (input box, last message, celebration flag).
pub struct GuessScreen<S: SecretSource> {
    engine: GameEngine<S>,
    input: String,
    message: Option<Message>,
    celebrating: bool,
}

impl<S: SecretSource> GuessScreen<S> {
    pub fn new(engine: GameEngine<S>) -> Self {
        Self {
            engine,
            input: String::new(),
            message: None,
            celebrating: false,
        }
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    fn submit(&mut self, ctx: &Context<ScreenEvent>) {
        if self.engine.is_over() {
            return;
        }

        let result = self.engine.submit_guess(&self.input);
        if let Some(msg) = feedback::for_guess(&result) {
            self.message = Some(msg);
        }
        if matches!(result, GuessResult::Invalid { .. }) {
            return;
        }
        self.input.clear();

        let round = self.engine.round();
        if matches!(result, GuessResult::Correct { .. }) {
            ctx.schedule(CELEBRATION_DELAY, ScreenEvent::CelebrationStart { round });
            ctx.schedule(
                CELEBRATION_DELAY + CELEBRATION_LENGTH,
                ScreenEvent::CelebrationEnd { round },
            );
        } else if self.engine.attempts() == ENCOURAGE_AT_ATTEMPT {
            ctx.schedule(ENCOURAGE_DELAY, ScreenEvent::Encourage { round });
        }
    }

    fn hint(&mut self) {
        let result = self.engine.request_hint();
        if let Some(msg) = feedback::for_hint(&result) {
            self.message = Some(msg);
        }
    }

    fn restart(&mut self) {
        if !self.engine.is_over() {
            return;
        }
        self.engine.restart();
        self.input.clear();
        self.message = None;
        self.celebrating = false;
    }
}

impl<S: SecretSource> Game for GuessScreen<S> {
    type Event = ScreenEvent;

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Event>) {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if !self.engine.is_over() {
                    self.input.push(c);
                    clamp_input(&mut self.input);
                }
            }
            KeyCode::Char('h') | KeyCode::Char('H') => self.hint(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(ctx),
            _ => {}
        }
    }

    fn on_event(&mut self, event: Self::Event, _ctx: &Context<Self::Event>) {
        if event.round() != self.engine.round() {
            debug!(?event, "dropping event from an earlier round");
            return;
        }
        match event {
            ScreenEvent::Encourage { .. } => {
                if !self.engine.is_over() {
                    self.message = Some(feedback::encouragement());
                }
            }
            ScreenEvent::CelebrationStart { .. } => self.celebrating = true,
            ScreenEvent::CelebrationEnd { .. } => self.celebrating = false,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(
            frame,
            &ScreenView {
                snapshot: self.engine.snapshot(),
                hints_remaining: self.engine.hints_remaining(),
                input: &self.input,
                message: self.message.as_ref(),
                celebrating: self.celebrating,
            },
        );
    }
}
