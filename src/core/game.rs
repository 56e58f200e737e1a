//! Core game interface for the guessterm terminal host
use std::time::Duration;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

/// Handle a game uses to post events back to itself through the engine loop
pub struct Context<E> {
    pub(crate) tx: UnboundedSender<E>,
}

impl<E: Send + 'static> Context<E> {
    pub fn new(tx: UnboundedSender<E>) -> Self {
        Self { tx }
    }

    /// Deliver an event after `delay`. Must be called inside a tokio runtime.
    pub fn schedule(&self, delay: Duration, event: E) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver only goes away when the loop has exited
            let _ = tx.send(event);
        });
    }
}

/// Main game trait driven by [`crate::core::engine::Engine`]
pub trait Game {
    /// Events the game schedules for itself (timers, deferred messages)
    type Event: Send + 'static;

    /// Keyboard input (Esc is reserved by the engine for quitting)
    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Event>);

    fn on_event(&mut self, event: Self::Event, ctx: &Context<Self::Event>);

    fn render(&self, frame: &mut ratatui::Frame);
}
