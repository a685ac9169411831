//! Presentation events.
//!
//! The session reports what happened on a move; whoever drives the UI turns
//! these into sounds, toasts or log lines. Nothing in the engine waits on a
//! sink.

use crate::game::Outcome;
use crate::types::{Move, Piece, Square};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Moved { piece: Piece, mv: Move },
    Captured { by: Piece, victim: Piece, at: Square },
    Teleported { mv: Move },
    DragonFlight { mv: Move },
    GameOver(Outcome),
}

pub trait EventSink {
    fn notify(&mut self, event: &GameEvent);
}

/// Collects events, mostly for tests.
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &GameEvent) {}
}
