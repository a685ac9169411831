//! A game session: the live board plus turn, capture and history state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    board::Board,
    error::{CoreError, Rejection},
    events::{EventSink, GameEvent},
    movegen::{check_move, is_teleport, legal_moves},
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win(Color),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Win(c) => Some(c),
            Outcome::Draw => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans on one device.
    Local,
    /// Human (white) against the bot (black).
    Bot { difficulty: u8 },
    /// Placeholder; plays exactly like `Local`.
    Online,
}

/// Pieces each side has taken from the other, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captures {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl Captures {
    pub fn by(&self, captor: Color) -> &[Piece] {
        match captor {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn push(&mut self, captor: Color, victim: Piece) {
        match captor {
            Color::White => self.white.push(victim),
            Color::Black => self.black.push(victim),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The piece as it stood before moving.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

/// Everything the caller needs to react to an applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub side: Color,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub teleport: bool,
    pub dragon: bool,
    pub outcome: Option<Outcome>,
}

impl MoveReport {
    pub fn events(&self) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::Moved {
            piece: self.piece,
            mv: self.mv,
        }];
        if let Some(victim) = self.captured {
            events.push(GameEvent::Captured {
                by: self.piece,
                victim,
                at: self.mv.to,
            });
        }
        if self.teleport {
            events.push(GameEvent::Teleported { mv: self.mv });
        }
        if self.dragon {
            events.push(GameEvent::DragonFlight { mv: self.mv });
        }
        if let Some(outcome) = self.outcome {
            events.push(GameEvent::GameOver(outcome));
        }
        events
    }

    pub fn publish(&self, sink: &mut dyn EventSink) {
        for event in self.events() {
            sink.notify(&event);
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    mode: GameMode,
    captures: Captures,
    history: Vec<HistoryEntry>,
    outcome: Option<Outcome>,
}

impl Game {
    pub fn new(mode: GameMode) -> Self {
        Self::from_board(Board::standard(), Color::White, mode)
    }

    pub fn from_board(board: Board, turn: Color, mode: GameMode) -> Self {
        Self {
            board,
            turn,
            mode,
            captures: Captures::default(),
            history: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn mode(&self) -> GameMode {
        self.mode
    }
    pub fn captures(&self) -> &Captures {
        &self.captures
    }
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.turn)
    }

    /// Validates and applies a move for the side to move.
    ///
    /// Capturing a king ends the game in the captor's favour.
    pub fn play(&mut self, mv: Move) -> Result<MoveReport, CoreError> {
        if self.is_over() {
            return Err(CoreError::GameOver);
        }
        check_move(&self.board, self.turn, mv)?;

        let Some(piece) = self.board.piece_at(mv.from) else {
            return Err(Rejection::NoPiece.into());
        };
        let teleport = is_teleport(&self.board, mv);
        let side = self.turn;

        let captured = self.board.apply_move(mv);
        self.history.push(HistoryEntry {
            piece,
            from: mv.from,
            to: mv.to,
        });
        if teleport {
            debug!(%mv, "mage teleport");
        }
        if let Some(victim) = captured {
            debug!(%mv, captor = %piece, %victim, "capture");
            self.captures.push(side, victim);
            if victim.kind == PieceKind::King {
                self.finish(Outcome::Win(side));
            }
        }
        self.turn = side.other();

        Ok(MoveReport {
            mv,
            side,
            piece,
            captured,
            teleport,
            dragon: piece.kind == PieceKind::Dragon,
            outcome: self.outcome,
        })
    }

    /// `color` gives up; the other side wins.
    pub fn resign(&mut self, color: Color) -> Result<Outcome, CoreError> {
        if self.is_over() {
            return Err(CoreError::GameOver);
        }
        Ok(self.finish(Outcome::Win(color.other())))
    }

    pub fn declare_draw(&mut self) -> Result<Outcome, CoreError> {
        if self.is_over() {
            return Err(CoreError::GameOver);
        }
        Ok(self.finish(Outcome::Draw))
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        info!(?outcome, plies = self.history.len(), "game over");
        self.outcome = Some(outcome);
        outcome
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
