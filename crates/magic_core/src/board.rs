use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// Back rank, column 0 to 15, shared by both sides.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Necromancer,
    PieceKind::Dragon,
    PieceKind::Mage,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Archangel,
    PieceKind::Warlock,
    PieceKind::Mage,
    PieceKind::Dragon,
    PieceKind::Necromancer,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Starting position: black on rows 0-1, white on rows 14-15.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.squares[0][col] = Some(Piece::new(kind, Color::Black));
            b.squares[15][col] = Some(Piece::new(kind, Color::White));
        }
        for col in 0..BOARD_SIZE {
            b.squares[Color::Black.pawn_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::Black));
            b.squares[Color::White.pawn_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        b
    }

    /// Parses a slash-separated layout, row 0 first.
    ///
    /// Letters are `K Q R B N P M D X A W` (uppercase white), digits are runs
    /// of empty squares. Pieces get their kind's standard abilities.
    pub fn from_layout(layout: &str) -> Result<Self, CoreError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(CoreError::InvalidLayout(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, row_txt) in rows.iter().enumerate() {
            let mut col = 0usize;
            let mut chars = row_txt.chars().peekable();
            while let Some(ch) = chars.next() {
                if let Some(d) = ch.to_digit(10) {
                    let mut run = d as usize;
                    while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                        run = run * 10 + next as usize;
                        chars.next();
                    }
                    if run == 0 {
                        return Err(CoreError::InvalidLayout(format!(
                            "zero-length gap in row {row}"
                        )));
                    }
                    col += run;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| {
                        CoreError::InvalidLayout(format!("unknown piece letter {ch:?}"))
                    })?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= BOARD_SIZE {
                        return Err(CoreError::InvalidLayout(format!(
                            "too many squares in row {row}"
                        )));
                    }
                    board.squares[row][col] = Some(Piece::new(kind, color));
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(CoreError::InvalidLayout(format!(
                        "too many squares in row {row}"
                    )));
                }
            }
            if col != BOARD_SIZE {
                return Err(CoreError::InvalidLayout(format!(
                    "row {row} covers {col} squares"
                )));
            }
        }
        Ok(board)
    }

    pub fn to_layout(&self) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);
        for row in &self.squares {
            let mut txt = String::new();
            let mut gap = 0;
            for cell in row {
                match cell {
                    Some(pc) => {
                        if gap > 0 {
                            txt.push_str(&gap.to_string());
                            gap = 0;
                        }
                        txt.push(pc.symbol());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                txt.push_str(&gap.to_string());
            }
            rows.push(txt);
        }
        rows.join("/")
    }

    pub fn piece_at(&self, s: Square) -> Option<Piece> {
        self.squares[s.row() as usize][s.col() as usize]
    }

    pub fn set_piece(&mut self, s: Square, pc: Option<Piece>) {
        self.squares[s.row() as usize][s.col() as usize] = pc;
    }

    /// Raw-coordinate lookup for callers holding unchecked input.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Piece>, CoreError> {
        Square::new(row, col).map(|s| self.piece_at(s))
    }

    pub fn is_empty(&self, s: Square) -> bool {
        self.piece_at(s).is_none()
    }

    /// Pieces of one side in row-major discovery order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |s| match self.piece_at(s) {
            Some(pc) if pc.color == color => Some((s, pc)),
            _ => None,
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    /// Moves the piece on `mv.from` to `mv.to` and returns whatever stood on
    /// the destination.
    ///
    /// Performs no legality check; an empty source square leaves the board
    /// untouched and returns None.
    pub fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let mut moved = self.piece_at(mv.from)?;
        let captured = self.piece_at(mv.to);
        moved.has_moved = true;
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));
        captured
    }

    /// Copy-on-write variant of `apply_move`; `self` is left as it was.
    pub fn after_move(&self, mv: Move) -> (Board, Option<Piece>) {
        let mut next = self.clone();
        let captured = next.apply_move(mv);
        (next, captured)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{:>2} ", BOARD_SIZE - row)?;
            for cell in cells {
                let ch = cell.map(|pc| pc.symbol()).unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE as u8 {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
