use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row direction pawns of this color advance in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// Row the pawns of this color start on.
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 14,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    Mage,
    Dragon,
    Necromancer,
    Archangel,
    Warlock,
}

impl PieceKind {
    pub const ALL: [PieceKind; 11] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::Mage,
        PieceKind::Dragon,
        PieceKind::Necromancer,
        PieceKind::Archangel,
        PieceKind::Warlock,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Layout letter, lowercase.
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
            PieceKind::Mage => 'm',
            PieceKind::Dragon => 'd',
            PieceKind::Necromancer => 'x',
            PieceKind::Archangel => 'a',
            PieceKind::Warlock => 'w',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|k| k.letter() == ch.to_ascii_lowercase())
    }

    /// True for the five kinds with abilities outside orthodox chess.
    pub fn is_magical(self) -> bool {
        matches!(
            self,
            PieceKind::Mage
                | PieceKind::Dragon
                | PieceKind::Necromancer
                | PieceKind::Archangel
                | PieceKind::Warlock
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
            PieceKind::Mage => "mage",
            PieceKind::Dragon => "dragon",
            PieceKind::Necromancer => "necromancer",
            PieceKind::Archangel => "archangel",
            PieceKind::Warlock => "warlock",
        };
        f.write_str(name)
    }
}

/// Special abilities a piece carries.
///
/// Every piece has the full record; a flag only has an effect on the kind
/// it belongs to (teleport on mages, flight on dragons, revival on
/// necromancers). A mage with `teleport == false` is still a mage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    pub teleport: bool,
    pub flight: bool,
    pub revive: bool,
    pub revive_count: u32,
}

impl Capabilities {
    /// Abilities a freshly set up piece of `kind` starts with.
    pub fn standard(kind: PieceKind) -> Self {
        let mut caps = Capabilities::default();
        match kind {
            PieceKind::Mage => caps.teleport = true,
            PieceKind::Dragon => caps.flight = true,
            PieceKind::Necromancer => caps.revive = true,
            _ => {}
        }
        caps
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
    pub caps: Capabilities,
}

impl Piece {
    /// A piece with its kind's standard abilities.
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
            caps: Capabilities::standard(kind),
        }
    }

    /// A piece with no abilities at all.
    pub fn plain(kind: PieceKind, color: Color) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
            caps: Capabilities::default(),
        }
    }

    pub fn with_teleport(mut self, teleport: bool) -> Self {
        self.caps.teleport = teleport;
        self
    }

    pub fn can_teleport(&self) -> bool {
        self.kind == PieceKind::Mage && self.caps.teleport
    }

    pub fn can_fly(&self) -> bool {
        self.kind == PieceKind::Dragon && self.caps.flight
    }

    pub fn can_revive(&self) -> bool {
        self.kind == PieceKind::Necromancer && self.caps.revive
    }

    /// Layout letter: uppercase for white, lowercase for black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// A board coordinate. Row 0 is black's back rank, row 15 white's.
///
/// Deserialization goes through `Square::new`, so stored coordinates are
/// bounds-checked like any other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawSquare {
    row: usize,
    col: usize,
}

impl TryFrom<RawSquare> for Square {
    type Error = CoreError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.row, raw.col)
    }
}

impl Square {
    pub fn new(row: usize, col: usize) -> Result<Self, CoreError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CoreError::OutOfBounds { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Square displaced by (dr, dc), or None when it falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        sq(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// All 256 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&sq_to_coord(*self))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn row_diff(&self) -> u8 {
        self.from.row.abs_diff(self.to.row)
    }

    pub fn col_diff(&self) -> u8 {
        self.from.col.abs_diff(self.to.col)
    }

    /// max(|Δrow|, |Δcol|)
    pub fn chebyshev(&self) -> u8 {
        self.row_diff().max(self.col_diff())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

// Helpers
pub fn sq(row: i8, col: i8) -> Option<Square> {
    if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    } else {
        None
    }
}

/// Files `a`..`p` are columns 0..15; ranks `1`..`16` count up from white's
/// back rank (row 15).
pub fn sq_to_coord(s: Square) -> String {
    let f = (b'a' + s.col) as char;
    let r = BOARD_SIZE as u8 - s.row;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<Square> {
    let mut chars = c.chars();
    let f = chars.next()?;
    if !('a'..='p').contains(&f) {
        return None;
    }
    let rank_txt = chars.as_str();
    if rank_txt.is_empty() || rank_txt.len() > 2 || !rank_txt.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rank: usize = rank_txt.parse().ok()?;
    if !(1..=BOARD_SIZE).contains(&rank) {
        return None;
    }
    let col = (f as u8 - b'a') as usize;
    Square::new(BOARD_SIZE - rank, col).ok()
}
