//! Per-kind movement rules as data.
//!
//! Each kind maps to a geometry, a path policy and an optional teleport
//! radius. The legality check in `movegen` interprets the table; pawns keep
//! their own branch since their moves depend on color and occupancy.

use crate::types::{Move, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geometry {
    /// Forward push / double push / diagonal capture.
    Pawn,
    /// Same row or same column.
    Orthogonal,
    /// |Δrow| == |Δcol|.
    Diagonal,
    /// Orthogonal or diagonal.
    Line,
    /// One square in any direction.
    Step,
    /// (2,1) or (1,2) leap.
    Leap,
}

impl Geometry {
    /// Whether the displacement of `mv` fits this shape. Pawns are handled
    /// separately and never match here.
    pub fn admits(self, mv: &Move) -> bool {
        let (dr, dc) = (mv.row_diff(), mv.col_diff());
        let orthogonal = dr == 0 || dc == 0;
        let diagonal = dr == dc;
        match self {
            Geometry::Pawn => false,
            Geometry::Orthogonal => orthogonal,
            Geometry::Diagonal => diagonal,
            Geometry::Line => orthogonal || diagonal,
            Geometry::Step => dr <= 1 && dc <= 1,
            Geometry::Leap => (dr == 2 && dc == 1) || (dr == 1 && dc == 2),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathPolicy {
    /// Every square strictly between from and to must be empty.
    Clear,
    /// Intervening pieces are ignored.
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRule {
    pub geometry: Geometry,
    pub path: PathPolicy,
    /// Chebyshev radius reachable by teleport, if the piece can teleport.
    pub teleport_radius: Option<u8>,
}

impl MoveRule {
    const fn new(geometry: Geometry, path: PathPolicy) -> Self {
        Self {
            geometry,
            path,
            teleport_radius: None,
        }
    }
}

pub const MAGE_TELEPORT_RADIUS: u8 = 3;

pub const fn rule_for(kind: PieceKind) -> MoveRule {
    use Geometry::*;
    use PathPolicy::*;
    match kind {
        PieceKind::Pawn => MoveRule::new(Pawn, Clear),
        PieceKind::Rook => MoveRule::new(Orthogonal, Clear),
        PieceKind::Bishop => MoveRule::new(Diagonal, Clear),
        PieceKind::Knight => MoveRule::new(Leap, Ignore),
        PieceKind::Queen => MoveRule::new(Line, Clear),
        PieceKind::King => MoveRule::new(Step, Ignore),
        PieceKind::Mage => MoveRule {
            geometry: Diagonal,
            path: Clear,
            teleport_radius: Some(MAGE_TELEPORT_RADIUS),
        },
        PieceKind::Dragon => MoveRule::new(Line, Ignore),
        PieceKind::Necromancer => MoveRule::new(Diagonal, Clear),
        PieceKind::Archangel => MoveRule::new(Line, Clear),
        PieceKind::Warlock => MoveRule::new(Orthogonal, Clear),
    }
}
