use cozy_chess::{BitBoard, Color, Piece};
use utils::Position;

// Per-call evaluation context, built once and shared by every scorer
pub struct EvalContext<'a> {
    pub position: &'a Position,

    pub pawns: [BitBoard; Color::NUM],

    pub phase: f64,
    pub inv_phase: f64,
}

impl<'a> EvalContext<'a> {
    #[inline(always)]
    pub fn new(position: &'a Position, phase: f64) -> Self {
        Self {
            position,
            pawns: [
                position.colored_pieces(Color::White, Piece::Pawn),
                position.colored_pieces(Color::Black, Piece::Pawn),
            ],
            phase,
            inv_phase: 1.0 - phase,
        }
    }

    #[inline(always)]
    pub fn pawns_for(&self, color: Color) -> BitBoard {
        self.pawns[color as usize]
    }
}
