use cozy_chess::{Color, Piece, Square};

/// Piece-Square Table: position-dependent bonuses/penalties for each piece.
/// Separate tables for opening (mg) and endgame (eg), blended by game phase.
///
/// Values are in centipawns. Positive = good square, negative = bad square.
/// Tables are defined for White (a1=index 0, h8=index 63), Black tables are mirrored.
///
/// <https://www.chessprogramming.org/Piece-Square_Tables>
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy)]
pub struct PST<'a> {
    pub mg: &'a [f64; 64],
    pub eg: &'a [f64; 64],
}

impl PST<'_> {
    #[inline(always)]
    pub fn mg(&self, sq: Square) -> f64 {
        self.mg[sq as usize]
    }

    #[inline(always)]
    pub fn eg(&self, sq: Square) -> f64 {
        self.eg[sq as usize]
    }
}

// [color][piece], pieces in `Piece::ALL` order
static PST_TABLE: [[PST; Piece::NUM]; Color::NUM] = [
    // index 0 → White
    [
        PST { mg: &WHITE_PAWN_MG_PST, eg: &WHITE_PAWN_EG_PST },
        PST { mg: &WHITE_KNIGHT_MG_PST, eg: &WHITE_KNIGHT_EG_PST },
        PST { mg: &WHITE_BISHOP_MG_PST, eg: &WHITE_BISHOP_EG_PST },
        PST { mg: &WHITE_ROOK_MG_PST, eg: &WHITE_ROOK_EG_PST },
        PST { mg: &WHITE_QUEEN_MG_PST, eg: &WHITE_QUEEN_EG_PST },
        PST { mg: &WHITE_KING_MG_PST, eg: &WHITE_KING_EG_PST },
    ],
    // index 1 → Black
    [
        PST { mg: &BLACK_PAWN_MG_PST, eg: &BLACK_PAWN_EG_PST },
        PST { mg: &BLACK_KNIGHT_MG_PST, eg: &BLACK_KNIGHT_EG_PST },
        PST { mg: &BLACK_BISHOP_MG_PST, eg: &BLACK_BISHOP_EG_PST },
        PST { mg: &BLACK_ROOK_MG_PST, eg: &BLACK_ROOK_EG_PST },
        PST { mg: &BLACK_QUEEN_MG_PST, eg: &BLACK_QUEEN_EG_PST },
        PST { mg: &BLACK_KING_MG_PST, eg: &BLACK_KING_EG_PST },
    ],
];

/// Table for `piece` as seen by `color`. Black's table is indexed by the raw
/// square; the vertical mirror is already baked in.
#[inline(always)]
pub fn get_pst(color: Color, piece: Piece) -> &'static PST<'static> {
    &PST_TABLE[color as usize][piece as usize]
}

/// Mirrors a White PST vertically to create Black's perspective.
/// Black's a8 corresponds to White's a1, etc.
const fn invert_pst(source: &[f64; 64]) -> [f64; 64] {
    let mut table = [0.0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = source[i ^ 56];
        i += 1;
    }
    table
}

// Pawns MG: central pawns on d4/e4/d5/e5 are rewarded, d2/e2 left at home are not.
pub const WHITE_PAWN_MG_PST: [f64; 64] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // rank 1
    5.0, 10.0, 10.0, -20.0, -20.0, 10.0, 10.0, 5.0, // rank 2
    10.0, 10.0, 20.0, 30.0, 30.0, 20.0, 10.0, 10.0, // rank 3
    5.0, 5.0, 10.0, 50.0, 50.0, 10.0, 5.0, 5.0, // rank 4
    0.0, 0.0, 0.0, 60.0, 60.0, 0.0, 0.0, 0.0, // rank 5
    5.0, -5.0, -10.0, 20.0, 20.0, -10.0, -5.0, 5.0, // rank 6
    5.0, 10.0, 10.0, -20.0, -20.0, 10.0, 10.0, 5.0, // rank 7
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // rank 8
];

// Pawns EG: advancement pays, most of all on the 7th rank.
pub const WHITE_PAWN_EG_PST: [f64; 64] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // rank 1
    5.0, 10.0, 10.0, -20.0, -20.0, 10.0, 10.0, 5.0, // rank 2
    5.0, -5.0, -10.0, 0.0, 0.0, -10.0, -5.0, 5.0, // rank 3
    0.0, 0.0, 0.0, 20.0, 20.0, 0.0, 0.0, 0.0, // rank 4
    5.0, 5.0, 10.0, 25.0, 25.0, 10.0, 5.0, 5.0, // rank 5
    10.0, 10.0, 20.0, 30.0, 30.0, 20.0, 10.0, 10.0, // rank 6
    50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, // rank 7
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // rank 8
];

// Knights: edges and corners control the fewest squares.
pub const WHITE_KNIGHT_MG_PST: [f64; 64] = [
    -50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0, // rank 1
    -40.0, -20.0, 0.0, 0.0, 0.0, 0.0, -20.0, -40.0, // rank 2
    -30.0, 0.0, 10.0, 15.0, 15.0, 10.0, 0.0, -30.0, // rank 3
    -30.0, 5.0, 15.0, 20.0, 20.0, 15.0, 5.0, -30.0, // rank 4
    -30.0, 0.0, 15.0, 20.0, 20.0, 15.0, 0.0, -30.0, // rank 5
    -30.0, 5.0, 10.0, 15.0, 15.0, 10.0, 5.0, -30.0, // rank 6
    -40.0, -20.0, 0.0, 5.0, 5.0, 0.0, -20.0, -40.0, // rank 7
    -50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0, // rank 8
];

pub const WHITE_KNIGHT_EG_PST: [f64; 64] = [
    -50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0, // rank 1
    -40.0, -20.0, 0.0, 0.0, 0.0, 0.0, -20.0, -40.0, // rank 2
    -30.0, 0.0, 10.0, 15.0, 15.0, 10.0, 0.0, -30.0, // rank 3
    -30.0, 5.0, 15.0, 20.0, 20.0, 15.0, 5.0, -30.0, // rank 4
    -30.0, 0.0, 15.0, 20.0, 20.0, 15.0, 0.0, -30.0, // rank 5
    -30.0, 5.0, 10.0, 15.0, 15.0, 10.0, 5.0, -30.0, // rank 6
    -40.0, -20.0, 0.0, 5.0, 5.0, 0.0, -20.0, -40.0, // rank 7
    -50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0, // rank 8
];

// Bishops: long diagonals and central activity.
pub const WHITE_BISHOP_MG_PST: [f64; 64] = [
    -20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0, // rank 1
    -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0, // rank 2
    -10.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, -10.0, // rank 3
    -10.0, 5.0, 5.0, 10.0, 10.0, 5.0, 5.0, -10.0, // rank 4
    -10.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, -10.0, // rank 5
    -10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, -10.0, // rank 6
    -10.0, 5.0, 0.0, 0.0, 0.0, 0.0, 5.0, -10.0, // rank 7
    -20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0, // rank 8
];

pub const WHITE_BISHOP_EG_PST: [f64; 64] = [
    -20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0, // rank 1
    -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0, // rank 2
    -10.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, -10.0, // rank 3
    -10.0, 5.0, 5.0, 10.0, 10.0, 5.0, 5.0, -10.0, // rank 4
    -10.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, -10.0, // rank 5
    -10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, -10.0, // rank 6
    -10.0, 5.0, 0.0, 0.0, 0.0, 0.0, 5.0, -10.0, // rank 7
    -20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0, // rank 8
];

// Rooks MG: 7th rank and central back-rank squares.
pub const WHITE_ROOK_MG_PST: [f64; 64] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // rank 1
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // rank 2
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // rank 3
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // rank 4
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // rank 5
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // rank 6
    5.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 5.0, // rank 7
    0.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 0.0, // rank 8
];

// Rooks EG: central files and the 7th rank.
pub const WHITE_ROOK_EG_PST: [f64; 64] = [
    0.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, 0.0, // rank 1
    0.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, 0.0, // rank 2
    0.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, 0.0, // rank 3
    0.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, 0.0, // rank 4
    0.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, 0.0, // rank 5
    0.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, 0.0, // rank 6
    25.0, 25.0, 25.0, 25.0, 25.0, 25.0, 25.0, 25.0, // rank 7
    0.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, 0.0, // rank 8
];

// Queens: mild centralisation.
pub const WHITE_QUEEN_MG_PST: [f64; 64] = [
    -20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0, // rank 1
    -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0, // rank 2
    -10.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0, // rank 3
    -5.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0, // rank 4
    0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0, // rank 5
    -10.0, 5.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0, // rank 6
    -10.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0, -10.0, // rank 7
    -20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0, // rank 8
];

pub const WHITE_QUEEN_EG_PST: [f64; 64] = [
    -20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0, // rank 1
    -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0, // rank 2
    -10.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0, // rank 3
    -5.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0, // rank 4
    0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0, // rank 5
    -10.0, 5.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0, // rank 6
    -10.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0, -10.0, // rank 7
    -20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0, // rank 8
];

// Kings MG: stay home behind the pawns, castled squares are best.
pub const WHITE_KING_MG_PST: [f64; 64] = [
    20.0, 30.0, 10.0, 0.0, 0.0, 10.0, 30.0, 20.0, // rank 1
    20.0, 20.0, 0.0, 0.0, 0.0, 0.0, 20.0, 20.0, // rank 2
    -10.0, -20.0, -20.0, -20.0, -20.0, -20.0, -20.0, -10.0, // rank 3
    -20.0, -30.0, -30.0, -40.0, -40.0, -30.0, -30.0, -20.0, // rank 4
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // rank 5
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // rank 6
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // rank 7
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // rank 8
];

// Kings EG: centralise.
pub const WHITE_KING_EG_PST: [f64; 64] = [
    -50.0, -40.0, -30.0, -20.0, -20.0, -30.0, -40.0, -50.0, // rank 1
    -30.0, -20.0, -10.0, 0.0, 0.0, -10.0, -20.0, -30.0, // rank 2
    -30.0, -10.0, 20.0, 30.0, 30.0, 20.0, -10.0, -30.0, // rank 3
    -30.0, -10.0, 30.0, 40.0, 40.0, 30.0, -10.0, -30.0, // rank 4
    -30.0, -10.0, 30.0, 40.0, 40.0, 30.0, -10.0, -30.0, // rank 5
    -30.0, -10.0, 20.0, 30.0, 30.0, 20.0, -10.0, -30.0, // rank 6
    -30.0, -30.0, 0.0, 0.0, 0.0, 0.0, -30.0, -30.0, // rank 7
    -50.0, -30.0, -30.0, -30.0, -30.0, -30.0, -30.0, -50.0, // rank 8
];
// Black PSTs are just vertically mirrored White PSTs
const BLACK_PAWN_MG_PST: [f64; 64] = invert_pst(&WHITE_PAWN_MG_PST);
const BLACK_PAWN_EG_PST: [f64; 64] = invert_pst(&WHITE_PAWN_EG_PST);
const BLACK_KNIGHT_MG_PST: [f64; 64] = invert_pst(&WHITE_KNIGHT_MG_PST);
const BLACK_KNIGHT_EG_PST: [f64; 64] = invert_pst(&WHITE_KNIGHT_EG_PST);
const BLACK_BISHOP_MG_PST: [f64; 64] = invert_pst(&WHITE_BISHOP_MG_PST);
const BLACK_BISHOP_EG_PST: [f64; 64] = invert_pst(&WHITE_BISHOP_EG_PST);
const BLACK_ROOK_MG_PST: [f64; 64] = invert_pst(&WHITE_ROOK_MG_PST);
const BLACK_ROOK_EG_PST: [f64; 64] = invert_pst(&WHITE_ROOK_EG_PST);
const BLACK_QUEEN_MG_PST: [f64; 64] = invert_pst(&WHITE_QUEEN_MG_PST);
const BLACK_QUEEN_EG_PST: [f64; 64] = invert_pst(&WHITE_QUEEN_EG_PST);
const BLACK_KING_MG_PST: [f64; 64] = invert_pst(&WHITE_KING_MG_PST);
const BLACK_KING_EG_PST: [f64; 64] = invert_pst(&WHITE_KING_EG_PST);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_tables_are_mirrored() {
        for piece in Piece::ALL {
            let white = get_pst(Color::White, piece);
            let black = get_pst(Color::Black, piece);
            for sq in Square::ALL {
                assert_eq!(black.mg(sq), white.mg(Square::index(sq as usize ^ 56)));
                assert_eq!(black.eg(sq), white.eg(Square::index(sq as usize ^ 56)));
            }
        }
    }

    #[test]
    fn test_known_squares() {
        let pawn = get_pst(Color::White, Piece::Pawn);
        assert_eq!(pawn.mg(Square::D5), 60.0);
        assert_eq!(pawn.eg(Square::A7), 50.0);

        // e7 for black is e2 for white
        let black_pawn = get_pst(Color::Black, Piece::Pawn);
        assert_eq!(black_pawn.mg(Square::E7), -20.0);

        let king = get_pst(Color::White, Piece::King);
        assert_eq!(king.mg(Square::G1), 30.0);
        assert_eq!(king.eg(Square::E4), 40.0);
    }
}
