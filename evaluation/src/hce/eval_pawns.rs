use super::EvalParams;
use crate::hce::context::EvalContext;
use cozy_chess::{get_pawn_attacks, BitBoard, Color, File, Piece, Rank, Square};

// Pawn structure, White minus Black: passed-pawn bonuses less weakness penalties.
pub(super) fn evaluate(ctx: &EvalContext, params: &EvalParams) -> f64 {
    let white =
        passed_pawn_bonus(ctx, Color::White, params) - weakness_penalty(ctx, Color::White, params);
    let black =
        passed_pawn_bonus(ctx, Color::Black, params) - weakness_penalty(ctx, Color::Black, params);
    white - black
}

/// Isolated, doubled and backward penalties for every pawn of `color`.
/// The checks are independent; one pawn can pay all three.
pub(super) fn weakness_penalty(ctx: &EvalContext, color: Color, params: &EvalParams) -> f64 {
    let pawns = ctx.position.pieces(color, Piece::Pawn);
    if pawns.is_empty() {
        return 0.0;
    }

    let my_pawns = ctx.pawns_for(color);
    let enemy_pawns = ctx.pawns_for(!color);

    // Counted from the square list so every pawn on a crowded file pays
    let mut file_counts = [0usize; File::NUM];
    for sq in pawns {
        file_counts[sq.file() as usize] += 1;
    }

    // Isolated pawns hurt more with fewer pieces left to defend them
    let isolated_penalty = params.isolated_pawn_penalty * (1.0 + ctx.inv_phase * 0.5);

    let mut penalty = 0.0;
    for &sq in pawns {
        if (my_pawns & sq.file().adjacent()).is_empty() {
            penalty += isolated_penalty;
        }

        if file_counts[sq.file() as usize] > 1 {
            penalty += params.doubled_pawn_penalty;
        }

        if is_backward_pawn(sq, color, my_pawns, enemy_pawns) {
            penalty += params.backward_pawn_penalty;
        }
    }

    penalty
}

/// Bonus for every passed pawn of `color`, scaled up towards the endgame.
/// Pawns on the 6th rank or beyond also earn connected/protected extras.
pub(super) fn passed_pawn_bonus(ctx: &EvalContext, color: Color, params: &EvalParams) -> f64 {
    let pawns = ctx.position.pieces(color, Piece::Pawn);
    if pawns.is_empty() {
        return 0.0;
    }

    let my_pawns = ctx.pawns_for(color);
    let enemy_pawns = ctx.pawns_for(!color);

    // up to 2.5x with no pieces left
    let endgame_scale = 1.0 + ctx.inv_phase * 1.5;

    let mut bonus = 0.0;
    for &sq in pawns {
        let blockers = PASSED_PAWN_MASKS[color as usize][sq as usize];
        if !(enemy_pawns & blockers).is_empty() {
            continue;
        }

        let rank = relative_rank(sq, color);
        bonus += params.passed_pawn_base_value[rank] * endgame_scale;

        if rank >= 5 {
            if !(my_pawns & sq.file().adjacent()).is_empty() {
                bonus += params.connected_passed_pawn_bonus;
            }

            // Defenders stand diagonally behind, where an enemy pawn on `sq` would capture
            if !(my_pawns & get_pawn_attacks(sq, !color)).is_empty() {
                bonus += params.protected_passed_pawn_bonus;
            }
        }
    }

    bonus
}

/// Ranks advanced from the pawn's own back rank: 0..7.
#[inline(always)]
fn relative_rank(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.rank() as usize,
        Color::Black => 7 - sq.rank() as usize,
    }
}

// Check if a pawn is backward (https://www.chessprogramming.org/Backward_Pawn)
//
// 1. No friendly pawn on an adjacent file is level with or behind it
// 2. An enemy pawn attacks its stop square (one square ahead)
fn is_backward_pawn(sq: Square, color: Color, my_pawns: BitBoard, enemy_pawns: BitBoard) -> bool {
    let rank = sq.rank() as usize;

    let supporters = my_pawns & sq.file().adjacent() & level_or_behind(rank, color);
    if !supporters.is_empty() {
        return false;
    }

    let stop_rank = match color {
        Color::White if rank < 7 => Rank::index(rank + 1),
        Color::Black if rank > 0 => Rank::index(rank - 1),
        _ => return false, // Can't move forward
    };

    let stop_square = Square::new(sq.file(), stop_rank);

    // An enemy pawn hits the stop square from one rank further ahead, on
    // either neighbouring file; our own pawn's attack pattern from there
    // covers exactly those two squares.
    !(get_pawn_attacks(stop_square, color) & enemy_pawns).is_empty()
}

/// Every rank from `color`'s back rank up to and including `rank`.
#[inline(always)]
fn level_or_behind(rank: usize, color: Color) -> BitBoard {
    match color {
        Color::White if rank == 7 => BitBoard(u64::MAX),
        Color::White => BitBoard((1u64 << (8 * (rank + 1))) - 1),
        Color::Black => BitBoard(u64::MAX << (8 * rank)),
    }
}

/// Squares that must hold no enemy pawn for a pawn on a given square to be
/// passed: its file and both neighbours, every rank ahead. `[color][square]`.
pub const PASSED_PAWN_MASKS: [[BitBoard; 64]; Color::NUM] = {
    let mut masks = [[BitBoard::EMPTY; 64]; Color::NUM];
    let mut idx = 0;
    while idx < 64 {
        let span = file_span(idx % 8);
        let rank = idx / 8;

        let above = if rank == 7 { 0 } else { u64::MAX << (8 * (rank + 1)) };
        let below = (1u64 << (8 * rank)) - 1;

        masks[Color::White as usize][idx] = BitBoard(span & above);
        masks[Color::Black as usize][idx] = BitBoard(span & below);
        idx += 1;
    }
    masks
};

/// A file plus its neighbours, as a full-height mask.
const fn file_span(file: usize) -> u64 {
    const FILE_A: u64 = 0x0101_0101_0101_0101;

    let mut span = FILE_A << file;
    if file > 0 {
        span |= FILE_A << (file - 1);
    }
    if file < 7 {
        span |= FILE_A << (file + 1);
    }
    span
}
