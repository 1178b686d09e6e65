use cozy_chess::{Color, Square};

use super::EvalParams;
use crate::hce::context::EvalContext;

// Castling rights and castled kings, White minus Black, faded out by phase.
pub(super) fn evaluate(ctx: &EvalContext, params: &EvalParams) -> f64 {
    let bonus = side_bonus(ctx, Color::White, params) - side_bonus(ctx, Color::Black, params);
    bonus * ctx.phase
}

fn side_bonus(ctx: &EvalContext, color: Color, params: &EvalParams) -> f64 {
    let mut bonus = 0.0;

    if ctx.position.castling().any_for(color) {
        bonus += params.castle_rights_bonus;
    }

    // No recorded king simply means no castled bonus
    if let Some(king) = ctx.position.king(color) {
        if is_castled_square(king, color) {
            bonus += params.castled_position_bonus;
        }
    }

    bonus
}

#[inline(always)]
fn is_castled_square(sq: Square, color: Color) -> bool {
    match color {
        Color::White => sq == Square::G1 || sq == Square::C1,
        Color::Black => sq == Square::G8 || sq == Square::C8,
    }
}
