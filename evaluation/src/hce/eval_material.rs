use cozy_chess::{Color, Piece};

use super::EvalParams;
use crate::hce::context::EvalContext;
use crate::hce::pst::get_pst;

// Material plus phase-blended placement, White minus Black.
pub(super) fn evaluate(ctx: &EvalContext, params: &EvalParams) -> f64 {
    let mut material = 0.0;
    let mut opening = 0.0;
    let mut endgame = 0.0;

    for piece in Piece::ALL {
        let value = params.material_value[piece as usize];

        let pst = get_pst(Color::White, piece);
        for &sq in ctx.position.pieces(Color::White, piece) {
            material += value;
            opening += pst.mg(sq);
            endgame += pst.eg(sq);
        }

        let pst = get_pst(Color::Black, piece);
        for &sq in ctx.position.pieces(Color::Black, piece) {
            material -= value;
            opening -= pst.mg(sq);
            endgame -= pst.eg(sq);
        }
    }

    material + opening * ctx.phase + endgame * ctx.inv_phase
}
