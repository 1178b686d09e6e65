use cozy_chess::{Color, Piece};

use crate::Position;

/// Phase weight per piece, indexed like `Piece::ALL`. Pawns and kings never count.
pub const PHASE_WEIGHTS: [i32; Piece::NUM] = [0, 1, 1, 2, 4, 0];

/// Phase of the full starting material: 2N + 2B + 2R + Q per side.
pub const MAX_PHASE: i32 = (PHASE_WEIGHTS[1] * 2
    + PHASE_WEIGHTS[2] * 2
    + PHASE_WEIGHTS[3] * 2
    + PHASE_WEIGHTS[4])
    * 2;

/// Returns a value in [0, 1]: 1 = full opening material, 0 = bare endgame.
#[inline(always)]
pub fn game_phase(position: &Position) -> f64 {
    let mut phase = 0;
    for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
        let count = position.count(Color::White, piece) + position.count(Color::Black, piece);
        phase += PHASE_WEIGHTS[piece as usize] * count as i32;
    }

    (phase.max(0) as f64 / MAX_PHASE as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_phase() {
        assert_eq!(MAX_PHASE, 24);
    }

    #[test]
    fn test_game_phase_starting_position() {
        assert_eq!(game_phase(&Position::default()), 1.0);
    }

    #[test]
    fn test_game_phase_kings_and_pawns() {
        let position: Position = "4k3/pppp4/8/8/8/8/4PPPP/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(&position), 0.0);
    }

    #[test]
    fn test_game_phase_rook_endgame() {
        // Rook = 2, so 2/24
        let position: Position = "k7/8/8/8/8/8/8/KR6 w - - 0 1".parse().unwrap();
        assert!((game_phase(&position) - 2.0 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_game_phase_is_capped() {
        // promoted queens push the raw count past the starting material
        let position: Position = "qqqqk3/8/8/8/8/8/8/QQQQK3 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(&position), 1.0);
    }
}
