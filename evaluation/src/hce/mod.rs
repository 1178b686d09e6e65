mod config;
mod context;
mod eval_castling;
mod eval_material;
mod eval_pawns;
mod pst;

pub use config::{EvalParams, ParamError, NUM_PARAMS};
pub use pst::{get_pst, PST};

use context::EvalContext;
use cozy_chess::Color;
use utils::{game_phase, Position};

use crate::def::HCE;

/// White-relative score components for one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub phase: f64,
    pub material: f64,
    pub castling: f64,
    pub pawns: f64,
}

impl ScoreBreakdown {
    /// Sum of the components, White's perspective.
    pub fn total(&self) -> f64 {
        self.material + self.castling + self.pawns
    }
}

#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    params: EvalParams,
}

impl Evaluator {
    pub fn new(params: EvalParams) -> Self {
        Self { params }
    }

    pub fn breakdown(&self, position: &Position) -> ScoreBreakdown {
        let phase = game_phase(position);
        let ctx = EvalContext::new(position, phase);

        ScoreBreakdown {
            phase,
            material: eval_material::evaluate(&ctx, &self.params),
            castling: eval_castling::evaluate(&ctx, &self.params),
            pawns: eval_pawns::evaluate(&ctx, &self.params),
        }
    }

    /// Score from the side to move's perspective. Positive = side to move is better.
    pub fn evaluate_position(&self, position: &Position) -> f64 {
        let cp = self.evaluate(position, game_phase(position));

        // the only place the side to move matters
        match position.side_to_move() {
            Color::White => cp,
            Color::Black => -cp,
        }
    }
}

impl HCE for Evaluator {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    fn evaluate(&self, position: &Position, phase: f64) -> f64 {
        let ctx = EvalContext::new(position, phase);

        let mut cp = 0.0;
        cp += eval_material::evaluate(&ctx, &self.params);
        cp += eval_castling::evaluate(&ctx, &self.params);
        cp += eval_pawns::evaluate(&ctx, &self.params);
        cp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_approx_eq(actual: f64, expected: f64, label: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{}: expected {}, got {}",
            label,
            expected,
            actual
        );
    }

    /// Swaps colors and mirrors the board top to bottom.
    fn mirror_fen(fen: &str) -> String {
        let fields: Vec<&str> = fen.split_whitespace().collect();

        let board = fields[0]
            .split('/')
            .rev()
            .map(swap_case)
            .collect::<Vec<_>>()
            .join("/");
        let side = if fields[1] == "w" { "b" } else { "w" };

        let castling = if fields[2] == "-" {
            "-".to_string()
        } else {
            let mut rights = swap_case(fields[2]).chars().collect::<Vec<_>>();
            // keep the usual KQkq ordering
            rights.sort_by_key(|c| (c.is_ascii_lowercase(), *c != 'K' && *c != 'k'));
            rights.into_iter().collect()
        };

        format!("{} {} {} - {} {}", board, side, castling, fields[4], fields[5])
    }

    fn swap_case(s: &str) -> String {
        s.chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect()
    }

    /// A random (not necessarily legal) position with one king per side.
    fn random_fen(rng: &mut StdRng) -> String {
        const PIECES: &[char] = &['P', 'N', 'B', 'R', 'Q', 'p', 'n', 'b', 'r', 'q'];

        let mut squares = [None; 64];
        let white_king = rng.gen_range(0..64);
        let mut black_king = rng.gen_range(0..64);
        while black_king == white_king {
            black_king = rng.gen_range(0..64);
        }
        squares[white_king] = Some('K');
        squares[black_king] = Some('k');

        for _ in 0..rng.gen_range(0..24) {
            let sq = rng.gen_range(0..64);
            if squares[sq].is_none() {
                let piece = PIECES[rng.gen_range(0..PIECES.len())];
                // keep pawns off the back ranks
                if piece.eq_ignore_ascii_case(&'p') && (sq < 8 || sq >= 56) {
                    continue;
                }
                squares[sq] = Some(piece);
            }
        }

        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut text = String::new();
            let mut gap = 0;
            for file in 0..8 {
                match squares[rank * 8 + file] {
                    Some(piece) => {
                        if gap > 0 {
                            text.push_str(&gap.to_string());
                            gap = 0;
                        }
                        text.push(piece);
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                text.push_str(&gap.to_string());
            }
            ranks.push(text);
        }

        let castling = ["KQkq", "Kq", "Qk", "-", "KQ", "kq"][rng.gen_range(0..6)];
        let side = if rng.gen_bool(0.5) { "w" } else { "b" };
        format!("{} {} {} - 0 1", ranks.join("/"), side, castling)
    }

    #[test]
    fn test_starting_position_is_zero() {
        let evaluator = Evaluator::default();
        let position = Position::default();

        let breakdown = evaluator.breakdown(&position);
        assert_eq!(breakdown.phase, 1.0);
        assert_eq!(breakdown.total(), 0.0);
        assert_eq!(evaluator.evaluate_position(&position), 0.0);
    }

    #[test]
    fn test_name() {
        assert_eq!(Evaluator::default().name(), "HCE");
    }

    #[test]
    fn test_side_to_move_negates() {
        let evaluator = Evaluator::default();
        let white: Position = "4k3/8/8/8/8/8/8/3QK3 w - - 0 1".parse().unwrap();
        let black: Position = "4k3/8/8/8/8/8/8/3QK3 b - - 0 1".parse().unwrap();

        let score = evaluator.evaluate_position(&white);
        assert!(score > 800.0);
        assert_eq!(evaluator.evaluate_position(&black), -score);
    }

    #[test]
    fn test_breakdown_matches_trait_score() {
        let evaluator = Evaluator::default();
        let position: Position = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse()
            .unwrap();

        let breakdown = evaluator.breakdown(&position);
        let cp = evaluator.evaluate(&position, breakdown.phase);
        assert_approx_eq(cp, breakdown.total(), "total");
    }

    #[test]
    fn test_lone_passed_pawn_end_to_end() {
        let evaluator = Evaluator::default();
        let position: Position = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();

        let breakdown = evaluator.breakdown(&position);
        assert_eq!(breakdown.phase, 0.0);
        assert_eq!(breakdown.castling, 0.0);
        // passed bonus 250 * 2.5, less the isolated penalty 25 * 1.5
        assert_approx_eq(breakdown.pawns, 625.0 - 37.5, "pawns");
    }

    #[test]
    fn test_mirror_fen_helper() {
        assert_eq!(
            mirror_fen("4k3/P7/8/8/8/8/8/R3K3 w Qk - 3 9"),
            "r3k3/8/8/8/8/8/p7/4K3 b Kq - 3 9"
        );
    }

    #[test]
    fn test_color_mirror_symmetry() {
        let evaluator = Evaluator::default();
        let mut fens = vec![
            utils::STARTING_FEN.to_string(),
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1".to_string(),
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".to_string(),
            "rnbq1rk1/pp2bppp/2p2n2/3p4/3P4/2NBPN2/PP3PPP/R2QK2R b KQ - 4 9".to_string(),
        ];

        let mut rng = StdRng::seed_from_u64(0x5eed);
        fens.extend((0..200).map(|_| random_fen(&mut rng)));

        for fen in &fens {
            let position: Position = fen.parse().unwrap();
            let mirrored: Position = mirror_fen(fen).parse().unwrap();

            let a = evaluator.breakdown(&position);
            let b = evaluator.breakdown(&mirrored);

            assert_eq!(a.phase, b.phase, "{}", fen);
            assert_approx_eq(a.material, -b.material, fen);
            assert_approx_eq(a.castling, -b.castling, fen);
            assert_approx_eq(a.pawns, -b.pawns, fen);
            assert_approx_eq(
                evaluator.evaluate_position(&position),
                evaluator.evaluate_position(&mirrored),
                fen,
            );
        }
    }

    #[test]
    fn test_out_of_range_params_still_score() {
        let params = EvalParams {
            material_value: [-1e12, 0.0, 1e300, -5.0, 0.5, 1e6],
            isolated_pawn_penalty: -40.0,
            passed_pawn_base_value: [1e9; 8],
            ..EvalParams::default()
        };
        let evaluator = Evaluator::new(params);
        let position: Position = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".parse().unwrap();

        assert!(evaluator.evaluate_position(&position).is_finite());
    }

    #[test]
    fn test_malformed_board_still_scores() {
        let evaluator = Evaluator::default();
        for fen in [
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "ppppppppppp/8/8/8/8/8/8/8 b KQkq - 0 1",
            "xyz/8/8/8/8/8/8/8/8/8/K7 w - - 0 1",
            "kK w Q - 0 1",
        ] {
            let position: Position = fen.parse().unwrap();
            assert!(evaluator.evaluate_position(&position).is_finite(), "{}", fen);
        }
    }
}
