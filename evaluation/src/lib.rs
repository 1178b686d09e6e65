pub mod def;
pub mod hce;
pub mod scores;

pub use def::HCE;
pub use hce::{EvalParams, Evaluator, ParamError, ScoreBreakdown};

use utils::{FormatError, Position};

/// Scores `position` for the side to move. Never fails.
pub fn evaluate(position: &Position, params: &EvalParams) -> f64 {
    Evaluator::new(*params).evaluate_position(position)
}

/// Parses `text` and scores it for the side to move.
///
/// Only a malformed field count or move counter is an error; everything
/// else about the board is taken as written.
pub fn evaluate_fen(text: &str, params: &EvalParams) -> Result<f64, FormatError> {
    let position = Position::parse(text)?;
    Ok(evaluate(&position, params))
}
