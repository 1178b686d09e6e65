mod board;
mod position;

pub use board::{game_phase, MAX_PHASE, PHASE_WEIGHTS};
pub use position::{CastlingRights, FormatError, Position, STARTING_FEN};
