/// Sigmoid scaling used when mapping centipawns to an expected result.
pub const DEFAULT_K_FACTOR: f64 = 1.2;

/// Converts a centipawn score into a win probability for the scored side.
///
/// <https://www.chessprogramming.org/Texel%27s_Tuning_Method>
#[inline(always)]
pub fn win_probability(score: f64, k_factor: f64) -> f64 {
    1.0 / (1.0 + (-score * k_factor / 400.0).exp())
}
