use utils::Position;

/// Hand-Crafted Evaluation interface.
///
/// Implementations are pure: no state survives between calls, so one
/// evaluator can be shared across worker threads.
pub trait HCE: Send + Sync {
    fn name(&self) -> String;
    /// Evaluate position from White's perspective. Positive = White advantage.
    fn evaluate(&self, position: &Position, phase: f64) -> f64;
}
