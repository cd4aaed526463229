// Utility functions for product-ranking-service

/// Clamp a sub-score to the [0, 100] range
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Round a score to 2 decimal places.
///
/// Uses `f64::round` semantics: halfway cases round away from zero.
pub fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
