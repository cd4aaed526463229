pub mod ranking;
pub mod scoring;

pub use ranking::{RankingEngine, RankingError};
pub use scoring::{RankingWeights, ScoreCalculator};
