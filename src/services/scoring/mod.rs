// ============================================
// Product Score Calculator
// ============================================
//
// Pure scoring over a single product record: five independently normalized
// sub-scores combined as a weighted sum, then derated by stock scarcity.
//
// Factors:
// - Popularity (30%) - direct popularity score
// - Price (20%)      - inverse price normalization, cheaper = better value
// - Rating (25%)     - customer satisfaction
// - Sales (15%)      - log-scaled sales volume
// - Recency (10%)    - boost for newly listed products

use crate::models::{
    FactorContribution, Product, RankingExplanation, ScoreBreakdown, StockStatus,
};
use crate::utils::{clamp_score, round2};
use chrono::{DateTime, Utc};

/// Weights for the five ranking factors. Must sum to 1.0.
#[derive(Debug, Clone)]
pub struct RankingWeights {
    pub popularity: f64,
    pub price: f64,
    pub rating: f64,
    pub sales: f64,
    pub recency: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            popularity: 0.30,
            price: 0.20,
            rating: 0.25,
            sales: 0.15,
            recency: 0.10,
        }
    }
}

/// Computes composite relevance scores for products.
///
/// Deterministic and side-effect free: the same product and reference instant
/// always produce the same score, so callers inject `now` for reproducibility.
pub struct ScoreCalculator {
    weights: RankingWeights,
    /// Price at which the price sub-score equals 50
    reference_price: f64,
    /// Days during which new products receive a recency boost
    recency_window_days: i64,
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self {
            weights: RankingWeights::default(),
            reference_price: 500.0,
            recency_window_days: 30,
        }
    }

    /// Create a calculator with custom calibration constants.
    pub fn with_calibration(reference_price: f64, recency_window_days: i64) -> Self {
        Self {
            weights: RankingWeights::default(),
            reference_price,
            recency_window_days,
        }
    }

    /// Compute the composite ranking score for a product, in [0, 100].
    ///
    /// Weighted sum of the five sub-scores, derated by the stock penalty and
    /// rounded to 2 decimal places (half away from zero).
    pub fn score(&self, product: &Product, now: DateTime<Utc>) -> f64 {
        let raw = self.weighted_total(product, now);
        round2(raw * Self::stock_penalty(product.stock))
    }

    /// Weighted sum of sub-scores before the stock penalty and rounding.
    fn weighted_total(&self, product: &Product, now: DateTime<Utc>) -> f64 {
        f64::from(product.popularity) * self.weights.popularity
            + self.price_score(product.price) * self.weights.price
            + Self::rating_score(product.rating) * self.weights.rating
            + Self::sales_score(product.sales_count) * self.weights.sales
            + self.recency_score(product.created_at, now) * self.weights.recency
    }

    /// Multiplicative derating for scarce inventory.
    fn stock_penalty(stock: u32) -> f64 {
        match stock {
            0 => 0.5,
            1..=4 => 0.8,
            _ => 1.0,
        }
    }

    /// Price sub-score: cheaper products score higher.
    ///
    /// Symmetric exponential curve around the reference price: a product at
    /// exactly the reference price scores 50, cheaper products approach 100,
    /// pricier products decay toward 0.
    fn price_score(&self, price: f64) -> f64 {
        // A non-positive price violates the model invariant; degrade the
        // factor to zero instead of dividing by it.
        if price <= 0.0 {
            return 0.0;
        }

        let ratio = self.reference_price / price;
        let score = if ratio >= 1.0 {
            50.0 + 50.0 * (1.0 - (-(ratio - 1.0)).exp())
        } else {
            50.0 * (-(1.0 / ratio - 1.0)).exp()
        };

        clamp_score(score)
    }

    /// Rating sub-score: 0-5 scale normalized to 0-100.
    fn rating_score(rating: f64) -> f64 {
        (rating / 5.0) * 100.0
    }

    /// Sales sub-score: log scale with diminishing returns.
    ///
    /// Calibration: ~10 sales ≈ 25, ~100 ≈ 50, ~1000 ≈ 75, ~10000 ≈ 100.
    fn sales_score(sales_count: u64) -> f64 {
        if sales_count == 0 {
            return 0.0;
        }

        let score = ((sales_count as f64 + 1.0).log10() / 4.0) * 100.0;
        clamp_score(score)
    }

    /// Recency sub-score: boost for products within the recency window.
    ///
    /// Linear decay from 100 to the 50-point baseline over the window;
    /// products created in the future (clock skew, bad data) score 0.
    fn recency_score(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        // Any future creation date gets no boost, even by less than a day;
        // num_days truncates toward zero and would hide sub-day skew.
        if now < created_at {
            return 0.0;
        }

        let age_days = (now - created_at).num_days();
        if age_days >= self.recency_window_days {
            return 50.0;
        }

        100.0 - (age_days as f64 / self.recency_window_days as f64) * 50.0
    }

    /// Break down a product's score factor by factor.
    ///
    /// Computed from the same inputs as `score`, with no extra state; used by
    /// the diagnostics surface for transparency into the ranking.
    pub fn explain(&self, product: &Product, now: DateTime<Utc>) -> RankingExplanation {
        let contribution = |score: f64, weight: f64| FactorContribution {
            score,
            weight,
            contribution: score * weight,
        };

        RankingExplanation {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            final_score: self.score(product, now),
            breakdown: ScoreBreakdown {
                popularity: contribution(f64::from(product.popularity), self.weights.popularity),
                price: contribution(self.price_score(product.price), self.weights.price),
                rating: contribution(Self::rating_score(product.rating), self.weights.rating),
                sales: contribution(Self::sales_score(product.sales_count), self.weights.sales),
                recency: contribution(
                    self.recency_score(product.created_at, now),
                    self.weights.recency,
                ),
            },
            stock_status: StockStatus::from_stock(product.stock),
        }
    }
}
