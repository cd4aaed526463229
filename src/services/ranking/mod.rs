//! Ranking Module
//!
//! Orders a catalog snapshot for display: applies optional filters, sorts by
//! the selected mode, and annotates each product with its 1-based rank.
//!
//! # Workflow
//! 1. Drop products outside the filter bounds
//! 2. Score with the `ScoreCalculator` (ranking mode only)
//! 3. Stable-sort by the mode's key
//! 4. Attach rank numbers (and scores, in ranking mode)

use crate::models::{Product, ProductFilter, RankedProduct, RankingExplanation, SortMode};
use crate::services::scoring::ScoreCalculator;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Product not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, RankingError>;

/// Ranking engine over immutable catalog snapshots.
///
/// Holds no mutable state; every call is independent and safe to run
/// concurrently with any other.
pub struct RankingEngine {
    calculator: ScoreCalculator,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingEngine {
    pub fn new() -> Self {
        Self {
            calculator: ScoreCalculator::new(),
        }
    }

    pub fn with_calculator(calculator: ScoreCalculator) -> Self {
        Self { calculator }
    }

    /// Rank a catalog snapshot for display.
    ///
    /// Filters are applied before sorting; ties keep their input order, so
    /// identical inputs (including `now`) always reproduce the same listing.
    pub fn rank(
        &self,
        products: &[Product],
        mode: SortMode,
        filter: &ProductFilter,
        now: DateTime<Utc>,
    ) -> Vec<RankedProduct> {
        let candidates: Vec<&Product> =
            products.iter().filter(|p| filter.matches(p)).collect();

        debug!(
            mode = mode.as_str(),
            candidate_count = candidates.len(),
            filtered_out = products.len() - candidates.len(),
            "Ranking catalog snapshot"
        );

        if mode == SortMode::Ranking {
            let mut scored: Vec<(&Product, f64)> = candidates
                .into_iter()
                .map(|p| (p, self.calculator.score(p, now)))
                .collect();

            // Sort by score descending; Vec::sort_by is stable, so ties keep
            // their snapshot order.
            // Note: NaN scores are treated as equal to any valid score
            scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

            return scored
                .into_iter()
                .enumerate()
                .map(|(idx, (product, score))| RankedProduct {
                    product: product.clone(),
                    rank: Some(idx as u32 + 1),
                    ranking_score: Some(score),
                })
                .collect();
        }

        let mut sorted = candidates;
        match mode {
            SortMode::Price => sorted
                .sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)),
            SortMode::Popularity => sorted.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
            SortMode::Rating => sorted
                .sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)),
            SortMode::Ranking => {}
        }

        // Scores are only attached in ranking mode
        sorted
            .into_iter()
            .enumerate()
            .map(|(idx, product)| RankedProduct {
                product: product.clone(),
                rank: Some(idx as u32 + 1),
                ranking_score: None,
            })
            .collect()
    }

    /// Look up a single product by id and attach its ranking score.
    ///
    /// Rank is a property of a listing, not of an individual product, so it
    /// is left unset here. A miss is the engine's only failure condition.
    pub fn lookup(
        &self,
        products: &[Product],
        product_id: &str,
        now: DateTime<Utc>,
    ) -> Result<RankedProduct> {
        let product = products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| RankingError::NotFound(product_id.to_string()))?;

        Ok(RankedProduct {
            product: product.clone(),
            rank: None,
            ranking_score: Some(self.calculator.score(product, now)),
        })
    }

    /// Search products by case-insensitive substring over name/description,
    /// then rank the matches like a default listing.
    pub fn search(
        &self,
        products: &[Product],
        query: &str,
        now: DateTime<Utc>,
    ) -> Vec<RankedProduct> {
        let query_lower = query.to_lowercase();
        let matches: Vec<Product> = products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query_lower)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&query_lower))
            })
            .cloned()
            .collect();

        debug!(
            query = %query,
            match_count = matches.len(),
            "Searching catalog snapshot"
        );

        self.rank(&matches, SortMode::Ranking, &ProductFilter::default(), now)
    }

    /// Per-factor score breakdown for a single product.
    pub fn explain(
        &self,
        products: &[Product],
        product_id: &str,
        now: DateTime<Utc>,
    ) -> Result<RankingExplanation> {
        let product = products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| RankingError::NotFound(product_id.to_string()))?;

        Ok(self.calculator.explain(product, now))
    }
}
