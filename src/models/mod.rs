use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical product record.
///
/// Immutable for the duration of one ranking call; the catalog provider owns
/// mutation and hands the engine a consistent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Price in USD, expected > 0
    pub price: f64,
    /// Popularity score, 0-100
    pub popularity: u32,
    /// Average rating, 0-5
    pub rating: f64,
    /// Total number of sales
    pub sales_count: u64,
    /// Available stock
    pub stock: u32,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Product annotated with its position in a ranked listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedProduct {
    #[serde(flatten)]
    pub product: Product,
    /// 1-based rank in the listing; None for single-product lookups
    pub rank: Option<u32>,
    /// Composite relevance score; only populated for ranking-mode listings
    pub ranking_score: Option<f64>,
}

/// Sort mode for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Ranking,
    Price,
    Popularity,
    Rating,
}

impl SortMode {
    /// Parse a sort key from the query layer.
    ///
    /// Unrecognized or absent values fall back to `Ranking` rather than
    /// erroring; callers never see a validation failure here.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("ranking") => SortMode::Ranking,
            Some("price") => SortMode::Price,
            Some("popularity") => SortMode::Popularity,
            Some("rating") => SortMode::Rating,
            _ => SortMode::Ranking,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Ranking => "ranking",
            SortMode::Price => "price",
            SortMode::Popularity => "popularity",
            SortMode::Rating => "rating",
        }
    }
}

/// Optional filters applied before sorting. All bounds are inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    /// Exact category label match
    pub category: Option<String>,
    /// Keep only products with stock > 0
    #[serde(default)]
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if product.rating < min_rating {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if self.in_stock_only && product.stock == 0 {
            return false;
        }
        true
    }
}

/// Inventory status label used in score explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn from_stock(stock: u32) -> Self {
        if stock > 0 {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }
}

/// One factor's slice of a composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorContribution {
    /// Normalized sub-score, 0-100
    pub score: f64,
    pub weight: f64,
    /// score * weight
    pub contribution: f64,
}

/// Per-factor breakdown of a ranking score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub popularity: FactorContribution,
    pub price: FactorContribution,
    pub rating: FactorContribution,
    pub sales: FactorContribution,
    pub recency: FactorContribution,
}

/// Diagnostic explanation of how a product's ranking score was computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingExplanation {
    pub product_id: String,
    pub product_name: String,
    pub final_score: f64,
    pub breakdown: ScoreBreakdown,
    pub stock_status: StockStatus,
}
