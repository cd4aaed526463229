pub mod catalog;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use catalog::{CatalogProvider, InMemoryCatalog};
pub use config::Config;
pub use models::{Product, ProductFilter, RankedProduct, SortMode};
pub use services::{RankingEngine, RankingError, ScoreCalculator};
