use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
}

/// Engine calibration constants. Factor weights are fixed in code and are
/// deliberately not configurable here.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Price at which the price sub-score equals 50
    pub reference_price: f64,
    /// Days during which new products receive a recency boost
    pub recency_window_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            service: ServiceConfig {
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "product-ranking-service".to_string()),
            },
            ranking: RankingConfig {
                reference_price: env::var("REFERENCE_PRICE")
                    .unwrap_or_else(|_| "500.0".to_string())
                    .parse()
                    .expect("REFERENCE_PRICE must be a valid f64"),
                recency_window_days: env::var("RECENCY_WINDOW_DAYS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("RECENCY_WINDOW_DAYS must be a valid i64"),
            },
        })
    }
}
