use product_ranking_service::{
    CatalogProvider, Config, InMemoryCatalog, ProductFilter, RankingEngine, ScoreCalculator,
    SortMode,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Load config
    let config = Config::from_env()?;

    info!("Starting {}", config.service.service_name);

    let calculator = ScoreCalculator::with_calibration(
        config.ranking.reference_price,
        config.ranking.recency_window_days,
    );
    let engine = RankingEngine::with_calculator(calculator);

    let now = chrono::Utc::now();
    let catalog = InMemoryCatalog::seeded(now);
    let snapshot = catalog.snapshot().await;

    let mode = SortMode::parse(std::env::var("SORT_BY").ok().as_deref());
    let ranked = engine.rank(&snapshot, mode, &ProductFilter::default(), now);

    info!(
        mode = mode.as_str(),
        product_count = ranked.len(),
        top_score = ranked.first().and_then(|r| r.ranking_score),
        "Catalog ranked"
    );

    println!("{}", serde_json::to_string_pretty(&ranked)?);

    Ok(())
}
