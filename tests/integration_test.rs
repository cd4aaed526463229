use chrono::Utc;
use product_ranking_service::{
    CatalogProvider, InMemoryCatalog, ProductFilter, RankingEngine, RankingError, SortMode,
};

#[tokio::test]
async fn test_default_listing_workflow() {
    let now = Utc::now();
    let catalog = InMemoryCatalog::seeded(now);
    let engine = RankingEngine::new();

    let snapshot = catalog.snapshot().await;
    let ranked = engine.rank(&snapshot, SortMode::Ranking, &ProductFilter::default(), now);

    assert_eq!(ranked.len(), 15);

    // Contiguous 1..N ranks, scores attached, non-increasing
    for (idx, item) in ranked.iter().enumerate() {
        assert_eq!(item.rank, Some(idx as u32 + 1));
        let score = item.ranking_score.expect("ranking mode attaches scores");
        assert!((0.0..=100.0).contains(&score));
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].ranking_score.unwrap() >= pair[1].ranking_score.unwrap());
    }

    // The only out-of-stock product carries a halved composite; it should
    // land at the bottom of the seeded listing
    assert_eq!(ranked.last().unwrap().product.id, "prod_015");
}

#[tokio::test]
async fn test_alternate_sort_modes() {
    let now = Utc::now();
    let catalog = InMemoryCatalog::seeded(now);
    let engine = RankingEngine::new();
    let snapshot = catalog.snapshot().await;

    let by_price = engine.rank(&snapshot, SortMode::Price, &ProductFilter::default(), now);
    for pair in by_price.windows(2) {
        assert!(pair[0].product.price <= pair[1].product.price);
    }
    assert_eq!(by_price[0].product.id, "prod_014"); // $34.99
    assert!(by_price.iter().all(|r| r.ranking_score.is_none()));

    let by_popularity = engine.rank(&snapshot, SortMode::Popularity, &ProductFilter::default(), now);
    for pair in by_popularity.windows(2) {
        assert!(pair[0].product.popularity >= pair[1].product.popularity);
    }
    assert_eq!(by_popularity[0].product.id, "prod_005"); // popularity 95

    let by_rating = engine.rank(&snapshot, SortMode::Rating, &ProductFilter::default(), now);
    for pair in by_rating.windows(2) {
        assert!(pair[0].product.rating >= pair[1].product.rating);
    }
    assert_eq!(by_rating[0].product.id, "prod_004"); // rating 4.8
}

#[tokio::test]
async fn test_unrecognized_sort_falls_back_to_ranking() {
    let now = Utc::now();
    let catalog = InMemoryCatalog::seeded(now);
    let engine = RankingEngine::new();
    let snapshot = catalog.snapshot().await;

    let mode = SortMode::parse(Some("bestsellers"));
    assert_eq!(mode, SortMode::Ranking);

    let ranked = engine.rank(&snapshot, mode, &ProductFilter::default(), now);
    assert!(ranked.iter().all(|r| r.ranking_score.is_some()));
}

#[tokio::test]
async fn test_filtered_listing() {
    let now = Utc::now();
    let catalog = InMemoryCatalog::seeded(now);
    let engine = RankingEngine::new();
    let snapshot = catalog.snapshot().await;

    let filter = ProductFilter {
        min_price: Some(100.0),
        max_price: Some(300.0),
        min_rating: Some(4.3),
        ..Default::default()
    };
    let ranked = engine.rank(&snapshot, SortMode::Ranking, &filter, now);

    assert!(!ranked.is_empty());
    for item in &ranked {
        assert!(item.product.price >= 100.0);
        assert!(item.product.price <= 300.0);
        assert!(item.product.rating >= 4.3);
    }

    let in_stock = ProductFilter {
        in_stock_only: true,
        ..Default::default()
    };
    let ranked = engine.rank(&snapshot, SortMode::Ranking, &in_stock, now);
    assert_eq!(ranked.len(), 14);

    let furniture = ProductFilter {
        category: Some("Furniture".to_string()),
        ..Default::default()
    };
    let ranked = engine.rank(&snapshot, SortMode::Ranking, &furniture, now);
    assert_eq!(ranked.len(), 2);
}

#[tokio::test]
async fn test_lookup_and_explain() {
    let now = Utc::now();
    let catalog = InMemoryCatalog::seeded(now);
    let engine = RankingEngine::new();
    let snapshot = catalog.snapshot().await;

    // Seeded keyboard matches the hand-checked composite: ~87.35
    let keyboard = engine.lookup(&snapshot, "prod_004", now).unwrap();
    assert_eq!(keyboard.rank, None);
    let score = keyboard.ranking_score.unwrap();
    assert!((score - 87.35).abs() < 0.01, "expected ~87.35, got {}", score);

    let explanation = engine.explain(&snapshot, "prod_004", now).unwrap();
    assert_eq!(explanation.final_score, score);
    assert_eq!(explanation.stock_status.as_str(), "in_stock");

    let missing = engine.lookup(&snapshot, "prod_999", now);
    assert!(matches!(missing, Err(RankingError::NotFound(_))));
}

#[tokio::test]
async fn test_search_workflow() {
    let now = Utc::now();
    let catalog = InMemoryCatalog::seeded(now);
    let engine = RankingEngine::new();
    let snapshot = catalog.snapshot().await;

    // Matches names and descriptions, case-insensitively
    let results = engine.search(&snapshot, "webcam", now);
    assert_eq!(results.len(), 2);
    for (idx, item) in results.iter().enumerate() {
        assert_eq!(item.rank, Some(idx as u32 + 1));
        assert!(item.ranking_score.is_some());
    }

    let results = engine.search(&snapshot, "WIRELESS", now);
    assert!(results.len() >= 3);

    assert!(engine.search(&snapshot, "quantum toaster", now).is_empty());
}

#[tokio::test]
async fn test_repeated_ranking_is_reproducible() {
    let now = Utc::now();
    let catalog = InMemoryCatalog::seeded(now);
    let engine = RankingEngine::new();
    let snapshot = catalog.snapshot().await;

    let first = engine.rank(&snapshot, SortMode::Ranking, &ProductFilter::default(), now);
    let second = engine.rank(&snapshot, SortMode::Ranking, &ProductFilter::default(), now);

    let ids: Vec<&str> = first.iter().map(|r| r.product.id.as_str()).collect();
    let ids_again: Vec<&str> = second.iter().map(|r| r.product.id.as_str()).collect();
    assert_eq!(ids, ids_again);

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.rank, b.rank);
        assert_eq!(a.ranking_score, b.ranking_score);
    }
}
