// Catalog provider boundary.
//
// The ranking engine never reads storage directly: a provider hands it an
// owned, internally consistent snapshot per call. Concurrent catalog mutation
// is the provider's problem, not the engine's.

use crate::models::Product;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

/// Source of catalog snapshots for the ranking engine.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Return an owned snapshot of the catalog, consistent for the duration
    /// of one ranking call.
    async fn snapshot(&self) -> Vec<Product>;
}

/// In-memory catalog seeded with sample products.
///
/// Stands in for a real storage-backed provider in the demo binary and the
/// integration tests. Product ages are fixed relative to the instant the
/// catalog was seeded, so tests seed with an injected `now`.
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Seed the sample catalog, with product ages relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            products: seed_products(now),
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    popularity: u32,
    rating: f64,
    sales_count: u64,
    stock: u32,
    category: &'static str,
    image_url: &'static str,
    age_days: i64,
}

fn seed_products(now: DateTime<Utc>) -> Vec<Product> {
    SEEDS
        .iter()
        .map(|s| Product {
            id: s.id.to_string(),
            name: s.name.to_string(),
            description: Some(s.description.to_string()),
            price: s.price,
            popularity: s.popularity,
            rating: s.rating,
            sales_count: s.sales_count,
            stock: s.stock,
            category: s.category.to_string(),
            image_url: Some(s.image_url.to_string()),
            created_at: now - Duration::days(s.age_days),
        })
        .collect()
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "prod_001",
        name: "Wireless Noise-Cancelling Headphones",
        description: "Premium over-ear headphones with active noise cancellation and 30-hour battery life",
        price: 299.99,
        popularity: 92,
        rating: 4.7,
        sales_count: 2450,
        stock: 34,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e",
        age_days: 45,
    },
    Seed {
        id: "prod_002",
        name: "Ergonomic Office Chair",
        description: "Adjustable lumbar support, breathable mesh back, 360-degree swivel",
        price: 349.99,
        popularity: 78,
        rating: 4.5,
        sales_count: 890,
        stock: 12,
        category: "Furniture",
        image_url: "https://images.unsplash.com/photo-1580480055273-228ff5388ef8",
        age_days: 120,
    },
    Seed {
        id: "prod_003",
        name: "4K Ultra HD Webcam",
        description: "Professional webcam with auto-focus, dual microphones, and LED ring light",
        price: 129.99,
        popularity: 85,
        rating: 4.3,
        sales_count: 1560,
        stock: 67,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1587825140708-dfaf72ae4b04",
        age_days: 15,
    },
    Seed {
        id: "prod_004",
        name: "Mechanical Gaming Keyboard",
        description: "RGB backlit, Cherry MX switches, programmable macro keys",
        price: 159.99,
        popularity: 88,
        rating: 4.8,
        sales_count: 3200,
        stock: 89,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1595225476474-87563907a212",
        age_days: 200,
    },
    Seed {
        id: "prod_005",
        name: "Smart Watch Series X",
        description: "Fitness tracking, heart rate monitor, GPS, 7-day battery, waterproof",
        price: 399.99,
        popularity: 95,
        rating: 4.6,
        sales_count: 5600,
        stock: 23,
        category: "Wearables",
        image_url: "https://images.unsplash.com/photo-1523275335684-37898b6baf30",
        age_days: 8,
    },
    Seed {
        id: "prod_006",
        name: "Portable SSD 2TB",
        description: "High-speed external storage, USB-C 3.2, compact design",
        price: 189.99,
        popularity: 72,
        rating: 4.4,
        sales_count: 980,
        stock: 156,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1597872200969-2b65d56bd16b",
        age_days: 90,
    },
    Seed {
        id: "prod_007",
        name: "Wireless Mouse",
        description: "Ergonomic design, 6 programmable buttons, 18-month battery life",
        price: 49.99,
        popularity: 81,
        rating: 4.2,
        sales_count: 4500,
        stock: 234,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46",
        age_days: 300,
    },
    Seed {
        id: "prod_008",
        name: "USB-C Docking Station",
        description: "11-in-1 hub with 4K HDMI, SD card readers, 100W power delivery",
        price: 89.99,
        popularity: 76,
        rating: 4.1,
        sales_count: 720,
        stock: 45,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1625948515291-69613efd103f",
        age_days: 60,
    },
    Seed {
        id: "prod_009",
        name: "Standing Desk Converter",
        description: "Height-adjustable, fits dual monitors, easy gas spring lift",
        price: 279.99,
        popularity: 69,
        rating: 4.3,
        sales_count: 450,
        stock: 8,
        category: "Furniture",
        image_url: "https://images.unsplash.com/photo-1595515106969-1ce29566ff1c",
        age_days: 180,
    },
    Seed {
        id: "prod_010",
        name: "Laptop Backpack",
        description: "Water-resistant, TSA-friendly, fits up to 17-inch laptops",
        price: 59.99,
        popularity: 83,
        rating: 4.5,
        sales_count: 2100,
        stock: 178,
        category: "Accessories",
        image_url: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62",
        age_days: 40,
    },
    Seed {
        id: "prod_011",
        name: "Monitor Light Bar",
        description: "Space-saving desk lamp, auto-dimming, reduces screen glare",
        price: 99.99,
        popularity: 74,
        rating: 4.6,
        sales_count: 890,
        stock: 67,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1507473885765-e6ed057f782c",
        age_days: 25,
    },
    Seed {
        id: "prod_012",
        name: "Bluetooth Speaker",
        description: "360-degree sound, waterproof IPX7, 20-hour playtime",
        price: 79.99,
        popularity: 87,
        rating: 4.4,
        sales_count: 3400,
        stock: 123,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1",
        age_days: 150,
    },
    Seed {
        id: "prod_013",
        name: "Premium Coffee Maker",
        description: "Programmable, thermal carafe, auto-shutoff, 12-cup capacity",
        price: 149.99,
        popularity: 70,
        rating: 4.2,
        sales_count: 670,
        stock: 34,
        category: "Appliances",
        image_url: "https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6",
        age_days: 220,
    },
    Seed {
        id: "prod_014",
        name: "Wireless Charging Pad",
        description: "Fast 15W charging, compatible with all Qi devices, LED indicator",
        price: 34.99,
        popularity: 79,
        rating: 4.0,
        sales_count: 1890,
        stock: 267,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1591290619762-d1e80fec4a47",
        age_days: 100,
    },
    Seed {
        id: "prod_015",
        name: "HD Webcam with Tripod",
        description: "1080p 60fps, wide-angle lens, built-in mic, plug-and-play",
        price: 69.99,
        popularity: 82,
        rating: 4.3,
        sales_count: 1240,
        stock: 0,
        category: "Electronics",
        image_url: "https://images.unsplash.com/photo-1560350157-e5d6ab5bbde8",
        age_days: 75,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_snapshot() {
        let now = Utc::now();
        let catalog = InMemoryCatalog::seeded(now);

        let snapshot = catalog.snapshot().await;
        assert_eq!(snapshot.len(), 15);
        assert_eq!(snapshot[0].id, "prod_001");

        // Ages are relative to the injected instant
        let keyboard = snapshot.iter().find(|p| p.id == "prod_004").unwrap();
        assert_eq!((now - keyboard.created_at).num_days(), 200);

        // Exactly one seeded product is out of stock
        assert_eq!(snapshot.iter().filter(|p| p.stock == 0).count(), 1);
    }

    #[tokio::test]
    async fn test_snapshots_are_independent() {
        let catalog = InMemoryCatalog::seeded(Utc::now());

        let mut first = catalog.snapshot().await;
        first[0].stock = 0;

        let second = catalog.snapshot().await;
        assert_ne!(second[0].stock, 0);
    }
}
