//! Catalog Models
//!
//! Records as the catalog API sends them, and the normalized forms the
//! rest of the app consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type CategoryId = u32;
pub type ProductId = u32;

pub const DEFAULT_PRICE: u64 = 500;
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300/c8e6d9/2d8659?text=Tree";
pub const DETAIL_PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/600x300/c8e6d9/2d8659?text=Tree";
pub const DEFAULT_DESCRIPTION: &str = "A beautiful tree for your garden.";
pub const DEFAULT_CATEGORY: &str = "Fruit Tree";
pub const DEFAULT_BENEFITS: &str = "Provides oxygen, improves air quality, and supports wildlife.";
pub const DEFAULT_CONDITIONS: &str = "Grows well in various climates with moderate watering.";

/// Category filter (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Which products the grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Category(CategoryId),
}

/// Product exactly as the API sends it; only `id` and `name` are required
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub conditions: Option<String>,
}

/// Fully populated product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub image: String,
    pub description: String,
    pub category: String,
    pub benefits: String,
    pub conditions: String,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price.as_ref().and_then(parse_price).unwrap_or(DEFAULT_PRICE),
            image: or_default(record.image, PLACEHOLDER_IMAGE),
            description: or_default(record.description, DEFAULT_DESCRIPTION),
            category: or_default(record.category, DEFAULT_CATEGORY),
            benefits: or_default(record.benefits, DEFAULT_BENEFITS),
            conditions: or_default(record.conditions, DEFAULT_CONDITIONS),
        }
    }
}

/// Largest price taken from the API; anything above counts as missing
pub const MAX_PRICE: u64 = 1_000_000_000;

/// Zero, negative, unparsable, non-finite and out-of-range prices count as missing
fn parse_price(value: &Value) -> Option<u64> {
    let amount = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(round_price)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(round_price),
        _ => None,
    }?;
    (1..=MAX_PRICE).contains(&amount).then_some(amount)
}

fn round_price(f: f64) -> Option<u64> {
    let rounded = f.round();
    (1.0..=MAX_PRICE as f64).contains(&rounded).then_some(rounded as u64)
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => default.to_string(),
    }
}
