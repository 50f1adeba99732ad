use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product as served to clients.
///
/// `id` and `created_at` are assigned by the store on insertion and never
/// change afterwards. Field names serialize in camelCase to match the JSON
/// surface consumed by the storefront client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub short_description: String,
    /// Serialized as a JSON number; clients do arithmetic on it.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
    pub sub_category: Option<String>,
    /// Long-form description shown on the product page.
    pub details: String,
    /// Technical specification text shown on the specs tab.
    pub technical_details: String,
    pub brand: String,
    pub stock: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for inserting a product directly into the store.
///
/// No HTTP route exposes insertion; this exists for seeding, fixtures, and
/// tests. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub short_description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub details: String,
    pub technical_details: String,
    pub brand: String,
    pub stock: i32,
    pub featured: bool,
}
