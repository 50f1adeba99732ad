use async_trait::async_trait;

use crate::error::Result;
use crate::product::{NewProduct, Product};

/// Read-side store port for product records.
///
/// All list operations return products ordered by ascending id so repeated
/// reads are stable. Category and sub-category matching is case-insensitive
/// string equality, never substring search.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a record directly into the store. Not exposed over HTTP; the
    /// store assigns the id and creation timestamp.
    async fn insert(&self, new: &NewProduct) -> Result<Product>;

    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn list_featured(&self) -> Result<Vec<Product>>;

    /// Fetch a single product, or `CatalogError::NotFound` when the id has
    /// no match.
    async fn get_by_id(&self, id: i64) -> Result<Product>;

    /// Products in `category`, further narrowed by `sub_category` when one
    /// is given. A blank sub-category means no narrowing. An empty result
    /// is `Ok`, not an error.
    async fn list_by_category(
        &self,
        category: &str,
        sub_category: Option<&str>,
    ) -> Result<Vec<Product>>;
}

/// Normalize a sub-category filter: absent, empty, and whitespace-only all
/// mean "no filter". Both backends go through this so they agree.
pub fn normalize_sub(sub_category: Option<&str>) -> Option<&str> {
    sub_category
        .map(str::trim)
        .filter(|sub| !sub.is_empty())
}
