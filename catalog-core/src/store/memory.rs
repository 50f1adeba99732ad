use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::product::{NewProduct, Product};
use crate::store::ports::{ProductRepository, normalize_sub};

/// In-memory implementation of the `ProductRepository` port.
///
/// Backs HTTP tests and fixtures. Matching semantics mirror the Postgres
/// backend: case-insensitive equality, blank sub-category filters ignored,
/// results ordered by ascending id.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    next_id: i64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a batch of records in one call.
    pub async fn seed(&self, batch: Vec<NewProduct>) -> Result<Vec<Product>> {
        let mut inserted = Vec::with_capacity(batch.len());
        for new in &batch {
            inserted.push(self.insert(new).await?);
        }
        Ok(inserted)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, new: &NewProduct) -> Result<Product> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: new.name.clone(),
            short_description: new.short_description.clone(),
            price: new.price,
            image_url: new.image_url.clone(),
            category: new.category.clone(),
            sub_category: new.sub_category.clone(),
            details: new.details.clone(),
            technical_details: new.technical_details.clone(),
            brand: new.brand.clone(),
            stock: new.stock,
            featured: new.featured,
            created_at: Utc::now(),
        };
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.clone())
    }

    async fn list_featured(&self) -> Result<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product> {
        let inner = self.inner.read().await;
        inner
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn list_by_category(
        &self,
        category: &str,
        sub_category: Option<&str>,
    ) -> Result<Vec<Product>> {
        let sub = normalize_sub(sub_category);
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .iter()
            .filter(|p| eq_ignore_case(&p.category, category))
            .filter(|p| match sub {
                Some(wanted) => p
                    .sub_category
                    .as_deref()
                    .is_some_and(|actual| eq_ignore_case(actual, wanted)),
                None => true,
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn component(name: &str, sub: &str, featured: bool) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            short_description: format!("{name} short"),
            price: Decimal::new(9999, 2),
            image_url: format!("https://cdn.example.com/{name}.png"),
            category: "Components".to_string(),
            sub_category: Some(sub.to_string()),
            details: format!("{name} long details"),
            technical_details: format!("{name} specs"),
            brand: "Vortex".to_string(),
            stock: 10,
            featured,
        }
    }

    async fn seeded() -> InMemoryProductRepository {
        let repo = InMemoryProductRepository::new();
        repo.seed(vec![
            component("ram-kit", "RAM", true),
            component("gpu-card", "GPU", false),
        ])
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = seeded().await;
        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
        assert!(all[0].created_at <= all[1].created_at);
    }

    #[tokio::test]
    async fn featured_contains_only_flagged_products() {
        let repo = seeded().await;
        let featured = repo.list_featured().await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "ram-kit");
        assert!(featured[0].featured);
    }

    #[tokio::test]
    async fn get_by_id_returns_not_found_for_absent_id() {
        let repo = seeded().await;
        let err = repo.get_by_id(3).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(3)));
    }

    #[tokio::test]
    async fn category_match_is_case_insensitive() {
        let repo = seeded().await;
        let both = repo.list_by_category("components", None).await.unwrap();
        assert_eq!(both.len(), 2);
        let upper = repo.list_by_category("COMPONENTS", None).await.unwrap();
        assert_eq!(upper.len(), 2);
    }

    #[tokio::test]
    async fn category_match_is_equality_not_substring() {
        let repo = seeded().await;
        let none = repo.list_by_category("component", None).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn sub_category_narrows_and_stays_a_subset() {
        let repo = seeded().await;
        let all = repo.list_by_category("components", None).await.unwrap();
        let ram = repo
            .list_by_category("components", Some("ram"))
            .await
            .unwrap();
        assert_eq!(ram.len(), 1);
        assert_eq!(ram[0].sub_category.as_deref(), Some("RAM"));
        assert!(ram.iter().all(|p| all.contains(p)));
    }

    #[tokio::test]
    async fn blank_sub_category_is_ignored() {
        let repo = seeded().await;
        let with_none = repo.list_by_category("components", None).await.unwrap();
        let with_blank = repo.list_by_category("components", Some("")).await.unwrap();
        let with_spaces = repo
            .list_by_category("components", Some("  "))
            .await
            .unwrap();
        assert_eq!(with_none, with_blank);
        assert_eq!(with_none, with_spaces);
    }

    #[tokio::test]
    async fn unknown_category_yields_empty_not_error() {
        let repo = seeded().await;
        let result = repo.list_by_category("peripherals", None).await.unwrap();
        assert!(result.is_empty());
    }
}
