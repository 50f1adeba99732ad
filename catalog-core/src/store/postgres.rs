use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::product::{NewProduct, Product};
use crate::store::ports::{ProductRepository, normalize_sub};

/// PostgreSQL-backed implementation of the `ProductRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

const PRODUCT_COLUMNS: &str = "id, name, short_description, price, image_url, \
     category, sub_category, details, technical_details, brand, stock, \
     featured, created_at";

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, new: &NewProduct) -> Result<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (
                name, short_description, price, image_url,
                category, sub_category, details, technical_details,
                brand, stock, featured
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, short_description, price, image_url,
                      category, sub_category, details, technical_details,
                      brand, stock, featured, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.short_description)
        .bind(new.price)
        .bind(&new.image_url)
        .bind(&new.category)
        .bind(new.sub_category.as_deref())
        .bind(&new.details)
        .bind(&new.technical_details)
        .bind(&new.brand)
        .bind(new.stock)
        .bind(new.featured)
        .fetch_one(self.pool())
        .await
        .map_err(|e| CatalogError::Database(format!("Failed to insert product: {}", e)))?;

        let product: Product = row.into();
        info!("Inserted product: {} ({})", product.name, product.id);
        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(|e| CatalogError::Database(format!("Failed to list products: {}", e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_featured(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE featured ORDER BY id"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(|e| CatalogError::Database(format!("Failed to list featured products: {}", e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| CatalogError::Database(format!("Failed to get product by id: {}", e)))?;

        row.map(Into::into).ok_or(CatalogError::NotFound(id))
    }

    async fn list_by_category(
        &self,
        category: &str,
        sub_category: Option<&str>,
    ) -> Result<Vec<Product>> {
        let rows = match normalize_sub(sub_category) {
            Some(sub) => {
                sqlx::query_as::<_, ProductRow>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     WHERE LOWER(category) = LOWER($1) \
                       AND LOWER(sub_category) = LOWER($2) \
                     ORDER BY id"
                ))
                .bind(category)
                .bind(sub)
                .fetch_all(self.pool())
                .await
            }
            None => {
                sqlx::query_as::<_, ProductRow>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     WHERE LOWER(category) = LOWER($1) \
                     ORDER BY id"
                ))
                .bind(category)
                .fetch_all(self.pool())
                .await
            }
        }
        .map_err(|e| CatalogError::Database(format!("Failed to list products by category: {}", e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    short_description: String,
    price: Decimal,
    image_url: String,
    category: String,
    sub_category: Option<String>,
    details: String,
    technical_details: String,
    brand: String,
    stock: i32,
    featured: bool,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            short_description: row.short_description,
            price: row.price,
            image_url: row.image_url,
            category: row.category,
            sub_category: row.sub_category,
            details: row.details,
            technical_details: row.technical_details,
            brand: row.brand,
            stock: row.stock,
            featured: row.featured,
            created_at: row.created_at,
        }
    }
}
