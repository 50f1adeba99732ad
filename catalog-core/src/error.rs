use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
