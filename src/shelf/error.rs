use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Unknown category: {0} (expected all, electronics or fashion)")]
    UnknownCategory(String),

    #[error("Unknown sort key: {0} (expected featured, price-low, price-high or rating)")]
    UnknownSortKey(String),

    #[error("Invalid price bounds: {min} - {max} (expected 0 to 1000 in steps of 10, min <= max)")]
    InvalidPriceBounds { min: i64, max: i64 },

    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(u32),

    #[error("{0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
