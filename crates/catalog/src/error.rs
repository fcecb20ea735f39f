//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating product data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a product file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Product file is not valid JSON or doesn't match the product schema
    #[error("Invalid product JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A product record failed validation
    #[error("Validation failed for product at index {index}: {reason}")]
    Validation { index: usize, reason: String },

    /// Two records share the same SKU
    #[error("Duplicate SKU '{sku}' at index {index}")]
    DuplicateSku { sku: String, index: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
