//! # Catalog Crate
//!
//! Product domain types for the filtering pipeline.
//!
//! ## Main Components
//!
//! - **types**: `Product`, `TypeCode` bitmask, `ServiceType`
//! - **paging**: `ProductSequence`, an ordered and optionally paged product list
//! - **loader**: Load products from JSON files
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{loader, ProductSequence};
//! use std::path::Path;
//!
//! let products = loader::load_products(Path::new("data/products.json"))?;
//! let sequence = ProductSequence::from(products);
//! for product in &sequence {
//!     println!("{} retail set: {}", product, product.is_retail_set());
//! }
//! ```

pub mod error;
pub mod types;
pub mod paging;
pub mod loader;

pub use error::{CatalogError, Result};
pub use paging::{ProductRef, ProductSequence};
pub use types::{Product, ServiceType, Sku, TypeCode};
