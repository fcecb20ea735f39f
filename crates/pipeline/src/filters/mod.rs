//! Filter implementations for the product pipeline.

pub mod product_type;

// Re-export for convenience
pub use product_type::{ExclusionRule, FilterReport, ProductTypeFilter};
