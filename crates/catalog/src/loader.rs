//! Load products from JSON files.
//!
//! The expected format is a JSON array of product objects using camelCase
//! field names, e.g.
//!
//! ```json
//! [
//!   { "sku": "TV-100", "name": "Television", "productItem": true },
//!   { "sku": "SET-1", "typeCode": 128, "productItem": true }
//! ]
//! ```
//!
//! Missing flags default to `false`.

use crate::error::{CatalogError, Result};
use crate::types::Product;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse and validate a JSON array of products.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    validate(&products)?;
    tracing::debug!("Parsed {} products", products.len());
    Ok(products)
}

/// Read and parse a product file.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let products = parse_products(&content)?;
    tracing::info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

fn validate(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for (index, product) in products.iter().enumerate() {
        if product.sku.trim().is_empty() {
            return Err(CatalogError::Validation {
                index,
                reason: "sku must not be empty".to_string(),
            });
        }
        if !seen.insert(product.sku.as_str()) {
            return Err(CatalogError::DuplicateSku {
                sku: product.sku.clone(),
                index,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeCode;

    #[test]
    fn test_parse_products() {
        let json = r#"[
            {"sku": "TV-100", "name": "Television", "productItem": true},
            {"sku": "SET-1", "typeCode": 128, "productItem": true},
            {"sku": "WAR-1", "offer": true, "serviceType": {"id": "warranty"}}
        ]"#;

        let products = parse_products(json).unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Television");
        assert_eq!(products[1].type_code, TypeCode(128));
        assert!(products[1].is_retail_set());
        assert!(products[2].has_service_type());
        assert_eq!(products[2].service_type.as_ref().unwrap().name, "");
    }

    #[test]
    fn test_empty_sku_rejected() {
        let err = parse_products(r#"[{"sku": "A"}, {"sku": "  "}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Validation { index: 1, .. }));
    }

    #[test]
    fn test_duplicate_sku_rejected() {
        let err = parse_products(r#"[{"sku": "A"}, {"sku": "B"}, {"sku": "A"}]"#).unwrap_err();
        match err {
            CatalogError::DuplicateSku { sku, index } => {
                assert_eq!(sku, "A");
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_products("{not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_products(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
