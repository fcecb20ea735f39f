//! Core domain types for the product catalog.
//!
//! A [`Product`] exposes only the predicates the filtering pipeline needs.
//! The underlying storage mirrors the host catalog: plain flags for the
//! bundle/master relationships and a bitmask type code for retail sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier (stock keeping unit)
pub type Sku = String;

/// Bitmask classification of a product.
///
/// Only two bits are interpreted here; every other bit is carried through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCode(pub u32);

impl TypeCode {
    /// Bit marking a retail set
    pub const RETAIL_SET: u32 = 128;
    /// Bit marking a member of a retail set
    pub const PART_OF_RETAIL_SET: u32 = 256;

    pub fn new(code: u32) -> Self {
        Self(code)
    }

    /// True if every bit of `mask` is set.
    pub fn contains(self, mask: u32) -> bool {
        self.0 & mask == mask
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// A non-physical product classification, e.g. a warranty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl ServiceType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A catalog product as seen by the pipeline.
///
/// Products are immutable once handed to a pipeline; the `with_*` methods
/// exist for building fixtures and loading data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub type_code: TypeCode,
    /// Product is a part of some bundle
    pub bundled: bool,
    /// Product is a variation of some master
    pub mastered: bool,
    /// Product is itself a bundle
    pub product_bundle: bool,
    /// Product is itself a master
    pub product_master: bool,
    pub product_item: bool,
    pub offer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
}

impl Product {
    /// A plain product item with no other classification.
    pub fn item(sku: impl Into<Sku>) -> Self {
        Self {
            sku: sku.into(),
            product_item: true,
            ..Self::default()
        }
    }

    /// An offer with no other classification.
    pub fn offer(sku: impl Into<Sku>) -> Self {
        Self {
            sku: sku.into(),
            offer: true,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_type_code(mut self, code: u32) -> Self {
        self.type_code = TypeCode(code);
        self
    }

    pub fn with_bundled(mut self, bundled: bool) -> Self {
        self.bundled = bundled;
        self
    }

    pub fn with_mastered(mut self, mastered: bool) -> Self {
        self.mastered = mastered;
        self
    }

    pub fn with_product_bundle(mut self, product_bundle: bool) -> Self {
        self.product_bundle = product_bundle;
        self
    }

    pub fn with_product_master(mut self, product_master: bool) -> Self {
        self.product_master = product_master;
        self
    }

    pub fn with_product_item(mut self, product_item: bool) -> Self {
        self.product_item = product_item;
        self
    }

    pub fn with_offer(mut self, offer: bool) -> Self {
        self.offer = offer;
        self
    }

    pub fn with_service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = Some(service_type);
        self
    }

    pub fn is_bundled(&self) -> bool {
        self.bundled
    }

    pub fn is_mastered(&self) -> bool {
        self.mastered
    }

    pub fn is_product_bundle(&self) -> bool {
        self.product_bundle
    }

    pub fn is_product_master(&self) -> bool {
        self.product_master
    }

    pub fn is_retail_set(&self) -> bool {
        self.type_code.contains(TypeCode::RETAIL_SET)
    }

    pub fn is_part_of_retail_set(&self) -> bool {
        self.type_code.contains(TypeCode::PART_OF_RETAIL_SET)
    }

    pub fn has_service_type(&self) -> bool {
        self.service_type.is_some()
    }

    pub fn is_product_item(&self) -> bool {
        self.product_item
    }

    pub fn is_offer(&self) -> bool {
        self.offer
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.sku)
        } else {
            write!(f, "{} ({})", self.sku, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_bits() {
        let code = TypeCode::new(128 | 4);
        assert!(code.contains(TypeCode::RETAIL_SET));
        assert!(!code.contains(TypeCode::PART_OF_RETAIL_SET));

        let both = TypeCode::new(128 | 256);
        assert!(both.contains(TypeCode::RETAIL_SET));
        assert!(both.contains(TypeCode::PART_OF_RETAIL_SET));
    }

    #[test]
    fn test_retail_set_predicates() {
        let set = Product::item("SET-1").with_type_code(128);
        assert!(set.is_retail_set());
        assert!(!set.is_part_of_retail_set());

        let member = Product::item("MEMBER-1").with_type_code(256 | 1);
        assert!(!member.is_retail_set());
        assert!(member.is_part_of_retail_set());
    }

    #[test]
    fn test_service_type_predicate() {
        let plain = Product::item("TV-1");
        assert!(!plain.has_service_type());

        let warranty = Product::offer("WARRANTY-1")
            .with_service_type(ServiceType::new("warranty", "Extended warranty"));
        assert!(warranty.has_service_type());
        assert!(warranty.is_offer());
        assert!(!warranty.is_product_item());
    }

    #[test]
    fn test_deserialize_defaults_missing_flags() {
        let product: Product = serde_json::from_str(r#"{"sku": "A-1", "productItem": true}"#).unwrap();
        assert_eq!(product.sku, "A-1");
        assert!(product.is_product_item());
        assert!(!product.is_bundled());
        assert_eq!(product.type_code, TypeCode(0));
        assert!(product.service_type.is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Product::item("A-1").to_string(), "A-1");
        assert_eq!(Product::item("A-1").with_name("Lamp").to_string(), "A-1 (Lamp)");
        assert_eq!(TypeCode(128).to_string(), "0x0080");
    }
}
