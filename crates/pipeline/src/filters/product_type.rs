//! Filter products by their catalog type.
//!
//! Seven independent exclusion rules can be switched on through
//! [`ProductTypeExclusions`]. Products surviving every enabled rule are
//! kept only if they are product items or offers.

use crate::config::ProductTypeExclusions;
use crate::traits::Filter;
use anyhow::Result;
use catalog::{Product, ProductRef};
use std::fmt;

/// A single exclusion rule.
///
/// Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionRule {
    BundledProducts,
    MasteredProducts,
    BundleProducts,
    MasterProducts,
    RetailSets,
    PartOfRetailSets,
    ServiceTypes,
}

impl ExclusionRule {
    /// All rules in evaluation order.
    pub const ALL: [ExclusionRule; 7] = [
        ExclusionRule::BundledProducts,
        ExclusionRule::MasteredProducts,
        ExclusionRule::BundleProducts,
        ExclusionRule::MasterProducts,
        ExclusionRule::RetailSets,
        ExclusionRule::PartOfRetailSets,
        ExclusionRule::ServiceTypes,
    ];

    /// Configuration key that enables this rule.
    pub fn config_key(self) -> &'static str {
        match self {
            ExclusionRule::BundledProducts => "ExcludeBundledProducts",
            ExclusionRule::MasteredProducts => "ExcludeMasteredProducts",
            ExclusionRule::BundleProducts => "ExcludeBundleProducts",
            ExclusionRule::MasterProducts => "ExcludeMasterProducts",
            ExclusionRule::RetailSets => "ExcludeRetailSets",
            ExclusionRule::PartOfRetailSets => "ExcludePartOfRetailSets",
            ExclusionRule::ServiceTypes => "ExcludeServiceTypes",
        }
    }

    /// True if `product` falls under this rule.
    pub fn matches(self, product: &Product) -> bool {
        match self {
            ExclusionRule::BundledProducts => product.is_bundled(),
            ExclusionRule::MasteredProducts => product.is_mastered(),
            ExclusionRule::BundleProducts => product.is_product_bundle(),
            ExclusionRule::MasterProducts => product.is_product_master(),
            ExclusionRule::RetailSets => product.is_retail_set(),
            ExclusionRule::PartOfRetailSets => product.is_part_of_retail_set(),
            ExclusionRule::ServiceTypes => product.has_service_type(),
        }
    }
}

impl fmt::Display for ExclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Per-run drop counts, for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub input: usize,
    pub kept: usize,
    /// Drops per rule, indexed like [`ExclusionRule::ALL`]
    pub excluded: [usize; 7],
    /// Survivors of every rule that are neither items nor offers
    pub not_sellable: usize,
}

impl FilterReport {
    pub fn excluded_by(&self, rule: ExclusionRule) -> usize {
        self.excluded[rule as usize]
    }

    pub fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

/// Removes products by catalog type.
///
/// ## Algorithm
/// For each product, in input order:
/// 1. Evaluate enabled rules in [`ExclusionRule::ALL`] order, stopping at the
///    first match (product dropped)
/// 2. Keep the product only if it is a product item or an offer
#[derive(Debug, Clone, Default)]
pub struct ProductTypeFilter {
    exclusions: ProductTypeExclusions,
    rules: Vec<ExclusionRule>,
}

impl ProductTypeFilter {
    pub fn new(exclusions: ProductTypeExclusions) -> Self {
        Self {
            rules: exclusions.enabled_rules(),
            exclusions,
        }
    }

    pub fn exclusions(&self) -> &ProductTypeExclusions {
        &self.exclusions
    }

    /// First enabled rule that excludes `product`, if any.
    pub fn excluding_rule(&self, product: &Product) -> Option<ExclusionRule> {
        self.rules.iter().copied().find(|rule| rule.matches(product))
    }

    /// Filter and collect drop counts.
    pub fn filter_with_report(&self, products: Vec<ProductRef>) -> (Vec<ProductRef>, FilterReport) {
        let mut report = FilterReport {
            input: products.len(),
            ..FilterReport::default()
        };

        let kept: Vec<ProductRef> = products
            .into_iter()
            .filter(|product| {
                if let Some(rule) = self.excluding_rule(product) {
                    tracing::trace!("Excluding {} ({})", product.sku, rule);
                    report.excluded[rule as usize] += 1;
                    return false;
                }
                if product.is_product_item() || product.is_offer() {
                    true
                } else {
                    tracing::trace!("Excluding {} (neither product item nor offer)", product.sku);
                    report.not_sellable += 1;
                    false
                }
            })
            .collect();

        report.kept = kept.len();
        (kept, report)
    }
}

impl Filter for ProductTypeFilter {
    fn name(&self) -> &str {
        "ProductTypeFilter"
    }

    fn apply(&self, products: Vec<ProductRef>) -> Result<Vec<ProductRef>> {
        let (kept, report) = self.filter_with_report(products);
        tracing::debug!(
            "ProductTypeFilter kept {} of {} products ({} not sellable)",
            report.kept,
            report.input,
            report.not_sellable
        );
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ServiceType;
    use std::sync::Arc;

    fn refs(products: Vec<Product>) -> Vec<ProductRef> {
        products.into_iter().map(Arc::new).collect()
    }

    fn skus(products: &[ProductRef]) -> Vec<&str> {
        products.iter().map(|p| p.sku.as_str()).collect()
    }

    fn mixed_catalog() -> Vec<ProductRef> {
        refs(vec![
            Product::item("PLAIN"),
            Product::item("BUNDLED").with_bundled(true),
            Product::item("MASTERED").with_mastered(true),
            Product::item("BUNDLE").with_product_bundle(true),
            Product::item("MASTER").with_product_master(true),
            Product::item("RETAIL-SET").with_type_code(128),
            Product::item("IN-RETAIL-SET").with_type_code(256),
            Product::offer("WARRANTY").with_service_type(ServiceType::new("warranty", "Warranty")),
            Product::offer("OFFER"),
        ])
    }

    #[test]
    fn test_no_flags_keeps_items_and_offers() {
        let filter = ProductTypeFilter::new(ProductTypeExclusions::default());
        let filtered = filter.apply(mixed_catalog()).unwrap();
        assert_eq!(filtered.len(), 9);
    }

    #[test]
    fn test_each_rule_drops_only_its_product() {
        for (rule, sku) in [
            (ExclusionRule::BundledProducts, "BUNDLED"),
            (ExclusionRule::MasteredProducts, "MASTERED"),
            (ExclusionRule::BundleProducts, "BUNDLE"),
            (ExclusionRule::MasterProducts, "MASTER"),
            (ExclusionRule::RetailSets, "RETAIL-SET"),
            (ExclusionRule::PartOfRetailSets, "IN-RETAIL-SET"),
            (ExclusionRule::ServiceTypes, "WARRANTY"),
        ] {
            let filter = ProductTypeFilter::new(ProductTypeExclusions::default().with(rule));
            let filtered = filter.apply(mixed_catalog()).unwrap();
            assert_eq!(filtered.len(), 8, "rule {rule}");
            assert!(!skus(&filtered).contains(&sku), "rule {rule} kept {sku}");
        }
    }

    #[test]
    fn test_neither_item_nor_offer_is_dropped() {
        let filter = ProductTypeFilter::new(ProductTypeExclusions::default());
        let products = refs(vec![
            Product::item("A"),
            Product::item("NOT-SELLABLE").with_product_item(false),
            Product::offer("B"),
        ]);

        let (kept, report) = filter.filter_with_report(products);
        assert_eq!(skus(&kept), vec!["A", "B"]);
        assert_eq!(report.not_sellable, 1);
        assert_eq!(report.dropped(), 1);
    }

    #[test]
    fn test_first_matching_rule_is_reported() {
        let mut exclusions = ProductTypeExclusions::default();
        exclusions.exclude_bundled_products = true;
        exclusions.exclude_retail_sets = true;
        exclusions.exclude_service_types = true;
        let filter = ProductTypeFilter::new(exclusions);

        let both = Product::item("BOTH").with_bundled(true).with_type_code(128);
        assert_eq!(filter.excluding_rule(&both), Some(ExclusionRule::BundledProducts));

        let set_warranty = Product::offer("SW")
            .with_type_code(128)
            .with_service_type(ServiceType::new("warranty", ""));
        assert_eq!(filter.excluding_rule(&set_warranty), Some(ExclusionRule::RetailSets));

        let (_, report) = filter.filter_with_report(refs(vec![both, set_warranty]));
        assert_eq!(report.excluded_by(ExclusionRule::BundledProducts), 1);
        assert_eq!(report.excluded_by(ExclusionRule::RetailSets), 1);
        assert_eq!(report.excluded_by(ExclusionRule::ServiceTypes), 0);
    }

    #[test]
    fn test_disabled_rule_does_not_match() {
        let filter = ProductTypeFilter::new(ProductTypeExclusions::default().with(ExclusionRule::MasterProducts));
        let bundled = Product::item("BUNDLED").with_bundled(true);
        assert_eq!(filter.excluding_rule(&bundled), None);
    }

    #[test]
    fn test_output_shares_input_products() {
        let filter = ProductTypeFilter::new(ProductTypeExclusions::default());
        let input = refs(vec![Product::item("A"), Product::offer("B")]);
        let filtered = filter.apply(input.clone()).unwrap();
        assert!(Arc::ptr_eq(&input[0], &filtered[0]));
        assert!(Arc::ptr_eq(&input[1], &filtered[1]));
    }

    #[test]
    fn test_config_keys() {
        let keys: Vec<&str> = ExclusionRule::ALL.iter().map(|r| r.config_key()).collect();
        assert_eq!(
            keys,
            vec![
                "ExcludeBundledProducts",
                "ExcludeMasteredProducts",
                "ExcludeBundleProducts",
                "ExcludeMasterProducts",
                "ExcludeRetailSets",
                "ExcludePartOfRetailSets",
                "ExcludeServiceTypes",
            ]
        );
    }
}
