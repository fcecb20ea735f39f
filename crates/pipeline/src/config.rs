//! Pipelet configuration.
//!
//! Configuration arrives as a flat string-to-string map, usually from a
//! properties file. Boolean values are parsed leniently: only a
//! case-insensitive `"true"` enables a flag.

use crate::error::{PipeletError, Result};
use crate::filters::ExclusionRule;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Raw string configuration of a pipelet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipeletConfig {
    values: HashMap<String, String>,
}

impl PipeletConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from key/value pairs; later pairs win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Read a boolean flag; absent or unparseable values are `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).is_some_and(parse_bool)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge `other` into this config, overriding existing keys.
    pub fn merge(&mut self, other: PipeletConfig) {
        self.values.extend(other.values);
    }

    /// Parse `Key=Value` properties text.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. Keys and
    /// values are trimmed.
    pub fn parse_properties(text: &str) -> Result<Self> {
        let mut config = Self::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| PipeletError::ConfigParse {
                line: idx + 1,
                reason: format!("expected Key=Value, found '{line}'"),
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(PipeletError::ConfigParse {
                    line: idx + 1,
                    reason: "empty key".to_string(),
                });
            }
            config.insert(key, value.trim());
        }
        Ok(config)
    }

    pub fn load_properties(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::parse_properties(&text)?;
        tracing::debug!("Loaded {} config values from {}", config.len(), path.display());
        Ok(config)
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// The product-type exclusion flags, read once from a [`PipeletConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductTypeExclusions {
    pub exclude_bundle_products: bool,
    pub exclude_bundled_products: bool,
    pub exclude_master_products: bool,
    pub exclude_mastered_products: bool,
    pub exclude_retail_sets: bool,
    pub exclude_part_of_retail_sets: bool,
    pub exclude_service_types: bool,
}

impl ProductTypeExclusions {
    pub fn from_config(config: &PipeletConfig) -> Self {
        let mut exclusions = Self::default();
        for rule in ExclusionRule::ALL {
            exclusions.set(rule, config.get_bool(rule.config_key()));
        }
        exclusions
    }

    pub fn is_enabled(&self, rule: ExclusionRule) -> bool {
        match rule {
            ExclusionRule::BundledProducts => self.exclude_bundled_products,
            ExclusionRule::MasteredProducts => self.exclude_mastered_products,
            ExclusionRule::BundleProducts => self.exclude_bundle_products,
            ExclusionRule::MasterProducts => self.exclude_master_products,
            ExclusionRule::RetailSets => self.exclude_retail_sets,
            ExclusionRule::PartOfRetailSets => self.exclude_part_of_retail_sets,
            ExclusionRule::ServiceTypes => self.exclude_service_types,
        }
    }

    pub fn set(&mut self, rule: ExclusionRule, enabled: bool) {
        let flag = match rule {
            ExclusionRule::BundledProducts => &mut self.exclude_bundled_products,
            ExclusionRule::MasteredProducts => &mut self.exclude_mastered_products,
            ExclusionRule::BundleProducts => &mut self.exclude_bundle_products,
            ExclusionRule::MasterProducts => &mut self.exclude_master_products,
            ExclusionRule::RetailSets => &mut self.exclude_retail_sets,
            ExclusionRule::PartOfRetailSets => &mut self.exclude_part_of_retail_sets,
            ExclusionRule::ServiceTypes => &mut self.exclude_service_types,
        };
        *flag = enabled;
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, rule: ExclusionRule) -> Self {
        self.set(rule, true);
        self
    }

    /// Enabled rules in evaluation order.
    pub fn enabled_rules(&self) -> Vec<ExclusionRule> {
        ExclusionRule::ALL
            .into_iter()
            .filter(|rule| self.is_enabled(*rule))
            .collect()
    }
}
