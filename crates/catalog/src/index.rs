//! Catalog loading and validation.
//!
//! Two on-disk formats are accepted:
//! - `*.json`: a JSON array of products (`{"name": ..., "color": ..., "size": ...}`)
//! - anything else: the `name::color::size` line format from [`crate::parser`]

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;

impl Catalog {
    /// Load a catalog from a file
    ///
    /// Steps:
    /// 1. Check the file exists
    /// 2. Parse it according to its extension
    /// 3. Validate the loaded products
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let products = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => parse_json(path)?,
            _ => parser::parse_products(path)?,
        };

        let catalog = Catalog::from(products);
        catalog.validate()?;

        tracing::debug!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Validate catalog integrity
    ///
    /// Every product must have a non-blank name. The line parser already
    /// rejects blank names; JSON input is only checked here.
    pub fn validate(&self) -> Result<()> {
        for (idx, product) in self.products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "product #{} has an empty name",
                    idx + 1
                )));
            }
        }
        Ok(())
    }
}

fn parse_json(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)?;
    let products = serde_json::from_str(&content)?;
    Ok(products)
}
