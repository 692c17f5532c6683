//! Parser for line-oriented catalog files.
//!
//! Format: `name::color::size`, one product per line. Blank lines and
//! lines starting with `#` are skipped:
//!
//! ```text
//! # name::color::size
//! Apple::green::small
//! Tree::green::large
//! ```

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::path::Path;

/// Number of `::` separated fields on a product line
const FIELD_COUNT: usize = 3;

/// Parse a color name, ignoring case.
///
/// Example: "Green" -> Ok(Color::Green)
pub fn parse_color(s: &str) -> Result<Color> {
    match s.trim().to_ascii_lowercase().as_str() {
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "blue" => Ok(Color::Blue),
        _ => Err(CatalogError::InvalidValue {
            field: "color".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse a size name, ignoring case.
pub fn parse_size(s: &str) -> Result<Size> {
    match s.trim().to_ascii_lowercase().as_str() {
        "small" => Ok(Size::Small),
        "medium" => Ok(Size::Medium),
        "large" => Ok(Size::Large),
        _ => Err(CatalogError::InvalidValue {
            field: "size".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse products from the contents of a catalog file.
pub fn parse_products_str(content: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line_trimmed.split("::").map(str::trim).collect();
        if parts.len() != FIELD_COUNT {
            return Err(CatalogError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: parts.len(),
                line: line_no,
            });
        }

        let name = parts[0];
        if name.is_empty() {
            return Err(CatalogError::ParseError {
                line: line_no,
                reason: "Missing name".to_string(),
            });
        }

        let product = Product {
            name: name.to_string(),
            color: parse_color(parts[1]).map_err(|e| CatalogError::ParseError {
                line: line_no,
                reason: e.to_string(),
            })?,
            size: parse_size(parts[2]).map_err(|e| CatalogError::ParseError {
                line: line_no,
                reason: e.to_string(),
            })?,
        };

        products.push(product);
    }

    Ok(products)
}

/// Parse a catalog file in the line format.
pub fn parse_products(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)?;
    parse_products_str(&content)
}
