//! Hard-coded filtering, one method per criterion.
//!
//! Filtering by size, or by color and size, would each need another
//! near-identical method here. Specifications avoid that; this type is
//! kept so the two approaches can be compared.

use catalog::{Color, Product};

/// Filters products with a dedicated method per attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveFilter;

impl NaiveFilter {
    /// Products of the given color, in input order.
    pub fn by_color<'a, I>(&self, items: I, color: Color) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut result = Vec::new();
        for item in items {
            if item.color == color {
                result.push(item);
            }
        }
        result
    }
}
