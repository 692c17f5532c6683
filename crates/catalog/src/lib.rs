//! # Catalog Crate
//!
//! The record model that the filtering crate works over: products with a
//! name, a [`Color`] and a [`Size`], collected into an ordered [`Catalog`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Product, Color, Size, Catalog)
//! - **parser**: Parse `name::color::size` catalog files
//! - **index**: Load and validate catalogs from disk
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/products.dat"))?;
//! for product in catalog.products() {
//!     println!("{product}");
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Color, Product, Size};
