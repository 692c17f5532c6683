//! Specification-based filtering of catalog products.
//!
//! This crate provides:
//! - Specification trait and implementations (color, size, conjunction, constants)
//! - Filter trait with a single-pass LinearFilter
//! - FilterPipeline for applying several specifications in stages
//!
//! ## Architecture
//! Filtering is split in two so it stays open to extension:
//! 1. A specification answers "does this one item qualify?"
//! 2. A filter scans a sequence and keeps the qualifying items
//!
//! Adding a criterion means adding a specification; filters never change.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, Color, Size};
//! use filtering::specifications::*;
//! use filtering::{Filter, LinearFilter};
//!
//! let catalog = Catalog::sample();
//! let green = ColorSpecification::new(Color::Green);
//! let large = SizeSpecification::new(Size::Large);
//!
//! let green_things = LinearFilter.filter(catalog.products(), &green);
//! let green_and_large = LinearFilter.filter(catalog.products(), &AndSpecification::new(&green, &large));
//! ```

pub mod traits;
pub mod specifications;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::{Filter, Specification};
pub use filters::{LinearFilter, NaiveFilter};
pub use filter_pipeline::FilterPipeline;
