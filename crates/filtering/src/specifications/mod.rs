//! Specification implementations.
//!
//! Attribute specifications for products plus the combinators that work
//! for any item type.

pub mod and;
pub mod color;
pub mod constant;
pub mod size;

// Re-export for convenience
pub use and::AndSpecification;
pub use color::ColorSpecification;
pub use constant::{AcceptAll, RejectAll};
pub use size::SizeSpecification;
