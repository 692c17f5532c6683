//! Filter implementations.
//!
//! `LinearFilter` works with any specification; `NaiveFilter` is the
//! hard-coded, one-method-per-criterion approach it replaces.

pub mod linear;
pub mod naive;

// Re-export for convenience
pub use linear::LinearFilter;
pub use naive::NaiveFilter;
