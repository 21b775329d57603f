//! Domain models for Confectory.
//!
//! This module contains the core data structures representing candy
//! variants and candy values.
//!
//! ## Submodules
//!
//! - [`candy`] - Candy types (`CandyKind`, `Candy`, `CandyMetadata`)

mod candy;

// Re-export everything at the models level
pub use candy::{Candy, CandyKind, CandyMetadata, GENERIC_CANDY_NAME};

#[cfg(test)]
mod serde_tests;
