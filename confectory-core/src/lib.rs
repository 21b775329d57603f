// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Confectory Core
//!
//! Core types, models, and traits for the Confectory library.
//!
//! This crate provides the foundational abstractions used across all other
//! Confectory crates, including:
//!
//! - Domain models (candy kinds, candy values, recipes)
//! - Error types
//! - The factory trait that concrete factory implementations satisfy
//!
//! ## Key Types
//!
//! ### Candy Types
//! - [`CandyKind`] - Enum of all concrete candy variants
//! - [`Candy`] - A candy value with a name and an ingredient recipe
//! - [`CandyMetadata`] - Display info for a candy variant
//!
//! ### Factory Types
//! - [`CandyFactory`] - Trait for factories that produce candy
//! - [`GenericFactory`] - The base factory that produces nothing

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{Candy, CandyKind, CandyMetadata, GENERIC_CANDY_NAME};

// Re-export traits
pub use traits::{CandyFactory, GenericFactory};
