// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Confectory Factories
//!
//! Concrete factory implementations for the Confectory library.
//!
//! This crate contains one module per candy variant. Each module includes:
//!
//! - **Factory**: the [`CandyFactory`](confectory_core::CandyFactory)
//!   implementation producing that variant
//! - **Descriptor**: static configuration (metadata, recipe, aliases)
//!
//! ## Supported Variants
//!
//! | Candy | Slug | Aliases |
//! |----------|---------|---------|
//! | Cookie | `cookie` | `biscuit` |
//! | Lollipop | `lollipop` | `sucker` |
//!
//! ## Usage
//!
//! ```
//! use confectory_factories::CandyRegistry;
//! use confectory_core::CandyKind;
//!
//! // Get a variant by kind
//! let desc = CandyRegistry::get(CandyKind::Cookie).unwrap();
//!
//! // Build its factory and make a candy
//! let factory = desc.factory();
//! let candy = factory.make().unwrap();
//! assert_eq!(candy.name(), "Cookie");
//! ```

pub mod descriptor;
pub mod registry;

// Variant modules (alphabetical)
pub mod cookie;
pub mod lollipop;

// Re-export key types
pub use descriptor::{CandyDescriptor, CandyDescriptorBuilder};
pub use registry::CandyRegistry;

// Re-export variant descriptors
pub use cookie::cookie_descriptor;
pub use lollipop::lollipop_descriptor;

// Re-export factory types for convenience
pub use cookie::CookieFactory;
pub use lollipop::LollipopFactory;
