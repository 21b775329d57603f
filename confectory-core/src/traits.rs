//! Trait definitions for Confectory.
//!
//! This module defines the factory trait that concrete factory
//! implementations must satisfy.

use crate::models::{Candy, CandyKind, GENERIC_CANDY_NAME};

/// Trait for factories that produce candy.
///
/// The trait defaults describe the abstract base factory: it is bound to no
/// concrete kind and produces nothing. Concrete implementations override
/// both methods and return a fresh [`Candy`] of exactly their associated
/// kind on every call.
///
/// Factories are stateless; a `None` result from the base factory is an
/// intentional placeholder, not a fault.
pub trait CandyFactory: Send + Sync {
    /// Returns the kind of candy this factory produces, if any.
    fn kind(&self) -> Option<CandyKind> {
        None
    }

    /// Returns the display name for this factory's product.
    fn display_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.display_name(),
            None => GENERIC_CANDY_NAME,
        }
    }

    /// Produces a new candy instance.
    ///
    /// Repeated calls return independent, value-equal instances. The base
    /// factory returns `None`, signaling "no product defined".
    fn make(&self) -> Option<Candy> {
        None
    }
}

/// The abstract base factory, materialized.
///
/// Takes every trait default: no kind, and `make()` yields nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericFactory;

impl CandyFactory for GenericFactory {}

// ============================================================================
// Tests
// ============================================================================
