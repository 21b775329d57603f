//! Cookie factory implementation.

use confectory_core::{Candy, CandyFactory, CandyKind};
use tracing::debug;

use crate::descriptor::CandyDescriptor;

/// Factory that produces cookies, and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieFactory;

impl CookieFactory {
    /// Creates a new cookie factory.
    pub fn new() -> Self {
        Self
    }
}

impl CandyFactory for CookieFactory {
    fn kind(&self) -> Option<CandyKind> {
        Some(CandyKind::Cookie)
    }

    fn make(&self) -> Option<Candy> {
        debug!(kind = %CandyKind::Cookie, "making candy");
        Some(Candy::of(CandyKind::Cookie))
    }
}

/// Returns the descriptor for the cookie variant.
pub fn cookie_descriptor() -> CandyDescriptor {
    CandyDescriptor::builder(CandyKind::Cookie)
        .aliases(&["biscuit"])
        .factory(|| Box::new(CookieFactory::new()))
        .build()
}

// ============================================================================
// Tests
// ============================================================================
