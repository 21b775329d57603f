//! Lollipop factory implementation.

use confectory_core::{Candy, CandyFactory, CandyKind};
use tracing::debug;

use crate::descriptor::CandyDescriptor;

/// Factory that produces lollipops, and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LollipopFactory;

impl LollipopFactory {
    /// Creates a new lollipop factory.
    pub fn new() -> Self {
        Self
    }
}

impl CandyFactory for LollipopFactory {
    fn kind(&self) -> Option<CandyKind> {
        Some(CandyKind::Lollipop)
    }

    fn make(&self) -> Option<Candy> {
        debug!(kind = %CandyKind::Lollipop, "making candy");
        Some(Candy::of(CandyKind::Lollipop))
    }
}

/// Returns the descriptor for the lollipop variant.
pub fn lollipop_descriptor() -> CandyDescriptor {
    CandyDescriptor::builder(CandyKind::Lollipop)
        .aliases(&["sucker"])
        .factory(|| Box::new(LollipopFactory::new()))
        .build()
}

// ============================================================================
// Tests
// ============================================================================
