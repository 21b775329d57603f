//! Candy registry for managing all candy descriptors.
//!
//! The registry provides static access to all candy configurations and is
//! the central point for looking up variants and dispatching to factories.

use confectory_core::{CandyFactory, CandyKind};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::cookie::cookie_descriptor;
use crate::descriptor::CandyDescriptor;
use crate::lollipop::lollipop_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all candy descriptors.
static DESCRIPTORS: OnceLock<Vec<CandyDescriptor>> = OnceLock::new();

/// Static storage for slug to candy kind mapping.
static SLUG_MAP: OnceLock<HashMap<String, CandyKind>> = OnceLock::new();

/// Initializes all candy descriptors.
fn init_descriptors() -> Vec<CandyDescriptor> {
    debug!("initializing candy registry");
    vec![cookie_descriptor(), lollipop_descriptor()]
}

/// Builds the slug to candy kind mapping.
fn build_slug_map(descriptors: &[CandyDescriptor]) -> HashMap<String, CandyKind> {
    let mut map = HashMap::new();

    for desc in descriptors {
        // Primary slug
        map.insert(desc.slug().to_string(), desc.id);

        // Aliases
        for alias in desc.aliases {
            map.insert((*alias).to_string(), desc.id);
        }
    }

    map
}

// ============================================================================
// Candy Registry
// ============================================================================

/// Global registry of all candy descriptors.
///
/// The registry is initialized lazily on first access and provides
/// thread-safe access to candy configurations.
pub struct CandyRegistry;

impl CandyRegistry {
    /// Returns all candy descriptors.
    pub fn all() -> &'static [CandyDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets a candy descriptor by kind.
    pub fn get(id: CandyKind) -> Option<&'static CandyDescriptor> {
        Self::all().iter().find(|d| d.id == id)
    }

    /// Returns the slug to candy kind mapping.
    pub fn slug_map() -> &'static HashMap<String, CandyKind> {
        SLUG_MAP.get_or_init(|| build_slug_map(Self::all()))
    }

    /// Looks up a candy descriptor by slug or alias.
    pub fn get_by_slug(name: &str) -> Option<&'static CandyDescriptor> {
        let kind = Self::slug_map().get(name)?;
        Self::get(*kind)
    }

    /// Builds the factory for the given candy kind.
    ///
    /// This is the enum-to-constructor dispatch: the returned factory
    /// produces exactly candies of `id`.
    pub fn factory_for(id: CandyKind) -> Option<Box<dyn CandyFactory>> {
        Self::get(id).map(CandyDescriptor::factory)
    }

    /// Returns the number of registered candy variants.
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Returns all registered candy kinds.
    pub fn kinds() -> Vec<CandyKind> {
        Self::all().iter().map(|d| d.id).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
