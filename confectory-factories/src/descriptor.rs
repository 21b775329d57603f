//! Candy descriptor system.
//!
//! A descriptor contains all the static configuration for a candy variant:
//! - Metadata (display name, slug)
//! - The fixed ingredient recipe
//! - Lookup aliases
//! - A constructor hook for the variant's factory

use confectory_core::{CandyFactory, CandyKind, CandyMetadata, GenericFactory};

// ============================================================================
// Candy Descriptor
// ============================================================================

/// Complete descriptor for a candy variant.
///
/// This contains everything needed to work with a variant without touching
/// its concrete factory type: metadata, the recipe, and a hook that builds
/// the matching factory.
pub struct CandyDescriptor {
    /// Candy identifier.
    pub id: CandyKind,
    /// Display metadata.
    pub metadata: CandyMetadata,
    /// Fixed ingredient list, in recipe order.
    pub recipe: &'static [&'static str],
    /// Alternative lookup names.
    pub aliases: &'static [&'static str],
    /// Function to build the factory for this variant.
    pub build_factory: fn() -> Box<dyn CandyFactory>,
}

impl CandyDescriptor {
    /// Creates a new descriptor builder.
    pub fn builder(id: CandyKind) -> CandyDescriptorBuilder {
        CandyDescriptorBuilder::new(id)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        &self.metadata.display_name
    }

    /// Returns the lookup slug.
    pub fn slug(&self) -> &str {
        &self.metadata.slug
    }

    /// Builds the factory for this variant.
    pub fn factory(&self) -> Box<dyn CandyFactory> {
        (self.build_factory)()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`CandyDescriptor`].
pub struct CandyDescriptorBuilder {
    id: CandyKind,
    metadata: Option<CandyMetadata>,
    recipe: Option<&'static [&'static str]>,
    aliases: &'static [&'static str],
    build_factory: fn() -> Box<dyn CandyFactory>,
}

impl CandyDescriptorBuilder {
    /// Creates a new builder for the given candy kind.
    pub fn new(id: CandyKind) -> Self {
        Self {
            id,
            metadata: None,
            recipe: None,
            aliases: &[],
            build_factory: || Box::new(GenericFactory),
        }
    }

    /// Sets the metadata.
    pub fn metadata(mut self, metadata: CandyMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Overrides the ingredient recipe.
    pub fn recipe(mut self, recipe: &'static [&'static str]) -> Self {
        self.recipe = Some(recipe);
        self
    }

    /// Sets the lookup aliases.
    pub fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Sets the factory constructor hook.
    pub fn factory(mut self, build: fn() -> Box<dyn CandyFactory>) -> Self {
        self.build_factory = build;
        self
    }

    /// Builds the descriptor.
    ///
    /// Metadata and recipe fall back to the kind's own defaults when unset.
    pub fn build(self) -> CandyDescriptor {
        CandyDescriptor {
            id: self.id,
            metadata: self
                .metadata
                .unwrap_or_else(|| CandyMetadata::for_kind(self.id)),
            recipe: self.recipe.unwrap_or_else(|| self.id.recipe()),
            aliases: self.aliases,
            build_factory: self.build_factory,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
