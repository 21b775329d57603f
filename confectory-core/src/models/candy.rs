//! Candy-related types.
//!
//! This module contains the types describing candy variants:
//! - [`CandyKind`] - Enum of concrete candy variants
//! - [`Candy`] - A candy value (name plus ingredient recipe)
//! - [`CandyMetadata`] - Display info for a variant

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Candy Kind
// ============================================================================

/// Concrete candy variants.
///
/// This enum tags the candies a factory can actually produce. The generic
/// base candy has no kind; see [`Candy::generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandyKind {
    /// A baked cookie.
    Cookie,
    /// A hard-sugar lollipop.
    Lollipop,
}

impl CandyKind {
    /// Returns the display name for this candy.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cookie => "Cookie",
            Self::Lollipop => "Lollipop",
        }
    }

    /// Returns the slug for this candy (lowercase, no spaces).
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Cookie => "cookie",
            Self::Lollipop => "lollipop",
        }
    }

    /// Returns the fixed ingredient list for this candy, in recipe order.
    pub fn recipe(&self) -> &'static [&'static str] {
        match self {
            Self::Cookie => &["all-purpose flour", "margarine", "sugar", "eggs", "milk"],
            Self::Lollipop => &["sugar", "artificial flavour"],
        }
    }

    /// Returns all concrete candy kinds.
    pub fn all() -> &'static [CandyKind] {
        &[Self::Cookie, Self::Lollipop]
    }
}

impl fmt::Display for CandyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CandyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

// ============================================================================
// Candy
// ============================================================================

/// Display name of the generic base candy.
pub const GENERIC_CANDY_NAME: &str = "Candy";

/// A candy value: a display name plus an ordered ingredient recipe.
///
/// A `Candy` is immutable after construction and carries no shared state.
/// Two candies made from the same kind are value-equal but independent
/// instances. The generic base candy (no kind, empty recipe) represents
/// "no concrete product selected" and is not an error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candy {
    kind: Option<CandyKind>,
    name: String,
    recipe: Vec<String>,
}

impl Candy {
    /// Creates the generic base candy.
    ///
    /// It knows its name ("Candy") but has no recipe, because it is too
    /// generic to describe any concrete product.
    pub fn generic() -> Self {
        Self {
            kind: None,
            name: GENERIC_CANDY_NAME.to_string(),
            recipe: Vec::new(),
        }
    }

    /// Creates a concrete candy of the given kind, with its fixed recipe.
    pub fn of(kind: CandyKind) -> Self {
        Self {
            kind: Some(kind),
            name: kind.display_name().to_string(),
            recipe: kind.recipe().iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns the concrete kind, or `None` for the generic base candy.
    pub fn kind(&self) -> Option<CandyKind> {
        self.kind
    }

    /// Returns the display name of this candy.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ingredient list, or `None` for the generic base candy.
    pub fn recipe(&self) -> Option<&[String]> {
        if self.kind.is_some() {
            Some(&self.recipe)
        } else {
            None
        }
    }

    /// Returns true if this is the generic base candy.
    pub fn is_generic(&self) -> bool {
        self.kind.is_none()
    }

    /// Validates internal consistency of this candy value.
    ///
    /// A concrete candy must have a non-empty name and a non-empty recipe;
    /// the generic candy must have an empty recipe.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::InvalidData("candy has no name".to_string()));
        }
        match self.kind {
            Some(kind) if self.recipe.is_empty() => Err(CoreError::InvalidData(format!(
                "{} has an empty recipe",
                kind.display_name()
            ))),
            None if !self.recipe.is_empty() => Err(CoreError::InvalidData(
                "generic candy must not have a recipe".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Candy Metadata
// ============================================================================

/// Display metadata for a candy variant.
///
/// This is static configuration describing how a variant is presented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandyMetadata {
    /// The candy this metadata describes.
    pub id: CandyKind,
    /// Display name.
    pub display_name: String,
    /// Lookup slug (lowercase, no spaces).
    pub slug: String,
}

impl CandyMetadata {
    /// Creates default metadata for a candy kind.
    pub fn for_kind(kind: CandyKind) -> Self {
        Self {
            id: kind,
            display_name: kind.display_name().to_string(),
            slug: kind.slug().to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candy_kind_display_name() {
        assert_eq!(CandyKind::Cookie.display_name(), "Cookie");
        assert_eq!(CandyKind::Lollipop.display_name(), "Lollipop");
    }

    #[test]
    fn test_candy_kind_recipes_non_empty() {
        for kind in CandyKind::all() {
            assert!(!kind.recipe().is_empty(), "{:?} has no recipe", kind);
        }
    }

    #[test]
    fn test_candy_kind_from_str() {
        assert_eq!("cookie".parse::<CandyKind>().unwrap(), CandyKind::Cookie);
        assert_eq!("Lollipop".parse::<CandyKind>().unwrap(), CandyKind::Lollipop);
        assert!("gumdrop".parse::<CandyKind>().is_err());
    }

    #[test]
    fn test_generic_candy_knows_its_name() {
        let candy = Candy::generic();
        assert_eq!(candy.name(), "Candy");
        assert!(candy.is_generic());
    }

    #[test]
    fn test_generic_candy_has_no_recipe() {
        // Too generic to describe any concrete product
        assert_eq!(Candy::generic().recipe(), None);
    }

    #[test]
    fn test_cookie_candy_fields() {
        let cookie = Candy::of(CandyKind::Cookie);
        assert_eq!(cookie.name(), "Cookie");
        assert_eq!(
            cookie.recipe().unwrap(),
            &["all-purpose flour", "margarine", "sugar", "eggs", "milk"]
        );
    }

    #[test]
    fn test_lollipop_candy_fields() {
        let lollipop = Candy::of(CandyKind::Lollipop);
        assert_eq!(lollipop.name(), "Lollipop");
        assert_eq!(lollipop.recipe().unwrap(), &["sugar", "artificial flavour"]);
    }

    #[test]
    fn test_candies_are_value_equal_not_shared() {
        let a = Candy::of(CandyKind::Cookie);
        let b = Candy::of(CandyKind::Cookie);
        assert_eq!(a, b);
        assert_ne!(a, Candy::of(CandyKind::Lollipop));
        assert_ne!(a, Candy::generic());
    }

    #[test]
    fn test_candy_validate() {
        assert!(Candy::generic().validate().is_ok());
        for kind in CandyKind::all() {
            assert!(Candy::of(*kind).validate().is_ok());
        }
    }

    #[test]
    fn test_metadata_for_kind() {
        let meta = CandyMetadata::for_kind(CandyKind::Lollipop);
        assert_eq!(meta.id, CandyKind::Lollipop);
        assert_eq!(meta.display_name, "Lollipop");
        assert_eq!(meta.slug, "lollipop");
    }
}
