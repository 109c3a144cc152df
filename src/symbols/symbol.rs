//! The `Symbol` capability trait and the `SymbolParts` core record.
//!
//! `Symbol` is the minimal surface every program-element symbol exposes,
//! real or synthetic. Default methods answer with the conservative
//! "nothing" for everything an unbound symbol cannot know, so a
//! conformer overrides only what it was constructed with.
//!
//! `SymbolParts` is the immutable record a synthetic conformer embeds by
//! composition to back those overrides; the real, compilation-backed
//! symbol family implements the same trait with no link to it.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use super::attributes::AttributeData;
use super::kinds::{Accessibility, SymbolKind};
use super::modifiers::SymbolModifiers;
use super::type_symbol::TypeSymbol;

/// The minimal capability surface of a program-element symbol.
///
/// `Send + Sync` is required so `Arc<dyn Symbol>` graphs can be read
/// concurrently; every conformer is immutable after construction, which
/// makes the bound trivially satisfiable.
pub trait Symbol: fmt::Debug + Send + Sync {
    /// The coarse kind of this symbol.
    fn kind(&self) -> SymbolKind;

    /// The display name. Empty for unnamed constructs such as array and
    /// pointer types.
    fn name(&self) -> &str;

    /// The enclosing named type, if any.
    ///
    /// This is a structural reference: the container does not own the
    /// member, both are owned by whatever constructed the graph.
    fn containing_type(&self) -> Option<&Arc<dyn TypeSymbol>> {
        None
    }

    /// Declared accessibility.
    fn accessibility(&self) -> Accessibility {
        Accessibility::NotApplicable
    }

    /// Structural modifiers, stored verbatim from construction.
    fn modifiers(&self) -> SymbolModifiers {
        SymbolModifiers::empty()
    }

    /// Attributes attached to this symbol, in attachment order.
    fn attributes(&self) -> &[AttributeData] {
        &[]
    }
}

/// The immutable state shared by every synthetic symbol.
///
/// Constructed once, read forever. Equality is value-based over the
/// fields (the containing type compares by instance, since a containing
/// type reference means "that node", not "any node that looks like it");
/// symbol *identity* is pointer identity and is never derived from this
/// record.
#[derive(Debug, Clone)]
pub struct SymbolParts {
    name: SmolStr,
    containing_type: Option<Arc<dyn TypeSymbol>>,
    accessibility: Accessibility,
    modifiers: SymbolModifiers,
    attributes: Vec<AttributeData>,
}

impl SymbolParts {
    /// Create a fully specified core.
    pub fn new(
        name: impl Into<SmolStr>,
        containing_type: Option<Arc<dyn TypeSymbol>>,
        accessibility: Accessibility,
        modifiers: SymbolModifiers,
        attributes: Vec<AttributeData>,
    ) -> Self {
        Self {
            name: name.into(),
            containing_type,
            accessibility,
            modifiers,
            attributes,
        }
    }

    /// Create a core with just a name; everything else defaults
    /// (no container, accessibility not applicable, no modifiers, no
    /// attributes).
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self::new(
            name,
            None,
            Accessibility::default(),
            SymbolModifiers::empty(),
            Vec::new(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn containing_type(&self) -> Option<&Arc<dyn TypeSymbol>> {
        self.containing_type.as_ref()
    }

    pub fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    pub fn modifiers(&self) -> SymbolModifiers {
        self.modifiers
    }

    pub fn attributes(&self) -> &[AttributeData] {
        &self.attributes
    }
}

impl PartialEq for SymbolParts {
    fn eq(&self, other: &Self) -> bool {
        let same_container = match (&self.containing_type, &other.containing_type) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_container
            && self.name == other.name
            && self.accessibility == other.accessibility
            && self.modifiers == other.modifiers
            && self.attributes == other.attributes
    }
}
