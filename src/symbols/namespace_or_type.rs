//! The namespace/type discriminator layer.
//!
//! The discriminator is a two-variant enum rather than a pair of
//! booleans, so mutual exclusivity and exhaustiveness hold by
//! construction: a conformer cannot answer "both" or "neither".

use super::symbol::Symbol;

/// Whether a symbol denotes a namespace or a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamespaceOrType {
    Namespace,
    Type,
}

/// A symbol that is either a namespace or a type.
pub trait NamespaceOrTypeSymbol: Symbol {
    /// Which of the two this symbol denotes.
    fn namespace_or_type(&self) -> NamespaceOrType;

    /// Returns true if this symbol denotes a namespace.
    fn is_namespace(&self) -> bool {
        self.namespace_or_type() == NamespaceOrType::Namespace
    }

    /// Returns true if this symbol denotes a type.
    fn is_type(&self) -> bool {
        self.namespace_or_type() == NamespaceOrType::Type
    }
}
